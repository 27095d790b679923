//! Request handling for the three Linkboard routes.
//!
//! Independent of any HTTP framework so it can be unit-tested directly:
//! `GET /` becomes [`handle_index`], `POST /add` becomes [`handle_add`] and
//! `POST /delete/{id}` becomes [`handle_delete`]. Writes answer with a
//! redirect location that preserves the listing state.

use serde::Deserialize;
use url::form_urlencoded;

use crate::app::App;
use crate::services::query_builder::{build_listing, ListingQuery};
use crate::types::errors::{StoreError, SubmitError, ValidationError};
use crate::types::listing::ListingPage;

/// Query parameters of `GET /`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    pub sort: Option<String>,
    pub category: Option<String>,
    pub error: Option<String>,
}

/// Form fields of `POST /add`. Missing fields count as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddLinkForm {
    pub url: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub sort: Option<String>,
    pub category: Option<String>,
}

/// Listing state carried by `POST /delete/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReturnState {
    pub sort: Option<String>,
    pub category: Option<String>,
}

/// `/?sort=..&category=..[&error=..]` built from normalized values only.
pub fn redirect_location(query: &ListingQuery, error: Option<ValidationError>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair("sort", query.sort.as_key());
    serializer.append_pair("category", &query.filter.as_param());
    if let Some(error) = error {
        serializer.append_pair("error", error.code());
    }
    format!("/?{}", serializer.finish())
}

/// Builds the listing page. Unknown `error` codes are dropped.
pub fn handle_index(app: &App, params: &ListingParams) -> Result<ListingPage, StoreError> {
    let query = build_listing(params.sort.as_deref(), params.category.as_deref());
    let error = params.error.as_deref().and_then(ValidationError::from_code);
    app.listing(&query, error)
}

/// Validates and stores a submission, then redirects back to the listing.
///
/// Validation failures are not errors here: they become an `error` parameter
/// on the redirect. Only store failures propagate.
pub fn handle_add(app: &App, form: &AddLinkForm) -> Result<String, StoreError> {
    let query = build_listing(form.sort.as_deref(), form.category.as_deref());

    let outcome = app.submit_link(
        form.url.as_deref().unwrap_or_default(),
        form.description.as_deref().unwrap_or_default(),
        form.category_id.as_deref().unwrap_or_default(),
    );

    match outcome {
        Ok(_) => Ok(redirect_location(&query, None)),
        Err(SubmitError::Invalid(reason)) => Ok(redirect_location(&query, Some(reason))),
        Err(SubmitError::Store(e)) => Err(e),
    }
}

/// Deletes the link if present, then redirects back to the listing.
pub fn handle_delete(app: &App, id: i64, state: &ReturnState) -> Result<String, StoreError> {
    app.delete_link(id)?;
    let query = build_listing(state.sort.as_deref(), state.category.as_deref());
    Ok(redirect_location(&query, None))
}
