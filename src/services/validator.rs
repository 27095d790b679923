//! Input Validator — normalizes link submissions and rejects malformed ones.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::managers::link_store::LinkStoreTrait;
use crate::services::query_builder::parse_identity;
use crate::types::errors::{SubmitError, ValidationError};
use crate::types::link::ValidatedLink;

/// Descriptions longer than this are cut before tags are stripped.
pub const MAX_DESCRIPTION_CHARS: usize = 250;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Checks that `raw` is a non-empty absolute `http`/`https` URL with a host.
///
/// Returns the trimmed input, not the re-serialized URL, so the stored value
/// is exactly what the user typed. Input the parser would silently repair
/// (control characters, inner whitespace, backslashes, no `//` after the
/// scheme) is rejected, so the stored text is always the text that was checked.
pub fn validate_url(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    if trimmed
        .chars()
        .any(|c| c.is_control() || c.is_whitespace() || c == '\\')
    {
        return Err(ValidationError::InvalidUrlFormat);
    }

    let parsed = Url::parse(trimmed).map_err(|_| ValidationError::InvalidUrlFormat)?;
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ValidationError::InvalidUrlFormat);
    }

    // The parsed scheme is lowercased but keeps its length.
    let has_authority = trimmed
        .get(parsed.scheme().len()..)
        .map_or(false, |rest| rest.starts_with("://"));
    if !has_authority {
        return Err(ValidationError::InvalidUrlFormat);
    }

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        _ => Err(ValidationError::DisallowedScheme),
    }
}

/// Removes every `<...>` run. Not an HTML parser: encoded payloads such as
/// `&lt;b&gt;` pass through untouched.
pub fn strip_tags(input: &str) -> String {
    TAG_PATTERN.replace_all(input, "").into_owned()
}

/// Truncates to [`MAX_DESCRIPTION_CHARS`] characters, then strips tags.
pub fn clean_description(raw: &str) -> String {
    let truncated: String = raw.chars().take(MAX_DESCRIPTION_CHARS).collect();
    strip_tags(&truncated)
}

/// Resolves the submitted category reference.
///
/// A digit-only value is taken as-is, without checking the category exists.
/// Anything else falls back to the store's lowest-identity category, read now.
pub fn resolve_category<S>(store: &S, raw: &str) -> Result<Option<i64>, SubmitError>
where
    S: LinkStoreTrait + ?Sized,
{
    match parse_identity(raw.trim()) {
        Some(id) => Ok(Some(id)),
        None => Ok(store.default_category_id()?),
    }
}

/// Validates a raw submission into a [`ValidatedLink`].
///
/// The URL is checked first, so a rejected URL never touches the store.
///
/// # Errors
/// `SubmitError::Invalid` for user-correctable problems,
/// `SubmitError::Store` if the default category lookup fails.
pub fn validate_submission<S>(
    store: &S,
    raw_url: &str,
    raw_description: &str,
    raw_category: &str,
) -> Result<ValidatedLink, SubmitError>
where
    S: LinkStoreTrait + ?Sized,
{
    let url = validate_url(raw_url)?;
    let description = clean_description(raw_description);
    let category_id = resolve_category(store, raw_category)?;
    Ok(ValidatedLink::new(url, description, category_id))
}
