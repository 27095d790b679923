// Linkboard services
// Pure logic with no store access of its own: validation, query construction, presentation.

pub mod palette;
pub mod query_builder;
pub mod validator;
