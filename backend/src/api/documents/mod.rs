//! Document search handlers and module exports.

mod run_search;
pub use run_search::run_document_search;
