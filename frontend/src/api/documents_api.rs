//! Client API calls for the document search endpoint.

use common::{search_outcome::SearchOutcome, search_request::SearchRequest};
use dioxus::prelude::*;




#[server]
pub async fn run_document_search(request: SearchRequest) -> Result<SearchOutcome, ServerFnError> {
    let x = backend::api::documents::run_document_search(request).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
