//! One GET against the Federal Register documents endpoint.

use common::search_const::DOCUMENTS_ENDPOINT;
use common::search_outcome::{Document, SearchOutcome};
use common::search_request::SearchRequest;

/// Issue the search described by `request` and classify the response.
///
/// Exactly one request, no retry, default client timeout behavior. Non-200
/// statuses and a missing `results` key are outcomes, not errors; only
/// transport failures and an unparseable 200 body become `Err` and bubble up
/// to the caller's error surface.
pub async fn run_document_search(request: SearchRequest) -> anyhow::Result<SearchOutcome> {
    let params = request.query_params();
    tracing::debug!(param_count = params.len(), "document search request");

    let client = reqwest::Client::new();
    let response = client
        .get(DOCUMENTS_ENDPOINT)
        .query(&params)
        .send()
        .await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    tracing::info!(status, body_len = body.len(), "document search response");

    classify_response(status, &body)
}

/// Map one status/body pair onto the three rendered outcomes.
fn classify_response(status: u16, body: &str) -> anyhow::Result<SearchOutcome> {
    if status != 200 {
        return Ok(SearchOutcome::ApiError {
            status_code: status,
            body: body.to_string(),
        });
    }
    let parsed: serde_json::Value = serde_json::from_str(body)?;
    match parsed.get("results") {
        Some(results) => {
            let documents: Vec<Document> = serde_json::from_value(results.clone())?;
            Ok(SearchOutcome::Results { documents })
        }
        None => Ok(SearchOutcome::MissingResultsKey),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_with_results_yields_documents() {
        let body = r#"{"results": [{"title": "T1", "publication_date": "2024-01-01"}]}"#;
        let documents = match classify_response(200, body).unwrap() {
            SearchOutcome::Results { documents } => documents,
            other => panic!("expected Results, got {other:?}"),
        };
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].title_display(), "T1");
        assert_eq!(documents[0].publication_date_display(), "2024-01-01");
        assert_eq!(documents[0].abstract_display(), "N/A");
        assert_eq!(documents[0].html_url_display(), "N/A");
        assert_eq!(documents[0].pdf_url_display(), "N/A");
    }

    #[test]
    fn ok_response_without_results_key_is_a_warning() {
        let outcome = classify_response(200, "{}").unwrap();
        assert_eq!(outcome, SearchOutcome::MissingResultsKey);
    }

    #[test]
    fn non_200_status_carries_status_and_raw_body() {
        let outcome = classify_response(404, "not found").unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::ApiError {
                status_code: 404,
                body: "not found".to_string(),
            }
        );
    }

    #[test]
    fn unparseable_200_body_is_a_hard_error() {
        assert!(classify_response(200, "<html>oops</html>").is_err());
    }

    #[test]
    fn extra_document_fields_are_ignored() {
        let body = r#"{"results": [{"title": "T1", "type": "Rule", "agencies": []}], "count": 1}"#;
        let documents = match classify_response(200, body).unwrap() {
            SearchOutcome::Results { documents } => documents,
            other => panic!("expected Results, got {other:?}"),
        };
        assert_eq!(documents[0].title_display(), "T1");
    }
}
