//! Results region rendered below the form.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_alert_icons::MdWarning};

use common::{search_outcome::SearchOutcome, search_request::SearchRequest};

use crate::{
    api::documents_api::run_document_search,
    components::{
        error_boundary::ComponentErrorDisplay,
        result_components::result_card::ResultCard,
        suspend_boundary::{LoadingIndicator, SuspendWrapper},
    },
};

#[derive(Copy, Clone)]
pub struct SearchResultsState {
    pub search_result: ReadSignal<Option<Result<SearchOutcome, ServerFnError>>>,
}

#[component]
pub fn ResultsRegion(request: ReadSignal<SearchRequest>) -> Element {
    let mut search_result = use_resource(move || {
        let r = request.read().clone();
        run_document_search(r)
    });
    // a new submission lands here with a new request; restart the resource
    use_effect(move || {
        let _ = request.read();
        search_result.clear();
        search_result.restart();
    });

    use_context_provider(move || SearchResultsState {
        search_result: search_result.into(),
    });

    rsx! {
        div {
            id: "x-search-results-region",
            style: "
                width: 100%;
                max-width: 680px;
                display: flex;
                flex-direction: column;
            ",
            SuspendWrapper {
                ResultsView {}
            }
        }
    }
}

#[component]
fn ResultsView() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let search_result = search_results_state.search_result;
    let search_result = search_result.read();
    let outcome = match search_result.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(outcome)) => outcome,
        None => return rsx! { LoadingIndicator {} },
    };

    match outcome {
        SearchOutcome::Results { documents } => {
            let documents = documents.clone();
            rsx! {
                h3 {
                    style: "color: #4CAF50; font-size: 24px; font-weight: 500; margin: 14px 0 4px 0;",
                    "Found {documents.len()} Results"
                }
                ul {
                    id: "x-search-results-list",
                    style: "list-style: none; padding: 0; margin: 0; width: 100%;",
                    for (item_index, document) in documents.into_iter().enumerate() {
                        li {
                            key: "{item_index}",
                            ResultCard { document, item_index }
                        }
                    }
                }
            }
        }
        SearchOutcome::MissingResultsKey => rsx! { MissingResultsWarning {} },
        SearchOutcome::ApiError { status_code, body } => rsx! {
            ApiErrorDisplay { status_code: *status_code, body: body.clone() }
        },
    }
}

#[component]
fn MissingResultsWarning() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                background: #FFFBEB;
                border: 1px solid #F59E0B;
                border-radius: 8px;
                color: #92400E;
                font-size: 17px;
                padding: 12px 16px;
                margin: 14px 0;
            ",
            Icon { icon: MdWarning, style: "width: 22px; height: 22px; color: #F59E0B; flex-shrink: 0;" }
            "No 'results' key found in the response."
        }
    }
}

#[component]
fn ApiErrorDisplay(status_code: u16, body: String) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                background: #FEF2F2;
                border: 1px solid #B71C1C;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 14px 0;
            ",
            div {
                style: "color: #B71C1C; font-size: 18px; font-weight: 500;",
                "Failed to fetch data. Status Code: {status_code}"
            }
            pre {
                style: "color: #7F1D1D; font-size: 14px; margin: 0; text-wrap: auto; max-height: 300px; overflow-y: auto;",
                "Error response: {body}"
            }
        }
    }
}
