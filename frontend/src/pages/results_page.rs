use dioxus::prelude::*;

use common::search_request::SearchRequest;

use crate::components::form_components::search_form::SearchForm;
use crate::components::page_header::PageHeader;
use crate::components::result_components::results_view::ResultsRegion;
use crate::data_definitions::url_param::UrlParam;


fn title_ellipsis(title: String) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title
    }
}

/// Submitted state: the form again, seeded from the route's request, with the
/// results region below it.
#[component]
pub fn ResultsPage(request: UrlParam<SearchRequest>) -> Element {
    let term = request
        .0
        .term
        .as_enabled()
        .cloned()
        .unwrap_or_else(|| "Documents".to_string());
    let title = title_ellipsis(term);
    rsx! {
        Title { "Federal Register Explorer: {title}" }
        ResultsPageRootComponent { request: request.0.clone() }
    }
}

#[component]
fn ResultsPageRootComponent(request: ReadSignal<SearchRequest>) -> Element {
    rsx! {
        div {
            id: "x-results-page-root",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 16px;
                width: 100%;
                min-height: 100%;
                padding: 20px 40px 40px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",
            PageHeader {}
            SearchForm { original_request: request }
            ResultsRegion { request }
        }
    }
}
