use dioxus::prelude::*;

use common::search_request::SearchRequest;

use crate::components::form_components::search_form::SearchForm;
use crate::components::page_header::PageHeader;


/// Landing page: the form with its defaults, no results region yet.
#[component]
pub fn HomePage() -> Element {
    let default_request = use_signal(|| SearchRequest::default());
    rsx! {
        Title { "Federal Register Explorer" }
        div {
            id: "x-home-container",
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
            SearchForm { original_request: default_request }
        }
    }
}
