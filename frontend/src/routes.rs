use dioxus::prelude::*;

use common::search_request::SearchRequest;

use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::results_page::ResultsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {

    #[route("/")]
    HomePage {},


    #[route("/search/:request")]
    ResultsPage {
        request: UrlParam<SearchRequest>,
    },

}

impl Route {
    pub fn results_page_from_request(request: SearchRequest) -> Self {
        Self::ResultsPage {
            request: UrlParam::from(request),
        }
    }
}
