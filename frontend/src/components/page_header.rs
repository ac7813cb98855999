use dioxus::prelude::*;

#[component]
pub fn PageHeader() -> Element {
    rsx! {
        div {
            id: "x-page-header",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 8px;
                padding: 20px 0 6px 0;
            ",
            h1 {
                style: "
                    color: #4CAF50;
                    font-size: 38px;
                    font-weight: 500;
                    margin: 0;
                    text-align: center;
                ",
                "Federal Register API Explorer"
            }
            div {
                style: "
                    color: #111827;
                    font-size: 18px;
                    line-height: 1.5;
                    max-width: 640px;
                    text-align: center;
                ",
                "Explore Federal Register documents. Pick the search criteria below and submit to view results."
            }
        }
    }
}
