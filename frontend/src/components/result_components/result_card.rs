//! One styled card per result document.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_editor_icons::MdInsertDriveFile};

use common::search_const::NOT_AVAILABLE;
use common::search_outcome::Document;

#[component]
pub fn ResultCard(document: ReadSignal<Document>, item_index: usize) -> Element {
    let document = document.read().clone();
    let ordinal = item_index + 1;

    rsx! {
        div {
            class: "x-result-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 7px;
                background: white;
                border: 2px solid #4CAF50;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 10px 0;
                box-sizing: border-box;
            ",
            // Row 1: ORDINAL - ICON - TITLE
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 10px;
                    width: 100%;
                ",
                span {
                    style: "font-size: 18px; font-weight: 200; color: rgba(0, 0, 0, 0.5);",
                    "{ordinal}."
                }
                Icon {
                    icon: MdInsertDriveFile,
                    style: "width: 18px; height: 18px; color: rgba(0, 0, 0, 0.5); flex-shrink: 0;"
                }
                span {
                    style: "
                        font-size: 18px;
                        font-weight: 500;
                        color: rgb(0, 0, 0);
                        overflow: hidden;
                        text-overflow: ellipsis;
                    ",
                    "{document.title_display()}"
                }
            }
            CardFieldRow {
                label: "Publication Date".to_string(),
                value: document.publication_date_display().to_string(),
            }
            CardFieldRow {
                label: "Abstract".to_string(),
                value: document.abstract_display().to_string(),
            }
            CardLinkRow {
                label: "Details URL".to_string(),
                url: document.html_url.clone(),
            }
            CardLinkRow {
                label: "PDF URL".to_string(),
                url: document.pdf_url.clone(),
            }
        }
    }
}

#[component]
fn CardFieldRow(label: String, value: String) -> Element {
    rsx! {
        div {
            style: "font-size: 15px; line-height: 22px; color: rgb(0, 0, 0);",
            span { style: "font-weight: 600;", "{label}: " }
            span { "{value}" }
        }
    }
}

#[component]
fn CardLinkRow(label: String, url: Option<String>) -> Element {
    let link = match url {
        Some(url) => rsx! {
            a {
                href: "{url}",
                target: "_blank",
                style: "color: #1D4ED8;",
                "Link"
            }
        },
        None => rsx! {
            span { "{NOT_AVAILABLE}" }
        },
    };
    rsx! {
        div {
            style: "font-size: 15px; line-height: 22px; color: rgb(0, 0, 0);",
            span { style: "font-weight: 600;", "{label}: " }
            {link}
        }
    }
}
