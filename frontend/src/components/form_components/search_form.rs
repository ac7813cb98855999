//! The parameter-collection form.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use common::search_const::{MIN_YEAR, PER_PAGE_MAX, PER_PAGE_MIN, clamp_per_page};
use common::search_request::{CfrTitle, SearchRequest, Section, Significance, Topic};

use crate::components::form_components::toggle_row::ToggleRow;
use crate::routes::Route;

const TEXT_INPUT_STYLE: &str = "
    border: 1px solid rgba(101, 101, 101, 0.8);
    border-radius: 6px;
    padding: 6px 10px;
    font-size: 16px;
    color: #111827;
    outline: none;
    background: white;
    width: 280px;
";

const SELECT_STYLE: &str = "
    border: 1px solid rgba(101, 101, 101, 0.8);
    border-radius: 6px;
    padding: 6px 10px;
    font-size: 16px;
    color: #111827;
    background: white;
    width: 300px;
";

const NUMBER_INPUT_STYLE: &str = "
    border: 1px solid rgba(101, 101, 101, 0.8);
    border-radius: 6px;
    padding: 6px 10px;
    font-size: 16px;
    color: #111827;
    outline: none;
    background: white;
    width: 140px;
";

/// The whole form. Edits accumulate in a draft signal; nothing leaves this
/// component until the submit button pushes the results route with a snapshot
/// of the draft. No cross-field checks run here, in particular start <= end
/// on the date range is not enforced.
#[component]
pub fn SearchForm(original_request: ReadSignal<SearchRequest>) -> Element {
    let mut draft = use_signal(|| original_request.read().clone());
    // navigation does not reset signals; mirror the route's request into the draft
    use_effect(move || {
        let new_request = original_request.read().clone();
        draft.set(new_request);
    });
    let trigger_search = move |_: ()| {
        dioxus::logger::tracing::debug!("submitting document search");
        navigator().push(Route::results_page_from_request(draft.read().clone()));
    };

    rsx! {
        div {
            id: "x-search-form",
            style: "
                display: flex;
                flex-direction: column;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                box-shadow: 0 6px 16px rgba(0, 0, 0, 0.06);
                padding: 18px 22px;
                max-width: 680px;
                width: 100%;
                box-sizing: border-box;
            ",

            h3 {
                style: "font-size: 22px; font-weight: 500; color: #111827; margin: 0 0 6px 0;",
                "Search Parameters"
            }

            ToggleRow {
                label: "Include Search Term".to_string(),
                enabled: draft.read().term.enabled,
                ontoggle: move |on| draft.write().term.enabled = on,
                input {
                    r#type: "text",
                    style: TEXT_INPUT_STYLE,
                    value: "{draft.read().term.value}",
                    oninput: move |event: Event<FormData>| {
                        draft.write().term.value = event.value();
                    },
                }
            }

            ToggleRow {
                label: "Include Section".to_string(),
                enabled: draft.read().section.enabled,
                ontoggle: move |on| draft.write().section.enabled = on,
                select {
                    style: SELECT_STYLE,
                    for option_value in Section::ALL {
                        option {
                            value: "{option_value.api_value()}",
                            selected: draft.read().section.value == option_value,
                            "{option_value.api_value()}"
                        }
                    }
                }
            }

            ToggleRow {
                label: "Include Topic".to_string(),
                enabled: draft.read().topic.enabled,
                ontoggle: move |on| draft.write().topic.enabled = on,
                select {
                    style: SELECT_STYLE,
                    for option_value in Topic::ALL {
                        option {
                            value: "{option_value.api_value()}",
                            selected: draft.read().topic.value == option_value,
                            "{option_value.api_value()}"
                        }
                    }
                }
            }

            ToggleRow {
                label: "Include CFR Title".to_string(),
                enabled: draft.read().cfr_title.enabled,
                ontoggle: move |on| draft.write().cfr_title.enabled = on,
                select {
                    style: SELECT_STYLE,
                    for option_value in CfrTitle::ALL {
                        option {
                            value: "{option_value.api_value()}",
                            selected: draft.read().cfr_title.value == option_value,
                            "{option_value.api_value()}"
                        }
                    }
                }
            }

            ToggleRow {
                label: "Include CFR Part".to_string(),
                enabled: draft.read().cfr_part.enabled,
                ontoggle: move |on| draft.write().cfr_part.enabled = on,
                input {
                    r#type: "number",
                    min: "0",
                    style: NUMBER_INPUT_STYLE,
                    value: "{draft.read().cfr_part.value}",
                    oninput: move |event: Event<FormData>| {
                        if let Ok(value) = event.value().parse::<u32>() {
                            draft.write().cfr_part.value = value;
                        }
                    },
                }
            }

            ToggleRow {
                label: "Include Significant Flag".to_string(),
                enabled: draft.read().significant.enabled,
                ontoggle: move |on| draft.write().significant.enabled = on,
                select {
                    style: SELECT_STYLE,
                    onchange: move |event: Event<FormData>| {
                        draft.write().significant.value = if event.value() == "0" {
                            Significance::NotSignificant
                        } else {
                            Significance::Significant
                        };
                    },
                    for option_value in Significance::ALL {
                        option {
                            value: "{option_value.api_value()}",
                            selected: draft.read().significant.value == option_value,
                            "{option_value.api_value()}"
                        }
                    }
                }
            }

            ToggleRow {
                label: "Include Publication Date Range".to_string(),
                enabled: draft.read().publication_date_range.enabled,
                ontoggle: move |on| draft.write().publication_date_range.enabled = on,
                div {
                    style: "display: flex; flex-direction: row; gap: 16px; align-items: center;",
                    span { style: "font-size: 15px; color: #374151;", "Start" }
                    input {
                        r#type: "date",
                        style: TEXT_INPUT_STYLE,
                        value: "{draft.read().publication_date_range.value.start}",
                        oninput: move |event: Event<FormData>| {
                            draft.write().publication_date_range.value.start = event.value();
                        },
                    }
                    span { style: "font-size: 15px; color: #374151;", "End" }
                    input {
                        r#type: "date",
                        style: TEXT_INPUT_STYLE,
                        value: "{draft.read().publication_date_range.value.end}",
                        oninput: move |event: Event<FormData>| {
                            draft.write().publication_date_range.value.end = event.value();
                        },
                    }
                }
            }

            ToggleRow {
                label: "Include Effective Date Year".to_string(),
                enabled: draft.read().effective_date_year.enabled,
                ontoggle: move |on| draft.write().effective_date_year.enabled = on,
                input {
                    r#type: "number",
                    min: "{MIN_YEAR}",
                    style: NUMBER_INPUT_STYLE,
                    value: "{draft.read().effective_date_year.value}",
                    oninput: move |event: Event<FormData>| {
                        if let Ok(value) = event.value().parse::<u32>() {
                            draft.write().effective_date_year.value = value.max(MIN_YEAR);
                        }
                    },
                }
            }

            ToggleRow {
                label: "Include Publication Year".to_string(),
                enabled: draft.read().publication_year.enabled,
                ontoggle: move |on| draft.write().publication_year.enabled = on,
                input {
                    r#type: "number",
                    min: "{MIN_YEAR}",
                    style: NUMBER_INPUT_STYLE,
                    value: "{draft.read().publication_year.value}",
                    oninput: move |event: Event<FormData>| {
                        if let Ok(value) = event.value().parse::<u32>() {
                            draft.write().publication_year.value = value.max(MIN_YEAR);
                        }
                    },
                }
            }

            // always collected, clamped by the widget to [1, 1000]
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    padding: 12px 0;
                ",
                span {
                    style: "font-size: 17px; font-weight: 400; color: rgb(0, 0, 0);",
                    "Results per Page"
                }
                input {
                    r#type: "number",
                    min: "{PER_PAGE_MIN}",
                    max: "{PER_PAGE_MAX}",
                    style: NUMBER_INPUT_STYLE,
                    value: "{draft.read().per_page}",
                    oninput: move |event: Event<FormData>| {
                        if let Ok(value) = event.value().parse::<u32>() {
                            draft.write().per_page = clamp_per_page(value);
                        }
                    },
                }
            }

            div {
                style: "display: flex; flex-direction: row; justify-content: flex-end; padding-top: 10px;",
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 8px;
                        border: none;
                        border-radius: 9999px;
                        background: #4CAF50;
                        color: white;
                        font-size: 17px;
                        font-weight: 500;
                        padding: 10px 22px;
                        cursor: pointer;
                        box-shadow: 0 2px 8px rgba(0, 0, 0, 0.12);
                    ",
                    onclick: move |_| {
                        trigger_search(())
                    },
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: white;" }
                    "Submit Search"
                }
            }
        }
    }
}
