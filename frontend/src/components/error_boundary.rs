//! Error boundary components for rendering failures.
//!
//! Transport-level failures (DNS, refused connection, timeout) are not caught
//! anywhere on the way here; they surface through these boundaries as the
//! framework's unhandled-error page.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    h1 {
                        style: "color: #B71C1C; font-size: 44px; border: 1px solid #B71C1C; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Something went wrong",
                    }
                    p {
                        style: "color: #7F1D1D; font-size: 22px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color: #1D4ED8; font-size: 22px; border: 1px solid #1D4ED8; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Back to the search form"
                    }
                    pre {
                        style: "color: black; border: 1px solid #B71C1C; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{_err:#?}"
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error = _err.error();
                let error_txt = if let Some(err) = error {
                    format!("{:#?}", err.0)
                } else {
                    "Unknown error".to_string()
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #1D4ED8; font-size: 22px; border: 1px solid #1D4ED8; padding: 10px; border-radius: 5px; margin: 15px; cursor: pointer; background: white;",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h2 {
                style: "color: #B71C1C; font-size: 28px; border: 1px solid #B71C1C; padding: 10px; border-radius: 5px; margin: 5px;",
                "Request failed",
            }

            pre {
                style: "color: #7F1D1D; border: 1px solid #B71C1C; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 600px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
