//! Checkbox-gated form row.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank},
};

/// One gated criterion: a checkbox row, and the matching input control shown
/// only while the checkbox is on. A row that is off renders no input and the
/// criterion contributes nothing to the submitted request.
#[component]
pub fn ToggleRow(
    label: String,
    enabled: bool,
    ontoggle: Callback<bool>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "x-toggle-row",
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                padding: 8px 0;
                border-bottom: 1px solid #E5E7EB;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 10px;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    ontoggle(!enabled);
                },
                if enabled {
                    Icon { icon: MdCheckBox, style: "width: 24px; height: 24px; color: rgb(28, 33, 45); flex-shrink: 0;" }
                } else {
                    Icon { icon: MdCheckBoxOutlineBlank, style: "width: 24px; height: 24px; color: black; flex-shrink: 0;" }
                }
                span {
                    style: "font-size: 17px; font-weight: 400; color: rgb(0, 0, 0);",
                    "{label}"
                }
            }
            if enabled {
                div {
                    style: "margin-left: 34px;",
                    {children}
                }
            }
        }
    }
}
