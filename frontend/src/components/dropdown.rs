//! Click-triggered dropdown menu.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdArrowDropDown};


#[derive(Clone, PartialEq)]
pub struct DropdownItem {
    pub key: &'static str,
    pub label: String,
    pub onclick: Callback<()>,
}

#[component]
pub fn Dropdown(label: String, disabled: ReadSignal<bool>, items: Vec<DropdownItem>) -> Element {
    let mut is_expanded = use_signal(|| false);
    let show_menu = use_memo(move || is_expanded() && !disabled());
    let trigger_class = use_memo(move || if disabled() { "btn btn-disabled" } else { "btn" });

    rsx! {
        div {
            style: "position: relative; display: inline-block;",

            button {
                class: "{trigger_class}",
                disabled: disabled(),
                onclick: move |_e| {
                    _e.prevent_default();
                    _e.stop_propagation();
                    if !disabled() {
                        *is_expanded.write() ^= true;
                    }
                },
                "{label}"
                Icon { icon: MdArrowDropDown, style: "width: 18px; height: 18px;" }
            }

            if show_menu() {
                // click-away layer
                div {
                    style: "
                    position: fixed;
                    top: 0px;
                    left: 0px;
                    width: 100vw;
                    height: 100vh;
                    z-index: 1000;
                    ",
                    onclick: move |_e| {
                        _e.prevent_default();
                        _e.stop_propagation();
                        *is_expanded.write() = false;
                    },
                }
                div {
                    role: "menu",
                    style: "
                    position: absolute;
                    top: 36px;
                    left: 0px;
                    min-width: 140px;
                    background-color: white;
                    border: 1px solid rgba(0, 0, 0, 0.15);
                    box-shadow: 0 6px 16px 0 rgba(0, 0, 0, 0.12);
                    border-radius: 6px;
                    padding: 4px;
                    z-index: 1001;
                    display: flex;
                    flex-direction: column;
                    font-size: 14px;
                    ",
                    for item in items.iter().cloned() {
                        a {
                            key: "{item.key}",
                            role: "menuitem",
                            class: "admin-hover-shadow-background",
                            style: "
                            padding: 6px 12px;
                            border-radius: 4px;
                            cursor: pointer;
                            color: #111827;
                            ",
                            onclick: move |_e| {
                                _e.prevent_default();
                                _e.stop_propagation();
                                item.onclick.call(());
                                *is_expanded.write() = false;
                            },
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}
