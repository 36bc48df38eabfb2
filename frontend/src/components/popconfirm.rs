//! Two-button confirmation popover anchored to its trigger.

use dioxus::prelude::*;


#[component]
pub fn Popconfirm(
    title: String,
    ok_text: String,
    cancel_text: String,
    on_confirm: Callback<()>,
    children: Element,
) -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        span {
            style: "position: relative; display: inline-block;",

            span {
                onclick: move |_e| {
                    _e.prevent_default();
                    _e.stop_propagation();
                    *is_open.write() ^= true;
                },
                {children}
            }

            if is_open() {
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
                        _e.stop_propagation();
                        *is_open.write() = false;
                    },
                }
                PopconfirmPanel {
                    title: title.clone(),
                    ok_text: ok_text.clone(),
                    cancel_text: cancel_text.clone(),
                    on_cancel: move |_| *is_open.write() = false,
                    on_ok: move |_| {
                        *is_open.write() = false;
                        on_confirm.call(());
                    },
                }
            }
        }
    }
}

/// Title plus cancel/ok buttons, shown above the trigger while open.
#[component]
fn PopconfirmPanel(
    title: String,
    ok_text: String,
    cancel_text: String,
    on_cancel: Callback<()>,
    on_ok: Callback<()>,
) -> Element {
    rsx! {
        div {
            role: "alertdialog",
            style: "
            position: absolute;
            bottom: 34px;
            left: 50%;
            transform: translateX(-50%);
            width: max-content;
            background-color: white;
            border: 1px solid rgba(0, 0, 0, 0.15);
            box-shadow: 0 6px 16px 0 rgba(0, 0, 0, 0.12);
            border-radius: 6px;
            padding: 12px;
            z-index: 1001;
            display: flex;
            flex-direction: column;
            gap: 10px;
            text-align: left;
            ",
            div { style: "font-size: 14px; font-weight: 500;", "{title}" }
            div {
                style: "display: flex; flex-direction: row; justify-content: flex-end; gap: 6px;",
                button {
                    class: "btn btn-small",
                    onclick: move |_e| {
                        _e.stop_propagation();
                        on_cancel.call(());
                    },
                    "{cancel_text}"
                }
                button {
                    class: "btn btn-small btn-primary",
                    onclick: move |_e| {
                        _e.stop_propagation();
                        on_ok.call(());
                    },
                    "{ok_text}"
                }
            }
        }
    }
}
