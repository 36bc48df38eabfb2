//! Page navigation under a data table.

use common::pagination::{PagerItem, Pagination};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdChevronLeft, MdChevronRight}};


#[component]
pub fn PaginationBar(pagination: ReadSignal<Pagination>, on_change: Callback<u64>) -> Element {
    let current = use_memo(move || pagination.read().clamped_current());
    let items = use_memo(move || pagination.read().pager_items());
    let can_go_to_previous_page = use_memo(move || pagination.read().has_previous());
    let can_go_to_next_page = use_memo(move || pagination.read().has_next());

    if items.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        nav {
            class: "x-pagination-bar",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: flex-end;
                gap: 6px;
                padding: 12px 0;
            ",

            NavigationButton {
                icon: MdChevronLeft,
                label: "이전 페이지",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| on_change(current() - 1),
            }

            for (index, item) in items.read().iter().copied().enumerate() {
                {match item {
                    PagerItem::Page(page) => rsx! {
                        PageNumberButton {
                            key: "page-{page}",
                            page,
                            is_current: page == current(),
                            onclick: move |_| {
                                if page != current() {
                                    on_change(page);
                                }
                            },
                        }
                    },
                    PagerItem::Gap => rsx! {
                        span {
                            key: "gap-{index}",
                            style: "color: rgba(0,0,0,0.4); padding: 0 4px;",
                            "…"
                        }
                    },
                }}
            }

            NavigationButton {
                icon: MdChevronRight,
                label: "다음 페이지",
                disabled: !can_go_to_next_page(),
                onclick: move |_| on_change(current() + 1),
            }
        }
    }
}

#[component]
fn PageNumberButton(page: u64, is_current: bool, onclick: Callback<()>) -> Element {
    let border = if is_current { "1px solid #4F46E5" } else { "1px solid transparent" };
    let color = if is_current { "#4F46E5" } else { "#111827" };
    rsx! {
        button {
            class: "admin-hover-shadow-background",
            style: "
                min-width: 32px;
                height: 32px;
                background: white;
                border-radius: 6px;
                border: {border};
                color: {color};
                cursor: pointer;
                font-size: 14px;
            ",
            "aria-current": if is_current { "page" } else { "false" },
            onclick: move |_| onclick(()),
            "{page}"
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 6px;
                border: 1px solid #E5E7EB;
                padding: 3px;
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 24px; height: 24px; color: {btn_color};" }
        }
    }
}
