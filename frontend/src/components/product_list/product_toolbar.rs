//! Toolbar above the product table: bulk actions, export and create.

use common::product_const::selected_count_label;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_file_icons::MdFileDownload};

use crate::components::dropdown::{Dropdown, DropdownItem};


#[component]
pub fn ProductToolbar(selected_count: ReadSignal<usize>, on_status_update: Callback<()>, on_create: Callback<()>) -> Element {
    let has_selected = use_memo(move || selected_count() > 0);
    let selection_label = use_memo(move || selected_count_label(selected_count()));

    let bulk_items = vec![DropdownItem {
        key: "statusUpdate",
        label: "상태수정".to_string(),
        onclick: on_status_update,
    }];

    rsx! {
        div {
            id: "x-product-toolbar",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                width: 100%;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center;",
                Dropdown { label: "일괄수정", disabled: !has_selected(), items: bulk_items }
                span { style: "margin-left: 8px; font-size: 14px;", "{selection_label}" }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 8px;",
                // export has no handler yet: display only
                button {
                    class: "btn",
                    Icon { icon: MdFileDownload, style: "width: 16px; height: 16px;" }
                    "엑셀 다운로드"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_create(()),
                    "상품등록"
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn ToolbarHarness(selected_count: usize) -> Element {
        rsx! {
            ProductToolbar {
                selected_count,
                on_status_update: move |_| {},
                on_create: move |_| {},
            }
        }
    }

    fn render_toolbar(selected_count: usize) -> String {
        let mut dom = VirtualDom::new_with_props(ToolbarHarness, ToolbarHarnessProps { selected_count });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_bulk_trigger_disabled_without_selection() {
        let html = render_toolbar(0);
        assert!(html.contains("btn btn-disabled"));
        assert!(html.contains("일괄수정"));
        assert!(!html.contains("선택"));
    }

    #[test]
    fn test_bulk_trigger_enabled_with_selection() {
        let html = render_toolbar(3);
        assert!(!html.contains("btn-disabled"));
        assert!(html.contains("3건 선택"));
        assert!(html.contains("엑셀 다운로드"));
        assert!(html.contains("상품등록"));
    }
}
