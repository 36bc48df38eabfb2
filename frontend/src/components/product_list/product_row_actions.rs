//! Edit link and delete confirmation shown in each product row.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdDelete, md_image_icons::MdEdit}};

use crate::components::popconfirm::Popconfirm;
use crate::routes::Route;


pub(crate) fn edit_route(row_key: &str) -> Route {
    Route::ProductEditPage { id: row_key.to_string() }
}

#[component]
pub fn ProductRowActions(row_key: String) -> Element {
    // deletion is a placeholder: acknowledge and keep the row
    let acknowledge_delete = use_callback(move |_: ()| {
        let toast_api = dioxus_primitives::toast::consume_toast();
        toast_api.info(
            "삭제".to_string(),
            dioxus_primitives::toast::ToastOptions::new()
                .duration(std::time::Duration::from_secs(3))
                .permanent(false),
        );
    });

    rsx! {
        span {
            style: "display: flex; justify-content: center; gap: 8px;",
            Link {
                to: edit_route(&row_key),
                class: "btn btn-small",
                Icon { icon: MdEdit, style: "width: 14px; height: 14px;" }
                "수정"
            }
            Popconfirm {
                title: "상품을 삭제하시겠습니까?",
                ok_text: "예",
                cancel_text: "아니오",
                on_confirm: acknowledge_delete,
                a {
                    class: "btn btn-small",
                    Icon { icon: MdDelete, style: "width: 14px; height: 14px;" }
                    "삭제"
                }
            }
        }
    }
}
