//! Product create page.

use common::list_query::ListQuery;
use dioxus::prelude::*;

use crate::components::product_list::product_detail_form::ProductDetailForm;
use crate::routes::Route;


#[component]
pub fn ProductNewPage() -> Element {
    rsx! {
        Title { "상품관리 - 상품등록" }
        div {
            style: "display: flex; flex-direction: column; gap: 16px; padding: 24px 28px;",
            h1 { style: "font-size: 22px; font-weight: 600; margin: 0;", "상품등록" }
            ProductDetailForm { product: None }
            div {
                Link { to: Route::product_list_from_query(ListQuery::default()), class: "btn", "목록" }
            }
        }
    }
}
