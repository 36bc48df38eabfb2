//! Product edit page, keyed by the record identifier.

use common::list_query::ListQuery;
use dioxus::prelude::*;

use crate::components::product_list::product_detail_form::ProductDetailForm;
use crate::data_definitions::product_catalog::find_product;
use crate::routes::Route;


#[component]
pub fn ProductEditPage(id: String) -> Element {
    let product = find_product(&id).cloned();

    rsx! {
        Title { "상품관리 - 상품수정" }
        div {
            style: "display: flex; flex-direction: column; gap: 16px; padding: 24px 28px;",
            h1 { style: "font-size: 22px; font-weight: 600; margin: 0;", "상품수정" }
            if product.is_some() {
                ProductDetailForm { product }
            } else {
                div {
                    style: "padding: 20px; background: white; border: 1px solid #E5E7EB; border-radius: 8px; color: #6B7280;",
                    "상품을 찾을 수 없습니다 ({id})"
                }
            }
            div {
                Link { to: Route::product_list_from_query(ListQuery::default()), class: "btn", "목록" }
            }
        }
    }
}
