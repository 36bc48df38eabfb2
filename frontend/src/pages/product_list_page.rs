//! Product list page: binds the router query to the product list.

use common::list_query::ListQuery;
use dioxus::prelude::*;

use crate::components::product_list::product_list_view::ProductList;
use crate::data_definitions::{product_catalog, product_list_query::ProductListQuery};
use crate::routes::Route;


#[component]
pub fn ProductListPage(query: ProductListQuery) -> Element {
    let products = use_signal(|| product_catalog::products().to_vec());
    let on_query_change = use_callback(move |next: ListQuery| {
        // push keeps history entries for back/forward between pages
        navigator().push(Route::product_list_from_query(next));
    });
    let on_create = use_callback(move |_: ()| {
        navigator().push(Route::ProductNewPage {});
    });

    rsx! {
        Title { "상품관리 - 상품목록" }
        div {
            id: "x-product-list-page",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 24px 28px;
            ",
            h1 { style: "font-size: 22px; font-weight: 600; margin: 0;", "상품목록" }
            ProductList {
                products,
                query: query.0.clone(),
                on_query_change,
                on_create,
            }
        }
    }
}
