use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdList;
use dioxus_free_icons::Icon;

use common::list_query::ListQuery;
use common::number_format::format_count;
use common::product_const::COUNT_UNIT;

use crate::data_definitions::product_catalog;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "상품관리 - 홈" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
                overflow: auto;
            ",

            div {
                style: "
                    color: #0F172A;
                    font-size: 34px;
                    font-weight: 500;
                    letter-spacing: -0.02em;
                ",
                "관리자 대시보드"
            }

            ProductListCard {}
        }
    }
}

#[component]
fn ProductListCard() -> Element {
    let product_count = product_catalog::products().len() as u64;

    rsx! {
        div {
            id: "x-card-product-list",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 420px;
                border-radius: 16px;
                padding: 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div {
                style: "display:flex; align-items:center; gap: 10px; font-size: 24px; font-weight: 500;",
                Icon { icon: MdList, style: "width: 28px; height: 28px;" }
                "상품목록"
            }
            div {
                style: "font-size: 16px; color: rgba(255,255,255,0.92);",
                "등록된 업체 {format_count(product_count)}{COUNT_UNIT}"
            }
            div {
                Link {
                    to: Route::product_list_from_query(ListQuery::default()),
                    class: "btn",
                    "바로가기"
                }
            }
        }
    }
}
