//! Sidebar navigation around the page outlet.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdList, MdNoteAdd};
use dioxus_free_icons::{Icon, IconShape};

use common::list_query::ListQuery;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            div {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 28px;
                    width: 180px;
                    height: 100%;
                    background-color: #1C212D;
                    padding: 20px 12px;
                    flex-shrink: 0;
                ",

                NavbarTitle{},
                NavbarLinks{},
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px; overflow: auto; background: #F5F6F8;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarTitle() -> Element {
    rsx! {
        Link {
            to: Route::HomePage { },
            class: "nav-title",
            "관리자"
        }
    }
}

#[component]
fn NavbarLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 6px;
            ",
            NavLink { to: Route::HomePage { }, icon: MdHome, label: "홈" }
            NavLink { to: Route::product_list_from_query(ListQuery::default()), icon: MdList, label: "상품목록" }
            NavLink { to: Route::ProductNewPage { }, icon: MdNoteAdd, label: "상품등록" }
        }
    }
}

#[component]
fn NavLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            class: "nav-link",
            Icon { icon: icon, style: "width: 22px; height: 22px;" }
            "{label}"
        }
    }
}
