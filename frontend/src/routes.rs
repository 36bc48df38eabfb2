use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::product_list_query::ProductListQuery;
use crate::pages::home_page::HomePage;
use crate::pages::product_edit_page::ProductEditPage;
use crate::pages::product_list_page::ProductListPage;
use crate::pages::product_new_page::ProductNewPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    // the whole query string is captured so page changes can carry unknown parameters along
    #[route("/sample/product/list?:..query")]
    ProductListPage { query: ProductListQuery },


    #[route("/sample/product/new")]
    ProductNewPage {},


    #[route("/sample/product/edit/:id")]
    ProductEditPage { id: String },

}

impl Route {
    pub fn product_list_from_query(query: common::list_query::ListQuery) -> Self {
        Self::ProductListPage { query: ProductListQuery::from(query) }
    }
}
