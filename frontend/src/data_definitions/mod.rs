pub mod product_list_query;
pub mod product_catalog;
