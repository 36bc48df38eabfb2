//! Common library exports shared between the product admin frontend targets.

extern crate serde;


pub mod product;
pub mod product_filter;
pub mod product_const;
pub mod list_query;
pub mod selection;
pub mod pagination;
pub mod number_format;
pub mod sample_data;
