pub mod navbar;
pub mod error_boundary;
pub mod dropdown;
pub mod popconfirm;
pub mod table;
pub mod product_list;
