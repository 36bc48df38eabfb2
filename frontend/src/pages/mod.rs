pub mod home_page;
pub mod product_list_page;
pub mod product_new_page;
pub mod product_edit_page;
