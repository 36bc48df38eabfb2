pub mod product_columns;
pub mod product_row_actions;
pub mod product_toolbar;
pub mod product_search_bar;
pub mod product_list_view;
pub mod product_detail_form;
