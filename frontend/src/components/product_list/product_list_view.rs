//! The product list: filtered, paginated, selectable table with its toolbar.

use common::list_query::ListQuery;
use common::product::{ProductField, ProductRecord};
use common::product_const::PAGE_SIZE;
use common::product_filter::filter_products;
use common::selection::RowSelection;
use dioxus::prelude::*;

use crate::components::product_list::product_columns::{ProductCellRenderers, product_columns, review_count_cell};
use crate::components::product_list::product_row_actions::ProductRowActions;
use crate::components::product_list::product_search_bar::ProductSearchBar;
use crate::components::product_list::product_toolbar::ProductToolbar;
use crate::components::table::data_table::{DataTable, PaginationConfig, RowSelectionConfig};


/// Page changes keep every other query parameter.
pub(crate) fn use_page_change(query: ReadSignal<ListQuery>, on_query_change: Callback<ListQuery>) -> Callback<u64> {
    use_callback(move |page_number: u64| {
        on_query_change(query.read().with_page(page_number));
    })
}

/// Navigation is injected: the list reads `query` and reports every change
/// through `on_query_change` instead of touching the router itself.
#[component]
pub fn ProductList(
    products: ReadSignal<Vec<ProductRecord>>,
    query: ReadSignal<ListQuery>,
    on_query_change: Callback<ListQuery>,
    on_create: Callback<()>,
) -> Element {
    let mut selection = use_signal(RowSelection::default);

    // the criteria memo only notifies when searchType/searchText actually change,
    // so the filter below does not rerun for page changes
    let criteria = use_memo(move || query.read().product_filter());
    let filtered_items = use_memo(move || filter_products(&products.read(), &criteria.read()));
    let total_count = use_memo(move || filtered_items.read().len() as u64);
    let current_page = use_memo(move || query.read().page());
    let selected_count = use_memo(move || selection.read().len());

    let handle_change_page = use_page_change(query, on_query_change);
    let on_select_change = use_callback(move |keys: Vec<String>| {
        selection.write().replace(keys);
    });
    let on_status_update = use_callback(move |_: ()| {
        let keys = selection.read().keys().to_vec();
        dioxus::logger::tracing::info!("Status update requested for {} products: {:?}", keys.len(), keys);
    });

    let renderers = ProductCellRenderers {
        action: use_callback(|record: ProductRecord| rsx! { ProductRowActions { row_key: record.row_key() } }),
        human_review: use_callback(review_count_cell(ProductField::HumanReview)),
        blog_review: use_callback(review_count_cell(ProductField::BlogReview)),
    };
    let columns = use_hook(move || product_columns(renderers));

    let row_selection = RowSelectionConfig {
        selected_row_keys: selection.read().keys().to_vec(),
        on_change: on_select_change,
    };
    let pagination = PaginationConfig {
        current: current_page(),
        page_size: PAGE_SIZE,
        total: total_count(),
        on_change: handle_change_page,
    };

    rsx! {
        div {
            id: "x-product-list",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                width: 100%;
            ",
            ProductSearchBar { query, on_query_change }
            ProductToolbar { selected_count, on_status_update, on_create }
            div {
                style: "background: white; border: 1px solid #E5E7EB; border-radius: 8px; padding: 8px 12px;",
                DataTable::<ProductRecord> {
                    columns,
                    data_source: filtered_items,
                    row_selection: Some(row_selection),
                    pagination,
                    count_label: Some(total_count()),
                }
            }
        }
    }
}
