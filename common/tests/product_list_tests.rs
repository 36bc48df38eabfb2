//! End-to-end checks of the product list state: URL query in, visible rows out.

use common::list_query::ListQuery;
use common::pagination::Pagination;
use common::product::{AddressField, ProductId, ProductRecord};
use common::product_const::PAGE_SIZE;
use common::product_filter::filter_products;
use common::sample_data::load_sample_products;
use common::selection::RowSelection;

fn shop(id: u64, title: &str, addresses: AddressField) -> ProductRecord {
    ProductRecord {
        id: ProductId::Number(id),
        title: title.to_string(),
        addresses,
        ..Default::default()
    }
}

fn two_shops() -> Vec<ProductRecord> {
    vec![
        shop(1, "A Nail Shop", AddressField::Text("123 Main".to_string())),
        shop(2, "B Spa", AddressField::Other(serde_json::json!(42))),
    ]
}

/// Filtering driven by the URL query
mod query_filter_tests {
    use super::*;

    #[test]
    fn test_product_name_query_selects_matching_title() {
        let query = ListQuery::parse("searchType=productName&searchText=Nail");
        let rows = filter_products(&two_shops(), &query.product_filter());
        assert_eq!(rows, vec![two_shops()[0].clone()]);
    }

    #[test]
    fn test_brand_name_query_skips_numeric_address() {
        let query = ListQuery::parse("searchType=brandName&searchText=Main");
        let rows = filter_products(&two_shops(), &query.product_filter());
        assert_eq!(rows, vec![two_shops()[0].clone()]);
    }

    #[test]
    fn test_brand_name_query_with_empty_text_keeps_everything() {
        let query = ListQuery::parse("searchType=brandName&searchText=");
        assert_eq!(filter_products(&two_shops(), &query.product_filter()), two_shops());
    }

    #[test]
    fn test_query_without_criteria_keeps_everything() {
        let query = ListQuery::parse("page=2&tab=all");
        assert_eq!(filter_products(&two_shops(), &query.product_filter()), two_shops());
    }

    #[test]
    fn test_filter_is_an_ordered_subsequence_of_the_dataset() {
        let products = load_sample_products().unwrap();
        let query = ListQuery::parse("searchType=productName&searchText=%EB%84%A4%EC%9D%BC");
        let rows = filter_products(&products, &query.product_filter());
        assert!(!rows.is_empty());
        assert!(rows.len() < products.len());

        let mut remaining = products.iter();
        for row in &rows {
            assert!(row.title.contains("네일"));
            assert!(remaining.any(|p| p == row), "rows must keep dataset order");
        }
    }
}

/// Page changes written back to the URL
mod page_change_tests {
    use super::*;

    #[test]
    fn test_page_change_keeps_other_params() {
        let query = ListQuery::parse("searchType=brandName&searchText=%EC%84%9C%EC%9A%B8&sort=desc");
        let next = query.with_page(3);
        assert_eq!(next.page(), 3);
        assert_eq!(next.get("searchType"), Some("brandName"));
        assert_eq!(next.get("searchText"), Some("서울"));
        assert_eq!(next.get("sort"), Some("desc"));
        assert_eq!(ListQuery::parse(&next.to_string()), next);
    }

    #[test]
    fn test_pager_total_is_the_filtered_count() {
        let products = load_sample_products().unwrap();
        let query = ListQuery::parse("searchType=brandName&searchText=%EA%B0%95%EB%82%A8%EA%B5%AC");
        let rows = filter_products(&products, &query.product_filter());
        let pagination = Pagination::new(query.page(), PAGE_SIZE, rows.len() as u64);
        assert_eq!(pagination.total, rows.len() as u64);
        assert!(pagination.row_range().len() <= PAGE_SIZE as usize);
    }

    #[test]
    fn test_unfiltered_dataset_spans_three_pages() {
        let products = load_sample_products().unwrap();
        let query = ListQuery::parse("page=3");
        let pagination = Pagination::new(query.page(), PAGE_SIZE, products.len() as u64);
        assert_eq!(pagination.page_count(), 3);
        assert_eq!(pagination.row_range(), 100..products.len());
    }
}

/// Selection driving the bulk-action trigger
mod selection_tests {
    use super::*;

    #[test]
    fn test_selection_enables_bulk_trigger() {
        let mut selection = RowSelection::default();
        assert!(!selection.has_selected());

        let rows = two_shops();
        let next = selection.toggled(&rows[1].row_key(), true);
        selection.replace(next);
        assert!(selection.has_selected());
        assert_eq!(selection.keys(), &["2".to_string()]);
    }
}
