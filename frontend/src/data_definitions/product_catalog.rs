//! Read-only product dataset, parsed once per process.

use std::sync::LazyLock;

use common::product::ProductRecord;
use common::sample_data::load_sample_products;

static PRODUCTS: LazyLock<Vec<ProductRecord>> = LazyLock::new(|| match load_sample_products() {
    Ok(products) => {
        dioxus::logger::tracing::info!("Loaded {} sample products", products.len());
        products
    }
    Err(e) => {
        dioxus::logger::tracing::error!("Failed to load sample products: {e:#}");
        Vec::new()
    }
});

pub fn products() -> &'static [ProductRecord] {
    &PRODUCTS
}

pub fn find_product(row_key: &str) -> Option<&'static ProductRecord> {
    products().iter().find(|p| p.row_key() == row_key)
}
