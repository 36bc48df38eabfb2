//! The static nail-shop dataset shown by the product list.

use anyhow::Context;

use crate::product::ProductRecord;


const NAIL_SHOPS_JSON: &str = include_str!("../data/nail_shops.json");

/// Parse a JSON array of product records.
pub fn load_products(json: &str) -> anyhow::Result<Vec<ProductRecord>> {
    let products: Vec<ProductRecord> =
        serde_json::from_str(json).context("failed to parse product records")?;
    Ok(products)
}

/// Parse the dataset embedded at build time.
pub fn load_sample_products() -> anyhow::Result<Vec<ProductRecord>> {
    load_products(NAIL_SHOPS_JSON).context("embedded nail_shops.json is invalid")
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::AddressField;

    #[test]
    fn test_embedded_dataset_loads() {
        let products = load_sample_products().unwrap();
        assert!(products.len() > 50, "dataset should span more than one page");

        let mut keys: Vec<String> = products.iter().map(|p| p.row_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), products.len(), "row keys must be unique");

        assert!(products.iter().any(|p| matches!(p.addresses, AddressField::Other(_))));
    }

    #[test]
    fn test_load_products_reports_bad_input() {
        let err = load_products("{\"not\": \"a list\"}").unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse product records"));
    }
}
