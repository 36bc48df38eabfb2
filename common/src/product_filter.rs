//! Filter criteria for the product list and the filter itself.

use crate::product::{AddressField, ProductRecord};


/// Which product field a search targets, as carried in the `searchType` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchType {
    /// `productName`: match against the record title.
    ProductName,
    /// `brandName`: match against the record address text.
    BrandName,
    /// Any other value. Filters nothing.
    Unknown(String),
}

impl SearchType {
    pub fn parse(value: &str) -> Self {
        match value {
            "productName" => SearchType::ProductName,
            "brandName" => SearchType::BrandName,
            other => SearchType::Unknown(other.to_string()),
        }
    }

    pub fn as_query_value(&self) -> &str {
        match self {
            SearchType::ProductName => "productName",
            SearchType::BrandName => "brandName",
            SearchType::Unknown(other) => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductFilter {
    pub search_type: Option<SearchType>,
    pub search_text: Option<String>,
}

impl ProductFilter {
    pub fn new(search_type: Option<&str>, search_text: Option<&str>) -> Self {
        Self {
            search_type: search_type.map(SearchType::parse),
            search_text: search_text.map(str::to_string),
        }
    }

    /// A filter only applies when both parts are present and non-empty.
    pub fn is_active(&self) -> bool {
        let has_type = self.search_type.as_ref().is_some_and(|t| !t.as_query_value().is_empty());
        let has_text = self.search_text.as_ref().is_some_and(|t| !t.is_empty());
        has_type && has_text
    }

    pub fn matches(&self, product: &ProductRecord) -> bool {
        if !self.is_active() {
            return true;
        }
        let (Some(search_type), Some(search_text)) = (&self.search_type, &self.search_text) else {
            return true;
        };
        match search_type {
            SearchType::ProductName => product.title.contains(search_text.as_str()),
            SearchType::BrandName => match &product.addresses {
                AddressField::Text(addresses) => addresses.contains(search_text.as_str()),
                AddressField::Other(_) => false,
            },
            SearchType::Unknown(_) => true,
        }
    }
}

/// Keep the records matching `filter`, in their original order.
pub fn filter_products(products: &[ProductRecord], filter: &ProductFilter) -> Vec<ProductRecord> {
    if !filter.is_active() {
        return products.to_vec();
    }
    products.iter().filter(|p| filter.matches(p)).cloned().collect()
}
