//! Product record model for the admin product list.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::number_format::format_count;


/// Record identifier. The dataset mixes numeric and textual ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl Default for ProductId {
    fn default() -> Self {
        ProductId::Text(String::new())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// The `addresses` field as it appears in the source data: usually text,
/// sometimes a number, a list, or missing altogether.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddressField {
    Text(String),
    Other(serde_json::Value),
}

impl Default for AddressField {
    fn default() -> Self {
        AddressField::Other(serde_json::Value::Null)
    }
}

impl AddressField {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AddressField::Text(s) => Some(s),
            AddressField::Other(_) => None,
        }
    }
}

/// A map coordinate, kept in whatever form the source gave it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coordinate::Number(n) => write!(f, "{}", n),
            Coordinate::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProductRecord {
    pub id: ProductId,
    pub title: String,
    pub addresses: AddressField,
    pub category: String,
    pub human_review: u64,
    pub blog_review: u64,
    pub x: Option<Coordinate>,
    pub y: Option<Coordinate>,
}

impl ProductRecord {
    /// Key used for row selection and edit links.
    pub fn row_key(&self) -> String {
        self.id.to_string()
    }

    /// Plain display text for one field. Non-text addresses and missing
    /// coordinates render as empty.
    pub fn field_text(&self, field: ProductField) -> String {
        match field {
            ProductField::Title => self.title.clone(),
            ProductField::Addresses => self.addresses.as_text().unwrap_or_default().to_string(),
            ProductField::Category => self.category.clone(),
            ProductField::HumanReview => format_count(self.human_review),
            ProductField::BlogReview => format_count(self.blog_review),
            ProductField::X => self.x.as_ref().map(|c| c.to_string()).unwrap_or_default(),
            ProductField::Y => self.y.as_ref().map(|c| c.to_string()).unwrap_or_default(),
        }
    }
}

/// Data keys of the displayable product fields, named as in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Title,
    Addresses,
    Category,
    HumanReview,
    BlogReview,
    X,
    Y,
}

impl ProductField {
    pub const ALL: [ProductField; 7] = [
        ProductField::Title,
        ProductField::Addresses,
        ProductField::Category,
        ProductField::HumanReview,
        ProductField::BlogReview,
        ProductField::X,
        ProductField::Y,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ProductField::Title => "title",
            ProductField::Addresses => "addresses",
            ProductField::Category => "category",
            ProductField::HumanReview => "human_review",
            ProductField::BlogReview => "blog_review",
            ProductField::X => "x",
            ProductField::Y => "y",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mixed_field_types() {
        let json = r#"[
            {"id": 1, "title": "A Nail Shop", "addresses": "123 Main", "category": "네일아트", "human_review": 12, "blog_review": 3, "x": 127.01, "y": "37.5"},
            {"id": "b-2", "title": "B Spa", "addresses": 42},
            {"id": 3, "title": "C Nail", "addresses": null}
        ]"#;
        let records: Vec<ProductRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0].id, ProductId::Number(1));
        assert_eq!(records[0].addresses.as_text(), Some("123 Main"));
        assert_eq!(records[0].x, Some(Coordinate::Number(127.01)));
        assert_eq!(records[0].y, Some(Coordinate::Text("37.5".to_string())));

        assert_eq!(records[1].id, ProductId::Text("b-2".to_string()));
        assert_eq!(records[1].addresses, AddressField::Other(serde_json::json!(42)));
        assert_eq!(records[1].human_review, 0);
        assert_eq!(records[1].x, None);

        assert_eq!(records[2].addresses.as_text(), None);
    }

    #[test]
    fn test_missing_addresses_is_not_text() {
        let record: ProductRecord = serde_json::from_str(r#"{"id": 9, "title": "D"}"#).unwrap();
        assert_eq!(record.addresses, AddressField::Other(serde_json::Value::Null));
        assert_eq!(record.field_text(ProductField::Addresses), "");
    }

    #[test]
    fn test_field_text() {
        let record = ProductRecord {
            id: ProductId::Number(7),
            title: "Seoul Nail".to_string(),
            addresses: AddressField::Text("서울 강남구".to_string()),
            category: "네일샵".to_string(),
            human_review: 1520,
            blog_review: 8,
            x: Some(Coordinate::Number(127.5)),
            y: None,
        };
        assert_eq!(record.row_key(), "7");
        assert_eq!(record.field_text(ProductField::Title), "Seoul Nail");
        assert_eq!(record.field_text(ProductField::Addresses), "서울 강남구");
        assert_eq!(record.field_text(ProductField::HumanReview), "1,520");
        assert_eq!(record.field_text(ProductField::X), "127.5");
        assert_eq!(record.field_text(ProductField::Y), "");
    }

    #[test]
    fn test_field_keys() {
        for field in ProductField::ALL {
            assert_eq!(ProductField::from_key(field.key()), Some(field));
        }
        assert_eq!(ProductField::from_key("action"), None);
    }
}
