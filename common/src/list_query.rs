//! URL query-string state of the product list page.

use std::fmt::Display;

use crate::product_const::{QUERY_PAGE, QUERY_SEARCH_TEXT, QUERY_SEARCH_TYPE};
use crate::product_filter::{ProductFilter, SearchType};


/// Query parameters in the order they appeared in the URL.
///
/// Parsing never fails: empty pairs are skipped, a key without `=` gets an
/// empty value, and undecodable escapes are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    params: Vec<(String, String)>,
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

impl ListQuery {
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self { params }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Replace the first occurrence of `key` in place (dropping any repeats),
    /// or append it when absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.params.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.params[first].1 = value;
                let mut index = 0;
                self.params.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => self.params.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.params.retain(|(k, _)| k != key);
    }

    /// Current 1-based page. Only plain positive integers count: absent, zero,
    /// negative, fractional (`4.0`) and exponent (`1e1`) values all read as page 1.
    pub fn page(&self) -> u64 {
        self.get(QUERY_PAGE)
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1)
    }

    /// The same query with `page` set to `page`; every other parameter is kept.
    pub fn with_page(&self, page: u64) -> Self {
        let mut next = self.clone();
        next.set(QUERY_PAGE, page.to_string());
        next
    }

    pub fn product_filter(&self) -> ProductFilter {
        ProductFilter::new(self.get(QUERY_SEARCH_TYPE), self.get(QUERY_SEARCH_TEXT))
    }

    /// Apply a new search. The page resets to the first one.
    pub fn with_search(&self, search_type: &SearchType, search_text: &str) -> Self {
        let mut next = self.clone();
        next.set(QUERY_SEARCH_TYPE, search_type.as_query_value());
        next.set(QUERY_SEARCH_TEXT, search_text);
        next.remove(QUERY_PAGE);
        next
    }

    pub fn without_search(&self) -> Self {
        let mut next = self.clone();
        next.remove(QUERY_SEARCH_TYPE);
        next.remove(QUERY_SEARCH_TEXT);
        next.remove(QUERY_PAGE);
        next
    }
}

// Display produces a string `parse` reads back, without the leading '?'.
impl Display for ListQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, (key, value)) in self.params.iter().enumerate() {
            if index > 0 {
                write!(f, "&")?;
            }
            write!(f, "{}={}", urlencoding::encode(key), urlencoding::encode(value))?;
        }
        Ok(())
    }
}
