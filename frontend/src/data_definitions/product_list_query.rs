//! Route query segment for the product list page.

use std::fmt::Display;

use common::list_query::ListQuery;


// The router hands over the raw query string (no leading '?') and renders the
// segment back through Display, so the two have to agree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductListQuery(pub ListQuery);

impl From<ListQuery> for ProductListQuery {
    fn from(value: ListQuery) -> Self {
        ProductListQuery(value)
    }
}

impl From<&str> for ProductListQuery {
    fn from(query: &str) -> Self {
        ProductListQuery(ListQuery::parse(query))
    }
}

impl Display for ProductListQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
