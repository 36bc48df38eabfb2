//! Column configuration of the product table.

use common::number_format::format_review_count;
use common::product::{ProductField, ProductRecord};
use dioxus::prelude::*;

use crate::components::table::column::{ColumnAlign, ColumnDef, TableRow};


impl TableRow for ProductRecord {
    fn row_key(&self) -> String {
        ProductRecord::row_key(self)
    }

    fn cell_text(&self, data_index: &str) -> String {
        ProductField::from_key(data_index)
            .map(|field| self.field_text(field))
            .unwrap_or_default()
    }
}

/// Cell renderers the product table needs from its owner.
#[derive(Clone, Copy, PartialEq)]
pub struct ProductCellRenderers {
    pub action: Callback<ProductRecord, Element>,
    pub human_review: Callback<ProductRecord, Element>,
    pub blog_review: Callback<ProductRecord, Element>,
}

pub fn product_columns(renderers: ProductCellRenderers) -> Vec<ColumnDef<ProductRecord>> {
    vec![
        ColumnDef::custom("action", "", 120, renderers.action).align(ColumnAlign::Center),
        ColumnDef::data(ProductField::Title.key(), "업체명", 100),
        ColumnDef::data(ProductField::Addresses.key(), "업체주소", 400),
        ColumnDef::data(ProductField::Category.key(), "영업분류", 100).align(ColumnAlign::Center),
        ColumnDef::data(ProductField::HumanReview.key(), "방문자 리뷰수", 100)
            .align(ColumnAlign::Center)
            .render(renderers.human_review),
        ColumnDef::data(ProductField::BlogReview.key(), "블로그 리뷰수", 100)
            .align(ColumnAlign::Center)
            .render(renderers.blog_review),
        ColumnDef::data(ProductField::X.key(), "X좌표", 120).align(ColumnAlign::Center),
        ColumnDef::data(ProductField::Y.key(), "Y좌표", 120).align(ColumnAlign::Center),
    ]
}

/// Review count cell: `1,520건`.
pub fn review_count_cell(field: ProductField) -> impl FnMut(ProductRecord) -> Element + 'static {
    move |record: ProductRecord| {
        let count = match field {
            ProductField::BlogReview => record.blog_review,
            _ => record.human_review,
        };
        rsx! {
            p { style: "margin: 0;", "{format_review_count(count)}" }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::product::{AddressField, Coordinate, ProductId};

    #[test]
    fn test_product_cell_text() {
        let record = ProductRecord {
            id: ProductId::Number(12),
            title: "봄날 네일".to_string(),
            addresses: AddressField::Other(serde_json::json!(["서울"])),
            category: "네일샵".to_string(),
            human_review: 2048,
            blog_review: 0,
            x: Some(Coordinate::Text("127.1".to_string())),
            y: Some(Coordinate::Number(37.5)),
        };
        assert_eq!(TableRow::row_key(&record), "12");
        assert_eq!(record.cell_text("title"), "봄날 네일");
        assert_eq!(record.cell_text("addresses"), "");
        assert_eq!(record.cell_text("human_review"), "2,048");
        assert_eq!(record.cell_text("x"), "127.1");
        assert_eq!(record.cell_text("y"), "37.5");
        assert_eq!(record.cell_text("action"), "");
    }
}
