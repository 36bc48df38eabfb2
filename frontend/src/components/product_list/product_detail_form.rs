//! Read-only product form used by the create and edit pages.

use common::product::{ProductField, ProductRecord};
use dioxus::prelude::*;


fn field_label(field: ProductField) -> &'static str {
    match field {
        ProductField::Title => "업체명",
        ProductField::Addresses => "업체주소",
        ProductField::Category => "영업분류",
        ProductField::HumanReview => "방문자 리뷰수",
        ProductField::BlogReview => "블로그 리뷰수",
        ProductField::X => "X좌표",
        ProductField::Y => "Y좌표",
    }
}

#[component]
pub fn ProductDetailForm(product: Option<ProductRecord>) -> Element {
    let rows: Vec<(ProductField, String)> = ProductField::ALL
        .into_iter()
        .map(|field| (field, product.as_ref().map(|p| p.field_text(field)).unwrap_or_default()))
        .collect();

    rsx! {
        form {
            style: "
                display: grid;
                grid-template-columns: 140px 1fr;
                gap: 10px 16px;
                align-items: center;
                max-width: 720px;
                padding: 20px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
            ",
            onsubmit: move |e| e.prevent_default(),
            for (field, value) in rows.into_iter() {
                div {
                    key: "{field.key()}",
                    style: "display: contents;",
                    label {
                        r#for: "product-{field.key()}",
                        style: "font-size: 14px; color: #4B5563;",
                        "{field_label(field)}"
                    }
                    input {
                        id: "product-{field.key()}",
                        r#type: "text",
                        readonly: true,
                        value: "{value}",
                        style: "height: 32px; border: 1px solid #D1D5DB; border-radius: 6px; padding: 0 10px; background: #F9FAFB;",
                    }
                }
            }
        }
    }
}
