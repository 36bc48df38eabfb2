//! Search form that writes `searchType` / `searchText` into the list query.

use common::list_query::ListQuery;
use common::product_filter::SearchType;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};


const SEARCH_TYPE_OPTIONS: [(SearchType, &str); 2] = [
    (SearchType::ProductName, "상품명"),
    (SearchType::BrandName, "브랜드명"),
];

fn initial_search_type(query: &ListQuery) -> String {
    match query.product_filter().search_type {
        Some(SearchType::BrandName) => SearchType::BrandName.as_query_value().to_string(),
        _ => SearchType::ProductName.as_query_value().to_string(),
    }
}

fn initial_search_text(query: &ListQuery) -> String {
    query.product_filter().search_text.unwrap_or_default()
}

#[component]
pub fn ProductSearchBar(query: ReadSignal<ListQuery>, on_query_change: Callback<ListQuery>) -> Element {
    let mut search_type = use_signal(|| initial_search_type(&query.read()));
    let mut search_text = use_signal(|| initial_search_text(&query.read()));
    // signals survive navigation, so follow the url when it changes
    use_effect(move || {
        let query = query.read();
        search_type.set(initial_search_type(&query));
        search_text.set(initial_search_text(&query));
    });

    let trigger_search = move |_: ()| {
        let text = search_text.read().clone();
        let next = if text.is_empty() {
            query.read().without_search()
        } else {
            query.read().with_search(&SearchType::parse(&search_type.read()), &text)
        };
        on_query_change(next);
    };
    let reset_search = move |_: ()| {
        on_query_change(query.read().without_search());
    };

    rsx! {
        div {
            id: "x-product-search-bar",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                padding: 14px 16px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
            ",
            select {
                style: "height: 32px; border: 1px solid #D1D5DB; border-radius: 6px; padding: 0 8px;",
                value: "{search_type}",
                onchange: move |event: Event<FormData>| search_type.set(event.value()),
                for (option, label) in SEARCH_TYPE_OPTIONS.iter() {
                    option {
                        key: "{option.as_query_value()}",
                        value: "{option.as_query_value()}",
                        selected: option.as_query_value() == search_type.read().as_str(),
                        "{label}"
                    }
                }
            }
            input {
                r#type: "text",
                placeholder: "검색어를 입력하세요",
                style: "
                    width: 320px;
                    height: 32px;
                    border: 1px solid #D1D5DB;
                    border-radius: 6px;
                    padding: 0 10px;
                    font-size: 14px;
                ",
                value: "{search_text}",
                oninput: move |event: Event<FormData>| search_text.set(event.value()),
                onkeydown: move |event: Event<KeyboardData>| {
                    if event.key() == Key::Enter {
                        trigger_search(());
                    }
                },
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| trigger_search(()),
                Icon { icon: MdSearch, style: "width: 16px; height: 16px;" }
                "검색"
            }
            button {
                class: "btn",
                onclick: move |_| reset_search(()),
                "초기화"
            }
        }
    }
}
