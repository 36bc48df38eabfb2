//! Paginated data table with an optional checkbox selection column.

use common::{number_format::format_count, pagination::Pagination, product_const::COUNT_UNIT, selection::{PageCheckState, RowSelection}};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank, MdIndeterminateCheckBox}};

use crate::components::table::column::{ColumnDef, TableRow};
use crate::components::table::pagination_bar::PaginationBar;


#[derive(Clone, PartialEq)]
pub struct RowSelectionConfig {
    pub selected_row_keys: Vec<String>,
    /// Called with the complete new key list after any check/uncheck.
    pub on_change: Callback<Vec<String>>,
}

#[derive(Clone, PartialEq)]
pub struct PaginationConfig {
    pub current: u64,
    pub page_size: u64,
    /// Row count the pager is computed from.
    pub total: u64,
    pub on_change: Callback<u64>,
}

const SELECTION_COLUMN_WIDTH: u32 = 48;

#[component]
pub fn DataTable<T: TableRow + Clone + PartialEq + 'static>(
    columns: Vec<ColumnDef<T>>,
    data_source: ReadSignal<Vec<T>>,
    row_selection: Option<RowSelectionConfig>,
    pagination: PaginationConfig,
    count_label: Option<u64>,
) -> Element {
    let pager = Pagination::new(pagination.current, pagination.page_size, pagination.total);
    let range = pager.row_range();
    let page_rows: Vec<T> = data_source.read().iter().skip(range.start).take(range.len()).cloned().collect();
    let page_keys: Vec<String> = page_rows.iter().map(|row| row.row_key()).collect();
    let column_count = columns.len() + usize::from(row_selection.is_some());
    let on_page_change = pagination.on_change;

    rsx! {
        div {
            class: "x-data-table",
            style: "width: 100%;",

            if let Some(count) = count_label {
                div {
                    style: "font-size: 14px; color: #4B5563; padding: 6px 2px;",
                    "총 "
                    strong { "{format_count(count)}" }
                    "{COUNT_UNIT}"
                }
            }

            table {
                class: "data-table",
                thead {
                    tr {
                        if let Some(selection) = row_selection.clone() {
                            th {
                                style: "width: {SELECTION_COLUMN_WIDTH}px; text-align: center;",
                                HeaderCheckbox { selection, page_keys: page_keys.clone() }
                            }
                        }
                        for column in columns.iter() {
                            th {
                                key: "{column.key}",
                                style: "width: {column.width}px; text-align: {column.align.css()};",
                                "{column.title}"
                            }
                        }
                    }
                }
                tbody {
                    if page_rows.is_empty() {
                        tr {
                            td {
                                colspan: "{column_count}",
                                style: "text-align: center; padding: 40px 0; color: rgba(0,0,0,0.4);",
                                "데이터가 없습니다"
                            }
                        }
                    }
                    for row in page_rows.iter() {
                        DataTableRow {
                            key: "{row.row_key()}",
                            row: row.clone(),
                            columns: columns.clone(),
                            row_selection: row_selection.clone(),
                        }
                    }
                }
            }

            PaginationBar { pagination: pager, on_change: on_page_change }
        }
    }
}

#[component]
fn DataTableRow<T: TableRow + Clone + PartialEq + 'static>(
    row: T,
    columns: Vec<ColumnDef<T>>,
    row_selection: Option<RowSelectionConfig>,
) -> Element {
    let key = row.row_key();
    let is_selected = row_selection
        .as_ref()
        .is_some_and(|selection| selection.selected_row_keys.contains(&key));
    let row_class = if is_selected { "row-selected" } else { "" };

    rsx! {
        tr {
            class: "{row_class}",
            if let Some(selection) = row_selection.clone() {
                td {
                    style: "text-align: center;",
                    RowCheckbox { selection, row_key: key.clone() }
                }
            }
            for column in columns.iter() {
                td {
                    key: "{column.key}",
                    style: "text-align: {column.align.css()};",
                    {column.cell(&row)}
                }
            }
        }
    }
}

#[component]
fn RowCheckbox(selection: RowSelectionConfig, row_key: String) -> Element {
    let current = RowSelection::from_keys(selection.selected_row_keys.clone());
    let checked = current.contains(&row_key);
    let on_change = selection.on_change;
    rsx! {
        CheckboxIcon {
            state: if checked { PageCheckState::All } else { PageCheckState::None },
            onclick: move |_| on_change(current.toggled(&row_key, !checked)),
        }
    }
}

#[component]
fn HeaderCheckbox(selection: RowSelectionConfig, page_keys: Vec<String>) -> Element {
    let current = RowSelection::from_keys(selection.selected_row_keys.clone());
    let state = current.page_state(&page_keys);
    let on_change = selection.on_change;
    rsx! {
        CheckboxIcon {
            state,
            onclick: move |_| {
                if page_keys.is_empty() {
                    return;
                }
                let check_all = state != PageCheckState::All;
                on_change(current.page_toggled(&page_keys, check_all));
            },
        }
    }
}

#[component]
pub(crate) fn CheckboxIcon(state: PageCheckState, onclick: Callback<()>) -> Element {
    let color = match state {
        PageCheckState::None => "#9CA3AF",
        PageCheckState::All | PageCheckState::Partial => "#4F46E5",
    };
    let label = match state {
        PageCheckState::All => "true",
        PageCheckState::Partial => "mixed",
        PageCheckState::None => "false",
    };
    rsx! {
        span {
            role: "checkbox",
            "aria-checked": "{label}",
            style: "cursor: pointer; display: inline-flex; align-items: center; color: {color};",
            onclick: move |_e| {
                _e.stop_propagation();
                onclick(());
            },
            {match state {
                PageCheckState::All => rsx! { Icon { icon: MdCheckBox, style: "width: 20px; height: 20px;" } },
                PageCheckState::Partial => rsx! { Icon { icon: MdIndeterminateCheckBox, style: "width: 20px; height: 20px;" } },
                PageCheckState::None => rsx! { Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px;" } },
            }}
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq)]
    struct Shop {
        id: u32,
        name: &'static str,
    }

    impl TableRow for Shop {
        fn row_key(&self) -> String {
            self.id.to_string()
        }

        fn cell_text(&self, data_index: &str) -> String {
            match data_index {
                "name" => self.name.to_string(),
                _ => String::new(),
            }
        }
    }

    fn shops() -> Vec<Shop> {
        ["apple", "banana", "cherry", "durian", "elder"]
            .into_iter()
            .enumerate()
            .map(|(index, name)| Shop { id: index as u32 + 1, name })
            .collect()
    }

    #[component]
    fn TableHarness(rows: Vec<Shop>, current: u64, selected: Vec<String>) -> Element {
        let total = rows.len() as u64;
        rsx! {
            DataTable::<Shop> {
                columns: vec![ColumnDef::data("name", "이름", 100)],
                data_source: rows,
                row_selection: Some(RowSelectionConfig {
                    selected_row_keys: selected,
                    on_change: Callback::new(|_: Vec<String>| {}),
                }),
                pagination: PaginationConfig {
                    current,
                    page_size: 2,
                    total,
                    on_change: Callback::new(|_: u64| {}),
                },
                count_label: Some(total),
            }
        }
    }

    fn render_table(rows: Vec<Shop>, current: u64, selected: &[&str]) -> String {
        let selected = selected.iter().map(|s| s.to_string()).collect();
        let mut dom = VirtualDom::new_with_props(TableHarness, TableHarnessProps { rows, current, selected });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_renders_only_the_current_page() {
        let html = render_table(shops(), 2, &[]);
        assert!(html.contains("cherry"));
        assert!(html.contains("durian"));
        assert!(!html.contains("apple"));
        assert!(!html.contains("elder"));
        assert!(html.contains("이름"));
    }

    #[test]
    fn test_count_label_uses_total() {
        let html = render_table(shops(), 1, &[]);
        assert!(html.contains("총 "));
        assert!(html.contains("<strong>5</strong>"));
    }

    #[test]
    fn test_selected_rows_are_marked() {
        let html = render_table(shops(), 2, &["3"]);
        assert!(html.contains("row-selected"));
        assert!(html.contains("aria-checked=\"mixed\""));

        let html = render_table(shops(), 2, &["3", "4"]);
        assert!(html.contains("aria-checked=\"true\""));

        let html = render_table(shops(), 2, &["1"]);
        assert!(!html.contains("row-selected"));
    }

    #[test]
    fn test_empty_table() {
        let html = render_table(Vec::new(), 1, &[]);
        assert!(html.contains("데이터가 없습니다"));
    }
}
