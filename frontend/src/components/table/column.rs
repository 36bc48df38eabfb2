//! Column definitions for [`DataTable`](super::data_table::DataTable).

use dioxus::prelude::*;


/// A row the table can display and select.
pub trait TableRow {
    /// Stable key used for selection.
    fn row_key(&self) -> String;
    /// Default cell text for a column's data index.
    fn cell_text(&self, data_index: &str) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl ColumnAlign {
    pub fn css(self) -> &'static str {
        match self {
            ColumnAlign::Left => "left",
            ColumnAlign::Center => "center",
            ColumnAlign::Right => "right",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ColumnDef<T: 'static> {
    pub key: &'static str,
    pub title: String,
    pub data_index: Option<&'static str>,
    pub width: u32,
    pub align: ColumnAlign,
    /// Custom cell renderer. Without one the cell shows [`TableRow::cell_text`].
    pub render: Option<Callback<T, Element>>,
}

impl<T: TableRow + 'static> ColumnDef<T> {
    pub fn data(key: &'static str, title: &str, width: u32) -> Self {
        Self {
            key,
            title: title.to_string(),
            data_index: Some(key),
            width,
            align: ColumnAlign::Left,
            render: None,
        }
    }

    /// A column with no data index, drawn entirely by `render`.
    pub fn custom(key: &'static str, title: &str, width: u32, render: Callback<T, Element>) -> Self {
        Self {
            key,
            title: title.to_string(),
            data_index: None,
            width,
            align: ColumnAlign::Left,
            render: Some(render),
        }
    }

    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }

    pub fn render(mut self, render: Callback<T, Element>) -> Self {
        self.render = Some(render);
        self
    }

    pub fn cell(&self, row: &T) -> Element
    where
        T: Clone,
    {
        if let Some(render) = self.render {
            return render.call(row.clone());
        }
        let text = self.data_index.map(|index| row.cell_text(index)).unwrap_or_default();
        rsx! { "{text}" }
    }
}
