//! Row selection set used by the table checkbox column and the bulk-action menu.

/// Checked row keys, in the order they were checked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowSelection {
    keys: Vec<String>,
}

/// Header checkbox state for the rows currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCheckState {
    All,
    Partial,
    None,
}

impl RowSelection {
    pub fn from_keys(keys: Vec<String>) -> Self {
        let mut selection = Self::default();
        selection.replace(keys);
        selection
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Gates the bulk-action trigger.
    pub fn has_selected(&self) -> bool {
        !self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Replace the whole selection. Repeated keys collapse to their first position.
    pub fn replace(&mut self, keys: Vec<String>) {
        let mut deduped: Vec<String> = Vec::with_capacity(keys.len());
        for key in keys {
            if !deduped.contains(&key) {
                deduped.push(key);
            }
        }
        self.keys = deduped;
    }

    /// Keys after checking or unchecking a single row.
    pub fn toggled(&self, key: &str, checked: bool) -> Vec<String> {
        let mut keys: Vec<String> = self.keys.iter().filter(|k| *k != key).cloned().collect();
        if checked {
            keys.push(key.to_string());
        }
        keys
    }

    /// Keys after the header checkbox (un)checks every row of the current page.
    /// Rows of other pages keep their state.
    pub fn page_toggled(&self, page_keys: &[String], checked: bool) -> Vec<String> {
        if checked {
            let mut keys = self.keys.clone();
            for key in page_keys {
                if !keys.contains(key) {
                    keys.push(key.clone());
                }
            }
            keys
        } else {
            self.keys.iter().filter(|k| !page_keys.contains(k)).cloned().collect()
        }
    }

    pub fn page_state(&self, page_keys: &[String]) -> PageCheckState {
        let checked = page_keys.iter().filter(|k| self.contains(k)).count();
        if checked == 0 {
            PageCheckState::None
        } else if checked == page_keys.len() {
            PageCheckState::All
        } else {
            PageCheckState::Partial
        }
    }
}
