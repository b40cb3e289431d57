use indexmap::IndexMap;
use serde::Serialize;

use super::registry::ColumnRegistry;

/// Error type for filter mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("column is not filterable: {0}")]
    NotFilterable(String),
}

/// Active per-column filter values, keyed by column key.
///
/// Keys are always filterable columns of the registry the values were set
/// against. A missing key means the column is unfiltered. Insertion order is
/// kept so status lines and JSON output list filters in the order they were
/// applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterState {
    values: IndexMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column's filter. A blank value removes the filter; anything else is
    /// stored verbatim. On error the state is left unchanged.
    pub fn set_filter(
        &mut self,
        registry: &ColumnRegistry,
        column_key: &str,
        value: &str,
    ) -> Result<(), FilterError> {
        let column = match registry.get(column_key) {
            Some(c) => c,
            None => {
                tracing::warn!(column = column_key, "filter rejected: unknown column");
                return Err(FilterError::UnknownColumn(column_key.to_string()));
            }
        };
        if !column.filterable {
            tracing::warn!(column = column_key, "filter rejected: column not filterable");
            return Err(FilterError::NotFilterable(column_key.to_string()));
        }

        if value.trim().is_empty() {
            self.clear_filter(column_key);
        } else {
            tracing::debug!(column = column_key, value, "filter set");
            self.values
                .insert(column_key.to_string(), value.to_string());
        }
        Ok(())
    }

    /// Remove a column's filter. No-op if the column is unfiltered.
    pub fn clear_filter(&mut self, column_key: &str) {
        if self.values.shift_remove(column_key).is_some() {
            tracing::debug!(column = column_key, "filter cleared");
        }
    }

    pub fn clear_all(&mut self) {
        self.values.clear();
    }

    /// Read-only view of the active filters
    pub fn filters(&self) -> &IndexMap<String, String> {
        &self.values
    }

    pub fn get(&self, column_key: &str) -> Option<&str> {
        self.values.get(column_key).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}
