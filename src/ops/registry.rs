use std::collections::HashSet;

use crate::model::column::{CellRender, ColumnSpec, CommitPolicy};
use crate::model::config::ColumnConfig;
use crate::model::record::RecordField;

/// Error type for column registry construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate column key: {0}")]
    DuplicateKey(String),
    #[error("filterable column '{0}' does not name a record field")]
    UnknownField(String),
    #[error("column '{0}' has neither a record field nor a renderer")]
    Unbound(String),
    #[error("column '{key}' uses unknown renderer '{render}'")]
    UnknownRenderer { key: String, render: String },
}

/// Ordered, validated, immutable list of table columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRegistry {
    columns: Vec<ColumnSpec>,
}

impl ColumnRegistry {
    /// Validate column entries and resolve each key's record field and renderer.
    pub fn from_configs(configs: &[ColumnConfig]) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        let mut columns = Vec::with_capacity(configs.len());

        for cfg in configs {
            if !seen.insert(cfg.key.as_str()) {
                return Err(RegistryError::DuplicateKey(cfg.key.clone()));
            }

            let field = RecordField::from_key(&cfg.key);
            let render = match &cfg.render {
                Some(id) => Some(CellRender::from_id(id).ok_or_else(|| {
                    RegistryError::UnknownRenderer {
                        key: cfg.key.clone(),
                        render: id.clone(),
                    }
                })?),
                None => None,
            };

            if cfg.filterable && field.is_none() {
                return Err(RegistryError::UnknownField(cfg.key.clone()));
            }
            if field.is_none() && render.is_none() {
                return Err(RegistryError::Unbound(cfg.key.clone()));
            }

            columns.push(ColumnSpec {
                key: cfg.key.clone(),
                label: cfg.label.clone(),
                filterable: cfg.filterable,
                commit: cfg.commit,
                field,
                render,
            });
        }

        tracing::debug!(columns = columns.len(), "column registry built");
        Ok(ColumnRegistry { columns })
    }

    /// The built-in production schedule columns
    pub fn standard() -> Self {
        ColumnRegistry::from_configs(&default_columns())
            .expect("built-in column definitions are valid")
    }

    /// Build from `[[columns]]`, falling back to the built-in list when empty
    pub fn from_config_or_standard(configs: &[ColumnConfig]) -> Result<Self, RegistryError> {
        if configs.is_empty() {
            Ok(ColumnRegistry::standard())
        } else {
            ColumnRegistry::from_configs(configs)
        }
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn get(&self, key: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Filterable columns, in display order
    pub fn filterable(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|c| c.filterable)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

fn column(key: &str, label: &str, filterable: bool) -> ColumnConfig {
    ColumnConfig {
        key: key.to_string(),
        label: label.to_string(),
        filterable,
        commit: CommitPolicy::Change,
        render: None,
    }
}

/// Column entries for the standard schedule layout
pub fn default_columns() -> Vec<ColumnConfig> {
    vec![
        column("product", "Product", true),
        column("productFamily", "Product Family", true),
        column("plantLocation", "Plant Location", true),
        column("quantity", "Quantity", false),
        column("dueDate", "Due Date", false),
        column("currentStock", "Current Stock", false),
        column("productionOrders", "Production Orders", false),
        ColumnConfig {
            render: Some(CellRender::Gantt.id().to_string()),
            ..column("gantt", "Gantt Chart", false)
        },
    ]
}
