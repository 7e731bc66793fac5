//! Error types for dataset loading

use crate::consts::dashboard_consts::DATA_GENERATION_COMMAND;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// An expected input file does not exist.
    #[error("Data file not found: {}", path.display())]
    MissingSource { path: PathBuf },

    /// Arrow IPC decoding or column access failed.
    #[error("{0}")]
    Decode(#[from] polars::error::PolarsError),

    /// Reading the file failed for a reason other than it being absent.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A column contained a value the dashboard cannot display.
    #[error("column '{column}' in {source_name}: {reason}")]
    InvalidValue {
        source_name: &'static str,
        column: &'static str,
        reason: String,
    },

    /// The source decoded fine but has no rows.
    #[error("{0} dataset is empty")]
    Empty(&'static str),
}

impl LoadError {
    pub fn is_missing_source(&self) -> bool {
        matches!(self, LoadError::MissingSource { .. })
    }

    /// The message shown in place of the dashboard.
    pub fn user_message(&self) -> String {
        match self {
            LoadError::MissingSource { .. } => format!(
                "⚠️ No se encontraron archivos de datos. Por favor, ejecuta primero el script R: `{}`",
                DATA_GENERATION_COMMAND
            ),
            other => format!("❌ Error al cargar los datos: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_asks_for_data_generation() {
        let err = LoadError::MissingSource {
            path: PathBuf::from("data/temp_data.feather"),
        };
        assert!(err.is_missing_source());
        assert!(err.user_message().contains("Rscript get-weather.R"));
    }

    #[test]
    fn load_failure_carries_underlying_text() {
        let err = LoadError::InvalidValue {
            source_name: "hourly",
            column: "temp",
            reason: "null value at row 3".to_string(),
        };
        assert!(!err.is_missing_source());
        let msg = err.user_message();
        assert!(msg.starts_with("❌ Error al cargar los datos:"));
        assert!(msg.contains("null value at row 3"));
    }
}
