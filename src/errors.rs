use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ImpactError {
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl ImpactError {
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        ImpactError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Impact error: {0}")]
    Impact(#[from] ImpactError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),
}
