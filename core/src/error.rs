use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("{entity} CSV missing required columns: {}", columns.join(", "))]
    MissingColumns {
        entity: &'static str,
        columns: Vec<String>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{entity} row {row}: invalid value in column '{column}': {value}")]
    InvalidField {
        entity: &'static str,
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Unknown business profile '{0}' (expected b2b-saas, manufacturer, or consultancy)")]
    UnknownProfile(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GenResult<T> = Result<T, GenError>;
