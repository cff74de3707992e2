use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("Invalid value for {attribute}: '{value}'")]
    InvalidValue { attribute: String, value: String },

    #[error("Unknown attribute: '{name}' (expected one of: {known})")]
    UnknownAttribute { name: String, known: String },

    #[error("No journal entry at position {0}")]
    EntryNotFound(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl SolidError {
    pub fn invalid_value(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        SolidError::InvalidValue {
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;
