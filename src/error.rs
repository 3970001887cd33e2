use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("Columna '{column}' no encontrada. Columnas disponibles: {}", list_repr(.available))]
    SchemaError {
        column: String,
        available: Vec<String>,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Rendering error: {0}")]
    RenderError(#[from] std::fmt::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, InvoiceError>;

fn list_repr(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| items.join(", "))
}
