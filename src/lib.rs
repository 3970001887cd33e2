pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod locale;
pub mod logger;
pub mod names;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;
pub mod util;

pub use config::{CliArgs, EmailConfig};
pub use error::{InvoiceError, Result};
pub use loader::Table;
pub use locale::Language;
pub use pipeline::{process_csv_str, process_table};
pub use types::{ProcessingResult, RenderedEmail};
