use thiserror::Error;

#[derive(Debug, Error)]
pub enum GpioError {
    #[error("Unable to export: {0}")]
    Export(String),
    #[error("Unable to unexport: {0}")]
    Unexport(String),
    #[error("Unable to set {attribute} for: {path}")]
    Attribute {
        attribute: &'static str,
        path: String,
    },
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
