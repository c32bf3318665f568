use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Invalid color '{0}': {1}")]
    InvalidColor(String, String),
    #[error("Invalid length '{0}': {1}")]
    InvalidLength(String, String),
    #[error("Unknown font '{0}'")]
    UnknownFont(String),
    #[error("Unknown page size '{0}'")]
    UnknownPageSize(String),
    #[error("Style '{0}' is not defined in the stylesheet")]
    UnknownStyle(String),
    #[error("Style inheritance cycle through '{0}'")]
    InheritanceCycle(String),
}
