use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate product id '{0}'")]
    DuplicateProduct(String),

    #[error("Invalid facet schema: {0}")]
    InvalidSchema(String),

    #[error("Unknown facet '{0}'")]
    UnknownFacet(String),

    #[error("'{value}' is not an option of facet '{facet}'")]
    UnknownOption { facet: String, value: String },

    #[error("Range for facet '{facet}' is inverted: {low} > {high}")]
    InvertedRange { facet: String, low: f64, high: f64 },

    #[error("Range for facet '{facet}' lies outside [{min}, {max}]")]
    OutOfBounds { facet: String, min: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
