use thiserror::Error;

/// Top-level error type for the mensura shape library.
#[derive(Debug, Error)]
pub enum MensuraError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised by the shape capability itself.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    /// The shape has no notion of the requested quantity, e.g. the volume
    /// of a flat shape. This is not the same as a quantity of zero.
    #[error("{operation} is not defined for a {shape}")]
    UnsupportedOperation {
        operation: &'static str,
        shape: String,
    },
}

impl ShapeError {
    /// The error every flat shape returns from `volume()`.
    #[must_use]
    pub fn no_volume(shape: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            operation: "volume",
            shape: shape.into(),
        }
    }
}

/// Errors raised by the validating constructors (`try_new`).
#[derive(Debug, Error, PartialEq)]
pub enum DimensionError {
    #[error("{parameter} = {value} must not be negative")]
    Negative { parameter: &'static str, value: f64 },

    #[error("{parameter} = {value} is not a finite number")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Errors related to the shape arena.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// The shape was not registered through `add_flat`, so it cannot
    /// serve as a prism base.
    #[error("shape was not added as a flat shape: {0}")]
    NotFlat(String),
}

/// Convenience type alias for results using [`MensuraError`].
pub type Result<T> = std::result::Result<T, MensuraError>;
