/// Error types for color parsing, gradients, surfaces and the renderer.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
    #[error("invalid rgb()/rgba() color: {0}")]
    InvalidFunction(String),
    #[error("unknown color name: {0}")]
    UnknownName(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GradientError {
    #[error("a gradient needs at least 2 colors, got {0}")]
    TooFewColors(usize),
}

/// Failure reported by a drawing surface backend.
#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("restore() called without a matching save()")]
    RestoreWithoutSave,
    #[error("{operation} failed: {message}")]
    Operation {
        operation: &'static str,
        message: String,
    },
    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("no drawing surface was supplied")]
    MissingSurface,
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error(transparent)]
    Gradient(#[from] GradientError),
}
