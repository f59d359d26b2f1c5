use std::io;

use thiserror::Error;

/// Failure of a render call.
///
/// The sink keeps whatever was written before the failing write.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write rendered output: {0}")]
    Io(#[from] io::Error),
}
