//! Rendering and output errors

use std::path::PathBuf;

/// The diagram could not be written to its destination.
#[derive(Debug, thiserror::Error)]
#[error("could not write diagram to {}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// All the ways building a single airframe diagram can fail
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// An anchor refers to a ring vertex that does not exist
    #[error("{airframe}: vertex {index} requested but the ring has {count} vertices")]
    VertexOutOfRange {
        airframe: String,
        index: usize,
        count: usize,
    },
    /// The finished document could not be written
    #[error(transparent)]
    Write(#[from] WriteError),
}
