//! Error types for the sculpting engine

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the engine
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid grid dimensions {nx}x{ny}x{nz}")]
    InvalidDimensions { nx: usize, ny: usize, nz: usize },

    #[error("voxel ({x}, {y}, {z}) outside grid of {}x{}x{}", .dims[0], .dims[1], .dims[2])]
    OutOfBounds {
        x: i32,
        y: i32,
        z: i32,
        dims: [usize; 3],
    },

    #[error("ellipsoid radius cannot be zero (rx={rx}, ry={ry}, rz={rz})")]
    DegenerateRadius { rx: i32, ry: i32, rz: i32 },

    #[error("failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Script error: {0}")]
    Script(#[from] serde_json::Error),

    #[error("operation #{index} failed: {source}")]
    Operation {
        index: usize,
        #[source]
        source: Box<Error>,
    },
}
