//! Mesh export

pub mod off;

pub use off::{save_off, to_off_string, write_off, MeshStats};
