//! Brush system for sculpting voxels
//!
//! Fills or clears grid voxels using primitive shapes.

pub mod primitive;
pub mod stroke;

// Re-exports
pub use primitive::BrushPrimitive;
pub use stroke::{BrushStroke, BlendMode};
