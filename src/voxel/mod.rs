//! Voxel data structures and operations

pub mod voxel;
pub mod grid;
pub mod brush;

pub use voxel::{Color, Voxel};
pub use grid::VoxelGrid;
pub use brush::{BlendMode, BrushPrimitive, BrushStroke};
