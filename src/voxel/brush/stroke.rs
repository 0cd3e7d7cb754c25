//! Brush stroke representation

use crate::core::{IVec3, Result};
use crate::math::GridRegion;
use crate::voxel::grid::VoxelGrid;
use crate::voxel::voxel::Color;
use super::primitive::BrushPrimitive;

/// How a stroke changes the voxels it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Fill,  // Switch on and paint
    Clear, // Switch off, color untouched (carving)
}

/// A primitive paired with the way it is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushStroke {
    /// The primitive shape
    pub primitive: BrushPrimitive,
    /// Fill or clear
    pub blend_mode: BlendMode,
}

impl BrushStroke {
    /// Create a fill stroke
    pub fn new(primitive: BrushPrimitive) -> Self {
        Self {
            primitive,
            blend_mode: BlendMode::Fill,
        }
    }

    /// Single voxel stroke
    pub fn voxel(x: i32, y: i32, z: i32) -> Self {
        Self::new(BrushPrimitive::Voxel { at: IVec3::new(x, y, z) })
    }

    /// Box stroke over `[x0,x1) x [y0,y1) x [z0,z1)`
    pub fn box_stroke(x0: i32, x1: i32, y0: i32, y1: i32, z0: i32, z1: i32) -> Self {
        Self::new(BrushPrimitive::Box {
            min: IVec3::new(x0, y0, z0),
            max: IVec3::new(x1, y1, z1),
        })
    }

    /// Sphere stroke
    pub fn sphere(xc: i32, yc: i32, zc: i32, radius: i32) -> Self {
        Self::new(BrushPrimitive::Sphere {
            center: IVec3::new(xc, yc, zc),
            radius,
        })
    }

    /// Ellipsoid stroke
    pub fn ellipsoid(xc: i32, yc: i32, zc: i32, rx: i32, ry: i32, rz: i32) -> Self {
        Self::new(BrushPrimitive::Ellipsoid {
            center: IVec3::new(xc, yc, zc),
            radii: IVec3::new(rx, ry, rz),
        })
    }

    /// Set blend mode (builder pattern)
    pub fn with_blend(mut self, mode: BlendMode) -> Self {
        self.blend_mode = mode;
        self
    }

    /// Apply the stroke to `grid`, painting filled voxels with `color`.
    ///
    /// Parameters and bounds are checked before the first voxel changes, so
    /// a failed stroke leaves the grid as it was. Returns the number of
    /// voxels the stroke covered.
    pub fn apply(&self, grid: &mut VoxelGrid, color: Color) -> Result<usize> {
        let region = self.primitive.scan_region(&grid.bounds())?;
        Ok(self.paint(grid, &region, color))
    }

    /// Fill or clear every voxel of `region` inside both the grid and the
    /// primitive. No parameter or bounds checks are made; cells outside the
    /// grid are skipped.
    pub fn paint(&self, grid: &mut VoxelGrid, region: &GridRegion, color: Color) -> usize {
        let mut touched = 0;
        grid.for_each_in(region, |p, voxel| {
            if !self.primitive.contains_point(p) {
                return;
            }
            match self.blend_mode {
                BlendMode::Fill => voxel.fill(color),
                BlendMode::Clear => voxel.clear(),
            }
            touched += 1;
        });

        log::debug!("{:?} {:?}: {} voxels", self.blend_mode, self.primitive, touched);
        touched
    }
}
