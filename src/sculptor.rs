//! Sculpting engine: paint state plus fill/clear operations on a voxel grid

use std::path::Path;

use crate::core::Result;
use crate::export::{self, MeshStats};
use crate::voxel::brush::{BlendMode, BrushStroke};
use crate::voxel::grid::VoxelGrid;
use crate::voxel::voxel::Color;

/// Owns one voxel grid and the current paint color.
///
/// Point and box operations address cells directly and fail with
/// [`Error::OutOfBounds`](crate::core::Error::OutOfBounds) if they reach
/// outside the grid. Sphere and ellipsoid operations cover the whole grid and
/// only affect the cells that fall inside the shape.
#[derive(Clone, Debug)]
pub struct Sculptor {
    grid: VoxelGrid,
    color: Color,
}

impl Sculptor {
    /// Create a sculptor over an empty `nx * ny * nz` grid
    pub fn new(nx: usize, ny: usize, nz: usize) -> Result<Self> {
        Ok(Self::from_grid(VoxelGrid::new(nx, ny, nz)?))
    }

    /// Wrap an existing grid
    pub fn from_grid(grid: VoxelGrid) -> Self {
        Self {
            grid,
            color: Color::TRANSPARENT,
        }
    }

    /// Set the paint used by subsequent fill operations
    pub fn set_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.color = Color::new(r, g, b, a);
    }

    /// Current paint
    pub fn color(&self) -> Color {
        self.color
    }

    /// Underlying grid
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }


    /// Apply a stroke with the current paint, returning the voxels it covered
    pub fn apply(&mut self, stroke: &BrushStroke) -> Result<usize> {
        stroke.apply(&mut self.grid, self.color)
    }

    fn fill(&mut self, stroke: BrushStroke) -> Result<usize> {
        self.apply(&stroke.with_blend(BlendMode::Fill))
    }

    fn clear(&mut self, stroke: BrushStroke) -> Result<usize> {
        self.apply(&stroke.with_blend(BlendMode::Clear))
    }

    /// Switch a voxel on and paint it with the current color
    pub fn fill_voxel(&mut self, x: i32, y: i32, z: i32) -> Result<()> {
        self.grid.get_mut(x, y, z)?.fill(self.color);
        Ok(())
    }

    /// Switch a voxel off. Its color is left as it was.
    pub fn clear_voxel(&mut self, x: i32, y: i32, z: i32) -> Result<()> {
        self.grid.get_mut(x, y, z)?.clear();
        Ok(())
    }

    /// Fill `[x0,x1) x [y0,y1) x [z0,z1)`. Empty spans do nothing.
    pub fn fill_box(&mut self, x0: i32, x1: i32, y0: i32, y1: i32, z0: i32, z1: i32) -> Result<usize> {
        self.fill(BrushStroke::box_stroke(x0, x1, y0, y1, z0, z1))
    }

    /// Clear `[x0,x1) x [y0,y1) x [z0,z1)`. Empty spans do nothing.
    pub fn clear_box(&mut self, x0: i32, x1: i32, y0: i32, y1: i32, z0: i32, z1: i32) -> Result<usize> {
        self.clear(BrushStroke::box_stroke(x0, x1, y0, y1, z0, z1))
    }

    /// Fill every grid voxel within `radius` of the center (surface included)
    pub fn fill_sphere(&mut self, xc: i32, yc: i32, zc: i32, radius: i32) -> usize {
        self.sphere(BrushStroke::sphere(xc, yc, zc, radius))
    }

    /// Clear every grid voxel within `radius` of the center (surface included)
    pub fn clear_sphere(&mut self, xc: i32, yc: i32, zc: i32, radius: i32) -> usize {
        self.sphere(BrushStroke::sphere(xc, yc, zc, radius).with_blend(BlendMode::Clear))
    }

    // Every radius is valid and the ball is clipped to the grid, so spheres
    // skip the checked path.
    fn sphere(&mut self, stroke: BrushStroke) -> usize {
        stroke.paint(&mut self.grid, &stroke.primitive.bounds(), self.color)
    }

    /// Fill the ellipsoid with semi-axes `rx, ry, rz`. Zero radii are rejected.
    pub fn fill_ellipsoid(&mut self, xc: i32, yc: i32, zc: i32, rx: i32, ry: i32, rz: i32) -> Result<usize> {
        self.fill(BrushStroke::ellipsoid(xc, yc, zc, rx, ry, rz))
    }

    /// Clear the ellipsoid with semi-axes `rx, ry, rz`. Zero radii are rejected.
    pub fn clear_ellipsoid(&mut self, xc: i32, yc: i32, zc: i32, rx: i32, ry: i32, rz: i32) -> Result<usize> {
        self.clear(BrushStroke::ellipsoid(xc, yc, zc, rx, ry, rz))
    }

    /// Switch every voxel off. Colors and the current paint are kept.
    pub fn clear_all(&mut self) {
        self.grid.clear_all();
        log::debug!("Cleared all voxels");
    }

    /// Number of voxels currently on
    pub fn active_count(&self) -> usize {
        self.grid.active_count()
    }

    /// Export the grid as an OFF mesh, creating or truncating `path`
    pub fn write_off(&self, path: impl AsRef<Path>) -> Result<MeshStats> {
        export::save_off(&self.grid, path)
    }
}
