//! Dense voxel grid

use crate::core::{Error, IVec3, Result};
use crate::math::GridRegion;
use super::voxel::Voxel;

/// Fixed-size 3D array of voxels stored in a single flat buffer.
///
/// Cells are laid out row-major with z varying fastest:
/// `index = (x * ny + y) * nz + z`. Dimensions never change after
/// construction.
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    nx: usize,
    ny: usize,
    nz: usize,
    voxels: Vec<Voxel>,
}

impl VoxelGrid {
    /// Allocate an `nx * ny * nz` grid with every voxel off
    pub fn new(nx: usize, ny: usize, nz: usize) -> Result<Self> {
        let len = nx
            .checked_mul(ny)
            .and_then(|n| n.checked_mul(nz))
            .filter(|&n| n > 0)
            .ok_or(Error::InvalidDimensions { nx, ny, nz })?;

        // Coordinates are i32 at the API surface
        if [nx, ny, nz].iter().any(|&d| i32::try_from(d).is_err()) {
            return Err(Error::InvalidDimensions { nx, ny, nz });
        }

        log::debug!("Allocating {}x{}x{} voxel grid ({} cells)", nx, ny, nz, len);

        Ok(Self {
            nx,
            ny,
            nz,
            voxels: vec![Voxel::EMPTY; len],
        })
    }

    /// Grid dimensions `[nx, ny, nz]`
    pub fn dimensions(&self) -> [usize; 3] {
        [self.nx, self.ny, self.nz]
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Always false; a grid has at least one cell
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Region covering the whole grid
    pub fn bounds(&self) -> GridRegion {
        GridRegion::from_dimensions(self.dimensions())
    }

    /// Check if coordinate lies inside the grid
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        self.index(x, y, z).is_some()
    }

    /// Linear index of a coordinate, or None when out of range
    pub fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.nx)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.ny)?;
        let z = usize::try_from(z).ok().filter(|&z| z < self.nz)?;
        Some((x * self.ny + y) * self.nz + z)
    }

    fn checked_index(&self, x: i32, y: i32, z: i32) -> Result<usize> {
        self.index(x, y, z).ok_or(Error::OutOfBounds {
            x,
            y,
            z,
            dims: self.dimensions(),
        })
    }

    /// Get voxel at coordinate
    pub fn get(&self, x: i32, y: i32, z: i32) -> Result<&Voxel> {
        let i = self.checked_index(x, y, z)?;
        Ok(&self.voxels[i])
    }

    /// Get mutable voxel at coordinate
    pub fn get_mut(&mut self, x: i32, y: i32, z: i32) -> Result<&mut Voxel> {
        let i = self.checked_index(x, y, z)?;
        Ok(&mut self.voxels[i])
    }

    /// Visit every cell of `region` that lies inside the grid, in ascending
    /// x, then y, then z order. Cells outside the grid are skipped.
    pub fn for_each_in(&mut self, region: &GridRegion, mut f: impl FnMut(IVec3, &mut Voxel)) {
        let clipped = region.intersection(&self.bounds());
        for p in clipped.iter() {
            // clipped to the grid, so every coordinate is non-negative and in range
            let i = (p.x as usize * self.ny + p.y as usize) * self.nz + p.z as usize;
            f(p, &mut self.voxels[i]);
        }
    }

    /// Number of voxels switched on
    pub fn active_count(&self) -> usize {
        self.voxels.iter().filter(|v| v.is_on()).count()
    }

    /// Switch every voxel off. Colors are kept.
    pub fn clear_all(&mut self) {
        for voxel in &mut self.voxels {
            voxel.clear();
        }
    }

    /// Iterate every cell with its coordinate in ascending x, then y, then z
    pub fn iter(&self) -> impl Iterator<Item = (IVec3, &Voxel)> + '_ {
        let (ny, nz) = (self.ny, self.nz);
        self.voxels.iter().enumerate().map(move |(i, voxel)| {
            let z = i % nz;
            let y = (i / nz) % ny;
            let x = i / (nz * ny);
            (IVec3::new(x as i32, y as i32, z as i32), voxel)
        })
    }

    /// Iterate voxels that are on, in export order
    pub fn iter_active(&self) -> impl Iterator<Item = (IVec3, &Voxel)> + '_ {
        self.iter().filter(|(_, voxel)| voxel.is_on())
    }
}
