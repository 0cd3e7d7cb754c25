//! Brush primitive shapes

use crate::core::{Error, IVec3, Result};
use crate::math::GridRegion;

/// Brush primitive shapes over integer voxel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushPrimitive {
    /// A single voxel
    Voxel { at: IVec3 },
    /// Half-open box `[min, max)`
    Box { min: IVec3, max: IVec3 },
    /// Closed ball of integer radius
    Sphere { center: IVec3, radius: i32 },
    /// Closed axis-aligned ellipsoid with per-axis radii
    Ellipsoid { center: IVec3, radii: IVec3 },
}

impl BrushPrimitive {
    /// Check if point is inside primitive (boundary inclusive for round shapes)
    pub fn contains_point(&self, p: IVec3) -> bool {
        match *self {
            BrushPrimitive::Voxel { at } => p == at,
            BrushPrimitive::Box { min, max } => GridRegion::new(min, max).contains_point(p),
            BrushPrimitive::Sphere { center, radius } => {
                let [dx, dy, dz] = wide_delta(p, center);
                let r = i128::from(radius);
                dx * dx + dy * dy + dz * dz <= r * r
            }
            BrushPrimitive::Ellipsoid { center, radii } => ellipsoid_contains(center, radii, p),
        }
    }

    /// Reject parameters the containment test cannot evaluate
    pub fn validate(&self) -> Result<()> {
        match *self {
            BrushPrimitive::Ellipsoid { radii, .. } if radii.cmpeq(IVec3::ZERO).any() => {
                Err(Error::DegenerateRadius { rx: radii.x, ry: radii.y, rz: radii.z })
            }
            _ => Ok(()),
        }
    }

    /// Local bounding region of the primitive (not clipped)
    pub fn bounds(&self) -> GridRegion {
        match *self {
            BrushPrimitive::Voxel { at } => GridRegion::new(at, at.saturating_add(IVec3::ONE)),
            BrushPrimitive::Box { min, max } => GridRegion::new(min, max),
            BrushPrimitive::Sphere { center, radius } => {
                GridRegion::from_center_half_extent(center, IVec3::splat(radius))
            }
            BrushPrimitive::Ellipsoid { center, radii } => {
                GridRegion::from_center_half_extent(center, radii)
            }
        }
    }

    /// Region of `grid` the primitive has to visit.
    ///
    /// Voxels and boxes address cells directly, so any non-empty part of them
    /// outside the grid is an error. Round shapes are defined over the whole
    /// grid and are simply clipped to it.
    pub fn scan_region(&self, grid: &GridRegion) -> Result<GridRegion> {
        self.validate()?;
        let bounds = self.bounds();
        match *self {
            BrushPrimitive::Voxel { at } => {
                if grid.contains_point(at) {
                    Ok(bounds)
                } else {
                    Err(out_of_bounds(grid, at))
                }
            }
            BrushPrimitive::Box { .. } => {
                if grid.contains_region(&bounds) {
                    Ok(bounds)
                } else {
                    Err(out_of_bounds(grid, first_outside(grid, &bounds)))
                }
            }
            BrushPrimitive::Sphere { .. } | BrushPrimitive::Ellipsoid { .. } => {
                Ok(grid.intersection(&bounds))
            }
        }
    }
}

/// Componentwise `a - b` without i32 overflow
fn wide_delta(a: IVec3, b: IVec3) -> [i128; 3] {
    [
        i128::from(a.x) - i128::from(b.x),
        i128::from(a.y) - i128::from(b.y),
        i128::from(a.z) - i128::from(b.z),
    ]
}

/// `((cx-x)/rx)^2 + ((cy-y)/ry)^2 + ((cz-z)/rz)^2 <= 1`, evaluated exactly by
/// multiplying through with `(rx*ry*rz)^2`. Falls back to floating point only
/// when the products leave i128 range.
fn ellipsoid_contains(center: IVec3, radii: IVec3, p: IVec3) -> bool {
    let [dx, dy, dz] = wide_delta(center, p);
    let [rx, ry, rz] = radii.to_array().map(i128::from);
    let (rx2, ry2, rz2) = (rx * rx, ry * ry, rz * rz);

    let exact = || -> Option<bool> {
        let lhs = (dx * dx).checked_mul(ry2)?.checked_mul(rz2)?
            .checked_add((dy * dy).checked_mul(rx2)?.checked_mul(rz2)?)?
            .checked_add((dz * dz).checked_mul(rx2)?.checked_mul(ry2)?)?;
        let rhs = rx2.checked_mul(ry2)?.checked_mul(rz2)?;
        Some(lhs <= rhs)
    };

    exact().unwrap_or_else(|| {
        let term = |d: i128, r: i128| (d as f64 / r as f64).powi(2);
        term(dx, rx) + term(dy, ry) + term(dz, rz) <= 1.0
    })
}

fn out_of_bounds(grid: &GridRegion, p: IVec3) -> Error {
    Error::OutOfBounds {
        x: p.x,
        y: p.y,
        z: p.z,
        dims: [grid.max.x as usize, grid.max.y as usize, grid.max.z as usize],
    }
}

/// Corner of `bounds` that escapes `grid`, for error reporting
fn first_outside(grid: &GridRegion, bounds: &GridRegion) -> IVec3 {
    let last = bounds.max - IVec3::ONE;
    if grid.contains_point(bounds.min) { last } else { bounds.min }
}
