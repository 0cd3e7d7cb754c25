//! Integer grid region

use crate::core::types::IVec3;

/// Half-open integer box `[min, max)` on each axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridRegion {
    pub min: IVec3,
    pub max: IVec3,
}

impl GridRegion {
    /// Create region from min (inclusive) and max (exclusive) corners
    pub fn new(min: IVec3, max: IVec3) -> Self {
        Self { min, max }
    }

    /// Region covering a whole grid of the given dimensions
    pub fn from_dimensions(dims: [usize; 3]) -> Self {
        Self {
            min: IVec3::ZERO,
            max: IVec3::new(
                clamp_dim(dims[0]),
                clamp_dim(dims[1]),
                clamp_dim(dims[2]),
            ),
        }
    }

    /// Closed region `center ± half_extent`, returned in half-open form.
    /// `half_extent` is taken by absolute value.
    pub fn from_center_half_extent(center: IVec3, half_extent: IVec3) -> Self {
        let half = IVec3::new(
            half_extent.x.saturating_abs(),
            half_extent.y.saturating_abs(),
            half_extent.z.saturating_abs(),
        );
        Self {
            min: center.saturating_sub(half),
            max: center.saturating_add(half).saturating_add(IVec3::ONE),
        }
    }

    /// Extent along each axis, zero for empty spans
    pub fn size(&self) -> IVec3 {
        self.max.saturating_sub(self.min).max(IVec3::ZERO)
    }

    /// Number of integer points inside
    pub fn volume(&self) -> usize {
        let s = self.size();
        s.x as usize * s.y as usize * s.z as usize
    }

    /// True if any axis has a zero or negative span
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y || self.min.z >= self.max.z
    }

    /// Check if point is inside the region
    pub fn contains_point(&self, p: IVec3) -> bool {
        p.x >= self.min.x && p.x < self.max.x &&
        p.y >= self.min.y && p.y < self.max.y &&
        p.z >= self.min.z && p.z < self.max.z
    }

    /// Check if `other` lies entirely within this region. Empty regions are
    /// contained by everything.
    pub fn contains_region(&self, other: &GridRegion) -> bool {
        other.is_empty() || (
            other.min.cmpge(self.min).all() && other.max.cmple(self.max).all()
        )
    }

    /// Overlap of two regions (possibly empty)
    pub fn intersection(&self, other: &GridRegion) -> GridRegion {
        GridRegion {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }

    /// Iterate all points in ascending x, then y, then z order
    pub fn iter(&self) -> impl Iterator<Item = IVec3> + use<> {
        let GridRegion { min, max } = *self;
        (min.x..max.x).flat_map(move |x| {
            (min.y..max.y).flat_map(move |y| {
                (min.z..max.z).map(move |z| IVec3::new(x, y, z))
            })
        })
    }
}

fn clamp_dim(d: usize) -> i32 {
    i32::try_from(d).unwrap_or(i32::MAX)
}
