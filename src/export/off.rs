//! OFF (Object File Format) mesh export
//!
//! Every voxel that is on becomes an independent unit cube: 8 vertices and
//! 6 colored quads. Shared faces between neighbours are not merged.
//!
//! ```text
//! OFF
//! <vertices> <faces> 0
//! <x> <y> <z>                              (once per vertex)
//! 4 <v0> <v1> <v2> <v3> <r> <g> <b> <a>    (once per face)
//! ```
//!
//! Coordinates and colors are printed in fixed point with two decimals.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::{Error, Result};
use crate::voxel::grid::VoxelGrid;

/// Vertices emitted per voxel
pub const VERTICES_PER_VOXEL: usize = 8;
/// Faces emitted per voxel
pub const FACES_PER_VOXEL: usize = 6;

/// Cube corner offsets from the voxel center, in emission order
const CORNERS: [[f64; 3]; VERTICES_PER_VOXEL] = [
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, 0.5],
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
];

/// Quads as indices into [`CORNERS`]
const QUADS: [[usize; 4]; FACES_PER_VOXEL] = [
    [0, 3, 2, 1],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [0, 4, 7, 3],
    [3, 7, 6, 2],
    [1, 2, 6, 5],
];

/// Size of an exported mesh
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshStats {
    /// Voxels that were on
    pub voxels: usize,
    /// Vertex lines written
    pub vertices: usize,
    /// Face lines written
    pub faces: usize,
}

impl MeshStats {
    fn for_voxels(voxels: usize) -> Self {
        Self {
            voxels,
            vertices: voxels * VERTICES_PER_VOXEL,
            faces: voxels * FACES_PER_VOXEL,
        }
    }
}

/// Write the OFF mesh of `grid` to `out`
pub fn write_off<W: Write>(grid: &VoxelGrid, mut out: W) -> Result<MeshStats> {
    let stats = MeshStats::for_voxels(grid.active_count());

    writeln!(out, "OFF")?;
    writeln!(out, "{} {} 0", stats.vertices, stats.faces)?;

    for (p, _) in grid.iter_active() {
        let center = [f64::from(p.x), f64::from(p.y), f64::from(p.z)];
        for [dx, dy, dz] in CORNERS {
            writeln!(
                out,
                "{:.2} {:.2} {:.2}",
                center[0] + dx,
                center[1] + dy,
                center[2] + dz
            )?;
        }
    }

    let mut base = 0;
    for (_, voxel) in grid.iter_active() {
        let c = voxel.color;
        for [a, b, c2, d] in QUADS {
            writeln!(
                out,
                "4 {} {} {} {} {:.2} {:.2} {:.2} {:.2}",
                base + a,
                base + b,
                base + c2,
                base + d,
                c.r,
                c.g,
                c.b,
                c.a
            )?;
        }
        base += VERTICES_PER_VOXEL;
    }

    out.flush()?;
    Ok(stats)
}

/// Write the OFF mesh of `grid` to a file, creating or truncating it
pub fn save_off(grid: &VoxelGrid, path: impl AsRef<Path>) -> Result<MeshStats> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let stats = write_off(grid, BufWriter::new(file))?;
    log::info!(
        "Wrote {} ({} voxels, {} vertices, {} faces)",
        path.display(),
        stats.voxels,
        stats.vertices,
        stats.faces
    );
    Ok(stats)
}

/// Render the OFF mesh of `grid` into a string
pub fn to_off_string(grid: &VoxelGrid) -> Result<String> {
    let mut buf = Vec::new();
    write_off(grid, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
