//! JSON sculpt scripts
//!
//! A script names the grid size, an optional output path and the ordered
//! list of operations that build the model:
//!
//! ```json
//! {
//!   "dimensions": [10, 10, 10],
//!   "output": "ball.off",
//!   "operations": [
//!     { "op": "set_color", "r": 1.0, "g": 0.5, "b": 0.0, "a": 1.0 },
//!     { "op": "fill_sphere", "center": [5, 5, 5], "radius": 4 },
//!     { "op": "clear_box", "x0": 0, "x1": 10, "y0": 0, "y1": 5, "z0": 0, "z1": 10 }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::sculptor::Sculptor;
use crate::voxel::brush::{BlendMode, BrushStroke};

/// One step of a sculpt script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    SetColor { r: f32, g: f32, b: f32, a: f32 },
    FillVoxel { x: i32, y: i32, z: i32 },
    ClearVoxel { x: i32, y: i32, z: i32 },
    FillBox { x0: i32, x1: i32, y0: i32, y1: i32, z0: i32, z1: i32 },
    ClearBox { x0: i32, x1: i32, y0: i32, y1: i32, z0: i32, z1: i32 },
    FillSphere { center: [i32; 3], radius: i32 },
    ClearSphere { center: [i32; 3], radius: i32 },
    FillEllipsoid { center: [i32; 3], radii: [i32; 3] },
    ClearEllipsoid { center: [i32; 3], radii: [i32; 3] },
    /// Switch every voxel off
    ClearAll,
}

impl Operation {
    /// Brush stroke for shape operations, None for paint changes and `ClearAll`
    pub fn to_stroke(&self) -> Option<BrushStroke> {
        let stroke = match *self {
            Operation::SetColor { .. } | Operation::ClearAll => return None,
            Operation::FillVoxel { x, y, z } | Operation::ClearVoxel { x, y, z } => {
                BrushStroke::voxel(x, y, z)
            }
            Operation::FillBox { x0, x1, y0, y1, z0, z1 }
            | Operation::ClearBox { x0, x1, y0, y1, z0, z1 } => {
                BrushStroke::box_stroke(x0, x1, y0, y1, z0, z1)
            }
            Operation::FillSphere { center: [x, y, z], radius }
            | Operation::ClearSphere { center: [x, y, z], radius } => {
                BrushStroke::sphere(x, y, z, radius)
            }
            Operation::FillEllipsoid { center: [x, y, z], radii: [rx, ry, rz] }
            | Operation::ClearEllipsoid { center: [x, y, z], radii: [rx, ry, rz] } => {
                BrushStroke::ellipsoid(x, y, z, rx, ry, rz)
            }
        };

        let blend = match self {
            Operation::ClearVoxel { .. }
            | Operation::ClearBox { .. }
            | Operation::ClearSphere { .. }
            | Operation::ClearEllipsoid { .. } => BlendMode::Clear,
            _ => BlendMode::Fill,
        };
        Some(stroke.with_blend(blend))
    }

    /// Run the operation against a sculptor
    pub fn apply(&self, sculptor: &mut Sculptor) -> Result<usize> {
        match *self {
            Operation::SetColor { r, g, b, a } => {
                sculptor.set_color(r, g, b, a);
                Ok(0)
            }
            Operation::ClearAll => {
                let on = sculptor.active_count();
                sculptor.clear_all();
                Ok(on)
            }
            _ => match self.to_stroke() {
                Some(stroke) => sculptor.apply(&stroke),
                None => Ok(0),
            },
        }
    }
}

/// Summary of a script run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptStats {
    /// Operations executed
    pub operations: usize,
    /// Sum of voxels covered by shape operations and switched off by `ClearAll`
    pub voxels_touched: usize,
}

/// A complete sculpting session description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SculptScript {
    /// Grid size `[nx, ny, nz]`
    pub dimensions: [usize; 3],
    /// Where the mesh should be written, if the script says
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Operations in execution order
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl SculptScript {
    /// Create an empty script for a grid of the given size
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self {
            dimensions: [nx, ny, nz],
            output: None,
            operations: Vec::new(),
        }
    }

    /// Append an operation (builder pattern)
    pub fn with(mut self, op: Operation) -> Self {
        self.operations.push(op);
        self
    }

    /// Parse a script from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the script as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let script = Self::from_json(&json)?;
        log::info!(
            "Loaded script {} ({} operations)",
            path.display(),
            script.operations.len()
        );
        Ok(script)
    }

    /// Save to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Run every operation in order. Stops at the first failure, reporting
    /// which operation failed; earlier operations stay applied.
    pub fn apply(&self, sculptor: &mut Sculptor) -> Result<ScriptStats> {
        let mut stats = ScriptStats::default();
        for (index, op) in self.operations.iter().enumerate() {
            let touched = op.apply(sculptor).map_err(|source| Error::Operation {
                index,
                source: Box::new(source),
            })?;
            stats.operations += 1;
            stats.voxels_touched += touched;
        }
        Ok(stats)
    }

    /// Create a sculptor of the script's size and run the script on it
    pub fn build(&self) -> Result<Sculptor> {
        let [nx, ny, nz] = self.dimensions;
        let mut sculptor = Sculptor::new(nx, ny, nz)?;
        let stats = self.apply(&mut sculptor)?;
        log::info!(
            "Applied {} operations ({} voxels touched, {} on)",
            stats.operations,
            stats.voxels_touched,
            sculptor.active_count()
        );
        Ok(sculptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "dimensions": [10, 10, 10],
        "output": "ball.off",
        "operations": [
            { "op": "set_color", "r": 1.0, "g": 0.5, "b": 0.0, "a": 1.0 },
            { "op": "fill_sphere", "center": [5, 5, 5], "radius": 3 },
            { "op": "clear_box", "x0": 0, "x1": 10, "y0": 0, "y1": 5, "z0": 0, "z1": 10 }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let script = SculptScript::from_json(SAMPLE).unwrap();
        assert_eq!(script.dimensions, [10, 10, 10]);
        assert_eq!(script.output, Some(PathBuf::from("ball.off")));
        assert_eq!(script.operations.len(), 3);
        assert_eq!(
            script.operations[1],
            Operation::FillSphere { center: [5, 5, 5], radius: 3 }
        );
    }

    #[test]
    fn test_build_sample() {
        let script = SculptScript::from_json(SAMPLE).unwrap();
        let sculptor = script.build().unwrap();

        // only the y >= 5 half of the ball survives
        assert!(sculptor.active_count() > 0);
        assert!(sculptor.grid().iter_active().all(|(p, _)| p.y >= 5));
        assert_eq!(sculptor.color().to_array(), [1.0, 0.5, 0.0, 1.0]);
    }

    #[test]
    fn test_output_is_optional() {
        let script = SculptScript::from_json(r#"{ "dimensions": [2, 2, 2] }"#).unwrap();
        assert!(script.output.is_none());
        assert!(script.operations.is_empty());
        assert_eq!(script.build().unwrap().active_count(), 0);
    }

    #[test]
    fn test_unknown_op_rejected() {
        let result = SculptScript::from_json(
            r#"{ "dimensions": [2, 2, 2], "operations": [{ "op": "smooth" }] }"#,
        );
        assert!(matches!(result, Err(Error::Script(_))));
    }

    #[test]
    fn test_stats() {
        let script = SculptScript::new(4, 4, 4)
            .with(Operation::FillBox { x0: 0, x1: 2, y0: 0, y1: 2, z0: 0, z1: 2 })
            .with(Operation::ClearVoxel { x: 0, y: 0, z: 0 })
            .with(Operation::SetColor { r: 0.0, g: 0.0, b: 0.0, a: 1.0 });

        let mut sculptor = Sculptor::new(4, 4, 4).unwrap();
        let stats = script.apply(&mut sculptor).unwrap();
        assert_eq!(stats, ScriptStats { operations: 3, voxels_touched: 9 });
        assert_eq!(sculptor.active_count(), 7);
    }

    #[test]
    fn test_failing_operation_index() {
        let script = SculptScript::new(4, 4, 4)
            .with(Operation::FillVoxel { x: 1, y: 1, z: 1 })
            .with(Operation::FillEllipsoid { center: [2, 2, 2], radii: [1, 0, 1] })
            .with(Operation::FillVoxel { x: 2, y: 2, z: 2 });

        match script.build() {
            Err(Error::Operation { index, source }) => {
                assert_eq!(index, 1);
                assert!(matches!(*source, Error::DegenerateRadius { .. }));
            }
            other => panic!("Expected Operation error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_voxel_op_fails() {
        for op in [
            Operation::FillVoxel { x: i32::MAX, y: 0, z: 0 },
            Operation::ClearVoxel { x: 0, y: i32::MAX, z: 0 },
            Operation::FillVoxel { x: 0, y: 0, z: 4 },
            Operation::FillVoxel { x: -1, y: 0, z: 0 },
        ] {
            let script = SculptScript::new(4, 4, 4).with(op.clone());
            match script.build() {
                Err(Error::Operation { index, source }) => {
                    assert_eq!(index, 0);
                    assert!(matches!(*source, Error::OutOfBounds { .. }), "{:?}", op);
                }
                other => panic!("Expected OutOfBounds for {:?}, got {:?}", op, other),
            }
        }
    }

    #[test]
    fn test_clear_all_op() {
        let script = SculptScript::from_json(
            r#"{
                "dimensions": [4, 4, 4],
                "operations": [
                    { "op": "fill_box", "x0": 0, "x1": 4, "y0": 0, "y1": 4, "z0": 0, "z1": 2 },
                    { "op": "clear_all" },
                    { "op": "fill_voxel", "x": 3, "y": 3, "z": 3 }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(script.operations[1], Operation::ClearAll);

        let mut sculptor = Sculptor::new(4, 4, 4).unwrap();
        let stats = script.apply(&mut sculptor).unwrap();
        assert_eq!(stats.voxels_touched, 32 + 32 + 1);
        assert_eq!(sculptor.active_count(), 1);
        assert!(Operation::ClearAll.to_stroke().is_none());
    }

    #[test]
    fn test_invalid_dimensions() {
        let script = SculptScript::new(0, 4, 4);
        assert!(matches!(script.build(), Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_clear_ops_use_clear_blend() {
        let op = Operation::ClearSphere { center: [1, 1, 1], radius: 1 };
        assert_eq!(op.to_stroke().unwrap().blend_mode, BlendMode::Clear);
        let op = Operation::FillEllipsoid { center: [1, 1, 1], radii: [1, 2, 3] };
        assert_eq!(op.to_stroke().unwrap().blend_mode, BlendMode::Fill);
        assert!(Operation::SetColor { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }.to_stroke().is_none());
    }

    #[test]
    fn test_bundled_rocket_script() {
        let script = SculptScript::from_json(include_str!("../assets/scripts/rocket.json"))
            .expect("rocket script should parse");
        assert_eq!(script.output, Some(PathBuf::from("rocket.off")));

        let sculptor = script.build().expect("rocket script should build");
        assert!(sculptor.active_count() > 0);
        // nozzle core is hollow
        assert!(!sculptor.grid().get(15, 15, 9).unwrap().is_on());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("scripts").join("cube.json");

        let mut script = SculptScript::new(3, 3, 3)
            .with(Operation::SetColor { r: 0.25, g: 0.5, b: 0.75, a: 1.0 })
            .with(Operation::FillBox { x0: 0, x1: 3, y0: 0, y1: 3, z0: 0, z1: 3 });
        script.output = Some(PathBuf::from("cube.off"));

        script.save(&path).expect("save failed");
        let loaded = SculptScript::load(&path).expect("load failed");
        assert_eq!(loaded, script);
    }
}
