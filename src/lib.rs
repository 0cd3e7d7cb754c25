//! Voxsculpt - A voxel sculpting engine
//!
//! Fill and carve a dense grid of colored voxels with point, box, sphere and
//! ellipsoid brushes, then export the result as an OFF mesh.
//!
//! ```no_run
//! use voxsculpt::Sculptor;
//!
//! # fn main() -> voxsculpt::core::Result<()> {
//! let mut sculptor = Sculptor::new(10, 10, 10)?;
//! sculptor.set_color(1.0, 0.0, 0.0, 1.0);
//! sculptor.fill_sphere(5, 5, 5, 4);
//! sculptor.clear_box(0, 10, 0, 5, 0, 10)?;
//! sculptor.write_off("dome.off")?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod math;
pub mod voxel;
pub mod sculptor;
pub mod export;
pub mod script;

pub use sculptor::Sculptor;
