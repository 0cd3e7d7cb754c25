//! Voxel data type

use serde::{Deserialize, Serialize};

/// RGBA paint color. Components are nominally in `[0, 1]` but are stored
/// as given, without clamping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Transparency (1.0 = opaque)
    pub a: f32,
}

impl Color {
    /// Transparent black, the color of a voxel that was never painted
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Components as an `[r, g, b, a]` array
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Single grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Voxel {
    /// Whether the voxel is part of the solid
    pub on: bool,
    /// Last painted color. Kept as-is when the voxel is switched off.
    pub color: Color,
}

impl Voxel {
    /// Off voxel with no paint
    pub const EMPTY: Voxel = Voxel {
        on: false,
        color: Color::TRANSPARENT,
    };

    /// Switch on and take the given paint
    pub fn fill(&mut self, color: Color) {
        self.on = true;
        self.color = color;
    }

    /// Switch off, leaving the stored color untouched
    pub fn clear(&mut self) {
        self.on = false;
    }

    /// Check if voxel is on
    pub fn is_on(&self) -> bool {
        self.on
    }
}
