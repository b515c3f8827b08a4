//! Pure math/data for geometry & units in Clearpose
//!
//! This crate contains the geometry primitives and unit types used by the
//! widget layer: points, sizes, rectangles, edge insets, and density-aware
//! dimension units.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::unit::{Dp, Px};
}
