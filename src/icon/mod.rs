//! Procedural checkmark artwork: layout, colours and rasterization.

pub mod geometry;
pub mod palette;
pub mod render;

pub use geometry::{CheckmarkGeometry, Point, Segment, distance_to_segment};
pub use palette::{Palette, Rgb};
pub use render::{PixelGrid, render};
