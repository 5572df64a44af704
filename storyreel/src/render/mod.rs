//! Turning evaluated [`crate::FrameTree`]s into pixels.
//!
//! The tree is serialized to SVG, parsed with `usvg` and rasterized on the CPU with `resvg`.
//! Range rendering can fan frames out over a `rayon` pool since evaluation is pure.

pub(crate) mod frame;
pub(crate) mod pipeline;
pub(crate) mod raster;
pub(crate) mod svg;
