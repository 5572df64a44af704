//! Frame clock types, colors, errors and hashing helpers shared by every layer.

pub(crate) mod color;
pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
