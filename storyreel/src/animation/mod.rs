//! Frame-driven animation primitives.
//!
//! Every function here is a pure function of an explicit frame number and its parameters.

pub(crate) mod ease;
pub(crate) mod helpers;
pub(crate) mod interpolate;
pub(crate) mod random;
pub(crate) mod spring;
