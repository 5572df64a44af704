//! Scene timeline: contiguous frame ranges and the mount gate that activates them.

pub(crate) mod builder;
pub(crate) mod gate;
