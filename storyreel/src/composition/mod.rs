//! Authoring model: video configuration, scene descriptors and programmatic builders.

pub(crate) mod dsl;
pub(crate) mod model;
pub(crate) mod props;
