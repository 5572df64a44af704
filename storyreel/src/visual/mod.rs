//! Renderer-agnostic visual tree emitted by templates and consumed by hosts.

pub(crate) mod frame;
pub(crate) mod node;
