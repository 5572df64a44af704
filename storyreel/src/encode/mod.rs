//! Frame sinks.
//!
//! Sinks consume rendered frames in timeline order; see [`crate::render_range_to_sink`].

pub(crate) mod ffmpeg;
pub(crate) mod png;
pub(crate) mod sink;
