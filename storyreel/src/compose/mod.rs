//! Composition root: validated config + timeline in, one [`FrameTree`](crate::FrameTree) per
//! frame out.

pub(crate) mod composer;
