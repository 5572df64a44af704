//! Scene entry transitions.

pub(crate) mod transitions;
