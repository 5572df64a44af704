//! Scene content dispatch: routes scene props, and Showcase variant tags through the
//! [`ShowcaseRegistry`](crate::ShowcaseRegistry), to template functions.

pub(crate) mod content;
pub(crate) mod context;
pub(crate) mod registry;
