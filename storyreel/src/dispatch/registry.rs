use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::{
    composition::props::ShowcaseProps,
    dispatch::context::TemplateCtx,
    foundation::error::{StoryError, StoryResult},
    templates::showcase::{cards, devices, layouts, visuals, widgets},
    visual::node::VisualNode,
};

/// Signature shared by every Showcase renderer.
pub type ShowcaseRenderFn = fn(&TemplateCtx<'_>, &ShowcaseProps) -> StoryResult<VisualNode>;

/// Where a Showcase variant is placed on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowcaseLayout {
    /// Inside the padded layout container.
    Contained,
    /// Covers the whole canvas, no container.
    FullBleed,
}

/// A registered Showcase variant.
#[derive(Clone, Copy, Debug)]
pub struct ShowcaseEntry {
    /// Renderer for the variant.
    pub render: ShowcaseRenderFn,
    /// Placement.
    pub layout: ShowcaseLayout,
}

/// Variant tag → renderer table.
///
/// Lookups are by exact tag. [`ShowcaseRegistry::builtin`] is built once per process and shared;
/// hosts that add their own variants start from [`ShowcaseRegistry::with_builtins`].
#[derive(Clone, Debug, Default)]
pub struct ShowcaseRegistry {
    entries: BTreeMap<String, ShowcaseEntry>,
}

impl ShowcaseRegistry {
    /// Registry with no variants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh registry holding the built-in catalog.
    pub fn with_builtins() -> Self {
        use ShowcaseLayout::{Contained, FullBleed};

        let builtins: [(&str, ShowcaseRenderFn, ShowcaseLayout); 23] = [
            ("GlassCard", cards::glass_card, Contained),
            ("NeonCard", cards::neon_card, Contained),
            ("QuoteCard", cards::quote_card, Contained),
            ("ProfileCard", cards::profile_card, Contained),
            ("MetricCard", cards::metric_card, Contained),
            ("TwitterCard", cards::twitter_card, Contained),
            ("TerminalWindow", devices::terminal_window, Contained),
            ("BrowserWindow", devices::browser_window, Contained),
            ("BrowserV2", devices::browser_v2, Contained),
            ("KeyboardShortcut", widgets::keyboard_shortcut, Contained),
            ("CircularProgress", widgets::circular_progress, Contained),
            ("NotificationToast", widgets::notification_toast, Contained),
            ("AlertBox", widgets::alert_box, Contained),
            ("TechBadge", widgets::tech_badge, Contained),
            ("LoadingSpinner", widgets::loading_spinner, Contained),
            ("AudioWaveform", widgets::audio_waveform, Contained),
            ("BentoGrid", layouts::bento_grid, Contained),
            ("MasonryWaterfall", layouts::masonry_waterfall, FullBleed),
            ("CinematicText", visuals::cinematic_text, Contained),
            ("ParticleText", visuals::particle_text, Contained),
            ("GradientMesh", visuals::gradient_mesh, FullBleed),
            ("GridPattern", visuals::grid_pattern, FullBleed),
            ("ParticleField", visuals::particle_field, FullBleed),
        ];

        let entries = builtins
            .into_iter()
            .map(|(name, render, layout)| (name.to_owned(), ShowcaseEntry { render, layout }))
            .collect();
        Self { entries }
    }

    /// Process-wide built-in catalog.
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<ShowcaseRegistry> = OnceLock::new();
        BUILTIN.get_or_init(Self::with_builtins)
    }

    /// Adds `name`. Names are unique.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        layout: ShowcaseLayout,
        render: ShowcaseRenderFn,
    ) -> StoryResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StoryError::validation("showcase variant name must be non-empty"));
        }
        if self.entries.contains_key(&name) {
            return Err(StoryError::validation(format!(
                "showcase variant '{name}' is already registered"
            )));
        }
        self.entries.insert(name, ShowcaseEntry { render, layout });
        Ok(())
    }

    /// Entry for `name`, if registered.
    pub fn get(&self, name: &str) -> Option<&ShowcaseEntry> {
        self.entries.get(name)
    }

    /// `true` when `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered tags in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dispatch/registry.rs"]
mod tests;
