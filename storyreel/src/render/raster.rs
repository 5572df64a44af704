use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::{
    foundation::error::{StoryError, StoryResult},
    render::frame::FrameRGBA,
    visual::frame::FrameTree,
};

/// Font database shared by every rasterized frame.
///
/// Cheap to clone; workers in a parallel render share one database.
#[derive(Clone)]
pub struct FontSet {
    db: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSet")
            .field("faces", &self.db.len())
            .finish()
    }
}

impl FontSet {
    /// System fonts only.
    pub fn system() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Self { db: Arc::new(db) }
    }

    /// System fonts plus every `.ttf`/`.otf`/`.ttc` file directly inside `dir`.
    pub fn system_with_dir(dir: impl AsRef<Path>) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        load_fonts_from_dir(&mut db, dir.as_ref());
        Self { db: Arc::new(db) }
    }

    /// No fonts at all; text renders as nothing. Useful for pixel tests.
    pub fn empty() -> Self {
        Self {
            db: Arc::new(usvg::fontdb::Database::new()),
        }
    }

    /// Number of loaded font faces.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }
}

impl Default for FontSet {
    fn default() -> Self {
        Self::system()
    }
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable font");
        }
    }
}

/// Rasterize `tree` into premultiplied RGBA8 at the canvas size.
#[tracing::instrument(skip_all, fields(frame = tree.frame))]
pub fn rasterize(tree: &FrameTree, fonts: &FontSet) -> StoryResult<FrameRGBA> {
    let (width, height) = (tree.canvas.width, tree.canvas.height);
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        StoryError::render(format!("failed to allocate {width}x{height} pixmap"))
    })?;

    let svg = tree.to_svg();
    let opts = usvg::Options {
        fontdb: Arc::clone(&fonts.db),
        ..Default::default()
    };
    let parsed = usvg::Tree::from_data(svg.as_bytes(), &opts)
        .with_context(|| format!("parse svg for frame {}", tree.frame))?;

    resvg::render(
        &parsed,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );
    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.take(),
        premultiplied: true,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
