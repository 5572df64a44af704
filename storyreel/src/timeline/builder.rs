use crate::{
    composition::model::SceneDescriptor,
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{StoryError, StoryResult},
    },
};

/// One scene's placement on the global timeline.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TimelineEntry {
    /// Position of the scene in the authored list.
    pub index: usize,
    /// Scene id.
    pub id: String,
    /// Global frames `[start, end)` during which the scene is active.
    pub range: FrameRange,
}

impl TimelineEntry {
    /// First global frame of the scene.
    pub fn start(&self) -> u64 {
        self.range.start.0
    }

    /// First global frame after the scene.
    pub fn end(&self) -> u64 {
        self.range.end.0
    }

    /// Scene length in frames.
    pub fn duration(&self) -> u64 {
        self.range.len_frames()
    }
}

/// Scenes laid end to end: `start_0 = 0`, `start_{i+1} = end_i`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Lay out `scenes` in list order.
    pub fn build(scenes: &[SceneDescriptor]) -> StoryResult<Self> {
        Self::from_durations(
            scenes
                .iter()
                .map(|s| (s.id.as_str(), s.duration_in_frames)),
        )
    }

    /// Lay out `(id, duration)` pairs in iteration order with a single running sum.
    pub fn from_durations<'a>(
        scenes: impl IntoIterator<Item = (&'a str, u64)>,
    ) -> StoryResult<Self> {
        let mut entries = Vec::new();
        let mut cursor = 0u64;
        for (index, (id, duration)) in scenes.into_iter().enumerate() {
            if duration == 0 {
                return Err(StoryError::validation(format!(
                    "scene '{id}' durationInFrames must be > 0"
                )));
            }
            let end = cursor.checked_add(duration).ok_or_else(|| {
                StoryError::validation(format!("timeline overflows at scene '{id}'"))
            })?;
            entries.push(TimelineEntry {
                index,
                id: id.to_owned(),
                range: FrameRange::new(FrameIndex(cursor), FrameIndex(end))?,
            });
            cursor = end;
        }
        Ok(Self { entries })
    }

    /// Entries in list order.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the timeline holds no scene.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all scene durations (end of the last entry, 0 when empty).
    pub fn total_duration(&self) -> u64 {
        self.entries.last().map_or(0, TimelineEntry::end)
    }

    /// The entry active at global `frame` and its local frame, if any.
    pub fn active_at(&self, frame: i64) -> Option<(&TimelineEntry, u64)> {
        let f = u64::try_from(frame).ok()?;
        let idx = self.entries.partition_point(|e| e.end() <= f);
        let entry = self.entries.get(idx)?;
        entry
            .range
            .contains(FrameIndex(f))
            .then(|| (entry, f - entry.start()))
    }
}

/// Sum of scene durations without building entries.
pub fn total_duration(scenes: &[SceneDescriptor]) -> u64 {
    scenes
        .iter()
        .fold(0u64, |acc, s| acc.saturating_add(s.duration_in_frames))
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/builder.rs"]
mod tests;
