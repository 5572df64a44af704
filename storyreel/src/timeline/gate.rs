use crate::{foundation::core::FrameIndex, timeline::builder::TimelineEntry};

/// Whether a scene is on screen at a given global frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneMount {
    /// Outside the scene's range; nothing is rendered for it.
    Inactive,
    /// Inside the range; `local_frame` restarts at 0 on the scene's first frame.
    Active {
        /// Frames elapsed since the scene started.
        local_frame: u64,
    },
}

impl SceneMount {
    /// `true` for [`SceneMount::Active`].
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Local frame when active.
    pub fn local_frame(self) -> Option<u64> {
        match self {
            Self::Active { local_frame } => Some(local_frame),
            Self::Inactive => None,
        }
    }
}

/// Gate `entry` at global `frame`: active iff `start <= frame < end`.
pub fn mount(entry: &TimelineEntry, frame: i64) -> SceneMount {
    match u64::try_from(frame) {
        Ok(f) if entry.range.contains(FrameIndex(f)) => SceneMount::Active {
            local_frame: f - entry.start(),
        },
        _ => SceneMount::Inactive,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/gate.rs"]
mod tests;
