use std::{collections::BTreeSet, fmt, path::Path};

use anyhow::Context;

use crate::{
    composition::props::{
        BulletsProps, ChartProps, CodeProps, DiagramProps, ShowcaseProps, StepsProps,
        SubtitleProps, TitleProps,
    },
    effects::transitions::TransitionKind,
    foundation::{
        color::Rgba8,
        core::{Canvas, Fps},
        error::{StoryError, StoryResult},
    },
};

/// Scene template family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    /// Large headline.
    Title,
    /// Centered caption.
    Subtitle,
    /// Code window.
    Code,
    /// Vertical list.
    Bullets,
    /// Horizontal step tracker.
    Steps,
    /// Node/edge diagram.
    Diagram,
    /// Bar or line chart.
    Chart,
    /// Registry-dispatched showcase variant.
    Showcase,
    /// Reserved; renders nothing.
    Custom,
}

impl SceneKind {
    /// Lowercase name as used in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::Code => "code",
            Self::Bullets => "bullets",
            Self::Steps => "steps",
            Self::Diagram => "diagram",
            Self::Chart => "chart",
            Self::Showcase => "showcase",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific scene properties. The variant always matches the scene's kind.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneProps {
    /// `title` scene.
    Title(TitleProps),
    /// `subtitle` scene.
    Subtitle(SubtitleProps),
    /// `code` scene.
    Code(CodeProps),
    /// `bullets` scene.
    Bullets(BulletsProps),
    /// `steps` scene.
    Steps(StepsProps),
    /// `diagram` scene.
    Diagram(DiagramProps),
    /// `chart` scene.
    Chart(ChartProps),
    /// `showcase` scene.
    Showcase(ShowcaseProps),
    /// `custom` scene; props kept as opaque JSON.
    Custom(serde_json::Value),
}

impl SceneProps {
    /// Kind this payload belongs to.
    pub fn kind(&self) -> SceneKind {
        match self {
            Self::Title(_) => SceneKind::Title,
            Self::Subtitle(_) => SceneKind::Subtitle,
            Self::Code(_) => SceneKind::Code,
            Self::Bullets(_) => SceneKind::Bullets,
            Self::Steps(_) => SceneKind::Steps,
            Self::Diagram(_) => SceneKind::Diagram,
            Self::Chart(_) => SceneKind::Chart,
            Self::Showcase(_) => SceneKind::Showcase,
            Self::Custom(_) => SceneKind::Custom,
        }
    }

    /// Decode a raw JSON props bag for `kind`. `null` is treated as `{}`.
    pub fn from_json(kind: SceneKind, value: serde_json::Value) -> StoryResult<Self> {
        fn decode<T: serde::de::DeserializeOwned>(
            kind: SceneKind,
            value: serde_json::Value,
        ) -> StoryResult<T> {
            serde_json::from_value(value)
                .map_err(|e| StoryError::serde(format!("{kind} props: {e}")))
        }

        let value = match value {
            serde_json::Value::Null if kind != SceneKind::Custom => {
                serde_json::Value::Object(serde_json::Map::new())
            }
            v => v,
        };
        Ok(match kind {
            SceneKind::Title => Self::Title(decode(kind, value)?),
            SceneKind::Subtitle => Self::Subtitle(decode(kind, value)?),
            SceneKind::Code => Self::Code(decode(kind, value)?),
            SceneKind::Bullets => Self::Bullets(decode(kind, value)?),
            SceneKind::Steps => Self::Steps(decode(kind, value)?),
            SceneKind::Diagram => Self::Diagram(decode(kind, value)?),
            SceneKind::Chart => Self::Chart(decode(kind, value)?),
            SceneKind::Showcase => Self::Showcase(decode(kind, value)?),
            SceneKind::Custom => Self::Custom(value),
        })
    }

    /// Encode back to the raw JSON props bag.
    pub fn to_json(&self) -> serde_json::Value {
        let encoded = match self {
            Self::Title(p) => serde_json::to_value(p),
            Self::Subtitle(p) => serde_json::to_value(p),
            Self::Code(p) => serde_json::to_value(p),
            Self::Bullets(p) => serde_json::to_value(p),
            Self::Steps(p) => serde_json::to_value(p),
            Self::Diagram(p) => serde_json::to_value(p),
            Self::Chart(p) => serde_json::to_value(p),
            Self::Showcase(p) => serde_json::to_value(p),
            Self::Custom(v) => return v.clone(),
        };
        // Plain data structs with string keys always encode.
        encoded.unwrap_or(serde_json::Value::Null)
    }
}

/// One scene: identity, length, entry transition and content.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "SceneDescriptorDef", into = "SceneDescriptorDef")]
pub struct SceneDescriptor {
    /// Unique key within the composition.
    pub id: String,
    /// Length in frames (> 0).
    pub duration_in_frames: u64,
    /// Entry transition.
    pub transition: TransitionKind,
    /// Content; determines the scene kind.
    pub props: SceneProps,
}

impl SceneDescriptor {
    /// Scene with the default fade transition.
    pub fn new(id: impl Into<String>, duration_in_frames: u64, props: SceneProps) -> Self {
        Self {
            id: id.into(),
            duration_in_frames,
            transition: TransitionKind::default(),
            props,
        }
    }

    /// Same scene with `transition`.
    pub fn with_transition(mut self, transition: TransitionKind) -> Self {
        self.transition = transition;
        self
    }

    /// Template family.
    pub fn kind(&self) -> SceneKind {
        self.props.kind()
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SceneDescriptorDef {
    id: String,
    #[serde(rename = "type", alias = "kind")]
    kind: SceneKind,
    duration_in_frames: u64,
    #[serde(default)]
    transition: TransitionKind,
    #[serde(default, alias = "properties")]
    props: serde_json::Value,
}

impl TryFrom<SceneDescriptorDef> for SceneDescriptor {
    type Error = StoryError;

    fn try_from(def: SceneDescriptorDef) -> Result<Self, Self::Error> {
        let props = SceneProps::from_json(def.kind, def.props)
            .map_err(|e| StoryError::serde(format!("scene '{}': {e}", def.id)))?;
        Ok(Self {
            id: def.id,
            duration_in_frames: def.duration_in_frames,
            transition: def.transition,
            props,
        })
    }
}

impl From<SceneDescriptor> for SceneDescriptorDef {
    fn from(s: SceneDescriptor) -> Self {
        Self {
            kind: s.kind(),
            props: s.props.to_json(),
            id: s.id,
            duration_in_frames: s.duration_in_frames,
            transition: s.transition,
        }
    }
}

/// Colors and fonts shared by every template.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Theme {
    /// Canvas fill.
    pub background: Rgba8,
    /// Highlight color.
    pub accent: Rgba8,
    /// Primary text color.
    pub text: Rgba8,
    /// Body font family list.
    pub font_family: String,
    /// Code font family list.
    pub code_font_family: String,
}

fn default_background() -> Rgba8 {
    Rgba8::rgb(0x05, 0x05, 0x05)
}

fn default_accent() -> Rgba8 {
    Rgba8::rgb(0x00, 0xE5, 0xFF)
}

fn default_text() -> Rgba8 {
    Rgba8::WHITE
}

fn default_font_family() -> String {
    "Inter, \"Noto Sans SC\", sans-serif".to_owned()
}

fn default_code_font_family() -> String {
    "\"JetBrains Mono\", \"Fira Code\", monospace".to_owned()
}

/// Top-level video description: output parameters, theme and the ordered scene list.
///
/// Loaded from JSON (camelCase keys) with [`VideoConfig::from_json_str`] /
/// [`VideoConfig::from_path`], or built with [`crate::VideoConfigBuilder`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Frame rate.
    pub fps: Fps,
    /// Canvas fill color.
    #[serde(default = "default_background")]
    pub background_color: Rgba8,
    /// Theme accent.
    #[serde(default = "default_accent")]
    pub accent_color: Rgba8,
    /// Primary text color.
    #[serde(default = "default_text")]
    pub text_color: Rgba8,
    /// Body font family list (CSS syntax).
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Code font family list (CSS syntax).
    #[serde(default = "default_code_font_family")]
    pub code_font_family: String,
    /// Seed for decorative pseudorandom layout.
    #[serde(default)]
    pub seed: u64,
    /// Scenes in playback order.
    #[serde(default)]
    pub scenes: Vec<SceneDescriptor>,
}

impl VideoConfig {
    /// Empty configuration with default theme.
    pub fn new(width: u32, height: u32, fps: Fps) -> Self {
        Self {
            width,
            height,
            fps,
            background_color: default_background(),
            accent_color: default_accent(),
            text_color: default_text(),
            font_family: default_font_family(),
            code_font_family: default_code_font_family(),
            seed: 0,
            scenes: Vec::new(),
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> StoryResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| StoryError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> StoryResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Output surface.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Theme view of the color and font fields.
    pub fn theme(&self) -> Theme {
        Theme {
            background: self.background_color,
            accent: self.accent_color,
            text: self.text_color,
            font_family: self.font_family.clone(),
            code_font_family: self.code_font_family.clone(),
        }
    }

    /// Check output parameters and scene list invariants.
    pub fn validate(&self) -> StoryResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(StoryError::validation("fps must have num>0 and den>0"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(StoryError::validation("width/height must be > 0"));
        }

        let mut seen = BTreeSet::new();
        for scene in &self.scenes {
            if scene.id.trim().is_empty() {
                return Err(StoryError::validation("scene id must be non-empty"));
            }
            if !seen.insert(scene.id.as_str()) {
                return Err(StoryError::validation(format!(
                    "duplicate scene id '{}'",
                    scene.id
                )));
            }
            if scene.duration_in_frames == 0 {
                return Err(StoryError::validation(format!(
                    "scene '{}' durationInFrames must be > 0",
                    scene.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
