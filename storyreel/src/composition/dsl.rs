use crate::{
    composition::{
        model::{SceneDescriptor, SceneProps, VideoConfig},
        props::{
            BulletItem, BulletsProps, ChartDatum, ChartProps, ChartType, CodeProps, ShowcaseProps,
            StepItem, StepsProps, SubtitleProps, TitleLayout, TitleProps,
        },
    },
    effects::transitions::TransitionKind,
    foundation::{color::Rgba8, core::Fps, error::StoryResult},
};

/// Builder for [`VideoConfig`](crate::VideoConfig).
pub struct VideoConfigBuilder {
    config: VideoConfig,
}

impl VideoConfigBuilder {
    /// Start a configuration with the default theme and no scenes.
    pub fn new(width: u32, height: u32, fps: Fps) -> Self {
        Self {
            config: VideoConfig::new(width, height, fps),
        }
    }

    /// Set the canvas fill.
    pub fn background(mut self, color: Rgba8) -> Self {
        self.config.background_color = color;
        self
    }

    /// Set the accent color.
    pub fn accent(mut self, color: Rgba8) -> Self {
        self.config.accent_color = color;
        self
    }

    /// Set the primary text color.
    pub fn text_color(mut self, color: Rgba8) -> Self {
        self.config.text_color = color;
        self
    }

    /// Set body and code font family lists.
    pub fn fonts(mut self, body: impl Into<String>, code: impl Into<String>) -> Self {
        self.config.font_family = body.into();
        self.config.code_font_family = code.into();
        self
    }

    /// Set the decorative seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Append a scene.
    pub fn scene(mut self, scene: SceneDescriptor) -> Self {
        self.config.scenes.push(scene);
        self
    }

    /// Append a scene with an explicit transition.
    pub fn scene_with(
        self,
        id: impl Into<String>,
        duration_in_frames: u64,
        transition: TransitionKind,
        props: SceneProps,
    ) -> Self {
        self.scene(SceneDescriptor::new(id, duration_in_frames, props).with_transition(transition))
    }

    /// Build and validate the final configuration.
    pub fn build(self) -> StoryResult<VideoConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// `title` props.
pub fn title(text: impl Into<String>, subtitle: Option<&str>) -> SceneProps {
    SceneProps::Title(TitleProps {
        title: text.into(),
        subtitle: subtitle.map(str::to_owned),
        variant: TitleLayout::Center,
    })
}

/// `subtitle` props.
pub fn subtitle(text: impl Into<String>) -> SceneProps {
    SceneProps::Subtitle(SubtitleProps { text: text.into() })
}

/// `code` props with line numbers and no highlights.
pub fn code(source: impl Into<String>, file_name: Option<&str>) -> SceneProps {
    SceneProps::Code(CodeProps {
        code: source.into(),
        language: None,
        show_line_numbers: true,
        highlight_lines: Vec::new(),
        file_name: file_name.map(str::to_owned),
    })
}

/// `bullets` props from plain strings.
pub fn bullets<S: Into<String>>(
    heading: Option<&str>,
    items: impl IntoIterator<Item = S>,
) -> SceneProps {
    SceneProps::Bullets(BulletsProps {
        title: heading.map(str::to_owned),
        items: items
            .into_iter()
            .map(|text| BulletItem {
                text: text.into(),
                icon: None,
                color: None,
            })
            .collect(),
    })
}

/// `steps` props from step titles.
pub fn steps<S: Into<String>>(
    titles: impl IntoIterator<Item = S>,
    current_step_index: Option<usize>,
) -> SceneProps {
    SceneProps::Steps(StepsProps {
        steps: titles
            .into_iter()
            .map(|title| StepItem {
                title: title.into(),
                description: None,
            })
            .collect(),
        current_step_index,
    })
}

/// Bar chart props from `(label, value)` pairs.
pub fn bar_chart<S: Into<String>>(
    heading: Option<&str>,
    data: impl IntoIterator<Item = (S, f64)>,
) -> SceneProps {
    SceneProps::Chart(ChartProps {
        chart_type: ChartType::Bar,
        data: data
            .into_iter()
            .map(|(label, value)| ChartDatum {
                label: label.into(),
                value,
                color: None,
            })
            .collect(),
        title: heading.map(str::to_owned),
        y_axis_label: None,
    })
}

/// `showcase` props for `variant` with an optional title.
pub fn showcase(variant: impl Into<String>, heading: Option<&str>) -> SceneProps {
    SceneProps::Showcase(ShowcaseProps {
        title: heading.map(str::to_owned),
        ..ShowcaseProps::new(variant)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
