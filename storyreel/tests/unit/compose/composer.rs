use super::*;
use crate::{
    composition::{
        dsl::{VideoConfigBuilder, showcase, subtitle, title},
        props::ShowcaseProps,
    },
    dispatch::registry::ShowcaseLayout,
    effects::transitions::TransitionKind,
    foundation::{
        color::Rgba8,
        core::{Fps, Point},
    },
    visual::node::{TextNode, VisualNode},
};

fn three_scenes() -> VideoConfig {
    VideoConfigBuilder::new(1920, 1080, Fps::new(30, 1).unwrap())
        .scene_with("a", 100, TransitionKind::Fade, title("Alpha", None))
        .scene_with("b", 60, TransitionKind::Slide, subtitle("Bravo"))
        .scene_with("c", 90, TransitionKind::None, title("Charlie", None))
        .build()
        .unwrap()
}

#[test]
fn mounts_one_scene_per_frame() {
    let composer = Composer::new(&three_scenes()).unwrap();
    assert_eq!(composer.total_frames(), 250);

    let cases = [(0, "a", 0), (99, "a", 99), (100, "b", 0), (159, "b", 59), (160, "c", 0), (249, "c", 89)];
    for (frame, id, local) in cases {
        let tree = composer.render_frame(frame).unwrap();
        let active = tree.active_scene.unwrap();
        assert_eq!((active.id.as_str(), active.local_frame), (id, local), "frame {frame}");
    }
}

#[test]
fn out_of_range_frames_keep_ambient_layers() {
    let composer = Composer::new(&three_scenes()).unwrap();
    for frame in [-1, 250, 10_000] {
        let tree = composer.render_frame(frame).unwrap();
        assert!(tree.active_scene.is_none());
        // geometry, HUD, progress bar
        assert_eq!(tree.layers.len(), 3);
    }
    assert_eq!(composer.render_frame(120).unwrap().layers.len(), 4);
}

#[test]
fn zero_scenes_render_only_ambient() {
    let config = VideoConfig::new(640, 360, Fps::new(24, 1).unwrap());
    assert_eq!(total_duration(&config), 0);
    let tree = render_frame(&config, 0).unwrap();
    assert!(tree.active_scene.is_none());
    assert_eq!(tree.layers.len(), 3);
    let VisualNode::Group(bar) = &tree.layers[2] else {
        panic!("progress group expected");
    };
    assert_eq!(bar.children.len(), 1);
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let mut config = three_scenes();
    config.scenes[1].id = "a".to_owned();
    let err = Composer::new(&config).unwrap_err();
    assert!(err.to_string().contains("duplicate scene id 'a'"));
}

#[test]
fn evaluation_is_idempotent() {
    let config = three_scenes();
    let composer = Composer::new(&config).unwrap();
    assert_eq!(composer.render_frame(42).unwrap(), composer.render_frame(42).unwrap());
    assert_eq!(composer.render_frame(42).unwrap(), render_frame(&config, 42).unwrap());
}

#[test]
fn scene_seeds_follow_ids() {
    let composer = Composer::new(&three_scenes()).unwrap();
    assert_eq!(composer.scene_seeds.len(), 3);
    assert_ne!(composer.scene_seeds[0], composer.scene_seeds[1]);
    assert_eq!(composer.scene_seeds[2], stable_hash64(0, "c"));
}

#[test]
fn transitions_wrap_scene_content() {
    let composer = Composer::new(&three_scenes()).unwrap();
    let tree = composer.render_frame(100).unwrap();
    let VisualNode::Group(wrapper) = &tree.layers[1] else {
        panic!("transition wrapper expected");
    };
    // slide starts one canvas width to the right
    assert_eq!(wrapper.transform.translation().x, 1920.0);
    assert!(wrapper.children[0].contains_text("Bravo"));
}

#[test]
fn custom_registry_is_used() {
    fn stamp(_: &TemplateCtx<'_>, p: &ShowcaseProps) -> StoryResult<VisualNode> {
        Ok(TextNode::new(format!("stamp:{}", p.variant), Point::ORIGIN, 10.0, Rgba8::WHITE).into())
    }
    let mut registry = ShowcaseRegistry::new();
    registry
        .register("Stamp", ShowcaseLayout::Contained, stamp)
        .unwrap();
    let config = VideoConfigBuilder::new(320, 240, Fps::new(30, 1).unwrap())
        .scene_with("s", 10, TransitionKind::None, showcase("Stamp", None))
        .build()
        .unwrap();
    let composer = Composer::with_registry(&config, &registry).unwrap();
    assert!(composer.render_frame(3).unwrap().contains_text("stamp:Stamp"));
    assert!(Composer::new(&config)
        .unwrap()
        .render_frame(3)
        .unwrap()
        .contains_text("Unknown Variant: Stamp"));
}
