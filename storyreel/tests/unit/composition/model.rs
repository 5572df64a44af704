use super::*;
use crate::composition::props::{NodeShape, TitleLayout};

const MINIMAL: &str = r##"{
  "width": 1920,
  "height": 1080,
  "fps": 30,
  "scenes": [
    { "id": "t", "type": "title", "durationInFrames": 90, "props": { "title": "Hi" } },
    { "id": "s", "kind": "subtitle", "durationInFrames": 60, "transition": "slide",
      "properties": { "text": "caption" } },
    { "id": "x", "type": "custom", "durationInFrames": 10 }
  ]
}"##;

#[test]
fn parses_minimal_config_with_defaults() {
    let cfg = VideoConfig::from_json_str(MINIMAL).unwrap();
    assert_eq!(cfg.canvas(), Canvas { width: 1920, height: 1080 });
    assert_eq!(cfg.fps, Fps::new(30, 1).unwrap());
    assert_eq!(cfg.background_color, Rgba8::rgb(5, 5, 5));
    assert_eq!(cfg.accent_color, Rgba8::rgb(0, 0xE5, 0xFF));
    assert_eq!(cfg.seed, 0);

    assert_eq!(cfg.scenes.len(), 3);
    assert_eq!(cfg.scenes[0].kind(), SceneKind::Title);
    assert_eq!(cfg.scenes[0].transition, TransitionKind::Fade);
    let SceneProps::Title(t) = &cfg.scenes[0].props else {
        panic!("title props expected");
    };
    assert_eq!(t.title, "Hi");
    assert_eq!(t.variant, TitleLayout::Center);

    assert_eq!(cfg.scenes[1].transition, TransitionKind::Slide);
    assert_eq!(
        cfg.scenes[1].props,
        SceneProps::Subtitle(SubtitleProps {
            text: "caption".to_owned()
        })
    );
    assert_eq!(
        cfg.scenes[2].props,
        SceneProps::Custom(serde_json::Value::Null)
    );
}

#[test]
fn props_errors_name_the_scene() {
    let json = r#"{"width":10,"height":10,"fps":30,"scenes":[
        {"id":"broken","type":"code","durationInFrames":5,"props":{"fileName":"a.rs"}}]}"#;
    let err = VideoConfig::from_json_str(json).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("serialization error"), "{msg}");
    assert!(msg.contains("broken"), "{msg}");
}

#[test]
fn unknown_kind_is_rejected() {
    let json = r#"{"width":10,"height":10,"fps":30,"scenes":[
        {"id":"a","type":"hologram","durationInFrames":5}]}"#;
    assert!(VideoConfig::from_json_str(json).is_err());
}

#[test]
fn validation_rejects_bad_scenes() {
    let base = VideoConfig::new(640, 360, Fps::new(30, 1).unwrap());

    let mut zero = base.clone();
    zero.scenes.push(SceneDescriptor::new(
        "z",
        0,
        SceneProps::Custom(serde_json::Value::Null),
    ));
    assert!(zero.validate().unwrap_err().to_string().contains("'z'"));

    let mut blank = base.clone();
    blank.scenes.push(SceneDescriptor::new(
        "  ",
        3,
        SceneProps::Custom(serde_json::Value::Null),
    ));
    assert!(blank.validate().is_err());

    let mut no_size = base;
    no_size.width = 0;
    assert!(no_size.validate().is_err());
}

#[test]
fn descriptor_roundtrips_through_json() {
    let cfg = VideoConfig::from_json_str(MINIMAL).unwrap();
    let json = serde_json::to_string(&cfg).unwrap();
    let back = VideoConfig::from_json_str(&json).unwrap();
    assert_eq!(cfg, back);

    let v = serde_json::to_value(&cfg.scenes[1]).unwrap();
    assert_eq!(v["type"], "subtitle");
    assert_eq!(v["durationInFrames"], 60);
    assert_eq!(v["props"]["text"], "caption");
}

#[test]
fn diagram_and_chart_props_use_type_keys() {
    let d = SceneProps::from_json(
        SceneKind::Diagram,
        serde_json::json!({
            "nodes": [{"id":"a","label":"A","x":10,"y":20,"type":"diamond","color":"#f00"}],
            "edges": [{"fromId":"a","toId":"b"}]
        }),
    )
    .unwrap();
    let SceneProps::Diagram(d) = d else {
        panic!("diagram expected");
    };
    assert_eq!(d.nodes[0].shape, NodeShape::Diamond);
    assert_eq!(d.nodes[0].color, Some(Rgba8::rgb(255, 0, 0)));
    assert_eq!(d.edges[0].to_id, "b");

    let c = SceneProps::from_json(
        SceneKind::Chart,
        serde_json::json!({"type":"line","data":[{"label":"a","value":3}]}),
    )
    .unwrap();
    assert_eq!(c.kind(), SceneKind::Chart);
}

#[test]
fn tech_title_variant_maps_to_center() {
    let p = SceneProps::from_json(
        SceneKind::Title,
        serde_json::json!({"title":"x","variant":"tech"}),
    )
    .unwrap();
    let SceneProps::Title(t) = p else {
        panic!("title expected");
    };
    assert_eq!(t.variant, TitleLayout::Center);
}

#[test]
fn theme_mirrors_config_fields() {
    let mut cfg = VideoConfig::new(640, 360, Fps::new(24, 1).unwrap());
    cfg.text_color = Rgba8::rgb(1, 2, 3);
    let theme = cfg.theme();
    assert_eq!(theme.text, Rgba8::rgb(1, 2, 3));
    assert_eq!(theme.accent, cfg.accent_color);
    assert_eq!(theme.code_font_family, cfg.code_font_family);
}
