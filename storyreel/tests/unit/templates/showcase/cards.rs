use super::*;
use crate::{
    composition::model::{Theme, VideoConfig},
    foundation::core::{Canvas, Fps},
};

fn theme() -> Theme {
    VideoConfig::new(3840, 1600, Fps::new(30, 1).unwrap()).theme()
}

fn ctx(theme: &Theme, local_frame: u64) -> TemplateCtx<'_> {
    TemplateCtx {
        local_frame,
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas {
            width: 3840,
            height: 1600,
        },
        theme,
        seed: 0,
    }
}

#[test]
fn glass_card_defaults_and_overrides() {
    let theme = theme();
    let bare = glass_card(&ctx(&theme, 0), &ShowcaseProps::new("GlassCard")).unwrap();
    assert_eq!(bare.texts(), vec!["Glass UI", "Modern Aesthetics"]);

    let mut props = ShowcaseProps::new("GlassCard");
    props.title = Some("Hello".to_owned());
    let node = glass_card(&ctx(&theme, 0), &props).unwrap();
    assert_eq!(node.texts(), vec!["Hello", "Modern Aesthetics"]);
}

#[test]
fn neon_card_uses_prop_color_over_accent() {
    let theme = theme();
    let pink = Rgba8::rgb(255, 0, 128);
    let mut props = ShowcaseProps::new("NeonCard");
    props.color = Some(pink);
    let VisualNode::Group(g) = neon_card(&ctx(&theme, 0), &props).unwrap() else {
        panic!("group expected");
    };
    let border = g
        .children
        .iter()
        .find_map(|c| match c {
            VisualNode::Rect(r) if r.fill == Some(Rgba8::BLACK) => r.stroke,
            _ => None,
        })
        .unwrap();
    assert_eq!(border.color, pink);
}

#[test]
fn neon_glow_grows_then_holds() {
    let theme = theme();
    let props = ShowcaseProps::new("NeonCard");
    let outer_width = |frame| {
        let VisualNode::Group(g) = neon_card(&ctx(&theme, frame), &props).unwrap() else {
            panic!("group expected");
        };
        match &g.children[0] {
            VisualNode::Rect(r) => r.stroke.unwrap().width,
            _ => panic!("glow rect expected"),
        }
    };
    assert!(outer_width(0) < outer_width(15));
    assert_eq!(outer_width(30), outer_width(90));
    assert!((outer_width(30) - 60.0).abs() < 1e-9);
}

#[test]
fn quote_card_attributes_author() {
    let theme = theme();
    let node = quote_card(&ctx(&theme, 0), &ShowcaseProps::new("QuoteCard")).unwrap();
    let texts = node.texts();
    assert_eq!(texts.first(), Some(&"\u{201C}"));
    assert_eq!(texts.last(), Some(&"\u{2014} Austin Freeman"));
    assert!(node.contains_text("Simplicity"));
    assert!(node.contains_text("efficiency."));
}

#[test]
fn profile_stats_accept_strings_and_numbers() {
    let mut props = ShowcaseProps::new("ProfileCard");
    assert_eq!(profile_stats(&props), ("312".to_owned(), "48".to_owned()));
    props.items = vec![
        serde_json::json!("https://example.test/me.jpg"),
        serde_json::json!({ "followers": "1k", "following": 7 }),
    ];
    assert_eq!(profile_stats(&props), ("1k".to_owned(), "7".to_owned()));
}

#[test]
fn profile_card_shows_name_and_role() {
    let theme = theme();
    let node = profile_card(&ctx(&theme, 0), &ShowcaseProps::new("ProfileCard")).unwrap();
    assert!(node.contains_text("Sophie Bennett"));
    assert!(node.contains_text("Product Designer"));
    assert!(node.contains_text("\u{1F464} 312"));
}

#[test]
fn metric_card_defaults() {
    let theme = theme();
    let node = metric_card(&ctx(&theme, 0), &ShowcaseProps::new("MetricCard")).unwrap();
    assert_eq!(node.texts(), vec!["Total Views", "1,024", "\u{25B2} 12%"]);
}

#[test]
fn twitter_card_defaults() {
    let theme = theme();
    let node = twitter_card(&ctx(&theme, 0), &ShowcaseProps::new("TwitterCard")).unwrap();
    for text in [
        "Elon Musk",
        "@elonmusk",
        "To the moon! \u{1F680}",
        "\u{1F4AC} 142",
        "\u{21C4} 86",
        "\u{2661} 1.2K",
        "\u{1F4CA} 45K",
    ] {
        assert!(node.texts().contains(&text), "{text} missing");
    }
}

#[test]
fn twitter_card_reads_handle_and_stats_from_items() {
    let theme = theme();
    let mut props = ShowcaseProps::new("TwitterCard");
    props.title = Some("Remotion".to_owned());
    props.subtitle = Some("Video creation in React".to_owned());
    props.items = vec![
        serde_json::json!("@remotion"),
        serde_json::json!({ "likes": 9000, "views": "1M" }),
    ];
    let node = twitter_card(&ctx(&theme, 0), &props).unwrap();
    let texts = node.texts();
    assert!(texts.contains(&"Remotion"));
    assert!(texts.contains(&"@remotion"));
    assert!(texts.contains(&"Video creation in React"));
    assert!(texts.contains(&"\u{2661} 9000"));
    assert!(texts.contains(&"\u{1F4CA} 1M"));
    assert!(texts.contains(&"\u{1F4AC} 142"));
}
