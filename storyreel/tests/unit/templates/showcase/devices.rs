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

fn typed_lines(node: &VisualNode) -> Vec<String> {
    node.texts()
        .into_iter()
        .filter(|t| *t != "\u{279C}")
        .map(str::to_owned)
        .collect()
}

#[test]
fn commands_are_scheduled_back_to_back() {
    let cmds = vec!["ls".to_owned(), "pwd".to_owned(), String::new()];
    assert_eq!(command_starts(&cmds), vec![0, 14, 30]);
    assert!(command_starts(&[]).is_empty());
}

#[test]
fn terminal_types_default_commands() {
    let theme = theme();
    let props = ShowcaseProps::new("TerminalWindow");

    assert_eq!(typed_lines(&terminal_window(&ctx(&theme, 0), &props).unwrap()), vec![""]);
    assert_eq!(
        typed_lines(&terminal_window(&ctx(&theme, 6), &props).unwrap()),
        vec!["npm"]
    );
    // "npm install remotion" is 20 chars: typed by frame 40, next starts at 50.
    assert_eq!(
        typed_lines(&terminal_window(&ctx(&theme, 49), &props).unwrap()),
        vec!["npm install remotion"]
    );
    assert_eq!(
        typed_lines(&terminal_window(&ctx(&theme, 500), &props).unwrap()),
        vec!["npm install remotion", "npm start"]
    );
}

#[test]
fn terminal_uses_string_items() {
    let theme = theme();
    let mut props = ShowcaseProps::new("TerminalWindow");
    props.items = vec![serde_json::json!("cargo test"), serde_json::json!(42)];
    assert_eq!(
        typed_lines(&terminal_window(&ctx(&theme, 500), &props).unwrap()),
        vec!["cargo test"]
    );
}

#[test]
fn browser_shows_address_from_subtitle() {
    let theme = theme();
    let mut props = ShowcaseProps::new("BrowserWindow");
    assert!(browser_window(&ctx(&theme, 0), &props)
        .unwrap()
        .contains_text("https://remotion.dev"));
    props.subtitle = Some("docs.rs/storyreel".to_owned());
    let node = browser_window(&ctx(&theme, 0), &props).unwrap();
    assert_eq!(node.texts(), vec!["docs.rs/storyreel", "Web Content"]);
}

fn load_bar_width(node: &VisualNode) -> Option<f64> {
    let VisualNode::Group(g) = node else {
        return None;
    };
    g.children.iter().find_map(|c| match c {
        VisualNode::Rect(r) if r.fill == Some(Rgba8::rgb(0x8A, 0xB4, 0xF8)) => Some(r.rect.width()),
        _ => None,
    })
}

#[test]
fn browser_v2_defaults_to_new_tab() {
    let theme = theme();
    let node = browser_v2(&ctx(&theme, 0), &ShowcaseProps::new("BrowserV2")).unwrap();
    let texts = node.texts();
    for text in ["New Tab", "Loading...", "https://", "google.com", "Welcome to New Tab"] {
        assert!(texts.contains(&text), "{text} missing");
    }
}

#[test]
fn browser_v2_page_loads_over_two_seconds() {
    let theme = theme();
    let mut props = ShowcaseProps::new("BrowserV2");
    props.title = Some("Documentation".to_owned());
    props.subtitle = Some("remotion.dev/docs".to_owned());

    let half = browser_v2(&ctx(&theme, 30), &props).unwrap();
    assert!(half.contains_text("Welcome to Documentation"));
    assert!(half.contains_text("remotion.dev/docs"));
    let width = load_bar_width(&half).unwrap();
    assert!((width - 700.0).abs() < 1e-9);

    assert_eq!(load_bar_width(&browser_v2(&ctx(&theme, 60), &props).unwrap()), None);
}
