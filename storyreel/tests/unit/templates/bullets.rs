use super::*;
use crate::{
    composition::{
        model::{Theme, VideoConfig},
        props::BulletItem,
    },
    foundation::core::{Canvas, Fps},
};

fn theme() -> Theme {
    VideoConfig::new(1920, 1080, Fps::new(30, 1).unwrap()).theme()
}

fn ctx(theme: &Theme, local_frame: u64) -> TemplateCtx<'_> {
    TemplateCtx {
        local_frame,
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas {
            width: 1920,
            height: 1080,
        },
        theme,
        seed: 0,
    }
}

fn item(text: &str, icon: Option<&str>) -> BulletItem {
    BulletItem {
        text: text.to_owned(),
        icon: icon.map(str::to_owned),
        color: None,
    }
}

fn row_groups(node: &VisualNode) -> Vec<&Group> {
    let VisualNode::Group(root) = node else {
        panic!("group expected");
    };
    root.children
        .iter()
        .filter_map(|c| match c {
            VisualNode::Group(g) if g.children.len() == 2 => Some(g),
            _ => None,
        })
        .collect()
}

#[test]
fn classifies_icons() {
    assert_eq!(IconKind::classify("M12 2 L22 22 Z"), IconKind::Path);
    assert_eq!(IconKind::classify("  M1 1"), IconKind::Path);
    assert_eq!(IconKind::classify("M"), IconKind::Glyph);
    assert_eq!(IconKind::classify("https://x.test/a.png"), IconKind::Url);
    assert_eq!(IconKind::classify("logo.svg"), IconKind::Url);
    assert_eq!(IconKind::classify("🚀"), IconKind::Glyph);
}

#[test]
fn rows_enter_with_stagger() {
    let theme = theme();
    let props = BulletsProps {
        title: Some("Agenda".to_owned()),
        items: vec![item("one", None), item("two", Some("✅")), item("three", None)],
    };

    let early = bullets(&ctx(&theme, 10), &props).unwrap();
    let rows = row_groups(&early);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|g| g.opacity == 0.0));

    let later = bullets(&ctx(&theme, 30), &props).unwrap();
    let rows = row_groups(&later);
    assert!(rows[0].opacity > rows[1].opacity);
    assert!(rows[1].opacity > 0.0);
    assert_eq!(rows[2].opacity, 0.0);

    let texts = later.texts();
    assert_eq!(texts, vec!["Agenda", "one", "✅", "two", "three"]);
}

#[test]
fn title_fades_over_twenty_frames() {
    let theme = theme();
    let props = BulletsProps {
        title: Some("Agenda".to_owned()),
        items: vec![],
    };
    let node = bullets(&ctx(&theme, 10), &props).unwrap();
    let VisualNode::Group(root) = node else {
        panic!("group expected");
    };
    let VisualNode::Group(title) = &root.children[0] else {
        panic!("title group expected");
    };
    assert!((title.opacity - 0.5).abs() < 1e-9);
}

#[test]
fn item_color_overrides_accent() {
    let theme = theme();
    let red = Rgba8::rgb(255, 0, 0);
    let props = BulletsProps {
        title: None,
        items: vec![BulletItem {
            color: Some(red),
            ..item("x", None)
        }],
    };
    let node = bullets(&ctx(&theme, 60), &props).unwrap();
    let mut found = false;
    fn walk(n: &VisualNode, red: Rgba8, found: &mut bool) {
        match n {
            VisualNode::Rect(r) if r.fill == Some(red) => *found = true,
            VisualNode::Group(g) => g.children.iter().for_each(|c| walk(c, red, found)),
            _ => {}
        }
    }
    walk(&node, red, &mut found);
    assert!(found);
}
