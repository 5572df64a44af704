use super::*;
use crate::{
    composition::model::{Theme, VideoConfig},
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

fn props() -> CodeProps {
    CodeProps {
        code: "\nconst a = 1;\n  const b = 2;\nreturn a + b;\n".to_owned(),
        language: Some("ts".to_owned()),
        show_line_numbers: true,
        highlight_lines: vec![2],
        file_name: None,
    }
}

fn row_opacities(node: &VisualNode) -> Vec<f64> {
    let VisualNode::Group(root) = node else {
        panic!("group expected");
    };
    root.children
        .iter()
        .filter_map(|c| match c {
            VisualNode::Group(g) => Some(g.opacity),
            _ => None,
        })
        .collect()
}

#[test]
fn trims_code_and_defaults_file_name() {
    let theme = theme();
    let node = code(&ctx(&theme, 100), &props()).unwrap();
    let texts = node.texts();
    assert_eq!(texts[0], "script.ts");
    assert!(texts.contains(&"const a = 1;"));
    assert!(texts.contains(&"  const b = 2;"));
    assert!(texts.contains(&"3"));
    assert!(!texts.contains(&"4"));
}

#[test]
fn lines_reveal_in_stagger() {
    let theme = theme();
    assert_eq!(row_opacities(&code(&ctx(&theme, 0), &props()).unwrap()), vec![0.0; 3]);
    let at_ten = row_opacities(&code(&ctx(&theme, 10), &props()).unwrap());
    assert_eq!(at_ten, vec![1.0, 0.5, 0.0]);
    let late = row_opacities(&code(&ctx(&theme, 40), &props()).unwrap());
    assert_eq!(late, vec![1.0; 3]);
}

#[test]
fn highlight_band_only_on_requested_line() {
    let theme = theme();
    let VisualNode::Group(root) = code(&ctx(&theme, 40), &props()).unwrap() else {
        panic!("group expected");
    };
    let bands: Vec<usize> = root
        .children
        .iter()
        .filter_map(|c| match c {
            VisualNode::Group(g) => Some(g),
            _ => None,
        })
        .enumerate()
        .filter(|(_, g)| matches!(g.children.first(), Some(VisualNode::Rect(_))))
        .map(|(i, _)| i + 1)
        .collect();
    assert_eq!(bands, vec![2]);
}

#[test]
fn hiding_line_numbers_drops_the_gutter() {
    let theme = theme();
    let p = CodeProps {
        show_line_numbers: false,
        file_name: Some("main.rs".to_owned()),
        ..props()
    };
    let node = code(&ctx(&theme, 100), &p).unwrap();
    let texts = node.texts();
    assert_eq!(texts[0], "main.rs");
    assert!(!texts.contains(&"1"));
}
