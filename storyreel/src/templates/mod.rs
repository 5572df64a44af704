//! Built-in scene templates. Each is a pure function of a [`TemplateCtx`] and its props.
//!
//! [`TemplateCtx`]: crate::TemplateCtx

use crate::foundation::core::{Affine, Point, Vec2};

pub(crate) mod ambient;
pub(crate) mod basic;
pub(crate) mod bullets;
pub(crate) mod chart;
pub(crate) mod code;
pub(crate) mod diagram;
pub(crate) mod showcase;
pub(crate) mod steps;

/// Rough advance width of `text` at `size`; wide (CJK/emoji) chars count double.
pub(crate) fn approx_text_width(text: &str, size: f64) -> f64 {
    text.chars()
        .map(|c| if (c as u32) < 0x1100 { 0.56 } else { 1.0 })
        .sum::<f64>()
        * size
}

/// Scale by `s` around `center`.
pub(crate) fn scale_about(center: Point, s: f64) -> Affine {
    Affine::translate(center.to_vec2()) * Affine::scale(s) * Affine::translate(-center.to_vec2())
}

/// Rotate by `degrees` around `center`.
pub(crate) fn rotate_about(center: Point, degrees: f64) -> Affine {
    Affine::translate(center.to_vec2())
        * Affine::rotate(degrees.to_radians())
        * Affine::translate(-center.to_vec2())
}

/// Greedy word wrap against [`approx_text_width`]. Words longer than `max_width` get a line
/// of their own.
pub(crate) fn wrap_lines(text: &str, size: f64, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate = format!("{line} {word}");
            if approx_text_width(&candidate, size) > max_width {
                lines.push(std::mem::replace(&mut line, word.to_owned()));
            } else {
                line = candidate;
            }
        }
        lines.push(line);
    }
    lines
}

pub(crate) fn translate_y(dy: f64) -> Affine {
    Affine::translate(Vec2::new(0.0, dy))
}

#[cfg(test)]
#[path = "../../tests/unit/templates/mod.rs"]
mod tests;
