use std::fmt::Write as _;

use crate::{
    foundation::{
        color::Rgba8,
        core::{Affine, Rect},
    },
    visual::{
        frame::FrameTree,
        node::{FontRole, Group, Stroke, TextAnchor, TextNode, VisualNode},
    },
};

impl FrameTree {
    /// Serialize the frame as a standalone SVG document.
    ///
    /// Output is byte-stable for equal trees: numbers are printed with at most three decimals and
    /// clip ids are assigned in paint order.
    pub fn to_svg(&self) -> String {
        let mut w = SvgWriter {
            out: String::with_capacity(16 * 1024),
            next_clip: 0,
            body_font: &self.font_family,
            code_font: &self.code_font_family,
        };
        let (cw, ch) = (self.canvas.w(), self.canvas.h());
        let _ = write!(
            w.out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.canvas.width,
            self.canvas.height,
            num(cw),
            num(ch)
        );
        w.out.push('\n');
        let _ = write!(
            w.out,
            r#"<rect width="{}" height="{}"{}/>"#,
            num(cw),
            num(ch),
            paint("fill", Some(self.background))
        );
        w.out.push('\n');
        for layer in &self.layers {
            w.node(layer);
        }
        w.out.push_str("</svg>\n");
        w.out
    }
}

struct SvgWriter<'a> {
    out: String,
    next_clip: usize,
    body_font: &'a str,
    code_font: &'a str,
}

impl SvgWriter<'_> {
    fn node(&mut self, node: &VisualNode) {
        match node {
            VisualNode::Group(g) => self.group(g),
            VisualNode::Rect(r) => {
                let rect = r.rect.abs();
                let _ = write!(
                    self.out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    num(rect.x0),
                    num(rect.y0),
                    num(rect.width()),
                    num(rect.height())
                );
                if r.radius > 0.0 {
                    let _ = write!(self.out, r#" rx="{}""#, num(r.radius));
                }
                self.shape_paint(r.fill, r.stroke.as_ref());
            }
            VisualNode::Ellipse(e) => {
                let _ = write!(
                    self.out,
                    r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}""#,
                    num(e.center.x),
                    num(e.center.y),
                    num(e.radii.x.abs()),
                    num(e.radii.y.abs())
                );
                self.shape_paint(e.fill, e.stroke.as_ref());
            }
            VisualNode::Line(l) => {
                let _ = write!(
                    self.out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                    num(l.from.x),
                    num(l.from.y),
                    num(l.to.x),
                    num(l.to.y)
                );
                self.shape_paint(None, Some(&l.stroke));
            }
            VisualNode::Polyline(p) => {
                if p.points.len() < 2 {
                    return;
                }
                let points = p
                    .points
                    .iter()
                    .map(|pt| format!("{},{}", num(pt.x), num(pt.y)))
                    .collect::<Vec<_>>()
                    .join(" ");
                let _ = write!(self.out, r#"<polyline points="{points}""#);
                self.shape_paint(None, Some(&p.stroke));
            }
            VisualNode::Path(p) => {
                if p.d.trim().is_empty() {
                    return;
                }
                let _ = write!(self.out, r#"<path d="{}""#, escape(&p.d));
                self.shape_paint(p.fill, p.stroke.as_ref());
            }
            VisualNode::Text(t) => self.text(t),
        }
    }

    fn group(&mut self, g: &Group) {
        if g.children.is_empty() || g.opacity <= 0.0 {
            return;
        }
        if g.is_identity() {
            g.children.iter().for_each(|c| self.node(c));
            return;
        }

        let clipped = g.clip.is_some_and(|c| self.clip_path(c));
        let mut open = 0;
        if clipped {
            open += 1;
        }
        if g.transform != Affine::IDENTITY || g.opacity < 1.0 {
            self.out.push_str("<g");
            if g.transform != Affine::IDENTITY {
                let [a, b, c, d, e, f] = g.transform.as_coeffs();
                let _ = write!(
                    self.out,
                    r#" transform="matrix({} {} {} {} {} {})""#,
                    num(a),
                    num(b),
                    num(c),
                    num(d),
                    num(e),
                    num(f)
                );
            }
            if g.opacity < 1.0 {
                let _ = write!(self.out, r#" opacity="{}""#, num(g.opacity));
            }
            self.out.push_str(">\n");
            open += 1;
        }
        g.children.iter().for_each(|c| self.node(c));
        for _ in 0..open {
            self.out.push_str("</g>\n");
        }
    }

    // Opens a `<g clip-path>`; returns false when the clip is degenerate.
    fn clip_path(&mut self, clip: Rect) -> bool {
        let clip = clip.abs();
        if !clip.is_finite() {
            return false;
        }
        let id = format!("clip{}", self.next_clip);
        self.next_clip += 1;
        let _ = write!(
            self.out,
            r#"<clipPath id="{id}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
            num(clip.x0),
            num(clip.y0),
            num(clip.width()),
            num(clip.height())
        );
        let _ = writeln!(self.out, r#"<g clip-path="url(#{id})">"#);
        true
    }

    fn shape_paint(&mut self, fill: Option<Rgba8>, stroke: Option<&Stroke>) {
        match fill {
            Some(_) => self.out.push_str(&paint("fill", fill)),
            None => self.out.push_str(r#" fill="none""#),
        }
        if let Some(s) = stroke {
            self.out.push_str(&paint("stroke", Some(s.color)));
            let _ = write!(self.out, r#" stroke-width="{}""#, num(s.width));
            if let Some([dash, gap]) = s.dash {
                let _ = write!(self.out, r#" stroke-dasharray="{} {}""#, num(dash), num(gap));
            }
            self.out.push_str(r#" stroke-linecap="round" stroke-linejoin="round""#);
        }
        self.out.push_str("/>\n");
    }

    fn text(&mut self, t: &TextNode) {
        if t.text.is_empty() || t.size <= 0.0 {
            return;
        }
        let family = match t.font {
            FontRole::Body => self.body_font,
            FontRole::Code => self.code_font,
        };
        let _ = write!(
            self.out,
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}""#,
            num(t.origin.x),
            num(t.origin.y),
            escape(family),
            num(t.size),
            t.weight
        );
        match t.anchor {
            TextAnchor::Start => {}
            TextAnchor::Middle => self.out.push_str(r#" text-anchor="middle""#),
            TextAnchor::End => self.out.push_str(r#" text-anchor="end""#),
        }
        if t.letter_spacing != 0.0 {
            let _ = write!(self.out, r#" letter-spacing="{}""#, num(t.letter_spacing));
        }
        if t.preserve_space {
            self.out.push_str(r#" xml:space="preserve""#);
        }
        self.out.push_str(&paint("fill", Some(t.color)));
        let _ = writeln!(self.out, ">{}</text>", escape(&t.text));
    }
}

fn paint(attr: &str, color: Option<Rgba8>) -> String {
    let Some(c) = color else {
        return format!(r#" {attr}="none""#);
    };
    if c.a == 255 {
        format!(r#" {attr}="{}""#, c.to_hex_rgb())
    } else {
        format!(
            r#" {attr}="{}" {attr}-opacity="{}""#,
            c.to_hex_rgb(),
            num(c.alpha())
        )
    }
}

/// Shortest decimal with at most three fractional digits; non-finite values print as `0`.
pub(crate) fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    let mut s = format!("{rounded:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() && c != '\t' => {}
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
