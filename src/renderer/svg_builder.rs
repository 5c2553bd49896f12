//! SVG builder: appends styled primitives to a [`Surface`].

use crate::surface::{num, Surface};

pub(super) struct SvgBuilder<'s, S: Surface> {
    surface: &'s mut S,
}

impl<'s, S: Surface> SvgBuilder<'s, S> {
    pub(super) fn new(surface: &'s mut S) -> Self {
        Self { surface }
    }

    /// Append a `<g>` carrying `class` and `transform`.
    pub(super) fn group(&mut self, parent: S::Node, class: &str, transform: &str) -> S::Node {
        let g = self.surface.append(parent, "g");
        self.surface.set_attr(g, "class", class);
        self.surface.set_attr(g, "transform", transform);
        g
    }

    pub(super) fn line(
        &mut self,
        parent: S::Node,
        (x1, y1): (f64, f64),
        (x2, y2): (f64, f64),
        stroke: &str,
        stroke_width: f64,
        title: &str,
    ) -> S::Node {
        let line = self.surface.append(parent, "line");
        self.surface.set_attr(line, "x1", &num(x1));
        self.surface.set_attr(line, "y1", &num(y1));
        self.surface.set_attr(line, "x2", &num(x2));
        self.surface.set_attr(line, "y2", &num(y2));
        self.surface.set_style(line, "stroke", stroke);
        self.surface.set_style(line, "stroke-width", &num(stroke_width));
        self.title(line, title);
        line
    }

    /// Append a filled circle, optionally outlined `(color, width)` and titled.
    pub(super) fn circle(
        &mut self,
        parent: S::Node,
        (cx, cy): (f64, f64),
        radius: f64,
        fill: &str,
        outline: Option<(&str, f64)>,
        title: Option<&str>,
    ) -> S::Node {
        let circle = self.surface.append(parent, "circle");
        self.surface.set_attr(circle, "cx", &num(cx));
        self.surface.set_attr(circle, "cy", &num(cy));
        self.surface.set_attr(circle, "r", &num(radius));
        self.surface.set_style(circle, "fill", fill);
        if let Some((stroke, width)) = outline {
            self.surface.set_style(circle, "stroke", stroke);
            self.surface.set_style(circle, "stroke-width", &num(width));
        }
        if let Some(title) = title {
            self.title(circle, title);
        }
        circle
    }

    /// Append a label centered on `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub(super) fn label(
        &mut self,
        parent: S::Node,
        (x, y): (f64, f64),
        content: &str,
        font_size: f64,
        dy: &str,
        fill: &str,
        family: &str,
    ) -> S::Node {
        let text = self.surface.append(parent, "text");
        self.surface.set_attr(text, "x", &num(x));
        self.surface.set_attr(text, "y", &num(y));
        self.surface.set_attr(text, "dy", dy);
        self.surface.set_attr(text, "fill", fill);
        self.surface.set_style(text, "text-anchor", "middle");
        self.surface.set_style(text, "font-size", &format!("{}px", num(font_size)));
        self.surface.set_style(text, "font-family", family);
        self.surface.set_text(text, content);
        text
    }

    fn title(&mut self, parent: S::Node, title: &str) {
        let node = self.surface.append(parent, "title");
        self.surface.set_text(node, title);
    }
}
