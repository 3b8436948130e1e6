//! Chart drawing surface.
//!
//! A [`Surface`] holds the SVG that `plotters` produced for the latest draw
//! plus the [`Hotspot`]s layered over it: transparent shapes that carry the
//! hover tooltip and, on the trend chart, the year click binding. Renderers
//! clear the surface before drawing, so redrawing the same aggregate always
//! yields the same document.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Outer margins around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Margins {
    /// Space above the plot (title row).
    pub top: u32,
    /// Space right of the plot.
    pub right: u32,
    /// Space below the plot (x axis and label).
    pub bottom: u32,
    /// Space left of the plot (y axis and label).
    pub left: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 40,
            right: 30,
            bottom: 60,
            left: 70,
        }
    }
}

/// Outer size of a surface and its margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Layout {
    /// Outer width in pixels.
    pub width: u32,
    /// Outer height in pixels.
    pub height: u32,
    /// Margins around the plot area.
    pub margins: Margins,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            margins: Margins::default(),
        }
    }
}

impl Layout {
    /// Width of the plot area inside the margins.
    #[must_use]
    pub const fn inner_width(&self) -> u32 {
        self.width
            .saturating_sub(self.margins.left)
            .saturating_sub(self.margins.right)
    }

    /// Height of the plot area inside the margins.
    #[must_use]
    pub const fn inner_height(&self) -> u32 {
        self.height
            .saturating_sub(self.margins.top)
            .saturating_sub(self.margins.bottom)
    }

    /// Outer size as a `plotters` backend size.
    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Geometry of a hotspot in backend pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle {
        center: (i32, i32),
        radius: u32,
    },
    Rect {
        upper_left: (i32, i32),
        bottom_right: (i32, i32),
    },
}

/// An invisible interactive shape laid over one drawn data item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotspot {
    pub(crate) shape: Shape,
    classes: Vec<&'static str>,
    data: Vec<(&'static str, String)>,
    pub(crate) tooltip: String,
}

impl Hotspot {
    /// Circular hotspot centered on a drawn point.
    #[must_use]
    pub fn circle(center: (i32, i32), radius: u32, tooltip: impl Into<String>) -> Self {
        Self::new(Shape::Circle { center, radius }, tooltip)
    }

    /// Rectangular hotspot covering a drawn bar.
    #[must_use]
    pub fn rect(
        upper_left: (i32, i32),
        bottom_right: (i32, i32),
        tooltip: impl Into<String>,
    ) -> Self {
        Self::new(
            Shape::Rect {
                upper_left,
                bottom_right,
            },
            tooltip,
        )
    }

    fn new(shape: Shape, tooltip: impl Into<String>) -> Self {
        Self {
            shape,
            classes: Vec::new(),
            data: Vec::new(),
            tooltip: tooltip.into(),
        }
    }

    /// Adds a CSS class.
    #[must_use]
    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    /// Adds a `data-<name>` attribute.
    #[must_use]
    pub fn data(mut self, name: &'static str, value: impl ToString) -> Self {
        self.data.push((name, value.to_string()));
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(&class)
    }

    /// Value of the `data-<name>` attribute.
    #[must_use]
    pub fn data_value(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    fn write_svg(&self, out: &mut String) {
        let classes = self.classes.join(" ");
        match self.shape {
            Shape::Circle {
                center: (cx, cy),
                radius,
            } => {
                let _ = write!(out, "<circle class=\"{classes}\" cx=\"{cx}\" cy=\"{cy}\" r=\"{radius}\"");
            }
            Shape::Rect {
                upper_left: (x0, y0),
                bottom_right: (x1, y1),
            } => {
                let _ = write!(
                    out,
                    "<rect class=\"{classes}\" x=\"{x0}\" y=\"{y0}\" width=\"{}\" height=\"{}\"",
                    (x1 - x0).max(0),
                    (y1 - y0).max(0)
                );
            }
        }
        for (name, value) in &self.data {
            let _ = write!(out, " data-{name}=\"{}\"", escape(value));
        }
        let tag = match self.shape {
            Shape::Circle { .. } => "circle",
            Shape::Rect { .. } => "rect",
        };
        let _ = write!(
            out,
            " fill=\"transparent\" pointer-events=\"all\"><title>{}</title></{tag}>",
            escape(&self.tooltip)
        );
    }
}

/// Escapes text for use in XML content and attribute values.
#[must_use]
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// A named, fixed-size chart surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    id: String,
    layout: Layout,
    svg: String,
    hotspots: Vec<Hotspot>,
    placeholder: Option<String>,
}

impl Surface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new(id: impl Into<String>, layout: Layout) -> Self {
        Self {
            id: id.into(),
            layout,
            svg: String::new(),
            hotspots: Vec::new(),
            placeholder: None,
        }
    }

    /// Container id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Layout the surface was created with.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Removes all previously drawn content.
    pub fn clear(&mut self) {
        self.svg.clear();
        self.hotspots.clear();
        self.placeholder = None;
    }

    /// Stores a chart drawing and its hotspots.
    pub(crate) fn set_chart(&mut self, svg: String, hotspots: Vec<Hotspot>) {
        self.svg = svg;
        self.hotspots = hotspots;
        self.placeholder = None;
    }

    /// Stores a "no data" drawing.
    pub(crate) fn set_placeholder(&mut self, svg: String, message: String) {
        self.svg = svg;
        self.hotspots.clear();
        self.placeholder = Some(message);
    }

    /// Returns `true` if nothing has been drawn since the last clear.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.svg.is_empty()
    }

    /// The "no data" message, if that is what was drawn.
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    #[must_use]
    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    /// Hotspots carrying `class`.
    pub fn hotspots_with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Hotspot> {
        self.hotspots.iter().filter(move |h| h.has_class(class))
    }

    /// Serializes the surface as an `<svg>` element tagged with the surface
    /// id, with the hotspot layer appended after the drawing.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let class = if self.placeholder.is_some() {
            "chart no-data"
        } else {
            "chart"
        };
        let open = format!("<svg id=\"{}\" class=\"{class}\" ", escape(&self.id));

        if self.svg.is_empty() {
            return format!(
                "{open}xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\"></svg>",
                self.layout.width, self.layout.height
            );
        }

        let mut out = self.svg.replacen("<svg ", &open, 1);
        if !self.hotspots.is_empty()
            && let Some(end) = out.rfind("</svg>")
        {
            let mut layer = String::from("<g class=\"hotspots\">");
            for hotspot in &self.hotspots {
                hotspot.write_svg(&mut layer);
            }
            layer.push_str("</g>\n");
            out.insert_str(end, &layer);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_inner_area() {
        let layout = Layout::default();
        assert_eq!(layout.inner_width(), 300);
        assert_eq!(layout.inner_height(), 300);
    }

    #[test]
    fn oversized_margins_leave_empty_area() {
        let layout = Layout {
            width: 50,
            ..Layout::default()
        };
        assert_eq!(layout.inner_width(), 0);
    }

    #[test]
    fn layout_deserializes_with_partial_margins() {
        let layout: Layout = toml::from_str("width = 600\n[margins]\nleft = 90\n").unwrap();
        assert_eq!(layout.width, 600);
        assert_eq!(layout.height, 400);
        assert_eq!(layout.margins.left, 90);
        assert_eq!(layout.margins.top, 40);
    }

    #[test]
    fn hotspot_layer_is_appended_inside_svg() {
        let mut surface = Surface::new("trend-chart", Layout::default());
        surface.set_chart(
            "<svg width=\"400\" height=\"400\">\n<rect/>\n</svg>\n".to_owned(),
            vec![
                Hotspot::circle((5, 6), 4, "A & B, 2015: 3 homicides")
                    .class("point")
                    .class("clickable")
                    .data("year", 2015),
            ],
        );

        assert_eq!(
            surface.to_svg(),
            "<svg id=\"trend-chart\" class=\"chart\" width=\"400\" height=\"400\">\n<rect/>\n\
             <g class=\"hotspots\"><circle class=\"point clickable\" cx=\"5\" cy=\"6\" r=\"4\" \
             data-year=\"2015\" fill=\"transparent\" pointer-events=\"all\">\
             <title>A &amp; B, 2015: 3 homicides</title></circle></g>\n</svg>\n"
        );
    }

    #[test]
    fn clear_removes_content() {
        let mut surface = Surface::new("geo-chart", Layout::default());
        surface.set_placeholder("<svg></svg>".to_owned(), "No data".to_owned());
        assert!(!surface.is_empty());
        assert!(surface.to_svg().contains("class=\"chart no-data\""));

        surface.clear();
        assert!(surface.is_empty());
        assert!(surface.placeholder().is_none());
        assert!(surface.hotspots().is_empty());
    }

    #[test]
    fn finds_hotspots_by_class() {
        let mut surface = Surface::new("trend-chart", Layout::default());
        surface.set_chart(
            "<svg></svg>".to_owned(),
            vec![
                Hotspot::circle((0, 0), 1, "a").class("point").class("clickable"),
                Hotspot::circle((0, 0), 1, "b").class("point"),
            ],
        );
        assert_eq!(surface.hotspots_with_class("point").count(), 2);
        assert_eq!(surface.hotspots_with_class("clickable").count(), 1);
    }
}
