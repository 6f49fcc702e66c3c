//! Lays a view tree out on a terminal cell grid
//!
//! Box geometry comes from a `taffy` tree built from the view: flows map to
//! flex and grid containers, text leaves are measured in display columns.
//! On top of taffy's boxes this module applies what a terminal needs:
//! visual offsets, horizontal clipping and inherited paint.
//!
//! Coordinates are page cells: column 0 is the left edge of the laid-out
//! width, row 0 is the top of the content before scrolling. The result is a
//! flat display list (fills, rules, text runs) plus the geometry the app needs
//! to feed back into the page: reveal anchors, hover hit regions and the hero
//! box.

use landing_core::geometry::Bounds;
use landing_core::motion::Transform;
use landing_core::page::{HERO_CLASS, MIN_VH_ATTR};
use landing_core::view::{Element, Flow, InteractionId, Justify, Node, RevealId, Tone, WidthMode};
use taffy::prelude::{fr, AvailableSpace, NodeId, Rect, Size};
use taffy::style::{
    AlignSelf, Dimension, Display, FlexDirection, FlexWrap, JustifyContent, JustifySelf,
    LengthPercentage, Overflow, Style,
};
use taffy::{Point, TaffyError, TaffyTree};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Narrowest grid cell before a grid drops a column
pub const GRID_MIN_CELL: u16 = 36;

/// Rectangle in page cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= self.x && col < self.right() && row >= self.y && row < self.bottom()
    }

    /// Bounds in page px; a column is half a row wide
    pub fn to_bounds(&self, px_per_row: f64) -> Bounds {
        let px_per_col = px_per_row / 2.0;
        Bounds::new(
            self.x as f64 * px_per_col,
            self.y as f64 * px_per_row,
            self.width as f64 * px_per_col,
            self.height as f64 * px_per_row,
        )
    }
}

/// Horizontal clip window, `left..right` in page columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clip {
    pub left: i32,
    pub right: i32,
}

impl Clip {
    pub fn allows(&self, col: i32) -> bool {
        col >= self.left && col < self.right
    }

    fn narrow(outer: Option<Clip>, inner: Clip) -> Clip {
        match outer {
            Some(outer) => Clip {
                left: outer.left.max(inner.left),
                right: outer.right.min(inner.right),
            },
            None => inner,
        }
    }
}

/// Composed presentation inherited down the tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub opacity: f64,
    /// 1 when fully hovered, -1 when fully pressed, 0 at rest
    pub emphasis: f64,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            emphasis: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub tone: Tone,
    pub bold: bool,
    pub paint: Paint,
    pub clip: Option<Clip>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub region: Region,
    pub tone: Tone,
    pub paint: Paint,
    pub clip: Option<Clip>,
    /// Alt text when the fill stands in for an image
    pub image: Option<String>,
}

/// Horizontal hairline
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub paint: Paint,
    pub clip: Option<Clip>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub width: u16,
    /// Total content height in rows
    pub height: u16,
    pub fills: Vec<Fill>,
    pub rules: Vec<Rule>,
    pub runs: Vec<TextRun>,
    /// Untransformed box of every reveal container
    pub anchors: Vec<(RevealId, Region)>,
    /// Transformed box of every hover target
    pub hits: Vec<(InteractionId, Region)>,
    pub hero: Option<Region>,
}

impl Layout {
    /// Lay `node` out at `width` columns. `viewport_rows` resolves minimum
    /// heights given in percent of the viewport.
    pub fn compute(node: &Node, width: u16, viewport_rows: u16, px_per_row: f64) -> Layout {
        let px_per_row = if px_per_row > 0.0 { px_per_row } else { 16.0 };
        match Self::try_compute(node, width, viewport_rows, px_per_row) {
            Ok(layout) => layout,
            Err(err) => {
                tracing::warn!(error = %err, "layout failed, drawing nothing");
                Layout {
                    width,
                    ..Layout::default()
                }
            }
        }
    }

    fn try_compute(
        node: &Node,
        width: u16,
        viewport_rows: u16,
        px_per_row: f64,
    ) -> Result<Layout, TaffyError> {
        let mut tree = TreeBuilder {
            taffy: TaffyTree::new(),
            texts: Vec::new(),
            viewport_rows,
        };
        let content = tree.build(node, Flow::Column, width)?;

        // Fixed-width column holding the content
        let root = tree.taffy.new_with_children(
            Style {
                flex_direction: FlexDirection::Column,
                size: Size {
                    width: Dimension::length(width as f32),
                    height: Dimension::auto(),
                },
                ..Default::default()
            },
            &[content.id],
        )?;

        let texts = tree.texts;
        let mut taffy = tree.taffy;
        taffy.compute_layout_with_measure(
            root,
            Size {
                width: AvailableSpace::Definite(width as f32),
                height: AvailableSpace::MaxContent,
            },
            |known_dimensions, available_space, _node_id, node_context, _style| {
                match node_context.and_then(|index| texts.get(*index)) {
                    Some(text) => measure_text(text, known_dimensions, available_space),
                    None => known_dimensions.unwrap_or(Size::ZERO),
                }
            },
        )?;

        let mut placer = Placer {
            taffy: &taffy,
            out: Layout {
                width,
                height: cells(taffy.layout(root)?.size.height),
                ..Layout::default()
            },
            px_per_row,
        };
        placer.place(node, &content, 0, 0, Ctx::default())?;
        Ok(placer.out)
    }

    /// Largest scroll offset for a viewport of `rows`
    pub fn max_scroll(&self, rows: u16) -> u16 {
        self.height.saturating_sub(rows)
    }

    /// Hover target under a page cell
    pub fn hit_test(&self, col: i32, row: i32) -> Option<InteractionId> {
        self.hits
            .iter()
            .rev()
            .find(|(_, region)| region.contains(col, row))
            .map(|(id, _)| *id)
    }

    pub fn in_hero(&self, col: i32, row: i32) -> bool {
        self.hero.map(|hero| hero.contains(col, row)).unwrap_or(false)
    }

    /// Reveal anchors converted to page px
    pub fn anchor_bounds(&self, px_per_row: f64) -> Vec<(RevealId, Bounds)> {
        self.anchors
            .iter()
            .map(|(id, region)| (*id, region.to_bounds(px_per_row)))
            .collect()
    }

    /// Every text run on `row`, left to right, as one string (tests, snapshots)
    pub fn row_text(&self, row: i32) -> String {
        let mut runs: Vec<&TextRun> = self.runs.iter().filter(|r| r.y == row).collect();
        runs.sort_by_key(|r| r.x);
        let mut line = String::new();
        let mut col = 0i32;
        for run in runs {
            if run.x > col {
                line.push_str(&" ".repeat((run.x - col) as usize));
                col = run.x;
            }
            line.push_str(&run.text);
            col += run.text.width() as i32;
        }
        line
    }
}

/// Visible page window in px for a scroll offset
pub fn viewport_bounds(scroll: u16, width: u16, rows: u16, px_per_row: f64) -> Bounds {
    Region::new(0, scroll as i32, width, rows).to_bounds(px_per_row)
}

/// Columns a grid actually uses at `width`
pub fn grid_columns(requested: u16, width: u16, gap: u16) -> u16 {
    let mut cols = requested.max(1);
    while cols > 1 && width.saturating_sub(gap * (cols - 1)) / cols < GRID_MIN_CELL {
        cols -= 1;
    }
    cols
}

/// Size of a text leaf: wrapped at the width taffy offers
fn measure_text(
    text: &str,
    known: Size<Option<f32>>,
    available: Size<AvailableSpace>,
) -> Size<f32> {
    let limit = match (known.width, available.width) {
        (Some(width), _) | (None, AvailableSpace::Definite(width)) => {
            width.floor().clamp(1.0, u16::MAX as f32) as u16
        }
        (None, AvailableSpace::MinContent) => {
            text.split_whitespace().map(|word| word.width()).max().unwrap_or(0) as u16
        }
        (None, AvailableSpace::MaxContent) => u16::MAX,
    };
    let lines = wrap(text, limit);
    let widest = lines.iter().map(|line| line.width()).max().unwrap_or(0);
    Size {
        width: known.width.unwrap_or(widest as f32),
        height: known.height.unwrap_or(lines.len() as f32),
    }
}

fn cells(value: f32) -> u16 {
    value.round().clamp(0.0, u16::MAX as f32) as u16
}

/// Taffy node for a view node, mirroring its children
struct Built {
    id: NodeId,
    children: Vec<Built>,
}

/// Builds the taffy tree. Text leaves carry an index into `texts`.
struct TreeBuilder<'a> {
    taffy: TaffyTree<usize>,
    texts: Vec<&'a str>,
    viewport_rows: u16,
}

impl<'a> TreeBuilder<'a> {
    /// Rows requested through the min-vh attribute
    fn min_rows(&self, el: &Element) -> u16 {
        el.data
            .get(MIN_VH_ATTR)
            .and_then(|pct| pct.parse::<u32>().ok())
            .map(|pct| (self.viewport_rows as u32 * pct / 100) as u16)
            .unwrap_or(0)
    }

    /// `avail` is the width the parent offers; it only decides grid columns
    fn build(&mut self, node: &'a Node, parent: Flow, avail: u16) -> Result<Built, TaffyError> {
        match node {
            Node::Text(text) => {
                let mut style = Style::default();
                item_style(&mut style, parent, WidthMode::Full);
                self.texts.push(&text.text);
                let id = self.taffy.new_leaf_with_context(style, self.texts.len() - 1)?;
                Ok(Built {
                    id,
                    children: Vec::new(),
                })
            }
            Node::Element(el) => {
                let inner = avail.saturating_sub(el.pad_x * 2);
                let (style, child_avail) = self.element_style(el, parent, inner);
                let children = el
                    .children
                    .iter()
                    .map(|child| self.build(child, el.flow, child_avail))
                    .collect::<Result<Vec<_>, _>>()?;
                let ids: Vec<NodeId> = children.iter().map(|child| child.id).collect();
                let id = self.taffy.new_with_children(style, &ids)?;
                Ok(Built { id, children })
            }
        }
    }

    fn element_style(&self, el: &Element, parent: Flow, inner: u16) -> (Style, u16) {
        let min_rows = self.min_rows(el);
        let zero = LengthPercentage::length(0.0);

        let mut style = Style {
            display: Display::Flex,
            flex_direction: match el.flow {
                Flow::Row => FlexDirection::Row,
                Flow::Column | Flow::Grid(_) => FlexDirection::Column,
            },
            flex_wrap: FlexWrap::NoWrap,
            padding: Rect {
                left: LengthPercentage::length(el.pad_x as f32),
                right: LengthPercentage::length(el.pad_x as f32),
                top: LengthPercentage::length(el.pad_y as f32),
                bottom: LengthPercentage::length(el.pad_y as f32),
            },
            // The divider takes the bottom row of the box
            border: Rect {
                left: zero,
                right: zero,
                top: zero,
                bottom: LengthPercentage::length(if el.divider { 1.0 } else { 0.0 }),
            },
            size: Size {
                width: Dimension::auto(),
                height: el
                    .height
                    .map(|rows| Dimension::length(rows as f32))
                    .unwrap_or(Dimension::auto()),
            },
            min_size: Size {
                width: Dimension::auto(),
                height: if min_rows > 0 {
                    Dimension::length(min_rows as f32)
                } else {
                    Dimension::auto()
                },
            },
            overflow: Point {
                x: if el.clip { Overflow::Clip } else { Overflow::Visible },
                y: Overflow::Visible,
            },
            ..Default::default()
        };
        item_style(&mut style, parent, el.width);

        let mut child_avail = inner;
        match el.flow {
            Flow::Column => {
                style.gap = Size {
                    width: zero,
                    height: LengthPercentage::length(el.gap as f32),
                };
                style.justify_content = match el.justify {
                    Justify::Between => Some(JustifyContent::SpaceBetween),
                    // Content sits in the middle of a box stretched to min-vh
                    Justify::Start if min_rows > 0 => Some(JustifyContent::Center),
                    Justify::Start => None,
                };
            }
            Flow::Row => {
                style.gap = Size {
                    width: LengthPercentage::length(el.gap as f32),
                    height: zero,
                };
                if el.justify == Justify::Between {
                    style.justify_content = Some(JustifyContent::SpaceBetween);
                }
            }
            Flow::Grid(requested) => {
                let cols = grid_columns(requested, inner, el.gap);
                style.display = Display::Grid;
                style.grid_template_columns = vec![fr(1.0_f32); cols as usize];
                // Wrapped rows sit at most one line apart
                style.gap = Size {
                    width: LengthPercentage::length(el.gap as f32),
                    height: LengthPercentage::length(el.gap.min(1) as f32),
                };
                child_avail = inner.saturating_sub(el.gap * (cols - 1)) / cols;
            }
        }
        (style, child_avail)
    }
}

/// How a node sits inside a parent of the given flow
fn item_style(style: &mut Style, parent: Flow, width: WidthMode) {
    match parent {
        // Row children keep their natural width and never wrap
        Flow::Row => style.flex_shrink = 0.0,
        Flow::Column if width == WidthMode::FitContent => style.align_self = Some(AlignSelf::Start),
        Flow::Grid(_) if width == WidthMode::FitContent => {
            style.justify_self = Some(JustifySelf::Start)
        }
        Flow::Column | Flow::Grid(_) => {}
    }
}

#[derive(Debug, Clone, Copy)]
struct Ctx {
    paint: Paint,
    scale: f64,
    clip: Option<Clip>,
}

impl Default for Ctx {
    fn default() -> Self {
        Self {
            paint: Paint::default(),
            scale: 1.0,
            clip: None,
        }
    }
}

impl Ctx {
    fn descend(&self, element: &Element) -> Ctx {
        let scale = self.scale * element.visual.scale;
        let hover_span = Transform::HOVER.scale - 1.0;
        let emphasis = if hover_span > 0.0 {
            ((scale - 1.0) / hover_span).clamp(-1.0, 1.0)
        } else {
            0.0
        };
        Ctx {
            paint: Paint {
                opacity: self.paint.opacity * element.visual.opacity,
                emphasis,
            },
            scale,
            clip: self.clip,
        }
    }
}

/// Walks the view alongside its computed taffy boxes and emits the display
/// list in page coordinates
struct Placer<'t> {
    taffy: &'t TaffyTree<usize>,
    out: Layout,
    px_per_row: f64,
}

impl Placer<'_> {
    /// `ox`/`oy` is the parent's content origin, visual offsets included
    fn place(
        &mut self,
        node: &Node,
        built: &Built,
        ox: i32,
        oy: i32,
        ctx: Ctx,
    ) -> Result<(), TaffyError> {
        let boxed = self.taffy.layout(built.id)?;
        let x = ox + boxed.location.x.round() as i32;
        let y = oy + boxed.location.y.round() as i32;
        let width = cells(boxed.size.width);
        let height = cells(boxed.size.height);

        match node {
            Node::Text(text) => {
                for (i, line) in wrap(&text.text, width).into_iter().enumerate() {
                    self.out.runs.push(TextRun {
                        x,
                        y: y + i as i32,
                        text: line,
                        tone: text.tone,
                        bold: text.bold,
                        paint: ctx.paint,
                        clip: ctx.clip,
                    });
                }
                Ok(())
            }
            Node::Element(el) => {
                self.place_element(el, built, Region::new(x, y, width, height), ctx)
            }
        }
    }

    fn place_element(
        &mut self,
        el: &Element,
        built: &Built,
        area: Region,
        parent: Ctx,
    ) -> Result<(), TaffyError> {
        let ctx = parent.descend(el);
        let dx = (area.width as f64 * el.visual.translate_x_pct / 100.0).round() as i32;
        let dy = (el.visual.translate_y / self.px_per_row).round() as i32;
        let shifted = Region::new(area.x + dx, area.y + dy, area.width, area.height);

        let mut child_ctx = ctx;
        if el.clip {
            child_ctx.clip = Some(Clip::narrow(
                parent.clip,
                Clip {
                    left: area.x,
                    right: area.right(),
                },
            ));
        }

        // Background first so it paints beneath the children
        if el.background.is_some() || el.tag == "img" {
            self.out.fills.push(Fill {
                region: shifted,
                tone: el.background.unwrap_or(Tone::Panel),
                paint: ctx.paint,
                clip: parent.clip,
                image: (el.tag == "img").then(|| el.data.get("alt").cloned().unwrap_or_default()),
            });
        }

        for (child, built) in el.children.iter().zip(&built.children) {
            self.place(child, built, shifted.x, shifted.y, child_ctx)?;
        }

        if el.divider {
            self.out.rules.push(Rule {
                x: shifted.x,
                y: shifted.bottom() - 1,
                width: area.width,
                paint: ctx.paint,
                clip: parent.clip,
            });
        }
        if let Some(id) = el.reveal {
            self.out.anchors.push((id, area));
        }
        if let Some(id) = el.interaction {
            self.out.hits.push((id, shifted));
        }
        if el.class == HERO_CLASS {
            self.out.hero = Some(area);
        }
        Ok(())
    }
}

/// Word-wrap `text` to `width` display columns. Words longer than a line are
/// broken by character.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_w = 0usize;

    for word in text.split_whitespace() {
        let word_w = word.width();
        if line_w > 0 && line_w + 1 + word_w <= width {
            line.push(' ');
            line.push_str(word);
            line_w += 1 + word_w;
            continue;
        }
        if line_w > 0 {
            lines.push(std::mem::take(&mut line));
            line_w = 0;
        }
        if word_w <= width {
            line.push_str(word);
            line_w = word_w;
            continue;
        }
        for ch in word.chars() {
            let ch_w = ch.width().unwrap_or(0);
            if line_w + ch_w > width && line_w > 0 {
                lines.push(std::mem::take(&mut line));
                line_w = 0;
            }
            line.push(ch);
            line_w += ch_w;
        }
    }
    if line_w > 0 || lines.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_core::view::Visual;

    fn text(s: &str) -> Node {
        Node::text(s, Tone::Main)
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(wrap("alpha beta gamma", 10), vec!["alpha beta", "gamma"]);
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("", 5), vec![""]);
    }

    #[test]
    fn test_wrap_counts_wide_chars() {
        assert_eq!(wrap("日本 ab", 3), vec!["日", "本", "ab"]);
    }

    #[test]
    fn test_column_stacks_with_gap() {
        let node: Node = Element::new("div").gap(1).child(text("a")).child(text("b")).into();
        let layout = Layout::compute(&node, 20, 10, 16.0);
        assert_eq!(layout.height, 3);
        assert_eq!(layout.row_text(0), "a");
        assert_eq!(layout.row_text(2), "b");
    }

    #[test]
    fn test_row_justify_between() {
        let node: Node = Element::new("div")
            .flow(Flow::Row)
            .justify(Justify::Between)
            .child(text("left"))
            .child(text("right"))
            .into();
        let layout = Layout::compute(&node, 20, 10, 16.0);
        assert_eq!(layout.row_text(0), format!("left{}right", " ".repeat(11)));
    }

    #[test]
    fn test_grid_collapses_when_narrow() {
        assert_eq!(grid_columns(2, 100, 0), 2);
        assert_eq!(grid_columns(2, 60, 0), 1);
        let node: Node = Element::new("div")
            .flow(Flow::Grid(2))
            .child(text("one"))
            .child(text("two"))
            .into();
        assert_eq!(Layout::compute(&node, 100, 10, 16.0).height, 1);
        assert_eq!(Layout::compute(&node, 40, 10, 16.0).height, 2);
    }

    #[test]
    fn test_opacity_and_offset_compose() {
        let mut inner = Element::new("div").child(text("x"));
        inner.visual = Visual {
            opacity: 0.5,
            translate_y: 32.0,
            ..Visual::IDENTITY
        };
        let mut outer = Element::new("div").child(inner);
        outer.visual.opacity = 0.5;
        let node: Node = outer.into();
        let layout = Layout::compute(&node, 10, 10, 16.0);
        let run = &layout.runs[0];
        assert_eq!(run.paint.opacity, 0.25);
        assert_eq!(run.y, 2);
    }

    #[test]
    fn test_marquee_track_shifts_and_clips() {
        let mut track = Element::new("div")
            .flow(Flow::Row)
            .child(text("abcd"))
            .child(text("abcd"));
        track.visual.translate_x_pct = -50.0;
        let container: Node = Element::new("div").flow(Flow::Row).clip().child(track).into();
        let layout = Layout::compute(&container, 6, 10, 16.0);
        assert_eq!(layout.runs[0].x, -4);
        assert_eq!(layout.runs[1].x, 0);
        assert_eq!(layout.runs[0].clip, Some(Clip { left: 0, right: 6 }));
    }

    #[test]
    fn test_anchor_bounds_in_px() {
        let mut reveal = Element::new("div").child(text("x"));
        reveal.reveal = Some(RevealId(3));
        let node: Node = Element::new("div").pad(0, 2).child(reveal).into();
        let layout = Layout::compute(&node, 10, 10, 16.0);
        let (id, bounds) = layout.anchor_bounds(16.0)[0];
        assert_eq!(id, RevealId(3));
        assert_eq!(bounds, Bounds::new(0.0, 32.0, 80.0, 16.0));
    }

    #[test]
    fn test_min_vh_centres_content() {
        let node: Node = Element::new("header")
            .class(HERO_CLASS)
            .data(MIN_VH_ATTR, "50")
            .child(text("x"))
            .into();
        let layout = Layout::compute(&node, 10, 22, 16.0);
        assert_eq!(layout.height, 11);
        assert_eq!(layout.runs[0].y, 5);
        assert_eq!(layout.hero, Some(Region::new(0, 0, 10, 11)));
    }

    #[test]
    fn test_min_vh_spreads_between() {
        let node: Node = Element::new("aside")
            .justify(Justify::Between)
            .data(MIN_VH_ATTR, "100")
            .child(text("top"))
            .child(text("bottom"))
            .into();
        let layout = Layout::compute(&node, 10, 12, 16.0);
        assert_eq!(layout.height, 12);
        assert_eq!(layout.row_text(0), "top");
        assert_eq!(layout.row_text(11), "bottom");
    }

    #[test]
    fn test_text_wraps_inside_padding() {
        let node: Node = Element::new("div")
            .pad(2, 1)
            .background(Tone::Panel)
            .divider()
            .child(text("alpha beta gamma"))
            .into();
        let layout = Layout::compute(&node, 14, 10, 16.0);
        assert_eq!(layout.row_text(1), "  alpha beta");
        assert_eq!(layout.row_text(2), "  gamma");
        // Two text rows, two padding rows and the divider
        assert_eq!(layout.height, 5);
        assert_eq!(layout.fills[0].region, Region::new(0, 0, 14, 5));
        assert_eq!(layout.rules[0].y, 4);
    }

    #[test]
    fn test_grid_rows_stay_one_line_apart() {
        let node: Node = Element::new("div")
            .flow(Flow::Grid(3))
            .gap(4)
            .child(text("one"))
            .child(text("two"))
            .child(text("three"))
            .into();
        // Too narrow for three cells of 36: two columns, the third item wraps
        let layout = Layout::compute(&node, 80, 10, 16.0);
        assert_eq!(layout.height, 3);
        assert_eq!(layout.runs[1].x, 42);
        assert_eq!(layout.runs[2].y, 2);
    }

    #[test]
    fn test_marquee_loop_is_seamless() {
        use landing_core::components::{InteractionKind, SignatureInteraction};
        use std::time::{Duration, Instant};

        let t0 = Instant::now();
        let marquee = SignatureInteraction::mount(
            InteractionId(0),
            InteractionKind::Marquee,
            10.0,
            Duration::from_millis(200),
            t0,
        );
        let frame = |at: Instant| {
            let node = marquee.render(vec![text("ABCDEFGHIJ")], at);
            Layout::compute(&node, 200, 10, 16.0)
        };

        let start = frame(t0);
        let end = frame(t0 + Duration::from_millis(9_999));
        // The second copy ends the cycle where the first one began
        assert_eq!(end.runs[1].x, start.runs[0].x);
        // The gap between copies is the full spacing on both sides of the wrap
        assert_eq!(start.runs[1].x - start.runs[0].x, 16);
    }

    #[test]
    fn test_hit_regions_follow_hover_target() {
        let mut cta = Element::new("div")
            .width(WidthMode::FitContent)
            .child(text("GO"));
        cta.interaction = Some(InteractionId(1));
        let node: Node = Element::new("div").child(text("title")).child(cta).into();
        let layout = Layout::compute(&node, 20, 10, 16.0);
        assert_eq!(layout.hit_test(1, 1), Some(InteractionId(1)));
        assert_eq!(layout.hit_test(5, 1), None);
        assert_eq!(layout.hit_test(1, 0), None);
    }
}
