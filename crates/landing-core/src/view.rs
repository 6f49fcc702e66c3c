//! Declarative view tree
//!
//! Components render into [`Node`]s. Motion declarations are kept next to the
//! sampled visual values so a frontend can draw the current frame and tests
//! can inspect what was declared.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::motion::Motion;

/// Identifies a `Reveal` instance inside a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RevealId(pub usize);

/// Identifies a pointer-reactive `SignatureInteraction` inside a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct InteractionId(pub usize);

/// Semantic colour role of a piece of text or a background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Main,
    Muted,
    Accent,
    Warm,
    /// Dark text on a light block (buttons)
    Inverse,
    /// Raised panel background
    Panel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextNode {
    pub text: String,
    pub tone: Tone,
    pub bold: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    /// Children stacked top to bottom
    Column,
    /// Children side by side, never wrapped
    Row,
    /// Equal-width columns, wrapping into rows
    Grid(u16),
}

/// Main-axis distribution of row children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    #[default]
    Start,
    /// First child at the start, last at the end, the rest spaced evenly
    Between,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum WidthMode {
    /// Sized to the content
    #[default]
    #[serde(rename = "fit-content")]
    FitContent,
    /// Takes the full width of the parent
    #[serde(rename = "100%")]
    Full,
}

/// Sampled presentation values of an element, relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Visual {
    pub opacity: f64,
    /// Vertical offset in px
    pub translate_y: f64,
    /// Horizontal offset as a percentage of the element's own width
    pub translate_x_pct: f64,
    pub scale: f64,
}

impl Visual {
    pub const IDENTITY: Visual = Visual {
        opacity: 1.0,
        translate_y: 0.0,
        translate_x_pct: 0.0,
        scale: 1.0,
    };
}

impl Default for Visual {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    pub class: String,
    pub flow: Flow,
    /// Cells between children (columns in a row, rows in a column)
    pub gap: u16,
    pub justify: Justify,
    pub pad_x: u16,
    pub pad_y: u16,
    /// Fixed height in rows
    pub height: Option<u16>,
    pub width: WidthMode,
    /// Clip children to the element's box
    pub clip: bool,
    /// Draw a hairline below the element
    pub divider: bool,
    pub background: Option<Tone>,
    pub data: BTreeMap<String, String>,
    pub motion: Option<Motion>,
    pub visual: Visual,
    pub reveal: Option<RevealId>,
    pub interaction: Option<InteractionId>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: String::new(),
            flow: Flow::Column,
            gap: 0,
            justify: Justify::Start,
            pad_x: 0,
            pad_y: 0,
            height: None,
            width: WidthMode::Full,
            clip: false,
            divider: false,
            background: None,
            data: BTreeMap::new(),
            motion: None,
            visual: Visual::IDENTITY,
            reveal: None,
            interaction: None,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn flow(mut self, flow: Flow) -> Self {
        self.flow = flow;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn pad(mut self, pad_x: u16, pad_y: u16) -> Self {
        self.pad_x = pad_x;
        self.pad_y = pad_y;
        self
    }

    pub fn height(mut self, rows: u16) -> Self {
        self.height = Some(rows);
        self
    }

    pub fn width(mut self, width: WidthMode) -> Self {
        self.width = width;
        self
    }

    pub fn clip(mut self) -> Self {
        self.clip = true;
        self
    }

    pub fn divider(mut self) -> Self {
        self.divider = true;
        self
    }

    pub fn background(mut self, tone: Tone) -> Self {
        self.background = Some(tone);
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Text(TextNode),
    Element(Element),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<TextNode> for Node {
    fn from(text: TextNode) -> Self {
        Node::Text(text)
    }
}

impl Node {
    pub fn text(text: impl Into<String>, tone: Tone) -> Node {
        Node::Text(TextNode {
            text: text.into(),
            tone,
            bold: false,
        })
    }

    pub fn bold(text: impl Into<String>, tone: Tone) -> Node {
        Node::Text(TextNode {
            text: text.into(),
            tone,
            bold: true,
        })
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// All text in depth-first order
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::Text(text) => out.push(&text.text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_texts(out);
                }
            }
        }
    }

    /// Number of text nodes whose text equals `needle`
    pub fn count_text(&self, needle: &str) -> usize {
        self.texts().into_iter().filter(|t| *t == needle).count()
    }

    /// First element, depth-first, matching the predicate
    pub fn find<F>(&self, pred: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool + Copy,
    {
        match self {
            Node::Text(_) => None,
            Node::Element(element) => {
                if pred(element) {
                    return Some(element);
                }
                element.children.iter().find_map(|child| child.find(pred))
            }
        }
    }

    /// Every element, depth-first, matching the predicate
    pub fn find_all<F>(&self, pred: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool + Copy,
    {
        let mut out = Vec::new();
        self.collect_matching(pred, &mut out);
        out
    }

    fn collect_matching<'a, F>(&'a self, pred: F, out: &mut Vec<&'a Element>)
    where
        F: Fn(&Element) -> bool + Copy,
    {
        if let Node::Element(element) = self {
            if pred(element) {
                out.push(element);
            }
            for child in &element.children {
                child.collect_matching(pred, out);
            }
        }
    }
}
