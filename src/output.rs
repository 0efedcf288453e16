//! Output types for the Excalidraw document.
//!
//! Every element carries every field Excalidraw reads, filled at
//! construction time, so the serialized file loads in any viewer without
//! relying on its defaults.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ConvertError;

pub const DOCUMENT_TYPE: &str = "excalidraw";
pub const DOCUMENT_VERSION: u32 = 2;
pub const DOCUMENT_SOURCE: &str = "https://excalidraw.com";

/// Excalidraw's monospace font ("Cascadia").
pub const FONT_FAMILY_MONOSPACE: u8 = 3;
pub const LINE_HEIGHT: f64 = 1.25;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStyle {
    Solid,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeStyle {
    Solid,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrowhead {
    Arrow,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundKind {
    Text,
    Arrow,
}

/// Reference from a container to an element attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BoundKind,
}

/// Corner rounding. Type 3 is Excalidraw's adaptive radius.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Roundness {
    #[serde(rename = "type")]
    pub kind: u8,
}

/// Fields shared by every element kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementBase {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
    pub stroke_color: String,
    pub background_color: String,
    pub fill_style: FillStyle,
    pub stroke_width: u32,
    pub stroke_style: StrokeStyle,
    pub roughness: u8,
    pub opacity: u8,
    pub group_ids: Vec<String>,
    pub frame_id: Option<String>,
    pub roundness: Option<Roundness>,
    pub seed: u64,
    pub version: u32,
    pub version_nonce: u64,
    pub is_deleted: bool,
    pub bound_elements: Vec<BoundElement>,
    pub updated: u64,
    pub link: Option<String>,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectangleElement {
    #[serde(flatten)]
    pub base: ElementBase,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    #[serde(flatten)]
    pub base: ElementBase,
    pub text: String,
    pub font_size: u32,
    pub font_family: u8,
    pub text_align: TextAlign,
    pub vertical_align: VerticalAlign,
    /// Owning rectangle; `None` for the title and column labels.
    pub container_id: Option<String>,
    pub original_text: String,
    pub line_height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub element_id: String,
    pub focus: f64,
    pub gap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowElement {
    #[serde(flatten)]
    pub base: ElementBase,
    /// Local to (x, y): always `[[0, 0], [dx, dy]]`.
    pub points: Vec<[f64; 2]>,
    pub last_committed_point: Option<[f64; 2]>,
    pub start_binding: Binding,
    pub end_binding: Binding,
    pub start_arrowhead: Option<Arrowhead>,
    pub end_arrowhead: Option<Arrowhead>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Rectangle(RectangleElement),
    Text(TextElement),
    Arrow(ArrowElement),
}

impl Element {
    pub fn base(&self) -> &ElementBase {
        match self {
            Element::Rectangle(r) => &r.base,
            Element::Text(t) => &t.base,
            Element::Arrow(a) => &a.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut ElementBase {
        match self {
            Element::Rectangle(r) => &mut r.base,
            Element::Text(t) => &mut t.base,
            Element::Arrow(a) => &mut a.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn as_text(&self) -> Option<&TextElement> {
        match self {
            Element::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_arrow(&self) -> Option<&ArrowElement> {
        match self {
            Element::Arrow(a) => Some(a),
            _ => None,
        }
    }

    pub fn is_rectangle(&self) -> bool {
        matches!(self, Element::Rectangle(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub grid_size: Option<u32>,
    pub view_background_color: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            grid_size: None,
            view_background_color: "#ffffff".to_string(),
        }
    }
}

/// The top-level `.excalidraw` file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "type")]
    pub kind: String,
    pub version: u32,
    pub source: String,
    pub elements: Vec<Element>,
    pub app_state: AppState,
    pub files: BTreeMap<String, serde_json::Value>,
}

impl Document {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            kind: DOCUMENT_TYPE.to_string(),
            version: DOCUMENT_VERSION,
            source: DOCUMENT_SOURCE.to_string(),
            elements,
            app_state: AppState::default(),
            files: BTreeMap::new(),
        }
    }

    /// Pretty JSON, two-space indent, non-ASCII written as-is.
    pub fn to_json_pretty(&self) -> Result<String, ConvertError> {
        serde_json::to_string_pretty(self).map_err(ConvertError::Serialize)
    }

    pub fn arrows(&self) -> impl Iterator<Item = &ArrowElement> {
        self.elements.iter().filter_map(Element::as_arrow)
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextElement> {
        self.elements.iter().filter_map(Element::as_text)
    }

    pub fn rectangles(&self) -> impl Iterator<Item = &ElementBase> {
        self.elements.iter().filter(|e| e.is_rectangle()).map(Element::base)
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }
}
