//! Hypothesis map to Excalidraw conversion.
//!
//! Lays a hypothesis map out in four columns (goal, subjects, hypotheses,
//! tasks), connects the cards with arrows and produces an `.excalidraw`
//! document.

pub mod elements;
pub mod error;
pub mod ids;
pub mod layout;
pub mod model;
pub mod output;
pub mod text;
mod document;
mod wasm;

pub use error::{ConvertError, EntityKind};
pub use ids::IdGenerator;
pub use layout::{Labels, LayoutConfig};
pub use model::HypothesisMap;
pub use output::Document;

pub const DEFAULT_MAX_ENTITIES: usize = 10_000;

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Document title; `labels.title` when `None`.
    pub title: Option<String>,
    pub layout: LayoutConfig,
    pub labels: Labels,
    /// Upper bound on goals + subjects + hypotheses + tasks.
    pub max_entities: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            title: None,
            layout: LayoutConfig::default(),
            labels: Labels::default(),
            max_entities: DEFAULT_MAX_ENTITIES,
        }
    }
}

impl ConvertOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Lay out `map` and build the document.
///
/// Each call owns its registry, element list and arrow counter; only `ids`
/// is supplied by the caller.
pub fn convert(
    map: &HypothesisMap,
    options: &ConvertOptions,
    ids: &mut IdGenerator,
) -> Result<Document, ConvertError> {
    map.validate(options.max_entities)?;

    let layout = layout::layout_map(map, &options.layout, &options.labels, ids);
    let title = options.title.as_deref().unwrap_or(&options.labels.title);
    let doc = document::assemble(layout, title, &options.layout, &options.labels, ids);

    tracing::debug!(elements = doc.elements.len(), "assembled document");
    Ok(doc)
}

/// Convert with fresh random ids and return the pretty-printed file.
pub fn convert_to_json(map: &HypothesisMap, options: &ConvertOptions) -> Result<String, ConvertError> {
    let mut ids = IdGenerator::from_entropy();
    convert(map, options, &mut ids)?.to_json_pretty()
}
