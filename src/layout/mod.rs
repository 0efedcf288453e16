// Column layout for hypothesis maps.
//
// Goals:
// - Deterministic: positions depend only on the map and the config
// - Fixed columns, left to right: goal, subject, hypothesis, task
// - Each column stacks its cards top to bottom in input order
// - Tasks are centered as a block against their hypothesis
//
// Submodules:
// - labels: localized strings used in card text and headings
// - compose: per-entity card text
// - planner: card placement and the position registry
// - binder: relationship arrows between placed cards
//
// Output:
// - Layout with card elements (in category order) and connectors. The
//   registry only lives for the duration of `layout_map`.

use std::collections::HashMap;

use crate::ids::IdGenerator;
use crate::model::HypothesisMap;
use crate::output::{BoundElement, BoundKind, Element};

mod binder;
mod compose;
mod labels;
mod planner;

pub use compose::{goal_text, hypothesis_text, subject_text, task_text};
pub use labels::Labels;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SizeF {
    pub w: f64,
    pub h: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectF {
    pub fn right(&self) -> f64 { self.x + self.w }
    pub fn bottom(&self) -> f64 { self.y + self.h }
    pub fn center_y(&self) -> f64 { self.y + self.h / 2.0 }

    pub fn left_mid(&self) -> PointF {
        PointF { x: self.x, y: self.center_y() }
    }

    pub fn right_mid(&self) -> PointF {
        PointF { x: self.right(), y: self.center_y() }
    }
}

/// Fill colors per category and arrow styling.
#[derive(Debug, Clone)]
pub struct Palette {
    pub goal: String,
    pub subject: String,
    pub hypothesis: String,
    pub task: String,
    /// Task -> hypothesis arrows.
    pub neutral: String,
    /// Hypothesis -> subject arrows, indexed by priority.
    pub priority_high: String,
    pub priority_medium: String,
    pub priority_low: String,
    pub priority_none: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            goal: "#cadf58".to_string(),
            subject: "#ffc831".to_string(),
            hypothesis: "#ffef73".to_string(),
            task: "#a6cdff".to_string(),
            neutral: "#70736d".to_string(),
            priority_high: "#FF7373".to_string(),
            priority_medium: "#FFC831".to_string(),
            priority_low: "#8FD14F".to_string(),
            priority_none: "#70736d".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Left edge of each column.
    pub goal_x: f64,
    pub subject_x: f64,
    pub hypothesis_x: f64,
    pub task_x: f64,
    pub title_y: f64,
    /// Column headings row.
    pub header_y: f64,
    /// Top of the first card in every column.
    pub row_start_y: f64,
    /// Vertical gap between consecutive cards in a column.
    pub row_gap: f64,
    /// Vertical gap between tasks of the same hypothesis.
    pub task_gap: f64,
    pub goal_size: SizeF,
    pub subject_size: SizeF,
    pub hypothesis_size: SizeF,
    pub task_size: SizeF,
    pub goal_font_size: u32,
    pub subject_font_size: u32,
    pub hypothesis_font_size: u32,
    pub task_font_size: u32,
    /// Wrap widths, in characters.
    pub hypothesis_wrap: usize,
    pub task_wrap: usize,
    pub max_goal_metrics: usize,
    pub max_balancing_metrics: usize,
    pub max_pains: usize,
    pub max_desires: usize,
    /// Stroke width of subject -> goal arrows.
    pub subject_arrow_width: u32,
    pub task_arrow_width: u32,
    /// Hypothesis -> subject arrows, by priority.
    pub priority_high_width: u32,
    pub priority_medium_width: u32,
    pub priority_low_width: u32,
    pub priority_none_width: u32,
    pub palette: Palette,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            goal_x: 100.0,
            subject_x: 500.0,
            hypothesis_x: 950.0,
            task_x: 1400.0,
            title_y: 10.0,
            header_y: 60.0,
            row_start_y: 110.0,
            row_gap: 180.0,
            task_gap: 15.0,
            goal_size: SizeF { w: 320.0, h: 200.0 },
            subject_size: SizeF { w: 280.0, h: 200.0 },
            hypothesis_size: SizeF { w: 380.0, h: 350.0 },
            task_size: SizeF { w: 240.0, h: 100.0 },
            goal_font_size: 12,
            subject_font_size: 11,
            hypothesis_font_size: 11,
            task_font_size: 12,
            hypothesis_wrap: 40,
            task_wrap: 25,
            max_goal_metrics: 3,
            max_balancing_metrics: 2,
            max_pains: 3,
            max_desires: 3,
            subject_arrow_width: 3,
            task_arrow_width: 2,
            priority_high_width: 4,
            priority_medium_width: 3,
            priority_low_width: 2,
            priority_none_width: 2,
            palette: Palette::default(),
        }
    }
}

impl LayoutConfig {
    /// Width from the left of the goal column to the right of the task column.
    pub fn total_width(&self) -> f64 {
        self.task_x + self.task_size.w - self.goal_x
    }
}

/// Where an entity's card ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub rect: RectF,
    /// Id of the rectangle element.
    pub card_id: String,
    /// Index of the rectangle in `Layout::cards`.
    pub handle: usize,
}

/// Entity id -> card placement. Filled by the planner only.
pub type Registry = HashMap<String, Placement>;

#[derive(Debug, Clone)]
pub struct Layout {
    /// Cards and their bound text, goals first, then subjects, hypotheses,
    /// tasks.
    pub cards: Vec<Element>,
    /// Relationship arrows; already recorded in the cards' bound lists.
    pub connectors: Vec<Element>,
}

pub fn layout_map(
    map: &HypothesisMap,
    cfg: &LayoutConfig,
    labels: &Labels,
    ids: &mut IdGenerator,
) -> Layout {
    let mut cards: Vec<Element> = Vec::new();
    let mut registry: Registry = HashMap::new();

    // Every card must exist before any arrow is bound to it.
    planner::place_goals(map, cfg, labels, ids, &mut cards, &mut registry);
    planner::place_subjects(map, cfg, labels, ids, &mut cards, &mut registry);
    planner::place_hypotheses(map, cfg, labels, ids, &mut cards, &mut registry);
    planner::place_tasks(map, cfg, ids, &mut cards, &mut registry);
    tracing::debug!(cards = registry.len(), "placed cards");

    let connectors = binder::bind_relationships(map, cfg, ids, &registry, &mut cards);
    tracing::debug!(connectors = connectors.len(), "bound relationships");

    Layout { cards, connectors }
}

/// Record `arrow_id` on the rectangle at `handle`.
fn attach_arrow(cards: &mut [Element], handle: usize, arrow_id: &str) {
    if let Some(card) = cards.get_mut(handle) {
        card.base_mut().bound_elements.push(BoundElement {
            id: arrow_id.to_string(),
            kind: BoundKind::Arrow,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_anchors() {
        let r = RectF { x: 950.0, y: 110.0, w: 380.0, h: 350.0 };
        assert_eq!(r.left_mid(), PointF { x: 950.0, y: 285.0 });
        assert_eq!(r.right_mid(), PointF { x: 1330.0, y: 285.0 });
        assert_eq!(r.bottom(), 460.0);
    }

    #[test]
    fn test_columns_left_to_right() {
        let cfg = LayoutConfig::default();
        assert!(cfg.goal_x + cfg.goal_size.w < cfg.subject_x);
        assert!(cfg.subject_x + cfg.subject_size.w < cfg.hypothesis_x);
        assert!(cfg.hypothesis_x + cfg.hypothesis_size.w < cfg.task_x);
        assert_eq!(cfg.total_width(), 1540.0);
    }

    #[test]
    fn test_layout_map_binds_after_placing() {
        use crate::model::{Goal, Priority, Subject};

        let map = HypothesisMap {
            goals: vec![Goal {
                id: "g1".to_string(),
                description: "Grow".to_string(),
                metrics: vec![],
                balancing_metrics: vec![],
                deadline: None,
                priority: Priority::None,
            }],
            subjects: vec![Subject {
                id: "s1".to_string(),
                description: "Users".to_string(),
                pains_desires: vec![],
                is_negative: false,
                priority: Priority::None,
            }],
            ..Default::default()
        };
        let mut ids = IdGenerator::seeded(9);
        let layout = layout_map(&map, &LayoutConfig::default(), &Labels::default(), &mut ids);

        assert_eq!(layout.cards.len(), 4);
        assert_eq!(layout.connectors.len(), 1);
        let bound: Vec<&str> = layout.cards[0].base().bound_elements.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(bound, vec!["goal-text-0", "arrow-0"]);
        assert_eq!(layout.cards[2].base().bound_elements.len(), 2);
    }
}
