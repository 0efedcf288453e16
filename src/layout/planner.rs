// Card placement.
//
// Each category gets its own column and stacks from `row_start_y` with a
// fixed pitch of card height + `row_gap`. Tasks are the exception: they are
// grouped by hypothesis and each group is centered on its hypothesis card.
//
// Every placed card is recorded in the registry under its entity id.

use std::collections::HashMap;

use crate::elements;
use crate::ids::IdGenerator;
use crate::layout::compose::{goal_text, hypothesis_text, subject_text, task_text};
use crate::layout::{Labels, LayoutConfig, Placement, RectF, Registry, SizeF};
use crate::model::{HypothesisMap, Task};
use crate::output::Element;

struct CardSpec<'a> {
    entity_id: &'a str,
    card_id: String,
    text_id: String,
    rect: RectF,
    background: &'a str,
    text: String,
    font_size: u32,
}

fn push_card(ids: &mut IdGenerator, spec: CardSpec<'_>, cards: &mut Vec<Element>, registry: &mut Registry) {
    let handle = cards.len();
    let (shape, text) = elements::card(
        ids,
        &spec.card_id,
        &spec.text_id,
        spec.rect,
        spec.background,
        &spec.text,
        spec.font_size,
    );
    cards.push(shape);
    cards.push(text);
    registry.insert(
        spec.entity_id.to_string(),
        Placement { rect: spec.rect, card_id: spec.card_id, handle },
    );
}

/// Top of the `index`th card in a column of cards of height `h`.
fn row_y(cfg: &LayoutConfig, size: SizeF, index: usize) -> f64 {
    cfg.row_start_y + index as f64 * (size.h + cfg.row_gap)
}

pub fn place_goals(
    map: &HypothesisMap,
    cfg: &LayoutConfig,
    labels: &Labels,
    ids: &mut IdGenerator,
    cards: &mut Vec<Element>,
    registry: &mut Registry,
) {
    let size = cfg.goal_size;
    for (i, goal) in map.goals.iter().enumerate() {
        let spec = CardSpec {
            entity_id: &goal.id,
            card_id: format!("goal-{i}"),
            text_id: format!("goal-text-{i}"),
            rect: RectF { x: cfg.goal_x, y: row_y(cfg, size, i), w: size.w, h: size.h },
            background: &cfg.palette.goal,
            text: goal_text(goal, cfg, labels),
            font_size: cfg.goal_font_size,
        };
        push_card(ids, spec, cards, registry);
    }
}

pub fn place_subjects(
    map: &HypothesisMap,
    cfg: &LayoutConfig,
    labels: &Labels,
    ids: &mut IdGenerator,
    cards: &mut Vec<Element>,
    registry: &mut Registry,
) {
    let size = cfg.subject_size;
    for (i, subject) in map.subjects.iter().enumerate() {
        let spec = CardSpec {
            entity_id: &subject.id,
            card_id: format!("subject-{i}"),
            text_id: format!("subject-text-{i}"),
            rect: RectF { x: cfg.subject_x, y: row_y(cfg, size, i), w: size.w, h: size.h },
            background: &cfg.palette.subject,
            text: subject_text(subject, cfg, labels),
            font_size: cfg.subject_font_size,
        };
        push_card(ids, spec, cards, registry);
    }
}

pub fn place_hypotheses(
    map: &HypothesisMap,
    cfg: &LayoutConfig,
    labels: &Labels,
    ids: &mut IdGenerator,
    cards: &mut Vec<Element>,
    registry: &mut Registry,
) {
    let size = cfg.hypothesis_size;
    for (i, hypothesis) in map.hypotheses.iter().enumerate() {
        let spec = CardSpec {
            entity_id: &hypothesis.id,
            card_id: format!("hypothesis-{i}"),
            text_id: format!("hypothesis-text-{i}"),
            rect: RectF { x: cfg.hypothesis_x, y: row_y(cfg, size, i), w: size.w, h: size.h },
            background: &cfg.palette.hypothesis,
            text: hypothesis_text(hypothesis, i + 1, cfg, labels),
            font_size: cfg.hypothesis_font_size,
        };
        push_card(ids, spec, cards, registry);
    }
}

/// Tasks grouped by hypothesis id, each group in input order.
fn group_tasks(tasks: &[Task]) -> HashMap<&str, Vec<&Task>> {
    let mut groups: HashMap<&str, Vec<&Task>> = HashMap::new();
    for task in tasks {
        groups.entry(task.hypothesis_id.as_str()).or_default().push(task);
    }
    groups
}

/// Top of the first task in a block of `count` tasks centered on `anchor`.
pub(crate) fn task_block_start(anchor: RectF, count: usize, task_h: f64, gap: f64) -> f64 {
    let n = count as f64;
    let block_h = n * task_h + (n - 1.0) * gap;
    anchor.y + (anchor.h - block_h) / 2.0
}

/// Must run after `place_hypotheses`: task rows are derived from the
/// hypothesis placements.
pub fn place_tasks(
    map: &HypothesisMap,
    cfg: &LayoutConfig,
    ids: &mut IdGenerator,
    cards: &mut Vec<Element>,
    registry: &mut Registry,
) {
    let groups = group_tasks(&map.tasks);
    let size = cfg.task_size;
    let mut placed = 0usize;

    for hypothesis in &map.hypotheses {
        let Some(tasks) = groups.get(hypothesis.id.as_str()) else {
            continue;
        };
        let Some(anchor) = registry.get(&hypothesis.id).map(|p| p.rect) else {
            continue;
        };

        let start_y = task_block_start(anchor, tasks.len(), size.h, cfg.task_gap);
        for (j, task) in tasks.iter().enumerate() {
            let y = start_y + j as f64 * (size.h + cfg.task_gap);
            let spec = CardSpec {
                entity_id: &task.id,
                card_id: format!("task-{placed}"),
                text_id: format!("task-text-{placed}"),
                rect: RectF { x: cfg.task_x, y, w: size.w, h: size.h },
                background: &cfg.palette.task,
                text: task_text(task, cfg),
                font_size: cfg.task_font_size,
            };
            push_card(ids, spec, cards, registry);
            placed += 1;
        }
    }

    if placed < map.tasks.len() {
        for task in map.tasks.iter().filter(|t| !registry.contains_key(&t.id)) {
            tracing::warn!(
                task = %task.id,
                hypothesis = %task.hypothesis_id,
                "task references an unknown hypothesis, skipping"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hypothesis, Priority};

    fn hypothesis(id: &str) -> Hypothesis {
        Hypothesis {
            id: id.to_string(),
            if_part: "a".to_string(),
            then_part: "b".to_string(),
            because_part: "c".to_string(),
            then_metric: "d".to_string(),
            subject_id: None,
            goal_id: None,
            priority: Priority::None,
            is_validated: false,
        }
    }

    fn task(id: &str, hypothesis_id: &str) -> Task {
        Task {
            id: id.to_string(),
            description: format!("task {id}"),
            hypothesis_id: hypothesis_id.to_string(),
            deadline: None,
            priority: Priority::None,
        }
    }

    fn place_all(map: &HypothesisMap) -> (Vec<Element>, Registry) {
        let cfg = LayoutConfig::default();
        let labels = Labels::default();
        let mut ids = IdGenerator::seeded(3);
        let mut cards = Vec::new();
        let mut registry = Registry::new();
        place_hypotheses(map, &cfg, &labels, &mut ids, &mut cards, &mut registry);
        place_tasks(map, &cfg, &mut ids, &mut cards, &mut registry);
        (cards, registry)
    }

    #[test]
    fn test_hypotheses_stack_with_fixed_pitch() {
        let map = HypothesisMap {
            hypotheses: vec![hypothesis("h1"), hypothesis("h2"), hypothesis("h3")],
            ..Default::default()
        };
        let (cards, registry) = place_all(&map);
        assert_eq!(cards.len(), 6);
        assert_eq!(registry["h1"].rect.y, 110.0);
        assert_eq!(registry["h2"].rect.y, 640.0);
        assert_eq!(registry["h3"].rect.y, 1170.0);
        assert_eq!(registry["h2"].card_id, "hypothesis-1");
        assert_eq!(cards[registry["h2"].handle].id(), "hypothesis-1");
    }

    #[test]
    fn test_tasks_centered_on_hypothesis() {
        let map = HypothesisMap {
            hypotheses: vec![hypothesis("h1")],
            tasks: vec![task("t1", "h1"), task("t2", "h1")],
            ..Default::default()
        };
        let (_, registry) = place_all(&map);
        let h = registry["h1"].rect;
        let t1 = registry["t1"].rect;
        let t2 = registry["t2"].rect;

        // block = 2 * 100 + 15 = 215, start = 110 + (350 - 215) / 2
        assert_eq!(t1.y, 177.5);
        assert_eq!(t2.y, 177.5 + 115.0);
        let top_margin = t1.y - h.y;
        let bottom_margin = h.bottom() - t2.bottom();
        assert!((top_margin - bottom_margin).abs() <= 0.5);
    }

    #[test]
    fn test_task_ids_follow_hypothesis_order() {
        let map = HypothesisMap {
            hypotheses: vec![hypothesis("h1"), hypothesis("h2")],
            tasks: vec![task("t1", "h2"), task("t2", "h1"), task("t3", "h2")],
            ..Default::default()
        };
        let (_, registry) = place_all(&map);
        assert_eq!(registry["t2"].card_id, "task-0");
        assert_eq!(registry["t1"].card_id, "task-1");
        assert_eq!(registry["t3"].card_id, "task-2");
        assert!(registry["t1"].rect.y < registry["t3"].rect.y);
    }

    #[test]
    fn test_hypothesis_without_tasks_reserves_nothing() {
        let map = HypothesisMap {
            hypotheses: vec![hypothesis("h1"), hypothesis("h2")],
            tasks: vec![task("t1", "h2")],
            ..Default::default()
        };
        let (cards, registry) = place_all(&map);
        assert_eq!(cards.len(), 6);
        // single task centered on h2: 640 + (350 - 100) / 2
        assert_eq!(registry["t1"].rect.y, 765.0);
    }

    #[test]
    fn test_dangling_task_not_placed() {
        let map = HypothesisMap {
            hypotheses: vec![hypothesis("h1")],
            tasks: vec![task("t1", "missing")],
            ..Default::default()
        };
        let (cards, registry) = place_all(&map);
        assert_eq!(cards.len(), 2);
        assert!(!registry.contains_key("t1"));
    }

    #[test]
    fn test_task_block_start() {
        let anchor = RectF { x: 0.0, y: 0.0, w: 10.0, h: 350.0 };
        assert_eq!(task_block_start(anchor, 1, 100.0, 15.0), 125.0);
        assert_eq!(task_block_start(anchor, 4, 100.0, 15.0), -47.5);
    }
}
