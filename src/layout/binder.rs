// Relationship arrows.
//
// Three families share one counter, in this order:
// 1. subject -> first goal
// 2. hypothesis -> its subject (only if the reference resolves)
// 3. task -> its hypothesis
//
// Arrows leave the left middle of the source card and enter the right middle
// of the target card. Each arrow is appended to both cards' bound lists.

use crate::elements;
use crate::ids::IdGenerator;
use crate::layout::{attach_arrow, LayoutConfig, Palette, Placement, Registry};
use crate::model::{HypothesisMap, Priority};
use crate::output::Element;

pub fn priority_color(palette: &Palette, priority: Priority) -> &str {
    match priority {
        Priority::High => &palette.priority_high,
        Priority::Medium => &palette.priority_medium,
        Priority::Low => &palette.priority_low,
        Priority::None => &palette.priority_none,
    }
}

pub fn priority_stroke_width(cfg: &LayoutConfig, priority: Priority) -> u32 {
    match priority {
        Priority::High => cfg.priority_high_width,
        Priority::Medium => cfg.priority_medium_width,
        Priority::Low => cfg.priority_low_width,
        Priority::None => cfg.priority_none_width,
    }
}

struct Binder<'a> {
    cards: &'a mut Vec<Element>,
    ids: &'a mut IdGenerator,
    connectors: Vec<Element>,
}

impl Binder<'_> {
    fn connect(&mut self, from: &Placement, to: &Placement, color: &str, stroke_width: u32) {
        let arrow_id = format!("arrow-{}", self.connectors.len());
        let arrow = elements::connector(
            self.ids,
            &arrow_id,
            &from.card_id,
            &to.card_id,
            from.rect.left_mid(),
            to.rect.right_mid(),
            color,
            stroke_width,
        );
        attach_arrow(self.cards, from.handle, &arrow_id);
        attach_arrow(self.cards, to.handle, &arrow_id);
        self.connectors.push(arrow);
    }
}

/// Build every arrow. All cards must already be in `cards` and `registry`.
pub fn bind_relationships(
    map: &HypothesisMap,
    cfg: &LayoutConfig,
    ids: &mut IdGenerator,
    registry: &Registry,
    cards: &mut Vec<Element>,
) -> Vec<Element> {
    let mut binder = Binder { cards, ids, connectors: Vec::new() };
    let palette = &cfg.palette;

    // Subjects always point at the first goal.
    if let Some(goal) = map.goals.first().and_then(|g| registry.get(&g.id)) {
        for subject in &map.subjects {
            if let Some(from) = registry.get(&subject.id) {
                binder.connect(from, goal, &palette.subject, cfg.subject_arrow_width);
            }
        }
    }

    for hypothesis in &map.hypotheses {
        let Some(subject_id) = hypothesis.subject_id.as_deref() else {
            continue;
        };
        let (Some(from), Some(to)) = (registry.get(&hypothesis.id), registry.get(subject_id)) else {
            tracing::warn!(
                hypothesis = %hypothesis.id,
                subject = %subject_id,
                "hypothesis references an unknown subject, skipping arrow"
            );
            continue;
        };
        binder.connect(
            from,
            to,
            priority_color(palette, hypothesis.priority),
            priority_stroke_width(cfg, hypothesis.priority),
        );
    }

    for task in &map.tasks {
        if let (Some(from), Some(to)) = (registry.get(&task.id), registry.get(&task.hypothesis_id)) {
            binder.connect(from, to, &palette.neutral, cfg.task_arrow_width);
        }
    }

    binder.connectors
}
