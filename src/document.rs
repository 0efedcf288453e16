//! Document assembly: title, column headings, cards, then arrows.

use crate::elements;
use crate::ids::IdGenerator;
use crate::layout::{Labels, Layout, LayoutConfig};
use crate::output::{Document, Element};

pub fn assemble(
    layout: Layout,
    title: &str,
    cfg: &LayoutConfig,
    labels: &Labels,
    ids: &mut IdGenerator,
) -> Document {
    let mut out: Vec<Element> = Vec::with_capacity(5 + layout.cards.len() + layout.connectors.len());

    out.push(elements::title(ids, title, cfg.goal_x, cfg.title_y, cfg.total_width()));

    let columns = [
        (&labels.goal_column, cfg.goal_x, cfg.goal_size.w),
        (&labels.subject_column, cfg.subject_x, cfg.subject_size.w),
        (&labels.hypothesis_column, cfg.hypothesis_x, cfg.hypothesis_size.w),
        (&labels.task_column, cfg.task_x, cfg.task_size.w),
    ];
    for (text, x, w) in columns {
        out.push(elements::label(ids, text, x, cfg.header_y, w));
    }

    out.extend(layout.cards);
    out.extend(layout.connectors);

    Document::new(out)
}
