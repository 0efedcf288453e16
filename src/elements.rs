// Element factory: the primitive shapes the layout is built from.
//
// - card: rectangle plus the text bound inside it
// - connector: arrow bound to two rectangles
// - label / title: free-standing text
//
// Each constructor returns a complete element; nothing is left for the
// viewer to default.

use crate::ids::IdGenerator;
use crate::layout::{PointF, RectF};
use crate::output::{
    ArrowElement, Arrowhead, Binding, BoundElement, BoundKind, Element, ElementBase, FillStyle,
    RectangleElement, Roundness, StrokeStyle, TextAlign, TextElement, VerticalAlign,
    FONT_FAMILY_MONOSPACE, LINE_HEIGHT,
};

pub const STROKE_COLOR: &str = "#1e1e1e";
pub const LABEL_COLOR: &str = "#868e96";
pub const TRANSPARENT: &str = "transparent";

/// Horizontal inset of card text on each side.
pub const CARD_TEXT_INSET: f64 = 10.0;
pub const CONNECTOR_GAP: f64 = 5.0;
pub const LABEL_HEIGHT: f64 = 30.0;
pub const LABEL_FONT_SIZE: u32 = 18;
pub const TITLE_HEIGHT: f64 = 36.0;
pub const TITLE_FONT_SIZE: u32 = 28;

fn base(
    ids: &mut IdGenerator,
    id: String,
    rect: RectF,
    stroke_color: &str,
    background_color: &str,
    stroke_width: u32,
    roundness: Option<Roundness>,
) -> ElementBase {
    ElementBase {
        id,
        x: rect.x,
        y: rect.y,
        width: rect.w,
        height: rect.h,
        angle: 0.0,
        stroke_color: stroke_color.to_string(),
        background_color: background_color.to_string(),
        fill_style: FillStyle::Solid,
        stroke_width,
        stroke_style: StrokeStyle::Solid,
        roughness: 0,
        opacity: 100,
        group_ids: Vec::new(),
        frame_id: None,
        roundness,
        seed: ids.seed(),
        version: 1,
        version_nonce: ids.seed(),
        is_deleted: false,
        bound_elements: Vec::new(),
        updated: 1,
        link: None,
        locked: false,
    }
}

/// Estimated rendered height of a text block.
pub fn text_block_height(text: &str, font_size: u32) -> f64 {
    let lines = text.matches('\n').count() + 1;
    lines as f64 * font_size as f64 * LINE_HEIGHT
}

#[allow(clippy::too_many_arguments)]
fn text(
    ids: &mut IdGenerator,
    id: String,
    rect: RectF,
    stroke_color: &str,
    content: &str,
    font_size: u32,
    align: (TextAlign, VerticalAlign),
    container_id: Option<&str>,
) -> TextElement {
    TextElement {
        base: base(ids, id, rect, stroke_color, TRANSPARENT, 1, None),
        text: content.to_string(),
        font_size,
        font_family: FONT_FAMILY_MONOSPACE,
        text_align: align.0,
        vertical_align: align.1,
        container_id: container_id.map(str::to_string),
        original_text: content.to_string(),
        line_height: LINE_HEIGHT,
    }
}

/// A rectangle with `content` bound inside it, vertically centered.
pub fn card(
    ids: &mut IdGenerator,
    card_id: &str,
    text_id: &str,
    rect: RectF,
    background: &str,
    content: &str,
    font_size: u32,
) -> (Element, Element) {
    let mut shape = base(
        ids,
        card_id.to_string(),
        rect,
        STROKE_COLOR,
        background,
        2,
        Some(Roundness { kind: 3 }),
    );
    shape.bound_elements.push(BoundElement {
        id: text_id.to_string(),
        kind: BoundKind::Text,
    });

    let text_h = text_block_height(content, font_size);
    let text_rect = RectF {
        x: rect.x + CARD_TEXT_INSET,
        y: rect.y + (rect.h - text_h) / 2.0,
        w: rect.w - 2.0 * CARD_TEXT_INSET,
        h: text_h,
    };
    let label = text(
        ids,
        text_id.to_string(),
        text_rect,
        STROKE_COLOR,
        content,
        font_size,
        (TextAlign::Left, VerticalAlign::Middle),
        Some(card_id),
    );

    (
        Element::Rectangle(RectangleElement { base: shape }),
        Element::Text(label),
    )
}

/// An arrow from `start` to `end`, bound to both container ids.
#[allow(clippy::too_many_arguments)]
pub fn connector(
    ids: &mut IdGenerator,
    arrow_id: &str,
    start_id: &str,
    end_id: &str,
    start: PointF,
    end: PointF,
    color: &str,
    stroke_width: u32,
) -> Element {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let rect = RectF { x: start.x, y: start.y, w: dx.abs(), h: dy.abs() };

    Element::Arrow(ArrowElement {
        base: base(ids, arrow_id.to_string(), rect, color, TRANSPARENT, stroke_width, None),
        points: vec![[0.0, 0.0], [dx, dy]],
        last_committed_point: None,
        start_binding: Binding {
            element_id: start_id.to_string(),
            focus: 0.0,
            gap: CONNECTOR_GAP,
        },
        end_binding: Binding {
            element_id: end_id.to_string(),
            focus: 0.0,
            gap: CONNECTOR_GAP,
        },
        start_arrowhead: None,
        end_arrowhead: Some(Arrowhead::Arrow),
    })
}

/// Column heading.
pub fn label(ids: &mut IdGenerator, content: &str, x: f64, y: f64, width: f64) -> Element {
    let id = format!("label-{}", ids.short_id());
    let rect = RectF { x, y, w: width, h: LABEL_HEIGHT };
    Element::Text(text(
        ids,
        id,
        rect,
        LABEL_COLOR,
        content,
        LABEL_FONT_SIZE,
        (TextAlign::Center, VerticalAlign::Top),
        None,
    ))
}

/// Document title spanning all columns.
pub fn title(ids: &mut IdGenerator, content: &str, x: f64, y: f64, width: f64) -> Element {
    let id = format!("title-{}", ids.short_id());
    let rect = RectF { x, y, w: width, h: TITLE_HEIGHT };
    Element::Text(text(
        ids,
        id,
        rect,
        STROKE_COLOR,
        content,
        TITLE_FONT_SIZE,
        (TextAlign::Left, VerticalAlign::Top),
        None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_centers_text() {
        let mut ids = IdGenerator::seeded(1);
        let rect = RectF { x: 100.0, y: 110.0, w: 320.0, h: 200.0 };
        let (shape, text) = card(&mut ids, "goal-0", "goal-text-0", rect, "#cadf58", "a\nb\nc", 12);

        let shape = shape.base();
        assert_eq!(shape.background_color, "#cadf58");
        assert_eq!(shape.roundness, Some(Roundness { kind: 3 }));
        assert_eq!(
            shape.bound_elements,
            vec![BoundElement { id: "goal-text-0".to_string(), kind: BoundKind::Text }]
        );

        let text = text.as_text().unwrap();
        assert_eq!(text.base.height, 45.0);
        assert_eq!(text.base.y, 110.0 + (200.0 - 45.0) / 2.0);
        assert_eq!(text.base.x, 110.0);
        assert_eq!(text.base.width, 300.0);
        assert_eq!(text.container_id.as_deref(), Some("goal-0"));
        assert_eq!(text.original_text, "a\nb\nc");
        assert!(text.base.roundness.is_none());
    }

    #[test]
    fn test_connector_geometry() {
        let mut ids = IdGenerator::seeded(1);
        let arrow = connector(
            &mut ids,
            "arrow-0",
            "subject-0",
            "goal-0",
            PointF { x: 500.0, y: 210.0 },
            PointF { x: 420.0, y: 590.0 },
            "#ffc831",
            3,
        );
        let arrow = arrow.as_arrow().unwrap();
        assert_eq!((arrow.base.x, arrow.base.y), (500.0, 210.0));
        assert_eq!((arrow.base.width, arrow.base.height), (80.0, 380.0));
        assert_eq!(arrow.points, vec![[0.0, 0.0], [-80.0, 380.0]]);
        assert_eq!(arrow.start_binding.element_id, "subject-0");
        assert_eq!(arrow.end_binding.element_id, "goal-0");
        assert_eq!(arrow.end_binding.gap, 5.0);
        assert!(arrow.start_arrowhead.is_none());
        assert_eq!(arrow.end_arrowhead, Some(Arrowhead::Arrow));
        assert_eq!(arrow.base.stroke_width, 3);
    }

    #[test]
    fn test_label_is_free_standing() {
        let mut ids = IdGenerator::seeded(1);
        let el = label(&mut ids, "ЦЕЛЬ", 100.0, 60.0, 320.0);
        let t = el.as_text().unwrap();
        assert!(t.base.id.starts_with("label-"));
        assert_eq!(t.base.height, 30.0);
        assert_eq!(t.text_align, TextAlign::Center);
        assert_eq!(t.base.stroke_color, LABEL_COLOR);
        assert!(t.container_id.is_none());
    }
}
