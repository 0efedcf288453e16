// Card text for each entity category.
//
// All of these return the exact string shown inside the card; the card
// itself only measures line count.

use crate::layout::{LayoutConfig, Labels};
use crate::model::{Goal, Hypothesis, Subject, Task};
use crate::text::wrap_text;

pub fn goal_text(goal: &Goal, cfg: &LayoutConfig, labels: &Labels) -> String {
    let mut text = format!("{}\n{}\n", labels.goal_header, goal.description);

    if !goal.metrics.is_empty() {
        text.push_str(&format!("\n{}:\n", labels.metrics));
        for m in goal.metrics.iter().take(cfg.max_goal_metrics) {
            text.push_str(&format!("• {}: {} → {}\n", m.name, m.current_value, m.target_value));
        }
    }
    if !goal.balancing_metrics.is_empty() {
        text.push_str(&format!("\n{}:\n", labels.balancing_metrics));
        for m in goal.balancing_metrics.iter().take(cfg.max_balancing_metrics) {
            text.push_str(&format!("• {}\n", m.name));
        }
    }

    text.trim().to_string()
}

pub fn subject_text(subject: &Subject, cfg: &LayoutConfig, labels: &Labels) -> String {
    let mut text = format!("{}\n{}\n", labels.subject_header, subject.description);

    let (pains, desires): (Vec<&String>, Vec<&String>) =
        subject.pains_desires.iter().partition(|p| labels.is_pain(p));

    if !pains.is_empty() {
        text.push_str(&format!("\n{}:\n{}", labels.pains, bullets(&pains, cfg.max_pains)));
    }
    if !desires.is_empty() {
        text.push_str(&format!("\n\n{}:\n{}", labels.desires, bullets(&desires, cfg.max_desires)));
    }

    text.trim().to_string()
}

fn bullets(items: &[&String], cap: usize) -> String {
    items
        .iter()
        .take(cap)
        .map(|s| format!("• {s}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `ordinal` is 1-based among all hypotheses of the map.
pub fn hypothesis_text(
    hypothesis: &Hypothesis,
    ordinal: usize,
    cfg: &LayoutConfig,
    labels: &Labels,
) -> String {
    let mut text = format!("{} {}", labels.hypothesis_header, ordinal);
    if let Some(priority) = labels.priority(hypothesis.priority) {
        text.push_str(&format!("\n{} {}", priority, labels.priority_suffix));
    }

    let w = cfg.hypothesis_wrap;
    text.push_str(&format!(
        "\n\n{} {},\n\n{} {},\n\n{} {},\n\n{} {}",
        labels.if_word,
        wrap_text(&hypothesis.if_part, w),
        labels.then_word,
        wrap_text(&hypothesis.then_part, w),
        labels.because_word,
        wrap_text(&hypothesis.because_part, w),
        labels.result_word,
        wrap_text(&hypothesis.then_metric, w),
    ));

    text.trim().to_string()
}

pub fn task_text(task: &Task, cfg: &LayoutConfig) -> String {
    wrap_text(&task.description, cfg.task_wrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Metric, Priority};

    fn metric(name: &str) -> Metric {
        Metric {
            name: name.to_string(),
            current_value: "1".to_string(),
            target_value: "2".to_string(),
            is_leading: false,
            is_lagging: true,
        }
    }

    fn hypothesis(priority: Priority) -> Hypothesis {
        Hypothesis {
            id: "h1".to_string(),
            if_part: "we add onboarding".to_string(),
            then_part: "users finish setup".to_string(),
            because_part: "they see value sooner".to_string(),
            then_metric: "retention grows".to_string(),
            subject_id: None,
            goal_id: None,
            priority,
            is_validated: false,
        }
    }

    #[test]
    fn test_goal_text_truncates_metrics() {
        let goal = Goal {
            id: "g1".to_string(),
            description: "Increase retention".to_string(),
            metrics: vec![metric("a"), metric("b"), metric("c"), metric("d")],
            balancing_metrics: vec![metric("x"), metric("y"), metric("z")],
            deadline: None,
            priority: Priority::None,
        };
        let text = goal_text(&goal, &LayoutConfig::default(), &Labels::english());
        assert_eq!(
            text,
            "GOAL\nIncrease retention\n\nMetrics:\n• a: 1 → 2\n• b: 1 → 2\n• c: 1 → 2\n\nBalancing:\n• x\n• y"
        );
    }

    #[test]
    fn test_goal_text_without_metrics() {
        let goal = Goal {
            id: "g1".to_string(),
            description: "Increase retention".to_string(),
            metrics: vec![],
            balancing_metrics: vec![],
            deadline: None,
            priority: Priority::High,
        };
        assert_eq!(
            goal_text(&goal, &LayoutConfig::default(), &Labels::default()),
            "ЦЕЛЬ\nIncrease retention"
        );
    }

    #[test]
    fn test_subject_text_partitions_pains() {
        let subject = Subject {
            id: "s1".to_string(),
            description: "Новые пользователи".to_string(),
            pains_desires: vec![
                "Боль: сложная регистрация".to_string(),
                "Хотят быстрый старт".to_string(),
                "Страх потерять данные".to_string(),
            ],
            is_negative: false,
            priority: Priority::None,
        };
        let text = subject_text(&subject, &LayoutConfig::default(), &Labels::default());
        assert_eq!(
            text,
            "СУБЪЕКТ\nНовые пользователи\n\nБоли:\n• Боль: сложная регистрация\n• Страх потерять данные\n\nЖелания:\n• Хотят быстрый старт"
        );
    }

    #[test]
    fn test_subject_text_only_desires() {
        let subject = Subject {
            id: "s1".to_string(),
            description: "New users".to_string(),
            pains_desires: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            is_negative: false,
            priority: Priority::None,
        };
        let text = subject_text(&subject, &LayoutConfig::default(), &Labels::english());
        assert_eq!(text, "SUBJECT\nNew users\n\n\nDesires:\n• a\n• b\n• c");
    }

    #[test]
    fn test_hypothesis_text_priority_line() {
        let cfg = LayoutConfig::default();
        let labels = Labels::english();

        let high = hypothesis_text(&hypothesis(Priority::High), 2, &cfg, &labels);
        assert!(high.starts_with("HYPOTHESIS 2\n🔴 High priority\n\nIF we add onboarding,"));
        assert!(high.ends_with("RESULT retention grows"));

        let none = hypothesis_text(&hypothesis(Priority::None), 1, &cfg, &labels);
        assert!(none.starts_with("HYPOTHESIS 1\n\nIF "));
    }

    #[test]
    fn test_hypothesis_text_exact() {
        let text = hypothesis_text(&hypothesis(Priority::Medium), 3, &LayoutConfig::default(), &Labels::english());
        assert_eq!(
            text,
            "HYPOTHESIS 3\n🟡 Medium priority\n\n\
             IF we add onboarding,\n\n\
             THEN users finish setup,\n\n\
             BECAUSE they see value sooner,\n\n\
             RESULT retention grows"
        );
    }

    #[test]
    fn test_hypothesis_parts_wrapped() {
        let mut h = hypothesis(Priority::Low);
        h.because_part = "word ".repeat(20).trim().to_string();
        let text = hypothesis_text(&h, 1, &LayoutConfig::default(), &Labels::english());
        for line in text.lines() {
            assert!(line.chars().count() <= 48, "{line:?}");
        }
    }

    #[test]
    fn test_task_text_wrapped() {
        let task = Task {
            id: "t1".to_string(),
            description: "Interview five churned users this week".to_string(),
            hypothesis_id: "h1".to_string(),
            deadline: None,
            priority: Priority::None,
        };
        assert_eq!(
            task_text(&task, &LayoutConfig::default()),
            "Interview five churned\nusers this week"
        );
    }
}
