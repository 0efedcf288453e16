//! Localized strings for card text, column headings and the title.

use crate::model::Priority;

#[derive(Debug, Clone)]
pub struct Labels {
    pub title: String,
    pub goal_column: String,
    pub subject_column: String,
    pub hypothesis_column: String,
    pub task_column: String,
    pub goal_header: String,
    pub subject_header: String,
    pub hypothesis_header: String,
    pub metrics: String,
    pub balancing_metrics: String,
    pub pains: String,
    pub desires: String,
    /// A pains/desires entry containing one of these (lowercased) is a pain.
    pub pain_triggers: Vec<String>,
    pub if_word: String,
    pub then_word: String,
    pub because_word: String,
    pub result_word: String,
    pub priority_high: String,
    pub priority_medium: String,
    pub priority_low: String,
    /// Trailing word of the priority line, e.g. "priority".
    pub priority_suffix: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self::russian()
    }
}

impl Labels {
    pub fn russian() -> Self {
        Self {
            title: "Карта гипотез".to_string(),
            goal_column: "ЦЕЛЬ".to_string(),
            subject_column: "СУБЪЕКТЫ".to_string(),
            hypothesis_column: "ГИПОТЕЗЫ".to_string(),
            task_column: "ЗАДАЧИ".to_string(),
            goal_header: "ЦЕЛЬ".to_string(),
            subject_header: "СУБЪЕКТ".to_string(),
            hypothesis_header: "ГИПОТЕЗА".to_string(),
            metrics: "Метрики".to_string(),
            balancing_metrics: "Балансирующие".to_string(),
            pains: "Боли".to_string(),
            desires: "Желания".to_string(),
            pain_triggers: vec!["боль".to_string(), "страх".to_string()],
            if_word: "ЕСЛИ".to_string(),
            then_word: "ТО".to_string(),
            because_word: "ПОТОМУ ЧТО".to_string(),
            result_word: "ТОГДА".to_string(),
            priority_high: "🔴 Высокий".to_string(),
            priority_medium: "🟡 Средний".to_string(),
            priority_low: "🟢 Низкий".to_string(),
            priority_suffix: "приоритет".to_string(),
        }
    }

    pub fn english() -> Self {
        Self {
            title: "Hypothesis Map".to_string(),
            goal_column: "GOAL".to_string(),
            subject_column: "SUBJECTS".to_string(),
            hypothesis_column: "HYPOTHESES".to_string(),
            task_column: "TASKS".to_string(),
            goal_header: "GOAL".to_string(),
            subject_header: "SUBJECT".to_string(),
            hypothesis_header: "HYPOTHESIS".to_string(),
            metrics: "Metrics".to_string(),
            balancing_metrics: "Balancing".to_string(),
            pains: "Pains".to_string(),
            desires: "Desires".to_string(),
            pain_triggers: vec!["pain".to_string(), "fear".to_string()],
            if_word: "IF".to_string(),
            then_word: "THEN".to_string(),
            because_word: "BECAUSE".to_string(),
            result_word: "RESULT".to_string(),
            priority_high: "🔴 High".to_string(),
            priority_medium: "🟡 Medium".to_string(),
            priority_low: "🟢 Low".to_string(),
            priority_suffix: "priority".to_string(),
        }
    }

    /// Icon and word for a priority; `None` for `Priority::None`.
    pub fn priority(&self, priority: Priority) -> Option<&str> {
        match priority {
            Priority::High => Some(&self.priority_high),
            Priority::Medium => Some(&self.priority_medium),
            Priority::Low => Some(&self.priority_low),
            Priority::None => None,
        }
    }

    pub fn is_pain(&self, entry: &str) -> bool {
        let lower = entry.to_lowercase();
        self.pain_triggers.iter().any(|t| lower.contains(t.as_str()))
    }
}
