//! Hypothesis map data model.
//!
//! These are the input records the layout consumes. They deserialize from the
//! JSON the surrounding application stores, and are never mutated during a
//! conversion.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, EntityKind};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
    #[default]
    None,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyType {
    #[default]
    Classic,
    ManyLevels,
    SeparatedMetrics,
    GoalsHierarchy,
    ManyGoals,
    SeparatedMotivation,
    GroupedTasks,
    TasksBoard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub current_value: String,
    pub target_value: String,
    #[serde(default)]
    pub is_leading: bool,
    #[serde(default = "default_true")]
    pub is_lagging: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub balancing_metrics: Vec<Metric>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub description: String,
    /// Free-text statements; the layout splits them into pains and desires.
    #[serde(default)]
    pub pains_desires: Vec<String>,
    #[serde(default)]
    pub is_negative: bool,
    #[serde(default)]
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: String,
    /// Action that changes the subject's behaviour.
    pub if_part: String,
    /// The behaviour change itself.
    pub then_part: String,
    /// Idea linking the two.
    pub because_part: String,
    /// Expected effect on the goal metrics.
    pub then_metric: String,
    #[serde(default)]
    pub subject_id: Option<String>,
    #[serde(default)]
    pub goal_id: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub is_validated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub hypothesis_id: String,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blocker {
    pub id: String,
    pub reason: String,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub responsible: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub related_element_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HypothesisMap {
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub hypotheses: Vec<Hypothesis>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub blockers: Vec<Blocker>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub topology: TopologyType,
}

impl HypothesisMap {
    pub fn from_json(input: &str) -> Result<Self, ConvertError> {
        serde_json::from_str(input).map_err(ConvertError::Parse)
    }

    pub fn goal_by_id(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn subject_by_id(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn hypothesis_by_id(&self, id: &str) -> Option<&Hypothesis> {
        self.hypotheses.iter().find(|h| h.id == id)
    }

    pub fn tasks_for_hypothesis<'a>(&'a self, hypothesis_id: &'a str) -> impl Iterator<Item = &'a Task> {
        self.tasks.iter().filter(move |t| t.hypothesis_id == hypothesis_id)
    }

    /// Number of entities that become cards.
    pub fn entity_count(&self) -> usize {
        self.goals.len() + self.subjects.len() + self.hypotheses.len() + self.tasks.len()
    }

    /// Structural checks run before layout.
    ///
    /// Identifiers must be non-empty and unique across the laid-out
    /// categories (the position registry is keyed by them), and every task
    /// must name a hypothesis. Whether that hypothesis exists is not checked
    /// here: a dangling task reference is dropped during layout.
    pub fn validate(&self, max_entities: usize) -> Result<(), ConvertError> {
        let count = self.entity_count();
        if count > max_entities {
            return Err(ConvertError::TooLarge { count, limit: max_entities });
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(count);
        let ids = self
            .goals
            .iter()
            .map(|g| (EntityKind::Goal, g.id.as_str()))
            .chain(self.subjects.iter().map(|s| (EntityKind::Subject, s.id.as_str())))
            .chain(self.hypotheses.iter().map(|h| (EntityKind::Hypothesis, h.id.as_str())))
            .chain(self.tasks.iter().map(|t| (EntityKind::Task, t.id.as_str())));

        for (kind, id) in ids {
            if id.trim().is_empty() {
                return Err(ConvertError::invalid(kind, id, "identifier is empty"));
            }
            if !seen.insert(id) {
                return Err(ConvertError::invalid(kind, id, "identifier is used more than once"));
            }
        }

        for task in &self.tasks {
            if task.hypothesis_id.trim().is_empty() {
                return Err(ConvertError::invalid(
                    EntityKind::Task,
                    &task.id,
                    "task has no hypothesis reference",
                ));
            }
        }

        Ok(())
    }
}
