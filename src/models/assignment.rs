use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentKind {
    Test,
    Essay,
    Project,
    Homework,
}

impl AssignmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            AssignmentKind::Test => "тест",
            AssignmentKind::Essay => "эссе",
            AssignmentKind::Project => "проект",
            AssignmentKind::Homework => "домашнее задание",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Draft,
    Published,
    Closed,
}

impl AssignmentStatus {
    /// Valor estable usado por el filtro de estados (coincide con el wire format)
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Draft => "draft",
            AssignmentStatus::Published => "published",
            AssignmentStatus::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssignmentStatus::Draft => "Черновик",
            AssignmentStatus::Published => "Опубликовано",
            AssignmentStatus::Closed => "Закрыто",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub course_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: AssignmentKind,
    pub due_date: String,
    pub status: AssignmentStatus,
    pub total_submissions: u32,
    pub graded_submissions: u32,
    pub created_at: String,
}

impl Assignment {
    pub fn pending_grading(&self) -> u32 {
        self.total_submissions.saturating_sub(self.graded_submissions)
    }
}
