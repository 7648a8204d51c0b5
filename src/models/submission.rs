use serde::{Deserialize, Serialize};

use crate::models::student::Student;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Submitted,
    Graded,
    RevisionRequested,
    Approved,
}

impl SubmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Submitted => "Сдано",
            SubmissionStatus::Graded => "Проверено",
            SubmissionStatus::RevisionRequested => "На доработке",
            SubmissionStatus::Approved => "Одобрено",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricItem {
    pub id: String,
    pub criterion: String,
    pub description: String,
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earned_points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub assignment_id: String,
    pub student_id: String,
    pub student: Student,
    pub status: SubmissionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    pub max_score: u32,
    pub submitted_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graded_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rubric: Vec<RubricItem>,
}
