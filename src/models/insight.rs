use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    GapAnalysis,
    AtRisk,
    TopicMastery,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicMastery {
    pub topic: String,
    /// Porcentaje 0..=100
    pub mastery: u32,
    pub student_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtRiskStudent {
    pub student_id: String,
    pub student_name: String,
    /// 0.0..=1.0, cuanto más bajo mayor riesgo
    pub risk_score: f64,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonGap {
    pub topic: String,
    pub frequency: u32,
    pub affected_students: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<TopicMastery>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub at_risk_students: Vec<AtRiskStudent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub common_gaps: Vec<CommonGap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: String,
    pub course_id: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub data: InsightData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
    pub created_at: String,
}
