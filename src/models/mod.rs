// ============================================================================
// MODELS - Estructuras de dominio compartidas con el mock API
// ============================================================================

pub mod user;
pub mod course;
pub mod assignment;
pub mod student;
pub mod submission;
pub mod insight;
pub mod chat;

pub use user::{User, Role};
pub use course::Course;
pub use assignment::{Assignment, AssignmentKind, AssignmentStatus};
pub use student::Student;
pub use submission::{Submission, SubmissionStatus, RubricItem};
pub use insight::{Insight, InsightKind, InsightData, TopicMastery, AtRiskStudent, CommonGap};
pub use chat::{ChatMessage, ChatRole};
