// ============================================================================
// API - Stubs asíncronos sobre los datos de demo (sin backend real)
// ============================================================================
// Cada llamada espera una latencia simulada y devuelve objetos de dominio
// ya formados, igual que haría el cliente HTTP contra el backend.
// ============================================================================

use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::*;
use crate::services::mock_data;

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("credenciales inválidas")]
    InvalidCredentials,
    #[error("recurso no encontrado: {0}")]
    NotFound(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

async fn simulate_latency() {
    TimeoutFuture::new(CONFIG.api_latency_ms).await;
}

fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() || !email.contains('@') {
        return Err(ApiError::InvalidCredentials);
    }
    Ok(())
}

/// Login de demo: acepta cualquier credencial con forma válida.
pub async fn login(email: &str, password: &str) -> ApiResult<User> {
    simulate_latency().await;
    validate_credentials(email, password)?;
    log::info!("🔐 Login demo para {}", email.trim());
    Ok(mock_data::mock_user())
}

pub async fn get_courses() -> ApiResult<Vec<Course>> {
    simulate_latency().await;
    Ok(mock_data::courses())
}

pub async fn get_course(course_id: &str) -> ApiResult<Course> {
    simulate_latency().await;
    mock_data::courses()
        .into_iter()
        .find(|c| c.id == course_id)
        .ok_or_else(|| ApiError::NotFound(format!("course {}", course_id)))
}

pub async fn get_assignments() -> ApiResult<Vec<Assignment>> {
    simulate_latency().await;
    Ok(mock_data::assignments())
}

pub async fn get_assignment(assignment_id: &str) -> ApiResult<Assignment> {
    simulate_latency().await;
    mock_data::assignments()
        .into_iter()
        .find(|a| a.id == assignment_id)
        .ok_or_else(|| ApiError::NotFound(format!("assignment {}", assignment_id)))
}

pub async fn get_course_assignments(course_id: &str) -> ApiResult<Vec<Assignment>> {
    simulate_latency().await;
    Ok(mock_data::assignments()
        .into_iter()
        .filter(|a| a.course_id == course_id)
        .collect())
}

pub async fn get_students(course_id: &str) -> ApiResult<Vec<Student>> {
    simulate_latency().await;
    Ok(mock_data::students()
        .into_iter()
        .filter(|s| s.course_id == course_id)
        .collect())
}

pub async fn get_submissions(assignment_id: &str) -> ApiResult<Vec<Submission>> {
    simulate_latency().await;
    Ok(mock_data::submissions()
        .into_iter()
        .filter(|s| s.assignment_id == assignment_id)
        .collect())
}

pub async fn get_insights(course_id: &str) -> ApiResult<Vec<Insight>> {
    simulate_latency().await;
    Ok(mock_data::insights()
        .into_iter()
        .filter(|i| i.course_id == course_id)
        .collect())
}

/// Respuesta del asistente: la "IA" de demo contesta con textos enlatados
/// según palabras clave del mensaje.
pub async fn send_chat_message(content: &str) -> ApiResult<ChatMessage> {
    // El asistente "piensa" un poco más que el resto de endpoints.
    simulate_latency().await;
    simulate_latency().await;
    Ok(ChatMessage::now(ChatRole::Assistant, assistant_reply(content)))
}

fn assistant_reply(content: &str) -> String {
    let normalized = content.to_lowercase();
    if normalized.contains("критери") {
        "Критерии оценки берутся из рубрики задания: каждый критерий имеет \
         максимум баллов и описание. При проверке я предлагаю баллы по каждому \
         критерию и комментарий — вы всегда можете их поправить перед отправкой."
            .to_string()
    } else if normalized.contains("вопрос") || normalized.contains("тест") {
        "Могу предложить вопросы для теста по темам курса. Например, по теме \
         «Градиентный спуск»: 1) Чем отличается стохастический градиентный спуск \
         от батчевого? 2) Как влияет шаг обучения на сходимость? 3) Зачем нужна \
         нормализация признаков?"
            .to_string()
    } else if normalized.contains("ошиб") || normalized.contains("пробел") {
        "Частые ошибки в последних работах: отсутствие нормализации признаков, \
         неверный расчёт градиента и путаница между L1 и L2 регуляризацией. \
         Подробный разбор — на странице «Аналитика»."
            .to_string()
    } else if normalized.contains("риск") || normalized.contains("успеваем") {
        "По текущим данным два студента в зоне риска: Дмитрий Соколов и Елена \
         Морозова. Рекомендую назначить индивидуальные консультации — детали в \
         разделе «Аналитика»."
            .to_string()
    } else {
        "Я могу объяснить критерии оценки, составить вопросы для теста, \
         суммировать частые ошибки или показать студентов в зоне риска. \
         Сформулируйте запрос — и я помогу."
            .to_string()
    }
}

/// Generación de feedback de demo a partir de la entrega.
pub async fn generate_feedback(submission_id: &str) -> ApiResult<String> {
    simulate_latency().await;
    simulate_latency().await;
    let submission = mock_data::submissions()
        .into_iter()
        .find(|s| s.id == submission_id)
        .ok_or_else(|| ApiError::NotFound(format!("submission {}", submission_id)))?;
    log::info!("✨ Generando feedback para la entrega {}", submission_id);
    Ok(feedback_draft(&submission))
}

fn feedback_draft(submission: &Submission) -> String {
    let mut draft = format!(
        "{}, спасибо за работу! Решение в целом выполнено верно: подход выбран \
         обоснованно, код структурирован.",
        submission.student.name
    );
    if let Some(weakest) = submission
        .rubric
        .iter()
        .filter(|item| item.earned_points.is_some())
        .min_by_key(|item| item.earned_points.unwrap_or(0) * 100 / item.points.max(1))
    {
        draft.push_str(&format!(
            " Основная зона роста — «{}»: {}.",
            weakest.criterion, weakest.description
        ));
    } else {
        draft.push_str(
            " Обратите внимание на оформление выводов и обоснование выбранных параметров.",
        );
    }
    draft.push_str(" Рекомендую свериться с материалами лекций и дополнить анализ результатов.");
    draft
}

pub async fn approve_submission(submission_id: &str) -> ApiResult<()> {
    simulate_latency().await;
    if !mock_data::submissions().iter().any(|s| s.id == submission_id) {
        return Err(ApiError::NotFound(format!("submission {}", submission_id)));
    }
    log::info!("✅ Entrega {} aprobada", submission_id);
    Ok(())
}

pub async fn request_revision(submission_id: &str, feedback: &str) -> ApiResult<()> {
    simulate_latency().await;
    if !mock_data::submissions().iter().any(|s| s.id == submission_id) {
        return Err(ApiError::NotFound(format!("submission {}", submission_id)));
    }
    log::info!(
        "🔄 Revisión solicitada para {} ({} caracteres de feedback)",
        submission_id,
        feedback.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credentials_are_rejected() {
        assert_eq!(
            validate_credentials("", "password"),
            Err(ApiError::InvalidCredentials)
        );
        assert_eq!(
            validate_credentials("ivanov@university.edu", ""),
            Err(ApiError::InvalidCredentials)
        );
        assert_eq!(
            validate_credentials("no-es-un-email", "password"),
            Err(ApiError::InvalidCredentials)
        );
        assert!(validate_credentials("ivanov@university.edu", "password").is_ok());
    }

    #[test]
    fn assistant_matches_keywords() {
        assert!(assistant_reply("объясни критерии оценки").contains("рубрики"));
        assert!(assistant_reply("создай вопросы для теста").contains("вопросы"));
        assert!(assistant_reply("суммируй частые ошибки").contains("ошибки"));
        assert!(assistant_reply("кто в зоне риска?").contains("зоне риска"));
    }

    #[test]
    fn assistant_has_fallback_reply() {
        let reply = assistant_reply("привет");
        assert!(reply.contains("критерии оценки"));
    }

    #[test]
    fn feedback_draft_names_the_student_and_weakest_criterion() {
        let submission = &mock_data::submissions()[0];
        let draft = feedback_draft(submission);
        assert!(draft.contains(&submission.student.name));
        assert!(draft.contains("Отчёт"));
    }
}
