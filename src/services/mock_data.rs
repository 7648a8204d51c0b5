// ============================================================================
// MOCK DATA - Contenido de demostración (sin backend)
// ============================================================================

use crate::models::*;

pub fn mock_user() -> User {
    User {
        id: "1".to_string(),
        name: "Доктор Иванов".to_string(),
        email: "ivanov@university.edu".to_string(),
        role: Role::Teacher,
        avatar: None,
    }
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".to_string(),
            name: "Введение в машинное обучение".to_string(),
            code: "CS401".to_string(),
            description: Some("Основы ML и нейронных сетей".to_string()),
            semester: "Весна".to_string(),
            year: 2024,
            student_count: 45,
            assignment_count: 8,
            created_at: "2024-01-15".to_string(),
        },
        Course {
            id: "2".to_string(),
            name: "Алгоритмы и структуры данных".to_string(),
            code: "CS301".to_string(),
            description: Some("Классические алгоритмы и их анализ".to_string()),
            semester: "Весна".to_string(),
            year: 2024,
            student_count: 52,
            assignment_count: 12,
            created_at: "2024-01-10".to_string(),
        },
        Course {
            id: "3".to_string(),
            name: "Веб-разработка".to_string(),
            code: "CS201".to_string(),
            description: Some("React, Next.js, TypeScript".to_string()),
            semester: "Весна".to_string(),
            year: 2024,
            student_count: 38,
            assignment_count: 6,
            created_at: "2024-01-20".to_string(),
        },
    ]
}

pub fn assignments() -> Vec<Assignment> {
    vec![
        Assignment {
            id: "1".to_string(),
            course_id: "1".to_string(),
            title: "Лабораторная работа: Линейная регрессия".to_string(),
            description: Some("Реализовать алгоритм линейной регрессии с нуля".to_string()),
            kind: AssignmentKind::Project,
            due_date: "2024-03-15".to_string(),
            status: AssignmentStatus::Published,
            total_submissions: 42,
            graded_submissions: 28,
            created_at: "2024-02-01".to_string(),
        },
        Assignment {
            id: "2".to_string(),
            course_id: "1".to_string(),
            title: "Тест: Основы нейронных сетей".to_string(),
            description: Some("Тест на понимание базовых концепций".to_string()),
            kind: AssignmentKind::Test,
            due_date: "2024-03-10".to_string(),
            status: AssignmentStatus::Published,
            total_submissions: 45,
            graded_submissions: 45,
            created_at: "2024-02-05".to_string(),
        },
        Assignment {
            id: "3".to_string(),
            course_id: "2".to_string(),
            title: "Эссе: Анализ сложности алгоритмов".to_string(),
            description: None,
            kind: AssignmentKind::Essay,
            due_date: "2024-03-20".to_string(),
            status: AssignmentStatus::Published,
            total_submissions: 35,
            graded_submissions: 12,
            created_at: "2024-02-10".to_string(),
        },
        Assignment {
            id: "4".to_string(),
            course_id: "2".to_string(),
            title: "Домашнее задание: Динамическое программирование".to_string(),
            description: Some("Пять задач на ДП с разбором решений".to_string()),
            kind: AssignmentKind::Homework,
            due_date: "2024-04-01".to_string(),
            status: AssignmentStatus::Draft,
            total_submissions: 0,
            graded_submissions: 0,
            created_at: "2024-03-01".to_string(),
        },
        Assignment {
            id: "5".to_string(),
            course_id: "3".to_string(),
            title: "Проект: SPA на React".to_string(),
            description: Some("Итоговый проект первого модуля".to_string()),
            kind: AssignmentKind::Project,
            due_date: "2024-02-20".to_string(),
            status: AssignmentStatus::Closed,
            total_submissions: 38,
            graded_submissions: 38,
            created_at: "2024-01-25".to_string(),
        },
    ]
}

pub fn students() -> Vec<Student> {
    vec![
        Student {
            id: "1".to_string(),
            name: "Александр Петров".to_string(),
            email: "petrov@student.edu".to_string(),
            student_id: "ST001".to_string(),
            avatar: None,
            course_id: "1".to_string(),
        },
        Student {
            id: "2".to_string(),
            name: "Мария Сидорова".to_string(),
            email: "sidorova@student.edu".to_string(),
            student_id: "ST002".to_string(),
            avatar: None,
            course_id: "1".to_string(),
        },
        Student {
            id: "3".to_string(),
            name: "Иван Козлов".to_string(),
            email: "kozlov@student.edu".to_string(),
            student_id: "ST003".to_string(),
            avatar: None,
            course_id: "1".to_string(),
        },
        Student {
            id: "4".to_string(),
            name: "Анна Волкова".to_string(),
            email: "volkova@student.edu".to_string(),
            student_id: "ST004".to_string(),
            avatar: None,
            course_id: "1".to_string(),
        },
    ]
}

pub fn submissions() -> Vec<Submission> {
    let students = students();
    vec![
        Submission {
            id: "1".to_string(),
            assignment_id: "1".to_string(),
            student_id: "1".to_string(),
            student: students[0].clone(),
            status: SubmissionStatus::Graded,
            score: Some(85),
            max_score: 100,
            submitted_at: "2024-03-14T18:20:00+00:00".to_string(),
            graded_at: Some("2024-03-15T10:05:00+00:00".to_string()),
            content: Some(
                "Реализовал линейную регрессию методом градиентного спуска. \
                 Добавил нормализацию признаков и график сходимости."
                    .to_string(),
            ),
            files: vec!["regression.py".to_string(), "report.pdf".to_string()],
            feedback: Some(
                "Хорошая реализация. Обратите внимание на выбор шага обучения."
                    .to_string(),
            ),
            rubric: vec![
                RubricItem {
                    id: "r1".to_string(),
                    criterion: "Корректность алгоритма".to_string(),
                    description: "Модель сходится и даёт адекватные предсказания".to_string(),
                    points: 40,
                    earned_points: Some(36),
                    feedback: Some("Сходимость медленная при больших данных".to_string()),
                },
                RubricItem {
                    id: "r2".to_string(),
                    criterion: "Качество кода".to_string(),
                    description: "Читаемость, структура, тесты".to_string(),
                    points: 30,
                    earned_points: Some(25),
                    feedback: None,
                },
                RubricItem {
                    id: "r3".to_string(),
                    criterion: "Отчёт".to_string(),
                    description: "Анализ результатов и выводы".to_string(),
                    points: 30,
                    earned_points: Some(24),
                    feedback: None,
                },
            ],
        },
        Submission {
            id: "2".to_string(),
            assignment_id: "1".to_string(),
            student_id: "2".to_string(),
            student: students[1].clone(),
            status: SubmissionStatus::Submitted,
            score: None,
            max_score: 100,
            submitted_at: "2024-03-15T09:40:00+00:00".to_string(),
            graded_at: None,
            content: Some(
                "Линейная регрессия через нормальное уравнение. \
                 Сравнила с sklearn, результаты совпадают до 1e-6."
                    .to_string(),
            ),
            files: vec!["solution.ipynb".to_string()],
            feedback: None,
            rubric: Vec::new(),
        },
        Submission {
            id: "3".to_string(),
            assignment_id: "1".to_string(),
            student_id: "3".to_string(),
            student: students[2].clone(),
            status: SubmissionStatus::RevisionRequested,
            score: Some(52),
            max_score: 100,
            submitted_at: "2024-03-13T22:10:00+00:00".to_string(),
            graded_at: Some("2024-03-14T12:30:00+00:00".to_string()),
            content: Some("Частичная реализация, без нормализации признаков.".to_string()),
            files: vec!["main.py".to_string()],
            feedback: Some(
                "Не хватает нормализации и анализа ошибки. Посмотрите лекцию 4."
                    .to_string(),
            ),
            rubric: Vec::new(),
        },
        Submission {
            id: "4".to_string(),
            assignment_id: "1".to_string(),
            student_id: "4".to_string(),
            student: students[3].clone(),
            status: SubmissionStatus::Submitted,
            score: None,
            max_score: 100,
            submitted_at: "2024-03-15T11:55:00+00:00".to_string(),
            graded_at: None,
            content: Some("Реализация с L2-регуляризацией и кросс-валидацией.".to_string()),
            files: Vec::new(),
            feedback: None,
            rubric: Vec::new(),
        },
    ]
}

pub fn insights() -> Vec<Insight> {
    vec![
        Insight {
            id: "1".to_string(),
            course_id: "1".to_string(),
            kind: InsightKind::TopicMastery,
            title: "Освоение тем курса".to_string(),
            description: "Средний уровень освоения по темам".to_string(),
            data: InsightData {
                topics: vec![
                    TopicMastery {
                        topic: "Линейная регрессия".to_string(),
                        mastery: 82,
                        student_count: 42,
                    },
                    TopicMastery {
                        topic: "Градиентный спуск".to_string(),
                        mastery: 68,
                        student_count: 40,
                    },
                    TopicMastery {
                        topic: "Обратное распространение".to_string(),
                        mastery: 55,
                        student_count: 38,
                    },
                    TopicMastery {
                        topic: "Регуляризация".to_string(),
                        mastery: 48,
                        student_count: 35,
                    },
                ],
                ..Default::default()
            },
            recommendations: vec![
                "Провести дополнительное занятие по обратному распространению".to_string(),
                "Добавить практические задания по регуляризации".to_string(),
            ],
            created_at: "2024-03-15".to_string(),
        },
        Insight {
            id: "2".to_string(),
            course_id: "1".to_string(),
            kind: InsightKind::AtRisk,
            title: "Студенты в зоне риска".to_string(),
            description: "Студенты с низкой успеваемостью".to_string(),
            data: InsightData {
                at_risk_students: vec![
                    AtRiskStudent {
                        student_id: "5".to_string(),
                        student_name: "Дмитрий Соколов".to_string(),
                        risk_score: 0.35,
                        issues: vec![
                            "Низкие оценки по тестам".to_string(),
                            "Пропуски занятий".to_string(),
                        ],
                    },
                    AtRiskStudent {
                        student_id: "6".to_string(),
                        student_name: "Елена Морозова".to_string(),
                        risk_score: 0.42,
                        issues: vec!["Проблемы с пониманием нейронных сетей".to_string()],
                    },
                ],
                ..Default::default()
            },
            recommendations: vec![
                "Назначить индивидуальные консультации".to_string(),
                "Предложить дополнительные материалы".to_string(),
            ],
            created_at: "2024-03-15".to_string(),
        },
        Insight {
            id: "3".to_string(),
            course_id: "1".to_string(),
            kind: InsightKind::GapAnalysis,
            title: "Частые пробелы в знаниях".to_string(),
            description: "Темы, которые вызывают наибольшие трудности".to_string(),
            data: InsightData {
                common_gaps: vec![
                    CommonGap {
                        topic: "Обратное распространение ошибки".to_string(),
                        frequency: 28,
                        affected_students: 28,
                    },
                    CommonGap {
                        topic: "Регуляризация L1/L2".to_string(),
                        frequency: 22,
                        affected_students: 22,
                    },
                    CommonGap {
                        topic: "Оптимизация гиперпараметров".to_string(),
                        frequency: 18,
                        affected_students: 18,
                    },
                ],
                ..Default::default()
            },
            recommendations: vec![
                "Создать видео-урок по обратному распространению".to_string(),
                "Добавить интерактивные примеры регуляризации".to_string(),
            ],
            created_at: "2024-03-15".to_string(),
        },
    ]
}

/// Mensaje inicial del asistente.
pub fn chat_greeting() -> ChatMessage {
    ChatMessage::now(
        ChatRole::Assistant,
        "Привет! Я AI-ассистент SynapseAI. Помогу с проверкой заданий, \
         созданием фидбека и анализом успеваемости. Чем могу помочь?",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submissions_reference_existing_entities() {
        let assignment_ids: Vec<String> = assignments().iter().map(|a| a.id.clone()).collect();
        let student_ids: Vec<String> = students().iter().map(|s| s.id.clone()).collect();

        for submission in submissions() {
            assert!(assignment_ids.contains(&submission.assignment_id));
            assert!(student_ids.contains(&submission.student_id));
            assert_eq!(submission.student.id, submission.student_id);
        }
    }

    #[test]
    fn assignments_reference_existing_courses() {
        let course_ids: Vec<String> = courses().iter().map(|c| c.id.clone()).collect();
        for assignment in assignments() {
            assert!(course_ids.contains(&assignment.course_id));
        }
    }

    #[test]
    fn rubric_scores_add_up() {
        let graded = &submissions()[0];
        let earned: u32 = graded
            .rubric
            .iter()
            .filter_map(|item| item.earned_points)
            .sum();
        assert_eq!(Some(earned), graded.score);
    }

    #[test]
    fn filter_demo_covers_every_status() {
        let all = assignments();
        for status in [
            AssignmentStatus::Draft,
            AssignmentStatus::Published,
            AssignmentStatus::Closed,
        ] {
            assert!(all.iter().any(|a| a.status == status));
        }
    }
}
