use std::collections::BTreeMap;

use crate::engine::domain::{
    Answer, CareerId, CareerProfile, ProfileVector, Question, QuestionCatalog, QuestionId,
    QuestionKind,
};
use crate::engine::{AssessmentEngine, EngineConfig};

pub(super) fn aptitude_question(id: &str, sub_domain: &str, correct_option: u32) -> Question {
    Question {
        id: QuestionId(id.to_string()),
        kind: QuestionKind::Aptitude {
            sub_domain: sub_domain.to_string(),
            correct_option,
            option_count: Some(4),
        },
    }
}

pub(super) fn personality_question(id: &str, trait_name: &str, reversed: bool) -> Question {
    Question {
        id: QuestionId(id.to_string()),
        kind: QuestionKind::Personality {
            trait_name: trait_name.to_string(),
            reversed,
        },
    }
}

pub(super) fn interest_question(id: &str, riasec_code: &str) -> Question {
    Question {
        id: QuestionId(id.to_string()),
        kind: QuestionKind::Interest {
            riasec_code: riasec_code.to_string(),
        },
    }
}

pub(super) fn answer(question_id: &str, value: u32) -> Answer {
    Answer {
        question_id: QuestionId(question_id.to_string()),
        respondent_id: None,
        value,
        time_spent_seconds: None,
    }
}

pub(super) fn timed_answer(question_id: &str, value: u32, seconds: u32) -> Answer {
    Answer {
        time_spent_seconds: Some(seconds),
        ..answer(question_id, value)
    }
}

pub(super) fn catalog(questions: Vec<Question>) -> QuestionCatalog {
    QuestionCatalog::new(questions).expect("valid catalog")
}

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::new(EngineConfig::default())
}

pub(super) fn career(
    id: &str,
    title: &str,
    riasec: &[(&str, f64)],
    personality_fit: &[(&str, f64)],
) -> CareerProfile {
    CareerProfile {
        id: CareerId(id.to_string()),
        title: title.to_string(),
        description: format!("{title} description"),
        riasec_profile: to_map(riasec),
        personality_fit: to_map(personality_fit),
    }
}

pub(super) fn profile(
    aptitude_overall: f64,
    personality: &[(&str, f64)],
    interest: &[(&str, f64)],
) -> ProfileVector {
    ProfileVector {
        aptitude_overall,
        personality: to_map(personality),
        interest: to_map(interest),
    }
}

fn to_map(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

/// Four aptitude sub-domains with five questions each; correct option is
/// always index 0.
pub(super) fn aptitude_catalog() -> QuestionCatalog {
    let mut questions = Vec::new();
    for sub_domain in ["logical", "numerical", "verbal", "spatial"] {
        for index in 0..5 {
            questions.push(aptitude_question(
                &format!("{sub_domain}-{index}"),
                sub_domain,
                0,
            ));
        }
    }
    catalog(questions)
}

/// Answers 3 of 5 questions correctly per sub-domain at 50 seconds each.
pub(super) fn aptitude_scenario_answers() -> Vec<Answer> {
    let mut answers = Vec::new();
    for sub_domain in ["logical", "numerical", "verbal", "spatial"] {
        for index in 0..5 {
            let value = if index < 3 { 0 } else { 1 };
            answers.push(timed_answer(&format!("{sub_domain}-{index}"), value, 50));
        }
    }
    answers
}
