//! Integration specifications for the export intake path: CSV answer exports
//! and JSON catalogs flowing through to a scored report.

use std::io::Cursor;

use careerpath::engine::domain::AnswerIssue;
use careerpath::engine::{AssessmentEngine, EngineConfig};
use careerpath::intake::{
    career_catalog_from_reader, question_catalog_from_reader, AnswerImporter, CatalogIssue,
};

const QUESTIONS: &str = r#"[
    {"id": "apt-1", "section": "aptitude", "subDomain": "logical",
     "options": {"correctAnswer": 2, "choices": ["2", "4", "8", "16"]}},
    {"id": "apt-2", "section": "aptitude", "subDomain": "logical",
     "options": {"choices": ["a", "b", "c", "d"]}},
    {"id": "per-1", "section": "personality", "trait": "conscientiousness",
     "options": {"isReversed": false}},
    {"id": "per-2", "section": "personality", "trait": "conscientiousness",
     "options": {"isReversed": true}},
    {"id": "int-1", "section": "interest", "riasecCode": "I", "options": {}},
    {"id": "int-2", "section": "interest", "riasecCode": "S", "options": {}}
]"#;

const ANSWERS: &str = "\
Respondent,Question ID,Selected Option,Seconds Spent,Submitted At
r-77,apt-1,2,42,2026-04-10T09:00:00Z
r-77,apt-2,1,50,2026-04-10T09:01:00Z
r-77,per-1,3,,2026-04-10T09:02:00Z
r-77,per-2,1,,2026-04-10T09:03:00Z
r-77,int-1,4,,2026-04-10T09:04:00Z
r-77,int-1,2,,2026-04-10T08:30:00Z
r-77,int-2,3,,2026-04-10T09:05:00Z
r-99,apt-1,0,90,2026-04-10T10:00:00Z
";

const CAREERS: &str = r#"[
    {"id": "c-1", "title": "Research Scientist",
     "riasecProfile": {"I": 90.0, "S": 40.0},
     "personalityFit": {"conscientiousness": 80.0}},
    {"id": "c-2", "title": "Legacy Role", "active": false,
     "riasecProfile": {"C": 80.0}}
]"#;

#[test]
fn exported_files_flow_through_to_a_scored_report() {
    let (catalog, catalog_issues) =
        question_catalog_from_reader(Cursor::new(QUESTIONS)).expect("catalog loads");
    // apt-2 has no correct answer on record and must not be scored.
    assert!(matches!(
        catalog_issues.as_slice(),
        [CatalogIssue::MissingField { .. }]
    ));

    let imported =
        AnswerImporter::from_reader(Cursor::new(ANSWERS), Some("r-77")).expect("answers import");
    assert!(imported.notes.is_empty());
    // Six distinct questions for r-77; the duplicate int-1 row collapses.
    assert_eq!(imported.answers.len(), 6);

    let careers = career_catalog_from_reader(Cursor::new(CAREERS)).expect("careers load");
    assert_eq!(careers.len(), 1);

    let engine = AssessmentEngine::new(EngineConfig::default());
    let report = engine.assess(&catalog, &imported.answers, &careers);

    // apt-1 answered correctly in 42s: raw 100 for the one cataloged
    // question, capped adjusted.
    let logical = report.scores.aptitude.get("logical").expect("scored");
    assert_eq!(logical.correct, 1);
    assert_eq!(logical.total, 1);
    assert_eq!(logical.adjusted, 100.0);

    // Straight 3 and reversed 1 both contribute 4 of 5.
    let conscientiousness = report
        .scores
        .personality
        .get("conscientiousness")
        .expect("scored");
    assert!((conscientiousness - 80.0).abs() < 1e-9);

    // The later int-1 submission (value 4) wins over the earlier one.
    let investigative = report.scores.interest.get("investigative").expect("scored");
    assert!((investigative - 100.0).abs() < 1e-9);

    // The answer to the excluded apt-2 record surfaces as a diagnostic.
    match report.issues.as_slice() {
        [AnswerIssue::UnknownQuestion { question_id }] => {
            assert_eq!(question_id.0, "apt-2");
        }
        other => panic!("expected one unknown-question issue, got {other:?}"),
    }

    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].career.title, "Research Scientist");
    assert!(report.matches[0].match_percentage > 0.0);
    assert!(!report.narrative.recommendations.is_empty());
}

#[test]
fn respondent_filter_excludes_other_respondents() {
    let imported =
        AnswerImporter::from_reader(Cursor::new(ANSWERS), Some("r-99")).expect("answers import");

    assert_eq!(imported.answers.len(), 1);
    assert_eq!(imported.answers[0].question_id.0, "apt-1");
    assert_eq!(imported.answers[0].value, 0);
}
