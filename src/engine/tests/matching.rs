use super::common::*;
use crate::engine::{AssessmentEngine, EngineConfig, MatchWeights};

#[test]
fn nonsense_weights_fall_back_to_defaults() {
    assert_eq!(
        MatchWeights::new(f64::NAN, -1.0, 0.5),
        MatchWeights::default()
    );
    assert_eq!(MatchWeights::new(0.0, 0.0, 0.0), MatchWeights::default());

    let custom = MatchWeights::new(0.5, 0.3, 0.2);
    assert_eq!(custom.interest, 0.5);
}

#[test]
fn custom_weights_shift_the_blend() {
    let respondent = profile(100.0, &[], &[("investigative", 0.0)]);
    let careers = vec![career("c-1", "Researcher", &[("I", 80.0)], &[])];

    let mut config = EngineConfig::default();
    config.weights = MatchWeights::new(0.5, 0.25, 0.25);
    let weighted = AssessmentEngine::new(config).rank(&respondent, &careers);
    let default = engine().rank(&respondent, &careers);

    // Interest similarity is 20 here, aptitude 100; weighting interest more
    // heavily must drag the blend down.
    assert!(weighted[0].match_percentage < default[0].match_percentage);
}

#[test]
fn interest_similarity_is_weighted_toward_central_codes() {
    let respondent = profile(
        0.0,
        &[],
        &[("investigative", 80.0), ("social", 20.0)],
    );
    let careers = vec![career(
        "c-1",
        "Research Scientist",
        &[("I", 90.0), ("S", 70.0)],
        &[],
    )];

    let matches = engine().rank(&respondent, &careers);

    // Similarities: I -> 90 at weight 0.9, S -> 50 at weight 0.7.
    let expected = (90.0 * 0.9 + 50.0 * 0.7) / 1.6;
    let factors = matches[0].factors;
    assert!((factors.interest - expected).abs() < 1e-9);
    assert!(
        factors.interest > (90.0 + 50.0) / 2.0,
        "the central code must pull the average above the unweighted mean"
    );
}

#[test]
fn match_list_is_sorted_descending_within_bounds() {
    let respondent = profile(
        70.0,
        &[("openness", 80.0)],
        &[("investigative", 90.0), ("realistic", 10.0)],
    );
    let careers = vec![
        career("c-1", "Mismatch", &[("R", 95.0)], &[("openness", 5.0)]),
        career("c-2", "Strong", &[("I", 90.0)], &[("openness", 80.0)]),
        career("c-3", "Middling", &[("I", 50.0)], &[("openness", 40.0)]),
    ];

    let matches = engine().rank(&respondent, &careers);

    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0].career.title, "Strong");
    for window in matches.windows(2) {
        assert!(window[0].match_percentage >= window[1].match_percentage);
    }
    for career_match in &matches {
        assert!((0.0..=100.0).contains(&career_match.match_percentage));
    }
}

#[test]
fn tied_matches_keep_catalog_order() {
    let respondent = profile(50.0, &[("openness", 50.0)], &[("social", 50.0)]);
    let careers = vec![
        career("c-1", "First", &[("S", 60.0)], &[("openness", 50.0)]),
        career("c-2", "Second", &[("S", 60.0)], &[("openness", 50.0)]),
    ];

    let matches = engine().rank(&respondent, &careers);

    assert_eq!(matches[0].match_percentage, matches[1].match_percentage);
    assert_eq!(matches[0].career.title, "First");
    assert_eq!(matches[1].career.title, "Second");
}

#[test]
fn career_without_interest_requirements_is_not_penalized() {
    let respondent = profile(60.0, &[("openness", 50.0)], &[]);
    let careers = vec![career("c-1", "Generalist", &[], &[("openness", 50.0)])];

    let matches = engine().rank(&respondent, &careers);

    // Personality similarity 100 at weight 0.35 plus aptitude 60 at 0.25,
    // renormalized over the contributing 0.60.
    let expected = (100.0 * 0.35 + 60.0 * 0.25) / 0.60;
    assert!((matches[0].match_percentage - expected).abs() < 1e-9);
    assert_eq!(matches[0].factors.interest, 0.0);
}

#[test]
fn all_zero_interest_vector_is_excluded_like_an_empty_one() {
    let respondent = profile(60.0, &[("openness", 50.0)], &[("social", 80.0)]);
    let empty = vec![career("c-1", "NoReqs", &[], &[("openness", 50.0)])];
    let zeroed = vec![career("c-1", "NoReqs", &[("S", 0.0)], &[("openness", 50.0)])];

    let engine = engine();
    let from_empty = engine.rank(&respondent, &empty);
    let from_zeroed = engine.rank(&respondent, &zeroed);

    assert_eq!(
        from_empty[0].match_percentage,
        from_zeroed[0].match_percentage
    );
}

#[test]
fn empty_career_catalog_yields_empty_match_list() {
    let respondent = profile(50.0, &[], &[]);
    assert!(engine().rank(&respondent, &[]).is_empty());
}

#[test]
fn zero_profile_still_ranks_deterministically() {
    let respondent = profile(0.0, &[], &[]);
    let careers = vec![
        career("c-1", "Demanding", &[("I", 100.0)], &[("openness", 100.0)]),
        career("c-2", "Modest", &[("I", 20.0)], &[("openness", 10.0)]),
    ];

    let matches = engine().rank(&respondent, &careers);

    assert_eq!(matches.len(), 2);
    // Modest requirements sit closer to an all-zero profile.
    assert_eq!(matches[0].career.title, "Modest");
    for career_match in &matches {
        assert!((0.0..=100.0).contains(&career_match.match_percentage));
    }
}

#[test]
fn missing_profile_dimensions_read_as_zero() {
    let respondent = profile(0.0, &[], &[("investigative", 40.0)]);
    let careers = vec![career("c-1", "Counselor", &[("S", 80.0)], &[])];

    let matches = engine().rank(&respondent, &careers);

    // Social reads 0, similarity 100 - 80 = 20 at weight 0.8, blended with
    // the always-present zero aptitude component.
    let interest = matches[0].factors.interest;
    assert!((interest - 20.0).abs() < 1e-9);
}
