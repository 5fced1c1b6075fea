use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use word_morph::survey::random_pairs;
use word_morph::{survey, GameConfig, GameSession, Lexicon};

fn get_test_lexicon() -> Lexicon {
    Lexicon::build("cold cord card ward warm word worm cat cot cog dog dot zzz")
}

fn pair(a: &str, b: &str) -> (String, String) {
    (a.to_string(), b.to_string())
}

#[test]
fn test_survey_counts_outcomes() {
    let lexicon = get_test_lexicon();
    let pairs = vec![pair("cat", "dog"), pair("cold", "warm"), pair("cat", "zzz"), pair("dot", "dot")];

    let report = survey(&lexicon, &GameConfig::default(), &pairs);

    assert_eq!(report.found, 3);
    assert_eq!(report.not_found, 1);
    assert_eq!(report.exceeded, 0);
    assert_eq!(report.total(), 4);
    assert_eq!(report.distribution, vec![(0, 1), (3, 1), (4, 1)]);
    assert_eq!(report.average_moves(), Some(7.0 / 3.0));
}

#[test]
fn test_survey_reports_exceeded_separately() {
    let lexicon = get_test_lexicon();
    let config = GameConfig { expansion_ceiling: 1, ..GameConfig::default() };
    let report = survey(&lexicon, &config, &[pair("cold", "warm")]);

    assert_eq!(report.exceeded, 1);
    assert_eq!(report.found, 0);
    assert_eq!(report.average_moves(), None);
}

#[test]
fn test_random_pairs_for_survey() {
    let lexicon = Arc::new(get_test_lexicon());
    let session = GameSession::new(lexicon.clone(), GameConfig::default());
    let mut rng = StdRng::seed_from_u64(3);

    let pairs = random_pairs(&session, &mut rng, 25).unwrap();
    assert_eq!(pairs.len(), 25);

    let report = survey(&lexicon, session.config(), &pairs);
    assert_eq!(report.total(), 25);
    assert_eq!(report.exceeded, 0);
}
