use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use word_morph::{
    EditMode, GameConfig, GameError, GameSession, Hint, Lexicon, MoveOutcome, NeighborGenerator,
    SearchError, WordError,
};

fn get_test_lexicon() -> Arc<Lexicon> {
    Arc::new(Lexicon::build(
        "cold cord card ward warm word worm cat cot cog dog dot cats zzz",
    ))
}

fn new_session() -> GameSession {
    GameSession::new(get_test_lexicon(), GameConfig::default())
}

#[test]
fn test_start_game() {
    let mut session = new_session();
    session.start_game(" Cold", "WARM").unwrap();

    assert!(session.is_active());
    assert_eq!(session.start(), Some("cold"));
    assert_eq!(session.target(), Some("warm"));
    assert_eq!(session.current_word(), Some("cold"));
    assert_eq!(session.path(), ["cold".to_string()]);
    assert_eq!(session.cap(), 12);
    assert_eq!(session.remaining_moves(), 12);
    assert!(!session.is_finished());
}

#[test]
fn test_endpoint_validation() {
    let mut session = new_session();

    assert_eq!(
        session.start_game("cat", "cold"),
        Err(GameError::LengthMismatch { start: 3, target: 4 })
    );
    assert_eq!(
        session.start_game("cole", "warm"),
        Err(GameError::NotInLexicon { word: "cole".to_string() })
    );
    assert!(matches!(
        session.start_game("c0ld", "warm"),
        Err(GameError::Word(WordError::InvalidCharacters { .. }))
    ));

    assert_eq!(session.toggle_length(4), Ok(false));
    assert_eq!(
        session.start_game("cold", "warm"),
        Err(GameError::LengthNotAllowed { len: 4 })
    );
    assert!(!session.is_active());
}

#[test]
fn test_flex_allows_different_lengths() {
    let mut session = new_session();
    session.set_mode(EditMode::Flex);
    session.start_game("cat", "cats").unwrap();
    assert_eq!(session.play("cats"), Ok(MoveOutcome::Reached));
}

#[test]
fn test_play_to_target() {
    let mut session = new_session();
    assert_eq!(session.play("cord"), Err(GameError::NotStarted));

    session.start_game("cold", "warm").unwrap();
    assert_eq!(
        session.play("warm"),
        Err(GameError::IllegalMove { from: "cold".to_string(), to: "warm".to_string() })
    );

    for word in ["cord", "card", "ward"] {
        assert_eq!(session.play(word), Ok(MoveOutcome::Advanced));
    }
    assert_eq!(session.play("warm"), Ok(MoveOutcome::Reached));
    assert!(session.is_finished());
    assert_eq!(session.path().len(), 5);
    assert_eq!(session.remaining_moves(), 8);
    assert_eq!(session.play("worm"), Err(GameError::AlreadyFinished));
}

#[test]
fn test_move_cap_enforced() {
    let config = GameConfig { cap_factor: 1, ..GameConfig::default() };
    let mut session = GameSession::new(get_test_lexicon(), config);
    session.start_game("cold", "warm").unwrap();
    assert_eq!(session.cap(), 4);

    for word in ["cord", "word", "worm", "word"] {
        session.play(word).unwrap();
    }
    assert_eq!(session.remaining_moves(), 0);
    assert_eq!(session.play("worm"), Err(GameError::CapExceeded { cap: 4 }));
    assert_eq!(session.hint(), Err(GameError::NoPath { cap: 0 }));
}

#[test]
fn test_hints_lead_to_target() {
    let mut session = new_session();
    session.start_game("cold", "warm").unwrap();
    assert_eq!(session.hint(), Ok(Hint::Next("cord".to_string())));

    let lexicon = get_test_lexicon();
    let generator = NeighborGenerator::new(&lexicon, EditMode::Classic);
    let mut moves = 0;
    while let Some((word, outcome)) = session.apply_hint().unwrap() {
        moves += 1;
        let path = session.path();
        assert!(generator.is_move(&path[path.len() - 2], &word));
        if outcome == MoveOutcome::Reached {
            break;
        }
    }
    assert_eq!(moves, 4);
    assert!(session.is_finished());
    assert_eq!(session.hint(), Ok(Hint::AtTarget));
}

#[test]
fn test_unreachable_target() {
    let mut session = new_session();
    session.start_game("cat", "zzz").unwrap();
    assert_eq!(session.hint(), Err(GameError::NoPath { cap: 9 }));
    assert_eq!(session.answer(), Err(GameError::NoPath { cap: 9 }));
}

#[test]
fn test_answer_is_remembered() {
    let mut session = new_session();
    session.start_game("cold", "warm").unwrap();
    session.play("cord").unwrap();

    let answer = session.answer().unwrap();
    assert_eq!(answer.moves(), 4);
    assert_eq!(answer.first(), Some("cold"));
    assert_eq!(session.last_answer(), Some(&answer));

    session.restart();
    assert!(!session.is_active());
    assert!(session.last_answer().is_none());
    assert!(session.path().is_empty());
}

#[test]
fn test_search_exceeded_is_not_no_path() {
    let config = GameConfig { expansion_ceiling: 1, ..GameConfig::default() };
    let mut session = GameSession::new(get_test_lexicon(), config);
    session.start_game("cold", "warm").unwrap();
    assert_eq!(
        session.answer(),
        Err(GameError::Search(SearchError::Exceeded { ceiling: 1 }))
    );
}

#[test]
fn test_random_pair_classic() {
    let session = new_session();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let (start, target) = session.random_pair(&mut rng).unwrap();
        assert_eq!(start.len(), target.len());
        assert_ne!(start, target);
        assert!(session.validate_endpoints(&start, &target).is_ok());
    }
}

#[test]
fn test_random_pair_flex_and_no_words() {
    let mut session = new_session();
    session.set_mode(EditMode::Flex);
    let mut rng = StdRng::seed_from_u64(7);
    let (start, target) = session.random_pair(&mut rng).unwrap();
    assert!(session.lexicon().contains(&start));
    assert!(session.lexicon().contains(&target));

    for len in [3, 4, 5] {
        session.toggle_length(len).unwrap();
    }
    assert!(session.allowed_lengths().is_empty());
    assert_eq!(session.random_pair(&mut rng), Err(GameError::NoWords));
}

#[test]
fn test_toggle_length_bounds() {
    let mut session = new_session();
    assert_eq!(session.toggle_length(2), Err(GameError::LengthNotAllowed { len: 2 }));
    assert_eq!(session.toggle_length(6), Ok(true));
    assert!(session.allowed_lengths().contains(&6));
}

#[test]
fn test_set_lexicon_resets_game() {
    let mut session = new_session();
    session.start_game("cold", "warm").unwrap();
    session.set_lexicon(Arc::new(Lexicon::build("cat cot")));

    assert!(!session.is_active());
    assert_eq!(session.lexicon().total_count(), 2);
    assert_eq!(
        session.start_game("cold", "warm"),
        Err(GameError::NotInLexicon { word: "cold".to_string() })
    );
}
