//! Integration tests for the game lifecycle through the facade crate.

use typefall::core::{GameConfig, GameState, Level, LevelCatalog};
use typefall::types::{GameStatus, MAX_ACTIVE_WORDS, MAX_HP};

fn catalog(levels: &[(u32, u32, &[&str])]) -> LevelCatalog {
    LevelCatalog::new(
        levels
            .iter()
            .map(|&(n, fall, words)| Level::new(n, fall, words))
            .collect(),
    )
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(LevelCatalog::reference(), 12345);
    assert_eq!(state.status(), GameStatus::Idle);
    assert!(state.active_words().is_empty());

    state.start(0);
    assert_eq!(state.status(), GameStatus::Running);
    assert_eq!(state.hp(), MAX_HP);
    assert_eq!(state.active_words().len(), 1);
    assert_eq!(state.level_number(), 1);
}

#[test]
fn test_typing_every_word_wins() {
    let mut state = GameState::new(LevelCatalog::reference(), 7);
    state.start(0);

    let total = LevelCatalog::reference().total_words() as u32;
    let mut now = 0;
    while state.status() == GameStatus::Running {
        now += 250;
        let word = state.active_words()[0].text.clone();
        assert_eq!(state.submit(&word, now), Some(word));
    }

    assert_eq!(state.status(), GameStatus::Victory);
    assert_eq!(state.words_matched(), total);
    assert_eq!(state.words_expired(), 0);
    assert_eq!(state.hp(), MAX_HP);
    assert_eq!(state.completion_ms(), Some(now));
}

#[test]
fn test_ignoring_words_ends_in_game_over() {
    let mut state = GameState::new(LevelCatalog::reference(), 7);
    state.start(0);

    let mut now = 0;
    let mut prev_hp = state.hp();
    while state.status() == GameStatus::Running {
        now += 500;
        state.advance(now);
        assert!(state.active_words().len() <= MAX_ACTIVE_WORDS);
        assert!(state.hp() <= prev_hp && state.hp() <= state.max_hp());
        prev_hp = state.hp();
        assert!(now < 1_000_000, "game never ended");
    }

    assert_eq!(state.status(), GameStatus::GameOver);
    assert_eq!(state.hp(), 0);
    assert_eq!(state.completion_ms(), None);
    assert!(state.words_expired() >= MAX_HP / 10);
}

#[test]
fn test_hp_never_rises_while_matching_some_words() {
    let mut state = GameState::new(LevelCatalog::reference(), 21);
    state.start(0);

    let mut now = 0;
    let mut prev_hp = state.hp();
    for tick in 1..=2000u64 {
        if state.status() != GameStatus::Running {
            break;
        }
        now += 100;
        // Match the oldest word every 3s; the rest fall.
        if tick % 30 == 0 {
            if let Some(word) = state.active_words().first().map(|w| w.text.clone()) {
                assert_eq!(state.submit(&word, now), Some(word));
                assert_eq!(state.hp(), prev_hp);
            }
        }
        state.advance(now);
        assert!(state.hp() <= prev_hp && state.hp() <= state.max_hp());
        assert!(state.active_words().len() <= MAX_ACTIVE_WORDS);
        prev_hp = state.hp();
    }

    assert!(state.words_matched() > 0);
    assert!(state.words_expired() > 0);
}

#[test]
fn test_terminal_states_are_frozen() {
    let mut state = GameState::new(catalog(&[(1, 1000, &["cat"])]), 1);
    state.start(0);
    assert_eq!(state.submit("cat", 400), Some("cat".into()));
    assert_eq!(state.status(), GameStatus::Victory);

    state.advance(60_000);
    assert_eq!(state.submit("cat", 60_001), None);
    assert_eq!(state.status(), GameStatus::Victory);
    assert_eq!(state.elapsed_ms(), 400);
}

#[test]
fn test_restart_after_game_over() {
    let mut state = GameState::new(catalog(&[(1, 100, &["a", "b", "c"])]), 1)
        .with_config(GameConfig {
            max_hp: 10,
            ..GameConfig::default()
        });
    state.start(0);
    state.advance(100);
    assert_eq!(state.status(), GameStatus::GameOver);
    let first_episode = state.episode_id();

    state.start(5000);
    assert_eq!(state.status(), GameStatus::Running);
    assert_eq!(state.hp(), 10);
    assert_eq!(state.episode_id(), first_episode + 1);
    assert_eq!(state.words_expired(), 0);
    assert_eq!(&*state.active_words()[0].text, "a");
    assert_eq!(state.active_words()[0].spawned_at_ms, 5000);
}

#[test]
fn test_periodic_spawns_fill_to_capacity() {
    let mut state = GameState::new(LevelCatalog::reference(), 3);
    state.start(0);

    for now in [2000, 4000, 6000, 8000] {
        state.advance(now);
    }
    assert_eq!(state.active_words().len(), MAX_ACTIVE_WORDS);

    // Full field: no spawn even though the interval elapsed.
    state.advance(8999);
    assert_eq!(state.active_words().len(), MAX_ACTIVE_WORDS);
    assert_eq!(state.words_spawned(), MAX_ACTIVE_WORDS as u32);
}

#[test]
fn test_matched_word_is_replaced_immediately() {
    let mut state = GameState::new(LevelCatalog::reference(), 3);
    state.start(0);
    let first = state.active_words()[0].text.clone();

    assert_eq!(state.submit(&first.to_uppercase(), 300), Some(first.clone()));
    assert_eq!(state.active_words().len(), 1);
    assert_ne!(state.active_words()[0].text, first);
    assert_eq!(state.active_words()[0].spawned_at_ms, 300);
    assert_eq!(state.last_spawn_ms(), 300);
}

#[test]
fn test_unmatched_submission_changes_nothing() {
    let mut state = GameState::new(LevelCatalog::reference(), 3);
    state.start(0);
    let before = state.snapshot(100);

    assert_eq!(state.submit("zebra", 100), None);
    assert_eq!(state.submit("   ", 100), None);
    assert_eq!(state.snapshot(100), before);
}

#[test]
fn test_duplicate_words_match_oldest_first() {
    let mut state = GameState::new(catalog(&[(1, 10_000, &["echo", "echo"])]), 9);
    state.start(0);
    state.advance(2000);
    assert_eq!(state.active_words().len(), 2);

    assert_eq!(state.submit("echo", 2500), Some("echo".into()));
    assert_eq!(state.active_words().len(), 1);
    assert_eq!(state.active_words()[0].spawned_at_ms, 2000);
}

#[test]
fn test_next_level_uses_its_fall_duration() {
    let mut state = GameState::new(catalog(&[(1, 1000, &["a"]), (2, 500, &["b"])]), 1);
    state.start(0);
    assert_eq!(state.active_words()[0].fall_ms, 1000);

    state.submit("a", 10);
    let word = &state.active_words()[0];
    assert_eq!(&*word.text, "b");
    assert_eq!(word.fall_ms, 500);
    assert_eq!(state.level_number(), 2);
}

#[test]
fn test_empty_levels_are_skipped() {
    let mut state = GameState::new(catalog(&[(1, 1000, &[]), (2, 800, &["only"])]), 1);
    state.start(0);
    assert_eq!(&*state.active_words()[0].text, "only");
    assert_eq!(state.active_words()[0].fall_ms, 800);
}

#[test]
fn test_empty_catalog_wins_on_first_advance() {
    let mut state = GameState::new(LevelCatalog::new(Vec::new()), 1);
    state.start(0);
    assert!(state.active_words().is_empty());

    state.advance(16);
    assert_eq!(state.status(), GameStatus::Victory);
}

#[test]
fn test_same_seed_same_placement() {
    let placements = |seed| {
        let mut state = GameState::new(LevelCatalog::reference(), seed);
        state.start(0);
        for now in [2000, 4000, 6000, 8000] {
            state.advance(now);
        }
        state
            .active_words()
            .iter()
            .map(|w| w.x_fraction)
            .collect::<Vec<_>>()
    };

    assert_eq!(placements(42), placements(42));
    for x in placements(42) {
        assert!((0.1..=0.9).contains(&x));
    }
}

#[test]
fn test_several_expiries_in_one_advance() {
    let mut state = GameState::new(catalog(&[(1, 1000, &["a", "b", "c", "d"])]), 1)
        .with_config(GameConfig {
            spawn_interval_ms: 100,
            ..GameConfig::default()
        });
    state.start(0);
    state.advance(100);
    state.advance(200);
    assert_eq!(state.active_words().len(), 3);

    // All three land together; the one word left takes a freed slot.
    state.advance(5000);
    assert_eq!(state.hp(), MAX_HP - 30);
    assert_eq!(state.words_expired(), 3);
    assert_eq!(state.active_words().len(), 1);
    assert_eq!(&*state.active_words()[0].text, "d");
}
