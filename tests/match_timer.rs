// Integration tests (native) for the `mimic-me` game rules.
// These avoid wasm/browser APIs and drive MatchTimer through its public API.

use mimic_me::{
    EMOJIS, EmojiCode, GameConfig, GameEvent, MatchTimer, OsRandom, Score, Scoreboard, Sequence,
    dispatch,
};

const A: EmojiCode = EMOJIS[2];
const B: EmojiCode = EMOJIS[7];

// First target is A, later ones cycle through the rest of the set.
fn timer_targeting_a() -> MatchTimer<Sequence> {
    MatchTimer::new(GameConfig::default(), Sequence::new(vec![2, 0, 1, 3, 4, 5, 6]))
}

fn matched(events: &[GameEvent]) -> bool {
    events.contains(&GameEvent::Matched)
}

#[test]
fn held_target_matches_after_hold_window() {
    let mut t = timer_targeting_a();
    assert_eq!(t.target(), A);
    assert!(!matched(&t.on_classification(A, 0.0)));
    assert!(!matched(&t.on_classification(A, 1500.0)));
    assert!(matched(&t.on_classification(A, 2100.0)));
    assert_eq!(t.score(), Score { correct: 1, total: 1 });
    assert_ne!(t.target(), A);
}

#[test]
fn interruption_restarts_hold_window() {
    let mut t = timer_targeting_a();
    // the differing label breaks the streak, the next one starts a new streak at 1100
    for (label, ts) in [(A, 0.0), (B, 1000.0), (A, 1100.0), (A, 3000.0)] {
        assert!(!matched(&t.on_classification(label, ts)), "no match at {ts}");
    }
    assert!(matched(&t.on_classification(A, 3200.0)));
    assert_eq!(t.score(), Score { correct: 1, total: 1 });
}

#[test]
fn single_glitch_frame_costs_the_streak() {
    let mut t = timer_targeting_a();
    t.on_classification(A, 0.0);
    t.on_classification(A, 1900.0);
    t.on_classification(B, 1950.0);
    // total span exceeds the window but the streak restarted here
    assert!(!matched(&t.on_classification(A, 2500.0)));
    assert!(!matched(&t.on_classification(A, 4400.0)));
    assert!(matched(&t.on_classification(A, 4501.0)));
}

#[test]
fn closely_spaced_frames_do_not_match_early() {
    let mut t = timer_targeting_a();
    let mut ts = 0.0;
    while ts <= 2000.0 {
        assert!(!matched(&t.on_classification(A, ts)), "early match at {ts}");
        ts += 33.0;
    }
    assert!(matched(&t.on_classification(A, ts)));
}

#[test]
fn pass_increments_total_only() {
    let mut t = timer_targeting_a();
    t.on_classification(A, 0.0);
    t.on_classification(A, 2100.0);
    t.pass();
    assert_eq!(t.score(), Score { correct: 1, total: 2 });
    let before = t.target();
    let events = t.pass();
    assert_eq!(t.score(), Score { correct: 1, total: 3 });
    assert!(!matched(&events));
    assert!(matches!(events[0], GameEvent::TargetChanged(code) if code == t.target()));
    assert_ne!(t.target(), before);
}

#[test]
fn reset_zeroes_score_from_any_state() {
    let mut t = MatchTimer::with_config(GameConfig::default());
    t.pass();
    t.pass();
    t.on_classification(A, 10.0);
    t.reset();
    assert_eq!(t.score(), Score::default());
    assert!(EMOJIS.contains(&t.target()));
    t.reset();
    assert_eq!(t.score(), Score::default());
}

#[test]
fn score_invariants_hold_over_a_long_random_session() {
    let mut t = MatchTimer::new(GameConfig::default(), OsRandom);
    let mut rng = OsRandom;
    let mut last_total = 0;
    let mut now = 0.0;
    for step in 0..5000 {
        use mimic_me::IndexSource;
        now += 40.0 + rng.next_index(400) as f64;
        if step % 97 == 0 {
            t.pass();
        } else {
            // bias toward the current target so matches actually happen
            let label = if rng.next_index(10) < 8 {
                t.target()
            } else {
                EMOJIS[rng.next_index(EMOJIS.len())]
            };
            t.on_classification(label, now);
        }
        let s = t.score();
        assert!(s.correct <= s.total);
        assert!(s.total >= last_total);
        assert!(EMOJIS.contains(&t.target()));
        last_total = s.total;
    }
    assert!(t.score().correct > 0);
}

#[test]
fn custom_config_windows_apply() {
    let cfg = GameConfig {
        hold_ms: 500.0,
        celebrate_ms: 200.0,
        emojis: vec![A],
        ..GameConfig::default()
    }
    .validate()
    .unwrap();
    let mut t = MatchTimer::with_config(cfg);
    assert_eq!(t.target(), A);
    t.on_classification(A, 0.0);
    assert!(matched(&t.on_classification(A, 501.0)));
    assert!(t.celebrating(701.0));
    assert!(!t.celebrating(701.5));
}

#[derive(Default)]
struct Board {
    target: Option<EmojiCode>,
    score: (u32, u32),
    celebrations: usize,
}

impl Scoreboard for Board {
    fn display_target(&mut self, target: EmojiCode) {
        self.target = Some(target);
    }
    fn display_score(&mut self, correct: u32, total: u32) {
        self.score = (correct, total);
    }
    fn display_match_celebration(&mut self) {
        self.celebrations += 1;
    }
}

#[test]
fn scoreboard_follows_the_game() {
    let mut t = timer_targeting_a();
    let mut board = Board::default();
    dispatch(&mut board, &t.reset());
    assert_eq!(board.score, (0, 0));
    assert_eq!(board.target, Some(t.target()));

    let target = t.target();
    dispatch(&mut board, &t.on_classification(target, 0.0));
    dispatch(&mut board, &t.on_classification(target, 2001.0));
    dispatch(&mut board, &t.pass());
    assert_eq!(board.score, (1, 2));
    assert_eq!(board.celebrations, 1);
    assert_eq!(board.target, Some(t.target()));
}
