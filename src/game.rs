//! Expression-matching state machine.
//!
//! The classifier feeds one `(label, timestamp)` observation at a time. A point
//! is awarded once the same label has been observed continuously for longer
//! than the configured hold window while equalling the current target:
//!
//! ```text
//! Idle --observe(l, t)--> Tracking(l, t)
//! Tracking(l, t0) --observe(m != l)--> Idle
//! Tracking(l, t0) --observe(l, t), t - t0 > hold, l == target--> Idle (+1 correct)
//! ```
//!
//! Single-frame misclassifications break the streak, so a brief flicker costs
//! the player the time already spent. There is no credit for non-contiguous time.

use crate::config::GameConfig;
use crate::emoji::{EMOJIS, EmojiCode};
use crate::rng::{IndexSource, OsRandom};

/// Outbound notifications for the renderer, in the order they occurred.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    TargetChanged(EmojiCode),
    ScoreChanged(Score),
    Matched,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

/// Stability tracking for the most recently observed label.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Streak {
    #[default]
    Idle,
    Tracking { label: EmojiCode, since: f64 },
}

pub struct MatchTimer<R = OsRandom> {
    config: GameConfig,
    source: R,
    target: EmojiCode,
    streak: Streak,
    score: Score,
    celebrate_until: Option<f64>,
}

impl MatchTimer<OsRandom> {
    pub fn with_config(config: GameConfig) -> Self {
        Self::new(config, OsRandom)
    }
}

impl<R: IndexSource> MatchTimer<R> {
    /// An empty `config.emojis` draws from the built-in `EMOJIS` instead.
    pub fn new(config: GameConfig, mut source: R) -> Self {
        let target = draw(&config, &mut source);
        Self {
            config,
            source,
            target,
            streak: Streak::Idle,
            score: Score::default(),
            celebrate_until: None,
        }
    }

    pub fn target(&self) -> EmojiCode {
        self.target
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn streak(&self) -> Streak {
        self.streak
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Zero the score, drop streak and celebration state, pick a fresh target.
    pub fn reset(&mut self) -> Vec<GameEvent> {
        self.score = Score::default();
        self.streak = Streak::Idle;
        self.celebrate_until = None;
        let mut events = self.pick_next_target();
        events.push(GameEvent::ScoreChanged(self.score));
        events
    }

    pub fn pick_next_target(&mut self) -> Vec<GameEvent> {
        self.target = draw(&self.config, &mut self.source);
        vec![GameEvent::TargetChanged(self.target)]
    }

    /// Feed one classifier observation taken at `now` (milliseconds).
    pub fn on_classification(&mut self, label: EmojiCode, now: f64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match self.streak {
            Streak::Idle => {
                self.streak = Streak::Tracking { label, since: now };
            }
            Streak::Tracking { label: prior, .. } if prior != label => {
                self.streak = Streak::Idle;
            }
            Streak::Tracking { since, .. } => {
                if now - since > self.config.hold_ms && label == self.target {
                    self.streak = Streak::Idle;
                    events.extend(self.pick_next_target());
                    self.score.correct += 1;
                    self.score.total += 1;
                    self.celebrate_until = Some(now + self.config.celebrate_ms);
                    events.push(GameEvent::ScoreChanged(self.score));
                    events.push(GameEvent::Matched);
                }
            }
        }
        self.expire_celebration(now);
        events
    }

    /// Forfeit the current target: counts as an attempt, not a success.
    pub fn pass(&mut self) -> Vec<GameEvent> {
        self.streak = Streak::Idle;
        self.score.total += 1;
        let mut events = self.pick_next_target();
        events.push(GameEvent::ScoreChanged(self.score));
        events
    }

    /// Whether the celebration overlay should be drawn at `now`. Clears the
    /// window once it has elapsed, so call it once per rendered frame.
    pub fn celebrating(&mut self, now: f64) -> bool {
        self.expire_celebration(now);
        self.celebrate_until.is_some()
    }

    fn expire_celebration(&mut self, now: f64) {
        if self.celebrate_until.is_some_and(|until| now > until) {
            self.celebrate_until = None;
        }
    }
}

fn draw<R: IndexSource>(config: &GameConfig, source: &mut R) -> EmojiCode {
    // An unvalidated config may carry an empty set; fall back to the built-in one.
    let Some(last) = config.emojis.len().checked_sub(1) else {
        return EMOJIS[source.next_index(EMOJIS.len()).min(EMOJIS.len() - 1)];
    };
    let idx = source.next_index(last + 1).min(last);
    config.emojis[idx]
}
