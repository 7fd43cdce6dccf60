//! Renderer contract: whatever shows the target, the score and the match
//! celebration implements `Scoreboard`.

use crate::emoji::EmojiCode;
use crate::game::GameEvent;

pub trait Scoreboard {
    fn display_target(&mut self, target: EmojiCode);
    fn display_score(&mut self, correct: u32, total: u32);
    fn display_match_celebration(&mut self);
}

/// Forward `events` to `board` in order.
pub fn dispatch<S: Scoreboard + ?Sized>(board: &mut S, events: &[GameEvent]) {
    for event in events {
        match *event {
            GameEvent::TargetChanged(target) => board.display_target(target),
            GameEvent::ScoreChanged(score) => board.display_score(score.correct, score.total),
            GameEvent::Matched => board.display_match_celebration(),
        }
    }
}

pub fn score_text(correct: u32, total: u32) -> String {
    format!("Score: {correct} / {total}")
}
