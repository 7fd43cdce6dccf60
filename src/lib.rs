//! Mimic Me core crate.
//!
//! A webcam party game: the page shows a target emoji and the player has to
//! pull that face. A third-party face-analysis SDK (JavaScript side) reports
//! the dominant emoji for every processed frame; this crate decides when the
//! expression has been held long enough to score and keeps the scoreboard.
//!
//! The game rules (`game`, `emoji`, `config`, `rng`, `scoreboard`, `face`) are plain
//! Rust and run natively under `cargo test`. `session` and `dom` are the wasm
//! bridge used by the page.

use wasm_bindgen::prelude::*;

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format_args!($($t)*).to_string().into()))
}

pub mod config;
pub mod emoji;
pub mod face;
pub mod game;
pub mod rng;
pub mod scoreboard;

mod dom;
mod session;

pub use config::{ConfigError, GameConfig};
pub use emoji::{EMOJIS, EmojiCode};
pub use face::{emoji_anchor, frame_report};
pub use game::{GameEvent, MatchTimer, Score, Streak};
pub use rng::{IndexSource, OsRandom, Sequence};
pub use scoreboard::{Scoreboard, dispatch, score_text};
pub use session::{
    classification, detector_ready, detector_stopped, draw_emoji, pass_target, render_loop_active,
    report_frame, reset_game, score, start_session, stop_session, webcam_connected,
};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
