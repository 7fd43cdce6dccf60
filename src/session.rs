//! JS-facing session control. The face-analysis SDK lives on the JavaScript
//! side; its callbacks forward into these exports:
//!
//! - `onInitializeSuccess`      -> `detector_ready(config_json)`
//! - `onImageResultsSuccess`    -> `report_frame(..)`, `draw_emoji(..)`, `classification(..)`
//! - `onWebcamConnectSuccess` / `onWebcamConnectFailure` -> `webcam_connected(ok)`
//! - `onStopSuccess`            -> `detector_stopped()`
//! - start / stop / reset / pass buttons -> `start_session()` / `stop_session()` / `reset_game()` / `pass_target()`
//!
//! One game lives per page, held in a thread local like any other wasm global.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::config::GameConfig;
use crate::dom::{self, DomScoreboard, LOGS_ID, RESULTS_ID};
use crate::emoji::EmojiCode;
use crate::face;
use crate::game::MatchTimer;
use crate::scoreboard::dispatch;

struct Session {
    timer: MatchTimer,
    board: DomScoreboard,
    running: bool,
}

/// The single animation-frame callback, reused for every frame.
struct FrameLoop {
    callback: Closure<dyn FnMut(f64)>,
    pending: Option<i32>,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
    static FRAME_LOOP: RefCell<Option<FrameLoop>> = const { RefCell::new(None) };
}

fn with_session<T>(f: impl FnOnce(&mut Session) -> T) -> Option<T> {
    SESSION.with(|cell| cell.borrow_mut().as_mut().map(f))
}

#[cfg(feature = "serde_json")]
fn load_config(config_json: Option<String>) -> Result<GameConfig, JsValue> {
    match config_json {
        Some(json) if !json.trim().is_empty() => Ok(GameConfig::from_json(&json)?),
        _ => Ok(GameConfig::default().validate()?),
    }
}

#[cfg(not(feature = "serde_json"))]
fn load_config(config_json: Option<String>) -> Result<GameConfig, JsValue> {
    if config_json.is_some() {
        console_log!("config override ignored: built without serde_json");
    }
    Ok(GameConfig::default().validate()?)
}

/// The detector finished initializing: build a fresh game and start drawing.
#[wasm_bindgen]
pub fn detector_ready(config_json: Option<String>) -> Result<(), JsValue> {
    let config = load_config(config_json)?;
    let mut board = DomScoreboard::new()?;
    let mut timer = MatchTimer::with_config(config);
    dispatch(&mut board, &timer.reset());
    dom::log_line(LOGS_ID, "The detector reports initialized");
    dom::show_face_canvas();

    SESSION.with(|cell| {
        *cell.borrow_mut() = Some(Session {
            timer,
            board,
            running: true,
        });
    });
    schedule_frame();
    Ok(())
}

#[wasm_bindgen]
pub fn start_session() {
    dom::clear_node(LOGS_ID);
    if with_session(|s| s.running = true).is_some() {
        schedule_frame();
    }
    dom::log_line(LOGS_ID, "Start button pressed");
}

#[wasm_bindgen]
pub fn stop_session() {
    dom::log_line(LOGS_ID, "Stop button pressed");
    with_session(|s| s.running = false);
    cancel_frame();
}

#[wasm_bindgen]
pub fn reset_game() {
    dom::log_line(LOGS_ID, "Reset button pressed");
    dom::clear_node(RESULTS_ID);
    dom::clear_node(LOGS_ID);
    if with_session(|s| dispatch(&mut s.board, &s.timer.reset())).is_none() {
        console_log!("reset before detector_ready; nothing to reset");
    }
}

#[wasm_bindgen]
pub fn pass_target() {
    with_session(|s| dispatch(&mut s.board, &s.timer.pass()));
}

#[wasm_bindgen]
pub fn webcam_connected(ok: bool) {
    if ok {
        dom::log_line(LOGS_ID, "Webcam access allowed");
    } else {
        dom::log_line(LOGS_ID, "Webcam access denied");
    }
}

#[wasm_bindgen]
pub fn detector_stopped() {
    dom::log_line(LOGS_ID, "The detector reports stopped");
    dom::clear_node(RESULTS_ID);
}

/// Replace the `#results` panel with this frame's summary.
#[wasm_bindgen]
pub fn report_frame(timestamp: f64, faces: u32, dominant_emoji: Option<String>) {
    dom::clear_node(RESULTS_ID);
    for line in face::frame_report(timestamp, faces, dominant_emoji.as_deref()) {
        dom::append_line(RESULTS_ID, &line);
    }
}

/// One classifier result for the first detected face.
#[wasm_bindgen]
pub fn classification(dominant_emoji: &str, timestamp_ms: f64) {
    let Some(label) = EmojiCode::from_glyph(dominant_emoji) else {
        console_log!("empty dominant emoji ignored");
        return;
    };
    with_session(|s| {
        if s.running {
            let events = s.timer.on_classification(label, timestamp_ms);
            dispatch(&mut s.board, &events);
        }
    });
}

/// Draw the dominant emoji above the face. `feature_points` is the SDK's
/// point list flattened as `[x0, y0, x1, y1, ..]`.
#[wasm_bindgen]
pub fn draw_emoji(dominant_emoji: &str, feature_points: &[f64]) {
    let Some((x, y)) = face::emoji_anchor(feature_points) else {
        return;
    };
    if let Some((_, ctx)) = dom::face_canvas() {
        dom::draw_dominant_emoji(&ctx, dominant_emoji, x, y);
    }
}

/// `[correct, total]` for the host page.
#[wasm_bindgen]
pub fn score() -> Vec<u32> {
    with_session(|s| {
        let sc = s.timer.score();
        vec![sc.correct, sc.total]
    })
    .unwrap_or_else(|| vec![0, 0])
}

/// Whether an animation frame is queued for the overlay loop.
#[wasm_bindgen]
pub fn render_loop_active() -> bool {
    FRAME_LOOP.with(|cell| cell.borrow().as_ref().is_some_and(|l| l.pending.is_some()))
}

#[wasm_bindgen]
extern "C" {
    // Same clock the page stamps classifications with.
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

fn render_tick() {
    let now = date_now();
    let overlay = with_session(|s| {
        if s.running && s.timer.celebrating(now) {
            Some(s.timer.config().celebration_text.clone())
        } else {
            None
        }
    })
    .flatten();
    if let Some(text) = overlay {
        if let Some((canvas, ctx)) = dom::face_canvas() {
            dom::draw_congrats(&canvas, &ctx, &text);
        }
    }
}

fn on_frame(_ts: f64) {
    FRAME_LOOP.with(|cell| {
        if let Some(lp) = cell.borrow_mut().as_mut() {
            lp.pending = None;
        }
    });
    if !with_session(|s| s.running).unwrap_or(false) {
        return;
    }
    render_tick();
    schedule_frame();
}

// Queue the next frame unless one is already pending.
fn schedule_frame() {
    let Some(w) = window() else { return };
    FRAME_LOOP.with(|cell| {
        let mut slot = cell.borrow_mut();
        let lp = slot.get_or_insert_with(|| FrameLoop {
            callback: Closure::wrap(Box::new(on_frame) as Box<dyn FnMut(f64)>),
            pending: None,
        });
        if lp.pending.is_none() {
            lp.pending = w
                .request_animation_frame(lp.callback.as_ref().unchecked_ref())
                .ok();
        }
    });
}

fn cancel_frame() {
    FRAME_LOOP.with(|cell| {
        if let Some(id) = cell.borrow_mut().as_mut().and_then(|lp| lp.pending.take()) {
            if let Some(w) = window() {
                w.cancel_animation_frame(id).ok();
            }
        }
    });
}
