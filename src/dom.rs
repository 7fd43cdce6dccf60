//! Browser-side rendering: DOM text for target / score / logs and canvas
//! overlays drawn on top of the camera feed.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, window};

use crate::emoji::EmojiCode;
use crate::face::EMOJI_FONT_PX;
use crate::scoreboard::{Scoreboard, score_text};

pub const TARGET_ID: &str = "target";
pub const SCORE_ID: &str = "score";
pub const LOGS_ID: &str = "logs";
pub const RESULTS_ID: &str = "results";
pub const CANVAS_ID: &str = "face_video_canvas";
pub const VIDEO_ID: &str = "face_video";

/// Writes game state into the page's `#target` and `#score` elements.
pub struct DomScoreboard {
    doc: Document,
}

impl DomScoreboard {
    pub fn new() -> Result<Self, JsValue> {
        Ok(Self { doc: document()? })
    }
}

impl Scoreboard for DomScoreboard {
    fn display_target(&mut self, target: EmojiCode) {
        if let Some(el) = self.doc.get_element_by_id(TARGET_ID) {
            el.set_inner_html(&target.html_entity());
        }
    }

    fn display_score(&mut self, correct: u32, total: u32) {
        if let Some(el) = self.doc.get_element_by_id(SCORE_ID) {
            el.set_inner_html(&score_text(correct, total));
        }
    }

    fn display_match_celebration(&mut self) {
        log_line(LOGS_ID, "Matched!");
    }
}

fn document() -> Result<Document, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Append a line to the element `#node_id`.
pub fn append_line(node_id: &str, msg: &str) {
    if let Some(el) = document().ok().and_then(|d| d.get_element_by_id(node_id)) {
        let line = format!("<span>{}</span><br />", escape_html(msg));
        el.insert_adjacent_html("beforeend", &line).ok();
    }
}

/// `append_line` that also mirrors the message to the console.
pub fn log_line(node_id: &str, msg: &str) {
    console_log!("{}", msg);
    append_line(node_id, msg);
}

pub fn clear_node(node_id: &str) {
    if let Some(el) = document().ok().and_then(|d| d.get_element_by_id(node_id)) {
        el.set_inner_html("");
    }
}

/// Swap the raw video for the canvas the overlays are drawn on.
pub fn show_face_canvas() {
    for (id, display) in [(CANVAS_ID, "block"), (VIDEO_ID, "none")] {
        let el = document()
            .ok()
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(el) = el {
            el.style().set_property("display", display).ok();
        }
    }
}

/// Canvas the SDK draws the camera frames into; `None` until it exists.
pub fn face_canvas() -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let canvas: HtmlCanvasElement = document()
        .ok()?
        .get_element_by_id(CANVAS_ID)?
        .dyn_into()
        .ok()?;
    let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
    Some((canvas, ctx))
}

pub fn draw_congrats(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, text: &str) {
    ctx.set_font("80px serif");
    ctx.set_fill_style_str("rgba(255, 0, 0, 1)");
    ctx.fill_text(text, 25.0, canvas.height() as f64 - 25.0).ok();
}

/// Draw `glyph` with its text origin at `(x, y)`.
pub fn draw_dominant_emoji(ctx: &CanvasRenderingContext2d, glyph: &str, x: f64, y: f64) {
    ctx.set_font(&format!("{EMOJI_FONT_PX}px serif"));
    ctx.fill_text(glyph, x, y).ok();
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
