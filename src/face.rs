//! Per-frame face results from the detector: the text report shown under the
//! video and where to put the dominant emoji relative to the face.

/// Font size used for the dominant emoji overlay.
pub const EMOJI_FONT_PX: f64 = 48.0;

/// Text origin for the dominant emoji, given feature points flattened as
/// `[x0, y0, x1, y1, ..]`. The glyph is centred on the mean x and floats half
/// a face-height above the topmost point. A trailing odd value is ignored.
pub fn emoji_anchor(points: &[f64]) -> Option<(f64, f64)> {
    let mut count = 0usize;
    let mut sum_x = 0.0;
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in points.chunks_exact(2) {
        sum_x += p[0];
        min_y = min_y.min(p[1]);
        max_y = max_y.max(p[1]);
        count += 1;
    }
    if count == 0 {
        return None;
    }
    let avg_x = sum_x / count as f64;
    Some((avg_x - EMOJI_FONT_PX / 2.0, min_y - (max_y - min_y) / 2.0))
}

/// Lines for the `#results` panel.
pub fn frame_report(timestamp: f64, faces: u32, dominant: Option<&str>) -> Vec<String> {
    let mut lines = vec![
        format!("Timestamp: {timestamp:.2}"),
        format!("Number of faces found: {faces}"),
    ];
    if faces > 0 {
        if let Some(d) = dominant.filter(|d| !d.is_empty()) {
            lines.push(format!("Emoji: {d}"));
        }
    }
    lines
}
