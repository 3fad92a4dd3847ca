//! Status overlay
//!
//! Draws the dispatch progress bar and the list of active effects. All
//! primitive drawing goes through [`HudRenderer`], so the scheduling
//! core never touches a rendering backend. Coordinates are normalized to
//! `[0, 1]` with the origin at the top-left; rectangles are addressed by
//! their center point.

use crate::dispatch::ActiveEffect;

/// Seconds of countdown represented by a full-width sub-bar; longer
/// timers saturate the bar
const TIMER_BAR_HORIZON_SECS: f32 = 180.0;

// Progress meter geometry
const METER_HEIGHT: f32 = 0.05;

// Active-effect list geometry
const LABEL_X: f32 = 0.86;
const LIST_TOP_Y: f32 = 0.2;
const ROW_STEP: f32 = 0.075;
const BAR_X: f32 = 0.9;
const BAR_WIDTH: f32 = 0.05;
const BAR_HEIGHT: f32 = 0.02;
const BAR_Y_OFFSET: f32 = 0.02;

const TRACK_COLOR: [u8; 4] = [0, 0, 0, 127];
const METER_FILL_COLOR: [u8; 4] = [40, 40, 255, 255];
const BAR_FILL_COLOR: [u8; 4] = [180, 180, 180, 255];

/// Primitive drawing surface the overlay renders through.
///
/// Implementations fix their own text styling (scale, color, outline,
/// wrap); the dispatcher only supplies geometry and content.
pub trait HudRenderer {
    /// Filled rectangle centered at `(x, y)` in normalized coordinates
    fn draw_filled_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [u8; 4]);

    /// Text label right-justified at `(x, y)` in normalized coordinates
    fn draw_right_justified_label(&mut self, text: &str, x: f32, y: f32);
}

/// Draw the progress meter and the active-effect rows, top to bottom in
/// activation order
pub fn draw_status(hud: &mut dyn HudRenderer, progress: f32, active: &[ActiveEffect]) {
    // Dispatch progress meter along the top edge
    hud.draw_filled_rect(0.5, 0.0, 1.0, METER_HEIGHT, TRACK_COLOR);
    hud.draw_filled_rect(progress * 0.5, 0.0, progress, METER_HEIGHT, METER_FILL_COLOR);

    let mut y = LIST_TOP_Y;
    for effect in active {
        hud.draw_right_justified_label(&effect.name, LABEL_X, y);

        if effect.timer > 0 {
            let fraction = (effect.timer as f32 / TIMER_BAR_HORIZON_SECS).min(1.0);
            hud.draw_filled_rect(BAR_X, y + BAR_Y_OFFSET, BAR_WIDTH, BAR_HEIGHT, TRACK_COLOR);
            hud.draw_filled_rect(
                BAR_X - fraction,
                y + BAR_Y_OFFSET,
                BAR_WIDTH * fraction,
                BAR_HEIGHT,
                BAR_FILL_COLOR,
            );
        }

        y += ROW_STEP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EffectId;
    use crate::dispatch::NO_EXPIRY;

    #[derive(Default)]
    struct RecordingHud {
        rects: Vec<(f32, f32, f32, f32, [u8; 4])>,
        labels: Vec<(String, f32, f32)>,
    }

    impl HudRenderer for RecordingHud {
        fn draw_filled_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [u8; 4]) {
            self.rects.push((x, y, w, h, color));
        }

        fn draw_right_justified_label(&mut self, text: &str, x: f32, y: f32) {
            self.labels.push((text.to_string(), x, y));
        }
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "expected {b}, got {a}");
    }

    #[test]
    fn test_meter_fill_scales_with_progress() {
        let mut hud = RecordingHud::default();
        draw_status(&mut hud, 0.4, &[]);

        assert_eq!(hud.rects.len(), 2);
        let (x, _, w, h, color) = hud.rects[0];
        assert_close(x, 0.5);
        assert_close(w, 1.0);
        assert_close(h, METER_HEIGHT);
        assert_eq!(color, TRACK_COLOR);

        let (x, _, w, _, color) = hud.rects[1];
        assert_close(x, 0.2);
        assert_close(w, 0.4);
        assert_eq!(color, METER_FILL_COLOR);
    }

    #[test]
    fn test_rows_step_down_in_activation_order() {
        let active = vec![
            ActiveEffect::new(EffectId(0), "Low Gravity", 90),
            ActiveEffect::new(EffectId(1), "Thunderstorm", NO_EXPIRY),
        ];

        let mut hud = RecordingHud::default();
        draw_status(&mut hud, 0.0, &active);

        assert_eq!(hud.labels.len(), 2);
        assert_eq!(hud.labels[0].0, "Low Gravity");
        assert_close(hud.labels[0].1, LABEL_X);
        assert_close(hud.labels[0].2, LIST_TOP_Y);
        assert_eq!(hud.labels[1].0, "Thunderstorm");
        assert_close(hud.labels[1].2, LIST_TOP_Y + ROW_STEP);
    }

    #[test]
    fn test_sub_bar_only_for_positive_timers() {
        let active = vec![
            ActiveEffect::new(EffectId(0), "Low Gravity", 90),
            ActiveEffect::new(EffectId(1), "Thunderstorm", NO_EXPIRY),
        ];

        let mut hud = RecordingHud::default();
        draw_status(&mut hud, 0.0, &active);

        // Meter track + fill, then one sub-bar (track + fill) for the
        // timed entry only
        assert_eq!(hud.rects.len(), 4);

        // 90 of 180 seconds remaining: half-width fill
        let (x, y, w, h, color) = hud.rects[3];
        assert_close(x, BAR_X - 0.5);
        assert_close(y, LIST_TOP_Y + BAR_Y_OFFSET);
        assert_close(w, BAR_WIDTH * 0.5);
        assert_close(h, BAR_HEIGHT);
        assert_eq!(color, BAR_FILL_COLOR);
    }

    #[test]
    fn test_sub_bar_saturates_past_the_horizon() {
        let active = vec![ActiveEffect::new(EffectId(0), "Heat Wave", 600)];

        let mut hud = RecordingHud::default();
        draw_status(&mut hud, 0.0, &active);

        let (_, _, w, _, _) = hud.rects[3];
        assert_close(w, BAR_WIDTH);
    }
}
