use egui::{emath::Rot2, Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::theme::{CYAN, HOT_PINK, MIKU, MIKU_LIGHT};

/// Seconds per glow cycle.
pub const NEON_PERIOD: f64 = 2.0;

const CORE_WIDTH: f32 = 4.0;
const GLOW_WIDTH: f32 = 10.0;

/// A glowing bar placed relative to the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeonLine {
    /// Center as a fraction of the window size
    pub center: Vec2,
    /// Fraction of the window width, or of its height when `vertical`
    pub length: f32,
    pub vertical: bool,
    /// Clockwise rotation in degrees
    pub angle: f32,
    /// Phase shift of the pulse in seconds
    pub delay: f64,
    pub color: Color32,
    pub opacity: f32,
    /// Opacity of the white variant drawn in dark mode
    pub dark_opacity: f32,
}

pub const NEON_LINES: [NeonLine; 6] = [
    NeonLine {
        center: Vec2::new(0.5, 0.12),
        length: 0.5,
        vertical: false,
        angle: 0.0,
        delay: 0.0,
        color: MIKU,
        opacity: 0.8,
        dark_opacity: 0.6,
    },
    NeonLine {
        center: Vec2::new(0.33, 0.84),
        length: 0.66,
        vertical: false,
        angle: -8.0,
        delay: 1.0,
        color: MIKU_LIGHT,
        opacity: 0.7,
        dark_opacity: 0.4,
    },
    NeonLine {
        center: Vec2::new(0.96, 0.5),
        length: 0.33,
        vertical: true,
        angle: 0.0,
        delay: 2.0,
        color: MIKU,
        opacity: 0.6,
        dark_opacity: 0.3,
    },
    NeonLine {
        center: Vec2::new(0.5, 0.92),
        length: 0.33,
        vertical: false,
        angle: 0.0,
        delay: 2.5,
        color: CYAN,
        opacity: 0.7,
        dark_opacity: 0.4,
    },
    NeonLine {
        center: Vec2::new(0.25, 0.5),
        length: 0.5,
        vertical: false,
        angle: 12.0,
        delay: 1.5,
        color: HOT_PINK,
        opacity: 0.6,
        dark_opacity: 0.3,
    },
    NeonLine {
        center: Vec2::new(0.04, 0.375),
        length: 0.25,
        vertical: true,
        angle: 0.0,
        delay: 3.0,
        color: MIKU,
        opacity: 0.5,
        dark_opacity: 0.2,
    },
];

/// Glow factor in `[0.1, 1]`, peaking at `delay` and every period after.
pub fn neon_pulse(now: f64, delay: f64) -> f32 {
    let phase = ((now - delay) / NEON_PERIOD).rem_euclid(1.0);
    (0.55 + 0.45 * (std::f64::consts::TAU * phase).cos()) as f32
}

impl NeonLine {
    /// End points inside `bounds`.
    pub fn segment(&self, bounds: Rect) -> [Pos2; 2] {
        let size = bounds.size();
        let center = bounds.min + self.center * size;
        let half = if self.vertical {
            Vec2::new(0.0, self.length * size.y / 2.0)
        } else {
            Vec2::new(self.length * size.x / 2.0, 0.0)
        };
        let half = Rot2::from_angle(self.angle.to_radians()) * half;
        [center - half, center + half]
    }

    pub fn paint(&self, painter: &Painter, bounds: Rect, dark_mode: bool, now: f64) {
        let (color, opacity) = if dark_mode {
            (Color32::WHITE, self.dark_opacity)
        } else {
            (self.color, self.opacity)
        };
        let color = color.gamma_multiply(opacity * neon_pulse(now, self.delay));
        let points = self.segment(bounds);
        painter.line_segment(points, Stroke::new(GLOW_WIDTH, color.gamma_multiply(0.25)));
        painter.line_segment(points, Stroke::new(CORE_WIDTH, color));
    }
}
