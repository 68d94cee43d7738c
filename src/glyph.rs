//! Procedural letterform for the corner mark.
//!
//! The icon stamps a faint "M" (for Markdown) into the bottom-right corner.
//! A font-rendered glyph would make the output depend on whatever fonts the
//! host ships, so the letter is built from four strokes with an analytic
//! coverage test instead.

pub struct LetterM {
    x0: f32,
    y0: f32,
    width: f32,
    height: f32,
    stroke: f32,
}

impl LetterM {
    /// A letter `height` pixels tall at origin (0, 0); stroke weight scales
    /// with the height.
    pub fn sized(height: f32) -> Self {
        LetterM {
            x0: 0.0,
            y0: 0.0,
            width: height * 0.85,
            height,
            stroke: (height / 6.0).max(1.0),
        }
    }

    /// Bounding box (width, height) of the letterform.
    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// The same letter with its top-left corner at (`x0`, `y0`).
    pub fn placed(mut self, x0: f32, y0: f32) -> Self {
        self.x0 = x0;
        self.y0 = y0;
        self
    }

    /// Whether the point lies on one of the letter's strokes.
    pub fn covers(&self, px: f32, py: f32) -> bool {
        let x = px - self.x0;
        let y = py - self.y0;
        if x < 0.0 || y < 0.0 || x > self.width || y > self.height {
            return false;
        }
        let s2 = self.stroke * 0.5;
        let (w, h) = (self.width, self.height);
        // Two stems plus two diagonals meeting below the midline
        let apex = (w * 0.5, h * 0.65);
        let strokes = [
            ((s2, s2), (s2, h - s2)),
            ((w - s2, s2), (w - s2, h - s2)),
            ((s2, s2), apex),
            ((w - s2, s2), apex),
        ];
        strokes
            .iter()
            .any(|&(a, b)| dist_to_segment(x, y, a, b) <= s2)
    }
}

fn dist_to_segment(px: f32, py: f32, a: (f32, f32), b: (f32, f32)) -> f32 {
    let (ax, ay) = a;
    let (bx, by) = b;
    let abx = bx - ax;
    let aby = by - ay;
    let len2 = abx * abx + aby * aby;
    let t = if len2 <= f32::EPSILON {
        0.0
    } else {
        ((px - ax) * abx + (py - ay) * aby) / len2
    }
    .clamp(0.0, 1.0);
    let dx = px - (ax + abx * t);
    let dy = py - (ay + aby * t);
    (dx * dx + dy * dy).sqrt()
}
