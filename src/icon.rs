use image::{Rgba, RgbaImage};

use crate::glyph::LetterM;

// Inkwell palette
const BG_COLOR: Rgba<u8> = Rgba([41, 42, 48, 255]);
const INK_COLOR: [u8; 3] = [0, 122, 255];
const PEN_COLOR: Rgba<u8> = Rgba([180, 180, 185, 255]);
const HIGHLIGHT_COLOR: Rgba<u8> = Rgba([100, 200, 255, 255]);

const GLYPH_ALPHA: u8 = 80;
const GLYPH_MIN_SIZE: u32 = 128;

/// Render the Inkwell mark (pen nib over an ink drop) at `size` x `size`.
///
/// Pure and deterministic: the same `size` always yields a byte-identical
/// buffer. Sizes below 8 px are not guarded; the integer geometry collapses.
pub fn render(size: u32) -> RgbaImage {
    let s = size as i32;
    let corner_radius = (s / 6) as f32;

    let cx = s / 2;
    let cy = s / 2;
    let nib_w = s / 3;
    let nib_h = s / 2;
    let nib_top = cy - nib_h / 3;
    let nib_tip = cy + nib_h / 2;
    let slit_w = s / 40;
    let slit_half = slit_w / 2;

    // Nib triangle, point down
    let t_left = ((cx - nib_w / 2) as f32, nib_top as f32);
    let t_tip = (cx as f32, nib_tip as f32);
    let t_right = ((cx + nib_w / 2) as f32, nib_top as f32);

    let drop_radius = (s / 10) as f32;
    let drop_cx = cx as f32;
    let drop_cy = (nib_tip + (s / 10) / 2) as f32;

    // Specular quad on the nib's upper-left shoulder
    let quad = [
        ((cx - nib_w / 4) as f32, (cy - nib_h / 4) as f32),
        ((cx - nib_w / 6) as f32, cy as f32),
        ((cx - slit_w) as f32, cy as f32),
        ((cx - slit_w) as f32, (cy - nib_h / 4) as f32),
    ];

    // Corner "M", only at sizes where it stays legible
    let glyph = (size >= GLYPH_MIN_SIZE).then(|| {
        let m = LetterM::sized((s / 8) as f32);
        let (gw, gh) = m.bounds();
        let pad = (s / 8 / 2) as f32;
        m.placed(size as f32 - gw - pad, size as f32 - gh - pad)
    });

    let mut img = RgbaImage::new(size, size);
    for (x, y, px) in img.enumerate_pixels_mut() {
        let fx = x as f32 + 0.5;
        let fy = y as f32 + 0.5;
        let ix = x as i32;
        let iy = y as i32;

        // Layers are evaluated back to front; each covering shape overwrites
        // the pixel wholesale, alpha included.
        let mut out = Rgba([0, 0, 0, 0]);

        if in_rounded_rect(fx, fy, s as f32, corner_radius) {
            out = BG_COLOR;
        }
        if point_in_triangle(fx, fy, t_left, t_tip, t_right) {
            out = PEN_COLOR;
        }
        if ix >= cx - slit_half && ix <= cx + slit_half && iy >= nib_top && iy <= cy + nib_h / 3 {
            out = BG_COLOR;
        }
        let ddx = fx - drop_cx;
        let ddy = fy - drop_cy;
        let dist = (ddx * ddx + ddy * ddy).sqrt();
        if dist <= drop_radius {
            out = Rgba([
                INK_COLOR[0],
                INK_COLOR[1],
                INK_COLOR[2],
                drop_alpha(dist, drop_radius),
            ]);
        }
        if in_quad(fx, fy, &quad) {
            out = HIGHLIGHT_COLOR;
        }
        if let Some(m) = &glyph {
            if m.covers(fx, fy) {
                out = Rgba([255, 255, 255, GLYPH_ALPHA]);
            }
        }

        *px = out;
    }
    img
}

/// Ink-drop opacity at `distance` from the drop center: linear falloff from
/// fully opaque at the center to fully transparent at the rim.
pub fn drop_alpha(distance: f32, radius: f32) -> u8 {
    if distance >= radius || radius <= 0.0 {
        return 0;
    }
    ((1.0 - distance / radius) * 255.0).round() as u8
}

fn in_rounded_rect(fx: f32, fy: f32, side: f32, radius: f32) -> bool {
    // Distance from the inner rectangle; zero inside the straight-edge bands
    let dx = (radius - fx).max(fx - (side - radius)).max(0.0);
    let dy = (radius - fy).max(fy - (side - radius)).max(0.0);
    dx * dx + dy * dy <= radius * radius
}

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ax * by - ay * bx
}

fn point_in_triangle(px: f32, py: f32, p1: (f32, f32), p2: (f32, f32), p3: (f32, f32)) -> bool {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let (x3, y3) = p3;
    let c1 = cross(x2 - x1, y2 - y1, px - x1, py - y1);
    let c2 = cross(x3 - x2, y3 - y2, px - x2, py - y2);
    let c3 = cross(x1 - x3, y1 - y3, px - x3, py - y3);
    let has_neg = (c1 < 0.0) || (c2 < 0.0) || (c3 < 0.0);
    let has_pos = (c1 > 0.0) || (c2 > 0.0) || (c3 > 0.0);
    !(has_neg && has_pos)
}

fn in_quad(px: f32, py: f32, q: &[(f32, f32); 4]) -> bool {
    // Convex quad as two triangles sharing the q[0]-q[2] diagonal
    point_in_triangle(px, py, q[0], q[1], q[2]) || point_in_triangle(px, py, q[0], q[2], q[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_square_at_requested_size() {
        for size in [16u32, 32, 64, 128, 256, 512] {
            let img = render(size);
            assert_eq!(img.width(), size);
            assert_eq!(img.height(), size);
            assert_eq!(img.as_raw().len(), (size * size * 4) as usize);
        }
    }

    #[test]
    fn render_is_deterministic() {
        let a = render(128);
        let b = render(128);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn plate_corners_are_rounded_off() {
        // size 256: corner radius 42, so (0,0) sits well outside the arc
        let img = render(256);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(255, 0).0[3], 0);
        assert_eq!(img.get_pixel(0, 255).0[3], 0);
        assert_eq!(img.get_pixel(255, 255).0[3], 0);
        // edge midpoints lie on the straight bands
        assert_eq!(*img.get_pixel(64, 0), BG_COLOR);
        assert_eq!(*img.get_pixel(0, 128), BG_COLOR);
        // and the arc center itself is filled
        assert_eq!(*img.get_pixel(42, 42), BG_COLOR);
    }

    #[test]
    fn nib_slit_and_highlight_take_their_colors() {
        let img = render(256);
        // right shoulder of the nib, clear of slit and highlight
        assert_eq!(*img.get_pixel(150, 100), PEN_COLOR);
        // slit column down the nib center line
        assert_eq!(*img.get_pixel(128, 100), BG_COLOR);
        // inside the specular quad
        assert_eq!(*img.get_pixel(110, 100), HIGHLIGHT_COLOR);
    }

    #[test]
    fn drop_alpha_falls_off_linearly() {
        assert_eq!(drop_alpha(0.0, 50.0), 255);
        assert_eq!(drop_alpha(25.0, 50.0), 128);
        assert_eq!(drop_alpha(50.0, 50.0), 0);
        assert_eq!(drop_alpha(60.0, 50.0), 0);
        let mut last = 255u8;
        for step in 0..=50 {
            let a = drop_alpha(step as f32, 50.0);
            assert!(a <= last, "alpha rose at distance {step}");
            last = a;
        }
    }

    #[test]
    fn ink_drop_alpha_decreases_outward_in_the_image() {
        // size 512: drop center (256, 409), radius 51
        let img = render(512);
        let mut last = 255u8;
        let mut seen_partial = false;
        for x in 256u32..=300 {
            let a = img.get_pixel(x, 409).0[3];
            assert!(a <= last, "alpha rose at x={x}");
            if a > 0 && a < 255 {
                seen_partial = true;
            }
            last = a;
        }
        assert!(seen_partial, "no graded pixels found along the drop radius");
    }

    #[test]
    fn corner_glyph_appears_only_at_large_sizes() {
        let img = render(256);
        let marked = img
            .enumerate_pixels()
            .filter(|(x, y, p)| *x >= 192 && *y >= 192 && p.0 == [255, 255, 255, GLYPH_ALPHA])
            .count();
        assert!(marked > 0, "expected glyph pixels in the bottom-right corner");

        let small = render(64);
        let stray = small
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0 == [255, 255, 255, GLYPH_ALPHA])
            .count();
        assert_eq!(stray, 0, "glyph must be absent below 128 px");
    }
}
