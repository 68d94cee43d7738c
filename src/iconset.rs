//! The macOS iconset size table.
//!
//! An `.iconset` directory holds one PNG per (nominal slot, scale factor)
//! pair. The pairs are generated here instead of hand-enumerating ten
//! filename/pixel tuples; note that the largest bitmap (1024 px) lives in
//! the `512x512@2x` slot, which is the platform convention.

pub const SLOT_POINTS: [u32; 5] = [16, 32, 128, 256, 512];
pub const SCALES: [u32; 2] = [1, 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSlot {
    pub points: u32,
    pub scale: u32,
}

impl IconSlot {
    pub fn pixel_size(&self) -> u32 {
        self.points * self.scale
    }

    pub fn file_name(&self) -> String {
        if self.scale == 1 {
            format!("icon_{0}x{0}.png", self.points)
        } else {
            format!("icon_{0}x{0}@{1}x.png", self.points, self.scale)
        }
    }
}

/// All slots in staging order: slot-major, 1x before 2x.
pub fn slots() -> impl Iterator<Item = IconSlot> {
    SLOT_POINTS.into_iter().flat_map(|points| {
        SCALES.into_iter().map(move |scale| IconSlot { points, scale })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_the_iconutil_naming_convention() {
        let table: Vec<(u32, String)> = slots().map(|s| (s.pixel_size(), s.file_name())).collect();
        let expected = [
            (16, "icon_16x16.png"),
            (32, "icon_16x16@2x.png"),
            (32, "icon_32x32.png"),
            (64, "icon_32x32@2x.png"),
            (128, "icon_128x128.png"),
            (256, "icon_128x128@2x.png"),
            (256, "icon_256x256.png"),
            (512, "icon_256x256@2x.png"),
            (512, "icon_512x512.png"),
            (1024, "icon_512x512@2x.png"),
        ];
        assert_eq!(table.len(), expected.len());
        for ((px, name), (want_px, want_name)) in table.iter().zip(expected.iter()) {
            assert_eq!(px, want_px);
            assert_eq!(name, want_name);
        }
    }

    #[test]
    fn largest_bitmap_fills_the_retina_512_slot() {
        let last = slots().last().unwrap();
        assert_eq!(last.pixel_size(), 1024);
        assert_eq!(last.file_name(), "icon_512x512@2x.png");
    }
}
