//! Emoji identifiers and their static dispense data.
//!
//! The machine sells a closed set of five emoji. Each one owns a fixed
//! [`EmojiSlot`] describing where its dispensable model rests and how it falls
//! out of the machine. The tables in this module are never mutated at runtime.
//!
//! The fall follows an L-shaped path: from rest forward to the corner over
//! the corner segment, then straight down to the drop-off point over the
//! emoji's fall duration. Both segments are linear.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// One of the five emoji the machine dispenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emoji {
    Smiley,
    SparkleHeart,
    HeartSmiley,
    SadSmiley,
    ThreeHearts,
}

/// Number of emoji in the closed set.
pub const EMOJI_COUNT: usize = 5;

/// Static rest position and fall path of a dispensable emoji.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmojiSlot {
    /// Model-space position when not animating.
    pub rest: Vector3,
    /// Displacement of the L-path corner relative to `rest`.
    pub corner_offset: Vector3,
    /// Displacement of the drop-off point relative to `rest`.
    pub end_offset: Vector3,
    /// Duration of the vertical drop in milliseconds.
    pub fall_duration_ms: u32,
}

impl EmojiSlot {
    /// Corner point of the fall path.
    pub fn corner(&self) -> Vector3 {
        add_v3(self.rest, self.corner_offset)
    }

    /// Drop-off point of the fall path.
    pub fn end(&self) -> Vector3 {
        add_v3(self.rest, self.end_offset)
    }

    /// Whole fall, corner segment included, in seconds.
    pub fn total_secs(&self, corner_ms: u32) -> f32 {
        (corner_ms as f32 + self.fall_duration_ms as f32) / 1000.0
    }

    /// Share of the fall spent on the forward segment.
    pub fn corner_fraction(&self, corner_ms: u32) -> f32 {
        let total = corner_ms as f32 + self.fall_duration_ms as f32;
        if total <= 0.0 {
            return 0.0;
        }
        corner_ms as f32 / total
    }

    /// Point on the L-path at normalised `progress`.
    pub fn position_at(&self, corner_ms: u32, progress: f32) -> Vector3 {
        let p = progress.clamp(0.0, 1.0);
        let f1 = self.corner_fraction(corner_ms);
        if p < f1 {
            lerp_v3(self.rest, self.corner(), p / f1)
        } else if f1 < 1.0 {
            lerp_v3(self.corner(), self.end(), (p - f1) / (1.0 - f1))
        } else {
            self.end()
        }
    }
}

const fn v3(x: f32, y: f32, z: f32) -> Vector3 {
    Vector3 { x, y, z }
}

pub(crate) fn add_v3(a: Vector3, b: Vector3) -> Vector3 {
    Vector3 {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
}

pub(crate) fn lerp_v3(a: Vector3, b: Vector3, t: f32) -> Vector3 {
    Vector3 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
        z: a.z + (b.z - a.z) * t,
    }
}

// Every emoji is pushed forward by the same amount before dropping.
const CORNER: Vector3 = v3(0.5, 0.0, 0.0);

/// Dispense data indexed by [`Emoji::index`].
const SLOTS: [EmojiSlot; EMOJI_COUNT] = [
    EmojiSlot {
        rest: v3(1.081, 6.138, 0.368),
        corner_offset: CORNER,
        end_offset: v3(0.5, -5.2, 0.0),
        fall_duration_ms: 1500,
    },
    EmojiSlot {
        rest: v3(1.111, 4.965, 0.368),
        corner_offset: CORNER,
        end_offset: v3(0.5, -4.0, 0.0),
        fall_duration_ms: 1200,
    },
    EmojiSlot {
        rest: v3(1.139, 3.738, -0.643),
        corner_offset: CORNER,
        end_offset: v3(0.5, -2.8, 0.0),
        fall_duration_ms: 900,
    },
    EmojiSlot {
        rest: v3(1.096, 2.564, 1.38),
        corner_offset: CORNER,
        end_offset: v3(0.5, -1.6, 0.0),
        fall_duration_ms: 600,
    },
    EmojiSlot {
        rest: v3(1.086, 3.756, 0.368),
        corner_offset: CORNER,
        end_offset: v3(0.5, -2.8, 0.0),
        fall_duration_ms: 900,
    },
];

/// Decorative, non-dispensable emoji filling the rest of the shelves.
pub const STOCK: [(Emoji, Vector3); 7] = [
    (Emoji::Smiley, v3(1.081, 6.138, 1.38)),
    (Emoji::Smiley, v3(1.081, 6.138, -0.64)),
    (Emoji::SparkleHeart, v3(1.096, 4.948, 1.38)),
    (Emoji::SparkleHeart, v3(1.111, 4.965, -0.64)),
    (Emoji::HeartSmiley, v3(1.115, 2.561, -0.643)),
    (Emoji::ThreeHearts, v3(1.094, 3.756, 1.38)),
    (Emoji::SadSmiley, v3(1.096, 2.564, 0.349)),
];

impl Emoji {
    /// All emoji in index order.
    pub const ALL: [Emoji; EMOJI_COUNT] = [
        Emoji::Smiley,
        Emoji::SparkleHeart,
        Emoji::HeartSmiley,
        Emoji::SadSmiley,
        Emoji::ThreeHearts,
    ];

    /// Stable index into fixed-size per-emoji arrays.
    pub const fn index(self) -> usize {
        match self {
            Emoji::Smiley => 0,
            Emoji::SparkleHeart => 1,
            Emoji::HeartSmiley => 2,
            Emoji::SadSmiley => 3,
            Emoji::ThreeHearts => 4,
        }
    }

    /// Snake-case identifier, also used as the image file stem.
    pub const fn id(self) -> &'static str {
        match self {
            Emoji::Smiley => "smiley",
            Emoji::SparkleHeart => "sparkle_heart",
            Emoji::HeartSmiley => "heart_smiley",
            Emoji::SadSmiley => "sad_smiley",
            Emoji::ThreeHearts => "three_hearts",
        }
    }

    /// Human-readable name shown in the result modal.
    pub const fn label(self) -> &'static str {
        match self {
            Emoji::Smiley => "Smiling Emoji",
            Emoji::SparkleHeart => "Sparkling Heart Emoji",
            Emoji::HeartSmiley => "Smiling with Hearts Emoji",
            Emoji::SadSmiley => "Crying Emoji",
            Emoji::ThreeHearts => "Growing Heart Emoji",
        }
    }

    /// Image file name shown in the result modal.
    pub fn image_file(self) -> String {
        format!("{}.png", self.id())
    }

    /// Static dispense data for this emoji.
    pub fn slot(self) -> &'static EmojiSlot {
        &SLOTS[self.index()]
    }
}

impl std::fmt::Display for Emoji {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Marks an entity as the dispensable model of an emoji.
#[derive(Component, Clone, Copy, Debug)]
pub struct EmojiPiece {
    pub emoji: Emoji,
}

/// Marks an entity as decorative shelf stock.
#[derive(Component, Clone, Copy, Debug)]
pub struct StockPiece {
    pub emoji: Emoji,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn v3_approx_eq(a: Vector3, b: Vector3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, emoji) in Emoji::ALL.iter().enumerate() {
            assert_eq!(emoji.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Emoji::Smiley.label(), "Smiling Emoji");
        assert_eq!(Emoji::HeartSmiley.label(), "Smiling with Hearts Emoji");
        assert_eq!(Emoji::SparkleHeart.label(), "Sparkling Heart Emoji");
        assert_eq!(Emoji::SadSmiley.label(), "Crying Emoji");
        assert_eq!(Emoji::ThreeHearts.label(), "Growing Heart Emoji");
    }

    #[test]
    fn test_image_file_uses_id() {
        assert_eq!(Emoji::SadSmiley.image_file(), "sad_smiley.png");
    }

    #[test]
    fn test_fall_durations() {
        assert_eq!(Emoji::Smiley.slot().fall_duration_ms, 1500);
        assert_eq!(Emoji::SparkleHeart.slot().fall_duration_ms, 1200);
        assert_eq!(Emoji::HeartSmiley.slot().fall_duration_ms, 900);
        assert_eq!(Emoji::SadSmiley.slot().fall_duration_ms, 600);
        assert_eq!(Emoji::ThreeHearts.slot().fall_duration_ms, 900);
    }

    #[test]
    fn test_corner_moves_forward_only() {
        for emoji in Emoji::ALL {
            let slot = emoji.slot();
            let corner = slot.corner();
            assert!(approx_eq(corner.x, slot.rest.x + 0.5));
            assert!(approx_eq(corner.y, slot.rest.y));
            assert!(approx_eq(corner.z, slot.rest.z));
        }
    }

    #[test]
    fn test_end_drops_below_rest() {
        let slot = Emoji::SadSmiley.slot();
        let end = slot.end();
        assert!(approx_eq(end.x, 1.596));
        assert!(approx_eq(end.y, 2.564 - 1.6));
        assert!(approx_eq(end.z, 1.38));
    }

    #[test]
    fn test_display_is_id() {
        assert_eq!(Emoji::ThreeHearts.to_string(), "three_hearts");
    }

    #[test]
    fn test_lerp_v3_boundaries_and_midpoint() {
        let a = v3(0.0, 10.0, -2.0);
        let b = v3(4.0, 0.0, 2.0);
        assert!(v3_approx_eq(lerp_v3(a, b, 0.0), a));
        assert!(v3_approx_eq(lerp_v3(a, b, 1.0), b));
        assert!(v3_approx_eq(lerp_v3(a, b, 0.5), v3(2.0, 5.0, 0.0)));
    }

    #[test]
    fn test_total_secs() {
        assert!(approx_eq(Emoji::SadSmiley.slot().total_secs(500), 1.1));
        assert!(approx_eq(Emoji::Smiley.slot().total_secs(500), 2.0));
    }

    #[test]
    fn test_huge_corner_does_not_overflow() {
        let slot = Emoji::Smiley.slot();
        let total = slot.total_secs(u32::MAX);
        assert!(total > u32::MAX as f32 / 1000.0 - 1.0);
        let f1 = slot.corner_fraction(u32::MAX);
        assert!(f1 > 0.99 && f1 <= 1.0);
    }

    #[test]
    fn test_corner_fraction() {
        assert!(approx_eq(Emoji::Smiley.slot().corner_fraction(500), 0.25));
        assert!(approx_eq(
            Emoji::SadSmiley.slot().corner_fraction(500),
            500.0 / 1100.0
        ));
        assert_eq!(Emoji::Smiley.slot().corner_fraction(0), 0.0);
    }

    #[test]
    fn test_path_starts_at_rest_and_ends_at_end() {
        for emoji in Emoji::ALL {
            let slot = emoji.slot();
            assert!(v3_approx_eq(slot.position_at(500, 0.0), slot.rest));
            assert!(v3_approx_eq(slot.position_at(500, 1.0), slot.end()));
        }
    }

    #[test]
    fn test_path_hits_corner_at_first_fraction() {
        for emoji in Emoji::ALL {
            let slot = emoji.slot();
            let f1 = slot.corner_fraction(500);
            assert!(v3_approx_eq(slot.position_at(500, f1), slot.corner()));
        }
    }

    #[test]
    fn test_first_segment_moves_forward_only() {
        // Smiley: first quarter of the fall is the forward segment
        let slot = Emoji::Smiley.slot();
        let mid = slot.position_at(500, 0.125);
        assert!(approx_eq(mid.x, slot.rest.x + 0.25));
        assert!(approx_eq(mid.y, slot.rest.y));
        assert!(approx_eq(mid.z, slot.rest.z));
    }

    #[test]
    fn test_second_segment_moves_down_only() {
        let slot = Emoji::Smiley.slot();
        let p = slot.position_at(500, 0.625);
        assert!(approx_eq(p.x, slot.corner().x));
        assert!(approx_eq(p.y, slot.rest.y - 2.6));
        assert!(approx_eq(p.z, slot.rest.z));
    }

    #[test]
    fn test_path_clamps_progress() {
        let slot = Emoji::HeartSmiley.slot();
        assert!(v3_approx_eq(slot.position_at(500, -1.0), slot.rest));
        assert!(v3_approx_eq(slot.position_at(500, 3.0), slot.end()));
    }

    #[test]
    fn test_height_never_increases_along_path() {
        let slot = Emoji::SparkleHeart.slot();
        let mut last_y = f32::MAX;
        for i in 0..=100 {
            let p = slot.position_at(500, i as f32 / 100.0);
            assert!(p.y <= last_y + EPSILON);
            last_y = p.y;
        }
    }
}
