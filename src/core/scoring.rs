//! Scoring - rewards and player progress
//!
//! A `Reward` is the ephemeral outcome of one scoring event (a drop or a
//! lock), already scaled by level and combo; `Progress` folds rewards into
//! the running line count and score. The exact point values are a product
//! decision, so they live as named constants in `types` rather than inline.

use crate::types::{
    Message, CLEAR_POINTS, COMBO_DENOMINATOR, COMBO_NUMERATOR, HARD_DROP_POINTS, LINES_PER_LEVEL,
    MAX_LEVEL, SOFT_DROP_POINTS, TSPIN_KICK_POINTS, TSPIN_POINTS,
};

/// Points for clearing `lines` rows, before level and combo scaling.
/// Kicked T-spins score the reduced column for 0 and 1 lines.
pub fn clear_points(lines: u32, tspin: bool, kick: bool) -> u32 {
    let lines = lines.min(4) as usize;
    if tspin && lines < 4 {
        if kick {
            TSPIN_KICK_POINTS[lines]
        } else {
            TSPIN_POINTS[lines]
        }
    } else {
        CLEAR_POINTS[lines]
    }
}

/// A clear is "difficult" if it is a tetris or any T-spin line clear.
/// Two difficult clears in a row earn the combo multiplier.
pub fn is_difficult(lines: u32, tspin: bool) -> bool {
    lines == 4 || (tspin && lines > 0)
}

fn apply_combo(points: u32) -> u32 {
    points
        .saturating_mul(COMBO_NUMERATOR)
        .saturating_div(COMBO_DENOMINATOR)
}

fn message_for(lines: u32, tspin: bool) -> Option<Message> {
    if tspin {
        Some(Message::TSpin)
    } else if lines == 4 {
        Some(Message::Tetris)
    } else {
        None
    }
}

/// The points and lines earned by one scoring event, plus an optional
/// transient message for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reward {
    pub points: u32,
    pub lines: u32,
    pub message: Option<Message>,
}

impl Reward {
    /// The zero reward (moves, rotations, holds).
    pub fn none() -> Self {
        Self {
            points: 0,
            lines: 0,
            message: None,
        }
    }

    /// One accepted soft drop step.
    pub fn soft_drop(level: u32) -> Self {
        Self {
            points: SOFT_DROP_POINTS * level,
            lines: 0,
            message: None,
        }
    }

    /// A firm drop of `distance` rows (piece not locked).
    pub fn firm_drop(distance: u32, level: u32) -> Self {
        Self {
            points: distance * level,
            lines: 0,
            message: None,
        }
    }

    /// A hard drop of `distance` rows that locked and cleared `lines`.
    /// `combo` is true when this clear and the previous one were both
    /// difficult.
    pub fn hard_drop(distance: u32, lines: u32, level: u32, combo: bool) -> Self {
        let base = (distance * HARD_DROP_POINTS + clear_points(lines, false, false)) * level;
        Self {
            points: if combo { apply_combo(base) } else { base },
            lines,
            message: message_for(lines, false),
        }
    }

    /// A lock that cleared `lines`, with T-spin and kick flags from the
    /// piece's final rotation.
    pub fn clear_lines(lines: u32, tspin: bool, kick: bool, level: u32, combo: bool) -> Self {
        let base = clear_points(lines, tspin, kick) * level;
        Self {
            points: if combo { apply_combo(base) } else { base },
            lines,
            message: message_for(lines, tspin),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.points == 0 && self.lines == 0
    }
}

/// Running line count and score. Level is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    pub lines: u32,
    pub score: u32,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level, between 1 and `MAX_LEVEL`.
    pub fn level(&self) -> u32 {
        (self.lines / LINES_PER_LEVEL + 1).min(MAX_LEVEL)
    }

    /// Folds a reward into the progress.
    pub fn add(&self, reward: &Reward) -> Progress {
        Progress {
            lines: self.lines + reward.lines,
            score: self.score.saturating_add(reward.points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_clear_points() {
        assert_eq!(clear_points(0, false, false), 0);
        assert_eq!(clear_points(1, false, false), 100);
        assert_eq!(clear_points(2, false, false), 300);
        assert_eq!(clear_points(3, false, false), 500);
        assert_eq!(clear_points(4, false, false), 800);
    }

    #[test]
    fn test_tspin_clear_points() {
        assert_eq!(clear_points(0, true, false), 400);
        assert_eq!(clear_points(1, true, false), 800);
        assert_eq!(clear_points(2, true, false), 1200);
        assert_eq!(clear_points(3, true, false), 1600);

        // Kick-assisted T-spins score the reduced column for 0-1 lines.
        assert_eq!(clear_points(0, true, true), 100);
        assert_eq!(clear_points(1, true, true), 200);
        assert_eq!(clear_points(2, true, true), 1200);
        assert_eq!(clear_points(3, true, true), 1600);
    }

    #[test]
    fn test_difficult_clears() {
        assert!(is_difficult(4, false));
        assert!(is_difficult(1, true));
        assert!(is_difficult(3, true));
        assert!(!is_difficult(0, true));
        assert!(!is_difficult(3, false));
        assert!(!is_difficult(0, false));
    }

    #[test]
    fn test_tetris_at_level_one() {
        let reward = Reward::clear_lines(4, false, false, 1, false);
        assert_eq!(reward.points, 800);
        assert_eq!(reward.lines, 4);
        assert_eq!(reward.message, Some(Message::Tetris));
    }

    #[test]
    fn test_tspin_single_no_kick() {
        let reward = Reward::clear_lines(1, true, false, 1, false);
        assert_eq!(reward.points, 800);
        assert_eq!(reward.message, Some(Message::TSpin));
    }

    #[test]
    fn test_combo_multiplier() {
        // Back-to-back tetris: 800 * 3/2 = 1200 at level 1.
        let reward = Reward::clear_lines(4, false, false, 1, true);
        assert_eq!(reward.points, 1200);
    }

    #[test]
    fn test_rewards_scale_with_level() {
        assert_eq!(Reward::soft_drop(1).points, 1);
        assert_eq!(Reward::soft_drop(5).points, 5);
        assert_eq!(Reward::firm_drop(7, 3).points, 21);
        assert_eq!(Reward::clear_lines(2, false, false, 4, false).points, 1200);
    }

    #[test]
    fn test_hard_drop_reward() {
        // Distance 10, no lines: 10 * 2 * level.
        assert_eq!(Reward::hard_drop(10, 0, 1, false).points, 20);
        // Distance 10 with a tetris: (20 + 800) * 1.
        let reward = Reward::hard_drop(10, 4, 1, false);
        assert_eq!(reward.points, 820);
        assert_eq!(reward.message, Some(Message::Tetris));
        // Same with combo: 820 * 3/2 = 1230.
        assert_eq!(Reward::hard_drop(10, 4, 1, true).points, 1230);
    }

    #[test]
    fn test_progress_level_derivation() {
        let mut progress = Progress::new();
        assert_eq!(progress.level(), 1);
        progress.lines = 9;
        assert_eq!(progress.level(), 1);
        progress.lines = 10;
        assert_eq!(progress.level(), 2);
        progress.lines = 195;
        assert_eq!(progress.level(), 20);
        progress.lines = 500;
        assert_eq!(progress.level(), 20);
    }

    #[test]
    fn test_progress_fold() {
        let progress = Progress::new()
            .add(&Reward::clear_lines(4, false, false, 1, false))
            .add(&Reward::soft_drop(1));
        assert_eq!(progress.lines, 4);
        assert_eq!(progress.score, 801);
    }
}
