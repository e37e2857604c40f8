//! Scoring module - line clear points and gravity speed

use crate::types::{BASE_FALL_US, FALL_STEP_US, LINE_SCORES, MIN_FALL_US};

/// Points for clearing `lines` rows at once (4 and above pay the same)
pub fn line_score(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}

/// Gravity interval in microseconds for the current score
///
/// Every full 1000 points shaves 100ms off the base second, down to 100ms.
pub fn fall_interval_us(score: u32) -> u64 {
    let reduction = (score as u64 / 1000).saturating_mul(FALL_STEP_US);
    BASE_FALL_US.saturating_sub(reduction).max(MIN_FALL_US)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_score_table() {
        assert_eq!(line_score(0), 0);
        assert_eq!(line_score(1), 100);
        assert_eq!(line_score(2), 300);
        assert_eq!(line_score(3), 500);
        assert_eq!(line_score(4), 800);
        assert_eq!(line_score(6), 800);
    }

    #[test]
    fn test_fall_interval() {
        assert_eq!(fall_interval_us(0), 1_000_000);
        assert_eq!(fall_interval_us(999), 1_000_000);
        assert_eq!(fall_interval_us(1000), 900_000);
        assert_eq!(fall_interval_us(5500), 500_000);
        assert_eq!(fall_interval_us(9000), 100_000);
        assert_eq!(fall_interval_us(50_000), 100_000);
        assert_eq!(fall_interval_us(u32::MAX), 100_000);
    }
}
