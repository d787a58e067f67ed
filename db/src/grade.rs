//! Letter-grade derivation for a marks composite.
//!
//! Marks total out of 140 (internal1 + internal2 out of 20 each, external out
//! of 100). The grade is a display-only computation and is never persisted.

/// Maximum composite total a marks record can reach.
pub const MAX_TOTAL: i32 = 140;

/// Maps a 0-140 composite total onto a letter grade by percentage.
pub fn letter_grade(total: i32) -> &'static str {
    let pct = (total as f64 / MAX_TOTAL as f64) * 100.0;
    if pct >= 90.0 {
        "A+"
    } else if pct >= 80.0 {
        "A"
    } else if pct >= 70.0 {
        "B+"
    } else if pct >= 60.0 {
        "B"
    } else if pct >= 50.0 {
        "C"
    } else if pct >= 40.0 {
        "D"
    } else {
        "F"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_thresholds() {
        // 90% of 140 is 126, 80% is 112, and so on in 14-mark steps.
        assert_eq!(letter_grade(140), "A+");
        assert_eq!(letter_grade(126), "A+");
        assert_eq!(letter_grade(125), "A");
        assert_eq!(letter_grade(112), "A");
        assert_eq!(letter_grade(111), "B+");
        assert_eq!(letter_grade(98), "B+");
        assert_eq!(letter_grade(97), "B");
        assert_eq!(letter_grade(84), "B");
        assert_eq!(letter_grade(83), "C");
        assert_eq!(letter_grade(70), "C");
        assert_eq!(letter_grade(69), "D");
        assert_eq!(letter_grade(56), "D");
        assert_eq!(letter_grade(55), "F");
        assert_eq!(letter_grade(0), "F");
    }
}
