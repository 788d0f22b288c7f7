//! Basic gravity load combinations
//!
//! Only the two strength combinations that govern a floor with dead and live
//! load are modeled:
//!
//! | Index | Combination | Self-weight factor |
//! |-------|-------------|--------------------|
//! | 0 | 1.4D | 1.4 |
//! | 1 | 1.2D + 1.6L | 1.2 |

use serde::{Deserialize, Serialize};

/// A factored load combination.
///
/// The ordering of [`LoadCombination::ALL`] is significant: when both
/// combinations produce the same factored load, the first one governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadCombination {
    /// 1.4D
    DeadOnly,
    /// 1.2D + 1.6L
    DeadPlusLive,
}

impl LoadCombination {
    /// All combinations in tie-break order
    pub const ALL: [LoadCombination; 2] =
        [LoadCombination::DeadOnly, LoadCombination::DeadPlusLive];

    /// Position in [`LoadCombination::ALL`]
    pub fn index(&self) -> usize {
        match self {
            LoadCombination::DeadOnly => 0,
            LoadCombination::DeadPlusLive => 1,
        }
    }

    /// Human-readable equation
    pub fn equation(&self) -> &'static str {
        match self {
            LoadCombination::DeadOnly => "1.4D",
            LoadCombination::DeadPlusLive => "1.2D + 1.6L",
        }
    }

    /// Dead load factor
    pub fn dead_factor(&self) -> f64 {
        match self {
            LoadCombination::DeadOnly => 1.4,
            LoadCombination::DeadPlusLive => 1.2,
        }
    }

    /// Live load factor
    pub fn live_factor(&self) -> f64 {
        match self {
            LoadCombination::DeadOnly => 0.0,
            LoadCombination::DeadPlusLive => 1.6,
        }
    }

    /// Factor applied to a member's own weight.
    ///
    /// Self-weight is dead load, so this is the dead load factor of the
    /// governing combination.
    pub fn self_weight_factor(&self) -> f64 {
        self.dead_factor()
    }

    /// Apply this combination to dead and live line loads
    pub fn apply(&self, dead: f64, live: f64) -> f64 {
        self.dead_factor() * dead + self.live_factor() * live
    }
}

impl std::fmt::Display for LoadCombination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LC{}: {}", self.index(), self.equation())
    }
}

/// Find the governing combination for dead and live line loads.
///
/// Returns the largest factored load and the combination producing it.
/// Earlier combinations win ties.
pub fn governing_combination(dead: f64, live: f64) -> (f64, LoadCombination) {
    let mut governing = (
        LoadCombination::ALL[0].apply(dead, live),
        LoadCombination::ALL[0],
    );
    for combo in &LoadCombination::ALL[1..] {
        let value = combo.apply(dead, live);
        if value > governing.0 {
            governing = (value, *combo);
        }
    }
    governing
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_apply() {
        assert_relative_eq!(LoadCombination::DeadOnly.apply(100.0, 50.0), 140.0);
        assert_relative_eq!(LoadCombination::DeadPlusLive.apply(100.0, 50.0), 200.0);
    }

    #[test]
    fn test_live_governs() {
        let (load, combo) = governing_combination(50.0, 40.0);
        assert_eq!(combo, LoadCombination::DeadPlusLive);
        assert_relative_eq!(load, 124.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dead_governs_without_live() {
        let (load, combo) = governing_combination(50.0, 0.0);
        assert_eq!(combo, LoadCombination::DeadOnly);
        assert_relative_eq!(load, 70.0, epsilon = 1e-9);
    }

    #[test]
    fn test_tie_goes_to_dead_only() {
        // 1.4D == 1.2D + 1.6L when L = D / 8
        let (_, combo) = governing_combination(80.0, 10.0);
        assert_eq!(combo, LoadCombination::DeadOnly);

        let (load, combo) = governing_combination(0.0, 0.0);
        assert_eq!(combo, LoadCombination::DeadOnly);
        assert_eq!(load, 0.0);
    }

    #[test]
    fn test_self_weight_factor() {
        assert_eq!(LoadCombination::DeadOnly.self_weight_factor(), 1.4);
        assert_eq!(LoadCombination::DeadPlusLive.self_weight_factor(), 1.2);
    }

    #[test]
    fn test_display() {
        assert_eq!(LoadCombination::DeadPlusLive.to_string(), "LC1: 1.2D + 1.6L");
    }
}
