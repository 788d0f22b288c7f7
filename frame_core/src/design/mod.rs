//! # Member Selection
//!
//! Picks the lightest catalog section that carries a moment/shear demand,
//! including its own weight.
//!
//! ## Procedure
//!
//! 1. Keep sections with `d ≤ max_depth_in` (when the limit is positive).
//! 2. Split them by governing failure mode ([`FailureMode`]) and compute the
//!    flexural capacity for that mode ([`capacity`]).
//! 3. Keep sections whose capacity strictly exceeds the moment demand.
//! 4. Order each set by weight.
//! 5. Repeatedly take the lightest head across the sets (ties go to the
//!    structurally preferable mode), add its factored self-weight to the
//!    demand, and accept it if the flexural capacity still covers the moment
//!    and `0.6·Fy·d·tw` exceeds the shear. Otherwise drop it and retry.
//!
//! An empty start (step 3) is [`DesignFailure::FlexureInfeasible`]; running
//! out of candidates in step 5 is [`DesignFailure::ShearInfeasible`].
//!
//! ## Example
//!
//! ```rust
//! use frame_core::catalog::builtin_catalog;
//! use frame_core::design::{design, MemberDesignInput};
//! use frame_core::loads::beam_load;
//! use frame_core::settings::DesignSettings;
//!
//! let load = beam_load(500.0, 400.0, 20.0);
//! let input = MemberDesignInput::new(20.0, load.combination, load.demand);
//!
//! let outcome = design(builtin_catalog(), &input, &DesignSettings::default());
//! let selected = outcome.selected().expect("builtin catalog has a W-shape for this");
//! assert!(selected.flexural_capacity >= selected.demand.moment);
//! ```

pub mod capacity;
pub mod selector;

pub use capacity::{classify, flexural_capacity, governing_capacity, FailureMode};
pub use selector::{
    candidate_sets, design, Candidate, CandidateSet, Rejection, Selection, SelectionStep,
};

use serde::{Deserialize, Serialize};

use crate::catalog::SectionRecord;
use crate::loads::{Demand, LoadCombination};
use crate::settings::DEFAULT_YIELD_KSI;

/// Input for a single member selection.
///
/// ## JSON Example
///
/// ```json
/// {
///   "span_ft": 20.0,
///   "combination": "DeadPlusLive",
///   "demand": { "moment": 8928.0, "shear": 148.8 },
///   "max_depth_in": 0.0,
///   "yield_ksi": 50.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDesignInput {
    /// Member span, also the unbraced length (ft)
    pub span_ft: f64,

    /// Governing load combination (selects the self-weight factor)
    pub combination: LoadCombination,

    /// Demand before self-weight
    pub demand: Demand,

    /// Maximum section depth (in), 0 for no limit
    #[serde(default)]
    pub max_depth_in: f64,

    /// Steel yield strength (ksi)
    #[serde(default = "default_yield_ksi")]
    pub yield_ksi: f64,
}

fn default_yield_ksi() -> f64 {
    DEFAULT_YIELD_KSI
}

impl MemberDesignInput {
    /// Input with no depth limit and the default yield strength
    pub fn new(span_ft: f64, combination: LoadCombination, demand: Demand) -> Self {
        MemberDesignInput {
            span_ft,
            combination,
            demand,
            max_depth_in: 0.0,
            yield_ksi: DEFAULT_YIELD_KSI,
        }
    }

    /// Set the maximum depth (builder pattern)
    pub fn with_depth_limit(mut self, max_depth_in: f64) -> Self {
        self.max_depth_in = max_depth_in;
        self
    }

    /// Set the yield strength (builder pattern)
    pub fn with_yield(mut self, yield_ksi: f64) -> Self {
        self.yield_ksi = yield_ksi;
        self
    }
}

/// An accepted section with the checks that accepted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSection {
    /// The chosen catalog record
    pub section: SectionRecord,

    /// Governing flexural failure mode at the design span
    pub mode: FailureMode,

    /// Flexural capacity for `mode`
    pub flexural_capacity: f64,

    /// Web shear capacity `0.6·Fy·d·tw` (kips)
    pub shear_capacity_kips: f64,

    /// Demand including the section's own factored weight
    pub demand: Demand,
}

impl SelectedSection {
    /// Section identifier
    pub fn id(&self) -> &str {
        &self.section.id
    }

    /// Weight per linear foot (plf)
    pub fn weight_plf(&self) -> f64 {
        self.section.weight_plf
    }

    /// Moment demand / capacity
    pub fn flexure_unity(&self) -> f64 {
        self.demand.moment / self.flexural_capacity
    }

    /// Shear demand / capacity
    pub fn shear_unity(&self) -> f64 {
        self.demand.shear / self.shear_capacity_kips
    }
}

/// Why no section could be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignFailure {
    /// Nothing in the (depth-filtered) catalog clears the moment demand
    FlexureInfeasible,
    /// Every section that cleared flexure failed once its own weight was added
    ShearInfeasible,
}

impl std::fmt::Display for DesignFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DesignFailure::FlexureInfeasible => {
                write!(f, "All possible members fail through flexure")
            }
            DesignFailure::ShearInfeasible => write!(f, "All possible members fail through shear"),
        }
    }
}

/// Result of a member selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result")]
pub enum DesignOutcome {
    Selected(SelectedSection),
    Failed(DesignFailure),
}

impl DesignOutcome {
    /// The selected section, if any
    pub fn selected(&self) -> Option<&SelectedSection> {
        match self {
            DesignOutcome::Selected(s) => Some(s),
            DesignOutcome::Failed(_) => None,
        }
    }

    /// Convert into a standard `Result`
    pub fn into_result(self) -> Result<SelectedSection, DesignFailure> {
        match self {
            DesignOutcome::Selected(s) => Ok(s),
            DesignOutcome::Failed(f) => Err(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_catalog, SectionCatalog};
    use crate::settings::DesignSettings;
    use proptest::prelude::*;

    fn run(span_ft: f64, moment: f64, shear: f64, depth: f64) -> DesignOutcome {
        let input = MemberDesignInput::new(
            span_ft,
            LoadCombination::DeadPlusLive,
            Demand::new(moment, shear),
        )
        .with_depth_limit(depth);
        design(builtin_catalog(), &input, &DesignSettings::default())
    }

    /// Re-derive the acceptance checks from the catalog record.
    fn assert_post_condition(input: &MemberDesignInput, selected: &SelectedSection) {
        let settings = DesignSettings::default();
        let (mode, capacity) =
            governing_capacity(&selected.section, input.span_ft, input.yield_ksi, &settings)
                .unwrap();
        let updated = input.demand.with_uniform_load(
            selected.section.weight_plf,
            input.combination.self_weight_factor(),
            input.span_ft,
        );
        assert_eq!(mode, selected.mode);
        assert!(capacity >= updated.moment);
        assert!(selected.section.shear_capacity_kips(input.yield_ksi) > updated.shear);
        assert_eq!(updated, selected.demand);
    }

    #[test]
    fn test_builtin_selection() {
        let outcome = run(20.0, 8928.0, 148.8, 0.0);
        let selected = outcome.selected().unwrap();
        assert!(selected.flexure_unity() <= 1.0);
        assert!(selected.shear_unity() < 1.0);
    }

    #[test]
    fn test_depth_limit_zero_is_unlimited() {
        let unlimited = run(20.0, 3000.0, 30.0, 0.0);
        let huge = run(20.0, 3000.0, 30.0, 1000.0);
        assert_eq!(unlimited, huge);
    }

    #[test]
    fn test_depth_limit_below_every_section() {
        assert_eq!(
            run(20.0, 10.0, 1.0, 5.0),
            DesignOutcome::Failed(DesignFailure::FlexureInfeasible)
        );
    }

    #[test]
    fn test_caller_catalog_untouched() {
        let catalog: SectionCatalog = builtin_catalog().clone();
        let input =
            MemberDesignInput::new(20.0, LoadCombination::DeadOnly, Demand::new(2000.0, 20.0));
        let _ = design(&catalog, &input, &DesignSettings::default());
        assert_eq!(&catalog, builtin_catalog());
    }

    #[test]
    fn test_outcome_json_shape() {
        let failed = DesignOutcome::Failed(DesignFailure::ShearInfeasible);
        let json = serde_json::to_string(&failed).unwrap();
        assert_eq!(json, r#"{"status":"Failed","result":"ShearInfeasible"}"#);

        let selected = run(10.0, 100.0, 1.0, 0.0);
        let json = serde_json::to_string(&selected).unwrap();
        assert!(json.contains(r#""status":"Selected""#));
        let roundtrip: DesignOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.selected().unwrap().id(), selected.selected().unwrap().id());
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            DesignFailure::FlexureInfeasible.to_string(),
            "All possible members fail through flexure"
        );
        assert!(DesignFailure::ShearInfeasible.to_string().contains("shear"));
    }

    proptest! {
        #[test]
        fn prop_design_is_idempotent(
            span in 4.0f64..40.0,
            moment in 0.0f64..12000.0,
            shear in 0.0f64..200.0,
        ) {
            prop_assert_eq!(run(span, moment, shear, 0.0), run(span, moment, shear, 0.0));
        }

        #[test]
        fn prop_success_satisfies_checks(
            span in 4.0f64..40.0,
            moment in 0.0f64..12000.0,
            shear in 0.0f64..200.0,
            dead_only in any::<bool>(),
        ) {
            let combination = if dead_only {
                LoadCombination::DeadOnly
            } else {
                LoadCombination::DeadPlusLive
            };
            let input = MemberDesignInput::new(span, combination, Demand::new(moment, shear));
            let outcome = design(builtin_catalog(), &input, &DesignSettings::default());
            if let DesignOutcome::Selected(selected) = outcome {
                assert_post_condition(&input, &selected);
            }
        }

        #[test]
        fn prop_weight_monotone_in_demand(
            span in 4.0f64..40.0,
            moment in 0.0f64..10000.0,
            extra_moment in 0.0f64..2000.0,
            shear in 0.0f64..150.0,
            extra_shear in 0.0f64..50.0,
        ) {
            let loose = run(span, moment, shear, 0.0);
            let strict = run(span, moment + extra_moment, shear + extra_shear, 0.0);
            if let (Some(a), Some(b)) = (loose.selected(), strict.selected()) {
                prop_assert!(b.weight_plf() >= a.weight_plf());
            }
            if loose.selected().is_none() {
                prop_assert!(strict.selected().is_none());
            }
        }
    }
}
