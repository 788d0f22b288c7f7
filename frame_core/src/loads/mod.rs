//! Member demand from floor loads
//!
//! This module turns line loads into the moment/shear demand a section has
//! to carry.
//!
//! # Overview
//!
//! - [`LoadCombination`] - The two basic strength combinations (1.4D, 1.2D + 1.6L)
//! - [`beam_load`] - Governing demand on a simply supported, uniformly loaded beam
//! - [`girder_load`] - Demand on a girder carrying equally spaced beam reactions
//! - [`Demand`] - Moment/shear pair shared by all of the above
//!
//! # Units
//!
//! Line loads are in plf (psf pressure times tributary width in ft), spans
//! in ft, shear in kips. Beam moment is `w·(12L)²/8000`, which is the
//! scale the catalog's `plastic` column is compared against.
//!
//! # Example
//!
//! ```
//! use frame_core::loads::{beam_load, LoadCombination};
//!
//! // 10 ft tributary width, 50 psf dead, 40 psf live, 20 ft span
//! let load = beam_load(500.0, 400.0, 20.0);
//!
//! assert_eq!(load.combination, LoadCombination::DeadPlusLive);
//! assert!(load.demand.moment > 0.0);
//! ```

pub mod combinations;
pub mod girder;

pub use combinations::{governing_combination, LoadCombination};
pub use girder::girder_load;

use serde::{Deserialize, Serialize};

/// Required moment and shear capacity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Demand {
    /// Bending moment demand
    pub moment: f64,
    /// Shear demand (kips)
    pub shear: f64,
}

impl Demand {
    /// Create a new demand
    pub fn new(moment: f64, shear: f64) -> Self {
        Demand { moment, shear }
    }

    /// Demand after adding a uniform load of `weight_plf` factored by
    /// `factor` over `span_ft`.
    ///
    /// Used for self-weight feedback: `ΔM = w·f·L²/8 · 12/1000` (kip-in),
    /// `ΔV = w·f·L/2 / 1000` (kips).
    pub fn with_uniform_load(&self, weight_plf: f64, factor: f64, span_ft: f64) -> Self {
        let w = weight_plf * factor;
        Demand {
            moment: self.moment + w * span_ft.powi(2) / 8.0 / 1000.0 * 12.0,
            shear: self.shear + w * span_ft / 2.0 / 1000.0,
        }
    }
}

/// Governing demand on a beam and the combination that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamLoad {
    /// Governing moment and shear
    pub demand: Demand,
    /// Which combination governed (drives the self-weight factor later)
    pub combination: LoadCombination,
    /// Governing factored line load (plf)
    pub factored_plf: f64,
}

/// Governing moment/shear for a simply supported beam under uniform load.
///
/// `dead_plf` and `live_plf` are line loads (pressure already multiplied by
/// tributary width). The larger of `1.4D` and `1.2D + 1.6L` governs; on a
/// tie the dead-only combination wins.
///
/// - `moment = w·(12·L)² / (8·1000)`
/// - `shear = w·L·6 / 1000`
pub fn beam_load(dead_plf: f64, live_plf: f64, span_ft: f64) -> BeamLoad {
    let (w, combination) = governing_combination(dead_plf, live_plf);
    let span_in = span_ft * 12.0;

    BeamLoad {
        demand: Demand {
            moment: w * span_in.powi(2) / (8.0 * 1000.0),
            shear: w * span_ft * 6.0 / 1000.0,
        },
        combination,
        factored_plf: w,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_beam_load_live_governs() {
        // w = 1.2*500 + 1.6*400 = 1240 plf
        let load = beam_load(500.0, 400.0, 20.0);
        assert_eq!(load.combination, LoadCombination::DeadPlusLive);
        assert_relative_eq!(load.factored_plf, 1240.0, epsilon = 1e-9);
        // 1240 * 240² / 8000 = 8928
        assert_relative_eq!(load.demand.moment, 8928.0, epsilon = 1e-9);
        // 1240 * 20 * 6 / 1000 = 148.8
        assert_relative_eq!(load.demand.shear, 148.8, epsilon = 1e-9);
    }

    #[test]
    fn test_beam_load_dead_governs() {
        let load = beam_load(500.0, 0.0, 10.0);
        assert_eq!(load.combination, LoadCombination::DeadOnly);
        assert_relative_eq!(load.factored_plf, 700.0, epsilon = 1e-9);
        assert_relative_eq!(load.demand.moment, 700.0 * 14400.0 / 8000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_self_weight_addition() {
        let base = Demand::new(100.0, 10.0);
        let updated = base.with_uniform_load(26.0, 1.2, 20.0);
        // 26*1.2*400/8/1000*12 = 18.72
        assert_relative_eq!(updated.moment, 118.72, epsilon = 1e-9);
        // 26*1.2*20/2/1000 = 0.312
        assert_relative_eq!(updated.shear, 10.312, epsilon = 1e-9);
    }

    proptest! {
        #[test]
        fn prop_beam_load_non_negative(
            dl in 0.0f64..5000.0,
            ll in 0.0f64..5000.0,
            span in 0.1f64..60.0,
        ) {
            let load = beam_load(dl, ll, span);
            prop_assert!(load.demand.moment >= 0.0);
            prop_assert!(load.demand.shear >= 0.0);
        }

        #[test]
        fn prop_beam_load_monotone_in_dead(
            dl in 0.0f64..5000.0,
            extra in 0.0f64..1000.0,
            ll in 0.0f64..5000.0,
            span in 0.1f64..60.0,
        ) {
            let base = beam_load(dl, ll, span);
            let more = beam_load(dl + extra, ll, span);
            prop_assert!(more.demand.moment >= base.demand.moment);
            prop_assert!(more.demand.shear >= base.demand.shear);
        }

        #[test]
        fn prop_beam_load_monotone_in_live(
            dl in 0.0f64..5000.0,
            ll in 0.0f64..5000.0,
            extra in 0.0f64..1000.0,
            span in 0.1f64..60.0,
        ) {
            let base = beam_load(dl, ll, span);
            let more = beam_load(dl, ll + extra, span);
            prop_assert!(more.demand.moment >= base.demand.moment);
            prop_assert!(more.demand.shear >= base.demand.shear);
        }
    }
}
