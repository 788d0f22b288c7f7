//! # Beam-Count Search
//!
//! Finds the number of interior beams that minimizes the steel weight of a
//! rectangular bay.
//!
//! ## Framing Model
//!
//! - Interior beams and the two side beams span the short direction.
//!   Interior beams are evenly spaced along the long direction at
//!   `long/(n+1)`; side beams carry half an interior beam's tributary width.
//! - Two girders span the long direction and pick up the interior beam
//!   reactions as equally spaced point loads.
//! - All members are simply supported and unbraced over their full span.
//!
//! ## Search
//!
//! Starting at one interior beam, each trial designs the three members and
//! totals the weight. The search stops at the first trial that is not
//! lighter than the best so far and returns the best. Trials where any
//! member cannot be designed are skipped. Passing the beam-count ceiling
//! ([`DesignSettings::max_beam_count`]) ends the search as infeasible.
//!
//! ## Example
//!
//! ```rust
//! use frame_core::catalog::builtin_catalog;
//! use frame_core::frame::{frame_optimizer, FrameInput, FrameOutcome};
//! use frame_core::settings::DesignSettings;
//!
//! let input = FrameInput::new(20.0, 30.0, 50.0, 40.0);
//! let outcome = frame_optimizer(builtin_catalog(), &input, &DesignSettings::default()).unwrap();
//!
//! match outcome {
//!     FrameOutcome::Optimized(design) => {
//!         println!("{} interior beams, {:.0} lb", design.beam_count(), design.total_weight_lb());
//!     }
//!     FrameOutcome::Infeasible { reason, .. } => println!("{}", reason),
//! }
//! ```

pub mod layout;

pub use layout::{BayLayout, MemberLine};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::catalog::SectionCatalog;
use crate::design::{design, DesignFailure, MemberDesignInput, SelectedSection};
use crate::errors::{FrameError, FrameResult};
use crate::loads::{beam_load, girder_load, Demand, LoadCombination};
use crate::settings::{DesignSettings, DEFAULT_YIELD_KSI};

/// Bay geometry, floor loads and member limits.
///
/// ## JSON Example
///
/// ```json
/// {
///   "height_ft": 20.0,
///   "width_ft": 30.0,
///   "dead_psf": 50.0,
///   "live_psf": 40.0,
///   "beam_depth_limit_in": 0.0,
///   "girder_depth_limit_in": 0.0,
///   "yield_ksi": 50.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Bay height (ft)
    pub height_ft: f64,

    /// Bay width (ft)
    pub width_ft: f64,

    /// Superimposed dead load (psf)
    pub dead_psf: f64,

    /// Live load (psf)
    pub live_psf: f64,

    /// Maximum depth for interior and side beams (in), 0 for no limit
    #[serde(default)]
    pub beam_depth_limit_in: f64,

    /// Maximum depth for girders (in), 0 for no limit
    #[serde(default)]
    pub girder_depth_limit_in: f64,

    /// Steel yield strength (ksi)
    #[serde(default = "default_yield_ksi")]
    pub yield_ksi: f64,
}

fn default_yield_ksi() -> f64 {
    DEFAULT_YIELD_KSI
}

impl FrameInput {
    /// Input with no depth limits and the default yield strength
    pub fn new(height_ft: f64, width_ft: f64, dead_psf: f64, live_psf: f64) -> Self {
        FrameInput {
            height_ft,
            width_ft,
            dead_psf,
            live_psf,
            beam_depth_limit_in: 0.0,
            girder_depth_limit_in: 0.0,
            yield_ksi: DEFAULT_YIELD_KSI,
        }
    }

    /// Set beam and girder depth limits (builder pattern)
    pub fn with_depth_limits(mut self, beam_in: f64, girder_in: f64) -> Self {
        self.beam_depth_limit_in = beam_in;
        self.girder_depth_limit_in = girder_in;
        self
    }

    /// Set the yield strength (builder pattern)
    pub fn with_yield(mut self, yield_ksi: f64) -> Self {
        self.yield_ksi = yield_ksi;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> FrameResult<()> {
        let positive = [
            ("height_ft", self.height_ft, "Height must be positive"),
            ("width_ft", self.width_ft, "Width must be positive"),
            ("yield_ksi", self.yield_ksi, "Yield strength must be positive"),
        ];
        for (field, value, reason) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(FrameError::invalid_input(field, value.to_string(), reason));
            }
        }

        let non_negative = [
            ("dead_psf", self.dead_psf),
            ("live_psf", self.live_psf),
            ("beam_depth_limit_in", self.beam_depth_limit_in),
            ("girder_depth_limit_in", self.girder_depth_limit_in),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FrameError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be zero or positive",
                ));
            }
        }
        Ok(())
    }

    /// (long, short) bay dimensions. Height is taken as long on a square bay.
    pub fn spans(&self) -> (f64, f64) {
        if self.height_ft >= self.width_ft {
            (self.height_ft, self.width_ft)
        } else {
            (self.width_ft, self.height_ft)
        }
    }
}

/// Member roles within a bay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberRole {
    /// Infill beam spanning the short direction
    InteriorBeam,
    /// Edge beam spanning the short direction
    SideBeam,
    /// Edge member spanning the long direction
    Girder,
}

impl MemberRole {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MemberRole::InteriorBeam => "Interior beam",
            MemberRole::SideBeam => "Side beam",
            MemberRole::Girder => "Girder",
        }
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A member that could not be designed in a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberFailure {
    pub member: MemberRole,
    pub failure: DesignFailure,
}

/// All three members designed for one beam count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameConfiguration {
    /// Number of interior beams
    pub beam_count: u32,

    pub interior_beam: SelectedSection,
    pub side_beam: SelectedSection,
    pub girder: SelectedSection,

    /// `W_i·n·short + W_s·2·short + W_g·2·long` (lb)
    pub total_weight_lb: f64,
}

/// Summary of one trial of the search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub beam_count: u32,
    /// Total weight, or the first member that failed
    pub result: Result<f64, MemberFailure>,
}

/// The optimum configuration and the trials that led to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameDesign {
    pub configuration: FrameConfiguration,

    /// Long bay dimension, spanned by the girders (ft)
    pub long_span_ft: f64,

    /// Short bay dimension, spanned by the beams (ft)
    pub short_span_ft: f64,

    /// Every trial evaluated, in order, including the one that stopped the search
    pub trials: Vec<TrialRecord>,
}

impl FrameDesign {
    pub fn beam_count(&self) -> u32 {
        self.configuration.beam_count
    }

    pub fn total_weight_lb(&self) -> f64 {
        self.configuration.total_weight_lb
    }
}

/// Why the search ended without an optimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameInfeasibility {
    /// The ceiling was passed before the weight stopped decreasing
    BeamCountExceeded { ceiling: u32 },
}

impl std::fmt::Display for FrameInfeasibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameInfeasibility::BeamCountExceeded { ceiling } => write!(
                f,
                "Number of in-fill beams required for system to not fail structurally \
                 exceeds {}, please consider using another floor system or smaller loads.",
                ceiling
            ),
        }
    }
}

/// Result of the beam-count search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum FrameOutcome {
    Optimized(FrameDesign),
    Infeasible {
        reason: FrameInfeasibility,
        trials: Vec<TrialRecord>,
    },
}

impl FrameOutcome {
    /// The optimum design, if the search converged
    pub fn design(&self) -> Option<&FrameDesign> {
        match self {
            FrameOutcome::Optimized(d) => Some(d),
            FrameOutcome::Infeasible { .. } => None,
        }
    }

    /// All trials evaluated by the search
    pub fn trials(&self) -> &[TrialRecord] {
        match self {
            FrameOutcome::Optimized(d) => &d.trials,
            FrameOutcome::Infeasible { trials, .. } => trials,
        }
    }
}

/// Design interior beam, side beam and girder for a fixed beam count.
///
/// This is one trial of [`frame_optimizer`]; it does not validate `input`.
pub fn evaluate_beam_count(
    catalog: &SectionCatalog,
    input: &FrameInput,
    settings: &DesignSettings,
    beam_count: u32,
) -> Result<FrameConfiguration, MemberFailure> {
    let (long, short) = input.spans();

    let interior_trib = long / f64::from(beam_count + 1);
    let side_trib = interior_trib / 2.0;
    let interior_load = beam_load(
        interior_trib * input.dead_psf,
        interior_trib * input.live_psf,
        short,
    );
    let side_load = beam_load(side_trib * input.dead_psf, side_trib * input.live_psf, short);
    debug!(
        "n = {}: interior w = {:.0} plf ({}), side w = {:.0} plf ({})",
        beam_count,
        interior_load.factored_plf,
        interior_load.combination,
        side_load.factored_plf,
        side_load.combination
    );

    let beam_input = |combination: LoadCombination, demand: Demand| {
        MemberDesignInput::new(short, combination, demand)
            .with_depth_limit(input.beam_depth_limit_in)
            .with_yield(input.yield_ksi)
    };
    let interior = design(
        catalog,
        &beam_input(interior_load.combination, interior_load.demand),
        settings,
    );
    let side = design(catalog, &beam_input(side_load.combination, side_load.demand), settings);

    let interior = interior.into_result().map_err(|failure| MemberFailure {
        member: MemberRole::InteriorBeam,
        failure,
    })?;

    // Beam end reaction: half its own weight plus the factored shear
    let point_load = interior.weight_plf() * short / 2000.0 + interior_load.demand.shear;
    let girder_demand = girder_load(point_load, beam_count, long);
    let girder_input = MemberDesignInput::new(long, LoadCombination::DeadPlusLive, girder_demand)
        .with_depth_limit(input.girder_depth_limit_in)
        .with_yield(input.yield_ksi);
    let girder = design(catalog, &girder_input, settings);

    let side = side.into_result().map_err(|failure| MemberFailure {
        member: MemberRole::SideBeam,
        failure,
    })?;
    let girder = girder.into_result().map_err(|failure| MemberFailure {
        member: MemberRole::Girder,
        failure,
    })?;

    let total_weight_lb = interior.weight_plf() * f64::from(beam_count) * short
        + side.weight_plf() * 2.0 * short
        + girder.weight_plf() * 2.0 * long;

    Ok(FrameConfiguration {
        beam_count,
        interior_beam: interior,
        side_beam: side,
        girder,
        total_weight_lb,
    })
}

/// Find the interior beam count that minimizes total bay weight.
///
/// # Returns
///
/// * `Ok(FrameOutcome::Optimized)` - lightest configuration found
/// * `Ok(FrameOutcome::Infeasible)` - ceiling passed without converging
/// * `Err(FrameError)` - invalid input
pub fn frame_optimizer(
    catalog: &SectionCatalog,
    input: &FrameInput,
    settings: &DesignSettings,
) -> FrameResult<FrameOutcome> {
    input.validate()?;
    let (long, short) = input.spans();

    let mut best: Option<FrameConfiguration> = None;
    let mut trials = Vec::new();

    for beam_count in 1..=settings.max_beam_count {
        let configuration = match evaluate_beam_count(catalog, input, settings, beam_count) {
            Ok(configuration) => configuration,
            Err(failure) => {
                debug!(
                    "n = {}: {} failed ({})",
                    beam_count, failure.member, failure.failure
                );
                trials.push(TrialRecord {
                    beam_count,
                    result: Err(failure),
                });
                continue;
            }
        };

        debug!(
            "n = {}: {} / {} / {} = {:.1} lb",
            beam_count,
            configuration.interior_beam.id(),
            configuration.side_beam.id(),
            configuration.girder.id(),
            configuration.total_weight_lb
        );
        trials.push(TrialRecord {
            beam_count,
            result: Ok(configuration.total_weight_lb),
        });

        if let Some(previous) = best.take() {
            if configuration.total_weight_lb >= previous.total_weight_lb {
                info!(
                    "optimum at {} interior beams, {:.1} lb",
                    previous.beam_count, previous.total_weight_lb
                );
                return Ok(FrameOutcome::Optimized(FrameDesign {
                    configuration: previous,
                    long_span_ft: long,
                    short_span_ft: short,
                    trials,
                }));
            }
        }
        best = Some(configuration);
    }

    info!(
        "no converged configuration within {} interior beams",
        settings.max_beam_count
    );
    Ok(FrameOutcome::Infeasible {
        reason: FrameInfeasibility::BeamCountExceeded {
            ceiling: settings.max_beam_count,
        },
        trials,
    })
}
