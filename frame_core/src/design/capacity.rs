//! Flexural capacity by failure mode
//!
//! A section's flexural capacity for a given span depends on which limit
//! state governs its unbraced length:
//!
//! - **Plastic**: `Lp ≥ L`, capacity is the tabulated plastic moment.
//! - **Inelastic LTB**: `Lp < L ≤ Lr`, linear interpolation between the
//!   plastic moment at `Lp` and `0.7·Fy·Sx` at `Lr`, scaled by Cb.
//! - **Elastic LTB**: `L > Lr`, critical elastic buckling stress times `Sx`.
//!
//! Both LTB capacities are capped at the plastic moment. These are pure
//! functions of a record and a span; nothing is cached on the record.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::catalog::SectionRecord;
use crate::settings::DesignSettings;

/// Governing flexural limit state of a section at a given span.
///
/// Declaration order is the tie-break priority used during selection: a
/// plastic candidate is preferred over an inelastic one of equal weight,
/// and an inelastic over an elastic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FailureMode {
    /// Yielding, full plastic moment reached
    Plastic,
    /// Inelastic lateral-torsional buckling
    InelasticLtb,
    /// Elastic lateral-torsional buckling
    ElasticLtb,
}

impl FailureMode {
    /// All modes in tie-break priority order
    pub const ALL: [FailureMode; 3] = [
        FailureMode::Plastic,
        FailureMode::InelasticLtb,
        FailureMode::ElasticLtb,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FailureMode::Plastic => "Plastic",
            FailureMode::InelasticLtb => "Inelastic LTB",
            FailureMode::ElasticLtb => "Elastic LTB",
        }
    }
}

impl std::fmt::Display for FailureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Classify a record by the unbraced-length thresholds.
///
/// Each mode only needs its own thresholds: plastic needs `Lp`, elastic
/// needs `Lr`, inelastic needs both. Returns `None` when the thresholds
/// present cannot place the span.
pub fn classify(record: &SectionRecord, span_ft: f64) -> Option<FailureMode> {
    match (record.lp_ft, record.lr_ft) {
        (Some(lp), _) if lp >= span_ft => Some(FailureMode::Plastic),
        (_, Some(lr)) if span_ft > lr => Some(FailureMode::ElasticLtb),
        (Some(_), Some(_)) => Some(FailureMode::InelasticLtb),
        _ => None,
    }
}

/// Flexural capacity of `record` at `span_ft` under `mode`.
///
/// Returns `None` if a property the mode needs is missing or the result is
/// not a finite number.
pub fn flexural_capacity(
    record: &SectionRecord,
    mode: FailureMode,
    span_ft: f64,
    fy_ksi: f64,
    settings: &DesignSettings,
) -> Option<f64> {
    let capacity = match mode {
        FailureMode::Plastic => record.plastic,
        FailureMode::InelasticLtb => inelastic_ltb_capacity(record, span_ft, fy_ksi, settings),
        FailureMode::ElasticLtb => elastic_ltb_capacity(record, span_ft, settings),
    }?;
    capacity.is_finite().then_some(capacity)
}

/// Classify and compute capacity in one step.
pub fn governing_capacity(
    record: &SectionRecord,
    span_ft: f64,
    fy_ksi: f64,
    settings: &DesignSettings,
) -> Option<(FailureMode, f64)> {
    let mode = classify(record, span_ft)?;
    flexural_capacity(record, mode, span_ft, fy_ksi, settings).map(|capacity| (mode, capacity))
}

fn inelastic_ltb_capacity(
    record: &SectionRecord,
    span_ft: f64,
    fy_ksi: f64,
    settings: &DesignSettings,
) -> Option<f64> {
    let plastic = record.plastic?;
    let sx = record.sx_in3?;
    let lp = record.lp_ft?;
    let lr = record.lr_ft?;
    if lr <= lp {
        return None;
    }

    let interpolated =
        settings.cb * (plastic - (plastic - 0.7 * fy_ksi * sx) * ((span_ft - lp) / (lr - lp)));
    Some(interpolated.min(plastic))
}

fn elastic_ltb_capacity(
    record: &SectionRecord,
    span_ft: f64,
    settings: &DesignSettings,
) -> Option<f64> {
    let plastic = record.plastic?;
    let sx = record.sx_in3?;
    let j = record.j_in4?;
    let rts = record.rts_in?;
    let ho = record.ho_in?;
    if rts <= 0.0 || sx <= 0.0 || ho <= 0.0 {
        return None;
    }

    let slenderness_sq = (span_ft * 12.0 / rts).powi(2);
    let fcr = settings.cb * PI.powi(2) * settings.elastic_modulus_ksi / slenderness_sq
        * (1.0 + 0.078 * j / (sx * ho) * slenderness_sq).sqrt();
    Some((fcr * sx).min(plastic))
}
