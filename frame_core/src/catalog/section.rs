//! Catalog entry for a single rolled steel section.

use serde::{Deserialize, Serialize};

/// Steel section with the properties needed for beam/girder selection.
///
/// Weight, depth and web thickness are required for every record. The
/// flexural and torsional properties are optional: a record missing one of
/// them is simply left out of the failure-mode subsets that need it.
///
/// Units follow the AISC Shapes Database: plf, in, in³, in⁴, and ft for the
/// limiting unbraced lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Section identifier (e.g. "W16X26")
    pub id: String,

    /// Nominal weight per linear foot (plf)
    pub weight_plf: f64,

    /// Overall depth (in)
    pub depth_in: f64,

    /// Web thickness (in)
    pub tw_in: f64,

    /// Elastic section modulus about X-axis (in³)
    pub sx_in3: Option<f64>,

    /// Design plastic moment capacity
    pub plastic: Option<f64>,

    /// Limiting unbraced length for the plastic limit state (ft)
    pub lp_ft: Option<f64>,

    /// Limiting unbraced length for inelastic LTB (ft)
    pub lr_ft: Option<f64>,

    /// Torsional constant (in⁴)
    pub j_in4: Option<f64>,

    /// Effective radius of gyration for LTB (in)
    pub rts_in: Option<f64>,

    /// Distance between flange centroids (in)
    pub ho_in: Option<f64>,
}

impl SectionRecord {
    /// Create a record with only the required properties.
    pub fn new(id: impl Into<String>, weight_plf: f64, depth_in: f64, tw_in: f64) -> Self {
        SectionRecord {
            id: id.into(),
            weight_plf,
            depth_in,
            tw_in,
            sx_in3: None,
            plastic: None,
            lp_ft: None,
            lr_ft: None,
            j_in4: None,
            rts_in: None,
            ho_in: None,
        }
    }

    /// Add flexural properties (builder pattern)
    pub fn with_flexure(mut self, sx_in3: f64, plastic: f64, lp_ft: f64, lr_ft: f64) -> Self {
        self.sx_in3 = Some(sx_in3);
        self.plastic = Some(plastic);
        self.lp_ft = Some(lp_ft);
        self.lr_ft = Some(lr_ft);
        self
    }

    /// Add torsional properties used by the elastic LTB check (builder pattern)
    pub fn with_torsion(mut self, j_in4: f64, rts_in: f64, ho_in: f64) -> Self {
        self.j_in4 = Some(j_in4);
        self.rts_in = Some(rts_in);
        self.ho_in = Some(ho_in);
        self
    }

    /// Web shear capacity `0.6·Fy·d·tw` (kips)
    pub fn shear_capacity_kips(&self, fy_ksi: f64) -> f64 {
        0.6 * fy_ksi * self.depth_in * self.tw_in
    }
}

impl std::fmt::Display for SectionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.1} plf, d={:.2} in, tw={:.3} in)",
            self.id, self.weight_plf, self.depth_in, self.tw_in
        )
    }
}
