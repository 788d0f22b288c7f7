// ============================================================================
// Built-in Common Shapes (for use without CSV file)
// ============================================================================

use once_cell::sync::Lazy;

use super::{SectionCatalog, SectionRecord};

/// Yield strength assumed for the tabulated plastic capacities (ksi)
const TABULATED_FY_KSI: f64 = 50.0;

/// Resistance factor for flexure
const PHI_B: f64 = 0.9;

// (label, W, d, tw, Sx, Zx, Lp, Lr, J, rts, ho) from AISC Manual 16th Ed
#[rustfmt::skip]
const COMMON_W_SHAPES: [(&str, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64); 25] = [
    ("W8X10",  10.0, 7.89, 0.170,   7.81,   8.87, 2.98,  8.62, 0.0426, 0.983,  7.69),
    ("W8X18",  18.0, 8.14, 0.230,  15.2,   17.0,  4.34, 13.5,  0.172,  1.58,   7.81),
    ("W10X12", 12.0, 9.87, 0.190,  10.9,   12.6,  2.87,  8.05, 0.0547, 0.983,  9.66),
    ("W10X22", 22.0, 10.2, 0.240,  23.2,   26.0,  4.70, 13.8,  0.239,  1.55,   9.85),
    ("W12X14", 14.0, 11.9, 0.200,  14.9,   17.4,  2.66,  7.73, 0.0704, 0.950, 11.7),
    ("W12X19", 19.0, 12.2, 0.235,  21.3,   24.7,  2.90,  8.61, 0.180,  1.02,  11.9),
    ("W12X26", 26.0, 12.2, 0.230,  33.4,   37.2,  5.33, 17.2,  0.300,  1.75,  11.8),
    ("W14X22", 22.0, 13.7, 0.230,  29.0,   33.2,  3.67, 11.0,  0.208,  1.27,  13.4),
    ("W14X30", 30.0, 13.8, 0.270,  42.0,   47.3,  5.26, 14.9,  0.380,  1.74,  13.4),
    ("W16X26", 26.0, 15.7, 0.250,  38.4,   44.2,  3.96, 11.2,  0.262,  1.36,  15.4),
    ("W16X31", 31.0, 15.9, 0.275,  47.2,   54.0,  4.13, 11.8,  0.461,  1.39,  15.6),
    ("W18X35", 35.0, 17.7, 0.300,  57.6,   66.5,  4.31, 12.3,  0.506,  1.49,  17.3),
    ("W18X50", 50.0, 18.0, 0.355,  88.9,  101.0,  5.83, 17.0,  1.24,   1.98,  17.4),
    ("W21X44", 44.0, 20.7, 0.350,  81.6,   95.4,  4.45, 13.0,  0.770,  1.57,  20.2),
    ("W21X50", 50.0, 20.8, 0.380,  94.5,  110.0,  4.59, 13.6,  1.14,   1.64,  20.3),
    ("W24X55", 55.0, 23.6, 0.395, 114.0,  134.0,  4.73, 13.9,  1.18,   1.66,  23.1),
    ("W24X62", 62.0, 23.7, 0.430, 131.0,  153.0,  4.87, 14.4,  1.71,   1.71,  23.2),
    ("W24X76", 76.0, 23.9, 0.440, 176.0,  200.0,  6.78, 19.5,  2.68,   2.33,  23.2),
    ("W27X84", 84.0, 26.7, 0.460, 213.0,  244.0,  7.31, 20.8,  2.81,   2.49,  26.0),
    ("W30X90", 90.0, 29.5, 0.470, 245.0,  283.0,  7.38, 20.9,  2.84,   2.51,  28.9),
    ("W33X130", 130.0, 33.1, 0.580,  406.0,  467.0,  9.12, 27.8,  7.37,  2.84, 32.2),
    ("W36X150", 150.0, 35.9, 0.625,  504.0,  581.0,  9.11, 26.3, 10.1,   2.82, 35.0),
    ("W36X194", 194.0, 36.5, 0.765,  664.0,  767.0, 12.1,  36.4, 12.4,   3.29, 35.6),
    ("W40X211", 211.0, 39.4, 0.750,  803.0,  906.0, 11.9,  36.8, 15.1,   3.41, 38.2),
    ("W44X262", 262.0, 43.3, 0.785, 1060.0, 1190.0, 11.9,  36.2, 17.3,   4.21, 41.9),
];

static BUILTIN: Lazy<SectionCatalog> = Lazy::new(|| {
    let mut catalog = SectionCatalog::from_records(COMMON_W_SHAPES.iter().map(
        |&(label, w, d, tw, sx, zx, lp, lr, j, rts, ho)| {
            SectionRecord::new(label, w, d, tw)
                .with_flexure(sx, PHI_B * TABULATED_FY_KSI * zx, lp, lr)
                .with_torsion(j, rts, ho)
        },
    ));
    catalog.source = Some("builtin-common".to_string());
    catalog
});

/// Get a catalog with common W-shapes pre-loaded
///
/// This provides a minimal set of beam and girder shapes for testing and demos without
/// requiring a full catalog CSV file. The `plastic` column is `φ·Fy·Zx` in
/// kip-in for Fy = 50 ksi.
pub fn builtin_catalog() -> &'static SectionCatalog {
    &BUILTIN
}
