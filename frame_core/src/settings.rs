//! # Design Settings
//!
//! Constants of the design method that a caller may want to override.
//! Everything has a sensible default so most callers use
//! `DesignSettings::default()`.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "max_beam_count": 20,
//!   "cb": 1.3,
//!   "elastic_modulus_ksi": 29000.0
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Default steel yield strength (ksi)
pub const DEFAULT_YIELD_KSI: f64 = 50.0;

/// Method-wide settings shared by member selection and the beam-count search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Largest interior beam count the search will try
    pub max_beam_count: u32,

    /// Lateral-torsional buckling modification factor
    pub cb: f64,

    /// Modulus of elasticity of steel (ksi)
    pub elastic_modulus_ksi: f64,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            max_beam_count: 20,
            cb: 1.3,
            elastic_modulus_ksi: 29000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DesignSettings::default();
        assert_eq!(settings.max_beam_count, 20);
        assert_eq!(settings.cb, 1.3);
        assert_eq!(settings.elastic_modulus_ksi, 29000.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: DesignSettings = serde_json::from_str(r#"{ "max_beam_count": 8 }"#).unwrap();
        assert_eq!(settings.max_beam_count, 8);
        assert_eq!(settings.cb, 1.3);
    }
}
