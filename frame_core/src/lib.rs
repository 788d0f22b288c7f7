//! # frame_core - Steel Floor Bay Optimizer
//!
//! `frame_core` picks minimum-weight W-shapes for the interior beams, side
//! beams and girders of a rectangular floor bay, and searches for the number
//! of interior beams that makes the whole bay lightest. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Catalog-Driven**: Any section table with the right columns can be used
//!
//! ## Quick Start
//!
//! ```rust
//! use frame_core::{builtin_catalog, frame_optimizer, DesignSettings, FrameInput};
//!
//! let input = FrameInput::new(20.0, 30.0, 50.0, 40.0);
//! let outcome = frame_optimizer(builtin_catalog(), &input, &DesignSettings::default()).unwrap();
//!
//! let json = serde_json::to_string_pretty(&outcome).unwrap();
//! assert!(json.contains("status"));
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Section records, CSV loading and the built-in W-shapes
//! - [`loads`] - Factored beam demands and girder point-load demands
//! - [`design`] - Failure-mode capacities and lightest-section selection
//! - [`frame`] - Beam-count search and bay layout
//! - [`settings`] - Design method constants
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod design;
pub mod errors;
pub mod frame;
pub mod loads;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use catalog::{builtin_catalog, SectionCatalog, SectionRecord};
pub use design::{design, DesignOutcome, MemberDesignInput};
pub use errors::{FrameError, FrameResult};
pub use frame::{frame_optimizer, BayLayout, FrameDesign, FrameInput, FrameOutcome};
pub use loads::{beam_load, girder_load, LoadCombination};
pub use settings::DesignSettings;
