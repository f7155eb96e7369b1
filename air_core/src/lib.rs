//! # air_core - Psychrometric Calculation Engine
//!
//! `air_core` is the computational heart of Airside, providing moist-air
//! property analysis with a clean, LLM-friendly API. All inputs and
//! outputs are JSON-serializable, making it ideal for integration with
//! browser frontends and AI assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Never Diverges**: Iterative solvers are bounded and return their
//!   best estimate rather than erroring or looping
//!
//! ## Quick Start
//!
//! ```rust
//! use air_core::calculations::moist_air::{calculate, MoistAirInput};
//! use air_core::psychrometrics::AirParameter;
//!
//! let input = MoistAirInput::new(
//!     "Design day",
//!     AirParameter::DryBulb,
//!     25.0,
//!     AirParameter::RelativeHumidity,
//!     50.0,
//! );
//!
//! let state = calculate(&input, 101.325).unwrap();
//! println!("Wet bulb: {:.1} °C", state.wet_bulb_c);
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&state).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`psychrometrics`] - The property engine: correlations, solvers, dispatcher
//! - [`calculations`] - Calculation item types (state points, processes)
//! - [`atmosphere`] - Altitude to barometric pressure
//! - [`project`] - Project container, metadata, and site settings
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod atmosphere;
pub mod calculations;
pub mod errors;
pub mod project;
pub mod psychrometrics;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use atmosphere::{pressure_from_altitude_kpa, AtmosphericContext};
pub use errors::{CalcError, CalcResult};
pub use project::{Project, ProjectMetadata, SiteSettings};
pub use psychrometrics::{derive_from_pair, saturation_pressure_kpa, AirParameter, AirState};
