//! # Air-Side Calculations
//!
//! This module contains all calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, ...) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`moist_air`] - Moist-air state point resolution (psychrometrics)
//! - [`process`] - Energy change across an air process between two points

pub mod moist_air;
pub mod process;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use moist_air::{MoistAirInput, MoistAirResult};
pub use process::{ProcessInput, ProcessResult};

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Moist-air state point
    MoistAir(MoistAirInput),
    /// Energy change between two state points
    Process(ProcessInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::MoistAir(p) => &p.label,
            CalculationItem::Process(p) => &p.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::MoistAir(_) => "MoistAir",
            CalculationItem::Process(_) => "Process",
        }
    }
}
