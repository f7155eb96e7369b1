//! # Project Data Structures
//!
//! The `Project` struct is the root container for a calculation session.
//! Projects serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: SiteSettings (altitude, hence barometric pressure)
//! └── items: HashMap<Uuid, CalculationItem> (all calculations)
//! ```
//!
//! Results are never stored: the project holds inputs only, and the
//! resolve helpers recompute against the current site pressure on every
//! call. Editing a point's inputs, changing the given parameter pair, or
//! moving the site altitude therefore takes effect on the next resolve,
//! with no stale derived state to invalidate.
//!
//! ## Example
//!
//! ```rust
//! use air_core::project::Project;
//! use air_core::calculations::{CalculationItem, MoistAirInput};
//! use air_core::psychrometrics::AirParameter;
//!
//! let mut project = Project::new("Jane Engineer", "26-042", "ACME Corp");
//!
//! let id = project.add_item(CalculationItem::MoistAir(MoistAirInput::new(
//!     "Outdoor air",
//!     AirParameter::DryBulb,
//!     32.0,
//!     AirParameter::WetBulb,
//!     23.0,
//! )));
//!
//! let resolved = project.resolve_point(&id).unwrap();
//! assert!(resolved.relative_humidity_pct > 0.0);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::atmosphere::AtmosphericContext;
use crate::calculations::{moist_air, process, CalculationItem, MoistAirResult, ProcessResult};
use crate::errors::{CalcError, CalcResult};

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// This is the top-level struct that gets serialized to project files.
/// Items are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Site settings (altitude, derived pressure)
    pub settings: SiteSettings,

    /// All calculation items, keyed by UUID
    ///
    /// Using a HashMap instead of a Vec provides:
    /// - O(1) lookup for references (process endpoints)
    /// - No duplicate ID issues
    /// - Stable references when items are reordered
    pub items: HashMap<Uuid, CalculationItem>,
}

impl Project {
    /// Create a new empty project at sea level.
    ///
    /// # Arguments
    ///
    /// * `engineer` - Name of the responsible engineer
    /// * `job_id` - Job/project number (e.g., "26-001")
    /// * `client` - Client name
    ///
    /// # Example
    ///
    /// ```rust
    /// use air_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "26-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: SiteSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Barometric pressure (kPa) at the project site.
    pub fn pressure_kpa(&self) -> f64 {
        self.settings.atmosphere().pressure_kpa.value()
    }

    /// Move the project site to a new altitude (m).
    ///
    /// Every subsequent resolve sees the new pressure.
    pub fn set_altitude(&mut self, altitude_m: f64) -> CalcResult<()> {
        if !altitude_m.is_finite() || altitude_m < 0.0 {
            return Err(CalcError::invalid_input(
                "altitude_m",
                altitude_m.to_string(),
                "Altitude must be zero or positive",
            ));
        }
        if altitude_m > 11_000.0 {
            return Err(CalcError::invalid_input(
                "altitude_m",
                altitude_m.to_string(),
                "Altitude beyond the standard-atmosphere range (11 000 m)",
            ));
        }
        self.settings.altitude_m = altitude_m;
        self.touch();
        Ok(())
    }

    /// Add a calculation item to the project.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculation item by UUID.
    ///
    /// Removing a moist-air point also removes every process that
    /// references it; a process with a dangling endpoint has no
    /// meaning. Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id)?;
        if matches!(item, CalculationItem::MoistAir(_)) {
            let dependents = self.dependent_processes(id);
            for dependent in dependents {
                self.items.remove(&dependent);
            }
        }
        self.touch();
        Some(item)
    }

    /// Ids of processes that reference the given state point.
    pub fn dependent_processes(&self, point_id: &Uuid) -> Vec<Uuid> {
        self.items
            .iter()
            .filter_map(|(id, item)| match item {
                CalculationItem::Process(p) if p.references(point_id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Get a calculation item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Get a mutable reference to a calculation item by UUID.
    ///
    /// Note: This method updates the modified timestamp when an item is
    /// found. The caller should be aware that getting a mutable
    /// reference marks the project as modified.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut CalculationItem> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of calculation items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Resolve a moist-air point against the current site pressure.
    pub fn resolve_point(&self, id: &Uuid) -> CalcResult<MoistAirResult> {
        match self.get_item(id) {
            Some(CalculationItem::MoistAir(input)) => {
                moist_air::calculate(input, self.pressure_kpa())
            }
            Some(other) => Err(CalcError::invalid_input(
                "id",
                id.to_string(),
                format!("Item is a {}, not a moist-air point", other.calc_type()),
            )),
            None => Err(CalcError::item_not_found(id.to_string())),
        }
    }

    /// Resolve a process: both endpoints against the current site
    /// pressure, then the energy change between them.
    pub fn resolve_process(&self, id: &Uuid) -> CalcResult<ProcessResult> {
        let input = match self.get_item(id) {
            Some(CalculationItem::Process(input)) => input,
            Some(other) => {
                return Err(CalcError::invalid_input(
                    "id",
                    id.to_string(),
                    format!("Item is a {}, not a process", other.calc_type()),
                ))
            }
            None => return Err(CalcError::item_not_found(id.to_string())),
        };

        let start = self.resolve_point(&input.start_point)?;
        let end = self.resolve_point(&input.end_point)?;
        process::calculate(input, &start, &end)
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Site settings: the one shared input every derivation depends on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Site altitude above sea level (m)
    pub altitude_m: f64,
}

impl SiteSettings {
    /// Atmospheric snapshot for the current altitude.
    pub fn atmosphere(&self) -> AtmosphericContext {
        AtmosphericContext::at_altitude(self.altitude_m)
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings { altitude_m: 0.0 }
    }
}
