//! Layout parameters.
//!
//! Every coordinate and identifier in a generated scenario derives from one
//! `LayoutConfig`.  Applications build it from [`Default`], a JSON file (with
//! the `serde` feature) or command-line overrides, then call
//! [`LayoutConfig::validate`] before any generator runs.

use crate::{LotError, LotResult};

// ── AccessibleDemand ─────────────────────────────────────────────────────────

/// How trips are assigned the accessible vehicle class.
///
/// This is independent of the per-area space quota
/// ([`LayoutConfig::accessible_spaces`]), which only flags spaces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AccessibleDemand {
    /// Every trip uses the standard car class.
    None,
    /// Trips to rows `0..n` use the accessible class.
    Rows(u32),
    /// Trips in slot-ordinal waves `0..n` use the accessible class.
    Slots(u32),
}

impl AccessibleDemand {
    /// `true` if the trip for (`row`, `slot`) should use the accessible class.
    pub fn is_accessible(self, row: u32, slot: u32) -> bool {
        match self {
            AccessibleDemand::None => false,
            AccessibleDemand::Rows(n) => row < n,
            AccessibleDemand::Slots(n) => slot < n,
        }
    }

    /// `true` if any trip can be flagged, i.e. the fleet needs an accessible
    /// vehicle type.  Zero quotas behave like [`AccessibleDemand::None`].
    pub fn requires_accessible(self) -> bool {
        matches!(self, AccessibleDemand::Rows(n) | AccessibleDemand::Slots(n) if n > 0)
    }
}

impl Default for AccessibleDemand {
    /// One accessible row.
    fn default() -> Self {
        AccessibleDemand::Rows(1)
    }
}

// ── LayoutConfig ─────────────────────────────────────────────────────────────

/// Geometric and demand parameters for one scenario.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LayoutConfig {
    /// File-name prefix shared by every artifact (`{prefix}.nod.xml`, …).
    pub prefix: String,

    /// Number of parking rows, one connector pair each.  Zero is a valid,
    /// empty-capacity layout.
    pub rows: u32,

    /// Distance between consecutive row junctions along the corridors (m).
    pub row_pitch: f64,

    /// Width of one parking slot (m).
    pub slot_width: f64,

    /// Spaces in every parking area.  Zero yields areas without spaces.
    pub slots_per_row: u32,

    /// Leading spaces of every area flagged accessibility-reserved.
    pub accessible_spaces: u32,

    /// Which trips are given the accessible vehicle class.
    pub accessible_demand: AccessibleDemand,

    /// Departure spacing between slot-ordinal waves, in seconds.
    pub period: u32,

    /// Stop duration written for "park until the run ends", in seconds.
    pub park_duration: f64,

    /// `angle` attribute of every parking area (degrees).
    pub area_angle: f64,

    /// `length` attribute of every parking area (m).
    pub area_length: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            prefix:            "parking".to_owned(),
            rows:              5,
            row_pitch:         35.0,
            slot_width:        5.0,
            slots_per_row:     10,
            accessible_spaces: 1,
            accessible_demand: AccessibleDemand::Rows(1),
            period:            5,
            park_duration:     1e9,
            area_angle:        270.0,
            area_length:       8.0,
        }
    }
}

impl LayoutConfig {
    /// Reject parameters that would produce degenerate geometry or a quota
    /// that cannot be honoured.
    pub fn validate(&self) -> LotResult<()> {
        if self.prefix.trim().is_empty() {
            return Err(LotError::Config("prefix must not be empty".into()));
        }
        positive("row_pitch", self.row_pitch)?;
        positive("slot_width", self.slot_width)?;
        positive("area_length", self.area_length)?;
        positive("park_duration", self.park_duration)?;
        if !self.area_angle.is_finite() {
            return Err(LotError::Config(format!("area_angle must be finite, got {}", self.area_angle)));
        }
        if self.period == 0 {
            return Err(LotError::Config("period must be at least 1 s".into()));
        }
        if self.accessible_spaces > self.slots_per_row {
            return Err(LotError::Config(format!(
                "accessible_spaces ({}) exceeds slots_per_row ({})",
                self.accessible_spaces, self.slots_per_row
            )));
        }
        // Demand quotas are unbounded: a quota above the row or slot count
        // marks every trip accessible.
        Ok(())
    }

    /// y coordinate of the secundaria corridor.
    #[inline]
    pub fn secondary_y(&self) -> f64 {
        (self.slots_per_row as f64 + 3.0) * self.slot_width
    }

    /// Gap inserted between adjacent spaces, or `None` for empty areas.
    pub fn space_padding(&self) -> Option<f64> {
        if self.slots_per_row == 0 {
            return None;
        }
        Some((3.0 * self.slot_width - 1.0) / self.slots_per_row as f64)
    }

    /// Total trips the demand generator emits: two per row per slot.
    #[inline]
    pub fn trip_count(&self) -> usize {
        2 * self.rows as usize * self.slots_per_row as usize
    }
}

fn positive(name: &str, v: f64) -> LotResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(LotError::Config(format!("{name} must be a positive number, got {v}")))
    }
}
