//! `lg-core` — foundational types for the `lotgen` scenario generator.
//!
//! This crate is a dependency of every other `lg-*` crate.  It has no `lg-*`
//! dependencies and only `thiserror` externally (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`config`]  | `LayoutConfig`, `AccessibleDemand`                        |
//! | [`ids`]     | `NodeId`, `EdgeId`, `LaneId`, `ParkingAreaId`, …          |
//! | [`naming`]  | `Corridor`, `Direction`, pure id-derivation functions     |
//! | [`geo`]     | `Point2`                                                  |
//! | [`error`]   | `LotError`, `LotResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config, ids and `Point2`.|

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod naming;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AccessibleDemand, LayoutConfig};
pub use error::{LotError, LotResult};
pub use geo::Point2;
pub use ids::{EdgeId, LaneId, NodeId, ParkingAreaId, SpaceId, TripId, VehicleTypeId};
pub use naming::{Corridor, Direction};
