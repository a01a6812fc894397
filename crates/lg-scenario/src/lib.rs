//! `lg-scenario` — scenario assembly and the generation pipeline.
//!
//! # Pipeline
//!
//! ```text
//!   LayoutConfig ──validate──► build_topology ─► build_parking ─► build_demand
//!                                   │                 │               │
//!                                   └──── check_references ◄──────────┘
//!                                                 │
//!                      Scenario::generate ── nodes/edges ─► compile ─► add/rou/cfg/csv
//! ```
//!
//! Everything up to `check_references` happens in memory, so configuration
//! and referential errors surface before any file exists.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lg_core::LayoutConfig;
//! use lg_scenario::{Netconvert, ScenarioBuilder};
//!
//! let scenario = ScenarioBuilder::new(LayoutConfig::default()).build()?;
//! scenario.generate(Path::new("out"), &Netconvert::locate())?;
//! ```

pub mod assembler;
pub mod builder;
pub mod compiler;
pub mod error;
pub mod scenario;
pub mod validate;

#[cfg(test)]
mod tests;

pub use assembler::{assemble, ArtifactNames, RunSwitches, ScenarioConfig};
pub use builder::ScenarioBuilder;
pub use compiler::{Netconvert, NetworkCompiler, SkipCompile};
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::Scenario;
pub use validate::check_references;
