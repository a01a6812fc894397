//! Fluent builder for constructing a [`Scenario`].

use log::info;

use lg_core::LayoutConfig;
use lg_demand::{build_demand, Fleet};
use lg_network::build_topology;
use lg_output::SpaceRendering;
use lg_parking::build_parking;

use crate::assembler::{assemble, ArtifactNames};
use crate::validate::check_references;
use crate::{Scenario, ScenarioResult};

/// Fluent builder for [`Scenario`].
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                       |
/// |------------------------|-------------------------------|
/// | `.fleet(f)`            | `Fleet::standard()`           |
/// | `.space_rendering(r)`  | `SpaceRendering::Explicit`    |
///
/// # Example
///
/// ```rust,ignore
/// let scenario = ScenarioBuilder::new(LayoutConfig::default())
///     .space_rendering(SpaceRendering::Roadside)
///     .build()?;
/// scenario.generate(Path::new("out"), &Netconvert::locate())?;
/// ```
pub struct ScenarioBuilder {
    config:    LayoutConfig,
    fleet:     Option<Fleet>,
    rendering: SpaceRendering,
}

impl ScenarioBuilder {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config, fleet: None, rendering: SpaceRendering::default() }
    }

    /// Replace the standard fleet.  It must contain a car class, plus an
    /// accessible class whenever the demand policy flags trips, or `build`
    /// fails.
    pub fn fleet(mut self, fleet: Fleet) -> Self {
        self.fleet = Some(fleet);
        self
    }

    pub fn space_rendering(mut self, rendering: SpaceRendering) -> Self {
        self.rendering = rendering;
        self
    }

    /// Validate the configuration, run every generator in dependency order
    /// and cross-check the results.  Nothing is written.
    pub fn build(self) -> ScenarioResult<Scenario> {
        self.config.validate()?;

        let fleet = self.fleet.unwrap_or_default();
        let topology = build_topology(&self.config)?;
        let parking = build_parking(&self.config);
        let demand = build_demand(&self.config, &fleet)?;
        check_references(&topology, &parking, &fleet, &demand)?;

        let names = ArtifactNames::new(&self.config);
        let run = assemble(&names);

        info!(
            "scenario {}: {} rows, {} parking areas, {} spaces, {} trips",
            self.config.prefix,
            self.config.rows,
            parking.len(),
            parking.space_count(),
            demand.len()
        );

        Ok(Scenario {
            config: self.config,
            names,
            topology,
            parking,
            fleet,
            demand,
            run,
            rendering: self.rendering,
        })
    }
}
