//! A fully generated scenario and the write pipeline.
//!
//! # Write order
//!
//! ```text
//!   ① nodes + edges   — plain topology files
//!   ② compile         — network compiler turns ① into the .net.xml
//!   ③ additional      — parking areas, spaces, vehicle types
//!   ④ routes          — trips
//!   ⑤ sumocfg         — run configuration
//!   ⑥ spaces.csv      — space inventory
//! ```
//!
//! The first failure stops the pipeline.  Files already written stay on disk.

use std::path::Path;

use lg_core::LayoutConfig;
use lg_demand::{Demand, Fleet};
use lg_network::Topology;
use lg_output::{
    render_additional, render_edges, render_nodes, render_routes, DirWriter, ScenarioWriter,
    SpaceRendering,
};
use lg_parking::ParkingLayout;

use crate::assembler::{ArtifactNames, ScenarioConfig};
use crate::{NetworkCompiler, ScenarioResult};

/// In-memory scenario.  Build with [`ScenarioBuilder`](crate::ScenarioBuilder).
pub struct Scenario {
    pub config:    LayoutConfig,
    pub names:     ArtifactNames,
    pub topology:  Topology,
    pub parking:   ParkingLayout,
    pub fleet:     Fleet,
    pub demand:    Demand,
    pub run:       ScenarioConfig,
    pub rendering: SpaceRendering,
}

impl Scenario {
    /// Write the two topology files (step ①).
    pub fn write_topology<W: ScenarioWriter>(&self, w: &mut W) -> ScenarioResult<()> {
        w.write_document(&self.names.nodes, &render_nodes(&self.topology))?;
        w.write_document(&self.names.edges, &render_edges(&self.topology))?;
        Ok(())
    }

    /// Write every artifact that does not depend on compilation (③–⑥).
    pub fn write_inputs<W: ScenarioWriter>(&self, w: &mut W) -> ScenarioResult<()> {
        w.write_document(&self.names.additional, &render_additional(&self.parking, &self.fleet, self.rendering))?;
        w.write_document(&self.names.routes, &render_routes(&self.demand))?;
        w.write_document(&self.names.sumocfg, &self.run.to_document())?;
        w.write_spaces(&self.names.spaces, &self.parking)?;
        Ok(())
    }

    /// Write every generated artifact to `w`, without compiling.
    pub fn write_to<W: ScenarioWriter>(&self, w: &mut W) -> ScenarioResult<()> {
        self.write_topology(w)?;
        self.write_inputs(w)?;
        w.finish()?;
        Ok(())
    }

    /// Run the full pipeline into `dir`, compiling the network with
    /// `compiler` between the topology and the remaining artifacts.
    ///
    /// Returns the writer so callers can list what was written.
    pub fn generate(&self, dir: &Path, compiler: &dyn NetworkCompiler) -> ScenarioResult<DirWriter> {
        let mut w = DirWriter::new(dir)?;
        self.write_topology(&mut w)?;
        compiler.compile(
            &w.path(&self.names.nodes),
            &w.path(&self.names.edges),
            &w.path(&self.names.net),
        )?;
        self.write_inputs(&mut w)?;
        w.finish()?;
        Ok(w)
    }
}
