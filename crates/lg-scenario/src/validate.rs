//! Cross-artifact referential checks.
//!
//! Shared naming makes dangling ids impossible by construction; this pass
//! proves it for each generated scenario before anything reaches disk.

use rustc_hash::FxHashSet;

use lg_demand::{Demand, Fleet};
use lg_network::Topology;
use lg_parking::ParkingLayout;

use crate::{ScenarioError, ScenarioResult};

/// Check every id one artifact uses against the set another produced.
pub fn check_references(
    topo:   &Topology,
    layout: &ParkingLayout,
    fleet:  &Fleet,
    demand: &Demand,
) -> ScenarioResult<()> {
    for e in topo.edges() {
        for node in [&e.from, &e.to] {
            if topo.node(node).is_none() {
                return Err(dangling(&e.id, "node", node));
            }
        }
    }

    let lanes: FxHashSet<_> = topo.lane_ids().collect();
    for area in &layout.areas {
        if !lanes.contains(&area.lane) {
            return Err(dangling(&area.id, "lane", &area.lane));
        }
    }

    let areas: FxHashSet<_> = layout.area_ids().collect();
    for t in &demand.trips {
        if fleet.get(&t.vehicle_type).is_none() {
            return Err(dangling(&t.id, "vehicle type", &t.vehicle_type));
        }
        for edge in [&t.from, &t.to] {
            if !topo.contains_edge(edge) {
                return Err(dangling(&t.id, "edge", edge));
            }
        }
        if !areas.contains(&t.parking_area) {
            return Err(dangling(&t.id, "parking area", &t.parking_area));
        }
    }
    Ok(())
}

fn dangling(owner: impl ToString, kind: &'static str, id: impl ToString) -> ScenarioError {
    ScenarioError::DanglingReference { owner: owner.to_string(), kind, id: id.to_string() }
}
