//! Integration tests for lg-scenario.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use lg_core::{AccessibleDemand, LayoutConfig};

use crate::{NetworkCompiler, ScenarioResult};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(rows: u32, slots_per_row: u32) -> LayoutConfig {
    LayoutConfig {
        prefix: "lot".into(),
        rows,
        slots_per_row,
        accessible_spaces: slots_per_row.min(1),
        accessible_demand: AccessibleDemand::Rows(1),
        ..Default::default()
    }
}

/// Stand-in for netconvert: checks its inputs exist and writes a stub
/// network file.
#[derive(Default)]
struct FakeCompiler {
    calls: RefCell<Vec<(PathBuf, PathBuf, PathBuf)>>,
}

impl NetworkCompiler for FakeCompiler {
    fn compile(&self, nodes: &Path, edges: &Path, net: &Path) -> ScenarioResult<()> {
        assert!(nodes.exists(), "nodes file must be written before compiling");
        assert!(edges.exists(), "edges file must be written before compiling");
        std::fs::write(net, "<net/>").unwrap();
        self.calls.borrow_mut().push((nodes.to_path_buf(), edges.to_path_buf(), net.to_path_buf()));
        Ok(())
    }
}

// ── Assembler ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod assembler_tests {
    use super::*;
    use crate::{assemble, ArtifactNames, RunSwitches};

    #[test]
    fn names_follow_prefix_and_period() {
        let names = ArtifactNames::new(&config(2, 3));
        assert_eq!(names.nodes, "lot.nod.xml");
        assert_eq!(names.edges, "lot.edg.xml");
        assert_eq!(names.net, "lot.net.xml");
        assert_eq!(names.additional, "lot.add.xml");
        assert_eq!(names.routes, "lot_demand5.rou.xml");
        assert_eq!(names.sumocfg, "lot5.sumocfg");
        assert_eq!(names.spaces, "lot.spaces.csv");
    }

    #[test]
    fn run_descriptor_document() {
        let run = assemble(&ArtifactNames::new(&config(2, 3)));
        assert_eq!(run.switches, RunSwitches { no_step_log: true, time_to_teleport: 0 });

        let xml = String::from_utf8(run.to_document().to_bytes().unwrap()).unwrap();
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let value = |tag: &str| {
            doc.descendants()
                .find(|n| n.has_tag_name(tag))
                .and_then(|n| n.attribute("value"))
                .map(str::to_owned)
        };
        assert_eq!(value("net-file").as_deref(), Some("lot.net.xml"));
        assert_eq!(value("route-files").as_deref(), Some("lot_demand5.rou.xml"));
        assert_eq!(value("additional-files").as_deref(), Some("lot.add.xml"));
        assert_eq!(value("no-step-log").as_deref(), Some("True"));
        assert_eq!(value("time-to-teleport").as_deref(), Some("0"));
    }
}

// ── Builder and validation ────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use lg_core::ParkingAreaId;
    use lg_demand::{Fleet, MobilityClass, Rgb, VehicleType};

    use super::*;
    use crate::{check_references, ScenarioBuilder, ScenarioError};

    #[test]
    fn builds_with_defaults() {
        let s = ScenarioBuilder::new(LayoutConfig::default()).build().unwrap();
        assert_eq!(s.topology.node_count(), 2 * (5 + 2));
        assert_eq!(s.parking.len(), 10);
        assert_eq!(s.demand.len(), 2 * 5 * 10);
    }

    #[test]
    fn single_row_example() {
        let s = ScenarioBuilder::new(config(1, 4)).build().unwrap();
        assert_eq!(s.topology.node_count(), 6);
        assert_eq!(s.topology.connector_count(), 2);
        assert_eq!(s.topology.chain_count(), 0);
        for area in &s.parking.areas {
            assert_eq!(area.capacity(), 4);
            assert!(area.spaces[0].accessible);
            assert_eq!(area.accessible_count(), 1);
        }
        let mut departs: Vec<_> = s.demand.trips.iter().map(|t| t.depart).collect();
        departs.sort_unstable();
        assert_eq!(departs, [0, 0, 5, 5, 10, 10, 15, 15]);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = LayoutConfig { row_pitch: -1.0, ..config(2, 2) };
        assert!(matches!(ScenarioBuilder::new(cfg).build(), Err(ScenarioError::Config(_))));
    }

    fn car_only_fleet() -> Fleet {
        Fleet::new(vec![VehicleType::new("car", Rgb::new(1.0, 0.0, 0.0), MobilityClass::Car)])
    }

    #[test]
    fn car_only_fleet_builds_the_basic_variant() {
        let cfg = LayoutConfig { accessible_demand: AccessibleDemand::None, ..config(1, 4) };
        let s = ScenarioBuilder::new(cfg).fleet(car_only_fleet()).build().unwrap();
        assert_eq!(s.demand.len(), 8);
        assert_eq!(s.fleet.types().len(), 1);
    }

    #[test]
    fn car_only_fleet_rejected_under_row_quota() {
        let result = ScenarioBuilder::new(config(1, 4)).fleet(car_only_fleet()).build();
        assert!(matches!(result, Err(ScenarioError::Demand(_))));
    }

    #[test]
    fn every_trip_area_is_generated() {
        for (rows, slots) in [(0, 0), (0, 3), (1, 4), (4, 0), (9, 7)] {
            let s = ScenarioBuilder::new(config(rows, slots)).build().unwrap();
            let ids: std::collections::HashSet<_> = s.parking.area_ids().collect();
            assert!(s.demand.trips.iter().all(|t| ids.contains(&t.parking_area)));
            assert_eq!(s.demand.len(), 2 * rows as usize * slots as usize);
        }
    }

    #[test]
    fn tampered_trip_is_caught() {
        let mut s = ScenarioBuilder::new(config(2, 2)).build().unwrap();
        s.demand.trips[3].parking_area = ParkingAreaId::new("ParkArea99");
        let err = check_references(&s.topology, &s.parking, &s.fleet, &s.demand).unwrap_err();
        match err {
            ScenarioError::DanglingReference { kind, id, .. } => {
                assert_eq!(kind, "parking area");
                assert_eq!(id, "ParkArea99");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn tampered_area_lane_is_caught() {
        let mut s = ScenarioBuilder::new(config(2, 2)).build().unwrap();
        s.parking.areas[0].lane = lg_core::LaneId::new("road0_5");
        let err = check_references(&s.topology, &s.parking, &s.fleet, &s.demand).unwrap_err();
        assert!(matches!(err, ScenarioError::DanglingReference { kind: "lane", .. }));
    }
}

// ── Write pipeline ────────────────────────────────────────────────────────────

#[cfg(test)]
mod pipeline_tests {
    use lg_output::{MemoryWriter, SpaceRendering};

    use super::*;
    use crate::{ScenarioBuilder, ScenarioError, SkipCompile};

    fn all_names(s: &crate::Scenario) -> Vec<String> {
        let n = &s.names;
        vec![
            n.nodes.clone(), n.edges.clone(), n.additional.clone(),
            n.routes.clone(), n.sumocfg.clone(), n.spaces.clone(),
        ]
    }

    #[test]
    fn generate_writes_every_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let s = ScenarioBuilder::new(config(3, 4)).build().unwrap();
        let compiler = FakeCompiler::default();
        let w = s.generate(dir.path(), &compiler).unwrap();

        assert_eq!(compiler.calls.borrow().len(), 1);
        assert!(dir.path().join("lot.net.xml").exists());
        for name in all_names(&s) {
            assert!(dir.path().join(&name).exists(), "{name} missing");
        }
        assert_eq!(w.written().len(), 6);
    }

    #[test]
    fn generated_xml_parses() {
        let s = ScenarioBuilder::new(config(2, 3)).build().unwrap();
        let mut m = MemoryWriter::new();
        s.write_to(&mut m).unwrap();
        for name in all_names(&s).iter().filter(|n| !n.ends_with(".csv")) {
            let text = m.text(name).unwrap();
            roxmltree::Document::parse(text).unwrap_or_else(|e| panic!("{name}: {e}"));
        }
    }

    #[test]
    fn generation_is_byte_identical() {
        let run = || {
            let s = ScenarioBuilder::new(config(4, 6)).build().unwrap();
            let mut m = MemoryWriter::new();
            s.write_to(&mut m).unwrap();
            m.into_files()
        };
        let a = run();
        let b = run();
        assert_eq!(a.len(), 6);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_layout_still_writes_a_valid_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let s = ScenarioBuilder::new(config(0, 0)).build().unwrap();
        s.generate(dir.path(), &SkipCompile).unwrap();
        let routes = std::fs::read_to_string(dir.path().join("lot_demand5.rou.xml")).unwrap();
        let doc = roxmltree::Document::parse(&routes).unwrap();
        assert_eq!(doc.descendants().filter(|n| n.has_tag_name("trip")).count(), 0);
        assert!(!dir.path().join("lot.net.xml").exists());
    }

    #[test]
    fn roadside_rendering_is_applied() {
        let s = ScenarioBuilder::new(config(1, 4))
            .space_rendering(SpaceRendering::Roadside)
            .build()
            .unwrap();
        let mut m = MemoryWriter::new();
        s.write_to(&mut m).unwrap();
        let add = m.text("lot.add.xml").unwrap();
        assert!(add.contains(r#"roadsideCapacity="4""#));
        assert!(!add.contains("<space "));
    }

    #[test]
    fn missing_compiler_stops_after_topology() {
        let dir = tempfile::tempdir().unwrap();
        let s = ScenarioBuilder::new(config(1, 2)).build().unwrap();
        let compiler = crate::Netconvert::new(dir.path().join("no-such-netconvert"));
        assert_eq!(compiler.program(), dir.path().join("no-such-netconvert"));
        let err = s.generate(dir.path(), &compiler).unwrap_err();
        assert!(matches!(err, ScenarioError::CompilerSpawn { .. }), "{err:?}");
        assert!(dir.path().join("lot.nod.xml").exists());
        assert!(dir.path().join("lot.edg.xml").exists());
        assert!(!dir.path().join("lot.add.xml").exists());
    }

    #[cfg(unix)]
    #[test]
    fn failing_compiler_reports_exit_status() {
        let dir = tempfile::tempdir().unwrap();
        let s = ScenarioBuilder::new(config(1, 2)).build().unwrap();
        let err = s.generate(dir.path(), &crate::Netconvert::new("false")).unwrap_err();
        match err {
            ScenarioError::CompilerFailed { status, .. } => assert!(!status.success()),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(!dir.path().join("lot5.sumocfg").exists());
    }
}
