//! Unit tests for lg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn display_is_raw_string() {
        assert_eq!(NodeId::new("principal0").to_string(), "principal0");
        assert_eq!(EdgeId::new("-road3").as_str(), "-road3");
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(NodeId::new("principal0") < NodeId::new("principal1"));
    }

    #[test]
    fn into_string() {
        let s: String = EdgeId::new("principalin").into();
        assert_eq!(s, "principalin");
    }
}

#[cfg(test)]
mod naming {
    use crate::naming::*;
    use crate::{Corridor, Direction};

    #[test]
    fn corridor_nodes() {
        assert_eq!(entrance_node(Corridor::Principal).as_str(), "principalentrada");
        assert_eq!(exit_node(Corridor::Secundaria).as_str(), "secundariasaida");
        assert_eq!(junction_node(Corridor::Secundaria, 4).as_str(), "secundaria4");
    }

    #[test]
    fn corridor_edges() {
        assert_eq!(inbound_edge(Corridor::Principal).as_str(), "principalin");
        assert_eq!(outbound_edge(Corridor::Secundaria).as_str(), "secundariaout");
        assert_eq!(chain_edge(Corridor::Principal, 3).as_str(), "principal2to3");
    }

    #[test]
    fn connector_and_lane() {
        let fwd = connector_edge(Direction::Forward, 2);
        let rev = connector_edge(Direction::Reverse, 2);
        assert_eq!(fwd.as_str(), "road2");
        assert_eq!(rev.as_str(), "-road2");
        assert_eq!(lane(&rev, PARKING_LANE_INDEX).as_str(), "-road2_1");
    }

    #[test]
    fn parking_space_and_trip_ids() {
        assert_eq!(parking_area(Direction::Forward, 0).as_str(), "ParkArea0");
        assert_eq!(parking_area(Direction::Reverse, 0).as_str(), "ParkArea-0");
        assert_eq!(space(Direction::Reverse, 1, 7).as_str(), "r-1s7");
        assert_eq!(trip(Direction::Forward, 3, 2).as_str(), "v3.2");
        assert_eq!(trip(Direction::Reverse, 3, 2).as_str(), "v-3.2");
    }

    #[test]
    fn ids_are_distinct_across_directions_and_rows() {
        // "ParkArea1" + row 1 must not collide with "ParkArea" + row 11 etc.
        let mut seen = std::collections::HashSet::new();
        for row in 0..20 {
            for d in Direction::ALL {
                assert!(seen.insert(parking_area(d, row)), "duplicate area id at row {row}");
            }
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{AccessibleDemand, LayoutConfig, LotError};

    #[test]
    fn default_is_valid() {
        LayoutConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_rows_and_slots_are_valid() {
        let cfg = LayoutConfig { rows: 0, slots_per_row: 0, accessible_spaces: 0, ..Default::default() };
        cfg.validate().unwrap();
        assert_eq!(cfg.trip_count(), 0);
        assert_eq!(cfg.space_padding(), None);
    }

    #[test]
    fn rejects_non_positive_geometry() {
        for cfg in [
            LayoutConfig { row_pitch: 0.0, ..Default::default() },
            LayoutConfig { row_pitch: -35.0, ..Default::default() },
            LayoutConfig { slot_width: f64::NAN, ..Default::default() },
            LayoutConfig { area_length: 0.0, ..Default::default() },
        ] {
            assert!(matches!(cfg.validate(), Err(LotError::Config(_))), "{cfg:?}");
        }
    }

    #[test]
    fn rejects_quota_above_slots() {
        let cfg = LayoutConfig { slots_per_row: 4, accessible_spaces: 5, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_period_and_empty_prefix() {
        assert!(LayoutConfig { period: 0, ..Default::default() }.validate().is_err());
        assert!(LayoutConfig { prefix: "  ".into(), ..Default::default() }.validate().is_err());
    }

    #[test]
    fn derived_geometry() {
        let cfg = LayoutConfig { slots_per_row: 4, slot_width: 5.0, ..Default::default() };
        assert_eq!(cfg.secondary_y(), 35.0);
        assert_eq!(cfg.space_padding(), Some(3.5));
        assert_eq!(cfg.trip_count(), 2 * 5 * 4);
    }

    #[test]
    fn demand_quota_policies() {
        assert!(!AccessibleDemand::None.is_accessible(0, 0));
        assert!(!AccessibleDemand::Rows(0).is_accessible(0, 0));
        assert!(AccessibleDemand::Rows(2).is_accessible(1, 9));
        assert!(!AccessibleDemand::Rows(2).is_accessible(2, 0));
        assert!(AccessibleDemand::Slots(1).is_accessible(7, 0));
        assert!(!AccessibleDemand::Slots(1).is_accessible(0, 1));
        assert_eq!(AccessibleDemand::default(), AccessibleDemand::Rows(1));
    }

    #[test]
    fn zero_quotas_need_no_accessible_type() {
        assert!(!AccessibleDemand::None.requires_accessible());
        assert!(!AccessibleDemand::Rows(0).requires_accessible());
        assert!(!AccessibleDemand::Slots(0).requires_accessible());
        assert!(AccessibleDemand::Rows(1).requires_accessible());
        assert!(AccessibleDemand::Slots(3).requires_accessible());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let cfg: LayoutConfig =
            serde_json::from_str(r#"{ "rows": 2, "accessible_demand": { "slots": 3 } }"#).unwrap();
        assert_eq!(cfg.rows, 2);
        assert_eq!(cfg.slots_per_row, 10);
        assert_eq!(cfg.accessible_demand, AccessibleDemand::Slots(3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_json_field_rejected() {
        let r: Result<LayoutConfig, _> = serde_json::from_str(r#"{ "lanes": 2 }"#);
        assert!(r.is_err());
    }
}

#[cfg(test)]
mod geo {
    use crate::Point2;

    #[test]
    fn offset_and_distance() {
        let p = Point2::new(1.0, 2.0).offset(3.0, 4.0);
        assert_eq!(p, Point2::new(4.0, 6.0));
        assert!((Point2::new(1.0, 2.0).distance(p) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(Point2::new(-100.0, 0.0).to_string(), "(-100, 0)");
    }
}
