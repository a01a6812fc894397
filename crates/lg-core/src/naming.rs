//! Deterministic id derivation shared by every generator.
//!
//! Each id is a pure function of (corridor or direction, row, slot).  The
//! topology, parking and demand generators call the same functions, so a
//! trip's parking-area id always names an area the layout produced without
//! any lookup table being passed between them.

use std::fmt;

use crate::ids::{EdgeId, LaneId, NodeId, ParkingAreaId, SpaceId, TripId};

// ── Corridor ─────────────────────────────────────────────────────────────────

/// One of the two parallel access roads bounding the parking rows.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Corridor {
    /// Flows entrance → exit, at y = 0.
    Principal,
    /// Flows exit → entrance, offset in y past the parking rows.
    Secundaria,
}

impl Corridor {
    pub const ALL: [Corridor; 2] = [Corridor::Principal, Corridor::Secundaria];

    pub fn name(self) -> &'static str {
        match self {
            Corridor::Principal => "principal",
            Corridor::Secundaria => "secundaria",
        }
    }
}

impl fmt::Display for Corridor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Direction ────────────────────────────────────────────────────────────────

/// Travel direction of a connector road.
///
/// `Forward` runs principal → secundaria and `Reverse` the opposite way; the
/// reverse ids carry a leading `-`, as the simulator does for opposite edges.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// Emission order used by every generator.
    pub const ALL: [Direction; 2] = [Direction::Forward, Direction::Reverse];

    #[inline]
    pub fn sign(self) -> &'static str {
        match self {
            Direction::Forward => "",
            Direction::Reverse => "-",
        }
    }
}

// ── Nodes ────────────────────────────────────────────────────────────────────

pub fn entrance_node(c: Corridor) -> NodeId {
    NodeId::new(format!("{c}entrada"))
}

pub fn exit_node(c: Corridor) -> NodeId {
    NodeId::new(format!("{c}saida"))
}

pub fn junction_node(c: Corridor, row: u32) -> NodeId {
    NodeId::new(format!("{c}{row}"))
}

// ── Edges and lanes ──────────────────────────────────────────────────────────

/// Edge between a corridor's entrance node and its first junction.
pub fn inbound_edge(c: Corridor) -> EdgeId {
    EdgeId::new(format!("{c}in"))
}

/// Edge between a corridor's last junction and its exit node.
pub fn outbound_edge(c: Corridor) -> EdgeId {
    EdgeId::new(format!("{c}out"))
}

/// Corridor edge joining junctions `row - 1` and `row`.
///
/// # Panics
/// Panics in debug mode if `row == 0`; row 0 has no predecessor.
pub fn chain_edge(c: Corridor, row: u32) -> EdgeId {
    debug_assert!(row > 0, "chain edges start at row 1");
    EdgeId::new(format!("{c}{}to{row}", row - 1))
}

pub fn connector_edge(d: Direction, row: u32) -> EdgeId {
    EdgeId::new(format!("{}road{row}", d.sign()))
}

pub fn lane(edge: &EdgeId, index: u32) -> LaneId {
    LaneId::new(format!("{edge}_{index}"))
}

/// Index of the vehicle lane on a connector; the parking areas sit on it.
pub const PARKING_LANE_INDEX: u32 = 1;

// ── Parking ──────────────────────────────────────────────────────────────────

pub fn parking_area(d: Direction, row: u32) -> ParkingAreaId {
    ParkingAreaId::new(format!("ParkArea{}{row}", d.sign()))
}

pub fn space(d: Direction, row: u32, slot: u32) -> SpaceId {
    SpaceId::new(format!("r{}{row}s{slot}", d.sign()))
}

// ── Demand ───────────────────────────────────────────────────────────────────

pub fn trip(d: Direction, row: u32, slot: u32) -> TripId {
    TripId::new(format!("v{}{row}.{slot}", d.sign()))
}
