//! Node/edge graph representation and builder.
//!
//! # Layout
//!
//! Unlike a routing graph this one is only ever serialised, so nodes and
//! edges are kept in insertion order (the order they appear in the plain-XML
//! files) with hash indexes on the side for id lookups.
//!
//! ```text
//!  secundariaentrada ◄── secundaria0 ◄── secundaria1 ◄── … ◄── secundariasaida
//!                          ▲   │           ▲   │
//!                   -road0 │   │ road0     │   │
//!                          │   ▼           │   ▼
//!  principalentrada ──► principal0 ──► principal1 ──► … ──► principalsaida
//! ```

use rustc_hash::FxHashMap;

use lg_core::naming;
use lg_core::{Direction, EdgeId, LaneId, NodeId, Point2};

use crate::{NetworkError, NetworkResult};

/// Lanes on every corridor edge and every connector edge.
pub const EDGE_LANES: u32 = 2;

/// Width of the pedestrian lane (index 0) on a connector, in metres.
pub const PEDESTRIAN_LANE_WIDTH: f64 = 2.0;

// ── Graph elements ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id:  NodeId,
    pub pos: Point2,
}

/// Which part of the layout an edge belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// Corridor edge touching an entrance or exit node.
    Access,
    /// Corridor edge between two consecutive row junctions.
    Chain,
    /// Perpendicular road between the corridors at one row.
    Connector(Direction),
}

/// Who may use a lane.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LaneAccess {
    PedestrianOnly,
    NoPedestrians,
}

/// Per-lane attributes written as `<lane>` children of an edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LaneSpec {
    pub index:  u32,
    pub access: LaneAccess,
    /// Explicit lane width; `None` leaves the simulator default.
    pub width:  Option<f64>,
}

/// A directed edge.  Corridor edges are one-way with default lanes;
/// connectors carry explicit lane specs.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub id:        EdgeId,
    pub from:      NodeId,
    pub to:        NodeId,
    pub kind:      EdgeKind,
    pub num_lanes: u32,
    pub lanes:     Vec<LaneSpec>,
}

impl Edge {
    pub fn is_connector(&self) -> bool {
        matches!(self.kind, EdgeKind::Connector(_))
    }
}

/// Lane layout shared by both connector directions: a pedestrian footway
/// beside a vehicle lane that carries the parking areas.
pub fn connector_lanes() -> Vec<LaneSpec> {
    vec![
        LaneSpec { index: 0, access: LaneAccess::PedestrianOnly, width: Some(PEDESTRIAN_LANE_WIDTH) },
        LaneSpec { index: naming::PARKING_LANE_INDEX, access: LaneAccess::NoPedestrians, width: None },
    ]
}

// ── Topology ──────────────────────────────────────────────────────────────────

/// The complete node/edge set of one parking lot.
///
/// Do not construct directly; use [`TopologyBuilder`] or
/// [`build_topology`](crate::build_topology).
#[derive(Debug)]
pub struct Topology {
    nodes:      Vec<Node>,
    edges:      Vec<Edge>,
    node_index: FxHashMap<NodeId, usize>,
    edge_index: FxHashMap<EdgeId, usize>,
}

impl Topology {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edge_index.get(id).map(|&i| &self.edges[i])
    }

    pub fn contains_edge(&self, id: &EdgeId) -> bool {
        self.edge_index.contains_key(id)
    }

    /// Number of connector edges (two per row).
    pub fn connector_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_connector()).count()
    }

    /// Number of junction-to-junction corridor edges.
    pub fn chain_count(&self) -> usize {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Chain).count()
    }

    /// The id of lane `index` on `edge`, if both exist.
    pub fn lane(&self, edge: &EdgeId, index: u32) -> Option<LaneId> {
        self.edge(edge)
            .filter(|e| index < e.num_lanes)
            .map(|e| naming::lane(&e.id, index))
    }

    /// Every lane id in the topology, edge by edge.
    pub fn lane_ids(&self) -> impl Iterator<Item = LaneId> + '_ {
        self.edges
            .iter()
            .flat_map(|e| (0..e.num_lanes).map(move |i| naming::lane(&e.id, i)))
    }
}

// ── TopologyBuilder ───────────────────────────────────────────────────────────

/// Construct a [`Topology`] incrementally, then call [`build`](Self::build).
///
/// Nodes must be added before any edge that references them; `add_edge`
/// rejects unknown endpoints so a built topology never holds a dangling
/// reference.
///
/// # Example
///
/// ```
/// use lg_core::{EdgeId, NodeId, Point2};
/// use lg_network::TopologyBuilder;
///
/// let mut b = TopologyBuilder::new();
/// b.add_node(NodeId::new("a"), Point2::new(0.0, 0.0)).unwrap();
/// b.add_node(NodeId::new("b"), Point2::new(10.0, 0.0)).unwrap();
/// b.add_access_edge(EdgeId::new("ab"), NodeId::new("a"), NodeId::new("b")).unwrap();
/// assert!(b.add_access_edge(EdgeId::new("bc"), NodeId::new("b"), NodeId::new("c")).is_err());
/// let topo = b.build();
/// assert_eq!(topo.edge_count(), 1);
/// ```
pub struct TopologyBuilder {
    nodes:      Vec<Node>,
    edges:      Vec<Edge>,
    node_index: FxHashMap<NodeId, usize>,
    edge_index: FxHashMap<EdgeId, usize>,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:      Vec::with_capacity(nodes),
            edges:      Vec::with_capacity(edges),
            node_index: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            edge_index: FxHashMap::with_capacity_and_hasher(edges, Default::default()),
        }
    }

    pub fn add_node(&mut self, id: NodeId, pos: Point2) -> NetworkResult<()> {
        if self.node_index.contains_key(&id) {
            return Err(NetworkError::DuplicateNode(id));
        }
        self.node_index.insert(id.clone(), self.nodes.len());
        self.nodes.push(Node { id, pos });
        Ok(())
    }

    /// Add an edge whose endpoints were both added earlier.
    pub fn add_edge(&mut self, edge: Edge) -> NetworkResult<()> {
        for node in [&edge.from, &edge.to] {
            if !self.node_index.contains_key(node) {
                let node = node.clone();
                return Err(NetworkError::UnknownNode { edge: edge.id, node });
            }
        }
        if self.edge_index.contains_key(&edge.id) {
            return Err(NetworkError::DuplicateEdge(edge.id));
        }
        self.edge_index.insert(edge.id.clone(), self.edges.len());
        self.edges.push(edge);
        Ok(())
    }

    /// Convenience: one-way corridor edge touching an entrance or exit.
    pub fn add_access_edge(&mut self, id: EdgeId, from: NodeId, to: NodeId) -> NetworkResult<()> {
        self.add_corridor_edge(id, from, to, EdgeKind::Access)
    }

    /// Convenience: one-way corridor edge between two row junctions.
    pub fn add_chain_edge(&mut self, id: EdgeId, from: NodeId, to: NodeId) -> NetworkResult<()> {
        self.add_corridor_edge(id, from, to, EdgeKind::Chain)
    }

    /// Convenience: connector edge with a footway and a parking lane.
    pub fn add_connector(
        &mut self,
        id:   EdgeId,
        dir:  Direction,
        from: NodeId,
        to:   NodeId,
    ) -> NetworkResult<()> {
        self.add_edge(Edge {
            id,
            from,
            to,
            kind: EdgeKind::Connector(dir),
            num_lanes: EDGE_LANES,
            lanes: connector_lanes(),
        })
    }

    fn add_corridor_edge(
        &mut self,
        id:   EdgeId,
        from: NodeId,
        to:   NodeId,
        kind: EdgeKind,
    ) -> NetworkResult<()> {
        self.add_edge(Edge { id, from, to, kind, num_lanes: EDGE_LANES, lanes: Vec::new() })
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce a [`Topology`].
    pub fn build(self) -> Topology {
        Topology {
            nodes:      self.nodes,
            edges:      self.edges,
            node_index: self.node_index,
            edge_index: self.edge_index,
        }
    }
}

impl Default for TopologyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
