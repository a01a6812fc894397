//! Procedural two-corridor layout.

use log::debug;

use lg_core::naming::{self, Corridor, Direction};
use lg_core::{LayoutConfig, NodeId, Point2};

use crate::{NetworkResult, Topology, TopologyBuilder};

/// x coordinate of both corridor entrance nodes.
pub const ENTRANCE_X: f64 = -100.0;

/// Distance from the last row junction to the corridor exit node.
pub const EXIT_MARGIN: f64 = 100.0;

/// Build the full node/edge set for `cfg.rows` rows.
///
/// Per corridor the nodes are placed first (entrance, one junction per row,
/// exit) and then chained with one-way edges: principal flows entrance → exit,
/// secundaria flows exit → entrance.  Finally each row gets a `road{i}` /
/// `-road{i}` connector pair.  With zero rows each corridor is a single
/// entrance–exit edge and there are no connectors.
///
/// `cfg` is assumed validated; the only errors are builder invariant
/// violations, which the fixed naming scheme cannot trigger.
pub fn build_topology(cfg: &LayoutConfig) -> NetworkResult<Topology> {
    let rows = cfg.rows as usize;
    let mut b = TopologyBuilder::with_capacity(2 * (rows + 2), 4 * rows + 2);

    for corridor in Corridor::ALL {
        let y = match corridor {
            Corridor::Principal => 0.0,
            Corridor::Secundaria => cfg.secondary_y(),
        };
        let path = place_corridor_nodes(&mut b, cfg, corridor, y)?;
        chain_corridor(&mut b, corridor, &path)?;
    }

    for row in 0..cfg.rows {
        let principal = naming::junction_node(Corridor::Principal, row);
        let secundaria = naming::junction_node(Corridor::Secundaria, row);
        for dir in Direction::ALL {
            let (from, to) = match dir {
                Direction::Forward => (principal.clone(), secundaria.clone()),
                Direction::Reverse => (secundaria.clone(), principal.clone()),
            };
            b.add_connector(naming::connector_edge(dir, row), dir, from, to)?;
        }
    }

    let topo = b.build();
    debug!(
        "topology: {} nodes, {} edges ({} connectors, {} chain)",
        topo.node_count(),
        topo.edge_count(),
        topo.connector_count(),
        topo.chain_count()
    );
    Ok(topo)
}

/// Add one corridor's nodes and return them in entrance → exit order.
fn place_corridor_nodes(
    b:        &mut TopologyBuilder,
    cfg:      &LayoutConfig,
    corridor: Corridor,
    y:        f64,
) -> NetworkResult<Vec<NodeId>> {
    let mut path = Vec::with_capacity(cfg.rows as usize + 2);

    let entrance = naming::entrance_node(corridor);
    b.add_node(entrance.clone(), Point2::new(ENTRANCE_X, y))?;
    path.push(entrance);

    let mut last_x = 0.0;
    for row in 0..cfg.rows {
        let id = naming::junction_node(corridor, row);
        last_x = row as f64 * cfg.row_pitch;
        b.add_node(id.clone(), Point2::new(last_x, y))?;
        path.push(id);
    }

    let exit = naming::exit_node(corridor);
    b.add_node(exit.clone(), Point2::new(last_x + EXIT_MARGIN, y))?;
    path.push(exit);

    Ok(path)
}

/// Connect consecutive path nodes in the corridor's direction of travel.
///
/// `path` is `[entrance, junction 0, …, junction R-1, exit]`.  The first
/// segment is named by `inbound_edge`, the last by `outbound_edge`, and the
/// segment ending at junction `i` by `chain_edge(i)`.  A two-node path (no
/// rows) gets one segment named by `inbound_edge`.
fn chain_corridor(b: &mut TopologyBuilder, corridor: Corridor, path: &[NodeId]) -> NetworkResult<()> {
    let last = path.len() - 2;
    for (k, pair) in path.windows(2).enumerate() {
        let (from, to) = match corridor {
            Corridor::Principal => (pair[0].clone(), pair[1].clone()),
            Corridor::Secundaria => (pair[1].clone(), pair[0].clone()),
        };
        if k == 0 {
            b.add_access_edge(naming::inbound_edge(corridor), from, to)?;
        } else if k == last {
            b.add_access_edge(naming::outbound_edge(corridor), from, to)?;
        } else {
            b.add_chain_edge(naming::chain_edge(corridor, k as u32), from, to)?;
        }
    }
    Ok(())
}
