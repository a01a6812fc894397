//! Artifact renderers: in-memory model → [`Document`].
//!
//! | Renderer            | Root           | Consumed by                   |
//! |---------------------|----------------|-------------------------------|
//! | `render_nodes`      | `<nodes>`      | network compiler (`-n`)       |
//! | `render_edges`      | `<edges>`      | network compiler (`-e`)       |
//! | `render_additional` | `<additional>` | simulator (`additional-files`)|
//! | `render_routes`     | `<routes>`     | simulator (`route-files`)     |

use lg_demand::{Demand, Fleet};
use lg_network::{LaneAccess, Topology};
use lg_parking::{ParkingArea, ParkingLayout};

use crate::document::{flag, Document, Element};

/// How parking spaces are written into the additional file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SpaceRendering {
    /// One `<space>` per slot with its id and accessibility flag as params.
    #[default]
    Explicit,
    /// A bare `roadsideCapacity` attribute; the simulator places the spaces.
    Roadside,
}

pub fn render_nodes(topo: &Topology) -> Document {
    let mut root = Element::new("nodes");
    for n in topo.nodes() {
        root.push(
            Element::new("node")
                .attr("id", &n.id)
                .attr("x", n.pos.x)
                .attr("y", n.pos.y),
        );
    }
    Document::with_schema(root, "nodes_file.xsd")
}

pub fn render_edges(topo: &Topology) -> Document {
    let mut root = Element::new("edges");
    for e in topo.edges() {
        let mut el = Element::new("edge")
            .attr("id", &e.id)
            .attr("from", &e.from)
            .attr("to", &e.to)
            .attr("numLanes", e.num_lanes);
        for lane in &e.lanes {
            let lane_el = Element::new("lane").attr("index", lane.index);
            let lane_el = match lane.access {
                LaneAccess::PedestrianOnly => lane_el.attr("allow", "pedestrian"),
                LaneAccess::NoPedestrians => lane_el.attr("disallow", "pedestrian"),
            };
            el.push(lane_el.attr_opt("width", lane.width.map(|w| format!("{w:.2}"))));
        }
        root.push(el);
    }
    Document::with_schema(root, "edges_file.xsd")
}

/// Parking areas followed by the vehicle types.
pub fn render_additional(layout: &ParkingLayout, fleet: &Fleet, spaces: SpaceRendering) -> Document {
    let mut root = Element::new("additional");
    for area in &layout.areas {
        root.push(parking_area(area, spaces));
    }
    for vt in fleet.types() {
        root.push(
            Element::new("vType")
                .attr("id", &vt.id)
                .attr("color", vt.color)
                .attr_opt("vClass", vt.class.sumo_vclass()),
        );
    }
    Document::with_schema(root, "additional_file.xsd")
}

fn parking_area(area: &ParkingArea, spaces: SpaceRendering) -> Element {
    let el = Element::new("parkingArea")
        .attr("id", &area.id)
        .attr("lane", &area.lane);
    let mut el = match spaces {
        SpaceRendering::Explicit => el,
        SpaceRendering::Roadside => el.attr("roadsideCapacity", area.capacity()),
    }
    .attr("angle", area.angle)
    .attr("length", area.length);

    if spaces == SpaceRendering::Explicit {
        for s in &area.spaces {
            let pos = s.position(area.anchor);
            el.push(
                Element::new("space")
                    .attr("x", pos.x)
                    .attr("y", pos.y)
                    .child(Element::new("param").attr("key", "id").attr("value", &s.id))
                    .child(Element::new("param").attr("key", "disabled").attr("value", flag(s.accessible))),
            );
        }
    }
    el
}

pub fn render_routes(demand: &Demand) -> Document {
    let mut root = Element::new("routes");
    for t in &demand.trips {
        root.push(
            Element::new("trip")
                .attr("id", &t.id)
                .attr("type", &t.vehicle_type)
                .attr("depart", t.depart)
                .attr("from", &t.from)
                .attr("to", &t.to)
                .child(
                    Element::new("stop")
                        .attr("parkingArea", &t.parking_area)
                        .attr("duration", t.park_duration),
                ),
        );
    }
    Document::with_schema(root, "routes_file.xsd")
}
