//! `lg-network` — parking-lot topology.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`topology`] | `Topology`, `TopologyBuilder`, `Node`, `Edge`, `LaneSpec`  |
//! | [`layout`]   | `build_topology` — the two-corridor procedural layout      |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                         |

pub mod error;
pub mod layout;
pub mod topology;


pub use error::{NetworkError, NetworkResult};
pub use layout::build_topology;
pub use topology::{Edge, EdgeKind, LaneAccess, LaneSpec, Node, Topology, TopologyBuilder};
