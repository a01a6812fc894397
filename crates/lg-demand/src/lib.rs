//! `lg-demand` — vehicle fleet and parking trip demand.
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`fleet`]     | `Fleet`, `VehicleType`, `MobilityClass`, `Rgb`        |
//! | [`trip`]      | `Demand`, `Trip`                                      |
//! | [`generator`] | `build_demand`                                        |
//! | [`error`]     | `DemandError`, `DemandResult<T>`                      |

pub mod error;
pub mod fleet;
pub mod generator;
pub mod trip;


pub use error::{DemandError, DemandResult};
pub use fleet::{Fleet, MobilityClass, Rgb, VehicleType};
pub use generator::build_demand;
pub use trip::{Demand, Trip};
