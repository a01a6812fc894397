//! `lg-parking` — parking areas laid out along the connector roads.
//!
//! Each row gets two [`ParkingArea`]s, one on the vehicle lane of each
//! connector direction.  Area and space ids come from `lg_core::naming`, so
//! the demand generator can address an area from `(direction, row)` alone.
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`area`]      | `ParkingLayout`, `ParkingArea`, `Space`           |
//! | [`generator`] | `build_parking`, `build_area`                     |

pub mod area;
pub mod generator;


pub use area::{ParkingArea, ParkingLayout, Space};
pub use generator::{build_area, build_parking};
