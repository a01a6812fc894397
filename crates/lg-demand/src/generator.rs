//! Demand generation.
//!
//! # Emission order
//!
//! ```text
//! for slot v in 0..slots_per_row:       depart = v × period
//!   for row i in 0..rows:
//!     Forward  trip  v{i}.{v}   → road{i}  / ParkArea{i}
//!     Reverse  trip  v-{i}.{v}  → -road{i} / ParkArea-{i}
//! ```
//!
//! Every row receives its first wave at t = 0; later waves follow every
//! `period` seconds.

use log::debug;

use lg_core::naming::{self, Corridor, Direction};
use lg_core::LayoutConfig;

use crate::{Demand, DemandError, DemandResult, Fleet, MobilityClass, Trip};

/// Emit `2 × rows × slots_per_row` trips.
///
/// Trips flagged by `cfg.accessible_demand` use the fleet's accessible type,
/// all others its car type.  The accessible type is only required when the
/// policy can flag a trip; a car-only fleet serves the basic variant.
pub fn build_demand(cfg: &LayoutConfig, fleet: &Fleet) -> DemandResult<Demand> {
    let car = &fleet
        .by_class(MobilityClass::Car)
        .ok_or(DemandError::MissingClass(MobilityClass::Car))?
        .id;
    let accessible = if cfg.accessible_demand.requires_accessible() {
        &fleet
            .by_class(MobilityClass::Accessible)
            .ok_or(DemandError::MissingClass(MobilityClass::Accessible))?
            .id
    } else {
        car
    };
    let origin = naming::inbound_edge(Corridor::Principal);

    let mut trips = Vec::with_capacity(cfg.trip_count());
    for slot in 0..cfg.slots_per_row {
        let depart = slot as u64 * cfg.period as u64;
        for row in 0..cfg.rows {
            let vehicle_type = if cfg.accessible_demand.is_accessible(row, slot) {
                accessible
            } else {
                car
            };
            for dir in Direction::ALL {
                trips.push(Trip {
                    id:            naming::trip(dir, row, slot),
                    vehicle_type:  vehicle_type.clone(),
                    depart,
                    from:          origin.clone(),
                    to:            naming::connector_edge(dir, row),
                    parking_area:  naming::parking_area(dir, row),
                    park_duration: cfg.park_duration,
                });
            }
        }
    }

    let demand = Demand { trips };
    let flagged = if accessible == car { 0 } else { demand.count_of(accessible) };
    debug!("demand: {} trips ({} accessible)", demand.len(), flagged);
    Ok(demand)
}
