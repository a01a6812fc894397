//! Trip demand.

use lg_core::{EdgeId, ParkingAreaId, TripId, VehicleTypeId};

/// A vehicle driving from the lot entrance to a parking area, where it stays
/// for `park_duration` seconds (effectively until the run ends).
#[derive(Clone, Debug, PartialEq)]
pub struct Trip {
    pub id:            TripId,
    pub vehicle_type:  VehicleTypeId,
    /// Departure time in seconds from the start of the run.
    pub depart:        u64,
    pub from:          EdgeId,
    pub to:            EdgeId,
    pub parking_area:  ParkingAreaId,
    pub park_duration: f64,
}

/// Every trip of a scenario in departure order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Demand {
    pub trips: Vec<Trip>,
}

impl Demand {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Number of trips using vehicle type `id`.
    pub fn count_of(&self, id: &VehicleTypeId) -> usize {
        self.trips.iter().filter(|t| &t.vehicle_type == id).count()
    }
}
