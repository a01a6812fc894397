//! Strongly typed string identifiers.
//!
//! The simulator addresses every object by a string id, so these wrap owned
//! `String`s, one type per kind of object.  Ids are only ever produced by the
//! functions in [`crate::naming`].

use std::fmt;

/// Generate a typed ID wrapper around an owned `String`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(String);

        impl $name {
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            #[inline]
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

typed_id! {
    /// Id of a topology node (`principal3`, `secundariasaida`, …).
    pub struct NodeId;
}

typed_id! {
    /// Id of a directed topology edge (`principalin`, `-road2`, …).
    pub struct EdgeId;
}

typed_id! {
    /// Id of one lane of an edge, in the simulator's `{edge}_{index}` form.
    pub struct LaneId;
}

typed_id! {
    /// Id of a parking area (`ParkArea0`, `ParkArea-0`).
    pub struct ParkingAreaId;
}

typed_id! {
    /// Id of a single parking space, carried as a `<param>` on the space.
    pub struct SpaceId;
}

typed_id! {
    /// Id of a vehicle type (`car`, `disabled`, `ped_pedestrian`).
    pub struct VehicleTypeId;
}

typed_id! {
    /// Id of a trip (`v0.3`, `v-1.0`).
    pub struct TripId;
}
