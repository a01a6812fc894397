//! Parking areas and their spaces.

use lg_core::{Direction, LaneId, ParkingAreaId, Point2, SpaceId};

/// One parking position inside a [`ParkingArea`].
#[derive(Clone, Debug, PartialEq)]
pub struct Space {
    /// Position within the owning area; unique per area, starting at 0.
    pub index:      u32,
    /// Id carried as a `<param key="id">` on the space.
    pub id:         SpaceId,
    /// Distance from the area anchor along the area's extent (m).
    pub offset:     f64,
    /// Reserved for accessibility-class vehicles.
    pub accessible: bool,
}

impl Space {
    /// Absolute position given the owning area's anchor.
    #[inline]
    pub fn position(&self, anchor: Point2) -> Point2 {
        anchor.offset(0.0, self.offset)
    }
}

/// A parking area on the vehicle lane of one connector.
#[derive(Clone, Debug, PartialEq)]
pub struct ParkingArea {
    pub id:        ParkingAreaId,
    pub row:       u32,
    pub direction: Direction,
    /// Lane the area is attached to (`road{i}_1` or `-road{i}_1`).
    pub lane:      LaneId,
    pub anchor:    Point2,
    pub angle:     f64,
    pub length:    f64,
    pub spaces:    Vec<Space>,
}

impl ParkingArea {
    /// Number of spaces (the area's roadside capacity).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.spaces.len()
    }

    pub fn accessible_count(&self) -> usize {
        self.spaces.iter().filter(|s| s.accessible).count()
    }

    /// Absolute position of the space at `index`.
    pub fn space_position(&self, index: usize) -> Option<Point2> {
        self.spaces.get(index).map(|s| s.position(self.anchor))
    }
}

/// Every parking area of a scenario, in emission order (row by row, forward
/// before reverse).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParkingLayout {
    pub areas: Vec<ParkingArea>,
}

impl ParkingLayout {
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn area(&self, id: &ParkingAreaId) -> Option<&ParkingArea> {
        self.areas.iter().find(|a| &a.id == id)
    }

    pub fn area_ids(&self) -> impl Iterator<Item = &ParkingAreaId> + '_ {
        self.areas.iter().map(|a| &a.id)
    }

    /// Total spaces across all areas.
    pub fn space_count(&self) -> usize {
        self.areas.iter().map(ParkingArea::capacity).sum()
    }

    pub fn accessible_count(&self) -> usize {
        self.areas.iter().map(ParkingArea::accessible_count).sum()
    }

    /// Flattened `(area, space)` inventory in emission order.
    pub fn spaces(&self) -> impl Iterator<Item = (&ParkingArea, &Space)> + '_ {
        self.areas
            .iter()
            .flat_map(|a| a.spaces.iter().map(move |s| (a, s)))
    }
}
