//! Parking layout generation.
//!
//! # Space spacing
//!
//! ```text
//! padding = (3 × slot_width − 1) / slots_per_row
//! offset₀ = padding + 3
//! offsetⱼ = offset₀ + j × (slot_width + padding)
//! ```
//!
//! Adjacent spaces therefore sit one slot width plus a gap apart whatever
//! the slot count.  The first `accessible_spaces` indices of every area are
//! reserved.

use log::debug;

use lg_core::naming::{self, Direction};
use lg_core::{LayoutConfig, Point2};

use crate::{ParkingArea, ParkingLayout, Space};

/// Rows the area anchors are shifted past along the corridor axis.
const ANCHOR_ROW_SHIFT: f64 = 3.0;

/// Extra x offset of every anchor (m).
const ANCHOR_MARGIN: f64 = 1.75;

/// Offset of the first space beyond one padding (m).
const FIRST_SPACE_MARGIN: f64 = 3.0;

/// Build two parking areas per row, each with `slots_per_row` spaces.
pub fn build_parking(cfg: &LayoutConfig) -> ParkingLayout {
    let mut areas = Vec::with_capacity(2 * cfg.rows as usize);
    for row in 0..cfg.rows {
        for dir in Direction::ALL {
            areas.push(build_area(cfg, dir, row));
        }
    }
    let layout = ParkingLayout { areas };
    debug!(
        "parking: {} areas, {} spaces ({} accessible)",
        layout.len(),
        layout.space_count(),
        layout.accessible_count()
    );
    layout
}

/// The area for one (row, direction).
///
/// Forward areas sit on `road{i}_1`; reverse areas on `-road{i}_1`, shifted
/// half a row pitch along the corridor so the two footprints do not overlap.
pub fn build_area(cfg: &LayoutConfig, dir: Direction, row: u32) -> ParkingArea {
    let edge = naming::connector_edge(dir, row);
    let base_x = (row as f64 + ANCHOR_ROW_SHIFT) * cfg.row_pitch + ANCHOR_MARGIN;
    let x = match dir {
        Direction::Forward => base_x,
        Direction::Reverse => base_x + cfg.row_pitch / 2.0,
    };

    ParkingArea {
        id:        naming::parking_area(dir, row),
        row,
        direction: dir,
        lane:      naming::lane(&edge, naming::PARKING_LANE_INDEX),
        anchor:    Point2::new(x, 0.0),
        angle:     cfg.area_angle,
        length:    cfg.area_length,
        spaces:    build_spaces(cfg, dir, row),
    }
}

fn build_spaces(cfg: &LayoutConfig, dir: Direction, row: u32) -> Vec<Space> {
    let Some(padding) = cfg.space_padding() else {
        return Vec::new();
    };

    let step = cfg.slot_width + padding;
    let mut offset = padding + FIRST_SPACE_MARGIN;
    let mut spaces = Vec::with_capacity(cfg.slots_per_row as usize);
    for index in 0..cfg.slots_per_row {
        spaces.push(Space {
            index,
            id: naming::space(dir, row, index),
            offset,
            accessible: index < cfg.accessible_spaces,
        });
        offset += step;
    }
    spaces
}
