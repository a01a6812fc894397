//! Space inventory CSV.
//!
//! One row per parking space, in the same order as the additional file:
//!
//! ```csv
//! space_id,parking_area,lane,x,y,accessible
//! r0s0,ParkArea0,road0_1,106.75,4.4,1
//! ```
//!
//! Handy for joining simulator parking output back to the layout without
//! parsing the XML.

use csv::Writer;

use lg_parking::ParkingLayout;

use crate::OutputResult;

pub const SPACES_HEADER: [&str; 6] = ["space_id", "parking_area", "lane", "x", "y", "accessible"];

/// Render the inventory of `layout` to CSV bytes.
pub fn spaces_csv(layout: &ParkingLayout) -> OutputResult<Vec<u8>> {
    let mut w = Writer::from_writer(Vec::new());
    w.write_record(SPACES_HEADER)?;
    for (area, space) in layout.spaces() {
        let pos = space.position(area.anchor);
        w.write_record(&[
            space.id.to_string(),
            area.id.to_string(),
            area.lane.to_string(),
            pos.x.to_string(),
            pos.y.to_string(),
            (space.accessible as u8).to_string(),
        ])?;
    }
    w.into_inner().map_err(|e| csv::Error::from(e.into_error()).into())
}
