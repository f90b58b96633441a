//! Search bounding boxes around a ground sample point.

use geo::{Destination, Geodesic, Point};

use crate::models::BoundingBox;

/// Default search buffer around a sample point, in meters.
pub const DEFAULT_METER_BUFFER: f64 = 50_000.0;

/// Compute a bounding box with `meter_buffer` of ground distance on each
/// side of the point.
///
/// The four edges come from geodesic destinations along the cardinal
/// bearings (south, west, north, east) on the WGS84 ellipsoid. Boxes that
/// would cross a pole or the antimeridian are not handled. Geodetically
/// invalid input is not validated and propagates as undefined output.
pub fn bounding_box(latitude: f64, longitude: f64, meter_buffer: f64) -> BoundingBox {
    let origin = Point::new(longitude, latitude);

    let south = Geodesic.destination(origin, 180.0, meter_buffer);
    let west = Geodesic.destination(origin, 270.0, meter_buffer);
    let north = Geodesic.destination(origin, 0.0, meter_buffer);
    let east = Geodesic.destination(origin, 90.0, meter_buffer);

    BoundingBox::new(west.x(), south.y(), east.x(), north.y())
}
