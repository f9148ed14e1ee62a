//! Itinerary rendering: mode-tagged geometry and step text.
//!
//! Pure shaping of a [`PlannedRoute`] into the two forms presentation layers
//! consume — straight-line segments for drawing and human-readable step
//! lines.  No I/O happens here.

use tp_core::{GeoPoint, Mode};
use tp_network::Places;

use crate::PlanResult;
use crate::select::PlannedRoute;

/// One drawable leg of a planned route, tagged with its mode for styling.
#[derive(Clone, Debug, PartialEq)]
pub struct LegSegment {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub mode: Mode,
}

/// The route as straight-line segments: one per path hop, plus the final
/// walking leg from the egress node to the house.
pub fn route_segments(route: &PlannedRoute, places: &Places) -> PlanResult<Vec<LegSegment>> {
    let mut segments = Vec::with_capacity(route.path.len());
    for pair in route.path.windows(2) {
        let from = places.require_node(&pair[0].node)?;
        let to = places.require_node(&pair[1].node)?;
        // Every non-leading step carries the label of its incoming edge.
        let mode = pair[1].service.as_ref().map_or(Mode::Walk, |label| label.mode);
        segments.push(LegSegment { from: from.location, to: to.location, mode });
    }
    segments.push(LegSegment {
        from: route.egress.location,
        to: route.house.location,
        mode: Mode::Walk,
    });
    Ok(segments)
}

/// Human-readable step list with summary totals.
///
/// ```text
/// Train (PE) from PUNGGOL to CORAL EDGE
/// Walk 305.7m from CORAL EDGE to BLK 128 CP
/// Walk 78.9m from BLK 128 CP to BLK 128A
/// Stops:3
/// Distance: 2.09km
/// ```
pub fn describe_route(route: &PlannedRoute, places: &Places) -> PlanResult<Vec<String>> {
    let mut lines = Vec::with_capacity(route.path.len() + 2);

    for pair in route.path.windows(2) {
        let from = places.require_node(&pair[0].node)?;
        let to = places.require_node(&pair[1].node)?;
        let step = &pair[1];
        match &step.service {
            Some(label) if label.mode != Mode::Walk => lines.push(format!(
                "{} ({}) from {} to {}",
                label.mode,
                label.service,
                from.name.to_uppercase(),
                to.name.to_uppercase()
            )),
            _ => lines.push(format!(
                "Walk {:.1}m from {} to {}",
                step.distance_km * 1000.0,
                from.name.to_uppercase(),
                to.name.to_uppercase()
            )),
        }
    }

    lines.push(format!(
        "Walk {:.1}m from {} to BLK {}",
        route.egress_walk_km * 1000.0,
        route.egress.name.to_uppercase(),
        route.house.block
    ));
    lines.push(format!("Stops:{}", route.path.len()));
    lines.push(format!("Distance: {:.2}km", route.total_km()));

    Ok(lines)
}
