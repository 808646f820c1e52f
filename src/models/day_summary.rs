use crate::core::calculator::coverage::Coverage;
use crate::core::calculator::overlap::OverlapRegion;
use serde::Serialize;

/// Everything the radial day view needs: overlap arcs and coverage stats.
#[derive(Debug, Default, Serialize)]
pub struct DayTimeline<'a> {
    pub overlaps: Vec<OverlapRegion<'a>>,
    pub coverage: Coverage,
}
