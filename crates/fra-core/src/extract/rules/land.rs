//! Land classification rule.

use crate::models::LandType;

use super::{FieldValue, LineContext};

pub fn is_land_line(ctx: &LineContext<'_>) -> bool {
    ctx.mentions(&["agricultural", "forest", "cultivable"])
}

/// Classify the line. "cultivable" alone triggers the rule but sets nothing.
pub fn capture_land_type(ctx: &LineContext<'_>) -> Option<FieldValue> {
    let agricultural = ctx.lower.contains("agricultural");
    let forest = ctx.lower.contains("forest");

    let land_type = match (agricultural, forest) {
        (true, true) => LandType::AgriculturalForest,
        (true, false) => LandType::Agricultural,
        (false, true) => LandType::Forest,
        (false, false) => return None,
    };
    Some(FieldValue::Land(land_type))
}
