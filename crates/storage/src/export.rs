use setwise_domain as domain;

use crate::dto::Weeks;

pub const EXPORT_FILE_NAME: &str = "workout-plan.json";

#[derive(serde::Serialize)]
struct Export {
    weeks: Weeks,
}

/// Serializes a plan as pretty-printed `{ "weeks": [...] }`, the format accepted by
/// [`import_plan`](crate::import_plan).
pub fn export_plan(plan: &domain::Plan) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Export {
        weeks: Weeks::from(plan),
    })
}
