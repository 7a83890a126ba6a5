// Station domain model
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub station_id: String,
    pub name: String,
}

impl Station {
    pub fn new(station_id: String) -> Self {
        let name = Self::format_name(&station_id);
        Self { station_id, name }
    }

    fn format_name(id: &str) -> String {
        // Convert "north_roof_" to "north roof"
        id.trim_end_matches('_').replace('_', " ")
    }
}
