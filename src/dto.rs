use serde::{Deserialize, Deserializer, Serialize};

/// A published event as returned by `GET /events`. Joined display names come
/// back alongside the raw ids; the frontend never mutates these.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub event_date: String,
    #[serde(default)]
    pub event_time: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub entrance_fee: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub event_type_name: String,
    #[serde(default)]
    pub entrance_type_name: String,
}

/// Reference rows for the filter selects: locations, event types and
/// entrance types all share this shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RefOption {
    pub id: u32,
    pub name: String,
}

/// One page of the events listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventsData {
    // The backend marshals an empty result as `"events": null`.
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub events: Vec<EventRecord>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub total_pages: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitorStats {
    #[serde(default)]
    pub total_visitors: u64,
    #[serde(default)]
    pub last_visitor_date: Option<String>,
    #[serde(default)]
    pub last_visitor_city: Option<String>,
    #[serde(default)]
    pub last_visitor_country: Option<String>,
}

fn null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_record_decodes_backend_json() {
        let event: EventRecord = serde_json::from_str(
            r#"{
                "id": "0a6e9c3b-43c8-4d4a-9af3-0c6de8a10b77",
                "creator_id": "b7a7e9f2-8d7a-4f3c-9f1e-0d2b3c4d5e6f",
                "title": "Sunset Drum Circle",
                "event_date": "2026-08-22T00:00:00Z",
                "event_time": "18:30",
                "location_id": 3,
                "event_type_id": 2,
                "entrance_type_id": 1,
                "entrance_fee": 12.5,
                "is_paid": true,
                "is_published": true,
                "organization_name": "Harbor Arts Collective",
                "location_name": "North Beach",
                "event_type_name": "Music",
                "entrance_type_name": "Ticketed"
            }"#,
        )
        .expect("valid event");
        assert_eq!(event.title, "Sunset Drum Circle");
        assert_eq!(event.event_time.as_deref(), Some("18:30"));
        assert_eq!(event.entrance_fee, 12.5);
        assert_eq!(event.location_name, "North Beach");
        assert_eq!(event.image_url, None);
    }

    #[test]
    fn events_data_treats_null_events_as_empty() {
        let data: EventsData = serde_json::from_str(
            r#"{"events":null,"total":0,"page":1,"limit":12,"total_pages":0}"#,
        )
        .expect("valid page");
        assert!(data.events.is_empty());
        assert_eq!(data.total_pages, 0);
    }

    #[test]
    fn visitor_stats_tolerate_missing_last_visitor() {
        let stats: VisitorStats =
            serde_json::from_str(r#"{"total_visitors":18234}"#).expect("valid stats");
        assert_eq!(stats.total_visitors, 18234);
        assert_eq!(stats.last_visitor_city, None);
    }
}
