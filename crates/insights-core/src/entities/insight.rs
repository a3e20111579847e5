use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A brand-tagged text note.
///
/// `id` is assigned by the store and `created_at` by the create operation;
/// neither is ever supplied by a client. There is no update path, so `brand`
/// and `text` are fixed once the row exists.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: i64,
    pub brand: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Insight {
        Insight {
            id: 7,
            brand: 3,
            text: "shoppers prefer the blue pack".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 20, 30).unwrap(),
        }
    }

    #[test]
    fn serializes_created_at_in_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["createdAt"], "2024-05-01T10:20:30Z");
        assert_eq!(json["brand"], 3);
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn json_roundtrip() {
        let insight = sample();
        let json = serde_json::to_string(&insight).unwrap();
        let back: Insight = serde_json::from_str(&json).unwrap();
        assert_eq!(back, insight);
    }

    #[test]
    fn schema_lists_all_fields() {
        let schema = serde_json::to_value(schemars::schema_for!(Insight)).unwrap();
        let props = schema["properties"].as_object().unwrap();
        for field in ["id", "brand", "text", "createdAt"] {
            assert!(props.contains_key(field), "schema missing {field}");
        }
    }
}
