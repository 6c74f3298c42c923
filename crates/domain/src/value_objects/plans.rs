use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use crate::entities::plans::InsertPlanEntity;

/// Body of `POST /api/plans`. Every field may be absent.
///
/// Unknown keys (including a client-supplied `created_at`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InsertPlanModel {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_revenue")]
    pub revenue: Option<i64>,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub orbit: Option<String>,

    #[serde(default)]
    pub payload: Option<serde_json::Value>,
}

impl From<InsertPlanModel> for InsertPlanEntity {
    fn from(value: InsertPlanModel) -> Self {
        Self {
            name: value.name,
            revenue: value.revenue,
            orbit: value.orbit,
            payload: value.payload,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCreatedDto {
    pub id: i32,
}

// Text columns take scalars in their text form, as a Postgres parameter cast would.
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(text)) => Ok(Some(text)),
        Some(serde_json::Value::Number(number)) => Ok(Some(number.to_string())),
        Some(serde_json::Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string, number or boolean, got {other}"
        ))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RevenueInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

// Form inputs post numbers as strings; accept those the way Postgres would cast them.
fn deserialize_revenue<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let input = match Option::<RevenueInput>::deserialize(deserializer) {
        Ok(Some(input)) => input,
        Ok(None) => return Ok(None),
        Err(_) => return Err(D::Error::custom("revenue must be an integer")),
    };

    match input {
        RevenueInput::Integer(value) => Ok(Some(value)),
        RevenueInput::Float(value) => {
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
                Ok(Some(value as i64))
            } else {
                Err(D::Error::custom(format!(
                    "revenue must be an integer, got {value}"
                )))
            }
        }
        RevenueInput::Text(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("revenue must be an integer, got `{raw}`")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<InsertPlanModel, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn accepts_a_fully_populated_submission() {
        let model = parse(json!({
            "name": "LEO Comsat",
            "revenue": 1000000,
            "orbit": "LEO",
            "payload": { "fuel": "xenon" }
        }))
        .unwrap();

        assert_eq!(model.name.as_deref(), Some("LEO Comsat"));
        assert_eq!(model.revenue, Some(1_000_000));
        assert_eq!(model.orbit.as_deref(), Some("LEO"));
        assert_eq!(model.payload, Some(json!({ "fuel": "xenon" })));
    }

    #[test]
    fn empty_body_yields_all_fields_absent() {
        let model = parse(json!({})).unwrap();
        assert_eq!(model, InsertPlanModel::default());
    }

    #[test]
    fn explicit_nulls_are_treated_as_absent() {
        let model = parse(json!({
            "name": null,
            "revenue": null,
            "orbit": null,
            "payload": null
        }))
        .unwrap();
        assert_eq!(model, InsertPlanModel::default());
    }

    #[test]
    fn revenue_is_coerced_from_numeric_strings() {
        assert_eq!(parse(json!({ "revenue": "42" })).unwrap().revenue, Some(42));
        assert_eq!(parse(json!({ "revenue": " -7 " })).unwrap().revenue, Some(-7));
        assert_eq!(parse(json!({ "revenue": "" })).unwrap().revenue, None);
        assert_eq!(parse(json!({ "revenue": "   " })).unwrap().revenue, None);
    }

    #[test]
    fn revenue_accepts_whole_floats_only() {
        assert_eq!(parse(json!({ "revenue": 2500.0 })).unwrap().revenue, Some(2500));
        assert!(parse(json!({ "revenue": 12.5 })).is_err());
    }

    #[test]
    fn revenue_rejects_values_that_cannot_be_cast() {
        assert!(parse(json!({ "revenue": "lots" })).is_err());
        assert!(parse(json!({ "revenue": true })).is_err());
        assert!(parse(json!({ "revenue": [1, 2] })).is_err());
    }

    #[test]
    fn empty_strings_are_kept_verbatim() {
        let model = parse(json!({ "name": "", "orbit": "" })).unwrap();
        assert_eq!(model.name.as_deref(), Some(""));
        assert_eq!(model.orbit.as_deref(), Some(""));
    }

    #[test]
    fn scalar_name_and_orbit_are_stored_as_text() {
        let model = parse(json!({ "name": 42, "orbit": true })).unwrap();
        assert_eq!(model.name.as_deref(), Some("42"));
        assert_eq!(model.orbit.as_deref(), Some("true"));

        let model = parse(json!({ "name": -1.5, "orbit": 500 })).unwrap();
        assert_eq!(model.name.as_deref(), Some("-1.5"));
        assert_eq!(model.orbit.as_deref(), Some("500"));
    }

    #[test]
    fn structured_name_or_orbit_is_rejected() {
        assert!(parse(json!({ "name": { "first": "LEO" } })).is_err());
        assert!(parse(json!({ "orbit": ["LEO", "MEO"] })).is_err());
    }

    #[test]
    fn caller_supplied_created_at_is_ignored() {
        let model = parse(json!({
            "name": "GEO relay",
            "created_at": "1999-01-01T00:00:00Z"
        }))
        .unwrap();

        let entity: InsertPlanEntity = model.into();
        assert_eq!(entity.name.as_deref(), Some("GEO relay"));
        assert_eq!(entity.revenue, None);
    }

    #[test]
    fn nested_payload_passes_through_untouched() {
        let payload = json!({
            "stages": [
                { "engine": "Merlin", "count": 9 },
                { "engine": "MVac", "count": 1, "restartable": true }
            ],
            "meta": { "notes": null, "tags": ["reusable", "crewed"] }
        });

        let entity: InsertPlanEntity = parse(json!({ "payload": payload.clone() }))
            .unwrap()
            .into();
        assert_eq!(entity.payload, Some(payload));
    }

    #[test]
    fn created_dto_serializes_as_bare_id() {
        let body = serde_json::to_value(PlanCreatedDto { id: 17 }).unwrap();
        assert_eq!(body, json!({ "id": 17 }));
    }
}
