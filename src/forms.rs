use std::collections::BTreeMap;

/// Field names coerced to integers when serializing a submitted form.
pub const INT_FIELDS: &[&str] = &["location_id", "event_type_id", "entrance_type_id"];

/// Field names coerced to floats; non-numeric input falls back to 0.
pub const FLOAT_FIELDS: &[&str] = &["entrance_fee"];

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl FieldValue {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Text(value) => serde_json::Value::String(value.clone()),
            FieldValue::Int(value) => serde_json::Value::from(*value),
            FieldValue::Float(value) => serde_json::Value::from(*value),
        }
    }
}

/// Serializes submitted field values into a typed map. Empty values are
/// omitted entirely; designated numeric fields are coerced per
/// [`INT_FIELDS`] and [`FLOAT_FIELDS`].
pub fn serialize_fields<'a, I>(fields: I) -> BTreeMap<String, FieldValue>
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    let mut out = BTreeMap::new();
    for (name, value) in fields {
        if value.is_empty() {
            continue;
        }
        if INT_FIELDS.contains(&name) {
            if let Ok(parsed) = value.trim().parse::<i64>() {
                out.insert(name.to_string(), FieldValue::Int(parsed));
            }
        } else if FLOAT_FIELDS.contains(&name) {
            let parsed = value.trim().parse::<f64>().unwrap_or(0.0);
            out.insert(name.to_string(), FieldValue::Float(parsed));
        } else {
            out.insert(name.to_string(), FieldValue::Text(value));
        }
    }
    out
}

/// Builds the JSON request body for a serialized form.
pub fn to_json(fields: &BTreeMap<String, FieldValue>) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (name, value) in fields {
        map.insert(name.clone(), value.to_json());
    }
    serde_json::Value::Object(map)
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationResult {
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether `field` failed validation, for error styling on the control.
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}

/// Every field passed in is required: blank (after trimming) values are
/// flagged with a human-readable message.
pub fn validate_required<'a, I>(fields: I) -> ValidationResult
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut errors = Vec::new();
    for (name, value) in fields {
        if value.trim().is_empty() {
            errors.push(FieldError {
                field: name.to_string(),
                message: format!("{} is required", name.replace('_', " ")),
            });
        }
    }
    ValidationResult { errors }
}
