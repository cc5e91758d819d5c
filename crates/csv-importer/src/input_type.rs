//! Input widget hints derived from JSON Schema.
//!
//! The UI picks an editor for each CSV column from the column's validation
//! schema. Schemas are read in their JSON Schema "input" form; anything that
//! cannot be classified falls back to a plain text input.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as Json;

/// Kind of input widget to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Email,
    Number,
    Date,
    Datetime,
    Select,
}

impl InputType {
    /// The name used in serialized hints, e.g. `datetime`.
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Number => "number",
            InputType::Date => "date",
            InputType::Datetime => "datetime",
            InputType::Select => "select",
        }
    }
}

/// One choice of a `select` input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Widget hint for a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputTypeInfo {
    #[serde(rename = "type")]
    pub input_type: InputType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// The subset of JSON Schema the classifier looks at.
///
/// Each field is read on its own; a field of an unexpected shape is treated
/// as absent without discarding the others.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonSchema {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    schema_type: Option<SchemaType>,
    #[serde(default, deserialize_with = "lenient")]
    format: Option<String>,
    #[serde(rename = "enum", default, deserialize_with = "lenient")]
    enum_values: Option<Vec<Json>>,
    #[serde(default, deserialize_with = "lenient")]
    one_of: Option<Vec<Json>>,
    #[serde(default, deserialize_with = "lenient")]
    any_of: Option<Vec<Json>>,
    #[serde(default, deserialize_with = "lenient")]
    all_of: Option<Vec<Json>>,
    minimum: Option<Json>,
    maximum: Option<Json>,
}

/// Deserialize a field, yielding `None` when it has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Json::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// `type` is either a single name or a list of names.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SchemaType {
    Single(String),
    Multiple(Vec<String>),
}

impl JsonSchema {
    /// Read a schema, treating anything unparsable as an empty schema.
    fn from_json(json: &Json) -> Self {
        JsonSchema::deserialize(json).unwrap_or_default()
    }

    /// The effective type name; the first non-null entry of a type list.
    fn type_name(&self) -> Option<&str> {
        match self.schema_type.as_ref()? {
            SchemaType::Single(name) => Some(name),
            SchemaType::Multiple(names) => names
                .iter()
                .map(String::as_str)
                .find(|name| *name != "null"),
        }
    }

    /// Whether the schema only admits `null`. Untyped schemas are not null.
    fn is_null(&self) -> bool {
        match &self.schema_type {
            Some(SchemaType::Single(name)) => name == "null",
            Some(SchemaType::Multiple(names)) => {
                !names.is_empty() && names.iter().all(|name| name == "null")
            }
            None => false,
        }
    }
}

impl InputTypeInfo {
    /// A hint with only a type.
    pub fn of(input_type: InputType) -> Self {
        Self {
            input_type,
            options: None,
            min: None,
            max: None,
        }
    }

    /// Classify a JSON Schema.
    ///
    /// 1. Unwrap: the first non-null member of `oneOf`, else of `anyOf`,
    ///    else the first member of `allOf`.
    /// 2. A non-empty `enum` with string members becomes `select`.
    /// 3. `number`/`integer` becomes `number`, carrying `minimum`/`maximum`.
    /// 4. `string` becomes `email`, `date` or `datetime` by `format`, else `text`.
    /// 5. Everything else is `text`.
    ///
    /// ```
    /// use csv_importer::{InputType, InputTypeInfo};
    /// use serde_json::json;
    ///
    /// let info = InputTypeInfo::from_json_schema(&json!({
    ///     "anyOf": [{ "type": "string", "format": "email" }, { "type": "null" }]
    /// }));
    /// assert_eq!(info, InputTypeInfo::of(InputType::Email));
    /// ```
    pub fn from_json_schema(schema: &Json) -> Self {
        let field = unwrap_schema(JsonSchema::from_json(schema));

        if let Some(values) = field.enum_values.as_ref().filter(|v| !v.is_empty()) {
            let options: Vec<SelectOption> = values
                .iter()
                .filter_map(Json::as_str)
                .map(|value| SelectOption {
                    value: value.to_string(),
                    label: value.to_string(),
                })
                .collect();

            if !options.is_empty() {
                return Self {
                    options: Some(options),
                    ..Self::of(InputType::Select)
                };
            }
        }

        match field.type_name() {
            Some("number" | "integer") => Self {
                min: field.minimum.as_ref().and_then(Json::as_f64),
                max: field.maximum.as_ref().and_then(Json::as_f64),
                ..Self::of(InputType::Number)
            },
            Some("string") => Self::of(match field.format.as_deref() {
                Some("email") => InputType::Email,
                Some("date") => InputType::Date,
                Some("date-time") => InputType::Datetime,
                _ => InputType::Text,
            }),
            _ => Self::of(InputType::Text),
        }
    }
}

/// Classify every property of an object schema, keyed by property name.
///
/// Returns an empty map when the schema has no `properties` object.
pub fn columns_from_object_schema(schema: &Json) -> BTreeMap<String, InputTypeInfo> {
    schema
        .get("properties")
        .and_then(Json::as_object)
        .map(|properties| {
            properties
                .iter()
                .map(|(name, property)| (name.clone(), InputTypeInfo::from_json_schema(property)))
                .collect()
        })
        .unwrap_or_default()
}

/// Prefer a non-null member of `oneOf`/`anyOf`, then the first `allOf` member.
fn unwrap_schema(schema: JsonSchema) -> JsonSchema {
    let pick = |members: &Option<Vec<Json>>| {
        members.as_ref().and_then(|members| {
            members
                .iter()
                .map(JsonSchema::from_json)
                .find(|member| !member.is_null())
        })
    };

    if let Some(member) = pick(&schema.one_of) {
        return member;
    }
    if let Some(member) = pick(&schema.any_of) {
        return member;
    }
    if let Some(first) = schema.all_of.as_ref().and_then(|members| members.first()) {
        return JsonSchema::from_json(first);
    }
    schema
}
