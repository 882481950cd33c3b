//! Declarative output schemas and the validator applied to model responses.
//!
//! An [`ObjectSchema`] serves two purposes:
//! - it is rendered into the provider's structured-output schema
//!   ([`ObjectSchema::to_response_schema`]) so the model is constrained, and
//! - it validates whatever actually came back ([`ObjectSchema::validate`]),
//!   since a constrained model can still emit incomplete or mistyped JSON.
//!
//! Every field of an object schema is required.

use grimoire_error::{SchemaError, SchemaErrorKind};
use serde_json::{Map, Value, json};

/// Shape of a single value.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Non-blank string, optionally with a hint for the model
    String {
        /// Hint passed to the model alongside the type
        description: Option<&'static str>,
    },
    /// Whole number
    Integer,
    /// String restricted to a fixed set of values
    Enum(&'static [&'static str]),
    /// Homogeneous array
    Array {
        /// Shape of every item
        items: Box<SchemaNode>,
        /// Minimum number of items
        min_items: usize,
    },
    /// Nested object whose fields are all required
    Object(ObjectSchema),
}

/// Non-blank string.
pub fn string() -> SchemaNode {
    SchemaNode::String { description: None }
}

/// Non-blank string with a hint for the model.
pub fn described(description: &'static str) -> SchemaNode {
    SchemaNode::String {
        description: Some(description),
    }
}

/// Whole number.
pub fn integer() -> SchemaNode {
    SchemaNode::Integer
}

/// String limited to `values`.
pub fn one_of(values: &'static [&'static str]) -> SchemaNode {
    SchemaNode::Enum(values)
}

/// Array of `items`, possibly empty.
pub fn array_of(items: SchemaNode) -> SchemaNode {
    SchemaNode::Array {
        items: Box::new(items),
        min_items: 0,
    }
}

/// Array of `items` with at least one entry.
pub fn non_empty_array_of(items: SchemaNode) -> SchemaNode {
    SchemaNode::Array {
        items: Box::new(items),
        min_items: 1,
    }
}

/// A named field of an object schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    /// JSON key
    pub name: &'static str,
    /// Shape of the value
    pub node: SchemaNode,
}

/// Object schema with required fields in declaration order.
///
/// # Examples
///
/// ```
/// use grimoire_core::schema::{ObjectSchema, string, integer};
/// use serde_json::json;
///
/// let schema = ObjectSchema::new()
///     .field("name", string())
///     .field("level", integer());
///
/// assert!(schema.validate(&json!({"name": "Vex", "level": 3})).is_ok());
/// assert!(schema.validate(&json!({"name": "Vex"})).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectSchema {
    fields: Vec<SchemaField>,
}

impl ObjectSchema {
    /// Create an empty object schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required field.
    pub fn field(mut self, name: &'static str, node: SchemaNode) -> Self {
        self.fields.push(SchemaField { name, node });
        self
    }

    /// Declared fields in order.
    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    /// Look up a field's shape by key.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.node)
    }

    /// Schema containing just one of this schema's fields, reusing its definition.
    pub fn only(&self, name: &str) -> Option<ObjectSchema> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| ObjectSchema {
                fields: vec![field.clone()],
            })
    }

    /// Render as a Gemini `responseSchema` document.
    pub fn to_response_schema(&self) -> Value {
        object_to_json(self)
    }

    /// Check `value` against the schema.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, with the dotted path of the offending value.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaError> {
        validate_object(self, value, "")
    }
}

fn node_to_json(node: &SchemaNode) -> Value {
    match node {
        SchemaNode::String { description } => match description {
            Some(text) => json!({ "type": "STRING", "description": text }),
            None => json!({ "type": "STRING" }),
        },
        SchemaNode::Integer => json!({ "type": "INTEGER" }),
        SchemaNode::Enum(values) => json!({ "type": "STRING", "enum": values }),
        SchemaNode::Array { items, min_items } => {
            let mut schema = json!({ "type": "ARRAY", "items": node_to_json(items) });
            if *min_items > 0 {
                schema["minItems"] = json!(min_items);
            }
            schema
        }
        SchemaNode::Object(object) => object_to_json(object),
    }
}

fn object_to_json(object: &ObjectSchema) -> Value {
    let properties: Map<String, Value> = object
        .fields
        .iter()
        .map(|field| (field.name.to_string(), node_to_json(&field.node)))
        .collect();
    let names: Vec<&str> = object.fields.iter().map(|field| field.name).collect();

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": names,
        "propertyOrdering": names,
    })
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

fn wrong_type(path: &str, expected: &'static str) -> SchemaError {
    let path = if path.is_empty() { "$" } else { path };
    SchemaError::new(SchemaErrorKind::WrongType {
        path: path.to_string(),
        expected,
    })
}

fn validate_object(schema: &ObjectSchema, value: &Value, path: &str) -> Result<(), SchemaError> {
    let map = value.as_object().ok_or_else(|| wrong_type(path, "an object"))?;

    for field in &schema.fields {
        let field_path = child_path(path, field.name);
        let child = map
            .get(field.name)
            .filter(|child| !child.is_null())
            .ok_or_else(|| SchemaError::new(SchemaErrorKind::MissingField(field_path.clone())))?;
        validate_node(&field.node, child, &field_path)?;
    }

    Ok(())
}

fn validate_node(node: &SchemaNode, value: &Value, path: &str) -> Result<(), SchemaError> {
    match node {
        SchemaNode::String { .. } => {
            let text = value.as_str().ok_or_else(|| wrong_type(path, "a string"))?;
            if text.trim().is_empty() {
                return Err(SchemaError::new(SchemaErrorKind::BlankValue(path.to_string())));
            }
            Ok(())
        }
        SchemaNode::Integer => {
            if value.is_i64() || value.is_u64() {
                Ok(())
            } else {
                Err(wrong_type(path, "an integer"))
            }
        }
        SchemaNode::Enum(allowed) => {
            let text = value.as_str().ok_or_else(|| wrong_type(path, "a string"))?;
            if allowed.contains(&text) {
                Ok(())
            } else {
                Err(SchemaError::new(SchemaErrorKind::NotAllowed {
                    path: path.to_string(),
                    value: text.to_string(),
                    allowed: allowed.join(", "),
                }))
            }
        }
        SchemaNode::Array { items, min_items } => {
            let entries = value.as_array().ok_or_else(|| wrong_type(path, "an array"))?;
            if entries.len() < *min_items {
                return Err(SchemaError::new(SchemaErrorKind::TooFewItems {
                    path: path.to_string(),
                    min: *min_items,
                    found: entries.len(),
                }));
            }
            for (index, entry) in entries.iter().enumerate() {
                validate_node(items, entry, &format!("{}[{}]", path, index))?;
            }
            Ok(())
        }
        SchemaNode::Object(object) => validate_object(object, value, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ability_schema() -> ObjectSchema {
        ObjectSchema::new()
            .field("name", string())
            .field("type", one_of(&["skill", "magic", "other"]))
    }

    fn sample_schema() -> ObjectSchema {
        ObjectSchema::new()
            .field("name", described("What they are called"))
            .field("level", integer())
            .field("abilities", non_empty_array_of(SchemaNode::Object(ability_schema())))
            .field("tags", array_of(string()))
    }

    #[test]
    fn test_accepts_conforming_value() {
        let value = json!({
            "name": "Vex",
            "level": 4,
            "abilities": [{"name": "Shadowstep", "type": "magic"}],
            "tags": []
        });
        assert!(sample_schema().validate(&value).is_ok());
    }

    #[test]
    fn test_reports_missing_nested_field_with_path() {
        let value = json!({
            "name": "Vex",
            "level": 4,
            "abilities": [{"name": "Shadowstep", "type": "magic"}, {"name": "Feint"}],
            "tags": []
        });
        let err = sample_schema().validate(&value).unwrap_err();
        assert_eq!(
            err.kind,
            SchemaErrorKind::MissingField("abilities[1].type".to_string())
        );
    }

    #[test]
    fn test_null_counts_as_missing() {
        let value = json!({"name": null, "level": 1, "abilities": [], "tags": []});
        let err = sample_schema().validate(&value).unwrap_err();
        assert_eq!(err.kind, SchemaErrorKind::MissingField("name".to_string()));
    }

    #[test]
    fn test_rejects_values_outside_enum() {
        let value = json!({
            "name": "Vex",
            "level": 4,
            "abilities": [{"name": "Shadowstep", "type": "psionic"}],
            "tags": []
        });
        let err = sample_schema().validate(&value).unwrap_err();
        assert!(matches!(err.kind, SchemaErrorKind::NotAllowed { ref value, .. } if value == "psionic"));
    }

    #[test]
    fn test_rejects_blank_strings_and_fractional_integers() {
        let blank = json!({"name": "  ", "level": 4, "abilities": [{"name": "a", "type": "skill"}], "tags": []});
        assert_eq!(
            sample_schema().validate(&blank).unwrap_err().kind,
            SchemaErrorKind::BlankValue("name".to_string())
        );

        let fractional = json!({"name": "Vex", "level": 4.5, "abilities": [{"name": "a", "type": "skill"}], "tags": []});
        assert!(matches!(
            sample_schema().validate(&fractional).unwrap_err().kind,
            SchemaErrorKind::WrongType { expected: "an integer", .. }
        ));
    }

    #[test]
    fn test_enforces_min_items() {
        let value = json!({"name": "Vex", "level": 4, "abilities": [], "tags": []});
        assert_eq!(
            sample_schema().validate(&value).unwrap_err().kind,
            SchemaErrorKind::TooFewItems {
                path: "abilities".to_string(),
                min: 1,
                found: 0
            }
        );
    }

    #[test]
    fn test_rejects_non_object_root() {
        let err = sample_schema().validate(&json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err.kind, SchemaErrorKind::WrongType { ref path, .. } if path == "$"));
    }

    #[test]
    fn test_response_schema_shape() {
        let rendered = sample_schema().to_response_schema();
        assert_eq!(rendered["type"], "OBJECT");
        assert_eq!(rendered["required"], json!(["name", "level", "abilities", "tags"]));
        assert_eq!(rendered["properties"]["name"]["description"], "What they are called");
        assert_eq!(rendered["properties"]["abilities"]["minItems"], 1);
        assert_eq!(
            rendered["properties"]["abilities"]["items"]["properties"]["type"]["enum"],
            json!(["skill", "magic", "other"])
        );
        assert!(rendered["properties"]["tags"].get("minItems").is_none());
    }

    #[test]
    fn test_only_reuses_field_definition() {
        let schema = sample_schema();
        let single = schema.only("abilities").unwrap();
        assert_eq!(single.fields().len(), 1);
        assert_eq!(single.get("abilities"), schema.get("abilities"));
        assert!(schema.only("missing").is_none());
    }
}
