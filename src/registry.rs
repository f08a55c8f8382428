// 🏛️ Schema Registry - documentation metadata for amount validators
// Populated by explicit bootstrap calls, then shared read-only

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

use crate::options::AmountOptions;
use crate::specialized::ValidatorKind;

// ============================================================================
// SCHEMA TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Number,
    Integer,
}

// ============================================================================
// SCHEMA DEFINITION
// ============================================================================

/// SchemaDefinition - what external tooling (e.g. OpenAPI generation) needs
/// to know about one validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDefinition {
    /// Unique ID (e.g., "monetaryAmount")
    pub id: String,

    /// Human-readable title (e.g., "Monetary Amount")
    pub title: String,

    pub description: String,

    pub examples: Vec<f64>,

    #[serde(rename = "type")]
    pub type_: SchemaType,

    pub minimum: f64,

    pub maximum: f64,

    /// Step implied by the decimal precision, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
}

impl SchemaDefinition {
    pub fn new(id: impl Into<String>, title: impl Into<String>, type_: SchemaType) -> Self {
        SchemaDefinition {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            examples: Vec::new(),
            type_,
            minimum: 0.0,
            maximum: 0.0,
            multiple_of: None,
        }
    }

    /// Builder: add description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Builder: add example
    pub fn with_example(mut self, example: f64) -> Self {
        self.examples.push(example);
        self
    }

    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = minimum;
        self
    }

    pub fn with_maximum(mut self, maximum: f64) -> Self {
        self.maximum = maximum;
        self
    }

    pub fn with_multiple_of(mut self, step: f64) -> Self {
        self.multiple_of = Some(step);
        self
    }

    /// JSON-Schema fragment for this definition
    pub fn to_json_schema(&self) -> Value {
        let mut schema = json!({
            "type": self.type_,
            "title": self.title,
            "description": self.description,
            "minimum": self.minimum,
            "maximum": self.maximum,
            "examples": self.examples,
        });

        if let (Some(step), Some(object)) = (self.multiple_of, schema.as_object_mut()) {
            object.insert("multipleOf".to_string(), json!(step));
        }

        schema
    }
}

// ============================================================================
// SCHEMA REGISTRY
// ============================================================================

/// SchemaRegistry - catalog of validator metadata
///
/// Starts empty. The application's bootstrap decides what gets registered
/// (see [`register_amount_schemas`]); nothing registers itself.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, SchemaDefinition>,
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema. IDs are unique; registering one twice is an error.
    pub fn register(&mut self, schema: SchemaDefinition) -> Result<()> {
        ensure!(
            !self.schemas.contains_key(&schema.id),
            "Schema already registered: {}",
            schema.id
        );

        log::debug!("Registered schema {}", schema.id);
        self.schemas.insert(schema.id.clone(), schema);
        Ok(())
    }

    /// Get schema by ID
    pub fn get(&self, id: &str) -> Option<&SchemaDefinition> {
        self.schemas.get(id)
    }

    /// List all schema IDs (sorted)
    pub fn list_ids(&self) -> Vec<String> {
        self.schemas.keys().cloned().collect()
    }

    /// List all schemas
    pub fn list_all(&self) -> Vec<&SchemaDefinition> {
        self.schemas.values().collect()
    }

    /// Count total schemas
    pub fn count(&self) -> usize {
        self.schemas.len()
    }

    /// All schemas as a JSON object of JSON-Schema fragments keyed by ID
    pub fn to_json_schema(&self) -> Value {
        let map: Map<String, Value> = self
            .schemas
            .iter()
            .map(|(id, schema)| (id.clone(), schema.to_json_schema()))
            .collect();

        Value::Object(map)
    }
}

// ============================================================================
// BOOTSTRAP
// ============================================================================

/// Register the default configuration of every amount validator.
pub fn register_amount_schemas(registry: &mut SchemaRegistry) -> Result<()> {
    let defaults = AmountOptions::default();

    for kind in ValidatorKind::ALL {
        let mut schema = kind
            .schema(&defaults)
            .with_description(kind.description());
        for example in kind.examples() {
            schema = schema.with_example(*example);
        }
        registry.register(schema)?;
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn bootstrapped() -> SchemaRegistry {
        let mut registry = SchemaRegistry::new();
        register_amount_schemas(&mut registry).unwrap();
        registry
    }

    #[test]
    fn test_new_registry_is_empty() {
        assert_eq!(SchemaRegistry::new().count(), 0);
    }

    #[test]
    fn test_bootstrap_registers_all_validators() {
        let registry = bootstrapped();

        assert_eq!(registry.count(), 5);
        assert_eq!(
            registry.list_ids(),
            vec!["amount", "cryptoAmount", "monetaryAmount", "percentage", "wholeAmount"]
        );
    }

    #[test]
    fn test_bootstrap_twice_fails() {
        let mut registry = bootstrapped();
        let err = register_amount_schemas(&mut registry).unwrap_err();
        assert!(err.to_string().contains("Schema already registered"));
    }

    #[test]
    fn test_percentage_schema() {
        let registry = bootstrapped();
        let schema = registry.get("percentage").unwrap();

        assert_eq!(schema.title, "Percentage");
        assert_eq!(schema.type_, SchemaType::Number);
        assert_eq!(schema.minimum, 0.0);
        assert_eq!(schema.maximum, 100.0);
        assert_eq!(schema.multiple_of, Some(0.01));
        assert!(!schema.examples.is_empty());
    }

    #[test]
    fn test_whole_amount_schema_is_integer() {
        let registry = bootstrapped();
        let schema = registry.get("wholeAmount").unwrap();

        assert_eq!(schema.type_, SchemaType::Integer);
        assert_eq!(schema.minimum, 1.0);
        assert_eq!(schema.multiple_of, Some(1.0));
    }

    #[test]
    fn test_crypto_schema_step() {
        let registry = bootstrapped();
        assert_eq!(registry.get("cryptoAmount").unwrap().multiple_of, Some(1e-18));
    }

    #[test]
    fn test_register_custom_schema() {
        let mut registry = bootstrapped();
        let initial_count = registry.count();

        let custom = SchemaDefinition::new("faceValue", "Face Value", SchemaType::Number)
            .with_description("Bond face value")
            .with_minimum(1.0)
            .with_maximum(1_000_000.0)
            .with_example(1000.0);

        registry.register(custom).unwrap();

        assert_eq!(registry.count(), initial_count + 1);
        assert!(registry.get("faceValue").is_some());
    }

    #[test]
    fn test_json_schema_export() {
        let registry = bootstrapped();
        let exported = registry.to_json_schema();

        let monetary = &exported["monetaryAmount"];
        assert_eq!(monetary["type"], "number");
        assert_eq!(monetary["minimum"], 0.01);
        assert_eq!(monetary["multipleOf"], 0.01);
        assert_eq!(monetary["title"], "Monetary Amount");

        assert!(exported["amount"].get("multipleOf").is_none());
        assert_eq!(exported["wholeAmount"]["type"], "integer");
    }
}
