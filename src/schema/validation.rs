//! Generic validation of resource instances against a discovered schema.
//!
//! [`ResourceValidator`] is schema-agnostic: every resource-specific test
//! hands it a decoded instance together with the schema discovery produced
//! for that resource kind. The walk is collect-all rather than fail-fast,
//! so one validation pass can report every independent violation; a single
//! aggregated error is raised after the walk when at least one check failed.

use super::types::{AttributeDefinition, AttributeType, ResourceSchema, Returned};
use crate::assertions::AssertionLog;
use crate::error::{ComplianceError, ComplianceResult};
use crate::exchange::HttpExchange;
use base64::Engine;
use chrono::{DateTime, FixedOffset};
use serde_json::Value;

/// Validates decoded resource instances against one [`ResourceSchema`].
pub struct ResourceValidator<'a> {
    schema: &'a ResourceSchema,
}

impl<'a> ResourceValidator<'a> {
    pub fn new(schema: &'a ResourceSchema) -> Self {
        Self { schema }
    }

    /// Walk the instance against the schema, appending one record per check.
    ///
    /// Checks performed, for every declared attribute and recursively for
    /// sub-attributes of present complex values:
    /// - `required` attributes carry a non-null value at their path
    /// - `returned: never` attributes carry no value
    /// - present values match the declared type and cardinality, with
    ///   multi-valued complex values validated element-wise
    ///
    /// The walk never short-circuits. If any check failed, the returned
    /// error bundles the accumulated log and the exchange that produced the
    /// resource; callers record one failed test result and continue.
    pub fn validate(
        &self,
        resource: &Value,
        exchange: &HttpExchange,
        log: &mut AssertionLog,
    ) -> ComplianceResult<()> {
        // The log may already hold records from earlier sub-tests; only
        // checks added by this pass decide the verdict and the error counts.
        let failed_before = log.failed_count();
        let len_before = log.len();

        match resource.as_object() {
            Some(instance) => {
                for attr in &self.schema.attributes {
                    self.check_attribute(attr, instance.get(&attr.name), &attr.name, log);
                }
            }
            None => {
                log.fail(
                    "Resource instance is a JSON object",
                    value_shape(resource),
                    "object",
                );
            }
        }

        let failed = log.failed_count() - failed_before;
        if failed > 0 {
            log::debug!("validation found {failed} failing check(s)");
            Err(ComplianceError::validation_failed(
                failed,
                log.len() - len_before,
                log,
                exchange,
            ))
        } else {
            Ok(())
        }
    }

    /// Run every applicable check for one declared attribute.
    fn check_attribute(
        &self,
        attr: &AttributeDefinition,
        value: Option<&Value>,
        path: &str,
        log: &mut AssertionLog,
    ) {
        let present = value.is_some_and(|v| !v.is_null());

        if attr.required {
            let description = format!("Required attribute '{path}' is present");
            if present {
                log.pass(description, "non-null value", "non-null value");
            } else {
                let actual = if value.is_none() { "missing" } else { "null" };
                log.fail(description, actual, "non-null value");
            }
        }

        if attr.returned == Returned::Never {
            let description = format!("Attribute '{path}' with 'returned: never' is not returned");
            if present {
                log.fail(description, "value returned", "no value");
            } else {
                log.pass(description, "no value", "no value");
            }
        }

        let Some(value) = value else { return };
        if value.is_null() {
            return;
        }

        if attr.multi_valued {
            let description = format!("Multi-valued attribute '{path}' is an array");
            if let Some(elements) = value.as_array() {
                log.pass(description, "array", "array");
                for (index, element) in elements.iter().enumerate() {
                    self.check_value(attr, element, &format!("{path}[{index}]"), log);
                }
            } else {
                log.fail(description, value_shape(value), "array");
            }
        } else {
            let description = format!("Single-valued attribute '{path}' is not an array");
            if value.is_array() {
                log.fail(description, "array", attr.data_type.expected_shape());
            } else {
                log.pass(description, value_shape(value), "single value");
                self.check_value(attr, value, path, log);
            }
        }
    }

    /// Check one value (a single value or one element of a multi-valued
    /// attribute) against the declared data type, recursing into
    /// sub-attributes for complex values.
    fn check_value(
        &self,
        attr: &AttributeDefinition,
        value: &Value,
        path: &str,
        log: &mut AssertionLog,
    ) {
        let expected = attr.data_type.expected_shape();
        let description = format!("Attribute '{path}' matches declared type '{expected}'");

        let matches = match attr.data_type {
            AttributeType::String => value.is_string(),
            AttributeType::Boolean => value.is_boolean(),
            AttributeType::Integer => value.is_i64(),
            AttributeType::Decimal => value.is_f64() || value.is_i64(),
            AttributeType::DateTime => value.as_str().is_some_and(is_valid_datetime),
            AttributeType::Binary => value.as_str().is_some_and(is_valid_base64),
            AttributeType::Reference => value.as_str().is_some_and(is_valid_reference),
            AttributeType::Complex => value.is_object(),
        };

        if matches {
            log.pass(description, value_shape(value), expected);
        } else {
            let actual = match value.as_str() {
                Some(s) => format!("{} \"{s}\"", value_shape(value)),
                None => value_shape(value).to_string(),
            };
            log.fail(description, actual, expected);
        }

        if attr.data_type == AttributeType::Complex {
            if let Some(instance) = value.as_object() {
                for sub_attr in &attr.sub_attributes {
                    self.check_attribute(
                        sub_attr,
                        instance.get(&sub_attr.name),
                        &format!("{path}.{}", sub_attr.name),
                        log,
                    );
                }
            }
        }
    }
}

/// Full RFC3339 validation via chrono's well-tested parser.
fn is_valid_datetime(value: &str) -> bool {
    DateTime::<FixedOffset>::parse_from_rfc3339(value).is_ok()
}

/// Base64 validation by actually decoding the value.
fn is_valid_base64(value: &str) -> bool {
    base64::engine::general_purpose::STANDARD.decode(value).is_ok()
}

/// Scheme validation sufficient for SCIM reference URIs: HTTP(S) style URLs
/// and URNs.
fn is_valid_reference(value: &str) -> bool {
    value.contains("://") || value.starts_with("urn:")
}

/// JSON type name of a value for assertion records.
fn value_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(_) => "decimal",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
