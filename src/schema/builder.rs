//! Parses `/Schemas` discovery responses into typed resource schemas.
//!
//! The service provider advertises its resource-type schemas as a JSON array
//! of schema documents. [`SchemaModelBuilder`] resolves each document against
//! the fixed set of known schema URIs, maps every attribute entry onto an
//! [`AttributeDefinition`], and populates the caller's [`SchemaRegistry`].
//! Unknown document ids are skipped so that providers advertising additional
//! schemas remain testable.

use super::registry::SchemaRegistry;
use super::types::{
    AttributeDefinition, AttributeType, Mutability, ResourceKind, ResourceSchema, Returned,
    Uniqueness,
};
use super::uris;
use crate::assertions::AssertionLog;
use crate::error::{ComplianceError, ComplianceResult};
use crate::exchange::HttpExchange;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

/// Strict shape of one attribute entry in a discovery document.
///
/// Every field is optional at the deserialization layer so that "key absent"
/// is a distinguishable outcome rather than an implicit default; the builder
/// decides per field whether absence is an error or falls back to the
/// RFC 7643 default.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAttribute {
    name: Option<String>,
    #[serde(rename = "type")]
    data_type: Option<String>,
    multi_valued: Option<bool>,
    description: Option<String>,
    required: Option<bool>,
    case_exact: Option<bool>,
    mutability: Option<String>,
    returned: Option<String>,
    uniqueness: Option<String>,
    sub_attributes: Option<Vec<Value>>,
}

/// Builds the schema model advertised by the service provider.
pub struct SchemaModelBuilder;

impl SchemaModelBuilder {
    /// Parse a discovery response and populate the registry.
    ///
    /// Each document is processed as an independent unit of work: a
    /// malformed document aborts construction with a critical error, but
    /// schemas registered from earlier documents stay registered. Every
    /// successfully mapped attribute appends one record to `log`.
    pub fn build(
        raw_json: &str,
        exchange: &HttpExchange,
        log: &mut AssertionLog,
        registry: &mut SchemaRegistry,
    ) -> ComplianceResult<()> {
        let body: Value = serde_json::from_str(raw_json).map_err(|e| {
            ComplianceError::critical_schema(
                format!("discovery response is not valid JSON: {e}"),
                None,
                exchange,
            )
        })?;

        let documents = body.as_array().ok_or_else(|| {
            ComplianceError::critical_schema(
                "discovery response is not a JSON array of schema documents",
                None,
                exchange,
            )
        })?;

        for document in documents {
            let Some(id) = document.get("id").and_then(Value::as_str) else {
                log::debug!("skipping discovery document without a string id");
                continue;
            };

            match id {
                uris::USER_CORE => {
                    let schema = Self::build_resource_schema(id, document, exchange, log)?;
                    registry.register(ResourceKind::User, schema);
                }
                uris::GROUP_CORE => {
                    let schema = Self::build_resource_schema(id, document, exchange, log)?;
                    registry.register(ResourceKind::Group, schema);
                }
                uris::RESOURCE_TYPE => {
                    let schema = Self::build_resource_schema(id, document, exchange, log)?;
                    registry.register(ResourceKind::ResourceType, schema);
                }
                uris::SERVICE_PROVIDER_CONFIG => {
                    let schema = Self::build_resource_schema(id, document, exchange, log)?;
                    registry.register(ResourceKind::ServiceProviderConfig, schema);
                }
                uris::ENTERPRISE_USER_EXTENSION => {
                    // Extension attributes are appended onto the core User
                    // schema; the registry holds them pending if the core
                    // document has not arrived yet.
                    let schema = Self::build_resource_schema(id, document, exchange, log)?;
                    registry.merge_user_extension(id.to_string(), schema.attributes);
                }
                other => {
                    log::debug!("skipping unknown discovery document id '{other}'");
                }
            }
        }

        let unmerged = registry.pending_user_extension_uris();
        if !unmerged.is_empty() {
            log::warn!(
                "discovery ended without a core User schema; extension(s) {unmerged:?} were not merged"
            );
        }

        log::info!(
            "schema discovery registered {} resource schema(s)",
            registry.registered_kinds().len()
        );
        Ok(())
    }

    /// Build one resource schema from a matched discovery document.
    fn build_resource_schema(
        doc_id: &str,
        document: &Value,
        exchange: &HttpExchange,
        log: &mut AssertionLog,
    ) -> ComplianceResult<ResourceSchema> {
        let entries = document
            .get("attributes")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ComplianceError::critical_schema(
                    format!("discovery document '{doc_id}' has no attributes array"),
                    None,
                    exchange,
                )
            })?;

        let attributes = Self::build_attribute_list(entries, doc_id, ':', exchange, log)?;
        Ok(ResourceSchema::new(doc_id, attributes))
    }

    /// Build one sibling list of attribute definitions, rejecting duplicate
    /// names within the list so attribute URIs stay unique per schema. Used
    /// for a document's top-level attributes and, recursively, for each
    /// complex attribute's sub-attributes.
    fn build_attribute_list(
        entries: &[Value],
        uri_prefix: &str,
        separator: char,
        exchange: &HttpExchange,
        log: &mut AssertionLog,
    ) -> ComplianceResult<Vec<AttributeDefinition>> {
        let mut attributes = Vec::with_capacity(entries.len());
        let mut seen_names = HashSet::new();
        for entry in entries {
            let attribute = Self::build_attribute(entry, uri_prefix, separator, exchange, log)?;
            if !seen_names.insert(attribute.name.clone()) {
                return Err(ComplianceError::critical_schema(
                    format!(
                        "attribute '{}' is declared more than once under '{uri_prefix}'",
                        attribute.name
                    ),
                    Some(attribute.name),
                    exchange,
                ));
            }
            attributes.push(attribute);
        }
        Ok(attributes)
    }

    /// Map one attribute entry onto an [`AttributeDefinition`], recursing
    /// into sub-attributes with the `parentUri + "." + subName` rule.
    fn build_attribute(
        entry: &Value,
        uri_prefix: &str,
        separator: char,
        exchange: &HttpExchange,
        log: &mut AssertionLog,
    ) -> ComplianceResult<AttributeDefinition> {
        let raw: RawAttribute = serde_json::from_value(entry.clone()).map_err(|e| {
            let name = entry
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string);
            ComplianceError::critical_schema(
                format!("malformed attribute entry under '{uri_prefix}': {e}"),
                name,
                exchange,
            )
        })?;

        let Some(name) = raw.name else {
            return Err(ComplianceError::critical_schema(
                format!("attribute entry under '{uri_prefix}' is missing the 'name' key"),
                None,
                exchange,
            ));
        };
        let uri = format!("{uri_prefix}{separator}{name}");

        let Some(type_token) = raw.data_type else {
            Self::record_definition_failure(log, &name);
            return Err(ComplianceError::critical_schema(
                format!("attribute '{name}' is missing the 'type' key"),
                Some(name),
                exchange,
            ));
        };
        let Some(data_type) = AttributeType::from_token(&type_token) else {
            Self::record_definition_failure(log, &name);
            return Err(ComplianceError::critical_schema(
                format!("attribute '{name}' has unrecognized type token '{type_token}'"),
                Some(name),
                exchange,
            ));
        };

        let mutability = Self::map_characteristic(
            raw.mutability.as_deref(),
            Mutability::from_token,
            "mutability",
            &name,
            exchange,
            log,
        )?;
        let returned = Self::map_characteristic(
            raw.returned.as_deref(),
            Returned::from_token,
            "returned",
            &name,
            exchange,
            log,
        )?;
        let uniqueness = Self::map_characteristic(
            raw.uniqueness.as_deref(),
            Uniqueness::from_token,
            "uniqueness",
            &name,
            exchange,
            log,
        )?;

        log.pass(
            format!("Validate the attribute definitions of {name}"),
            "attribute definition mapped",
            "attribute definition follows SCIM specification",
        );

        let mut sub_attributes = Vec::new();
        if let Some(entries) = raw.sub_attributes {
            if data_type == AttributeType::Complex {
                sub_attributes = Self::build_attribute_list(&entries, &uri, '.', exchange, log)?;
            } else if !entries.is_empty() {
                log::warn!("attribute '{uri}' declares subAttributes but is not complex; ignored");
            }
        }

        Ok(AttributeDefinition {
            uri,
            name,
            data_type,
            multi_valued: raw.multi_valued.unwrap_or(false),
            required: raw.required.unwrap_or(false),
            case_exact: raw.case_exact.unwrap_or(false),
            mutability,
            returned,
            uniqueness,
            description: raw.description.unwrap_or_default(),
            sub_attributes,
        })
    }

    /// Map an optional characteristic token, falling back to the RFC 7643
    /// default when the key is absent. An unrecognized token fails the
    /// construction of this resource schema.
    fn map_characteristic<T: Default>(
        token: Option<&str>,
        from_token: fn(&str) -> Option<T>,
        field: &str,
        attribute: &str,
        exchange: &HttpExchange,
        log: &mut AssertionLog,
    ) -> ComplianceResult<T> {
        match token {
            None => Ok(T::default()),
            Some(token) => from_token(token).ok_or_else(|| {
                Self::record_definition_failure(log, attribute);
                ComplianceError::critical_schema(
                    format!("attribute '{attribute}' has unrecognized {field} token '{token}'"),
                    Some(attribute.to_string()),
                    exchange,
                )
            }),
        }
    }

    fn record_definition_failure(log: &mut AssertionLog, attribute: &str) {
        log.fail(
            format!("Validate the attribute definitions of {attribute}"),
            "attribute definition could not be mapped",
            "attribute definition follows SCIM specification",
        );
    }
}
