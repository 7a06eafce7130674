//! SCIM 2.0 conformance-test core.
//!
//! Provides the schema model builder and generic resource-validation engine
//! used by conformance tests against a remote SCIM service provider: the
//! builder parses the raw JSON returned by the `/Schemas` discovery endpoint
//! into typed attribute trees, and the validator walks any decoded resource
//! instance against a discovered schema, producing an ordered assertion log
//! and a pass/fail verdict.
//!
//! # Core Components
//!
//! - [`SchemaModelBuilder`] - Parses discovery metadata into resource schemas
//! - [`SchemaRegistry`] - Holds one discovered schema per resource kind
//! - [`ResourceValidator`] - Schema-agnostic instance validation engine
//! - [`AssertionLog`] - Ordered record of every individual check
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scim_compliance_core::{
//!     AssertionLog, HttpExchange, ResourceValidator, SchemaModelBuilder,
//!     SchemaRegistry, schema::ResourceKind,
//! };
//!
//! # fn example(discovery_body: &str, user: &serde_json::Value) -> Result<(), Box<dyn std::error::Error>> {
//! let exchange = HttpExchange::empty();
//! let mut log = AssertionLog::new();
//! let mut registry = SchemaRegistry::new();
//! SchemaModelBuilder::build(discovery_body, &exchange, &mut log, &mut registry)?;
//!
//! if let Some(schema) = registry.get(ResourceKind::User) {
//!     ResourceValidator::new(schema).validate(user, &exchange, &mut log)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Per-resource HTTP test drivers, client construction, and report rendering
//! live outside this crate; they hand raw bodies and decoded instances in and
//! consume the registry, logs, and errors that come back out.

pub mod assertions;
pub mod error;
pub mod exchange;
pub mod schema;

// Re-export commonly used types for convenience
pub use assertions::{AssertionLog, AssertionRecord, CheckStatus};
pub use error::{ComplianceError, ComplianceResult};
pub use exchange::HttpExchange;
pub use schema::{
    AttributeDefinition, AttributeType, Mutability, ResourceKind, ResourceSchema,
    ResourceValidator, Returned, SchemaModelBuilder, SchemaRegistry, Uniqueness,
};
