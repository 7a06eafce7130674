//! Schema discovery modeling and resource validation.
//!
//! This module holds the three pieces the conformance suite is built
//! around: [`SchemaModelBuilder`] parses `/Schemas` discovery metadata into
//! typed attribute trees, [`SchemaRegistry`] keeps one discovered schema per
//! resource kind (merging extension schemas into their base), and
//! [`ResourceValidator`] walks decoded resource instances against a
//! discovered schema.
//!
//! # Examples
//!
//! ```rust
//! use scim_compliance_core::schema::{ResourceKind, SchemaRegistry};
//!
//! let registry = SchemaRegistry::new();
//! assert!(registry.get(ResourceKind::User).is_none()); // before discovery
//! ```

pub mod builder;
pub mod registry;
pub mod types;
pub mod validation;


// Re-export the main types for convenience
pub use builder::SchemaModelBuilder;
pub use registry::SchemaRegistry;
pub use types::{
    AttributeDefinition, AttributeType, Mutability, ResourceKind, ResourceSchema, Returned,
    Uniqueness,
};
pub use validation::ResourceValidator;

/// Schema URIs the builder resolves discovery documents against.
pub mod uris {
    pub const USER_CORE: &str = "urn:ietf:params:scim:schemas:core:2.0:User";
    pub const GROUP_CORE: &str = "urn:ietf:params:scim:schemas:core:2.0:Group";
    pub const RESOURCE_TYPE: &str = "urn:ietf:params:scim:schemas:core:2.0:ResourceType";
    pub const SERVICE_PROVIDER_CONFIG: &str =
        "urn:ietf:params:scim:schemas:core:2.0:ServiceProviderConfig";
    pub const ENTERPRISE_USER_EXTENSION: &str =
        "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User";
}
