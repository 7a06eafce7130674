//! Registry of discovered resource schemas.
//!
//! The registry is built exactly once per test run, during the discovery
//! phase, and is read-only afterwards. It is an explicit owned value passed
//! by reference to every test driver; there is no ambient global schema
//! state. Writes and reads are sequenced by the caller (discovery completes
//! before any driver consults the registry), so no locking is involved.

use super::types::{AttributeDefinition, ResourceKind, ResourceSchema};
use std::collections::HashMap;

/// Holds at most one discovered [`ResourceSchema`] per resource kind.
///
/// Consulting the registry before discovery has run yields `None` for every
/// kind; there is no explicit "not yet discovered" signal beyond that.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<ResourceKind, ResourceSchema>,
    /// Extension attribute sets that arrived before the core User document
    pending_user_extensions: Vec<(String, Vec<AttributeDefinition>)>,
}

impl SchemaRegistry {
    /// Create an empty registry, to be populated by schema discovery.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the schema for a resource kind.
    ///
    /// Re-registering a kind replaces its schema; the builder produces
    /// structurally identical schemas for identical discovery input, so the
    /// operation is idempotent. Registering the User schema drains any
    /// extension attribute sets that were merged before it arrived.
    pub fn register(&mut self, kind: ResourceKind, schema: ResourceSchema) {
        log::debug!(
            "registering {kind} schema with {} top-level attribute(s)",
            schema.attributes.len()
        );
        self.schemas.insert(kind, schema);

        if kind == ResourceKind::User && !self.pending_user_extensions.is_empty() {
            let pending = std::mem::take(&mut self.pending_user_extensions);
            let user = self
                .schemas
                .get_mut(&ResourceKind::User)
                .expect("User schema was just registered");
            for (uri, attributes) in pending {
                log::debug!("merging pending extension '{uri}' into the User schema");
                user.merge_extension(uri, attributes);
            }
        }
    }

    /// Append an extension's attributes onto the core User schema.
    ///
    /// The merged attribute set is the same regardless of whether the
    /// extension document precedes or follows the core User document in the
    /// discovery response: when the core schema is not registered yet, the
    /// extension is held pending and drained by [`register`](Self::register).
    pub fn merge_user_extension(&mut self, uri: String, attributes: Vec<AttributeDefinition>) {
        match self.schemas.get_mut(&ResourceKind::User) {
            Some(user) => user.merge_extension(uri, attributes),
            None => {
                log::debug!("holding extension '{uri}' until the core User schema is registered");
                self.pending_user_extensions.push((uri, attributes));
            }
        }
    }

    /// Get the discovered schema for a resource kind.
    pub fn get(&self, kind: ResourceKind) -> Option<&ResourceSchema> {
        self.schemas.get(&kind)
    }

    /// Get the discovered User schema, extensions merged in.
    pub fn user_schema(&self) -> Option<&ResourceSchema> {
        self.get(ResourceKind::User)
    }

    /// Get the discovered Group schema.
    pub fn group_schema(&self) -> Option<&ResourceSchema> {
        self.get(ResourceKind::Group)
    }

    /// Resource kinds a schema has been registered for.
    pub fn registered_kinds(&self) -> Vec<ResourceKind> {
        self.schemas.keys().copied().collect()
    }

    /// URIs of extension attribute sets still waiting for the core User
    /// schema. Non-empty after discovery means the provider advertised an
    /// extension without its base schema.
    pub fn pending_user_extension_uris(&self) -> Vec<&str> {
        self.pending_user_extensions
            .iter()
            .map(|(uri, _)| uri.as_str())
            .collect()
    }
}
