//! Core schema type definitions for discovered SCIM resources.
//!
//! These are the typed trees that `SchemaModelBuilder` produces from raw
//! discovery metadata: attribute definitions with their RFC 7643
//! characteristics, and the per-resource schema that groups them.

use serde::{Deserialize, Serialize};

/// SCIM attribute data types as defined in RFC 7643.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AttributeType {
    String,
    Boolean,
    /// Binary data (base64 encoded)
    Binary,
    Decimal,
    Integer,
    /// DateTime in RFC3339 format
    DateTime,
    /// URI reference
    Reference,
    /// Complex attribute with sub-attributes
    Complex,
}

impl AttributeType {
    /// Exact-match mapping from the discovery document's `type` token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "string" => Some(Self::String),
            "boolean" => Some(Self::Boolean),
            "binary" => Some(Self::Binary),
            "decimal" => Some(Self::Decimal),
            "integer" => Some(Self::Integer),
            "dateTime" => Some(Self::DateTime),
            "reference" => Some(Self::Reference),
            "complex" => Some(Self::Complex),
            _ => None,
        }
    }

    /// JSON type name used in assertion records.
    pub fn expected_shape(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Binary => "base64 string",
            Self::Decimal => "decimal",
            Self::Integer => "integer",
            Self::DateTime => "RFC3339 dateTime string",
            Self::Reference => "reference URI string",
            Self::Complex => "object",
        }
    }
}

/// Attribute mutability characteristics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Mutability {
    ReadWrite,
    ReadOnly,
    WriteOnly,
    Immutable,
}

impl Mutability {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "readWrite" => Some(Self::ReadWrite),
            "readOnly" => Some(Self::ReadOnly),
            "writeOnly" => Some(Self::WriteOnly),
            "immutable" => Some(Self::Immutable),
            _ => None,
        }
    }
}

impl Default for Mutability {
    fn default() -> Self {
        Self::ReadWrite
    }
}

/// When the service provider includes an attribute in responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Returned {
    Always,
    Default,
    Never,
    Request,
}

impl Returned {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "always" => Some(Self::Always),
            "default" => Some(Self::Default),
            "never" => Some(Self::Never),
            "request" => Some(Self::Request),
            _ => None,
        }
    }
}

impl Default for Returned {
    fn default() -> Self {
        Self::Default
    }
}

/// Attribute uniqueness constraints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Uniqueness {
    None,
    Server,
    Global,
}

impl Uniqueness {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "none" => Some(Self::None),
            "server" => Some(Self::Server),
            "global" => Some(Self::Global),
            _ => None,
        }
    }
}

impl Default for Uniqueness {
    fn default() -> Self {
        Self::None
    }
}

/// Definition of one discovered SCIM attribute.
///
/// `uri` is the fully-namespaced path of the attribute: the discovery
/// document id plus `:name` for top-level attributes, with `.subName`
/// appended per nesting level for sub-attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinition {
    pub uri: String,
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: AttributeType,
    pub multi_valued: bool,
    pub required: bool,
    pub case_exact: bool,
    pub mutability: Mutability,
    pub returned: Returned,
    pub uniqueness: Uniqueness,
    pub description: String,
    /// Populated only when `data_type` is [`AttributeType::Complex`]
    #[serde(default)]
    pub sub_attributes: Vec<AttributeDefinition>,
}

/// A discovered resource schema: its identifying URIs plus the ordered
/// top-level attribute definitions.
///
/// `schema_uris` starts with the core URI and grows as extension schemas
/// are merged in; it is never empty for a constructed schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSchema {
    pub schema_uris: Vec<String>,
    pub attributes: Vec<AttributeDefinition>,
}

impl ResourceSchema {
    pub fn new(core_uri: impl Into<String>, attributes: Vec<AttributeDefinition>) -> Self {
        Self {
            schema_uris: vec![core_uri.into()],
            attributes,
        }
    }

    /// Append an extension's attributes onto this schema.
    ///
    /// Extension attributes are added after the existing list, never
    /// replacing base attributes. The extension URI joins `schema_uris`
    /// unless already present.
    pub fn merge_extension(&mut self, uri: String, attributes: Vec<AttributeDefinition>) {
        if !self.schema_uris.contains(&uri) {
            self.schema_uris.push(uri);
        }
        self.attributes.extend(attributes);
    }

    /// Look up a top-level attribute definition by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.attributes.iter().find(|attr| attr.name == name)
    }
}

/// The resource kinds the conformance suite drives tests against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    User,
    Group,
    Role,
    ResourceType,
    ServiceProviderConfig,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::User => "User",
            Self::Group => "Group",
            Self::Role => "Role",
            Self::ResourceType => "ResourceType",
            Self::ServiceProviderConfig => "ServiceProviderConfig",
        };
        f.write_str(name)
    }
}
