//! References, keys and placeholder links.
//!
//! A reference is a non-owning link. It is resolved by identifier, never by
//! structural containment, and may dangle; resolution belongs to the caller.
//!
//! ```text
//! Reference
//! ├── Global(GlobalReference)   values: ["https://…", …]
//! └── Model(ModelReference)     keys: [Key(SUBMODEL, "urn:x-1"), Key(PROPERTY, "temp")]
//!                               referred_semantic_id: Option<Box<Reference>>
//! ```

use crate::enums::KeyElements;
use crate::error::{ModelError, ModelResult};

// ============================================================================
// KEYS
// ============================================================================

/// One step of a model reference: which kind of element, and its value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_: KeyElements,
    pub value: String,
}

impl Key {
    /// Create a key.
    pub fn new(type_: KeyElements, value: impl Into<String>) -> Self {
        Self {
            type_,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}){}", self.type_, self.value)
    }
}

// ============================================================================
// REFERENCES
// ============================================================================

/// Reference to an external entity by an ordered list of opaque values,
/// typically IRIs or IRDIs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalReference {
    pub values: Vec<String>,
}

impl GlobalReference {
    /// Create a global reference with a single value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            values: vec![value.into()],
        }
    }

    /// Append a value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }
}

/// Reference to a model element as a path of typed keys.
///
/// The key path is ordered; the first key usually names an identifiable and
/// each following key descends into it. A path without keys is degenerate;
/// only `Default` builds one, while `try_from` and deserialization reject it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ModelReference {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "non_empty_keys"))]
    pub keys: Vec<Key>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub referred_semantic_id: Option<Box<Reference>>,
}

impl ModelReference {
    /// Create a model reference starting with `first`.
    pub fn new(first: Key) -> Self {
        Self {
            keys: vec![first],
            referred_semantic_id: None,
        }
    }

    /// Append a key to the path.
    pub fn with_key(mut self, key: Key) -> Self {
        self.keys.push(key);
        self
    }

    /// Set the semantic id of the referred element.
    pub fn with_referred_semantic_id(mut self, semantic_id: Reference) -> Self {
        self.referred_semantic_id = Some(Box::new(semantic_id));
        self
    }

    /// True for a reference without keys.
    pub fn is_degenerate(&self) -> bool {
        self.keys.is_empty()
    }

    /// First key of the path, usually an identifiable.
    pub fn first_key(&self) -> Option<&Key> {
        self.keys.first()
    }

    /// Last key of the path: the referred element.
    pub fn last_key(&self) -> Option<&Key> {
        self.keys.last()
    }
}

impl TryFrom<Vec<Key>> for ModelReference {
    type Error = ModelError;

    fn try_from(keys: Vec<Key>) -> ModelResult<Self> {
        if keys.is_empty() {
            return Err(ModelError::EmptyKeys);
        }
        Ok(Self {
            keys,
            referred_semantic_id: None,
        })
    }
}

/// Rejects a deserialized key path without keys, as [`ModelReference::try_from`] does.
#[cfg(feature = "serde")]
fn non_empty_keys<'de, D>(deserializer: D) -> Result<Vec<Key>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let keys = Vec::<Key>::deserialize(deserializer)?;
    if keys.is_empty() {
        return Err(serde::de::Error::custom(ModelError::EmptyKeys));
    }
    Ok(keys)
}

/// A link to another element or to something outside the model.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "modelType"))]
pub enum Reference {
    #[cfg_attr(feature = "serde", serde(rename = "GlobalReference"))]
    Global(GlobalReference),
    #[cfg_attr(feature = "serde", serde(rename = "ModelReference"))]
    Model(ModelReference),
}

impl Reference {
    /// Global reference with one value.
    pub fn global(value: impl Into<String>) -> Self {
        Self::Global(GlobalReference::new(value))
    }

    /// Model reference from a key path.
    ///
    /// # Errors
    ///
    /// [`ModelError::EmptyKeys`] if `keys` is empty.
    pub fn model(keys: impl IntoIterator<Item = Key>) -> ModelResult<Self> {
        ModelReference::try_from(keys.into_iter().collect::<Vec<_>>()).map(Self::Model)
    }

    /// The global reference, if this is one.
    pub fn as_global(&self) -> Option<&GlobalReference> {
        match self {
            Self::Global(global) => Some(global),
            Self::Model(_) => None,
        }
    }

    /// The model reference, if this is one.
    pub fn as_model(&self) -> Option<&ModelReference> {
        match self {
            Self::Model(model) => Some(model),
            Self::Global(_) => None,
        }
    }
}

impl From<GlobalReference> for Reference {
    fn from(reference: GlobalReference) -> Self {
        Self::Global(reference)
    }
}

impl From<ModelReference> for Reference {
    fn from(reference: ModelReference) -> Self {
        Self::Model(reference)
    }
}

// ============================================================================
// PLACEHOLDERS
// ============================================================================

/// A slot the upstream schema has not given a proper type yet.
///
/// Used for `AssetAdministrationShell::derived_from`,
/// `AssetAdministrationShell::submodels`, `BasicEvent::observed` and
/// `View::contained_elements`. Whatever is stored is carried through unchanged
/// and never interpreted by this crate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placeholder {
    /// Nothing has been supplied.
    #[default]
    Unresolved,
    /// Raw content kept verbatim.
    Opaque(String),
    /// Content already shaped like a reference, not checked against its
    /// intended target kind.
    Reference(Reference),
}

impl Placeholder {
    /// True if nothing has been supplied.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }

    /// The stored reference, if the content is one.
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Self::Reference(reference) => Some(reference),
            _ => None,
        }
    }
}

impl From<Reference> for Placeholder {
    fn from(reference: Reference) -> Self {
        Self::Reference(reference)
    }
}
