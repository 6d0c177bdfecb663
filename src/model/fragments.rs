//! Capability fragments: the attribute clusters records are composed from.
//!
//! Each bundle struct here mirrors one cluster as a standalone value. Records
//! do not hold these bundles; they declare the same fields directly and hand
//! out a bundle through the projections on the
//! [`capability`](super::capability) traits.
//!
//! ```text
//! HasExtensions ─▶ Referable ─▶ Identifiable
//! HasSemantics   HasKind   Qualifiable   HasDataSpecification
//! ```

use super::lang_string::LangStringSet;
use super::reference::Reference;
use crate::enums::{DataTypeDef, ModelingKind};

// ============================================================================
// FRAGMENT MEMBERS
// ============================================================================

/// A proprietary extension attached to an element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Extension {
    pub semantic_id: Option<Reference>,
    /// Name of the extension, unique among the extensions of one element.
    pub name: String,
    pub value_type: Option<DataTypeDef>,
    pub value: Option<String>,
    pub refers_to: Option<Reference>,
}

impl Extension {
    /// Create an extension by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the typed value.
    pub fn with_value(mut self, value_type: DataTypeDef, value: impl Into<String>) -> Self {
        self.value_type = Some(value_type);
        self.value = Some(value.into());
        self
    }

    /// Set the semantic id.
    pub fn with_semantic_id(mut self, semantic_id: Reference) -> Self {
        self.semantic_id = Some(semantic_id);
        self
    }

    /// Set the element this extension refers to.
    pub fn with_refers_to(mut self, refers_to: Reference) -> Self {
        self.refers_to = Some(refers_to);
        self
    }
}

/// Version information of an identifiable element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AdministrativeInformation {
    pub data_specifications: Vec<Reference>,
    pub version: Option<String>,
    pub revision: Option<String>,
}

impl AdministrativeInformation {
    /// Create administrative information for a version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            ..Self::default()
        }
    }

    /// Set the revision.
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    /// Append a data specification reference.
    pub fn with_data_specification(mut self, data_specification: Reference) -> Self {
        self.data_specifications.push(data_specification);
        self
    }
}

/// A type-value pair qualifying an element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Qualifier {
    pub semantic_id: Option<Reference>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_: String,
    pub value_type: Option<DataTypeDef>,
    pub value: Option<String>,
    pub value_id: Option<Reference>,
}

impl Qualifier {
    /// Create a qualifier of a type.
    pub fn new(type_: impl Into<String>, value_type: DataTypeDef) -> Self {
        Self {
            type_: type_.into(),
            value_type: Some(value_type),
            ..Self::default()
        }
    }

    /// Set the value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the value id.
    pub fn with_value_id(mut self, value_id: Reference) -> Self {
        self.value_id = Some(value_id);
        self
    }

    /// Set the semantic id.
    pub fn with_semantic_id(mut self, semantic_id: Reference) -> Self {
        self.semantic_id = Some(semantic_id);
        self
    }
}

capabilities!(Extension: semantics);
capabilities!(Qualifier: semantics);

/// A constraint expressed as a logical formula over other elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Formula {
    /// Elements whose values the formula is evaluated over.
    pub depends_on: Vec<Reference>,
}

/// Something that further qualifies or restricts an element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "modelType"))]
pub enum Constraint {
    Qualifier(Qualifier),
    Formula(Formula),
}

impl Constraint {
    /// The qualifier, if this constraint is one.
    pub fn as_qualifier(&self) -> Option<&Qualifier> {
        match self {
            Self::Qualifier(qualifier) => Some(qualifier),
            Self::Formula(_) => None,
        }
    }
}

impl From<Qualifier> for Constraint {
    fn from(qualifier: Qualifier) -> Self {
        Self::Qualifier(qualifier)
    }
}

impl From<Formula> for Constraint {
    fn from(formula: Formula) -> Self {
        Self::Formula(formula)
    }
}

// ============================================================================
// ATTRIBUTE BUNDLES
// ============================================================================

/// Semantic tag: the concept an element conforms to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HasSemantics {
    pub semantic_id: Option<Reference>,
}

/// Ordered extensions of an element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HasExtensions {
    pub extensions: Vec<Extension>,
}

/// Attributes of an element that can be referred to by its short id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Referable {
    pub extensions: Vec<Extension>,
    pub id_short: String,
    pub display_name: Option<LangStringSet>,
    pub category: Option<String>,
    pub description: Option<LangStringSet>,
}

/// Attributes of an element with a globally unique identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identifiable {
    pub extensions: Vec<Extension>,
    pub id_short: String,
    pub display_name: Option<LangStringSet>,
    pub category: Option<String>,
    pub description: Option<LangStringSet>,
    pub id: String,
    pub administration: Option<AdministrativeInformation>,
}

impl Identifiable {
    /// The referable part of this bundle.
    pub fn referable(&self) -> Referable {
        Referable {
            extensions: self.extensions.clone(),
            id_short: self.id_short.clone(),
            display_name: self.display_name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }
}

/// Template/instance marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HasKind {
    pub kind: Option<ModelingKind>,
}

/// Ordered constraints of an element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Qualifiable {
    pub qualifiers: Vec<Constraint>,
}

/// References to the data specification templates an element uses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HasDataSpecification {
    pub data_specifications: Vec<Reference>,
}
