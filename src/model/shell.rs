//! Identifiable top-level records: shells, submodels, concept descriptions,
//! plus the records that hang off a shell.

use super::capability::WithReferable;
use super::elements::{File, SubmodelElement};
use super::fragments::{AdministrativeInformation, Constraint, Extension};
use super::lang_string::LangStringSet;
use super::reference::{Placeholder, Reference};
use crate::enums::{AssetKind, ModelingKind};

// ============================================================================
// ASSET ADMINISTRATION SHELL
// ============================================================================

/// The digital representation of an asset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AssetAdministrationShell {
    pub data_specifications: Vec<Reference>,
    pub extensions: Vec<Extension>,
    pub id_short: String,
    pub display_name: Option<LangStringSet>,
    pub category: Option<String>,
    pub description: Option<LangStringSet>,
    pub id: String,
    pub administration: Option<AdministrativeInformation>,
    /// The shell this one was derived from. Untyped upstream.
    pub derived_from: Placeholder,
    pub asset_information: Option<AssetInformation>,
    /// Submodels of this shell. Untyped upstream.
    pub submodels: Vec<Placeholder>,
}

capabilities!(AssetAdministrationShell: data_specifications, identifiable);
builders!(AssetAdministrationShell: data_specifications, identifiable);

impl AssetAdministrationShell {
    /// Create a shell with its short id and identifier.
    pub fn new(id_short: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the shell this one was derived from.
    pub fn with_derived_from(mut self, derived_from: impl Into<Placeholder>) -> Self {
        self.derived_from = derived_from.into();
        self
    }

    /// Set the asset information.
    pub fn with_asset_information(mut self, asset_information: AssetInformation) -> Self {
        self.asset_information = Some(asset_information);
        self
    }

    /// Append a submodel link.
    pub fn with_submodel(mut self, submodel: impl Into<Placeholder>) -> Self {
        self.submodels.push(submodel.into());
        self
    }
}

/// Meta-information about the asset a shell represents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AssetInformation {
    pub asset_kind: Option<AssetKind>,
    pub global_asset_id: Option<Reference>,
    pub specific_asset_id: Option<IdentifierKeyValuePair>,
    pub default_thumbnail: Option<File>,
}

impl AssetInformation {
    /// Create asset information for an asset kind.
    pub fn new(asset_kind: AssetKind) -> Self {
        Self {
            asset_kind: Some(asset_kind),
            ..Self::default()
        }
    }

    /// Set the global asset id.
    pub fn with_global_asset_id(mut self, global_asset_id: Reference) -> Self {
        self.global_asset_id = Some(global_asset_id);
        self
    }

    /// Set the specific asset id.
    pub fn with_specific_asset_id(mut self, specific_asset_id: IdentifierKeyValuePair) -> Self {
        self.specific_asset_id = Some(specific_asset_id);
        self
    }

    /// Set the default thumbnail.
    pub fn with_default_thumbnail(mut self, thumbnail: File) -> Self {
        self.default_thumbnail = Some(thumbnail);
        self
    }
}

/// A key-value pair identifying an asset in some domain, e.g. a serial
/// number issued by a manufacturer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct IdentifierKeyValuePair {
    pub semantic_id: Option<Reference>,
    pub key: String,
    pub value: String,
    /// Who issued the key.
    pub external_subject_id: Option<Reference>,
}

capabilities!(IdentifierKeyValuePair: semantics);
builders!(IdentifierKeyValuePair: semantics);

impl IdentifierKeyValuePair {
    /// Create a key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Set the issuer of the key.
    pub fn with_external_subject_id(mut self, external_subject_id: Reference) -> Self {
        self.external_subject_id = Some(external_subject_id);
        self
    }
}

// ============================================================================
// SUBMODEL
// ============================================================================

/// A self-contained aspect of an asset, made of submodel elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Submodel {
    pub data_specifications: Vec<Reference>,
    pub kind: Option<ModelingKind>,
    pub semantic_id: Option<Reference>,
    pub qualifiers: Vec<Constraint>,
    pub extensions: Vec<Extension>,
    pub id_short: String,
    pub display_name: Option<LangStringSet>,
    pub category: Option<String>,
    pub description: Option<LangStringSet>,
    pub id: String,
    pub administration: Option<AdministrativeInformation>,
    pub submodel_elements: Vec<SubmodelElement>,
}

capabilities!(Submodel: data_specifications, kind, semantics, qualifiers, identifiable);
builders!(Submodel: data_specifications, kind, semantics, qualifiers, identifiable);

impl Submodel {
    /// Create a submodel with its short id and identifier.
    pub fn new(id_short: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    /// Append a top-level element.
    pub fn with_submodel_element(mut self, element: impl Into<SubmodelElement>) -> Self {
        self.submodel_elements.push(element.into());
        self
    }

    /// First top-level element with the given short id.
    pub fn submodel_element(&self, id_short: &str) -> Option<&SubmodelElement> {
        self.submodel_elements
            .iter()
            .find(|element| element.id_short() == id_short)
    }
}

// ============================================================================
// CONCEPT DESCRIPTION
// ============================================================================

/// The semantics of an element, typically backed by a data specification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ConceptDescription {
    pub data_specifications: Vec<Reference>,
    pub extensions: Vec<Extension>,
    pub id_short: String,
    pub display_name: Option<LangStringSet>,
    pub category: Option<String>,
    pub description: Option<LangStringSet>,
    pub id: String,
    pub administration: Option<AdministrativeInformation>,
    /// External concepts this description is a case of.
    pub is_case_of: Vec<Reference>,
}

capabilities!(ConceptDescription: data_specifications, identifiable);
builders!(ConceptDescription: data_specifications, identifiable);

impl ConceptDescription {
    /// Create a concept description with its short id and identifier.
    pub fn new(id_short: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    /// Append an external concept this description is a case of.
    pub fn with_is_case_of(mut self, reference: Reference) -> Self {
        self.is_case_of.push(reference);
        self
    }
}

// ============================================================================
// VIEW
// ============================================================================

/// A named selection of elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct View {
    pub data_specifications: Vec<Reference>,
    pub extensions: Vec<Extension>,
    pub id_short: String,
    pub display_name: Option<LangStringSet>,
    pub category: Option<String>,
    pub description: Option<LangStringSet>,
    pub semantic_id: Option<Reference>,
    /// Untyped upstream.
    pub contained_elements: Vec<Placeholder>,
}

capabilities!(View: data_specifications, referable, semantics);
builders!(View: data_specifications, referable, semantics);

impl View {
    /// Create an empty view.
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            ..Self::default()
        }
    }

    /// Append a contained element.
    pub fn with_contained_element(mut self, element: impl Into<Placeholder>) -> Self {
        self.contained_elements.push(element.into());
        self
    }
}
