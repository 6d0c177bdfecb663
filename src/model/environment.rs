//! The root container of a model.

use super::capability::WithIdentity;
use super::shell::{AssetAdministrationShell, ConceptDescription, Submodel};

/// Shells, submodels and concept descriptions, each in insertion order.
///
/// Lookups by id are linear scans; ids are not required to be unique here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Environment {
    pub asset_administration_shells: Vec<AssetAdministrationShell>,
    pub submodels: Vec<Submodel>,
    pub concept_descriptions: Vec<ConceptDescription>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shell.
    pub fn with_asset_administration_shell(mut self, shell: AssetAdministrationShell) -> Self {
        self.asset_administration_shells.push(shell);
        self
    }

    /// Append a submodel.
    pub fn with_submodel(mut self, submodel: Submodel) -> Self {
        self.submodels.push(submodel);
        self
    }

    /// Append a concept description.
    pub fn with_concept_description(mut self, concept_description: ConceptDescription) -> Self {
        self.concept_descriptions.push(concept_description);
        self
    }

    /// True when the environment holds nothing at all.
    pub fn is_empty(&self) -> bool {
        self.asset_administration_shells.is_empty()
            && self.submodels.is_empty()
            && self.concept_descriptions.is_empty()
    }

    /// First shell with the given identifier.
    pub fn asset_administration_shell(&self, id: &str) -> Option<&AssetAdministrationShell> {
        self.asset_administration_shells
            .iter()
            .find(|shell| shell.id() == id)
    }

    /// First submodel with the given identifier.
    pub fn submodel(&self, id: &str) -> Option<&Submodel> {
        self.submodels.iter().find(|submodel| submodel.id() == id)
    }

    /// First concept description with the given identifier.
    pub fn concept_description(&self, id: &str) -> Option<&ConceptDescription> {
        self.concept_descriptions
            .iter()
            .find(|description| description.id() == id)
    }
}
