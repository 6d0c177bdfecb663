//! Records of the AAS metamodel.
//!
//! ## Layout
//!
//! ```text
//! environment          → Environment (root container)
//!   ↓
//! shell                → AssetAdministrationShell, Submodel, ConceptDescription, View
//!   ↓
//! elements             → SubmodelElement and its concrete records
//! data_specification   → IEC 61360 and physical unit contents
//!   ↓
//! capability           → With* traits over the fragment fields
//! fragments            → Extension, Qualifier, AdministrativeInformation, bundles
//! reference            → Key, Reference, Placeholder
//! lang_string          → LangStringSet
//! ```
//!
//! Records are plain owned values. Containment is by value (`Vec`, `Option`,
//! `Box`); every cross-link is a [`Reference`] and is never resolved here.

// Declared first so its macros are in scope for the record modules.
#[macro_use]
pub mod capability;

pub mod data_specification;
pub mod elements;
pub mod environment;
pub mod fragments;
pub mod lang_string;
pub mod reference;
pub mod shell;

#[cfg(test)]
mod tests;

pub use capability::{
    WithDataSpecifications, WithExtensions, WithIdentity, WithKind, WithQualifiers,
    WithReferable, WithSemantics,
};
pub use data_specification::{
    DataSpecificationContent, DataSpecificationIec61360, DataSpecificationPhysicalUnit,
    ValueList, ValueReferencePair,
};
pub use elements::{
    AnnotatedRelationshipElement, BasicEvent, Blob, Capability, DataElement, Entity, Event, File,
    MultiLanguageProperty, Operation, OperationVariable, Property, Range, ReferenceElement,
    RelationshipElement, SubmodelElement, SubmodelElementList, SubmodelElementStruct,
};
pub use environment::Environment;
pub use fragments::{
    AdministrativeInformation, Constraint, Extension, Formula, HasDataSpecification,
    HasExtensions, HasKind, HasSemantics, Identifiable, Qualifiable, Qualifier, Referable,
};
pub use lang_string::LangStringSet;
pub use reference::{GlobalReference, Key, ModelReference, Placeholder, Reference};
pub use shell::{
    AssetAdministrationShell, AssetInformation, ConceptDescription, IdentifierKeyValuePair,
    Submodel, View,
};
