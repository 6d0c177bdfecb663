//! Element-kind discriminators used by keys and submodel element lists.
//!
//! `KeyElements` is the widest set; the identifiable, referable and submodel
//! element discriminators are name-preserving subsets of it.

enumeration! {
    /// Kinds of identifiable elements.
    pub enum IdentifiableElements {
        AssetAdministrationShell = "ASSET_ADMINISTRATION_SHELL",
        ConceptDescription = "CONCEPT_DESCRIPTION",
        Submodel = "SUBMODEL",
    }
}

enumeration! {
    /// Kinds of referable elements.
    pub enum ReferableElements {
        AccessPermissionRule = "ACCESS_PERMISSION_RULE",
        AnnotatedRelationshipElement = "ANNOTATED_RELATIONSHIP_ELEMENT",
        Asset = "ASSET",
        AssetAdministrationShell = "ASSET_ADMINISTRATION_SHELL",
        BasicEvent = "BASIC_EVENT",
        Blob = "BLOB",
        Capability = "CAPABILITY",
        ConceptDescription = "CONCEPT_DESCRIPTION",
        DataElement = "DATA_ELEMENT",
        Entity = "ENTITY",
        Event = "EVENT",
        File = "FILE",
        MultiLanguageProperty = "MULTI_LANGUAGE_PROPERTY",
        Operation = "OPERATION",
        Property = "PROPERTY",
        Range = "RANGE",
        ReferenceElement = "REFERENCE_ELEMENT",
        RelationshipElement = "RELATIONSHIP_ELEMENT",
        Submodel = "SUBMODEL",
        SubmodelElement = "SUBMODEL_ELEMENT",
        SubmodelElementList = "SUBMODEL_ELEMENT_LIST",
        SubmodelElementStruct = "SUBMODEL_ELEMENT_STRUCT",
    }
}

enumeration! {
    /// Kind of element a [`Key`](crate::model::Key) points at.
    pub enum KeyElements {
        /// Bookmark inside the element denoted by the preceding key.
        FragmentReference = "FRAGMENT_REFERENCE",
        AccessPermissionRule = "ACCESS_PERMISSION_RULE",
        AnnotatedRelationshipElement = "ANNOTATED_RELATIONSHIP_ELEMENT",
        Asset = "ASSET",
        AssetAdministrationShell = "ASSET_ADMINISTRATION_SHELL",
        BasicEvent = "BASIC_EVENT",
        Blob = "BLOB",
        Capability = "CAPABILITY",
        ConceptDescription = "CONCEPT_DESCRIPTION",
        DataElement = "DATA_ELEMENT",
        Entity = "ENTITY",
        Event = "EVENT",
        File = "FILE",
        MultiLanguageProperty = "MULTI_LANGUAGE_PROPERTY",
        Operation = "OPERATION",
        Property = "PROPERTY",
        Range = "RANGE",
        /// Global unique id outside the model.
        GlobalReference = "GLOBAL_REFERENCE",
        ReferenceElement = "REFERENCE_ELEMENT",
        RelationshipElement = "RELATIONSHIP_ELEMENT",
        Submodel = "SUBMODEL",
        SubmodelElement = "SUBMODEL_ELEMENT",
        SubmodelElementList = "SUBMODEL_ELEMENT_LIST",
        SubmodelElementStruct = "SUBMODEL_ELEMENT_STRUCT",
    }
}

enumeration! {
    /// Kinds of submodel elements, used as the element template of a
    /// [`SubmodelElementList`](crate::model::SubmodelElementList).
    pub enum SubmodelElements {
        AnnotatedRelationshipElement = "ANNOTATED_RELATIONSHIP_ELEMENT",
        Asset = "ASSET",
        AssetAdministrationShell = "ASSET_ADMINISTRATION_SHELL",
        BasicEvent = "BASIC_EVENT",
        Blob = "BLOB",
        Capability = "CAPABILITY",
        ConceptDescription = "CONCEPT_DESCRIPTION",
        DataElement = "DATA_ELEMENT",
        Entity = "ENTITY",
        Event = "EVENT",
        File = "FILE",
        MultiLanguageProperty = "MULTI_LANGUAGE_PROPERTY",
        Operation = "OPERATION",
        Property = "PROPERTY",
        Range = "RANGE",
        ReferenceElement = "REFERENCE_ELEMENT",
        RelationshipElement = "RELATIONSHIP_ELEMENT",
        Submodel = "SUBMODEL",
        SubmodelElement = "SUBMODEL_ELEMENT",
        SubmodelElementList = "SUBMODEL_ELEMENT_LIST",
        SubmodelElementStruct = "SUBMODEL_ELEMENT_STRUCT",
    }
}

// ============================================================================
// SUBSET RELATIONS
// ============================================================================

subset!(IdentifiableElements => KeyElements [
    AssetAdministrationShell,
    ConceptDescription,
    Submodel,
]);

subset!(IdentifiableElements => ReferableElements [
    AssetAdministrationShell,
    ConceptDescription,
    Submodel,
]);

subset!(ReferableElements => KeyElements [
    AccessPermissionRule,
    AnnotatedRelationshipElement,
    Asset,
    AssetAdministrationShell,
    BasicEvent,
    Blob,
    Capability,
    ConceptDescription,
    DataElement,
    Entity,
    Event,
    File,
    MultiLanguageProperty,
    Operation,
    Property,
    Range,
    ReferenceElement,
    RelationshipElement,
    Submodel,
    SubmodelElement,
    SubmodelElementList,
    SubmodelElementStruct,
]);

subset!(SubmodelElements => ReferableElements [
    AnnotatedRelationshipElement,
    Asset,
    AssetAdministrationShell,
    BasicEvent,
    Blob,
    Capability,
    ConceptDescription,
    DataElement,
    Entity,
    Event,
    File,
    MultiLanguageProperty,
    Operation,
    Property,
    Range,
    ReferenceElement,
    RelationshipElement,
    Submodel,
    SubmodelElement,
    SubmodelElementList,
    SubmodelElementStruct,
]);

subset!(SubmodelElements => KeyElements [
    AnnotatedRelationshipElement,
    Asset,
    AssetAdministrationShell,
    BasicEvent,
    Blob,
    Capability,
    ConceptDescription,
    DataElement,
    Entity,
    Event,
    File,
    MultiLanguageProperty,
    Operation,
    Property,
    Range,
    ReferenceElement,
    RelationshipElement,
    Submodel,
    SubmodelElement,
    SubmodelElementList,
    SubmodelElementStruct,
]);

impl KeyElements {
    /// Returns true for keys that point outside the model (global ids and
    /// fragment bookmarks) rather than at a referable model element.
    pub fn is_external(self) -> bool {
        matches!(self, Self::GlobalReference | Self::FragmentReference)
    }

    /// Returns true if the key addresses an identifiable element, which can
    /// start a key path on its own.
    pub fn is_identifiable(self) -> bool {
        IdentifiableElements::try_from(self).is_ok()
    }
}
