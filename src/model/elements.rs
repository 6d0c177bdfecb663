//! Submodel elements.
//!
//! Every element record carries the same fragment fields in the same order
//! (data specifications, referable, kind, semantics, qualifiers) followed by
//! its own fields. The abstract groupings are closed enums over the concrete
//! records:
//!
//! ```text
//! SubmodelElement
//! ├── RelationshipElement, AnnotatedRelationshipElement
//! ├── SubmodelElementList, SubmodelElementStruct, Entity
//! ├── DataElement: Property, MultiLanguageProperty, Range,
//! │                ReferenceElement, Blob, File
//! ├── Event: BasicEvent
//! └── Operation, Capability
//! ```
//!
//! Nothing here validates values; `Property::value` is whatever string was
//! stored, whatever its `value_type` says.

use super::fragments::{Constraint, Extension};
use super::lang_string::LangStringSet;
use super::reference::{Placeholder, Reference};
use super::shell::IdentifierKeyValuePair;
use crate::enums::{
    DataTypeDef, EntityType, KeyElements, ModelingKind, ReferableElements, SubmodelElements,
};

/// Declares one submodel element record with the shared fragment fields
/// followed by its own fields, and wires up its capabilities and builders.
macro_rules! submodel_element {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $field_ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
        pub struct $name {
            pub data_specifications: Vec<Reference>,
            pub extensions: Vec<Extension>,
            pub id_short: String,
            pub display_name: Option<LangStringSet>,
            pub category: Option<String>,
            pub description: Option<LangStringSet>,
            pub kind: Option<ModelingKind>,
            pub semantic_id: Option<Reference>,
            pub qualifiers: Vec<Constraint>,
            $(
                $(#[$field_meta])*
                pub $field: $field_ty,
            )*
        }

        capabilities!($name: data_specifications, referable, kind, semantics, qualifiers);
        builders!($name: data_specifications, referable, kind, semantics, qualifiers);
    };
}

// ============================================================================
// RELATIONSHIPS
// ============================================================================

submodel_element! {
    /// A relationship between two elements.
    RelationshipElement {
        first: Option<Reference>,
        second: Option<Reference>,
    }
}

impl RelationshipElement {
    /// Create a relationship between two elements.
    pub fn new(id_short: impl Into<String>, first: Reference, second: Reference) -> Self {
        Self {
            id_short: id_short.into(),
            first: Some(first),
            second: Some(second),
            ..Self::default()
        }
    }
}

submodel_element! {
    /// A relationship annotated with additional data elements.
    AnnotatedRelationshipElement {
        first: Option<Reference>,
        second: Option<Reference>,
        annotation: Vec<DataElement>,
    }
}

impl AnnotatedRelationshipElement {
    /// Create an annotated relationship between two elements.
    pub fn new(id_short: impl Into<String>, first: Reference, second: Reference) -> Self {
        Self {
            id_short: id_short.into(),
            first: Some(first),
            second: Some(second),
            ..Self::default()
        }
    }

    /// Append an annotation.
    pub fn with_annotation(mut self, annotation: impl Into<DataElement>) -> Self {
        self.annotation.push(annotation.into());
        self
    }
}

// ============================================================================
// COLLECTIONS
// ============================================================================

submodel_element! {
    /// An ordered list of elements.
    ///
    /// The `*_values` fields describe what the values are meant to look like;
    /// they are not enforced. `values` keeps insertion order and may contain
    /// duplicates.
    SubmodelElementList {
        submodel_element_type_values: Option<SubmodelElements>,
        values: Vec<SubmodelElement>,
        semantic_id_values: Option<Reference>,
        value_type_values: Option<DataTypeDef>,
    }
}

impl SubmodelElementList {
    /// Create an empty list.
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            ..Self::default()
        }
    }

    /// Append a value.
    pub fn with_value(mut self, value: impl Into<SubmodelElement>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Set the element type the values are meant to have.
    pub fn with_submodel_element_type_values(mut self, element_type: SubmodelElements) -> Self {
        self.submodel_element_type_values = Some(element_type);
        self
    }

    /// Set the semantic id the values are meant to have.
    pub fn with_semantic_id_values(mut self, semantic_id: Reference) -> Self {
        self.semantic_id_values = Some(semantic_id);
        self
    }

    /// Set the value type the values are meant to have.
    pub fn with_value_type_values(mut self, value_type: DataTypeDef) -> Self {
        self.value_type_values = Some(value_type);
        self
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the list has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

submodel_element! {
    /// A structured value made of named elements.
    SubmodelElementStruct {
        values: Vec<SubmodelElement>,
    }
}

impl SubmodelElementStruct {
    /// Create an empty struct.
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            ..Self::default()
        }
    }

    /// Append a value.
    pub fn with_value(mut self, value: impl Into<SubmodelElement>) -> Self {
        self.values.push(value.into());
        self
    }
}

// ============================================================================
// DATA ELEMENTS
// ============================================================================

submodel_element! {
    /// A single typed value.
    Property {
        value_type: Option<DataTypeDef>,
        value: Option<String>,
        value_id: Option<Reference>,
    }
}

impl Property {
    /// Create a property of the given value type.
    pub fn new(id_short: impl Into<String>, value_type: DataTypeDef) -> Self {
        Self {
            id_short: id_short.into(),
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
}

submodel_element! {
    /// A value given in several languages.
    MultiLanguageProperty {
        translatable: Option<LangStringSet>,
        value_id: Option<Reference>,
    }
}

impl MultiLanguageProperty {
    /// Create a property without text.
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            ..Self::default()
        }
    }

    /// Set the texts.
    pub fn with_translatable(mut self, translatable: LangStringSet) -> Self {
        self.translatable = Some(translatable);
        self
    }

    /// Set the value id.
    pub fn with_value_id(mut self, value_id: Reference) -> Self {
        self.value_id = Some(value_id);
        self
    }
}

submodel_element! {
    /// An interval of values; either bound may be open.
    Range {
        value_type: Option<DataTypeDef>,
        min: Option<String>,
        max: Option<String>,
    }
}

impl Range {
    /// Create an open range of the given value type.
    pub fn new(id_short: impl Into<String>, value_type: DataTypeDef) -> Self {
        Self {
            id_short: id_short.into(),
            value_type: Some(value_type),
            ..Self::default()
        }
    }

    /// Set the lower bound.
    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Set the upper bound.
    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }
}

submodel_element! {
    /// An element whose value is a reference.
    ReferenceElement {
        reference: Option<Reference>,
    }
}

impl ReferenceElement {
    /// Create an element without a reference.
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            ..Self::default()
        }
    }

    /// Set the reference.
    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.reference = Some(reference);
        self
    }
}

submodel_element! {
    /// Binary content stored inline.
    Blob {
        mime_type: String,
        content: Vec<u8>,
    }
}

impl Blob {
    /// Create an empty blob of the given MIME type.
    pub fn new(id_short: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            mime_type: mime_type.into(),
            ..Self::default()
        }
    }

    /// Set the content.
    pub fn with_content(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.content = content.into();
        self
    }
}

submodel_element! {
    /// A file, addressed by path or URI.
    File {
        mime_type: String,
        value: Option<String>,
    }
}

impl File {
    /// Create a file element of the given MIME type.
    pub fn new(id_short: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            mime_type: mime_type.into(),
            ..Self::default()
        }
    }

    /// Set the path or URI.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

// ============================================================================
// ENTITIES, EVENTS, OPERATIONS
// ============================================================================

submodel_element! {
    /// A co-managed or self-managed entity with its own statements.
    Entity {
        entity_type: Option<EntityType>,
        statements: Vec<SubmodelElement>,
        global_asset_id: Option<Reference>,
        specific_asset_id: Option<IdentifierKeyValuePair>,
    }
}

impl Entity {
    /// Create an entity without statements.
    pub fn new(id_short: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            id_short: id_short.into(),
            entity_type: Some(entity_type),
            ..Self::default()
        }
    }

    /// Append a statement.
    pub fn with_statement(mut self, statement: impl Into<SubmodelElement>) -> Self {
        self.statements.push(statement.into());
        self
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
}

submodel_element! {
    BasicEvent {
        /// What the event watches; left untyped upstream.
        observed: Placeholder,
    }
}

impl BasicEvent {
    /// Create an event with nothing observed.
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            ..Self::default()
        }
    }

    /// Set what the event observes.
    pub fn with_observed(mut self, observed: impl Into<Placeholder>) -> Self {
        self.observed = observed.into();
        self
    }
}

submodel_element! {
    /// A callable function with typed in, out and in-out parameters.
    Operation {
        input_variables: Vec<OperationVariable>,
        output_variables: Vec<OperationVariable>,
        inoutput_variables: Vec<OperationVariable>,
    }
}

impl Operation {
    /// Create an operation without variables.
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            ..Self::default()
        }
    }

    /// Append an input variable.
    pub fn with_input_variable(mut self, variable: OperationVariable) -> Self {
        self.input_variables.push(variable);
        self
    }

    /// Append an output variable.
    pub fn with_output_variable(mut self, variable: OperationVariable) -> Self {
        self.output_variables.push(variable);
        self
    }

    /// Append an in-out variable.
    pub fn with_inoutput_variable(mut self, variable: OperationVariable) -> Self {
        self.inoutput_variables.push(variable);
        self
    }
}

/// A parameter of an [`Operation`], described by an element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OperationVariable {
    pub value: Option<Box<SubmodelElement>>,
}

impl OperationVariable {
    /// Create a variable described by an element.
    pub fn new(value: impl Into<SubmodelElement>) -> Self {
        Self {
            value: Some(Box::new(value.into())),
        }
    }

    /// The describing element, if any.
    pub fn value(&self) -> Option<&SubmodelElement> {
        self.value.as_deref()
    }
}

submodel_element! {
    /// Marks that a capability exists; carries no value of its own.
    Capability {}
}

impl Capability {
    /// Create a capability.
    pub fn new(id_short: impl Into<String>) -> Self {
        Self {
            id_short: id_short.into(),
            ..Self::default()
        }
    }
}

// ============================================================================
// GROUPINGS
// ============================================================================

/// Declares a closed grouping over element records.
///
/// Variant names are the record names, which are also the
/// [`SubmodelElements`] variant names and the serialized `modelType` tags.
macro_rules! element_group {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(tag = "modelType"))]
        pub enum $name {
            $($variant($variant),)+
        }

        impl $name {
            /// Name of the concrete record, e.g. `"Property"`.
            pub fn model_type(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($variant),)+
                }
            }

            /// Discriminator of the concrete record.
            pub fn element_kind(&self) -> SubmodelElements {
                match self {
                    $(Self::$variant(_) => SubmodelElements::$variant,)+
                }
            }

            /// Discriminator of the concrete record as a referable element.
            pub fn referable_element(&self) -> ReferableElements {
                self.element_kind().into()
            }

            /// Discriminator of the concrete record as a key element.
            pub fn key_element(&self) -> KeyElements {
                self.element_kind().into()
            }
        }

        $(
            impl From<$variant> for $name {
                fn from(element: $variant) -> Self {
                    Self::$variant(element)
                }
            }
        )+

        delegate_capabilities!(
            $name { $($variant),+ }: data_specifications, referable, kind, semantics, qualifiers
        );
    };
}

element_group! {
    /// Any element that can appear inside a submodel.
    SubmodelElement {
        RelationshipElement,
        AnnotatedRelationshipElement,
        SubmodelElementList,
        SubmodelElementStruct,
        Property,
        MultiLanguageProperty,
        Range,
        ReferenceElement,
        Blob,
        File,
        Entity,
        BasicEvent,
        Operation,
        Capability,
    }
}

element_group! {
    /// An element that holds a value rather than structure or behaviour.
    DataElement {
        Property,
        MultiLanguageProperty,
        Range,
        ReferenceElement,
        Blob,
        File,
    }
}

element_group! {
    Event {
        BasicEvent,
    }
}

impl SubmodelElement {
    /// Child elements held directly by this element, in declared order.
    ///
    /// Operation variables and annotations are not included.
    pub fn children(&self) -> &[SubmodelElement] {
        match self {
            Self::SubmodelElementList(list) => &list.values,
            Self::SubmodelElementStruct(structure) => &structure.values,
            Self::Entity(entity) => &entity.statements,
            _ => &[],
        }
    }

    /// True for the variants that are also data elements.
    pub fn is_data_element(&self) -> bool {
        matches!(
            self,
            Self::Property(_)
                | Self::MultiLanguageProperty(_)
                | Self::Range(_)
                | Self::ReferenceElement(_)
                | Self::Blob(_)
                | Self::File(_)
        )
    }
}

impl From<DataElement> for SubmodelElement {
    fn from(element: DataElement) -> Self {
        match element {
            DataElement::Property(inner) => Self::Property(inner),
            DataElement::MultiLanguageProperty(inner) => Self::MultiLanguageProperty(inner),
            DataElement::Range(inner) => Self::Range(inner),
            DataElement::ReferenceElement(inner) => Self::ReferenceElement(inner),
            DataElement::Blob(inner) => Self::Blob(inner),
            DataElement::File(inner) => Self::File(inner),
        }
    }
}

impl From<Event> for SubmodelElement {
    fn from(event: Event) -> Self {
        match event {
            Event::BasicEvent(inner) => Self::BasicEvent(inner),
        }
    }
}
