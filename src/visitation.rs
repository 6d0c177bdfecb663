//! Read-only traversal of a record graph.
//!
//! Implement [`Visitor`] and override the methods for the records of
//! interest. Every default method descends through the matching `walk_*`
//! function, which visits the owned children in declared field order. An
//! override that still wants the descent calls the `walk_*` function itself.
//!
//! ```text
//! visit_submodel ──▶ walk_submodel
//!                     ├── visit_reference   (data specifications)
//!                     ├── visit_extension   (extensions)
//!                     ├── visit_reference   (semantic id)
//!                     ├── visit_constraint  (qualifiers)
//!                     └── visit_submodel_element ──▶ walk_submodel_element ──▶ …
//! ```
//!
//! References are visited, never followed.

use crate::model::{
    AdministrativeInformation, AnnotatedRelationshipElement, AssetAdministrationShell,
    AssetInformation, BasicEvent, Blob, Capability, ConceptDescription, Constraint, DataElement,
    DataSpecificationContent, DataSpecificationIec61360, DataSpecificationPhysicalUnit, Entity,
    Environment, Extension, File, Formula, IdentifierKeyValuePair, Key, MultiLanguageProperty,
    Operation, OperationVariable, Placeholder, Property, Qualifier, Range, Reference,
    ReferenceElement, RelationshipElement, Submodel, SubmodelElement, SubmodelElementList,
    SubmodelElementStruct, View, WithDataSpecifications, WithExtensions, WithIdentity,
    WithQualifiers, WithReferable, WithSemantics,
};

/// Visitor over AAS records.
///
/// Default implementations walk into children and do nothing else.
pub trait Visitor {
    fn visit_environment(&mut self, environment: &Environment) {
        walk_environment(self, environment);
    }

    fn visit_asset_administration_shell(&mut self, shell: &AssetAdministrationShell) {
        walk_asset_administration_shell(self, shell);
    }

    fn visit_asset_information(&mut self, information: &AssetInformation) {
        walk_asset_information(self, information);
    }

    fn visit_identifier_key_value_pair(&mut self, pair: &IdentifierKeyValuePair) {
        walk_identifier_key_value_pair(self, pair);
    }

    fn visit_submodel(&mut self, submodel: &Submodel) {
        walk_submodel(self, submodel);
    }

    fn visit_concept_description(&mut self, description: &ConceptDescription) {
        walk_concept_description(self, description);
    }

    fn visit_view(&mut self, view: &View) {
        walk_view(self, view);
    }

    /// Dispatches to the method for the concrete element.
    fn visit_submodel_element(&mut self, element: &SubmodelElement) {
        walk_submodel_element(self, element);
    }

    /// Dispatches to the method for the concrete element.
    fn visit_data_element(&mut self, element: &DataElement) {
        walk_data_element(self, element);
    }

    fn visit_relationship_element(&mut self, element: &RelationshipElement) {
        walk_relationship_element(self, element);
    }

    fn visit_annotated_relationship_element(&mut self, element: &AnnotatedRelationshipElement) {
        walk_annotated_relationship_element(self, element);
    }

    fn visit_submodel_element_list(&mut self, list: &SubmodelElementList) {
        walk_submodel_element_list(self, list);
    }

    fn visit_submodel_element_struct(&mut self, structure: &SubmodelElementStruct) {
        walk_submodel_element_struct(self, structure);
    }

    fn visit_property(&mut self, property: &Property) {
        walk_property(self, property);
    }

    fn visit_multi_language_property(&mut self, property: &MultiLanguageProperty) {
        walk_multi_language_property(self, property);
    }

    fn visit_range(&mut self, range: &Range) {
        walk_range(self, range);
    }

    fn visit_reference_element(&mut self, element: &ReferenceElement) {
        walk_reference_element(self, element);
    }

    fn visit_blob(&mut self, blob: &Blob) {
        walk_blob(self, blob);
    }

    fn visit_file(&mut self, file: &File) {
        walk_file(self, file);
    }

    fn visit_entity(&mut self, entity: &Entity) {
        walk_entity(self, entity);
    }

    fn visit_basic_event(&mut self, event: &BasicEvent) {
        walk_basic_event(self, event);
    }

    fn visit_operation(&mut self, operation: &Operation) {
        walk_operation(self, operation);
    }

    fn visit_operation_variable(&mut self, variable: &OperationVariable) {
        walk_operation_variable(self, variable);
    }

    fn visit_capability(&mut self, capability: &Capability) {
        walk_capability(self, capability);
    }

    fn visit_extension(&mut self, extension: &Extension) {
        walk_extension(self, extension);
    }

    fn visit_administrative_information(&mut self, administration: &AdministrativeInformation) {
        walk_administrative_information(self, administration);
    }

    fn visit_constraint(&mut self, constraint: &Constraint) {
        walk_constraint(self, constraint);
    }

    fn visit_qualifier(&mut self, qualifier: &Qualifier) {
        walk_qualifier(self, qualifier);
    }

    fn visit_formula(&mut self, formula: &Formula) {
        walk_formula(self, formula);
    }

    fn visit_reference(&mut self, reference: &Reference) {
        walk_reference(self, reference);
    }

    fn visit_key(&mut self, _key: &Key) {}

    fn visit_placeholder(&mut self, placeholder: &Placeholder) {
        walk_placeholder(self, placeholder);
    }

    /// Dispatches to the method for the concrete content.
    fn visit_data_specification_content(&mut self, content: &DataSpecificationContent) {
        walk_data_specification_content(self, content);
    }

    fn visit_data_specification_iec61360(&mut self, content: &DataSpecificationIec61360) {
        walk_data_specification_iec61360(self, content);
    }

    fn visit_data_specification_physical_unit(
        &mut self,
        _content: &DataSpecificationPhysicalUnit,
    ) {
    }
}

// ============================================================================
// WALKERS: CONTAINERS
// ============================================================================

/// Visits shells, then submodels, then concept descriptions.
pub fn walk_environment<V: Visitor + ?Sized>(visitor: &mut V, environment: &Environment) {
    for shell in &environment.asset_administration_shells {
        visitor.visit_asset_administration_shell(shell);
    }
    for submodel in &environment.submodels {
        visitor.visit_submodel(submodel);
    }
    for description in &environment.concept_descriptions {
        visitor.visit_concept_description(description);
    }
}

/// Visits the fragments, then the derived-from slot, asset information and submodels.
pub fn walk_asset_administration_shell<V: Visitor + ?Sized>(
    visitor: &mut V,
    shell: &AssetAdministrationShell,
) {
    walk_data_specifications(visitor, shell);
    walk_identity(visitor, shell);
    visitor.visit_placeholder(&shell.derived_from);
    if let Some(information) = &shell.asset_information {
        visitor.visit_asset_information(information);
    }
    for submodel in &shell.submodels {
        visitor.visit_placeholder(submodel);
    }
}

/// Visits the asset ids and the default thumbnail.
pub fn walk_asset_information<V: Visitor + ?Sized>(
    visitor: &mut V,
    information: &AssetInformation,
) {
    if let Some(reference) = &information.global_asset_id {
        visitor.visit_reference(reference);
    }
    if let Some(pair) = &information.specific_asset_id {
        visitor.visit_identifier_key_value_pair(pair);
    }
    if let Some(thumbnail) = &information.default_thumbnail {
        visitor.visit_file(thumbnail);
    }
}

/// Visits the semantic id and the issuer.
pub fn walk_identifier_key_value_pair<V: Visitor + ?Sized>(
    visitor: &mut V,
    pair: &IdentifierKeyValuePair,
) {
    walk_semantics(visitor, pair);
    if let Some(reference) = &pair.external_subject_id {
        visitor.visit_reference(reference);
    }
}

/// Visits the fragments, then each top-level element.
pub fn walk_submodel<V: Visitor + ?Sized>(visitor: &mut V, submodel: &Submodel) {
    walk_data_specifications(visitor, submodel);
    walk_semantics(visitor, submodel);
    walk_qualifiers(visitor, submodel);
    walk_identity(visitor, submodel);
    tracing::trace!(
        id_short = %submodel.id_short,
        count = submodel.submodel_elements.len(),
        "walking submodel elements"
    );
    for element in &submodel.submodel_elements {
        visitor.visit_submodel_element(element);
    }
}

/// Visits the fragments, then each `is_case_of` reference.
pub fn walk_concept_description<V: Visitor + ?Sized>(
    visitor: &mut V,
    description: &ConceptDescription,
) {
    walk_data_specifications(visitor, description);
    walk_identity(visitor, description);
    for reference in &description.is_case_of {
        visitor.visit_reference(reference);
    }
}

/// Visits the fragments, then each contained element slot.
pub fn walk_view<V: Visitor + ?Sized>(visitor: &mut V, view: &View) {
    walk_data_specifications(visitor, view);
    walk_extensions(visitor, view);
    walk_semantics(visitor, view);
    for element in &view.contained_elements {
        visitor.visit_placeholder(element);
    }
}

// ============================================================================
// WALKERS: SUBMODEL ELEMENTS
// ============================================================================

/// Dispatches to the method for the concrete element.
pub fn walk_submodel_element<V: Visitor + ?Sized>(visitor: &mut V, element: &SubmodelElement) {
    match element {
        SubmodelElement::RelationshipElement(inner) => visitor.visit_relationship_element(inner),
        SubmodelElement::AnnotatedRelationshipElement(inner) => {
            visitor.visit_annotated_relationship_element(inner)
        }
        SubmodelElement::SubmodelElementList(inner) => visitor.visit_submodel_element_list(inner),
        SubmodelElement::SubmodelElementStruct(inner) => {
            visitor.visit_submodel_element_struct(inner)
        }
        SubmodelElement::Property(inner) => visitor.visit_property(inner),
        SubmodelElement::MultiLanguageProperty(inner) => {
            visitor.visit_multi_language_property(inner)
        }
        SubmodelElement::Range(inner) => visitor.visit_range(inner),
        SubmodelElement::ReferenceElement(inner) => visitor.visit_reference_element(inner),
        SubmodelElement::Blob(inner) => visitor.visit_blob(inner),
        SubmodelElement::File(inner) => visitor.visit_file(inner),
        SubmodelElement::Entity(inner) => visitor.visit_entity(inner),
        SubmodelElement::BasicEvent(inner) => visitor.visit_basic_event(inner),
        SubmodelElement::Operation(inner) => visitor.visit_operation(inner),
        SubmodelElement::Capability(inner) => visitor.visit_capability(inner),
    }
}

/// Dispatches to the method for the concrete data element.
pub fn walk_data_element<V: Visitor + ?Sized>(visitor: &mut V, element: &DataElement) {
    match element {
        DataElement::Property(inner) => visitor.visit_property(inner),
        DataElement::MultiLanguageProperty(inner) => visitor.visit_multi_language_property(inner),
        DataElement::Range(inner) => visitor.visit_range(inner),
        DataElement::ReferenceElement(inner) => visitor.visit_reference_element(inner),
        DataElement::Blob(inner) => visitor.visit_blob(inner),
        DataElement::File(inner) => visitor.visit_file(inner),
    }
}

/// Visits the fields every submodel element shares, in declared order.
pub fn walk_element_fragments<V, E>(visitor: &mut V, element: &E)
where
    V: Visitor + ?Sized,
    E: WithDataSpecifications + WithReferable + WithSemantics + WithQualifiers,
{
    walk_data_specifications(visitor, element);
    walk_extensions(visitor, element);
    walk_semantics(visitor, element);
    walk_qualifiers(visitor, element);
}

/// Visits the fragments, then both ends.
pub fn walk_relationship_element<V: Visitor + ?Sized>(
    visitor: &mut V,
    element: &RelationshipElement,
) {
    walk_element_fragments(visitor, element);
    for reference in element.first.iter().chain(&element.second) {
        visitor.visit_reference(reference);
    }
}

/// Visits the fragments, both ends, then the annotations.
pub fn walk_annotated_relationship_element<V: Visitor + ?Sized>(
    visitor: &mut V,
    element: &AnnotatedRelationshipElement,
) {
    walk_element_fragments(visitor, element);
    for reference in element.first.iter().chain(&element.second) {
        visitor.visit_reference(reference);
    }
    for annotation in &element.annotation {
        visitor.visit_data_element(annotation);
    }
}

/// Visits the fragments, the values in order, then `semantic_id_values`.
pub fn walk_submodel_element_list<V: Visitor + ?Sized>(
    visitor: &mut V,
    list: &SubmodelElementList,
) {
    walk_element_fragments(visitor, list);
    tracing::trace!(id_short = %list.id_short, count = list.values.len(), "walking list values");
    for value in &list.values {
        visitor.visit_submodel_element(value);
    }
    if let Some(reference) = &list.semantic_id_values {
        visitor.visit_reference(reference);
    }
}

/// Visits the fragments, then the values in order.
pub fn walk_submodel_element_struct<V: Visitor + ?Sized>(
    visitor: &mut V,
    structure: &SubmodelElementStruct,
) {
    walk_element_fragments(visitor, structure);
    tracing::trace!(
        id_short = %structure.id_short,
        count = structure.values.len(),
        "walking struct values"
    );
    for value in &structure.values {
        visitor.visit_submodel_element(value);
    }
}

/// Visits the fragments and the value id.
pub fn walk_property<V: Visitor + ?Sized>(visitor: &mut V, property: &Property) {
    walk_element_fragments(visitor, property);
    if let Some(reference) = &property.value_id {
        visitor.visit_reference(reference);
    }
}

/// Visits the fragments and the value id.
pub fn walk_multi_language_property<V: Visitor + ?Sized>(
    visitor: &mut V,
    property: &MultiLanguageProperty,
) {
    walk_element_fragments(visitor, property);
    if let Some(reference) = &property.value_id {
        visitor.visit_reference(reference);
    }
}

/// Visits the fragments.
pub fn walk_range<V: Visitor + ?Sized>(visitor: &mut V, range: &Range) {
    walk_element_fragments(visitor, range);
}

/// Visits the fragments and the stored reference.
pub fn walk_reference_element<V: Visitor + ?Sized>(visitor: &mut V, element: &ReferenceElement) {
    walk_element_fragments(visitor, element);
    if let Some(reference) = &element.reference {
        visitor.visit_reference(reference);
    }
}

/// Visits the fragment fields of a blob; its content is not walked.
pub fn walk_blob<V: Visitor + ?Sized>(visitor: &mut V, blob: &Blob) {
    walk_element_fragments(visitor, blob);
}

/// Visits the fragment fields of a file element.
pub fn walk_file<V: Visitor + ?Sized>(visitor: &mut V, file: &File) {
    walk_element_fragments(visitor, file);
}

/// Visits the fragment fields of a capability.
pub fn walk_capability<V: Visitor + ?Sized>(visitor: &mut V, capability: &Capability) {
    walk_element_fragments(visitor, capability);
}

/// Visits the fragments, statements and asset ids.
pub fn walk_entity<V: Visitor + ?Sized>(visitor: &mut V, entity: &Entity) {
    walk_element_fragments(visitor, entity);
    tracing::trace!(
        id_short = %entity.id_short,
        count = entity.statements.len(),
        "walking entity statements"
    );
    for statement in &entity.statements {
        visitor.visit_submodel_element(statement);
    }
    if let Some(reference) = &entity.global_asset_id {
        visitor.visit_reference(reference);
    }
    if let Some(pair) = &entity.specific_asset_id {
        visitor.visit_identifier_key_value_pair(pair);
    }
}

/// Visits the fragments and the observed slot.
pub fn walk_basic_event<V: Visitor + ?Sized>(visitor: &mut V, event: &BasicEvent) {
    walk_element_fragments(visitor, event);
    visitor.visit_placeholder(&event.observed);
}

/// Visits the fragments, then input, output and in-out variables.
pub fn walk_operation<V: Visitor + ?Sized>(visitor: &mut V, operation: &Operation) {
    walk_element_fragments(visitor, operation);
    let variables = operation
        .input_variables
        .iter()
        .chain(&operation.output_variables)
        .chain(&operation.inoutput_variables);
    for variable in variables {
        visitor.visit_operation_variable(variable);
    }
}

/// Visits the describing element, if any.
pub fn walk_operation_variable<V: Visitor + ?Sized>(
    visitor: &mut V,
    variable: &OperationVariable,
) {
    if let Some(value) = variable.value() {
        visitor.visit_submodel_element(value);
    }
}

// ============================================================================
// WALKERS: FRAGMENTS AND REFERENCES
// ============================================================================

/// Visits the semantic id and the referred element.
pub fn walk_extension<V: Visitor + ?Sized>(visitor: &mut V, extension: &Extension) {
    walk_semantics(visitor, extension);
    if let Some(reference) = &extension.refers_to {
        visitor.visit_reference(reference);
    }
}

/// Visits the data specification references.
pub fn walk_administrative_information<V: Visitor + ?Sized>(
    visitor: &mut V,
    administration: &AdministrativeInformation,
) {
    for reference in &administration.data_specifications {
        visitor.visit_reference(reference);
    }
}

/// Dispatches to [`Visitor::visit_qualifier`] or [`Visitor::visit_formula`].
pub fn walk_constraint<V: Visitor + ?Sized>(visitor: &mut V, constraint: &Constraint) {
    match constraint {
        Constraint::Qualifier(qualifier) => visitor.visit_qualifier(qualifier),
        Constraint::Formula(formula) => visitor.visit_formula(formula),
    }
}

/// Visits each dependency.
pub fn walk_formula<V: Visitor + ?Sized>(visitor: &mut V, formula: &Formula) {
    for reference in &formula.depends_on {
        visitor.visit_reference(reference);
    }
}

/// Visits the stored reference, if any. Opaque content is skipped.
pub fn walk_placeholder<V: Visitor + ?Sized>(visitor: &mut V, placeholder: &Placeholder) {
    if let Placeholder::Reference(reference) = placeholder {
        visitor.visit_reference(reference);
    }
}

/// Visits the semantic id and the value id.
pub fn walk_qualifier<V: Visitor + ?Sized>(visitor: &mut V, qualifier: &Qualifier) {
    walk_semantics(visitor, qualifier);
    if let Some(reference) = &qualifier.value_id {
        visitor.visit_reference(reference);
    }
}

/// Visits the keys and referred semantic id of a model reference.
pub fn walk_reference<V: Visitor + ?Sized>(visitor: &mut V, reference: &Reference) {
    if let Reference::Model(model) = reference {
        for key in &model.keys {
            visitor.visit_key(key);
        }
        if let Some(semantic_id) = &model.referred_semantic_id {
            visitor.visit_reference(semantic_id);
        }
    }
}

/// Dispatches to the method for the concrete content.
pub fn walk_data_specification_content<V: Visitor + ?Sized>(
    visitor: &mut V,
    content: &DataSpecificationContent,
) {
    match content {
        DataSpecificationContent::DataSpecificationIec61360(iec) => {
            visitor.visit_data_specification_iec61360(iec)
        }
        DataSpecificationContent::DataSpecificationPhysicalUnit(unit) => {
            visitor.visit_data_specification_physical_unit(unit)
        }
    }
}

/// Visits the unit id, then the value list ids, then the value id.
pub fn walk_data_specification_iec61360<V: Visitor + ?Sized>(
    visitor: &mut V,
    content: &DataSpecificationIec61360,
) {
    if let Some(reference) = &content.unit_id {
        visitor.visit_reference(reference);
    }
    if let Some(list) = &content.value_list {
        for pair in &list.value_reference_pairs {
            if let Some(reference) = &pair.value_id {
                visitor.visit_reference(reference);
            }
        }
    }
    if let Some(reference) = &content.value_id {
        visitor.visit_reference(reference);
    }
}

fn walk_semantics<V: Visitor + ?Sized>(visitor: &mut V, element: &impl WithSemantics) {
    if let Some(reference) = element.semantic_id() {
        visitor.visit_reference(reference);
    }
}

fn walk_extensions<V: Visitor + ?Sized>(visitor: &mut V, element: &impl WithExtensions) {
    for extension in element.extensions() {
        visitor.visit_extension(extension);
    }
}

fn walk_qualifiers<V: Visitor + ?Sized>(visitor: &mut V, element: &impl WithQualifiers) {
    for constraint in element.qualifiers() {
        visitor.visit_constraint(constraint);
    }
}

fn walk_data_specifications<V: Visitor + ?Sized>(
    visitor: &mut V,
    element: &impl WithDataSpecifications,
) {
    for reference in element.data_specifications() {
        visitor.visit_reference(reference);
    }
}

fn walk_identity<V: Visitor + ?Sized>(visitor: &mut V, element: &impl WithIdentity) {
    walk_extensions(visitor, element);
    if let Some(administration) = element.administration() {
        visitor.visit_administrative_information(administration);
    }
}
