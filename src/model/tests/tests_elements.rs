#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use rstest::rstest;

use crate::enums::*;
use crate::model::*;

fn property(id_short: &str, value: &str) -> Property {
    Property::new(id_short, DataTypeDef::Int).with_value(value)
}

#[test]
fn test_list_preserves_order_and_identity() {
    let a = property("PropertyA", "1");
    let b = property("PropertyB", "2");
    let list = SubmodelElementList::new("readings")
        .with_submodel_element_type_values(SubmodelElements::Property)
        .with_value_type_values(DataTypeDef::Int)
        .with_value(a.clone())
        .with_value(b.clone());

    assert_eq!(list.len(), 2);
    assert_eq!(list.values[0], SubmodelElement::Property(a));
    assert_eq!(list.values[1], SubmodelElement::Property(b));
}

#[test]
fn test_list_keeps_duplicates() {
    let a = property("PropertyA", "1");
    let list = SubmodelElementList::new("readings")
        .with_value(a.clone())
        .with_value(a);
    assert_eq!(list.len(), 2);
    assert_eq!(list.values[0], list.values[1]);
}

#[test]
fn test_list_type_values_are_not_enforced() {
    let list = SubmodelElementList::new("mixed")
        .with_submodel_element_type_values(SubmodelElements::Property)
        .with_value(Blob::new("blob", "application/octet-stream"));

    assert_eq!(list.values[0].element_kind(), SubmodelElements::Blob);
}

#[rstest]
#[case(Property::new("p", DataTypeDef::String).into(), "Property", KeyElements::Property)]
#[case(Range::new("r", DataTypeDef::Double).into(), "Range", KeyElements::Range)]
#[case(
    MultiLanguageProperty::new("m").into(),
    "MultiLanguageProperty",
    KeyElements::MultiLanguageProperty
)]
#[case(ReferenceElement::new("ref").into(), "ReferenceElement", KeyElements::ReferenceElement)]
#[case(Blob::new("b", "text/plain").into(), "Blob", KeyElements::Blob)]
#[case(File::new("f", "text/plain").into(), "File", KeyElements::File)]
#[case(Entity::new("e", EntityType::SelfManagedEntity).into(), "Entity", KeyElements::Entity)]
#[case(BasicEvent::new("ev").into(), "BasicEvent", KeyElements::BasicEvent)]
#[case(Operation::new("op").into(), "Operation", KeyElements::Operation)]
#[case(Capability::new("cap").into(), "Capability", KeyElements::Capability)]
#[case(
    SubmodelElementList::new("l").into(),
    "SubmodelElementList",
    KeyElements::SubmodelElementList
)]
#[case(
    SubmodelElementStruct::new("s").into(),
    "SubmodelElementStruct",
    KeyElements::SubmodelElementStruct
)]
fn test_element_discriminators(
    #[case] element: SubmodelElement,
    #[case] model_type: &str,
    #[case] key: KeyElements,
) {
    assert_eq!(element.model_type(), model_type);
    assert_eq!(element.key_element(), key);
    assert_eq!(element.referable_element().name(), key.name());
    assert_eq!(element.element_kind().name(), key.name());
}

#[test]
fn test_relationship_discriminators() {
    let first = Reference::global("urn:a");
    let second = Reference::global("urn:b");
    let plain: SubmodelElement =
        RelationshipElement::new("rel", first.clone(), second.clone()).into();
    let annotated: SubmodelElement = AnnotatedRelationshipElement::new("arel", first, second)
        .with_annotation(Property::new("note", DataTypeDef::String))
        .into();

    assert_eq!(plain.key_element(), KeyElements::RelationshipElement);
    assert_eq!(
        annotated.referable_element(),
        ReferableElements::AnnotatedRelationshipElement
    );
}

#[test]
fn test_data_element_widens_to_submodel_element() {
    let data = DataElement::from(property("p", "7"));
    assert_eq!(data.model_type(), "Property");

    let element = SubmodelElement::from(data);
    assert!(element.is_data_element());
    assert_eq!(element.id_short(), "p");

    let event = SubmodelElement::from(Event::from(BasicEvent::new("ev")));
    assert!(!event.is_data_element());
    assert_eq!(event.model_type(), "BasicEvent");
}

#[test]
fn test_children_of_containers() {
    let inner = property("inner", "1");
    let structure: SubmodelElement = SubmodelElementStruct::new("s")
        .with_value(inner.clone())
        .into();
    let entity: SubmodelElement = Entity::new("e", EntityType::CoManagedEntity)
        .with_statement(inner.clone())
        .into();

    assert_eq!(structure.children(), &[SubmodelElement::Property(inner.clone())]);
    assert_eq!(entity.children().len(), 1);
    assert!(SubmodelElement::from(inner).children().is_empty());
}

#[test]
fn test_operation_variables_by_direction() {
    let operation = Operation::new("calibrate")
        .with_input_variable(OperationVariable::new(property("offset", "0")))
        .with_output_variable(OperationVariable::new(property("result", "0")))
        .with_inoutput_variable(OperationVariable::new(property("state", "0")));

    assert_eq!(operation.input_variables.len(), 1);
    assert_eq!(
        operation.output_variables[0].value().unwrap().id_short(),
        "result"
    );
    assert_eq!(
        operation.inoutput_variables[0].value().unwrap().id_short(),
        "state"
    );
    assert!(OperationVariable::default().value().is_none());
}

#[test]
fn test_property_value_is_not_checked() {
    let property = Property::new("temp", DataTypeDef::Int).with_value("not a number");
    assert_eq!(property.value.as_deref(), Some("not a number"));
}

#[test]
fn test_basic_event_observed_placeholder() {
    let event = BasicEvent::new("changed");
    assert!(event.observed.is_unresolved());

    let observed = Reference::model([Key::new(KeyElements::Property, "temp")]).unwrap();
    let event = event.with_observed(observed.clone());
    assert_eq!(event.observed.as_reference(), Some(&observed));
}

#[test]
fn test_blob_content_and_range_bounds() {
    let blob = Blob::new("raw", "application/octet-stream").with_content(vec![0xde, 0xad]);
    assert_eq!(blob.content, vec![0xde, 0xad]);

    let range = Range::new("limits", DataTypeDef::Double).with_min("-40");
    assert_eq!(range.min.as_deref(), Some("-40"));
    assert!(range.max.is_none());
}
