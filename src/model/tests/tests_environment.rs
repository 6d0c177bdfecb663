#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use crate::enums::*;
use crate::model::*;

fn sample_environment() -> Environment {
    let shell = AssetAdministrationShell::new("Pump", "urn:aas:pump")
        .with_asset_information(
            AssetInformation::new(AssetKind::Instance)
                .with_global_asset_id(Reference::global("urn:asset:pump-17"))
                .with_specific_asset_id(IdentifierKeyValuePair::new("serialNumber", "17")),
        )
        .with_submodel(Reference::global("urn:sm:nameplate"));

    let submodel = Submodel::new("Nameplate", "urn:sm:nameplate")
        .with_kind(ModelingKind::Instance)
        .with_submodel_element(
            Property::new("ManufacturerName", DataTypeDef::String).with_value("ACME"),
        );

    let description = ConceptDescription::new("ManufacturerName", "urn:cd:manufacturer-name")
        .with_is_case_of(Reference::global("0173-1#02-AAO677#002"));

    Environment::new()
        .with_asset_administration_shell(shell)
        .with_submodel(submodel)
        .with_concept_description(description)
}

#[test]
fn test_new_environment_is_empty() {
    assert!(Environment::new().is_empty());
    assert!(!sample_environment().is_empty());
}

#[test]
fn test_lookup_by_id() {
    let environment = sample_environment();

    let shell = environment.asset_administration_shell("urn:aas:pump").unwrap();
    assert_eq!(shell.id_short, "Pump");
    assert_eq!(
        shell.asset_information.as_ref().unwrap().asset_kind,
        Some(AssetKind::Instance)
    );
    assert!(shell.derived_from.is_unresolved());

    let submodel = environment.submodel("urn:sm:nameplate").unwrap();
    assert_eq!(submodel.kind, Some(ModelingKind::Instance));
    assert_eq!(
        submodel.submodel_element("ManufacturerName").unwrap().model_type(),
        "Property"
    );
    assert!(submodel.submodel_element("Missing").is_none());

    assert!(environment.concept_description("urn:cd:manufacturer-name").is_some());
    assert!(environment.submodel("urn:aas:pump").is_none());
}

#[test]
fn test_shell_submodels_are_placeholders() {
    let environment = sample_environment();
    let shell = &environment.asset_administration_shells[0];

    // The link is carried, not resolved against the environment.
    assert_eq!(
        shell.submodels[0].as_reference(),
        Some(&Reference::global("urn:sm:nameplate"))
    );
}

#[test]
fn test_clone_is_deep_and_equal() {
    let keys = vec![
        Key::new(KeyElements::Submodel, "urn:x-1"),
        Key::new(KeyElements::Property, "temp"),
    ];
    let element =
        ReferenceElement::new("link").with_reference(Reference::model(keys.clone()).unwrap());
    let environment = Environment::new()
        .with_submodel(Submodel::new("S", "urn:x-1").with_submodel_element(element));

    let copy = environment.clone();
    assert_eq!(copy, environment);

    let SubmodelElement::ReferenceElement(element) = &copy.submodels[0].submodel_elements[0] else {
        panic!("expected a reference element");
    };
    let model = element.reference.as_ref().unwrap().as_model().unwrap();
    assert_eq!(model.keys, keys);
}

#[test]
fn test_data_specification_contents() {
    let iec = DataSpecificationIec61360::new(LangStringSet::new().with("en", "Max rotation speed"))
        .with_data_type(DataTypeIec61360::RealMeasure)
        .with_unit("1/min")
        .with_level_type(LevelType::Max)
        .with_value_list(
            [
                ValueReferencePair::new("slow", Reference::global("urn:v:slow")),
                ValueReferencePair::new("fast", Reference::global("urn:v:fast")),
            ]
            .into_iter()
            .collect(),
        );

    assert_eq!(
        iec.value_list.as_ref().unwrap().values().collect::<Vec<_>>(),
        vec!["slow", "fast"]
    );

    let content = DataSpecificationContent::from(iec);
    assert_eq!(content.model_type(), "DataSpecificationIec61360");

    let unit = DataSpecificationPhysicalUnit::new("metre", "m").with_si_notation("m");
    assert_eq!(unit.unit_symbol.as_deref(), Some("m"));
    assert!(unit.nist_name.is_none());
    assert_eq!(
        DataSpecificationContent::from(unit).model_type(),
        "DataSpecificationPhysicalUnit"
    );
}
