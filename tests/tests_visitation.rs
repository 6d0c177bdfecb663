#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use aas::visitation::{self, Visitor};
use aas::*;

fn sample() -> Environment {
    let semantic_id = Reference::global("urn:cd:temperature");
    let temperature = Property::new("temperature", DataTypeDef::Double)
        .with_semantic_id(semantic_id.clone())
        .with_value("21.5");

    let operation = Operation::new("calibrate")
        .with_input_variable(OperationVariable::new(Property::new("offset", DataTypeDef::Double)))
        .with_output_variable(OperationVariable::new(Property::new("ok", DataTypeDef::Boolean)));

    let entity = Entity::new("motor", EntityType::SelfManagedEntity)
        .with_statement(Property::new("rpm", DataTypeDef::Int))
        .with_global_asset_id(Reference::global("urn:asset:motor"));

    let submodel = Submodel::new("Operational", "urn:sm:operational")
        .with_semantic_id(Reference::global("urn:sm-template:operational"))
        .with_submodel_element(temperature)
        .with_submodel_element(
            SubmodelElementStruct::new("limits")
                .with_value(Range::new("band", DataTypeDef::Double).with_min("0").with_max("80")),
        )
        .with_submodel_element(operation)
        .with_submodel_element(entity)
        .with_submodel_element(
            ReferenceElement::new("origin").with_reference(
                Reference::model([
                    Key::new(KeyElements::Submodel, "urn:sm:operational"),
                    Key::new(KeyElements::Property, "temperature"),
                ])
                .unwrap(),
            ),
        );

    Environment::new()
        .with_asset_administration_shell(
            AssetAdministrationShell::new("Pump", "urn:aas:pump")
                .with_submodel(Reference::global("urn:sm:operational")),
        )
        .with_submodel(submodel)
}

#[derive(Default)]
struct PropertyCollector {
    names: Vec<String>,
}

impl Visitor for PropertyCollector {
    fn visit_property(&mut self, property: &Property) {
        self.names.push(property.id_short.clone());
        visitation::walk_property(self, property);
    }
}

#[test]
fn test_properties_are_found_at_every_depth_in_field_order() {
    let mut collector = PropertyCollector::default();
    collector.visit_environment(&sample());

    assert_eq!(collector.names, vec!["temperature", "offset", "ok", "rpm"]);
}

#[derive(Default)]
struct ReferenceCounter {
    global: usize,
    keys: usize,
}

impl Visitor for ReferenceCounter {
    fn visit_reference(&mut self, reference: &Reference) {
        if reference.as_global().is_some() {
            self.global += 1;
        }
        visitation::walk_reference(self, reference);
    }

    fn visit_key(&mut self, _key: &Key) {
        self.keys += 1;
    }
}

#[test]
fn test_references_are_visited_not_followed() {
    let mut counter = ReferenceCounter::default();
    counter.visit_environment(&sample());

    // shell submodel placeholder, submodel semantic id, property semantic id,
    // entity global asset id
    assert_eq!(counter.global, 4);
    assert_eq!(counter.keys, 2);
}

#[derive(Default)]
struct Pruning {
    visited: Vec<&'static str>,
}

impl Visitor for Pruning {
    fn visit_submodel_element(&mut self, element: &SubmodelElement) {
        self.visited.push(element.model_type());
        // No walk: children of containers are skipped.
    }
}

#[test]
fn test_overriding_without_walking_prunes_descent() {
    let mut pruning = Pruning::default();
    pruning.visit_environment(&sample());

    assert_eq!(
        pruning.visited,
        vec![
            "Property",
            "SubmodelElementStruct",
            "Operation",
            "Entity",
            "ReferenceElement"
        ]
    );
}

#[test]
fn test_default_visitor_walks_without_side_effects() {
    struct Noop;
    impl Visitor for Noop {}

    Noop.visit_environment(&sample());
    Noop.visit_data_specification_content(&DataSpecificationContent::from(
        DataSpecificationIec61360::new(LangStringSet::new().with("en", "Temperature")),
    ));
}

#[derive(Default)]
struct ResumingCounter {
    formulas: usize,
    placeholders: usize,
    blobs: usize,
    references: usize,
}

impl Visitor for ResumingCounter {
    fn visit_formula(&mut self, formula: &Formula) {
        self.formulas += 1;
        visitation::walk_formula(self, formula);
    }

    fn visit_placeholder(&mut self, placeholder: &Placeholder) {
        self.placeholders += 1;
        visitation::walk_placeholder(self, placeholder);
    }

    fn visit_blob(&mut self, blob: &Blob) {
        self.blobs += 1;
        visitation::walk_blob(self, blob);
    }

    fn visit_reference(&mut self, reference: &Reference) {
        self.references += 1;
        visitation::walk_reference(self, reference);
    }
}

#[test]
fn test_overrides_resume_descent_through_walkers() {
    let blob = Blob::new("manual", "application/pdf")
        .with_semantic_id(Reference::global("urn:cd:manual"))
        .with_qualifier(Formula {
            depends_on: vec![Reference::global("urn:a"), Reference::global("urn:b")],
        });
    let environment = Environment::new()
        .with_asset_administration_shell(
            AssetAdministrationShell::new("Pump", "urn:aas:pump")
                .with_derived_from(Reference::global("urn:aas:base"))
                .with_submodel(Placeholder::Opaque("raw".to_string())),
        )
        .with_submodel(Submodel::new("Docs", "urn:sm:docs").with_submodel_element(blob));

    let mut counter = ResumingCounter::default();
    counter.visit_environment(&environment);

    assert_eq!(counter.formulas, 1);
    assert_eq!(counter.placeholders, 2);
    assert_eq!(counter.blobs, 1);
    // derived_from, blob semantic id, two formula dependencies
    assert_eq!(counter.references, 4);
}

#[test]
fn test_constraint_and_content_walkers_dispatch() {
    let mut counter = ResumingCounter::default();
    visitation::walk_constraint(
        &mut counter,
        &Constraint::from(Formula {
            depends_on: vec![Reference::global("urn:a")],
        }),
    );
    assert_eq!((counter.formulas, counter.references), (1, 1));

    let iec = DataSpecificationIec61360::new(LangStringSet::new().with("en", "Speed"))
        .with_unit_id(Reference::global("urn:unit:rpm"));
    let content = DataSpecificationContent::from(iec);
    visitation::walk_data_specification_content(&mut counter, &content);
    assert_eq!(counter.references, 2);

    let administration = AdministrativeInformation::new("1")
        .with_data_specification(Reference::global("urn:ds:iec61360"));
    visitation::walk_administrative_information(&mut counter, &administration);
    assert_eq!(counter.references, 3);
}
