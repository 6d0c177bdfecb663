#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use crate::enums::KeyElements;
use crate::error::ModelError;
use crate::model::*;

fn submodel_property_keys() -> Vec<Key> {
    vec![
        Key::new(KeyElements::Submodel, "urn:x-1"),
        Key::new(KeyElements::Property, "temp"),
    ]
}

#[test]
fn test_model_reference_keeps_key_order() {
    let reference = Reference::model(submodel_property_keys()).unwrap();
    let model = reference.as_model().unwrap();

    assert_eq!(model.keys, submodel_property_keys());
    assert_eq!(model.first_key().unwrap().type_, KeyElements::Submodel);
    assert_eq!(model.last_key().unwrap().value, "temp");
    assert!(reference.as_global().is_none());
}

#[test]
fn test_model_reference_rejects_empty_keys() {
    assert_eq!(Reference::model(Vec::new()), Err(ModelError::EmptyKeys));
    assert_eq!(
        ModelReference::try_from(Vec::<Key>::new()),
        Err(ModelError::EmptyKeys)
    );
}

#[test]
fn test_default_model_reference_is_degenerate() {
    assert!(ModelReference::default().is_degenerate());
    assert!(!ModelReference::new(Key::new(KeyElements::Submodel, "urn:x-1")).is_degenerate());
}

#[test]
fn test_referred_semantic_id_nests() {
    let model = ModelReference::new(Key::new(KeyElements::Property, "temp"))
        .with_referred_semantic_id(Reference::global("https://example.com/temperature"));

    let semantic = model.referred_semantic_id.as_deref().unwrap();
    assert_eq!(
        semantic.as_global().unwrap().values,
        vec!["https://example.com/temperature".to_string()]
    );
}

#[test]
fn test_global_reference_values_in_order() {
    let global = GlobalReference::new("0173-1#01-ABC123#001").with_value("https://example.com/b");
    assert_eq!(global.values.len(), 2);
    assert_eq!(global.values[0], "0173-1#01-ABC123#001");
}

#[test]
fn test_key_display() {
    let key = Key::new(KeyElements::GlobalReference, "https://example.com");
    assert_eq!(key.to_string(), "(GLOBAL_REFERENCE)https://example.com");
}

#[test]
fn test_placeholder_defaults_to_unresolved() {
    let placeholder = Placeholder::default();
    assert!(placeholder.is_unresolved());
    assert!(placeholder.as_reference().is_none());

    let linked = Placeholder::from(Reference::global("urn:shell:base"));
    assert!(!linked.is_unresolved());
    assert_eq!(linked.as_reference(), Some(&Reference::global("urn:shell:base")));

    let opaque = Placeholder::Opaque("raw".to_string());
    assert!(opaque.as_reference().is_none());
}

#[test]
fn test_lang_string_set_keeps_insertion_order() {
    let mut set = LangStringSet::new().with("en", "Temperature").with("de", "Temperatur");
    assert_eq!(set.languages().collect::<Vec<_>>(), vec!["en", "de"]);

    // Replacing keeps the position
    assert_eq!(set.insert("en", "Temp"), Some("Temperature".to_string()));
    assert_eq!(set.languages().collect::<Vec<_>>(), vec!["en", "de"]);
    assert_eq!(set.get("en"), Some("Temp"));

    set.insert("fr", "Température");
    assert_eq!(set.remove("en"), Some("Temp".to_string()));
    assert_eq!(set.languages().collect::<Vec<_>>(), vec!["de", "fr"]);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_lang_string_set_lookup_is_exact() {
    let set: LangStringSet = [("en-US", "Color")].into_iter().collect();
    assert_eq!(set.get("en-US"), Some("Color"));
    assert_eq!(set.get("en"), None);
    assert!(LangStringSet::new().is_empty());
}

#[test]
fn test_constraint_variants() {
    let qualifier = Qualifier::new("ExpressionSemantic", crate::enums::DataTypeDef::String)
        .with_value("REQUIREMENT");
    let constraint = Constraint::from(qualifier.clone());
    assert_eq!(constraint.as_qualifier(), Some(&qualifier));

    let formula = Constraint::from(Formula::default());
    assert!(formula.as_qualifier().is_none());
}
