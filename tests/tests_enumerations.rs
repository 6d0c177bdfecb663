#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use aas::*;
use rstest::rstest;

#[test]
fn test_modeling_kind_scenario() {
    assert_eq!(ModelingKind::name_of(1), Some("INSTANCE"));
    assert_eq!(ModelingKind::value_of("INSTANCE"), Ok(1));
    assert_eq!(
        ModelingKind::value_of("BOGUS"),
        Err(ModelError::UnknownName {
            enumeration: "ModelingKind",
            name: "BOGUS".to_string(),
        })
    );
    // Legacy lookup: unknown names collapse onto the first variant.
    assert_eq!(ModelingKind::from_name_or_first("BOGUS"), ModelingKind::Template);
}

#[rstest]
#[case("TYPE", AssetKind::Type)]
#[case("INSTANCE", AssetKind::Instance)]
fn test_asset_kind_parse(#[case] name: &str, #[case] expected: AssetKind) {
    assert_eq!(name.parse::<AssetKind>(), Ok(expected));
    assert_eq!(expected.to_string(), name);
}

#[test]
fn test_error_messages_name_the_enumeration() {
    let error = "instance".parse::<ModelingKind>().unwrap_err();
    let message = error.to_string();
    assert!(message.contains("ModelingKind"), "{message}");
    assert!(message.contains("instance"), "{message}");

    let error = EntityType::try_from(9u32).unwrap_err();
    assert!(error.to_string().contains("EntityType"));
}

#[test]
fn test_data_type_def_families() {
    let def: DataTypeDef = PrimitiveTypes::DateTime.into();
    assert_eq!(def.family(), DataTypeFamily::Primitive);
    assert_eq!(PrimitiveTypes::try_from(def), Ok(PrimitiveTypes::DateTime));
    assert!(StringBuildInTypes::try_from(def).is_err());
}

#[test]
fn test_element_subsets_widen_to_key_elements() {
    let key: KeyElements = IdentifiableElements::Submodel.into();
    assert_eq!(key, KeyElements::Submodel);
    assert!(key.is_identifiable());

    assert_eq!(
        IdentifiableElements::try_from(KeyElements::GlobalReference),
        Err(ModelError::NotInFamily {
            family: "IdentifiableElements",
            name: "GLOBAL_REFERENCE",
        })
    );
}
