#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use std::collections::BTreeSet;

use rstest::rstest;

use crate::enums::*;
use crate::error::ModelError;

fn family_names<E: Enumeration>() -> Vec<&'static str> {
    E::NAMES.to_vec()
}

#[test]
fn test_data_type_def_is_the_union_of_all_families() {
    let mut expected = Vec::new();
    expected.extend(family_names::<BuildInListTypes>());
    expected.extend(family_names::<DecimalBuildInTypes>());
    expected.extend(family_names::<DurationBuildInTypes>());
    expected.extend(family_names::<PrimitiveTypes>());
    expected.extend(family_names::<StringBuildInTypes>());

    // Same order, nothing lost, nothing duplicated.
    assert_eq!(DataTypeDef::NAMES, expected.as_slice());
    let unique: BTreeSet<_> = expected.iter().collect();
    assert_eq!(unique.len(), DataTypeDef::COUNT);
}

#[test]
fn test_each_family_widens_into_the_union() {
    fn check<F>()
    where
        F: Enumeration + Into<DataTypeDef> + TryFrom<DataTypeDef, Error = ModelError>,
    {
        for variant in F::VARIANTS {
            let merged: DataTypeDef = (*variant).into();
            assert_eq!(merged.name(), variant.name());
            assert_eq!(F::try_from(merged).unwrap(), *variant);
        }
    }

    check::<BuildInListTypes>();
    check::<DecimalBuildInTypes>();
    check::<DurationBuildInTypes>();
    check::<PrimitiveTypes>();
    check::<StringBuildInTypes>();
}

#[rstest]
#[case("ENTITIES", DataTypeFamily::BuildInList, 0)]
#[case("N_M_TOKENS", DataTypeFamily::BuildInList, 2)]
#[case("INTEGER", DataTypeFamily::Decimal, 3)]
#[case("NEGATIVE_INTEGER", DataTypeFamily::Decimal, 16)]
#[case("DAY_TIME_DURATION", DataTypeFamily::Duration, 17)]
#[case("ANY_URI", DataTypeFamily::Primitive, 19)]
#[case("HEY_BINARY", DataTypeFamily::Primitive, 31)]
#[case("STRING", DataTypeFamily::Primitive, 34)]
#[case("NORMALIZED_STRING", DataTypeFamily::String, 36)]
#[case("IDREF", DataTypeFamily::String, 42)]
fn test_data_type_def_layout(
    #[case] name: &str,
    #[case] family: DataTypeFamily,
    #[case] ordinal: u32,
) {
    let def = DataTypeDef::from_name(name).unwrap();
    assert_eq!(def.family(), family);
    assert_eq!(def.ordinal(), ordinal);
}

#[test]
fn test_narrowing_outside_family_fails() {
    assert_eq!(
        PrimitiveTypes::try_from(DataTypeDef::Entity),
        Err(ModelError::NotInFamily {
            family: "PrimitiveTypes",
            name: "ENTITY",
        })
    );
    assert!(DecimalBuildInTypes::try_from(DataTypeDef::Double).is_err());
}

#[test]
fn test_entity_and_entities_are_distinct() {
    assert_ne!(DataTypeDef::value_of("ENTITY"), DataTypeDef::value_of("ENTITIES"));
    assert_eq!(DataTypeDef::Entity.family(), DataTypeFamily::String);
    assert_eq!(DataTypeDef::Entities.family(), DataTypeFamily::BuildInList);
}

#[test]
fn test_family_partition_covers_union() {
    let mut total = 0;
    for family in DataTypeFamily::ALL {
        let members = DataTypeDef::VARIANTS
            .iter()
            .filter(|d| d.family() == family)
            .count();
        assert!(members > 0, "{} is empty", family.as_str());
        total += members;
    }
    assert_eq!(total, DataTypeDef::COUNT);
}

#[test]
fn test_iec61360_names() {
    assert_eq!(DataTypeIec61360::name_of(2), Some("STRING_TRANSLATABLE"));
    assert_eq!("IRDI".parse::<DataTypeIec61360>(), Ok(DataTypeIec61360::Irdi));
    assert_eq!(DataTypeIec61360::value_of("BLOB"), Ok(18));
}
