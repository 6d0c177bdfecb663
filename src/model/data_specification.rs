//! Data specification contents: IEC 61360 property definitions and physical
//! units.
//!
//! These are attached to concept descriptions through data specification
//! templates. Every attribute is optional; no value is checked against its
//! declared data type or format.

use super::lang_string::LangStringSet;
use super::reference::Reference;
use crate::enums::{DataTypeIec61360, LevelType};

// ============================================================================
// VALUE LISTS
// ============================================================================

/// One allowed value together with its identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ValueReferencePair {
    pub value: String,
    pub value_id: Option<Reference>,
}

impl ValueReferencePair {
    /// Create a pair from a value and its identifier.
    pub fn new(value: impl Into<String>, value_id: Reference) -> Self {
        Self {
            value: value.into(),
            value_id: Some(value_id),
        }
    }
}

/// An enumeration of allowed values, in declared order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ValueList {
    pub value_reference_pairs: Vec<ValueReferencePair>,
}

impl ValueList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair.
    pub fn with_pair(mut self, pair: ValueReferencePair) -> Self {
        self.value_reference_pairs.push(pair);
        self
    }

    /// Values in declared order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.value_reference_pairs
            .iter()
            .map(|pair| pair.value.as_str())
    }
}

impl FromIterator<ValueReferencePair> for ValueList {
    fn from_iter<I: IntoIterator<Item = ValueReferencePair>>(iter: I) -> Self {
        Self {
            value_reference_pairs: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// CONTENTS
// ============================================================================

/// Property or value definition following IEC 61360.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct DataSpecificationIec61360 {
    pub preferred_name: Option<LangStringSet>,
    pub short_name: Option<LangStringSet>,
    pub unit: Option<String>,
    pub unit_id: Option<Reference>,
    pub source_of_definition: Option<String>,
    pub symbol: Option<String>,
    pub data_type: Option<DataTypeIec61360>,
    pub definition: Option<LangStringSet>,
    pub value_format: Option<String>,
    pub value_list: Option<ValueList>,
    pub value: Option<String>,
    pub value_id: Option<Reference>,
    pub level_type: Option<LevelType>,
}

impl DataSpecificationIec61360 {
    /// Create a definition with its preferred name.
    pub fn new(preferred_name: LangStringSet) -> Self {
        Self {
            preferred_name: Some(preferred_name),
            ..Self::default()
        }
    }

    /// Set the short name.
    pub fn with_short_name(mut self, short_name: LangStringSet) -> Self {
        self.short_name = Some(short_name);
        self
    }

    /// Set the unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the unit id.
    pub fn with_unit_id(mut self, unit_id: Reference) -> Self {
        self.unit_id = Some(unit_id);
        self
    }

    /// Set the symbol.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the data type.
    pub fn with_data_type(mut self, data_type: DataTypeIec61360) -> Self {
        self.data_type = Some(data_type);
        self
    }

    /// Set the definition.
    pub fn with_definition(mut self, definition: LangStringSet) -> Self {
        self.definition = Some(definition);
        self
    }

    /// Set the list of allowed values.
    pub fn with_value_list(mut self, value_list: ValueList) -> Self {
        self.value_list = Some(value_list);
        self
    }

    /// Set the level type.
    pub fn with_level_type(mut self, level_type: LevelType) -> Self {
        self.level_type = Some(level_type);
        self
    }
}

/// Definition of a physical unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct DataSpecificationPhysicalUnit {
    pub unit_name: Option<String>,
    pub unit_symbol: Option<String>,
    pub definition: Option<LangStringSet>,
    pub si_notation: Option<String>,
    pub din_notation: Option<String>,
    pub ece_name: Option<String>,
    pub ece_code: Option<String>,
    pub nist_name: Option<String>,
    pub source_of_definition: Option<String>,
    pub conversion_factor: Option<String>,
    pub registration_authority_id: Option<String>,
    pub supplier: Option<String>,
}

impl DataSpecificationPhysicalUnit {
    /// Create a unit with its name and symbol.
    pub fn new(unit_name: impl Into<String>, unit_symbol: impl Into<String>) -> Self {
        Self {
            unit_name: Some(unit_name.into()),
            unit_symbol: Some(unit_symbol.into()),
            ..Self::default()
        }
    }

    /// Set the definition.
    pub fn with_definition(mut self, definition: LangStringSet) -> Self {
        self.definition = Some(definition);
        self
    }

    /// Set the SI notation.
    pub fn with_si_notation(mut self, si_notation: impl Into<String>) -> Self {
        self.si_notation = Some(si_notation.into());
        self
    }

    /// Set the conversion factor.
    pub fn with_conversion_factor(mut self, conversion_factor: impl Into<String>) -> Self {
        self.conversion_factor = Some(conversion_factor.into());
        self
    }
}

/// Content of a data specification template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "modelType"))]
pub enum DataSpecificationContent {
    DataSpecificationIec61360(DataSpecificationIec61360),
    DataSpecificationPhysicalUnit(DataSpecificationPhysicalUnit),
}

impl DataSpecificationContent {
    /// Name of the concrete content, e.g. `"DataSpecificationIec61360"`.
    pub fn model_type(&self) -> &'static str {
        match self {
            Self::DataSpecificationIec61360(_) => "DataSpecificationIec61360",
            Self::DataSpecificationPhysicalUnit(_) => "DataSpecificationPhysicalUnit",
        }
    }
}

impl From<DataSpecificationIec61360> for DataSpecificationContent {
    fn from(content: DataSpecificationIec61360) -> Self {
        Self::DataSpecificationIec61360(content)
    }
}

impl From<DataSpecificationPhysicalUnit> for DataSpecificationContent {
    fn from(content: DataSpecificationPhysicalUnit) -> Self {
        Self::DataSpecificationPhysicalUnit(content)
    }
}
