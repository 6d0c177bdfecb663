//! XSD-derived datatype families and their union, `DataTypeDef`.
//!
//! `DataTypeDef` is the concatenation, in this order, of
//! [`BuildInListTypes`], [`DecimalBuildInTypes`], [`DurationBuildInTypes`],
//! [`PrimitiveTypes`] and [`StringBuildInTypes`], renumbered densely. Every
//! family converts losslessly into the union and back (when the variant is a
//! member of that family).

enumeration! {
    /// Built-in XSD list types.
    pub enum BuildInListTypes {
        Entities = "ENTITIES",
        IdRefs = "ID_REFS",
        NMTokens = "N_M_TOKENS",
    }
}

enumeration! {
    /// Built-in XSD types derived from `xs:decimal`.
    pub enum DecimalBuildInTypes {
        Integer = "INTEGER",
        Long = "LONG",
        Int = "INT",
        Short = "SHORT",
        Byte = "BYTE",
        NonNegativeInteger = "NON_NEGATIVE_INTEGER",
        PositiveInteger = "POSITIVE_INTEGER",
        UnsignedInteger = "UNSIGNED_INTEGER",
        UnsignedLong = "UNSIGNED_LONG",
        UnsignedInt = "UNSIGNED_INT",
        UnsignedShort = "UNSIGNED_SHORT",
        UnsignedByte = "UNSIGNED_BYTE",
        NonPositiveInteger = "NON_POSITIVE_INTEGER",
        NegativeInteger = "NEGATIVE_INTEGER",
    }
}

enumeration! {
    /// Built-in XSD types derived from `xs:duration`.
    pub enum DurationBuildInTypes {
        DayTimeDuration = "DAY_TIME_DURATION",
        YearMonthDuration = "YEAR_MONTH_DURATION",
    }
}

enumeration! {
    /// XSD primitive types.
    pub enum PrimitiveTypes {
        AnyUri = "ANY_URI",
        Base64Binary = "BASE_64_BINARY",
        Boolean = "BOOLEAN",
        Date = "DATE",
        DateTime = "DATE_TIME",
        Decimal = "DECIMAL",
        Double = "DOUBLE",
        Duration = "DURATION",
        Float = "FLOAT",
        GDay = "G_DAY",
        GMonth = "G_MONTH",
        GMonthDay = "G_MONTH_DAY",
        // Upstream spelling of hexBinary, kept so names round-trip.
        HeyBinary = "HEY_BINARY",
        Notation = "NOTATION",
        QName = "Q_NAME",
        String = "STRING",
        Time = "TIME",
    }
}

enumeration! {
    /// Built-in XSD types derived from `xs:string`.
    pub enum StringBuildInTypes {
        NormalizedString = "NORMALIZED_STRING",
        Token = "TOKEN",
        Language = "LANGUAGE",
        NCName = "N_C_NAME",
        Entity = "ENTITY",
        Id = "ID",
        Idref = "IDREF",
    }
}

enumeration! {
    /// Declared value type of properties, ranges, qualifiers and extensions.
    pub enum DataTypeDef {
        // BuildInListTypes
        Entities = "ENTITIES",
        IdRefs = "ID_REFS",
        NMTokens = "N_M_TOKENS",
        // DecimalBuildInTypes
        Integer = "INTEGER",
        Long = "LONG",
        Int = "INT",
        Short = "SHORT",
        Byte = "BYTE",
        NonNegativeInteger = "NON_NEGATIVE_INTEGER",
        PositiveInteger = "POSITIVE_INTEGER",
        UnsignedInteger = "UNSIGNED_INTEGER",
        UnsignedLong = "UNSIGNED_LONG",
        UnsignedInt = "UNSIGNED_INT",
        UnsignedShort = "UNSIGNED_SHORT",
        UnsignedByte = "UNSIGNED_BYTE",
        NonPositiveInteger = "NON_POSITIVE_INTEGER",
        NegativeInteger = "NEGATIVE_INTEGER",
        // DurationBuildInTypes
        DayTimeDuration = "DAY_TIME_DURATION",
        YearMonthDuration = "YEAR_MONTH_DURATION",
        // PrimitiveTypes
        AnyUri = "ANY_URI",
        Base64Binary = "BASE_64_BINARY",
        Boolean = "BOOLEAN",
        Date = "DATE",
        DateTime = "DATE_TIME",
        Decimal = "DECIMAL",
        Double = "DOUBLE",
        Duration = "DURATION",
        Float = "FLOAT",
        GDay = "G_DAY",
        GMonth = "G_MONTH",
        GMonthDay = "G_MONTH_DAY",
        HeyBinary = "HEY_BINARY",
        Notation = "NOTATION",
        QName = "Q_NAME",
        String = "STRING",
        Time = "TIME",
        // StringBuildInTypes
        NormalizedString = "NORMALIZED_STRING",
        Token = "TOKEN",
        Language = "LANGUAGE",
        NCName = "N_C_NAME",
        Entity = "ENTITY",
        Id = "ID",
        Idref = "IDREF",
    }
}

enumeration! {
    /// Data types of the IEC 61360 data specification.
    pub enum DataTypeIec61360 {
        Date = "DATE",
        String = "STRING",
        StringTranslatable = "STRING_TRANSLATABLE",
        IntegerMeasure = "INTEGER_MEASURE",
        IntegerCount = "INTEGER_COUNT",
        IntegerCurrency = "INTEGER_CURRENCY",
        RealMeasure = "REAL_MEASURE",
        RealCount = "REAL_COUNT",
        RealCurrency = "REAL_CURRENCY",
        Boolean = "BOOLEAN",
        Iri = "IRI",
        Irdi = "IRDI",
        Rational = "RATIONAL",
        RationalMeasure = "RATIONAL_MEASURE",
        Time = "TIME",
        Timestamp = "TIMESTAMP",
        File = "FILE",
        Html = "HTML",
        Blob = "BLOB",
    }
}

// ============================================================================
// FAMILY MEMBERSHIP
// ============================================================================

subset!(BuildInListTypes => DataTypeDef [Entities, IdRefs, NMTokens]);

subset!(DecimalBuildInTypes => DataTypeDef [
    Integer,
    Long,
    Int,
    Short,
    Byte,
    NonNegativeInteger,
    PositiveInteger,
    UnsignedInteger,
    UnsignedLong,
    UnsignedInt,
    UnsignedShort,
    UnsignedByte,
    NonPositiveInteger,
    NegativeInteger,
]);

subset!(DurationBuildInTypes => DataTypeDef [DayTimeDuration, YearMonthDuration]);

subset!(PrimitiveTypes => DataTypeDef [
    AnyUri,
    Base64Binary,
    Boolean,
    Date,
    DateTime,
    Decimal,
    Double,
    Duration,
    Float,
    GDay,
    GMonth,
    GMonthDay,
    HeyBinary,
    Notation,
    QName,
    String,
    Time,
]);

subset!(StringBuildInTypes => DataTypeDef [
    NormalizedString,
    Token,
    Language,
    NCName,
    Entity,
    Id,
    Idref,
]);

/// The datatype family a [`DataTypeDef`] variant was merged from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataTypeFamily {
    BuildInList,
    Decimal,
    Duration,
    Primitive,
    String,
}

impl DataTypeFamily {
    /// All families in merge order.
    pub const ALL: [DataTypeFamily; 5] = [
        Self::BuildInList,
        Self::Decimal,
        Self::Duration,
        Self::Primitive,
        Self::String,
    ];

    /// Name of the family's own enumeration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BuildInList => "BuildInListTypes",
            Self::Decimal => "DecimalBuildInTypes",
            Self::Duration => "DurationBuildInTypes",
            Self::Primitive => "PrimitiveTypes",
            Self::String => "StringBuildInTypes",
        }
    }
}

impl DataTypeDef {
    /// The family this variant belongs to.
    pub fn family(self) -> DataTypeFamily {
        if BuildInListTypes::try_from(self).is_ok() {
            DataTypeFamily::BuildInList
        } else if DecimalBuildInTypes::try_from(self).is_ok() {
            DataTypeFamily::Decimal
        } else if DurationBuildInTypes::try_from(self).is_ok() {
            DataTypeFamily::Duration
        } else if PrimitiveTypes::try_from(self).is_ok() {
            DataTypeFamily::Primitive
        } else {
            DataTypeFamily::String
        }
    }
}
