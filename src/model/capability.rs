//! Capability traits over records.
//!
//! Records carry their fragment fields directly, so `shell.id_short` and
//! `shell.id` need no indirection. The traits here give the same fields a
//! uniform surface across unrelated record types and project them into the
//! [`fragments`](super::fragments) bundles. They hold accessors only.
//!
//! | Trait | Fields |
//! |-------|--------|
//! | [`WithSemantics`] | `semantic_id` |
//! | [`WithExtensions`] | `extensions` |
//! | [`WithReferable`] | + `id_short`, `display_name`, `category`, `description` |
//! | [`WithIdentity`] | + `id`, `administration` |
//! | [`WithKind`] | `kind` |
//! | [`WithQualifiers`] | `qualifiers` |
//! | [`WithDataSpecifications`] | `data_specifications` |

use super::fragments::{
    AdministrativeInformation, Constraint, Extension, HasDataSpecification, HasExtensions,
    HasKind, HasSemantics, Identifiable, Qualifiable, Referable,
};
use super::lang_string::LangStringSet;
use super::reference::Reference;
use crate::enums::ModelingKind;

pub trait WithSemantics {
    /// Concept the element conforms to.
    fn semantic_id(&self) -> Option<&Reference>;

    /// Copy of the semantics cluster.
    fn has_semantics(&self) -> HasSemantics {
        HasSemantics {
            semantic_id: self.semantic_id().cloned(),
        }
    }
}

pub trait WithExtensions {
    /// Extensions in declared order.
    fn extensions(&self) -> &[Extension];

    /// Copy of the extensions cluster.
    fn has_extensions(&self) -> HasExtensions {
        HasExtensions {
            extensions: self.extensions().to_vec(),
        }
    }
}

/// An element that can be referred to by its short id.
pub trait WithReferable: WithExtensions {
    /// Short id, unique among siblings.
    fn id_short(&self) -> &str;
    /// Name shown to users, per language.
    fn display_name(&self) -> Option<&LangStringSet>;
    /// Category such as `CONSTANT`, `PARAMETER` or `VARIABLE`.
    fn category(&self) -> Option<&str>;
    /// Description, per language.
    fn description(&self) -> Option<&LangStringSet>;

    /// Copy of the referable cluster.
    fn referable(&self) -> Referable {
        Referable {
            extensions: self.extensions().to_vec(),
            id_short: self.id_short().to_string(),
            display_name: self.display_name().cloned(),
            category: self.category().map(str::to_string),
            description: self.description().cloned(),
        }
    }
}

/// An element with a globally unique identifier.
pub trait WithIdentity: WithReferable {
    /// Globally unique identifier.
    fn id(&self) -> &str;

    /// `None` when no administrative information was given.
    fn administration(&self) -> Option<&AdministrativeInformation>;

    /// Copy of the identifiable cluster.
    fn identifiable(&self) -> Identifiable {
        Identifiable {
            extensions: self.extensions().to_vec(),
            id_short: self.id_short().to_string(),
            display_name: self.display_name().cloned(),
            category: self.category().map(str::to_string),
            description: self.description().cloned(),
            id: self.id().to_string(),
            administration: self.administration().cloned(),
        }
    }
}

pub trait WithKind {
    /// Template or instance, if given.
    fn kind(&self) -> Option<ModelingKind>;

    /// Copy of the kind cluster.
    fn has_kind(&self) -> HasKind {
        HasKind { kind: self.kind() }
    }
}

pub trait WithQualifiers {
    /// Qualifiers and formulas in declared order.
    fn qualifiers(&self) -> &[Constraint];

    /// Copy of the qualifier cluster.
    fn qualifiable(&self) -> Qualifiable {
        Qualifiable {
            qualifiers: self.qualifiers().to_vec(),
        }
    }
}

pub trait WithDataSpecifications {
    /// References to the data specification templates used.
    fn data_specifications(&self) -> &[Reference];

    /// Copy of the data specification cluster.
    fn has_data_specification(&self) -> HasDataSpecification {
        HasDataSpecification {
            data_specifications: self.data_specifications().to_vec(),
        }
    }
}

// ============================================================================
// COMPOSITION MACROS
// ============================================================================

/// Implements capability traits for a record that declares the matching
/// fields directly.
///
/// ```ignore
/// capabilities!(Property: data_specifications, referable, kind, semantics, qualifiers);
/// ```
///
/// `referable` implies `extensions`; `identifiable` implies `referable`.
macro_rules! capabilities {
    (@semantics $ty:ident) => {
        impl $crate::model::capability::WithSemantics for $ty {
            fn semantic_id(&self) -> Option<&$crate::model::Reference> {
                self.semantic_id.as_ref()
            }
        }
    };
    (@extensions $ty:ident) => {
        impl $crate::model::capability::WithExtensions for $ty {
            fn extensions(&self) -> &[$crate::model::Extension] {
                &self.extensions
            }
        }
    };
    (@referable $ty:ident) => {
        capabilities!(@extensions $ty);

        impl $crate::model::capability::WithReferable for $ty {
            fn id_short(&self) -> &str {
                &self.id_short
            }

            fn display_name(&self) -> Option<&$crate::model::LangStringSet> {
                self.display_name.as_ref()
            }

            fn category(&self) -> Option<&str> {
                self.category.as_deref()
            }

            fn description(&self) -> Option<&$crate::model::LangStringSet> {
                self.description.as_ref()
            }
        }
    };
    (@identifiable $ty:ident) => {
        capabilities!(@referable $ty);

        impl $crate::model::capability::WithIdentity for $ty {
            fn id(&self) -> &str {
                &self.id
            }

            fn administration(&self) -> Option<&$crate::model::AdministrativeInformation> {
                self.administration.as_ref()
            }
        }
    };
    (@kind $ty:ident) => {
        impl $crate::model::capability::WithKind for $ty {
            fn kind(&self) -> Option<$crate::enums::ModelingKind> {
                self.kind
            }
        }
    };
    (@qualifiers $ty:ident) => {
        impl $crate::model::capability::WithQualifiers for $ty {
            fn qualifiers(&self) -> &[$crate::model::Constraint] {
                &self.qualifiers
            }
        }
    };
    (@data_specifications $ty:ident) => {
        impl $crate::model::capability::WithDataSpecifications for $ty {
            fn data_specifications(&self) -> &[$crate::model::Reference] {
                &self.data_specifications
            }
        }
    };
    ($ty:ident: $($cap:ident),+ $(,)?) => {
        $(capabilities!(@$cap $ty);)+
    };
}

/// Implements capability traits for an enum grouping records by delegating
/// to the active variant.
///
/// ```ignore
/// delegate_capabilities!(DataElement { Property, Range }: referable, kind);
/// ```
macro_rules! delegate_capabilities {
    (@semantics $ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::model::capability::WithSemantics for $ty {
            fn semantic_id(&self) -> Option<&$crate::model::Reference> {
                match self {
                    $(Self::$variant(inner) => {
                        $crate::model::capability::WithSemantics::semantic_id(inner)
                    })+
                }
            }
        }
    };
    (@extensions $ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::model::capability::WithExtensions for $ty {
            fn extensions(&self) -> &[$crate::model::Extension] {
                match self {
                    $(Self::$variant(inner) => {
                        $crate::model::capability::WithExtensions::extensions(inner)
                    })+
                }
            }
        }
    };
    (@referable $ty:ident $variants:tt) => {
        delegate_capabilities!(@extensions $ty $variants);
        delegate_capabilities!(@referable_only $ty $variants);
    };
    (@referable_only $ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::model::capability::WithReferable for $ty {
            fn id_short(&self) -> &str {
                match self {
                    $(Self::$variant(inner) => {
                        $crate::model::capability::WithReferable::id_short(inner)
                    })+
                }
            }

            fn display_name(&self) -> Option<&$crate::model::LangStringSet> {
                match self {
                    $(Self::$variant(inner) => {
                        $crate::model::capability::WithReferable::display_name(inner)
                    })+
                }
            }

            fn category(&self) -> Option<&str> {
                match self {
                    $(Self::$variant(inner) => {
                        $crate::model::capability::WithReferable::category(inner)
                    })+
                }
            }

            fn description(&self) -> Option<&$crate::model::LangStringSet> {
                match self {
                    $(Self::$variant(inner) => {
                        $crate::model::capability::WithReferable::description(inner)
                    })+
                }
            }
        }
    };
    (@kind $ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::model::capability::WithKind for $ty {
            fn kind(&self) -> Option<$crate::enums::ModelingKind> {
                match self {
                    $(Self::$variant(inner) => $crate::model::capability::WithKind::kind(inner),)+
                }
            }
        }
    };
    (@qualifiers $ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::model::capability::WithQualifiers for $ty {
            fn qualifiers(&self) -> &[$crate::model::Constraint] {
                match self {
                    $(Self::$variant(inner) => {
                        $crate::model::capability::WithQualifiers::qualifiers(inner)
                    })+
                }
            }
        }
    };
    (@data_specifications $ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::model::capability::WithDataSpecifications for $ty {
            fn data_specifications(&self) -> &[$crate::model::Reference] {
                match self {
                    $(Self::$variant(inner) => {
                        use $crate::model::capability::WithDataSpecifications;
                        WithDataSpecifications::data_specifications(inner)
                    })+
                }
            }
        }
    };
    ($ty:ident $variants:tt: $($cap:ident),+ $(,)?) => {
        $(delegate_capabilities!(@$cap $ty $variants);)+
    };
}

/// Adds the `with_*` builder methods for each capability's fields.
///
/// Takes the same capability list as `capabilities!`.
macro_rules! builders {
    (@semantics $ty:ident) => {
        impl $ty {
            /// Set the semantic id.
            pub fn with_semantic_id(mut self, semantic_id: $crate::model::Reference) -> Self {
                self.semantic_id = Some(semantic_id);
                self
            }
        }
    };
    (@referable $ty:ident) => {
        impl $ty {
            /// Append an extension.
            pub fn with_extension(mut self, extension: $crate::model::Extension) -> Self {
                self.extensions.push(extension);
                self
            }

            /// Set the display name.
            pub fn with_display_name(
                mut self,
                display_name: $crate::model::LangStringSet,
            ) -> Self {
                self.display_name = Some(display_name);
                self
            }

            /// Set the category.
            pub fn with_category(mut self, category: impl Into<String>) -> Self {
                self.category = Some(category.into());
                self
            }

            /// Set the description.
            pub fn with_description(
                mut self,
                description: $crate::model::LangStringSet,
            ) -> Self {
                self.description = Some(description);
                self
            }
        }
    };
    (@identifiable $ty:ident) => {
        builders!(@referable $ty);

        impl $ty {
            /// Set the administrative information.
            pub fn with_administration(
                mut self,
                administration: $crate::model::AdministrativeInformation,
            ) -> Self {
                self.administration = Some(administration);
                self
            }
        }
    };
    (@kind $ty:ident) => {
        impl $ty {
            /// Set the modeling kind.
            pub fn with_kind(mut self, kind: $crate::enums::ModelingKind) -> Self {
                self.kind = Some(kind);
                self
            }
        }
    };
    (@qualifiers $ty:ident) => {
        impl $ty {
            /// Append a qualifier or formula.
            pub fn with_qualifier(
                mut self,
                qualifier: impl Into<$crate::model::Constraint>,
            ) -> Self {
                self.qualifiers.push(qualifier.into());
                self
            }
        }
    };
    (@data_specifications $ty:ident) => {
        impl $ty {
            /// Append a data specification reference.
            pub fn with_data_specification(
                mut self,
                data_specification: $crate::model::Reference,
            ) -> Self {
                self.data_specifications.push(data_specification);
                self
            }
        }
    };
    ($ty:ident: $($cap:ident),+ $(,)?) => {
        $(builders!(@$cap $ty);)+
    };
}
