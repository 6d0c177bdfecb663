//! # aas-model
//!
//! In-memory data model for the Asset Administration Shell metamodel
//! (V3 RC2): closed enumerations with name/ordinal codecs, capability
//! fragments, and the record catalog built from them.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! visitation → Read-only traversal over the record graph
//!   ↓
//! model      → Records, references, capability traits
//!   ↓
//! enums      → Closed enumerations and their codecs
//!   ↓
//! error      → ModelError, ModelResult
//! ```
//!
//! ## Example
//!
//! ```
//! use aas::{Enumeration, ModelingKind, Property, Submodel, DataTypeDef, WithIdentity};
//!
//! let submodel = Submodel::new("S1", "urn:aas:1")
//!     .with_kind(ModelingKind::Instance)
//!     .with_submodel_element(Property::new("temp", DataTypeDef::Double).with_value("21.5"));
//!
//! assert_eq!(submodel.id(), "urn:aas:1");
//! assert!(submodel.administration().is_none());
//! assert_eq!(ModelingKind::value_of("INSTANCE"), Ok(1));
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every enumeration (by canonical
//!   name) and record (camelCase fields, `modelType` tags on groupings).

// ============================================================================
// MODULES (dependency order: error → enums → model → visitation)
// ============================================================================

/// Error type shared by all fallible lookups
pub mod error;

/// Closed enumerations with name/ordinal codecs
pub mod enums;

/// Records, references and capability traits
pub mod model;

/// Visitor over the record graph
pub mod visitation;

// Re-export the public surface
pub use enums::*;
pub use error::{ModelError, ModelResult};
pub use model::*;
pub use visitation::Visitor;
