// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # amino - type disambiguation and polymorphic resolution
//!
//! Core of an Amino-style binary/JSON codec. Values reached through an
//! interface-typed field are tagged with a 7-byte *disfix* derived from the
//! concrete type's name, so a decoder without static type information can
//! rebuild the right concrete value.
//!
//! ## Components
//!
//! ```text
//! +---------------------------------------------------------------+
//! |  Codec            register_type / register_concrete / resolve |
//! +---------------------------------------------------------------+
//! |  Resolver         declared TypeInfo + Value -> (TypeInfo, &Value)
//! +---------------------------------------------------------------+
//! |  TypeRegistry     TypeId -> TypeInfo (+ ConcreteInfo, fields) |
//! +---------------------------------------------------------------+
//! |  disfix           SHA-256(name) -> 3 disamb + 4 prefix bytes  |
//! +---------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use amino::{Codec, EncodingTarget, Result};
//! use amino::types::{ConcreteOptions, FieldTable, TypeId, TypeInfo};
//! use amino::value::{ObjectValue, Value};
//!
//! fn main() -> Result<()> {
//!     let holder = TypeId::new(1);
//!     let circle = TypeId::new(2);
//!
//!     let codec = Codec::default();
//!     codec.register_struct(holder, FieldTable::new().field("shape", TypeInfo::alias()))?;
//!     codec.register_type(circle, TypeInfo::structure())?;
//!     let tag = codec.register_concrete(circle, "shapes/Circle", ConcreteOptions::default())?;
//!
//!     let value = Value::from(
//!         ObjectValue::record(holder)
//!             .with_field("shape", ObjectValue::record(circle).with_field("r", 2i64)),
//!     );
//!     let resolved =
//!         codec.resolve_for_encoding(&TypeInfo::alias(), &value, Some("shape"), EncodingTarget::Binary)?;
//!
//!     // the encoder writes tag.to_bytes() followed by resolved.value
//!     assert_eq!(resolved.info.concrete_info.map(|c| c.disfix()), Some(tag));
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Uses the [`log`] facade; install any logger to see registration (`debug`)
//! and resolution steps (`trace`).

pub mod codec;
pub mod config;
pub mod disfix;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod types;
pub mod value;

pub use codec::Codec;
pub use config::{AmbiguityPolicy, CodecConfig, ResolverConfig};
pub use disfix::{compute_disfix, Disfix};
pub use error::{AminoError, Result};
pub use registry::{SharedTypeRegistry, TypeLookup, TypeRegistry};
pub use resolver::{EncodingTarget, Resolved, Resolver};
pub use types::{ConcreteInfo, ConcreteOptions, FieldTable, TypeId, TypeInfo, TypeKind};
pub use value::{BigInt, ObjectBody, ObjectValue, Value};
