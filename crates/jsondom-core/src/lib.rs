//! # jsondom-core
//!
//! Self-contained JSON text codec with a DOM-style value model.
//!
//! Text is parsed into a tree of [`Value`]s (null, bool, 64-bit int, float,
//! string, ordered object, array), inspected or edited through the
//! [`Object`] and [`Array`] façades, and written back as compact JSON.
//!
//! ## Quick start
//!
//! ```rust
//! use jsondom_core::{parse, serialize, Value};
//!
//! let json = r#"{"name":"Alice","scores":[95,87,92]}"#;
//! let mut doc = parse(json).unwrap();
//!
//! let root = doc.as_object_mut().unwrap();
//! assert_eq!(root.get_str("name").unwrap(), "Alice");
//! assert_eq!(root.get_array("scores").unwrap().get_i64(1).unwrap(), 87);
//!
//! root.put("active", true);
//! assert_eq!(
//!     serialize(&doc),
//!     r#"{"name":"Alice","scores":[95,87,92],"active":true}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`parser`]: JSON text → `Value` (recursive descent, positioned errors)
//! - [`serializer`]: `Value` → compact JSON text
//! - [`value`]: the `Value` sum type and its conversions
//! - [`object`] / [`array`]: container façades with checked typed getters
//! - [`access`]: the `Index` and `FromValue` seams behind lookups
//! - [`options`]: parser limits
//! - [`error`]: error taxonomy

pub mod access;
pub mod array;
pub mod error;
pub mod object;
pub mod options;
pub mod parser;
mod serde_impl;
pub mod serializer;
pub mod value;

pub use access::{FromValue, Index};
pub use array::Array;
pub use error::{JsonError, Locator, Result, SyntaxError};
pub use object::Object;
pub use options::ParseOptions;
pub use parser::{parse, parse_with};
pub use serializer::{serialize, serialize_into};
pub use value::{Kind, Value};
