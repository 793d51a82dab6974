//! A parser and selection-tree engine for the OData `$select` query parameter.
//!
//! This crate locates the `$select` parameter in a raw query string, parses
//! its nested, parenthesised property list into an ordered forest of
//! [`SelectProperty`] nodes, and answers the questions a serializer asks of
//! that forest: whether a field is selected, which of a type's properties the
//! caller did not ask for, and what type a selected property resolves to.
//! Type introspection is injected through the [`TypeDescriptor`] trait, so
//! the engine works against runtime reflection, generated code, or a schema
//! registry alike.

pub mod ast;
pub mod error;
mod parser;
pub mod reflect;

// --- Public API ---
pub use ast::SelectProperty;
pub use error::SelectError;
pub use parser::parse_select;
pub use reflect::{PropertyDescriptor, PropertyKind, TypeDescriptor};
