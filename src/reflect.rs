//! Defines the core abstraction for reflective property lookup on host types.
use crate::ast::SelectProperty;
use crate::error::SelectError;

/// The declared shape of a property: a single value or a collection of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind<T> {
    /// A single value of the given type.
    Scalar(T),
    /// An array or collection whose elements have the given type.
    Collection(T),
}

/// A named property declared on a host type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor<T> {
    pub name: String,
    pub kind: PropertyKind<T>,
}

impl<T> PropertyDescriptor<T> {
    /// The element type of the property: the declared type for a scalar, the
    /// element type for a collection.
    pub fn element_type(self) -> T {
        match self.kind {
            PropertyKind::Scalar(ty) | PropertyKind::Collection(ty) => ty,
        }
    }
}

/// The universal contract for read-only type introspection.
///
/// The selection tree is written exclusively against this trait, so any host
/// can supply type information: runtime reflection, generated code, or a
/// schema registry.
pub trait TypeDescriptor: Sized {
    /// The type's name, used in error reports.
    fn name(&self) -> &str;

    /// The declared properties of the type, in declaration order.
    fn properties(&self) -> Vec<PropertyDescriptor<Self>>;
}

impl SelectProperty {
    /// Resolves the type selected by this node on `ty`.
    ///
    /// Exactly one property of `ty` must match this node's name
    /// (case-insensitively); zero or several matches mean the caller paired
    /// the node with the wrong type. Collection properties resolve to their
    /// element type, so a node stands for a nested object and a collection of
    /// such objects uniformly.
    pub fn element_type<T: TypeDescriptor>(&self, ty: &T) -> Result<T, SelectError> {
        let mut matches = ty
            .properties()
            .into_iter()
            .filter(|property| property.name.eq_ignore_ascii_case(&self.name));

        let found = matches.next().ok_or_else(|| SelectError::PropertyNotFound {
            ty: ty.name().to_string(),
            property: self.name.clone(),
        })?;
        if matches.next().is_some() {
            return Err(SelectError::AmbiguousProperty {
                ty: ty.name().to_string(),
                property: self.name.clone(),
            });
        }
        Ok(found.element_type())
    }

    /// Names of `ty`'s declared properties not covered by this node's
    /// direct children.
    ///
    /// A node without children selects the whole value, so nothing is
    /// ignored; only a node with an explicit sub-selection restricts the
    /// properties beneath it.
    pub fn ignored_properties<T: TypeDescriptor>(&self, ty: &T) -> Vec<String> {
        if self.children.is_empty() {
            return Vec::new();
        }
        ty.properties()
            .into_iter()
            .map(|property| property.name)
            .filter(|name| {
                !self
                    .children
                    .iter()
                    .any(|child| child.name.eq_ignore_ascii_case(name))
            })
            .collect()
    }
}

// Test utilities - publicly available for integration testing in downstream crates
pub mod tests {
    use super::*;

    /// An in-memory [`TypeDescriptor`] for tests and schema-registry hosts.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MockType {
        name: String,
        properties: Vec<PropertyDescriptor<MockType>>,
    }

    impl MockType {
        pub fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                properties: Vec::new(),
            }
        }

        /// Adds a scalar property of the given type.
        pub fn with_scalar(mut self, name: &str, ty: MockType) -> Self {
            self.properties.push(PropertyDescriptor {
                name: name.to_string(),
                kind: PropertyKind::Scalar(ty),
            });
            self
        }

        /// Adds a collection property whose elements have the given type.
        pub fn with_collection(mut self, name: &str, element: MockType) -> Self {
            self.properties.push(PropertyDescriptor {
                name: name.to_string(),
                kind: PropertyKind::Collection(element),
            });
            self
        }
    }

    impl TypeDescriptor for MockType {
        fn name(&self) -> &str {
            &self.name
        }

        fn properties(&self) -> Vec<PropertyDescriptor<Self>> {
            self.properties.clone()
        }
    }
}
