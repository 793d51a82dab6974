//! Defines the tree of selected properties produced by the parser.

/// One selected property, possibly carrying nested sub-selections.
///
/// A node with empty `children` selects the whole value of the property; a
/// node with children selects only the named sub-properties beneath it. Nodes
/// are built once by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectProperty {
    /// The property identifier as written in the query string.
    pub name: String,
    /// Sub-selections from this property's parenthesised list, in source order.
    pub children: Vec<SelectProperty>,
}

impl SelectProperty {
    /// Creates a leaf node that selects the whole property.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Creates a node that selects only the given sub-properties.
    pub fn with_children(name: impl Into<String>, children: Vec<SelectProperty>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Checks whether `field` is selected by this node or any descendant.
    ///
    /// Matching is case-insensitive on the whole identifier; identifiers are
    /// restricted to ASCII letters and digits by the grammar.
    pub fn is_selected(&self, field: &str) -> bool {
        self.name.eq_ignore_ascii_case(field)
            || self.children.iter().any(|child| child.is_selected(field))
    }

    /// Finds the direct child selecting `name`, if any.
    pub fn child(&self, name: &str) -> Option<&SelectProperty> {
        self.children
            .iter()
            .find(|child| child.name.eq_ignore_ascii_case(name))
    }
}
