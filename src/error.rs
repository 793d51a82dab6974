use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("type '{ty}' has no property matching '{property}'")]
    PropertyNotFound { ty: String, property: String },

    #[error("property '{property}' matches more than one property on type '{ty}'")]
    AmbiguousProperty { ty: String, property: String },
}
