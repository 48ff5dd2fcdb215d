use thiserror::Error;

pub type TreeResult<T> = Result<T, TreeError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    #[error("Cannot append child to {kind} node: expected array")]
    NotAnArray { kind: &'static str },

    #[error("Cannot set property on {kind} node: expected object")]
    NotAnObject { kind: &'static str },

    #[error("Duplicate property name: {name}")]
    DuplicateProperty { name: String },
}

impl TreeError {
    pub fn not_an_array(kind: &'static str) -> Self {
        Self::NotAnArray { kind }
    }

    pub fn not_an_object(kind: &'static str) -> Self {
        Self::NotAnObject { kind }
    }

    pub fn duplicate_property(name: impl Into<String>) -> Self {
        Self::DuplicateProperty { name: name.into() }
    }
}
