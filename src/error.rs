use crate::dom::NodeId;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    UnknownTag(String),
    DuplicateBinding(String),
    InvalidTag(String),
    TagMismatch { tag: String, constructed: String },
    NotBound(NodeId),
}

impl std::error::Error for BindingError {}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingError::UnknownTag(tag) => write!(f, "No binding registered for <{}>", tag),
            BindingError::DuplicateBinding(tag) => {
                write!(f, "A binding for <{}> is already registered", tag)
            }
            BindingError::InvalidTag(tag) => write!(f, "Invalid element tag: {:?}", tag),
            BindingError::TagMismatch { tag, constructed } => write!(
                f,
                "Binding for <{}> constructs a host object for <{}>",
                tag, constructed
            ),
            BindingError::NotBound(id) => write!(f, "Node {} has no host object", id),
        }
    }
}
