mod bridge;
pub mod dom;
pub mod elements;
mod error;
mod form_field;
mod host_object;
pub mod logger;
mod registry;

pub use bridge::{DomBridge, EventOutcome};
pub use error::BindingError;
pub use form_field::{FormField, FormFieldState};
pub use host_object::HostObject;
pub use registry::{BindingEntry, BindingRegistry, Constructor};

#[derive(Clone, Debug)]
pub struct BindingConfig {
    pub enable_javascript: bool,
    pub debug: bool,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            enable_javascript: true,
            debug: false,
        }
    }
}
