use crate::form_field::FormField;
use std::fmt::Debug;

/// A script-visible object standing in for one DOM element.
pub trait HostObject: Debug {
    /// Lowercase tag of the element this object binds, e.g. `"button"`.
    fn tag_name(&self) -> &'static str;

    /// Interface name exposed to scripts, e.g. `"HTMLButtonElement"`.
    fn interface_name(&self) -> &'static str;

    /// Script-side initialization, run once by the registry right after
    /// construction. Must be safe to call again.
    fn js_constructor(&mut self);

    fn as_form_field(&self) -> Option<&dyn FormField> {
        None
    }

    fn as_form_field_mut(&mut self) -> Option<&mut dyn FormField> {
        None
    }
}
