use crate::form_field::{FormField, FormFieldState};
use crate::host_object::HostObject;

/// Host object for `<input>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlInputElement {
    field: FormFieldState,
}

impl HtmlInputElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn js_constructor(&mut self) {}
}

impl FormField for HtmlInputElement {
    fn field_state(&self) -> &FormFieldState {
        &self.field
    }

    fn field_state_mut(&mut self) -> &mut FormFieldState {
        &mut self.field
    }
}

impl HostObject for HtmlInputElement {
    fn tag_name(&self) -> &'static str {
        "input"
    }

    fn interface_name(&self) -> &'static str {
        "HTMLInputElement"
    }

    fn js_constructor(&mut self) {
        HtmlInputElement::js_constructor(self)
    }

    fn as_form_field(&self) -> Option<&dyn FormField> {
        Some(self)
    }

    fn as_form_field_mut(&mut self) -> Option<&mut dyn FormField> {
        Some(self)
    }
}
