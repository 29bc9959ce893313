use crate::form_field::{FormField, FormFieldState};
use crate::host_object::HostObject;

/// Host object for `<textarea>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlTextAreaElement {
    field: FormFieldState,
}

impl HtmlTextAreaElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn js_constructor(&mut self) {}
}

impl FormField for HtmlTextAreaElement {
    fn field_state(&self) -> &FormFieldState {
        &self.field
    }

    fn field_state_mut(&mut self) -> &mut FormFieldState {
        &mut self.field
    }
}

impl HostObject for HtmlTextAreaElement {
    fn tag_name(&self) -> &'static str {
        "textarea"
    }

    fn interface_name(&self) -> &'static str {
        "HTMLTextAreaElement"
    }

    fn js_constructor(&mut self) {
        HtmlTextAreaElement::js_constructor(self)
    }

    fn as_form_field(&self) -> Option<&dyn FormField> {
        Some(self)
    }

    fn as_form_field_mut(&mut self) -> Option<&mut dyn FormField> {
        Some(self)
    }
}
