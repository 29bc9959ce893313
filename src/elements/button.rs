use crate::form_field::{FormField, FormFieldState};
use crate::host_object::HostObject;

/// Host object for `<button>`.
///
/// Carries nothing beyond the shared form-field state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlButtonElement {
    field: FormFieldState,
}

impl HtmlButtonElement {
    pub fn new() -> Self {
        Self {
            field: FormFieldState::default(),
        }
    }

    /// Script-side constructor. Buttons need no extra setup.
    pub fn js_constructor(&mut self) {}
}

impl FormField for HtmlButtonElement {
    fn field_state(&self) -> &FormFieldState {
        &self.field
    }

    fn field_state_mut(&mut self) -> &mut FormFieldState {
        &mut self.field
    }
}

impl HostObject for HtmlButtonElement {
    fn tag_name(&self) -> &'static str {
        "button"
    }

    fn interface_name(&self) -> &'static str {
        "HTMLButtonElement"
    }

    fn js_constructor(&mut self) {
        HtmlButtonElement::js_constructor(self)
    }

    fn as_form_field(&self) -> Option<&dyn FormField> {
        Some(self)
    }

    fn as_form_field_mut(&mut self) -> Option<&mut dyn FormField> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeId;

    #[test]
    fn test_new_has_default_state() {
        let button = HtmlButtonElement::new();
        assert_eq!(button.value(), None);
        assert!(!button.disabled());
        assert_eq!(button.form(), None);
        assert_eq!(button, HtmlButtonElement::default());
    }

    #[test]
    fn test_js_constructor_is_idempotent() {
        let untouched = HtmlButtonElement::new();

        let mut once = HtmlButtonElement::new();
        once.js_constructor();
        assert_eq!(once, untouched);

        let mut many = HtmlButtonElement::new();
        for _ in 0..10 {
            many.js_constructor();
        }
        assert_eq!(many, untouched);
    }

    #[test]
    fn test_js_constructor_keeps_existing_state() {
        let mut button = HtmlButtonElement::new();
        button.set_value(Some("ok".to_string()));
        button.set_form(Some(NodeId::new(3)));
        let before = button.clone();
        button.js_constructor();
        assert_eq!(button, before);
    }

    #[test]
    fn test_hook_on_one_instance_leaves_both_default() {
        let mut a = HtmlButtonElement::new();
        let b = HtmlButtonElement::new();
        a.js_constructor();
        assert_eq!(a, b);
        assert_eq!(a.field_state(), &FormFieldState::default());
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut buttons: Vec<HtmlButtonElement> =
            (0..1000).map(|_| HtmlButtonElement::new()).collect();
        buttons[500].set_value(Some("changed".to_string()));

        for (i, button) in buttons.iter().enumerate() {
            if i == 500 {
                assert_eq!(button.value(), Some("changed"));
            } else {
                assert_eq!(button.value(), None);
            }
        }
    }

    #[test]
    fn test_host_object_identity() {
        let button = HtmlButtonElement::new();
        let host: &dyn HostObject = &button;
        assert_eq!(host.tag_name(), "button");
        assert_eq!(host.interface_name(), "HTMLButtonElement");
        assert!(host.as_form_field().is_some());
    }
}
