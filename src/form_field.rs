use crate::dom::NodeId;

/// State shared by every interactive form element.
///
/// Host objects embed one of these and expose it through [`FormField`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFieldState {
    pub value: Option<String>,
    pub disabled: bool,
    pub form: Option<NodeId>,
    pub name: Option<String>,
}

/// Value, disabled state and form ownership of a form element.
///
/// Implementors only provide access to their [`FormFieldState`]; every
/// operation is written once here.
pub trait FormField {
    fn field_state(&self) -> &FormFieldState;
    fn field_state_mut(&mut self) -> &mut FormFieldState;

    fn value(&self) -> Option<&str> {
        self.field_state().value.as_deref()
    }

    fn set_value(&mut self, value: Option<String>) {
        self.field_state_mut().value = value;
    }

    fn disabled(&self) -> bool {
        self.field_state().disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.field_state_mut().disabled = disabled;
    }

    /// The `<form>` element this field belongs to.
    fn form(&self) -> Option<NodeId> {
        self.field_state().form
    }

    fn set_form(&mut self, form: Option<NodeId>) {
        self.field_state_mut().form = form;
    }

    fn name(&self) -> Option<&str> {
        self.field_state().name.as_deref()
    }

    fn set_name(&mut self, name: Option<String>) {
        self.field_state_mut().name = name;
    }

    /// Disabled fields do not react to activation.
    fn is_interactive(&self) -> bool {
        !self.disabled()
    }

    fn reset(&mut self) {
        *self.field_state_mut() = FormFieldState::default();
    }
}
