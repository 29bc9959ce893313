use crate::elements::{HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement};
use crate::error::BindingError;
use crate::host_object::HostObject;
use log::debug;
use std::collections::HashMap;

pub type Constructor = fn() -> Box<dyn HostObject>;

#[derive(Clone, Debug)]
pub struct BindingEntry {
    pub tag_name: &'static str,
    pub interface_name: &'static str,
    pub construct: Constructor,
}

impl BindingEntry {
    /// Reads the tag and interface name off a freshly constructed object.
    pub fn new(construct: Constructor) -> Self {
        let sample = construct();
        Self {
            tag_name: sample.tag_name(),
            interface_name: sample.interface_name(),
            construct,
        }
    }
}

/// Maps element tags to the host objects that represent them.
#[derive(Default)]
pub struct BindingRegistry {
    entries: HashMap<String, BindingEntry>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registry with bindings for every form element this crate provides.
    pub fn with_form_fields() -> Self {
        let builtins: [Constructor; 3] = [
            || Box::new(HtmlButtonElement::new()),
            || Box::new(HtmlInputElement::new()),
            || Box::new(HtmlTextAreaElement::new()),
        ];
        let entries = builtins
            .into_iter()
            .map(BindingEntry::new)
            .map(|entry| (entry.tag_name.to_string(), entry))
            .collect();
        Self { entries }
    }

    /// Binds `tag` to `construct`. The constructed object must report `tag`
    /// as its own tag name.
    pub fn register(&mut self, tag: &str, construct: Constructor) -> Result<(), BindingError> {
        let key = normalize(tag)?;
        if self.entries.contains_key(&key) {
            return Err(BindingError::DuplicateBinding(key));
        }

        let entry = BindingEntry::new(construct);
        if !entry.tag_name.eq_ignore_ascii_case(&key) {
            return Err(BindingError::TagMismatch {
                tag: key,
                constructed: entry.tag_name.to_string(),
            });
        }

        debug!(target: "bindings", "Registered <{}> as {}", key, entry.interface_name);
        self.entries.insert(key, entry);
        Ok(())
    }

    pub fn lookup(&self, tag: &str) -> Option<&BindingEntry> {
        self.entries.get(&tag.trim().to_ascii_lowercase())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.lookup(tag).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Constructs the host object for `tag` and runs its script-side
    /// constructor once.
    pub fn instantiate(&self, tag: &str) -> Result<Box<dyn HostObject>, BindingError> {
        let entry = self
            .lookup(tag)
            .ok_or_else(|| BindingError::UnknownTag(tag.to_string()))?;

        let mut object = (entry.construct)();
        object.js_constructor();
        debug!(target: "bindings", "Instantiated {} for <{}>", entry.interface_name, entry.tag_name);
        Ok(object)
    }
}

fn normalize(tag: &str) -> Result<String, BindingError> {
    let tag = tag.trim();
    if tag.is_empty() || tag.contains(char::is_whitespace) {
        return Err(BindingError::InvalidTag(tag.to_string()));
    }
    Ok(tag.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_field::FormFieldState;

    #[test]
    fn test_form_field_registry() {
        let registry = BindingRegistry::with_form_fields();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.tags(), vec!["button", "input", "textarea"]);
        assert!(registry.contains("BUTTON"));
        assert!(!registry.contains("div"));
    }

    #[test]
    fn test_instantiate_button() {
        let registry = BindingRegistry::with_form_fields();
        let object = match registry.instantiate("button") {
            Ok(object) => object,
            Err(e) => panic!("button should be registered: {}", e),
        };
        assert_eq!(object.interface_name(), "HTMLButtonElement");
        let field = object.as_form_field().expect("button is a form field");
        assert_eq!(field.field_state(), &FormFieldState::default());
    }

    #[test]
    fn test_unknown_tag() {
        let registry = BindingRegistry::with_form_fields();
        let err = registry.instantiate("marquee").err();
        assert_eq!(err, Some(BindingError::UnknownTag("marquee".to_string())));
    }

    #[derive(Debug)]
    struct FancyButton;

    impl HostObject for FancyButton {
        fn tag_name(&self) -> &'static str {
            "x-button"
        }

        fn interface_name(&self) -> &'static str {
            "FancyButton"
        }

        fn js_constructor(&mut self) {}
    }

    #[test]
    fn test_duplicate_and_invalid_registration() {
        let mut registry = BindingRegistry::with_form_fields();
        assert_eq!(
            registry.register("Button", || Box::new(HtmlButtonElement::new())),
            Err(BindingError::DuplicateBinding("button".to_string()))
        );
        assert_eq!(
            registry.register("  ", || Box::new(HtmlButtonElement::new())),
            Err(BindingError::InvalidTag(String::new()))
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_registration_rejects_foreign_object() {
        let mut registry = BindingRegistry::with_form_fields();
        assert_eq!(
            registry.register("select", || Box::new(HtmlButtonElement::new())),
            Err(BindingError::TagMismatch {
                tag: "select".to_string(),
                constructed: "button".to_string(),
            })
        );
        assert!(!registry.contains("select"));
        assert!(registry.instantiate("select").is_err());
    }

    #[test]
    fn test_entries_match_their_objects() {
        let registry = BindingRegistry::with_form_fields();
        for tag in registry.tags() {
            let entry = registry.lookup(tag).expect("listed tag");
            let object = registry.instantiate(tag).expect("listed tag");
            assert_eq!(object.tag_name(), tag);
            assert_eq!(entry.tag_name, tag);
            assert_eq!(entry.interface_name, object.interface_name());
        }
    }

    #[test]
    fn test_custom_registration() {
        let mut registry = BindingRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.register("X-Button", || Box::new(FancyButton)).is_ok());

        let object = registry.instantiate("x-button").expect("registered");
        assert_eq!(object.tag_name(), "x-button");
        assert_eq!(object.interface_name(), "FancyButton");
        assert!(object.as_form_field().is_none());
    }

    #[test]
    fn test_instances_are_independent() {
        let registry = BindingRegistry::with_form_fields();
        let mut objects: Vec<Box<dyn HostObject>> = (0..1000)
            .map(|_| registry.instantiate("button").expect("registered"))
            .collect();

        if let Some(field) = objects[0].as_form_field_mut() {
            field.set_value(Some("first".to_string()));
        }

        assert_eq!(
            objects[0].as_form_field().and_then(|f| f.value()),
            Some("first")
        );
        assert!(
            objects[1..]
                .iter()
                .all(|o| o.as_form_field().and_then(|f| f.value()).is_none())
        );
    }
}
