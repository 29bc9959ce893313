use crate::BindingConfig;
use crate::dom::{DomTree, NodeId};
use crate::error::BindingError;
use crate::host_object::HostObject;
use crate::registry::BindingRegistry;
use log::{debug, info, warn};
use std::collections::HashMap;

/// Events that trigger a form control's activation behavior.
const ACTIVATION_EVENTS: &[&str] = &["click"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Dispatched,
    /// The target is a disabled form field.
    Suppressed,
}

/// Owns the host objects of one bound document.
pub struct DomBridge {
    registry: BindingRegistry,
    config: BindingConfig,
    objects: HashMap<NodeId, Box<dyn HostObject>>,
}

impl DomBridge {
    pub fn new(registry: BindingRegistry, config: BindingConfig) -> Self {
        Self {
            registry,
            config,
            objects: HashMap::new(),
        }
    }

    pub fn registry(&self) -> &BindingRegistry {
        &self.registry
    }

    /// Creates one host object per registered element in `tree`, replacing
    /// whatever was bound before. Returns how many were created.
    pub fn bind_dom(&mut self, tree: &DomTree) -> Result<usize, BindingError> {
        self.teardown();

        if !self.config.enable_javascript {
            debug!(target: "bindings", "Scripting disabled, skipping DOM binding");
            return Ok(0);
        }

        for entry in tree.walk() {
            let Some(tag) = entry.node.tag_name() else {
                continue;
            };
            if !self.registry.contains(tag) {
                continue;
            }

            let mut object = self.registry.instantiate(tag)?;
            if let Some(field) = object.as_form_field_mut() {
                field.set_value(entry.node.get_attribute("value").map(str::to_string));
                field.set_name(entry.node.get_attribute("name").map(str::to_string));
                field.set_disabled(entry.node.has_attribute("disabled"));
                field.set_form(entry.form);
            }
            self.objects.insert(entry.id, object);
        }

        info!(target: "bindings", "Bound {} host objects", self.objects.len());
        if self.config.debug {
            for id in self.bound_nodes() {
                if let Some(object) = self.objects.get(&id) {
                    info!(target: "bindings", "  {} -> {:?}", id, object);
                }
            }
        }
        Ok(self.objects.len())
    }

    pub fn host_object(&self, id: NodeId) -> Option<&dyn HostObject> {
        self.objects.get(&id).map(|object| &**object)
    }

    pub fn host_object_mut(&mut self, id: NodeId) -> Option<&mut (dyn HostObject + 'static)> {
        self.objects.get_mut(&id).map(|object| &mut **object)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn bound_nodes(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.objects.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Bound form fields whose form owner is `form`, in document order.
    pub fn controls_of(&self, form: NodeId) -> Vec<NodeId> {
        self.bound_nodes()
            .into_iter()
            .filter(|id| {
                self.objects
                    .get(id)
                    .and_then(|object| object.as_form_field())
                    .is_some_and(|field| field.form() == Some(form))
            })
            .collect()
    }

    pub fn handle_event(
        &self,
        target: NodeId,
        event_name: &str,
    ) -> Result<EventOutcome, BindingError> {
        let object = self
            .objects
            .get(&target)
            .ok_or(BindingError::NotBound(target))?;

        let is_activation = ACTIVATION_EVENTS
            .iter()
            .any(|name| name.eq_ignore_ascii_case(event_name));
        let disabled = object
            .as_form_field()
            .is_some_and(|field| !field.is_interactive());

        if is_activation && disabled {
            warn!(target: "bindings", "Ignoring {} on disabled {} at {}", event_name, object.interface_name(), target);
            return Ok(EventOutcome::Suppressed);
        }

        debug!(target: "bindings", "Dispatched {} to {} at {}", event_name, object.interface_name(), target);
        Ok(EventOutcome::Dispatched)
    }

    /// Drops every host object.
    pub fn teardown(&mut self) {
        if !self.objects.is_empty() {
            debug!(target: "bindings", "Tearing down {} host objects", self.objects.len());
        }
        self.objects.clear();
    }
}
