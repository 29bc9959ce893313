use element_bindings::dom::{DomTree, Node, NodeId};
use element_bindings::{BindingConfig, BindingRegistry, DomBridge};
use log::info;
use std::error::Error;

fn sample_document() -> DomTree {
    let mut tree = DomTree::new();
    tree.set_root(
        Node::element("html").with_child(
            Node::element("body")
                .with_child(
                    Node::element("form")
                        .with_attribute("id", "login")
                        .with_child(Node::element("input").with_attribute("name", "user"))
                        .with_child(
                            Node::element("button")
                                .with_attribute("name", "submit")
                                .with_attribute("value", "login")
                                .with_child(Node::text("Log in")),
                        ),
                )
                .with_child(Node::element("textarea").with_attribute("disabled", "")),
        ),
    );
    tree
}

fn main() -> Result<(), Box<dyn Error>> {
    element_bindings::logger::init(log::LevelFilter::Info)
        .map_err(|e| format!("Failed to initialize logger: {}", e))?;

    let config = BindingConfig {
        enable_javascript: true,
        debug: true,
    };
    let mut bridge = DomBridge::new(BindingRegistry::with_form_fields(), config);

    println!("Element Bindings");
    info!(target: "bindings", "Registered tags: {:?}", bridge.registry().tags());

    let document = sample_document();
    let count = bridge.bind_dom(&document)?;
    println!("\n[+] Bound {} host objects:", count);
    println!("{}", "=".repeat(50));
    for id in bridge.bound_nodes() {
        let Some(object) = bridge.host_object(id) else {
            continue;
        };
        let (value, disabled, form) = match object.as_form_field() {
            Some(field) => (
                field.value().unwrap_or("").to_string(),
                field.disabled(),
                field.form().map(|form| form.to_string()),
            ),
            None => (String::new(), false, None),
        };
        println!(
            "{:<4} {:<20} value={:?} disabled={} form={}",
            id,
            object.interface_name(),
            value,
            disabled,
            form.unwrap_or_else(|| String::from("-"))
        );
    }
    println!("{}", "=".repeat(50));

    for id in bridge.bound_nodes() {
        let outcome = bridge.handle_event(id, "click")?;
        println!("click {} -> {:?}", id, outcome);
    }

    let form = NodeId::new(2);
    println!("Controls of form {}: {:?}", form, bridge.controls_of(form));

    bridge.teardown();
    Ok(())
}
