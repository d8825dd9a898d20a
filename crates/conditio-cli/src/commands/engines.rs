use crate::support::print_json;
use conditio_kernel::{DialectFamily, EngineRegistry};
use serde_json::json;

pub fn run(json: bool) {
    let registry = EngineRegistry::global();
    if json {
        let engines = registry
            .descriptors()
            .map(|descriptor| {
                json!({
                    "descriptor": descriptor,
                    "family": DialectFamily::from_language_name(&descriptor.language_name),
                })
            })
            .collect::<Vec<_>>();
        print_json(&json!({ "engines": engines }));
        return;
    }

    println!("conditio engines");
    if registry.is_empty() {
        println!("  (none registered)");
    }
    for descriptor in registry.descriptors() {
        println!(
            "  - {} [family: {}]",
            descriptor,
            DialectFamily::from_language_name(&descriptor.language_name)
        );
        println!("      names: {}", descriptor.names.join(", "));
        println!("      extensions: {}", descriptor.extensions.join(", "));
        println!("      mime types: {}", descriptor.mime_types.join(", "));
    }
}
