use crate::support::{load_spec_or_exit, parse_config_or_exit, print_json};
use conditio_kernel::{
    ConditionError, DialectFamily, EngineRegistry, resolve_dialect, synthesize,
};
use serde_json::json;

pub fn run(file: String, family: Option<DialectFamily>, config: Vec<String>, json: bool) {
    let spec = load_spec_or_exit(&file);
    if spec.lines.is_empty() {
        eprintln!("error: {}", ConditionError::EmptyScript);
        std::process::exit(1);
    }
    let family = family.unwrap_or_else(|| {
        let config = parse_config_or_exit(&config);
        let dialect = resolve_dialect(&spec.dialect, &config);
        let engine = EngineRegistry::global()
            .resolve(&dialect)
            .unwrap_or_else(|err| {
                eprintln!("error: {err}; pass --family to synthesize without an engine");
                std::process::exit(1);
            });
        DialectFamily::from_language_name(&engine.descriptor().language_name)
    });

    let script = synthesize(&spec, family);
    if json {
        print_json(&json!({
            "file": file,
            "family": family,
            "script": script,
        }));
    } else {
        println!("{script}");
    }
}
