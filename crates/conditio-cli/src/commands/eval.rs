use crate::support::{DISABLED_EXIT_CODE, load_spec_or_exit, parse_config_or_exit, print_json};
use conditio_kernel::{ConditionalExecution, RecordingContext, SharedContext};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub struct Args {
    pub file: String,
    pub config: Vec<String>,
    pub no_context: bool,
    pub fail_on_disabled: bool,
    pub json: bool,
}

pub fn run(args: Args) {
    let spec = load_spec_or_exit(&args.file);
    let config = parse_config_or_exit(&args.config);
    debug!(file = %args.file, lines = spec.lines.len(), "loaded conditional");

    let recording = Arc::new(RecordingContext::new(args.file.clone()));
    let context: Option<SharedContext> = if args.no_context {
        None
    } else {
        Some(recording.clone())
    };

    let outcome = ConditionalExecution::global()
        .evaluate(Some(&spec), context.as_ref(), &config)
        .unwrap_or_else(|err| {
            if args.json {
                print_json(&json!({
                    "file": args.file,
                    "error": err.kind(),
                    "message": err.to_string(),
                }));
            }
            eprintln!("error: {err}");
            std::process::exit(1);
        });
    let entries = recording.entries();

    if args.json {
        print_json(&json!({
            "file": args.file,
            "decision": outcome.decision(),
            "reason": outcome.reason(),
            "entries": entries,
        }));
    } else {
        println!("conditio eval");
        println!("  File: {}", args.file);
        println!("  Decision: {}", outcome.decision());
        println!("  Reason: {}", outcome.reason());
        println!("  Entries: {}", entries.len());
        for entry in &entries {
            println!("    - {} = {}", entry.key, entry.value);
        }
    }

    if args.fail_on_disabled && outcome.is_disabled() {
        std::process::exit(DISABLED_EXIT_CODE);
    }
}
