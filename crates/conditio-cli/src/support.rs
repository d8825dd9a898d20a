use conditio_kernel::ConditionalSpec;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Exit status for a conditional that disabled execution.
pub const DISABLED_EXIT_CODE: i32 = 3;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn load_spec_or_exit(file: &str) -> ConditionalSpec {
    let path = Path::new(file);
    let raw = fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("error: failed to read conditional at {}: {err}", path.display());
        std::process::exit(2);
    });
    parse_spec(path, &raw).unwrap_or_else(|err| {
        eprintln!("error: failed to parse {}: {err}", path.display());
        std::process::exit(1);
    })
}

fn parse_spec(path: &Path, raw: &str) -> Result<ConditionalSpec, String> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(raw).map_err(|err| err.to_string())
    } else {
        toml::from_str(raw).map_err(|err| err.to_string())
    }
}

pub fn parse_config_or_exit(pairs: &[String]) -> BTreeMap<String, String> {
    parse_config(pairs).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(1);
    })
}

fn parse_config(pairs: &[String]) -> Result<BTreeMap<String, String>, String> {
    let mut config = BTreeMap::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(format!("--config expects KEY=VALUE, got `{pair}`"));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(format!("--config key must not be empty in `{pair}`"));
        }
        config.insert(key.to_string(), value.to_string());
    }
    Ok(config)
}

pub fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).expect("json serialization")
    );
}
