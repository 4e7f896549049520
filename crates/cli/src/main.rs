use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use ansibleapp_types::{ServiceInstance, Spec, SpecManifest, decode_spec_payload, specs_log_dump, validate_specs};
use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{debug, info};

/// Inspect Ansible App spec payloads as found in image labels.
#[derive(Parser, Debug)]
#[command(name = "ansibleapp", version, about)]
struct Args {
    /// Log filter directive (falls back to RUST_LOG, then "info")
    #[arg(long, global = true, env = "ANSIBLEAPP_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a spec payload (JSON or YAML) and print the specs as JSON
    Inspect {
        /// File holding the label payload
        path: PathBuf,
    },
    /// Build a manifest from one or more payload files and print it as JSON
    Manifest {
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Reject empty ids, duplicate ids, and duplicate parameter names
        #[arg(long)]
        strict: bool,
    },
    /// Create a service instance for a spec and print it as JSON
    Instance {
        /// File holding the label payload
        path: PathBuf,

        /// Id of the spec to provision
        #[arg(long = "spec")]
        spec_id: String,

        /// Parameter override as key=value; values are parsed as JSON when possible
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
}

fn main() -> Result<()> {
    let Args { log_level, command } = Args::parse();
    init_tracing(log_level);

    match command {
        Command::Inspect { path } => {
            let specs = read_specs(&path)?;
            specs_log_dump(&specs);
            println!("{}", serde_json::to_string_pretty(&specs)?);
        }
        Command::Manifest { paths, strict } => {
            let mut specs = Vec::new();
            for path in &paths {
                specs.extend(read_specs(path)?);
            }
            if strict {
                validate_specs(&specs).context("manifest validation failed")?;
            }
            let manifest = SpecManifest::new(specs);
            info!(spec_count = manifest.len(), "manifest built");
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
        Command::Instance { path, spec_id, params } => {
            let manifest = SpecManifest::new(read_specs(&path)?);
            let spec = manifest
                .get(&spec_id)
                .with_context(|| format!("spec {} not found in {}", spec_id, path.display()))?;
            let instance = build_instance(Arc::clone(spec), &params)?;
            info!(instance_id = %instance.id, spec_id = %spec_id, "service instance created");
            println!("{}", serde_json::to_string_pretty(&instance)?);
        }
    }
    Ok(())
}

fn init_tracing(log_level: Option<String>) {
    let filter = log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_specs(path: &Path) -> Result<Vec<Spec>> {
    let payload = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let specs = decode_spec_payload(&payload).with_context(|| format!("invalid spec payload in {}", path.display()))?;
    debug!(path = %path.display(), spec_count = specs.len(), "spec payload decoded");
    Ok(specs)
}

fn build_instance(spec: Arc<Spec>, overrides: &[String]) -> Result<ServiceInstance> {
    let mut parameters = spec.default_parameters();
    for raw in overrides {
        let (key, value) = parse_param(raw)?;
        parameters.insert(key, value);
    }
    Ok(ServiceInstance::new(spec, parameters))
}

fn parse_param(raw: &str) -> Result<(String, Value)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("parameter must be KEY=VALUE, got {}", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("parameter name missing in {}", raw));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
