use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::env;
use std::process;

// Use library instead of local modules
use amount_kit::{register_amount_schemas, AmountOptions, SchemaRegistry, ValidatorKind, VERSION};

const USAGE: &str = "Usage:
  amount-kit check <kind> <value> [<options-json> | @<options-file>]
  amount-kit schemas

Kinds: amount, monetary, percentage, whole, crypto";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("check") => {
            let valid = run_check(&args[2..])?;
            if !valid {
                process::exit(1);
            }
        }
        Some("schemas") => run_schemas()?,
        Some("--version") => println!("amount-kit {}", VERSION),
        _ => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    }

    Ok(())
}

/// Validate one value; returns whether it passed
fn run_check(args: &[String]) -> Result<bool> {
    let (kind, raw_value) = match args {
        [kind, value, ..] => (kind, value),
        _ => bail!("check needs a kind and a value\n\n{}", USAGE),
    };

    let kind: ValidatorKind = kind.parse()?;
    let options = match args.get(2) {
        Some(source) => load_options(source)?,
        None => AmountOptions::default(),
    };

    // Anything that is not valid JSON is treated as a string, so it fails the type check
    let value: Value = serde_json::from_str(raw_value).unwrap_or_else(|_| Value::String(raw_value.clone()));
    log::debug!("Checking {} as {} with {:?}", value, kind, options);

    match kind.check(&value, &options) {
        Ok(valid) => {
            println!("✓ valid {}: {}", kind.label(), valid);
            Ok(true)
        }
        Err(error) => {
            println!("❌ invalid {}: {}", kind.label(), raw_value);
            for issue in &error.issues {
                println!("   {} - {}", issue.code.name(), issue.message);
            }
            Ok(false)
        }
    }
}

fn load_options(source: &str) -> Result<AmountOptions> {
    match source.strip_prefix('@') {
        Some(path) => AmountOptions::from_file(path),
        None => AmountOptions::from_json_str(source),
    }
}

fn run_schemas() -> Result<()> {
    let mut registry = SchemaRegistry::new();
    register_amount_schemas(&mut registry)?;

    let rendered = serde_json::to_string_pretty(&registry.to_json_schema())
        .context("Failed to render schemas")?;
    println!("{}", rendered);

    Ok(())
}
