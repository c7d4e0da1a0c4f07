// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use the_textsmith::config::{
    load_and_validate_batch, load_settings, operation_specs, ResourceCatalog, Settings,
};
use the_textsmith::dispatch::{OperationDispatcher, Options};
use the_textsmith::engine::ConcurrentExecutor;
use the_textsmith::envelope::ResultEnvelope;
use the_textsmith::observability::init_tracing;
use the_textsmith::observability::messages::{config::SettingsLoaded, StructuredLog};
use the_textsmith::processors::TextChoice;
use the_textsmith::prompts::PromptTemplate;
use the_textsmith::traits::BatchExecutor;

const USAGE: &str = "\
Usage: textsmith [--config <settings.yaml>] <command> [args...]

Commands:
  invoke <operation> <text> [key=value ...]   Run one operation
  list                                        Describe every operation
  resources [name-or-uri]                     List or read reference resources
  prompt <name> <text> [key=value ...]        Render a prompt template
  batch <batch.yaml>                          Run a batch file concurrently

Option values are parsed as JSON when possible, so width=40 is a number and
remove_html=false is a boolean. Anything else is passed as a string.

Examples:
  textsmith invoke transform_case \"hello world\" case_type=snake
  textsmith invoke format_text \"some long text\" format_type=wrap width=20
  textsmith prompt translate \"Good morning\" source_language=English target_language=French
  textsmith batch configs/batch-demo.yaml";

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

async fn run(args: Vec<String>) -> Result<ExitCode> {
    let (config_path, args) = split_config_flag(args)?;

    let settings = load_settings(config_path.as_deref())
        .context("failed to load settings")?;
    init_tracing(&settings);
    SettingsLoaded {
        environment: settings.environment.as_str(),
        log_level: settings.log_level.as_str(),
        source: config_path.as_deref(),
    }
    .log();

    let Some((command, rest)) = args.split_first() else {
        bail!("missing command\n\n{}", USAGE);
    };

    let (output, success) = match command.as_str() {
        "invoke" => invoke(&settings, rest)?,
        "list" => (serde_json::to_value(operation_specs(&settings.tool_prefix))?, true),
        "resources" => resources(rest)?,
        "prompt" => prompt(&settings, rest)?,
        "batch" => batch(&settings, rest).await?,
        "help" | "--help" | "-h" => {
            println!("{}", USAGE);
            return Ok(ExitCode::SUCCESS);
        }
        other => bail!("unknown command '{}'\n\n{}", other, USAGE),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Pull `--config <path>` (or `--config=<path>`) out of the argument list.
fn split_config_flag(args: Vec<String>) -> Result<(Option<PathBuf>, Vec<String>)> {
    let mut config_path = None;
    let mut remaining = Vec::with_capacity(args.len());
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        if arg == "--config" {
            let path = iter.next().context("--config requires a path")?;
            config_path = Some(PathBuf::from(path));
        } else if let Some(path) = arg.strip_prefix("--config=") {
            config_path = Some(PathBuf::from(path));
        } else {
            remaining.push(arg);
        }
    }

    Ok((config_path, remaining))
}

fn parse_key_values(pairs: &[String]) -> Result<Vec<(String, String)>> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => bail!("expected key=value, got '{}'", pair),
        })
        .collect()
}

fn parse_options(pairs: &[String]) -> Result<Options> {
    let mut options = Options::new();
    for (key, raw) in parse_key_values(pairs)? {
        let value = serde_json::from_str(&raw).unwrap_or(Value::String(raw));
        options.insert(key, value);
    }
    Ok(options)
}

/// Accept names published with a custom tool prefix.
fn strip_tool_prefix<'a>(settings: &Settings, name: &'a str) -> &'a str {
    name.strip_prefix(settings.tool_prefix.as_str()).unwrap_or(name)
}

fn invoke(settings: &Settings, args: &[String]) -> Result<(Value, bool)> {
    let [operation, text, pairs @ ..] = args else {
        bail!("invoke needs <operation> <text>\n\n{}", USAGE);
    };

    let options = parse_options(pairs)?;
    let envelope = OperationDispatcher::new().invoke(
        strip_tool_prefix(settings, operation),
        text,
        &options,
    );

    Ok((envelope.to_json()?, envelope.is_success()))
}

fn resources(args: &[String]) -> Result<(Value, bool)> {
    match args {
        [] => {
            let index = ResourceCatalog::index();
            Ok((
                json!({ "resource_count": index.len(), "resources": index }),
                true,
            ))
        }
        [key] => match ResourceCatalog::find(key) {
            Some(resource) => Ok((resource.contents(), true)),
            None => bail!("unknown resource '{}'", key),
        },
        _ => bail!("resources takes at most one name or URI"),
    }
}

fn prompt(settings: &Settings, args: &[String]) -> Result<(Value, bool)> {
    let [name, text, pairs @ ..] = args else {
        bail!("prompt needs <name> <text>\n\n{}", USAGE);
    };

    let arguments: HashMap<String, String> = parse_key_values(pairs)?.into_iter().collect();

    let rendered = PromptTemplate::parse(strip_tool_prefix(settings, name)).and_then(|template| {
        template
            .render(text, &arguments)
            .map(|prompt| (template, prompt))
    });

    Ok(match rendered {
        Ok((template, prompt)) => (
            json!({
                "success": true,
                "name": template.name(),
                "description": template.description(),
                "prompt": prompt,
            }),
            true,
        ),
        Err(e) => (ResultEnvelope::failure(e).to_json()?, false),
    })
}

async fn batch(settings: &Settings, args: &[String]) -> Result<(Value, bool)> {
    let [path] = args else {
        bail!("batch needs exactly one <batch.yaml>\n\n{}", USAGE);
    };

    let batch = load_and_validate_batch(path)
        .with_context(|| format!("failed to load batch '{}'", path))?;
    let max_concurrency = batch
        .max_concurrency
        .unwrap_or_else(|| settings.max_concurrency());

    let executor = ConcurrentExecutor::new(max_concurrency);
    let results = executor.execute(batch.jobs).await?;
    let success = results.iter().all(|result| result.envelope.is_success());

    Ok((serde_json::to_value(&results)?, success))
}
