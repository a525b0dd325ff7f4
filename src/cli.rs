//! Command-line interface for the `gunit` binary

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::annotate::lang;
use crate::config::Settings;
use crate::error::{AppError, Result};
use crate::gunit::Gunit;
use crate::template::{TemplateId, Variables};

#[derive(Debug, Parser)]
#[command(name = "gunit", version, about = "Guided Unified Notation for Intelligent Text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Substitute variables into a template
    Render {
        template: String,
        /// Bindings as NAME=VALUE; JSON strings, booleans and null are decoded, anything else is kept as typed
        #[arg(value_name = "NAME=VALUE")]
        variables: Vec<String>,
        /// Processor identifier
        #[arg(long)]
        id: Option<String>,
    },
    /// Check template syntax; exits non-zero when invalid
    Validate { template: String },
    /// List the variable names a template references
    Vars { template: String },
    /// Walk through the engine's features
    Demo,
}

/// Parse a `NAME=VALUE` binding.
///
/// Only JSON strings, booleans and `null` are decoded. Numbers and
/// structured values keep their raw text so they render exactly as typed.
pub fn parse_assignment(arg: &str) -> Result<(String, serde_json::Value)> {
    let (name, raw) = arg
        .split_once('=')
        .ok_or_else(|| AppError::InvalidArgument(format!("expected NAME=VALUE, got '{}'", arg)))?;

    if name.is_empty() {
        return Err(AppError::InvalidArgument(format!(
            "empty variable name in '{}'",
            arg
        )));
    }

    let value = match serde_json::from_str(raw) {
        Ok(value @ (serde_json::Value::String(_)
        | serde_json::Value::Bool(_)
        | serde_json::Value::Null)) => value,
        _ => serde_json::Value::String(raw.to_string()),
    };

    Ok((name.to_string(), value))
}

/// Execute a parsed command, writing results to `out`
pub fn run(cli: Cli, settings: &Settings, out: &mut impl Write) -> Result<ExitCode> {
    let gunit = Gunit::from_settings(&settings.template);

    match cli.command {
        Command::Render {
            template,
            variables,
            id,
        } => {
            let variables = variables
                .iter()
                .map(|arg| parse_assignment(arg))
                .collect::<Result<Variables>>()?;

            let mut processor = gunit.create_template(id.map(TemplateId::from));
            let text = processor.set_context(variables).process(&template)?;
            writeln!(out, "{}", text)?;
        }
        Command::Validate { template } => {
            if !Gunit::validate_template(&template) {
                writeln!(out, "invalid")?;
                return Ok(ExitCode::FAILURE);
            }
            writeln!(out, "valid")?;
        }
        Command::Vars { template } => {
            for name in Gunit::extract_variables(&template) {
                writeln!(out, "{}", name)?;
            }
        }
        Command::Demo => {
            let demo = lang("Initializing G-UNIT framework", |out: &mut dyn Write| {
                run_demo(&mut Gunit::from_settings(&settings.template), out)
            });
            let out: &mut dyn Write = out;
            demo(out)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_demo(gunit: &mut Gunit, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Basic Template Processing:")?;
    let template = "Hello, {name}! Welcome to {product} version {version}.";
    let result = gunit.process(
        template,
        [
            ("name", "Developer"),
            ("product", "G-UNIT"),
            ("version", "1.0.0"),
        ],
    )?;
    writeln!(out, "Template: {}", template)?;
    writeln!(out, "Result: {}", result)?;

    writeln!(out, "\nTemplate Validation:")?;
    let valid_template = "The {animal} is {color} and {mood}.";
    let invalid_template = "The {animal is {color} and {mood}.";
    writeln!(out, "Valid template: {}", Gunit::validate_template(valid_template))?;
    writeln!(out, "Invalid template: {}", Gunit::validate_template(invalid_template))?;

    writeln!(out, "\nVariable Extraction:")?;
    let complex_template = "The {animal} {action} {direction} the {object} at {time}.";
    let variables: Vec<_> = Gunit::extract_variables(complex_template).into_iter().collect();
    writeln!(out, "Template: {}", complex_template)?;
    writeln!(out, "Variables: {}", variables.join(", "))?;

    writeln!(out, "\nAdvanced Template Processing:")?;
    let mut processor = gunit.create_template(Some("story_template".into()));
    let story_template = "Once upon a time, there was a {character} who loved to {action}.\n\
        One day, they {event} and discovered {discovery}.\n\
        From that day forward, they {resolution}.";

    if Gunit::validate_template(story_template) {
        let story = processor
            .set_context([
                ("character", "wizard"),
                ("action", "code"),
                ("event", "stumbled upon G-UNIT"),
                ("discovery", "the power of template processing"),
                ("resolution", "wrote beautiful templates every day"),
            ])
            .process(story_template)?;
        writeln!(out, "Generated Story:\n{}", story)?;
    } else {
        writeln!(out, "Invalid template!")?;
    }

    Ok(())
}
