/*
 * main.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! tenant-override CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod input;

use commands::apply::ArrayMerge;

#[derive(Parser)]
#[command(name = "tenant-override")]
#[command(version, about = "Apply and validate tenant overrides", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a tenant customization to a base template
    Apply {
        /// Base template (JSON or YAML)
        base: PathBuf,

        /// Tenant customization (JSON or YAML)
        customization: PathBuf,

        /// Schema file to validate against
        #[arg(long, conflicts_with = "default_schema")]
        schema: Option<PathBuf>,

        /// Validate against the built-in template schema
        #[arg(long)]
        default_schema: bool,

        /// Fail on the first validation or path error
        #[arg(long)]
        strict: bool,

        /// Skip schema validation
        #[arg(long)]
        no_validate: bool,

        /// How array overrides combine with existing arrays
        #[arg(long, value_enum, default_value_t = ArrayMerge::Replace)]
        array_merge: ArrayMerge,

        /// Write output to FILE instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Validate a customization's overrides against a schema
    Validate {
        /// Tenant customization (JSON or YAML)
        customization: PathBuf,

        /// Schema file (defaults to the built-in template schema)
        #[arg(long)]
        schema: Option<PathBuf>,
    },

    /// Print the overrides that turn one tree into another
    Diff {
        /// Original tree
        original: PathBuf,

        /// Customized tree
        customized: PathBuf,
    },

    /// List the leaf paths of a tree
    Paths {
        /// Tree to enumerate (JSON or YAML)
        input: PathBuf,

        /// Only list paths matching this wildcard pattern
        #[arg(short = 'p', long)]
        pattern: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tenant_override=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Apply {
            base,
            customization,
            schema,
            default_schema,
            strict,
            no_validate,
            array_merge,
            output,
        } => commands::apply::execute(commands::apply::ApplyArgs {
            base,
            customization,
            schema: commands::SchemaSource::from_flags(schema, default_schema),
            strict,
            validate: !no_validate,
            array_merge,
            output,
        }),
        Commands::Validate {
            customization,
            schema,
        } => commands::validate::execute(commands::validate::ValidateArgs {
            customization,
            schema: commands::SchemaSource::from_flags(schema, false),
        }),
        Commands::Diff {
            original,
            customized,
        } => commands::diff::execute(&original, &customized),
        Commands::Paths { input, pattern } => commands::paths::execute(&input, pattern.as_deref()),
    }
}
