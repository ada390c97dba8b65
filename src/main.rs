use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod config;
mod errors;
mod recommend;
mod shell;
mod similarity;
#[cfg(test)]
mod tests;

use catalog::Catalog;
use config::Config;
use errors::RecommendError;
use recommend::Recommender;
use shell::{LineSource, PromptSource, ReaderSource, Shell};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &cli::Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_with(path)
            .with_context(|| format!("couldnt load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(top_n) = args.top_n {
        config.top_n = top_n as usize;
    }

    Ok(config)
}

fn load_catalog(args: &cli::Args, config: &Config) -> anyhow::Result<Catalog> {
    let path = args
        .catalog
        .clone()
        .or_else(|| config.catalog.as_ref().map(PathBuf::from));

    match path {
        Some(path) => Catalog::load_csv(&path)
            .with_context(|| format!("couldnt load catalog from {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

/// One-shot query. Prints the not-found notice and fails when the name
/// is not in the catalog.
fn run_recommend(
    recommender: &Recommender,
    name: &[String],
    top_n: usize,
    json: bool,
    show_scores: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let name = name.join(" ");

    match recommender.recommend(name.trim(), top_n) {
        Ok(recommendations) => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&recommendations)?)?;
            } else {
                shell::write_recommendations(out, &recommendations, show_scores)?;
            }
            Ok(())
        }
        Err(err @ RecommendError::NotFound(_)) => {
            if !json {
                shell::write_not_found(out)?;
            }
            bail!(err)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args)?;
    let catalog = load_catalog(&args, &config)?;
    tracing::debug!(items = catalog.len(), top_n = config.top_n, "catalog ready");

    let recommender = Recommender::new(catalog).context("couldnt build similarity matrix")?;

    let mut stdout = std::io::stdout().lock();

    match args.command.clone().unwrap_or_default() {
        cli::Command::Shell { scores } => {
            let shell = Shell::new(&recommender, config.top_n)
                .with_scores(scores || config.show_scores)
                .with_prompt(config.prompt.clone());

            let stdin = std::io::stdin();
            let mut source: Box<dyn LineSource> = if stdin.is_terminal() {
                Box::new(PromptSource::new(recommender.catalog().names()))
            } else {
                Box::new(ReaderSource::new(stdin.lock()))
            };

            shell.run(source.as_mut(), &mut stdout)?;
            Ok(())
        }

        cli::Command::Recommend { name, json, scores } => run_recommend(
            &recommender,
            &name,
            config.top_n,
            json,
            scores || config.show_scores,
            &mut stdout,
        ),

        cli::Command::List { json } => {
            if json {
                let items = recommender.catalog().items();
                writeln!(stdout, "{}", serde_json::to_string_pretty(items)?)?;
            } else {
                for name in recommender.catalog().names() {
                    writeln!(stdout, "{name}")?;
                }
            }
            Ok(())
        }
    }
}
