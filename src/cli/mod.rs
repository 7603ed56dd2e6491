//! CLI command definitions and handlers

use crate::config;
use crate::engine::AnalysisEngine;
use crate::reporters;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reframe - signal-clarity analysis for short statements
///
/// Detects reified metaphors (variables treated as constants), traces the
/// dependency chains between them, scores institutional entropy, and
/// rewrites statements in functional form.
#[derive(Parser, Debug)]
#[command(name = "reframe")]
#[command(
    version,
    about = "Signal-clarity analysis — detect reified metaphors, score entropy, restate in functional form",
    after_help = "\
Examples:
  reframe analyze \"AI must maintain boundaries with users\"
  reframe analyze --file statements.txt --format json
  reframe analyze \"...\" --fail-below 0.7       Exit 1 when clarity drops below 0.7 (CI mode)
  reframe restate \"safety requires boundaries\"
  reframe trace boundaries
  reframe catalog list
  reframe catalog search hierarchy"
)]
pub struct Cli {
    /// Directory to look up reframe.toml in (default: current directory)
    #[arg(long, short = 'C', global = true, default_value = ".")]
    pub config_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full analysis on a statement (or a file of statements)
    Analyze {
        /// Statement to analyze
        statement: Option<String>,

        /// Read statements from a file, one per non-empty line
        #[arg(long, conflicts_with = "statement")]
        file: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Skip auto-locking detected terms
        #[arg(long)]
        no_lock: bool,

        /// Exit with code 1 if any statement's clarity falls below this
        #[arg(long)]
        fail_below: Option<f64>,
    },

    /// Rewrite a statement with functional forms substituted
    Restate {
        /// Statement to rewrite
        statement: String,
    },

    /// Show the dependency chain forced by a term's reification
    Trace {
        /// Catalog term to trace from
        term: String,
    },

    /// Suggest variable locks for a statement without applying them
    Suggest {
        /// Statement to analyze
        statement: String,
    },

    /// Inspect the metaphor catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum CatalogAction {
    /// List every term with its framings
    List,
    /// Find terms whose institutional function mentions a keyword
    Search { keyword: String },
    /// Catalog overview numbers
    Stats,
}

/// Entry point called from main
pub fn run(cli: Cli) -> Result<()> {
    let project = config::load_project_config(&cli.config_dir);
    let catalog = project
        .build_catalog()
        .context("invalid metaphor catalog configuration")?;
    let mut engine = AnalysisEngine::with_catalog(catalog)
        .with_clarity_threshold(project.analysis.clarity_threshold);

    match cli.command {
        Commands::Analyze {
            statement,
            file,
            format,
            no_lock,
            fail_below,
        } => run_analyze(&mut engine, statement, file, &format, no_lock, fail_below),
        Commands::Restate { statement } => {
            println!("{}", engine.restate(&statement));
            Ok(())
        }
        Commands::Trace { term } => run_trace(&engine, &term),
        Commands::Suggest { statement } => run_suggest(&engine, &statement),
        Commands::Catalog { action } => run_catalog(&engine, action),
    }
}

fn run_analyze(
    engine: &mut AnalysisEngine,
    statement: Option<String>,
    file: Option<PathBuf>,
    format: &str,
    no_lock: bool,
    fail_below: Option<f64>,
) -> Result<()> {
    let statements = collect_statements(statement, file)?;

    let mut worst_clarity = f64::INFINITY;
    for statement in &statements {
        let analysis = engine.analyze(statement, !no_lock);
        worst_clarity = worst_clarity.min(analysis.entropy.signal_clarity);
        println!("{}", reporters::report(&analysis, format)?);
    }

    if let Some(threshold) = fail_below {
        if worst_clarity < threshold {
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Resolve the statements to analyze from the arg or the file
fn collect_statements(statement: Option<String>, file: Option<PathBuf>) -> Result<Vec<String>> {
    if let Some(statement) = statement {
        return Ok(vec![statement]);
    }
    let Some(path) = file else {
        bail!("provide a statement or --file");
    };
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let statements: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    if statements.is_empty() {
        bail!("{} contains no statements", path.display());
    }
    Ok(statements)
}

fn run_trace(engine: &AnalysisEngine, term: &str) -> Result<()> {
    match engine.trace(term) {
        Some(chain) => {
            println!("{} forces: {}", chain.primary, chain.forces.join(", "));
            println!("{}", chain.mechanism);
        }
        None => println!("no dependency chain recorded for '{term}'"),
    }
    Ok(())
}

fn run_suggest(engine: &AnalysisEngine, statement: &str) -> Result<()> {
    let suggestions = engine.suggest_locks(statement);
    if suggestions.is_empty() {
        println!("no reified metaphors detected");
        return Ok(());
    }
    for (term, s) in &suggestions {
        println!("{term}: {} -> {}", s.current_treatment, s.functional_form);
        println!("    range: {}", s.suggested_range.join(", "));
        println!("    {}", s.rationale);
    }
    Ok(())
}

fn run_catalog(engine: &AnalysisEngine, action: CatalogAction) -> Result<()> {
    let catalog = engine.catalog();
    match action {
        CatalogAction::List => {
            for term in catalog.terms() {
                if let Some(entry) = catalog.get(term) {
                    println!("{term}: {} -> {}", entry.reified_as, entry.functional_form);
                }
            }
        }
        CatalogAction::Search { keyword } => {
            let hits = catalog.find_by_function_keyword(&keyword);
            if hits.is_empty() {
                println!("no terms match '{keyword}'");
            } else {
                for term in hits {
                    println!("{term}");
                }
            }
        }
        CatalogAction::Stats => {
            let stats = catalog.stats();
            println!("metaphors: {}", stats.total_metaphors);
            println!("chains: {}", stats.total_chains);
            println!("avg forced per chain: {:.1}", stats.avg_forced_per_chain);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from([
            "reframe", "analyze", "boundaries matter", "--format", "json", "--no-lock",
        ])
        .expect("parse");
        match cli.command {
            Commands::Analyze {
                statement,
                format,
                no_lock,
                ..
            } => {
                assert_eq!(statement.as_deref(), Some("boundaries matter"));
                assert_eq!(format, "json");
                assert!(no_lock);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_statement_and_file_together() {
        let result = Cli::try_parse_from([
            "reframe", "analyze", "text", "--file", "statements.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_collect_statements_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("statements.txt");
        std::fs::write(&path, "first statement\n\n  second statement  \n").expect("write");

        let statements = collect_statements(None, Some(path)).expect("collect");
        assert_eq!(statements, vec!["first statement", "second statement"]);
    }

    #[test]
    fn test_collect_statements_requires_input() {
        assert!(collect_statements(None, None).is_err());
    }
}
