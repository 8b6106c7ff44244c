//! Command implementations for the medsyn CLI.

use std::fs;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ExpansionConfig;
use crate::error::{MedsynError, Result};
use crate::synonym::{QueryExpander, SynonymTable, TermExpander};

/// Execute a CLI command.
pub fn execute_command(args: MedsynArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let table = config.load_table()?;
    debug!("Using synonym table with {} entries", table.len());

    match &args.command {
        Command::Term(term_args) => expand_term(term_args, &table, &args),
        Command::Query(query_args) => expand_query(query_args, &table, &config, &args),
        Command::Explain(explain_args) => explain_query(explain_args, &table, &config, &args),
        Command::Stats => show_stats(&table, &args),
        Command::Audit(audit_args) => audit_table(audit_args, &table, &args),
        Command::Dump => dump_table(&table, &args),
    }
}

/// Merge the config file with command line overrides.
fn resolve_config(args: &MedsynArgs) -> Result<ExpansionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            ExpansionConfig::from_file(path)?
        }
        None => ExpansionConfig::default(),
    };

    if let Some(table) = &args.table {
        config.table_path = Some(table.clone());
    }
    if let Some(min_token_length) = args.min_token_length {
        config.min_token_length = min_token_length;
    }

    config.validate()?;
    Ok(config)
}

/// Expand a single term.
fn expand_term(args: &TermArgs, table: &SynonymTable, cli_args: &MedsynArgs) -> Result<()> {
    let expansions = TermExpander::new(table).expand(&args.term);
    let matched = table.contains(&expansions[0]);

    output_result(
        "Term expanded",
        &TermExpansionResult {
            term: expansions[0].clone(),
            matched,
            expansions,
        },
        cli_args,
    )
}

/// Expand a query, or every line of a query file.
fn expand_query(
    args: &QueryArgs,
    table: &SynonymTable,
    config: &ExpansionConfig,
    cli_args: &MedsynArgs,
) -> Result<()> {
    let expander = QueryExpander::new(TermExpander::new(table), config);

    if let Some(path) = &args.file {
        let content = fs::read_to_string(path)?;
        let queries: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if queries.is_empty() {
            return Err(MedsynError::invalid_argument(format!(
                "Query file '{}' contains no queries",
                path.display()
            )));
        }

        info!("Expanding {} queries from {}", queries.len(), path.display());
        let start_time = Instant::now();
        let expanded = expander.expand_batch(&queries);
        let duration = start_time.elapsed();

        let results = queries
            .into_iter()
            .zip(expanded)
            .map(|(query, expansions)| QueryExpansionResult {
                query: query.to_string(),
                expansions,
            })
            .collect();

        return output_result(
            "Queries expanded",
            &BatchExpansionResults {
                results,
                duration_ms: duration.as_millis() as u64,
            },
            cli_args,
        );
    }

    let query = args.query.clone().unwrap_or_default();
    let expansions = expander.expand(&query);
    output_result(
        "Query expanded",
        &QueryExpansionResult { query, expansions },
        cli_args,
    )
}

/// Show the per-token expansion of a query.
fn explain_query(
    args: &ExplainArgs,
    table: &SynonymTable,
    config: &ExpansionConfig,
    cli_args: &MedsynArgs,
) -> Result<()> {
    let expander = QueryExpander::new(TermExpander::new(table), config);

    output_result(
        "Query explained",
        &ExplainResult {
            query: args.query.clone(),
            tokens: expander.explain(&args.query),
            expansions: expander.expand(&args.query),
        },
        cli_args,
    )
}

/// Show table statistics.
fn show_stats(table: &SynonymTable, cli_args: &MedsynArgs) -> Result<()> {
    output_result("Table statistics", &table.stats(), cli_args)
}

/// Report clique inconsistencies.
fn audit_table(args: &AuditArgs, table: &SynonymTable, cli_args: &MedsynArgs) -> Result<()> {
    let mut findings = table.audit();
    let total_findings = findings.len();
    if let Some(limit) = args.limit {
        findings.truncate(limit);
    }

    output_result(
        "Table audited",
        &AuditReport {
            total_findings,
            findings,
        },
        cli_args,
    )
}

/// Print the table in its external JSON shape.
fn dump_table(table: &SynonymTable, cli_args: &MedsynArgs) -> Result<()> {
    output_result(
        "Synonym table",
        &TableDump {
            entries: table.to_sorted_map(),
        },
        cli_args,
    )
}
