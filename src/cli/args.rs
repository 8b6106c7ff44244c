//! Command line argument parsing for the medsyn CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// medsyn - Medical synonym and abbreviation expansion
#[derive(Parser, Debug, Clone)]
#[command(name = "medsyn")]
#[command(about = "Expand medical terms and queries with synonyms and abbreviations")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MedsynArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Synonym table JSON file (defaults to the bundled table)
    #[arg(short, long, value_name = "TABLE_FILE")]
    pub table: Option<PathBuf>,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Minimum character length of query tokens to expand
    #[arg(long, value_name = "N")]
    pub min_token_length: Option<usize>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MedsynArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Expand a single term (multi-word terms must be quoted)
    Term(TermArgs),

    /// Expand a free-text query
    Query(QueryArgs),

    /// Show how each token of a query expands
    Explain(ExplainArgs),

    /// Show synonym table statistics
    Stats,

    /// Report asymmetric or inconsistent synonym entries
    Audit(AuditArgs),

    /// Print the synonym table as JSON
    Dump,
}

/// Arguments for expanding a term
#[derive(Parser, Debug, Clone)]
pub struct TermArgs {
    /// Term to expand
    #[arg(value_name = "TERM")]
    pub term: String,
}

/// Arguments for expanding queries
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    /// Query to expand
    #[arg(value_name = "QUERY", required_unless_present = "file")]
    pub query: Option<String>,

    /// File with one query per line
    #[arg(long, value_name = "QUERY_FILE", conflicts_with = "query")]
    pub file: Option<PathBuf>,
}

/// Arguments for explaining a query
#[derive(Parser, Debug, Clone)]
pub struct ExplainArgs {
    /// Query to explain
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for auditing a table
#[derive(Parser, Debug, Clone)]
pub struct AuditArgs {
    /// Maximum number of findings to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn test_term_command() {
        let args = MedsynArgs::try_parse_from(["medsyn", "term", "heart attack"]).unwrap();

        if let Command::Term(term_args) = args.command {
            assert_eq!(term_args.term, "heart attack");
        } else {
            panic!("Expected Term command");
        }
    }

    #[test]
    fn test_query_command() {
        let args = MedsynArgs::try_parse_from(["medsyn", "query", "chest pain and mi"]).unwrap();

        if let Command::Query(query_args) = args.command {
            assert_eq!(query_args.query.as_deref(), Some("chest pain and mi"));
            assert!(query_args.file.is_none());
        } else {
            panic!("Expected Query command");
        }
    }

    #[test]
    fn test_query_file_command() {
        let args =
            MedsynArgs::try_parse_from(["medsyn", "query", "--file", "queries.txt"]).unwrap();

        if let Command::Query(query_args) = args.command {
            assert!(query_args.query.is_none());
            assert_eq!(query_args.file, Some(PathBuf::from("queries.txt")));
        } else {
            panic!("Expected Query command");
        }
    }

    #[test]
    fn test_query_requires_input() {
        assert!(MedsynArgs::try_parse_from(["medsyn", "query"]).is_err());
        assert!(
            MedsynArgs::try_parse_from(["medsyn", "query", "mi", "--file", "q.txt"]).is_err()
        );
    }

    #[test]
    fn test_global_options() {
        let args = MedsynArgs::try_parse_from([
            "medsyn",
            "--table",
            "synonyms.json",
            "--min-token-length",
            "3",
            "audit",
            "--limit",
            "10",
        ])
        .unwrap();

        assert_eq!(args.table, Some(PathBuf::from("synonyms.json")));
        assert_eq!(args.min_token_length, Some(3));
        if let Command::Audit(audit_args) = args.command {
            assert_eq!(audit_args.limit, Some(10));
        } else {
            panic!("Expected Audit command");
        }
    }

    #[test]
    fn test_table_only_set_by_flag() {
        let command = MedsynArgs::command();
        let table = command
            .get_arguments()
            .find(|arg| arg.get_id() == "table")
            .unwrap();
        assert!(table.get_env().is_none());

        let args = MedsynArgs::try_parse_from(["medsyn", "stats"]).unwrap();
        assert!(args.table.is_none());
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = MedsynArgs::try_parse_from(["medsyn", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Verbose flag
        let args = MedsynArgs::try_parse_from(["medsyn", "-v", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = MedsynArgs::try_parse_from(["medsyn", "-vv", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = MedsynArgs::try_parse_from(["medsyn", "--quiet", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = MedsynArgs::try_parse_from(["medsyn", "--format", "json", "dump"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
        assert!(matches!(args.command, Command::Dump));
    }
}
