//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{MedsynArgs, OutputFormat};
use crate::error::Result;
use crate::synonym::{AuditFinding, FindingKind, TableStats, TokenExpansion};

/// Result of expanding a single term.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermExpansionResult {
    pub term: String,
    pub matched: bool,
    pub expansions: Vec<String>,
}

/// Result of expanding one query.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryExpansionResult {
    pub query: String,
    pub expansions: Vec<String>,
}

/// Results of expanding a file of queries.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchExpansionResults {
    pub results: Vec<QueryExpansionResult>,
    pub duration_ms: u64,
}

/// Per-token breakdown of a query.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExplainResult {
    pub query: String,
    pub tokens: Vec<TokenExpansion>,
    pub expansions: Vec<String>,
}

/// Table audit report.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuditReport {
    pub total_findings: usize,
    pub findings: Vec<AuditFinding>,
}

/// Raw table dump, keys sorted.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct TableDump<'a> {
    pub entries: BTreeMap<&'a str, &'a [String]>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    /// Print the result for a terminal reader.
    fn print_human(&self, args: &MedsynArgs);
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &MedsynArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &MedsynArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

fn print_terms(terms: &[String]) {
    for term in terms {
        println!("  {term}");
    }
}

impl HumanOutput for TermExpansionResult {
    fn print_human(&self, args: &MedsynArgs) {
        if !self.matched && args.verbosity() > 0 {
            println!("No synonyms for \"{}\"", self.term);
        }
        print_terms(&self.expansions);
    }
}

impl HumanOutput for QueryExpansionResult {
    fn print_human(&self, args: &MedsynArgs) {
        if args.verbosity() > 0 {
            println!("Query: {}", self.query);
            println!("Expanded terms ({}):", self.expansions.len());
        }
        print_terms(&self.expansions);
    }
}

impl HumanOutput for BatchExpansionResults {
    fn print_human(&self, args: &MedsynArgs) {
        for (i, result) in self.results.iter().enumerate() {
            if i > 0 {
                println!();
            }
            result.print_human(args);
        }

        if args.verbosity() > 1 {
            println!();
            println!(
                "Expanded {} queries in {}ms",
                self.results.len(),
                self.duration_ms
            );
        }
    }
}

impl HumanOutput for ExplainResult {
    fn print_human(&self, _args: &MedsynArgs) {
        println!("Query: {}", self.query);
        println!("═══════════════");

        for token in &self.tokens {
            println!();
            let status = if token.matched { "matched" } else { "no entry" };
            println!(
                "Token {} [{}..{}]: {} ({})",
                token.position, token.start_offset, token.end_offset, token.token, status
            );
            println!("─────────────");
            for term in token.expansions.iter().skip(1) {
                println!("  {term}");
            }
        }

        println!();
        println!("Merged terms ({}):", self.expansions.len());
        print_terms(&self.expansions);
    }
}

impl HumanOutput for TableStats {
    fn print_human(&self, _args: &MedsynArgs) {
        println!("Synonym Table Statistics:");
        println!("════════════════════════");
        println!("Entries: {}", self.entries);
        println!("Total synonyms: {}", self.total_synonyms);
        if self.entries > 0 {
            let average = self.total_synonyms as f64 / self.entries as f64;
            println!("Average synonyms per entry: {average:.1}");
        }
        println!("Max synonyms per entry: {}", self.max_synonyms);
        println!("Multi-word entries: {}", self.multi_word_keys);
        println!("Multi-word synonyms: {}", self.multi_word_synonyms);
    }
}

impl HumanOutput for AuditReport {
    fn print_human(&self, args: &MedsynArgs) {
        if self.total_findings == 0 {
            println!("No inconsistencies found");
            return;
        }

        println!("Synonym Table Audit:");
        println!("═══════════════════");
        for finding in &self.findings {
            let description = match finding.kind {
                FindingKind::MissingBackReference => "entry does not list it back",
                FindingKind::UnindexedSynonym => "has no entry of its own",
                FindingKind::SelfReference => "lists itself",
                FindingKind::DuplicateSynonym => "listed more than once",
            };
            println!("{} -> {}: {}", finding.term, finding.synonym, description);
        }

        if args.verbosity() > 0 && self.findings.len() < self.total_findings {
            println!();
            println!(
                "Showing {} of {} findings",
                self.findings.len(),
                self.total_findings
            );
        }
    }
}

impl HumanOutput for TableDump<'_> {
    fn print_human(&self, _args: &MedsynArgs) {
        for (term, synonyms) in &self.entries {
            println!("{}: {}", term, synonyms.join(", "));
        }
    }
}
