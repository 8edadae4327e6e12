//! dlt-advisor CLI
//!
//! Reads questionnaire answers as a JSON object and prints the
//! recommendation as JSON.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use dlt_advisor::{Advisor, AdvisorConfig, AnswerSet, KnowledgeBase};
use tracing_subscriber::EnvFilter;

/// CLI options
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    /// Answers file; stdin when absent
    answers: Option<PathBuf>,
    config: Option<PathBuf>,
    knowledge_base: Option<PathBuf>,
    scenario: Option<String>,
    user: Option<String>,
}

fn usage() {
    println!("dlt-advisor - DLT and consensus recommendations for healthcare");
    println!();
    println!("USAGE:");
    println!("    dlt-advisor [OPTIONS] < answers.json");
    println!();
    println!("OPTIONS:");
    println!("    -a, --answers <FILE>          Answers JSON object [default: stdin]");
    println!("    -c, --config <FILE>           Engine configuration JSON");
    println!("    -k, --knowledge-base <FILE>   Custom knowledge base JSON");
    println!("    -s, --scenario <NAME>         Scenario name for the record");
    println!("    -u, --user <NAME>             Username; also prints a storable record");
    println!("    -h, --help                    Print help information");
}

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Options),
    Help,
}

/// Parses arguments, excluding the program name.
fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(flag) = args.next() {
        if matches!(flag.as_str(), "--help" | "-h") {
            return Ok(Command::Help);
        }
        if !matches!(
            flag.as_str(),
            "--answers" | "-a" | "--config" | "-c" | "--knowledge-base" | "-k" | "--scenario"
                | "-s" | "--user" | "-u"
        ) {
            return Err(format!("unknown argument: {flag}"));
        }
        let Some(value) = args.next() else {
            return Err(format!("{flag} requires a value"));
        };
        match flag.as_str() {
            "--answers" | "-a" => options.answers = Some(PathBuf::from(value)),
            "--config" | "-c" => options.config = Some(PathBuf::from(value)),
            "--knowledge-base" | "-k" => options.knowledge_base = Some(PathBuf::from(value)),
            "--scenario" | "-s" => options.scenario = Some(value),
            _ => options.user = Some(value),
        }
    }

    Ok(Command::Run(options))
}

/// Builds the JSON document printed on stdout.
fn render(advisor: &Advisor, answers: &AnswerSet, options: &Options) -> serde_json::Value {
    let recommendation = advisor.recommend(answers);
    let record = options.user.as_ref().and_then(|user| {
        recommendation.to_record(options.scenario.clone().unwrap_or_default(), user.clone())
    });

    serde_json::json!({
        "recommendation": recommendation,
        "record": record,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            usage();
            return Ok(());
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let config = match &options.config {
        Some(path) => AdvisorConfig::from_path(path)?,
        None => AdvisorConfig::default(),
    };
    let knowledge = match &options.knowledge_base {
        Some(path) => KnowledgeBase::from_path(path)?,
        None => KnowledgeBase::builtin(),
    };
    let advisor = Advisor::with_config(Arc::new(knowledge), config)?;

    let raw = match &options.answers {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let answers: AnswerSet = serde_json::from_str(&raw)?;
    tracing::info!(answers = answers.len(), "computing recommendation");

    let output = render(&advisor, &answers, &options);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
