use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result, bail};
use bezirk_cli::batch::{BatchSummary, resolve_batch};
use bezirk_cli::logging::redact_value;
use bezirk_core::{ImportSummary, RuleSet, Session, SessionOptions, load_rule_set};
use bezirk_ingest::{load_street_table, parse_recognition_reply};
use bezirk_model::{RawAddress, ResolutionResult};
use tracing::{info, info_span, warn};

use crate::cli::{BatchArgs, RecognizeArgs, ResolveArgs, RulesArgs, SessionArgs, TableArgs};
use crate::summary::{print_import, print_resolution, print_rules, print_table_entries};

fn load_rules(path: Option<&Path>) -> Result<RuleSet> {
    match path {
        Some(path) => {
            load_rule_set(path).with_context(|| format!("load rules: {}", path.display()))
        }
        None => Ok(RuleSet::builtin()),
    }
}

fn build_session(args: &SessionArgs) -> Result<Session> {
    let rules = load_rules(args.rules.as_deref())?;
    let options = SessionOptions::new()
        .with_rules(rules)
        .with_language(args.language.into());
    let mut session = Session::new(options);
    if let Some(path) = &args.table {
        let summary = session
            .import_path(path)
            .with_context(|| format!("import street table: {}", path.display()))?;
        log_import(&summary);
    }
    Ok(session)
}

fn log_import(summary: &ImportSummary) {
    info!(
        entries = summary.entries,
        skipped = summary.skipped.len(),
        duplicates = summary.duplicates.len(),
        "street table imported"
    );
    if !summary.skipped.is_empty() || !summary.duplicates.is_empty() {
        warn!(
            skipped = summary.skipped.len(),
            duplicates = summary.duplicates.len(),
            "street table has ignored or overridden lines; run `bezirk table` for details"
        );
    }
}

fn emit(session: &Session, result: &ResolutionResult, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(result).context("serialize result")?;
        println!("{rendered}");
    } else {
        print_resolution(session, result);
    }
    Ok(())
}

pub fn run_resolve(args: &ResolveArgs) -> Result<ResolutionResult> {
    let session = build_session(&args.session)?;
    let address = RawAddress::new(args.street.clone(), args.number.clone());
    let span = info_span!("resolve", street = redact_value(&address.street));
    let _guard = span.enter();
    let result = session.resolve(&address, None);
    emit(&session, &result, args.json)?;
    Ok(result)
}

pub fn run_batch(args: &BatchArgs) -> Result<BatchSummary> {
    let session = build_session(&args.session)?;
    let span = info_span!("batch", input = %args.input.display());
    let _guard = span.enter();
    let input = File::open(&args.input)
        .with_context(|| format!("open addresses: {}", args.input.display()))?;
    let input = BufReader::new(input);
    match &args.output {
        Some(path) => {
            let output =
                File::create(path).with_context(|| format!("create output: {}", path.display()))?;
            resolve_batch(&session, input, BufWriter::new(output))
        }
        None => resolve_batch(&session, input, io::stdout().lock()),
    }
}

pub fn run_recognize(args: &RecognizeArgs) -> Result<ResolutionResult> {
    let session = build_session(&args.session)?;
    let reply = fs::read_to_string(&args.reply)
        .with_context(|| format!("read reply: {}", args.reply.display()))?;
    let recognized = parse_recognition_reply(&reply)
        .with_context(|| format!("decode reply: {}", args.reply.display()))?;
    let Some(result) = session.resolve_recognized(&recognized) else {
        bail!("no street sign recognized in {}", args.reply.display());
    };
    emit(&session, &result, args.json)?;
    Ok(result)
}

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let rules = load_rules(args.rules.as_deref())?;
    if args.json {
        println!("{}", rules.to_json_pretty().context("serialize rules")?);
    } else {
        print_rules(&rules);
    }
    Ok(())
}

pub fn run_table(args: &TableArgs) -> Result<()> {
    let import = load_street_table(&args.path)
        .with_context(|| format!("import street table: {}", args.path.display()))?;
    print_table_entries(&import.table);
    print_import(&import);
    Ok(())
}
