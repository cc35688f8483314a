use std::fs;

use anyhow::Context;
use colored::Colorize;
use serde_json::json;
use xpg_aggregate::{
    AggregateOutput, Aggregator, AggregatorConfig, FilterPolicy, ProfileSummary, TimezonePolicy,
};
use xpg_types::{AuditRecord, ClosureType, TransactionRecord, UserProfile};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Report(args) => cmd_report(args, &cli.format),
        Command::Series(args) => cmd_series(args, &cli.format),
        Command::Audits(args) => cmd_audits(args, &cli.format),
        Command::Summary(args) => cmd_summary(args, &cli.format),
    }
}

fn cmd_report(args: ReportArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let transactions: Vec<TransactionRecord> = load_json(&args.transactions)?;
    let audits: Vec<AuditRecord> = load_json(&args.audits)?;
    let profile: Option<UserProfile> = match &args.profile {
        Some(path) => Some(load_json(path)?),
        None => None,
    };

    let output = aggregate(&args.scope, &transactions, &audits)?;
    let summary = profile.map(|p| ProfileSummary::build(&p, output.total_xp));

    match format {
        OutputFormat::Json => {
            let body = json!({ "summary": summary, "report": output });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => {
            if let Some(summary) = &summary {
                print_summary(summary, false);
                println!();
            }
            print_series(&output, false, false);
            println!();
            print_distribution(&output);
            print_diagnostics(&output);
        }
    }
    Ok(())
}

fn cmd_series(args: SeriesArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let transactions: Vec<TransactionRecord> = load_json(&args.transactions)?;
    let output = aggregate(&args.scope, &transactions, &[])?;

    match format {
        OutputFormat::Json => {
            if args.combined {
                let rows: Vec<_> = output
                    .series
                    .combined_by_date()
                    .into_iter()
                    .map(|(date, xp)| json!({ "date": date, "xpAmount": xp }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{}", serde_json::to_string_pretty(output.series.points())?);
            }
        }
        OutputFormat::Text => {
            print_series(&output, args.combined, args.sorted);
            print_diagnostics(&output);
        }
    }
    Ok(())
}

fn cmd_audits(args: AuditsArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let audits: Vec<AuditRecord> = load_json(&args.audits)?;
    let output = Aggregator::default().aggregate(&[], &audits);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output.distribution)?);
        }
        OutputFormat::Text => {
            print_distribution(&output);
            print_diagnostics(&output);
        }
    }
    Ok(())
}

fn cmd_summary(args: SummaryArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let transactions: Vec<TransactionRecord> = load_json(&args.transactions)?;
    let profile: UserProfile = load_json(&args.profile)?;
    let output = aggregate(&args.scope, &transactions, &[])?;
    let summary = ProfileSummary::build(&profile, output.total_xp);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => print_summary(&summary, args.scaled),
    }
    Ok(())
}

fn aggregate(
    scope: &ScopeArgs,
    transactions: &[TransactionRecord],
    audits: &[AuditRecord],
) -> anyhow::Result<AggregateOutput> {
    let filter = if let Some(prefix) = &scope.prefix {
        FilterPolicy::prefix(prefix.clone())?
    } else if !scope.exclude.is_empty() {
        FilterPolicy::exclude(scope.exclude.clone())?
    } else {
        FilterPolicy::KeepAll
    };
    let timezone: TimezonePolicy = scope.timezone.parse()?;
    let aggregator = Aggregator::new(AggregatorConfig {
        filter,
        timezone,
        module_anchor: scope.anchor.clone(),
    });
    Ok(aggregator.aggregate(transactions, audits))
}

fn load_json<T: serde::de::DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))
}

fn print_summary(summary: &ProfileSummary, scaled: bool) {
    println!("{}", "Summary".bold());
    println!("  Login: {}", summary.login.yellow());
    println!("  Name: {}", summary.full_name);
    if let Some(email) = &summary.email {
        println!("  Email: {email}");
    }
    println!("  Audit ratio: {:.1}", summary.audit_ratio);
    println!("  Done / received: {} / {}", summary.total_up, summary.total_down);
    if scaled {
        println!("  Total XP: {} kB", format!("{:.1}", summary.total_xp_display()).green().bold());
    } else {
        println!("  Total XP: {}", summary.total_xp.to_string().green().bold());
    }
}

fn print_series(output: &AggregateOutput, combined: bool, sorted: bool) {
    println!("{}", "XP per day".bold());
    if output.series.is_empty() {
        println!("  (no in-scope transactions)");
        return;
    }
    if combined {
        for (date, xp) in output.series.combined_by_date() {
            println!("  {date}  {xp}");
        }
    } else {
        let points = if sorted {
            output.series.sorted_by_date()
        } else {
            output.series.points().to_vec()
        };
        for point in points {
            println!(
                "  {}  {}  {}",
                point.date,
                point.module_name.cyan(),
                point.xp_amount
            );
        }
    }
    println!("  total: {}", output.total_xp.to_string().green().bold());
}

fn print_distribution(output: &AggregateOutput) {
    println!(
        "{} ({} audits)",
        "Audit outcomes".bold(),
        output.distribution.total_audits
    );
    for closure in ClosureType::ALL {
        let pct = output.distribution.percentage(closure);
        println!("  {:<10} {:>5.1}%", closure.to_string(), pct);
    }
}

fn print_diagnostics(output: &AggregateOutput) {
    let diag = &output.diagnostics;
    if diag.is_clean() {
        return;
    }
    println!(
        "{} {} record(s) dropped: {} missing path, {} bad timestamp, {} unrecognized closure",
        "warning:".yellow().bold(),
        diag.total_dropped(),
        diag.missing_path,
        diag.unparseable_timestamp,
        diag.unrecognized_closure,
    );
}
