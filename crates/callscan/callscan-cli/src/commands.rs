use std::io::Write;
use std::path::Path;

use anyhow::Context;
use callscan_batch::{load_record, save_report, write_report, BatchRunner};
use callscan_core::config::CallscanConfig;
use callscan_core::traits::{IComplianceAnalyzer, ISensitiveDetector};
use callscan_privacy::ComplianceEngine;
use serde::Serialize;

#[derive(Serialize)]
struct JsonOut<T> {
    ok: bool,
    data: T,
}

fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

fn engine(config: &CallscanConfig) -> anyhow::Result<ComplianceEngine> {
    ComplianceEngine::from_config(&config.rules).context("invalid detection rules")
}

pub fn scan(config: &CallscanConfig, dir: &Path, to_stdout: bool, json: bool) -> anyhow::Result<()> {
    let runner = BatchRunner::new(engine(config)?, config.batch.clone());
    let report = runner
        .run(dir)
        .with_context(|| format!("batch scan of {} failed", dir.display()))?;

    let format = config.output.effective_format();
    if to_stdout {
        let stdout = std::io::stdout();
        write_report(&report, format, stdout.lock())?;
        return Ok(());
    }

    let path = Path::new(config.output.effective_path());
    save_report(&report, format, path)?;

    if json {
        print_json(serde_json::json!({
            "output": path.display().to_string(),
            "calls": report.total_calls(),
            "non_compliant_calls": report.non_compliant_calls(),
            "flagged_utterances": report.flagged_utterances(),
            "skipped": report.skipped,
        }))?;
    } else {
        println!(
            "{} calls, {} non-compliant, {} flagged utterances, {} skipped -> {}",
            report.total_calls(),
            report.non_compliant_calls(),
            report.flagged_utterances(),
            report.skipped.len(),
            path.display()
        );
        for skipped in &report.skipped {
            println!("skipped {}\t{}", skipped.call_id, skipped.code);
        }
    }
    Ok(())
}

pub fn analyze(config: &CallscanConfig, file: &Path, json: bool) -> anyhow::Result<()> {
    let conversation = load_record(file)?;
    let report = engine(config)?.analyze_detailed(&conversation);

    if json {
        return print_json(&report);
    }

    let mut out = std::io::stdout().lock();
    for d in &report.disclosures {
        let status = match d.verified_by {
            Some(turn) => format!("verified at turn {turn}"),
            None => "NON-COMPLIANT".to_string(),
        };
        writeln!(out, "turn {}\t{}\t{}", d.index, status, d.text)?;
    }
    writeln!(
        out,
        "{} disclosures, {} non-compliant",
        report.disclosures.len(),
        report.violations().count()
    )?;
    Ok(())
}

pub fn detect(config: &CallscanConfig, text: &str, json: bool) -> anyhow::Result<()> {
    let findings = engine(config)?.detector().detect(text);

    if json {
        return print_json(&findings);
    }
    for (category, matches) in findings.iter() {
        for m in matches {
            println!("{category}\t{m}");
        }
    }
    if !findings.has_findings() {
        println!("no sensitive information found");
    }
    Ok(())
}

pub fn show_config(config: &CallscanConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
