//! Thin CLI layer: parse args, read the command list, and call into the pool.
use std::io::Read;

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use tracing::{info, warn};

use forq_core::pool::PoolConfig;
use forq_core::spawn::SpawnContext;
use forq_exec::check_programs;
use forq_exec::subprocess::subprocess_pool;
use forq_model::{JobSpec, OutputMode};
use forq_observe::{LoggerConfig, init_logger};

fn cli() -> Command {
    Command::new("forq")
        .about("Run a list of commands under a concurrency limit")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Command list, one per line (defaults to stdin)"),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .value_name("N")
                .default_value("1")
                .value_parser(clap::value_parser!(usize))
                .help("Maximum number of concurrently running commands"),
        )
        .arg(
            Arg::new("shell")
                .long("shell")
                .action(ArgAction::SetTrue)
                .help("Interpret each line with `sh -c` instead of splitting into argv"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Discard command stdout/stderr (default: inherit)"),
        )
        .arg(
            Arg::new("no-preflight")
                .long("no-preflight")
                .action(ArgAction::SetTrue)
                .help("Skip checking that programs resolve before running"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("FILTER")
                .default_value("info")
                .help("Log filter expression (e.g. info, forq_core=debug)"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_name("FORMAT")
                .default_value("text")
                .help("Log output format: text or json"),
        )
}

fn read_command_lines(file: Option<&String>) -> anyhow::Result<Vec<String>> {
    let raw = match file.map(String::as_str) {
        Some("-") | None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read command list from stdin")?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read command list from {path}"))?,
    };

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

fn build_jobs(lines: Vec<String>, shell: bool) -> anyhow::Result<Vec<JobSpec>> {
    lines
        .into_iter()
        .map(|line| {
            if shell {
                Ok(JobSpec::shell(line))
            } else {
                JobSpec::from_tokens(line.split_whitespace())
                    .with_context(|| format!("bad command line: {line:?}"))
            }
        })
        .collect()
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    let logger_cfg = LoggerConfig {
        level: matches
            .get_one::<String>("log-level")
            .expect("has default")
            .parse()?,
        format: matches
            .get_one::<String>("log-format")
            .expect("has default")
            .parse()?,
        ..Default::default()
    };
    init_logger(&logger_cfg)?;

    let shell = matches.get_flag("shell");
    let lines = read_command_lines(matches.get_one::<String>("file"))?;
    let jobs = build_jobs(lines, shell)?;
    if jobs.is_empty() {
        info!("no commands to run");
        return Ok(());
    }

    // PATH is read once here and handed down explicitly; the pool itself
    // never consults ambient process state.
    if !shell && !matches.get_flag("no-preflight") {
        let path = std::env::var("PATH").unwrap_or_default();
        check_programs(&jobs, &path)?;
    }

    let concurrency = *matches.get_one::<usize>("jobs").expect("has default");
    let output = if matches.get_flag("quiet") {
        OutputMode::Discard
    } else {
        OutputMode::Inherit
    };

    info!(jobs = jobs.len(), concurrency, %output, "starting pool");
    let pool = subprocess_pool(PoolConfig::new(concurrency), output);
    let outcomes = pool.run(jobs, &SpawnContext::new()).await?;

    let failed = outcomes.iter().filter(|o| !o.success()).count();
    for outcome in &outcomes {
        if outcome.success() {
            info!(command = %outcome.command, "ok");
        } else {
            warn!(command = %outcome.command, code = ?outcome.code, "failed");
        }
    }
    info!(total = outcomes.len(), failed, "pool finished");

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
