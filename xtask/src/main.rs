use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "lifecell workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the LifeCell benchmarks and write a comparison report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Also benchmark with the `tracing` feature enabled
        #[arg(long, default_value_t = false)]
        with_tracing: bool,

        /// Directory the report is written to
        #[arg(long, default_value = "benchmark_results")]
        out: PathBuf,
    },
}

const BENCH: &str = "life_cell_benchmark";

/// The implementation every other one in a group is compared against.
const BASELINE_PREFIX: &str = "Option";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only, with_tracing, out } => {
            if !report_only {
                run_benchmarks(quick, with_tracing)?;
            }
            generate_report(&out)?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, with_tracing: bool) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", BENCH, "--release"])
        .status()
        .context("failed to spawn cargo build")?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    let mut runs = vec![("default", None)];
    if with_tracing {
        runs.push(("tracing", Some("tracing")));
    }

    for (baseline, feature) in runs {
        println!("\n>>> Benchmarking baseline: {baseline}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.arg("bench").arg("--bench").arg(BENCH);
        if let Some(feature) = feature {
            cmd.arg("--features").arg(feature);
        }

        // Args for the test runner (Criterion) go after --
        cmd.arg("--").arg("--save-baseline").arg(baseline);
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("failed to run bench for {baseline}"))?;
        if status.success() {
            println!("Finished {baseline} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: benchmark failed for {baseline}");
        }
    }

    Ok(())
}

/// Subset of criterion's `estimates.json`.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Subset of criterion's `benchmark.json`.
#[derive(Deserialize)]
struct BenchmarkInfo {
    group_id: String,
    function_id: Option<String>,
    /// e.g. `{"Elements": 1024}`; only element counts are used.
    throughput: Option<BTreeMap<String, u64>>,
}

#[derive(Serialize)]
struct Measurement {
    group: String,
    function: String,
    baseline: String,
    ops_per_sec: f64,
}

fn generate_report(out: &Path) -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut measurements = Vec::new();
    collect_results(criterion_dir, &mut measurements)?;
    measurements.sort_by(|a, b| {
        (&a.group, &a.function, &a.baseline).cmp(&(&b.group, &b.function, &b.baseline))
    });

    fs::create_dir_all(out)
        .with_context(|| format!("failed to create {}", out.display()))?;

    let json_path = out.join("report.json");
    fs::write(&json_path, serde_json::to_string_pretty(&measurements)?)?;

    let md_path = out.join("report.md");
    let mut file = fs::File::create(&md_path)?;
    writeln!(file, "# LifeCell Benchmark Report")?;

    // group -> baseline -> rows
    let mut groups: BTreeMap<(&str, &str), Vec<&Measurement>> = BTreeMap::new();
    for m in &measurements {
        groups.entry((m.group.as_str(), m.baseline.as_str())).or_default().push(m);
    }

    for ((group, baseline), rows) in groups {
        writeln!(file, "\n## {group} ({baseline})\n")?;
        writeln!(file, "| Implementation | Ops/s | vs {BASELINE_PREFIX} |")?;
        writeln!(file, "|---|---|---|")?;

        let reference = reference_ops(&rows);

        for m in rows {
            let rel = match reference {
                Some(r) if r > 0.0 => format!("**{:.2}x**", m.ops_per_sec / r),
                _ => "-".to_owned(),
            };
            writeln!(
                file,
                "| {} | {} | {} |",
                m.function,
                format_ops(m.ops_per_sec),
                rel
            )?;
        }
    }

    println!("Report written to {} and {}", md_path.display(), json_path.display());
    Ok(())
}

/// Throughput of the row every other row in a group is compared against.
fn reference_ops(rows: &[&Measurement]) -> Option<f64> {
    rows.iter()
        .find(|m| m.function.starts_with(BASELINE_PREFIX))
        .map(|m| m.ops_per_sec)
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000_000.0 {
        format!("{:.2}G", ops / 1_000_000_000.0)
    } else if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

fn collect_results(dir: &Path, results: &mut Vec<Measurement>) -> Result<()> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Ok(());
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        // Structure: .../<function>/<baseline>/estimates.json
        let Some(baseline_dir) = path.parent() else {
            continue;
        };
        let Some(baseline) = baseline_dir.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if matches!(baseline, "report" | "new" | "base" | "change") {
            continue;
        }

        let info_path = baseline_dir.join("benchmark.json");
        let Ok(info) = fs::read_to_string(&info_path) else {
            continue;
        };
        let info: BenchmarkInfo = serde_json::from_str(&info)
            .with_context(|| format!("malformed {}", info_path.display()))?;

        let estimates: Estimates = serde_json::from_str(&fs::read_to_string(&path)?)
            .with_context(|| format!("malformed {}", path.display()))?;

        let time_ns = estimates.mean.point_estimate;
        if time_ns <= 0.0 {
            continue;
        }
        let elements = info
            .throughput
            .as_ref()
            .and_then(|t| t.get("Elements"))
            .map_or(1.0, |&n| n as f64);

        results.push(Measurement {
            group: info.group_id,
            function: info.function_id.unwrap_or_default(),
            baseline: baseline.to_owned(),
            ops_per_sec: elements * 1e9 / time_ns,
        });
    }

    Ok(())
}
