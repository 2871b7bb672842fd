use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use float_acc::{Ieee754, Native, PrecisionReport, DEFAULT_TOLERANCE};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "float-acc-cli")]
#[command(about = "Machine epsilon of the native and supported float formats")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the native format's epsilon as a power of two
    Acc {
        /// Also print the halving count down to underflow
        #[arg(long)]
        halving: bool,
    },
    /// Print (or write) per-format precision as JSON
    Report {
        /// Write JSON here plus a provenance sidecar instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Relative comparison of two numbers
    Compare {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
        tol: f64,
    },
}

/// JSON row for one format.
#[derive(Debug, Serialize)]
struct ReportRow {
    format: &'static str,
    width: u32,
    mantissa_bits: u64,
    underflow_steps: u64,
    min_positive_exponent: i64,
    epsilon: f64,
    native: bool,
}

impl From<&PrecisionReport> for ReportRow {
    fn from(r: &PrecisionReport) -> Self {
        Self {
            format: r.format,
            width: r.width,
            mantissa_bits: r.mantissa_bits,
            underflow_steps: r.underflow_steps,
            min_positive_exponent: r.min_positive_exponent(),
            epsilon: r.epsilon,
            native: r.format == Native::NAME,
        }
    }
}

/// Logs go to stderr; stdout carries only command output.
fn log_subscriber() -> impl tracing::Subscriber + Send + Sync {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .finish()
}

fn main() -> Result<()> {
    tracing::subscriber::set_global_default(log_subscriber())?;
    let cmd = Cmd::parse();
    let mut stdout = io::stdout().lock();
    match cmd.action {
        Action::Acc { halving } => acc(halving, &mut stdout),
        Action::Report { out } => report(out.as_deref(), &mut stdout),
        Action::Compare { a, b, tol } => compare(a, b, tol, &mut stdout),
    }
}

fn acc(halving: bool, w: &mut impl Write) -> Result<()> {
    let size = float_acc::float_acc();
    tracing::info!(native = Native::NAME, size, "float_acc");
    writeln!(
        w,
        "This build's native '{}' has the following epsilon precision:",
        Native::NAME
    )?;
    writeln!(w, "2^(-{size})")?;
    if halving {
        let steps = float_acc::float_underflow_steps();
        tracing::info!(steps, "float_underflow_steps");
        writeln!(w, "Smallest positive value: 2^(-{steps})")?;
    }
    writeln!(w, "Supported formats:")?;
    for r in PrecisionReport::all() {
        writeln!(w, "{r}")?;
    }
    Ok(())
}

fn report_rows() -> Vec<ReportRow> {
    PrecisionReport::all().iter().map(ReportRow::from).collect()
}

fn report(out: Option<&Path>, w: &mut impl Write) -> Result<()> {
    let rows = report_rows();
    let body = serde_json::to_string_pretty(&rows)?;
    let Some(out) = out else {
        writeln!(w, "{body}")?;
        return Ok(());
    };
    tracing::info!(out = %out.display(), formats = rows.len(), "report");
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, body).with_context(|| format!("writing {}", out.display()))?;

    let formats: Vec<_> = rows.iter().map(|r| r.format).collect();
    let payload = provenance::Payload::new("report", serde_json::json!({ "formats": formats }));
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn compare(a: f64, b: f64, tol: f64, w: &mut impl Write) -> Result<()> {
    let equal = float_acc::approx_eq(a, b, tol);
    tracing::info!(a, b, tol, equal, "compare");
    writeln!(w, "{equal}")?;
    Ok(())
}
