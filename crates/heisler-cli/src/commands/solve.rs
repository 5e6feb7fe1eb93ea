use crate::cli::{ReportFormat, SolveArgs};
use crate::config::builder::build_config;
use crate::config::defaults::DefaultsConfig;
use crate::error::{CliError, Result};
use heisler::workflows::solve::{self, ConvectionReport};
use std::io::Write;
use tracing::info;

pub fn run(args: SolveArgs) -> Result<()> {
    let app = build_config(&args.request)?;

    info!(
        "Solving {} request from {:?}",
        app.sample.geometry, app.input_path
    );
    let report = solve::run(&app.sample, &app.solver)?;

    let format = args.format.unwrap_or(DefaultsConfig::default().format);
    let rendered = render(&report, format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!("Report written to {:?}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

pub fn render(report: &ConvectionReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => serde_json::to_string_pretty(report)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| CliError::Other(e.into())),
        ReportFormat::Toml => {
            toml::to_string_pretty(report).map_err(|e| CliError::Other(e.into()))
        }
    }
}
