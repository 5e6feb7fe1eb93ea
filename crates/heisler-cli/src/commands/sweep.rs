use crate::cli::SweepArgs;
use crate::config::builder::build_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use heisler::core::io::csv::write_sweep_to_path;
use heisler::engine::progress::ProgressReporter;
use heisler::workflows::sweep::{self, SweepPlan};
use tracing::info;

pub fn run(args: SweepArgs) -> Result<()> {
    run_with_progress(args, CliProgressHandler::new())
}

fn run_with_progress(args: SweepArgs, progress_handler: CliProgressHandler) -> Result<()> {
    let app = build_config(&args.request)?;
    let plan = SweepPlan::linspace(args.axis.into(), args.start, args.end, args.steps)?;

    info!(
        "Sweeping {} over {} point(s) from {} to {}",
        plan.axis,
        plan.values.len(),
        args.start,
        args.end
    );

    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let points = sweep::run(&app.sample, &plan, &app.solver, &reporter)?;

    write_sweep_to_path(&args.output, &points)?;
    info!("Wrote {} point(s) to {:?}", points.len(), &args.output);
    eprintln!(
        "Wrote {} point(s) to {}",
        points.len(),
        args.output.display()
    );
    Ok(())
}
