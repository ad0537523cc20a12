use clap::{Parser, Subcommand, ValueEnum};
use sf_app::{
    AppResult, RunOptions, RunProgressEvent, RunRequest, RunStage, RunTimingSummary, query,
    run_service,
};
use sf_results::HistoryField;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

#[derive(Parser)]
#[command(name = "sf-cli")]
#[command(about = "StratoFlow CLI - 1-D stratified atmosphere solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a run config
    Validate {
        /// Path to the config file (.yaml, .yml or .json)
        config_path: PathBuf,
    },
    /// Write the reference config; the format follows the extension
    Template {
        /// Destination path (.yaml, .yml or .json)
        path: PathBuf,
    },
    /// Run a simulation
    Run {
        /// Path to the config file
        config_path: PathBuf,
        /// Output directory for histories and manifest
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Show details of a finished run
    ShowRun {
        /// Run output directory
        run_dir: PathBuf,
    },
    /// Export one recorded profile as CSV
    ExportProfile {
        /// Run output directory
        run_dir: PathBuf,
        /// Field to export
        #[arg(value_enum)]
        field: FieldArg,
        /// Snapshot index (defaults to the last one)
        #[arg(long)]
        row: Option<usize>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldArg {
    Rho,
    Vel,
    Temp,
    Totale,
}

impl From<FieldArg> for HistoryField {
    fn from(f: FieldArg) -> Self {
        match f {
            FieldArg::Rho => HistoryField::Density,
            FieldArg::Vel => HistoryField::Velocity,
            FieldArg::Temp => HistoryField::Temperature,
            FieldArg::Totale => HistoryField::TotalEnergy,
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Template { path } => cmd_template(&path),
        Commands::Run { config_path, out } => cmd_run(&config_path, &out),
        Commands::ShowRun { run_dir } => cmd_show_run(&run_dir),
        Commands::ExportProfile {
            run_dir,
            field,
            row,
            output,
        } => cmd_export_profile(&run_dir, field.into(), row, output.as_deref()),
    }
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating config: {}", config_path.display());
    let config = sf_app::load_config(config_path)?;
    sf_app::validate_config(&config)?;
    println!("✓ Config is valid: {}", config.name);
    Ok(())
}

fn cmd_template(path: &Path) -> AppResult<()> {
    let config = sf_app::write_template(path)?;
    println!("✓ Wrote '{}' to {}", config.name, path.display());
    Ok(())
}

fn cmd_run(config_path: &Path, out: &Path) -> AppResult<()> {
    println!("Running config: {}", config_path.display());

    let request = RunRequest {
        config_path,
        out_dir: out,
        options: RunOptions::default(),
    };

    let mut last_emit = Instant::now();
    let mut last_fraction = -1.0f64;
    let response = run_service::execute_run_with_progress(
        &request,
        Some(&mut |event| {
            let fraction = event
                .transient
                .as_ref()
                .map(|t| t.fraction_complete)
                .unwrap_or(-1.0);
            let emit_now = event.stage != RunStage::RunningSimulation
                || (fraction - last_fraction).abs() >= 0.005
                || last_emit.elapsed().as_millis() >= 100;
            if emit_now {
                render_cli_progress(&event);
                if fraction >= 0.0 {
                    last_fraction = fraction;
                }
                last_emit = Instant::now();
            }
        }),
    )?;
    clear_progress_line();

    println!("✓ Simulation completed: {}", response.run_id);
    println!("  Output: {}", out.display());
    print_timing_summary(&response.timing);
    println!(
        "  Final time: {:.4e} s (last dt {:.3e} s)",
        response.manifest.final_time_s, response.manifest.last_dt_s
    );

    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(120));
    let _ = io::stdout().flush();
}

fn render_cli_progress(event: &RunProgressEvent) {
    debug!(stage = event.stage.label(), elapsed = event.elapsed_wall_s, "progress");
    match (&event.stage, &event.transient) {
        (RunStage::RunningSimulation, Some(t)) => {
            let width = 28usize;
            let filled = ((t.fraction_complete * width as f64).round() as usize).min(width);
            let bar = format!(
                "{}{}",
                "#".repeat(filled),
                "-".repeat(width.saturating_sub(filled))
            );
            print!(
                "\r[{}] {:>6.2}%  t={:.3e}/{:.3e}s  step={}  dt={:.2e}s  elapsed={:.1}s",
                bar,
                t.fraction_complete * 100.0,
                t.sim_time_s,
                t.t_max_s,
                t.step,
                t.dt_s,
                event.elapsed_wall_s
            );
            let _ = io::stdout().flush();
        }
        _ => {
            let spinner = ['|', '/', '-', '\\'];
            let spin_idx = ((event.elapsed_wall_s * 10.0) as usize) % spinner.len();
            let mut line = format!(
                "\r{} {}  elapsed={:.2}s",
                spinner[spin_idx],
                event.stage.label(),
                event.elapsed_wall_s
            );
            if let Some(msg) = &event.message {
                line.push_str(&format!("  {}", msg));
            }
            print!("{}", line);
            let _ = io::stdout().flush();
        }
    }
}

fn print_timing_summary(timing: &RunTimingSummary) {
    let total = timing.total_time_s.max(1.0e-12);
    let compile_pct = 100.0 * timing.compile_time_s / total;
    let init_pct = 100.0 * timing.init_time_s / total;
    let solve_pct = 100.0 * timing.solve_time_s / total;
    let save_pct = 100.0 * timing.save_time_s / total;

    println!("\nTiming summary:");
    println!(
        "  Compile: {:.3}s ({:.1}%)",
        timing.compile_time_s, compile_pct
    );
    println!("  Init:    {:.3}s ({:.1}%)", timing.init_time_s, init_pct);
    println!("  Solve:   {:.3}s ({:.1}%)", timing.solve_time_s, solve_pct);
    println!("  Save:    {:.3}s ({:.1}%)", timing.save_time_s, save_pct);
    println!("  Total:   {:.3}s", timing.total_time_s);
    println!("  Steps:   {}", timing.steps);
    println!("  Records: {}", timing.records);
}

fn cmd_show_run(run_dir: &Path) -> AppResult<()> {
    println!("Loading run: {}", run_dir.display());

    let summary = query::get_run_summary(run_dir)?;
    let m = &summary.manifest;

    println!("\nRun Summary:");
    println!("  Run ID:    {}", m.run_id);
    println!("  Config:    {}", m.config_name);
    println!("  Timestamp: {}", m.timestamp);
    println!("  Solver:    {}", m.solver_version);
    println!("  Cells:     {} interior + 2x{} ghost", m.n_pts, m.n_gcs);
    println!("  Steps:     {}", m.steps);
    println!("  Final time: {:.4e} s", m.final_time_s);
    println!("  Last dt:    {:.3e} s", m.last_dt_s);
    println!(
        "  t0={} K  mass={:.4e} kg  r0={:.4e} kg/m^3  g={:.4} m/s^2",
        m.constants.t0, m.constants.mass, m.constants.r0, m.constants.gravity
    );

    println!("\nHistories:");
    for (field, rows) in &summary.history_rows {
        println!("  {:<11} {} rows", field.file_name(), rows);
    }

    Ok(())
}

fn cmd_export_profile(
    run_dir: &Path,
    field: HistoryField,
    row: Option<usize>,
    output: Option<&Path>,
) -> AppResult<()> {
    let profile = query::extract_profile(run_dir, field, row)?;

    // Build CSV
    let mut csv = String::from("x_m,value\n");
    for (x, v) in &profile {
        csv.push_str(&format!("{},{}\n", x, v));
    }

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} cells of {} to {}",
            profile.len(),
            field.file_name(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}
