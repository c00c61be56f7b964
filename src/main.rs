use std::{io, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use stg_plots::{
    constants::{charts, files},
    rename_extension, BatchPlotter, BatchReport, PlotConfig, ThemeVariant,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stg_plots")]
#[command(about = "Epoch charts for ant colony scheduling results", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render charts for every result table under a directory tree
    Render {
        root: PathBuf,

        #[command(flatten)]
        options: RenderOptions,
    },
    /// Render charts for the result tables directly inside one directory
    RenderDir {
        dir: PathBuf,

        #[command(flatten)]
        options: RenderOptions,
    },
    /// Rename result files by suffix, e.g. `.stg` to `.csv`
    Rename {
        root: PathBuf,

        #[arg(long, default_value = files::RENAME_FROM)]
        from: String,

        #[arg(long, default_value = files::RENAME_TO)]
        to: String,
    },
}

#[derive(Args)]
struct RenderOptions {
    #[arg(long, default_value = files::DATA_SUFFIX)]
    suffix: String,

    #[arg(long, default_value = charts::CHART_IMAGE_FORMAT)]
    format: String,

    #[arg(long, default_value_t = charts::CHART_DIMS.0)]
    width: u32,

    #[arg(long, default_value_t = charts::CHART_DIMS.1)]
    height: u32,

    #[arg(long, value_enum, default_value_t = ThemeVariant::Light)]
    theme: ThemeVariant,

    /// Abort on the first table that fails instead of skipping it
    #[arg(long, default_value_t = false)]
    fail_fast: bool,
}

impl RenderOptions {
    fn into_config(self) -> PlotConfig {
        let mut style = self.theme.style();
        style.dimensions = (self.width, self.height);

        PlotConfig {
            data_suffix: self.suffix,
            image_format: self.format,
            fail_fast: self.fail_fast,
            style,
            ..PlotConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Render { root, options } => {
            let plotter = BatchPlotter::new(options.into_config());
            let report = plotter
                .scan_and_render(&root)
                .with_context(|| format!("failed to render {}", root.display()))?;
            finish(report)
        }
        Commands::RenderDir { dir, options } => {
            let plotter = BatchPlotter::new(options.into_config());
            let report = plotter
                .render_directory(&dir)
                .with_context(|| format!("failed to render {}", dir.display()))?;
            finish(report)
        }
        Commands::Rename { root, from, to } => {
            let renamed = rename_extension(&root, &from, &to)
                .with_context(|| format!("failed to rename files under {}", root.display()))?;

            for rename in &renamed {
                println!(
                    "{} {} -> {}",
                    "Renamed:".green(),
                    rename.from.display(),
                    rename.to.display()
                );
            }
            println!("{} {} file(s)", "Done".green(), renamed.len());
            Ok(())
        }
    }
}

fn finish(report: BatchReport) -> Result<()> {
    for rendered in &report.rendered {
        println!(
            "{} {} ({}, slope {:.2})",
            "Plots generated for:".green(),
            rendered.source.display(),
            rendered.trend.direction,
            rendered.trend.slope
        );
    }

    for (path, err) in &report.failures {
        println!("{} {}: {err}", "Skipped:".red(), path.display());
    }

    if !report.is_clean() {
        bail!(
            "{} of {} result table(s) failed",
            report.failures.len(),
            report.failures.len() + report.rendered.len()
        );
    }

    println!("{} {} table(s)", "Done".green(), report.rendered.len());
    Ok(())
}
