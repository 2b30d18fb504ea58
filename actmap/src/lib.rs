//! Command line tool showing how the actions of an agent correlate with
//! emulator frameskips.
//!
//! ```text
//! actmap stats.json --cli
//! actmap stats.yaml --output heatmap.png
//! ```
use actmap_core::{
    Heatmap, HeatmapConfig, HeatmapError, HeatmapPanel, ObservationRecord, RecordFormat,
    TextRenderer,
};
use actmap_plot::PlotRenderer;
use anyhow::Result;
use clap::Parser;
use log::info;
use std::{io::Write, path::PathBuf};

/// Arguments of the command.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Observation record with `frameskips` and `actions` (JSON, YAML, bincode or CSV)
    pub input_filename: PathBuf,

    /// Print the heatmap as text instead of opening a window
    #[arg(long, default_value_t = false)]
    pub cli: bool,

    /// Format of the record, inferred from the file extension if omitted
    #[arg(long)]
    pub format: Option<RecordFormat>,

    /// YAML file with the heatmap configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of decimal places of text cells
    #[arg(long)]
    pub precision: Option<usize>,

    /// Write the graphical heatmap to this PNG file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the configuration in effect
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

impl Args {
    /// The configuration file, if any, overridden by command line flags.
    pub fn heatmap_config(&self) -> Result<HeatmapConfig> {
        let mut config = match &self.config {
            Some(path) => HeatmapConfig::load(path)?,
            None => HeatmapConfig::default(),
        };
        if let Some(precision) = self.precision {
            config = config.precision(precision);
        }
        Ok(config)
    }

    fn load_record(&self) -> Result<ObservationRecord, HeatmapError> {
        match self.format {
            Some(format) => ObservationRecord::load_with_format(&self.input_filename, format),
            None => ObservationRecord::load(&self.input_filename),
        }
    }
}

/// Process exit code for an error returned by [`run`].
pub fn exit_code(e: &anyhow::Error) -> i32 {
    e.downcast_ref::<HeatmapError>()
        .map(HeatmapError::exit_code)
        .unwrap_or(1)
}

/// Loads the record, builds the heatmap and renders it.
///
/// Text output goes to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let config = args.heatmap_config()?;
    if args.show_config {
        writeln!(out, "{}", serde_yaml::to_string(&config)?)?;
    }

    let record = args.load_record()?;
    let heatmap = Heatmap::from_record(&record, &config)?;
    let panels = heatmap.panels(&config)?;

    if let Some(path) = &args.output {
        PlotRenderer::new(&config).save(&panels, path)?;
        info!("Saved heatmap to {:?}", path);
    }

    if args.cli {
        let text = heatmap.render(&mut TextRenderer::new(config.precision), &config)?;
        writeln!(out, "{}", text)?;
        Ok(())
    } else {
        show(args, &config, &panels)
    }
}

#[cfg(feature = "window")]
fn show(args: &Args, config: &HeatmapConfig, panels: &[HeatmapPanel]) -> Result<()> {
    use actmap_core::Renderer;
    use actmap_plot::HeatmapWindow;

    let image = PlotRenderer::new(config).render(panels)?;
    HeatmapWindow::new(args.input_filename.to_string_lossy()).show(&image)
}

#[cfg(not(feature = "window"))]
fn show(args: &Args, _config: &HeatmapConfig, _panels: &[HeatmapPanel]) -> Result<()> {
    anyhow::ensure!(
        args.output.is_some(),
        "Built without the `window` feature, use --cli or --output"
    );
    Ok(())
}
