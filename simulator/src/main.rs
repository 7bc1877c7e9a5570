use anyhow::Context;
use clap::{Parser, ValueEnum};
use gui_bridge::bridge::{gui_bind_address, GuiBridge};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use wavecore::render::MemorySink;
use wavecore::{CycleParams, TimedWaveParams, VisualizationSink, WaveSpec};
use workflow::config::WorkflowConfig;
use workflow::runner::{Runner, WorkflowResult};

mod gui_bridge;
mod workflow;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Whole cycles at a fixed number of samples
    Cycles,
    /// Time window at a sample rate
    Timed,
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Sine signal generator driver",
    allow_negative_numbers = true
)]
struct Args {
    /// Generate the configured wave once and print a summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Mode::Timed)]
    mode: Mode,
    #[arg(long, default_value_t = 1.0)]
    cycles: f64,
    #[arg(long, default_value_t = 100)]
    resolution: usize,
    /// Start of the time window in seconds
    #[arg(long, default_value_t = 0.0)]
    start: f64,
    /// End of the time window in seconds (excluded)
    #[arg(long, default_value_t = 1.0)]
    end: f64,
    #[arg(long, default_value_t = 1000.0)]
    sample_rate: f64,
    #[arg(long, default_value_t = 100.0)]
    frequency: f64,
    #[arg(long, default_value_t = 1.0)]
    amplitude: f64,
    /// Phase offset in radians
    #[arg(long, default_value_t = 0.0)]
    phase: f64,
    #[arg(long)]
    label: Option<String>,
    /// Write the generated samples to stdout as a JSON array (implies a single run)
    #[arg(long, default_value_t = false)]
    print_samples: bool,
    /// Keep the GUI bridge alive for the visualizer
    #[arg(long, default_value_t = false)]
    serve: bool,
}

impl Args {
    /// Whether the configured wave is generated once before (or instead of) serving.
    fn runs_once(&self) -> bool {
        self.offline || self.print_samples || !self.serve
    }

    fn wave_spec(&self) -> WaveSpec {
        match self.mode {
            Mode::Cycles => WaveSpec::Cycles(CycleParams {
                cycle_count: self.cycles,
                resolution: self.resolution,
            }),
            Mode::Timed => WaveSpec::Timed(TimedWaveParams {
                start_time: self.start,
                end_time: self.end,
                sample_rate: self.sample_rate,
                frequency: self.frequency,
                amplitude: self.amplitude,
                phase: self.phase,
            }),
        }
    }
}

/// Generates the configured wave and hands it to `sink`.
fn run_once(
    runner: &Runner,
    sink: &mut dyn VisualizationSink,
) -> anyhow::Result<WorkflowResult> {
    let result = runner.execute_configured()?;
    sink.render(&runner.payload(&result))
        .context("rendering generated signal")?;
    Ok(result)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = &args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.wave_spec(), args.label.clone())
    };

    let runner = Arc::new(Runner::new(workflow_config));
    let mut gui_bridge = GuiBridge::new(runner.clone());

    if args.serve {
        gui_bridge.serve(gui_bind_address());
    }

    if args.runs_once() {
        let mut memory_sink = MemorySink::new();
        let sink: &mut dyn VisualizationSink = if args.serve {
            &mut gui_bridge
        } else {
            &mut memory_sink
        };
        let result = run_once(&runner, sink)?;

        println!(
            "Offline run -> '{}' samples {}, rms {:.4}, peak {:.4}",
            result.label,
            result.signal.len(),
            result.rms,
            result.peak
        );
        for note in &result.notes {
            info!("{}", note);
        }
        if args.print_samples {
            println!("{}", serde_json::to_string(result.signal.samples())?);
        }
        gui_bridge.publish_status("Offline signal ready.");
    }

    if args.serve {
        gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    let metrics = runner.metrics();
    info!(
        "generated {} signals ({} samples), rejected {}",
        metrics.generated, metrics.samples, metrics.rejected
    );

    Ok(())
}
