use std::{error::Error, path::PathBuf};

use clap::Parser;
use log::info;

use segment_nn::{
    data::seven_segment,
    render::{render_digit, render_side_by_side},
    train::StepPrompt,
    RunConfig, Trainer,
};

/// Train a sigmoid network to drive a seven-segment display from 4-bit input,
/// then draw what it learned.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON run configuration; flags below override its fields
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Number of full-batch training iterations
    #[arg(short, long, value_name = "INT")]
    iterations: Option<usize>,
    /// Seed for weight initialization
    #[arg(short, long)]
    seed: Option<u64>,
    /// Layer widths, input first
    #[arg(long, value_delimiter = ',', value_name = "SIZES")]
    layers: Option<Vec<usize>>,
    /// One learning rate per weight matrix, or a single shared rate
    #[arg(long, value_delimiter = ',', value_name = "RATES")]
    learning_rates: Option<Vec<f64>>,
    /// Debug progress interval (see RUST_LOG)
    #[arg(long, value_name = "INT")]
    log_every: Option<usize>,
    /// Pause after every iteration until Enter is pressed
    #[arg(long)]
    step: bool,
    /// Draw all digits on one row
    #[arg(long)]
    side_by_side: bool,
    /// Write the trained weights to a JSON file
    #[arg(long, value_name = "PATH")]
    save_weights: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> RunConfig {
        RunConfig {
            layer_sizes: self.layers.clone(),
            learning_rates: self.learning_rates.clone(),
            iterations: self.iterations,
            seed: self.seed,
            log_every: self.log_every,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Cli::parse();

    let file_config = match &args.config {
        Some(path) => RunConfig::load_json(&path.to_string_lossy())?,
        None => RunConfig::default(),
    };
    let (spec, config) = file_config.merge(args.overrides()).resolve()?;
    let iterations = config.iterations;

    let mut trainer = Trainer::initialize(&spec, seven_segment::digits()?, config)?;

    let error = if args.step {
        let mut prompt = StepPrompt::new(std::io::stdin().lock(), std::io::stdout().lock());
        trainer.train_with(iterations, |stats| prompt.on_iteration(stats))?
    } else {
        trainer.train(iterations)?
    };

    let outputs = trainer.forward()?.into_output();
    if args.side_by_side {
        println!("{}", render_side_by_side(&outputs, 2)?);
    } else {
        for values in outputs.iter_rows() {
            println!("{}", render_digit(values)?);
            println!("{}", "-".repeat(20));
        }
    }
    println!("Average error: {error}");

    if let Some(path) = &args.save_weights {
        trainer.network().save_json(&path.to_string_lossy())?;
        info!("saved weights to {}", path.display());
    }

    Ok(())
}
