use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use impact_simulation::scenario_system::export::{write_csv, write_json};
use impact_simulation::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Asteroid impact and deflection scenario analysis"
)]
struct Cli {
    /// Analysis configuration (TOML). Defaults to the sample impactor over Karachi.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the burst-altitude draw (overrides the config seed)
    #[arg(long)]
    seed: Option<u64>,

    /// NeoWs feed document; the first usable object replaces the configured size and speed
    #[arg(long, conflicts_with = "random_threat")]
    neows: Option<PathBuf>,

    /// Analyse a randomly drawn threat instead of the configured one
    #[arg(long, default_value_t = false)]
    random_threat: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the report here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AnalysisConfig::default(),
    };

    let mut rng = match cli.seed.or(config.seed) {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut inputs = config.into_inputs();

    if let Some(path) = &cli.neows {
        let document = std::fs::read_to_string(path)?;
        let record = first_neows_record(&document)?;
        eprintln!(
            "Using NEO {} ({}): {:.1} m at {:.2} km/s",
            record.name, record.id, record.est_diameter_m, record.velocity_kms
        );
        inputs.impactor =
            record.impactor_parameters(inputs.impactor.density_kgm3, inputs.impactor.angle_deg);
    }

    if cli.random_threat {
        let threat = random_threat(&mut rng);
        inputs.impactor = threat.impactor;
        inputs.location = threat.location;
    }

    let report = ScenarioReport::build(inputs, &mut rng)?;

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout()),
    };

    match cli.format {
        OutputFormat::Text => {
            writeln!(writer, "{}", ReportSummary::from_report(&report).render())?;
            writer.flush()?;
        }
        OutputFormat::Json => {
            write_json(&report, &mut writer)?;
            writeln!(writer)?;
            writer.flush()?;
        }
        OutputFormat::Csv => write_csv(&report, writer)?,
    }

    if let Some(path) = &cli.output {
        println!("Report written to {}", path.display());
    }

    Ok(())
}
