//! RadLab CLI — catalog export and scripted evaluation commands.
//!
//! Commands:
//! - `catalog list` — list the built-in catalogs and their materials
//! - `catalog export` — dump a catalog as TOML or JSON
//! - `eval` — compute the seven-column performance table at given
//!   operating points (slider defaults where not overridden)

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};

use radlab_core::metric::format_value;
use radlab_core::{Catalog, Metric, OperatingPoint, PerformanceProfile};

#[derive(Parser)]
#[command(
    name = "radlab",
    about = "RadLab CLI — semiconductor material performance explorer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or export material catalogs.
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Compute the performance table for a catalog at chosen operating points.
    Eval {
        /// Built-in catalog: wide-bandgap or diamond-dopants.
        #[arg(long, default_value = "wide-bandgap")]
        catalog: String,

        /// Load the catalog from a TOML file instead.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Operating temperature (°C).
        #[arg(long)]
        temperature: Option<f64>,

        /// Operating voltage (V).
        #[arg(long)]
        voltage: Option<f64>,

        /// Operating frequency (GHz).
        #[arg(long)]
        frequency: Option<f64>,

        /// Total ionizing dose (rad(Si)).
        #[arg(long)]
        tid: Option<f64>,

        /// Displacement damage dose (n/cm²).
        #[arg(long)]
        ddd: Option<f64>,

        /// Linear energy transfer (MeV·cm²/mg).
        #[arg(long = "let")]
        let_threshold: Option<f64>,

        /// Displacement energy (eV).
        #[arg(long = "de")]
        displacement_energy: Option<f64>,

        /// Emit JSON instead of a text table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// List built-in catalogs and their materials.
    List,
    /// Dump a catalog to stdout.
    Export {
        /// Built-in catalog: wide-bandgap or diamond-dopants.
        #[arg(long, default_value = "wide-bandgap")]
        catalog: String,

        /// Load the catalog from a TOML file instead.
        #[arg(long)]
        file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = ExportFormat::Toml)]
        format: ExportFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportFormat {
    Toml,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog { command } => match command {
            CatalogCommands::List => cmd_list(),
            CatalogCommands::Export {
                catalog,
                file,
                format,
            } => cmd_export(&catalog, file.as_deref(), format),
        },
        Commands::Eval {
            catalog,
            file,
            temperature,
            voltage,
            frequency,
            tid,
            ddd,
            let_threshold,
            displacement_energy,
            json,
        } => {
            let catalog = resolve_catalog(&catalog, file.as_deref())?;
            let mut op = OperatingPoint::default_for(&catalog);
            let overrides = [
                (Metric::Temperature, temperature),
                (Metric::Voltage, voltage),
                (Metric::Frequency, frequency),
                (Metric::TotalIonizingDose, tid),
                (Metric::DisplacementDamageDose, ddd),
                (Metric::LinearEnergyTransfer, let_threshold),
                (Metric::DisplacementEnergy, displacement_energy),
            ];
            for (metric, value) in overrides {
                if let Some(v) = value {
                    // Same clamping the slider applies
                    op.set(&catalog, metric, v);
                }
            }
            cmd_eval(&catalog, &op, json)
        }
    }
}

fn cmd_list() -> Result<()> {
    for catalog in [Catalog::wide_bandgap(), Catalog::diamond_dopants()] {
        println!("{} ({} materials)", catalog.name, catalog.len());
        for name in catalog.material_names() {
            println!("  {name}");
        }
        println!();
    }
    Ok(())
}

fn cmd_export(name: &str, file: Option<&std::path::Path>, format: ExportFormat) -> Result<()> {
    let catalog = resolve_catalog(name, file)?;
    match format {
        ExportFormat::Toml => print!("{}", catalog.to_toml()?),
        ExportFormat::Json => println!("{}", serde_json::to_string_pretty(&catalog)?),
    }
    Ok(())
}

fn cmd_eval(catalog: &Catalog, op: &OperatingPoint, json: bool) -> Result<()> {
    let profile = PerformanceProfile::compute(catalog, op);

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!("{}", render_table(catalog, &profile));
    Ok(())
}

/// Text table: one row per material, one column per metric.
fn render_table(catalog: &Catalog, profile: &PerformanceProfile) -> String {
    let mut out = String::new();

    out.push_str(&format!("Catalog: {}\n", catalog.name));
    out.push_str("Operating points: ");
    let points: Vec<String> = Metric::ALL
        .iter()
        .map(|m| {
            format!(
                "{}={}",
                m.short_label(),
                format_value(profile.column(*m).operating_point)
            )
        })
        .collect();
    out.push_str(&points.join("  "));
    out.push_str("\n\n");

    out.push_str(&format!("{:<32}", "Material"));
    for metric in Metric::ALL {
        out.push_str(&format!("{:>8}", metric.short_label()));
    }
    out.push('\n');

    for (i, record) in catalog.materials.iter().enumerate() {
        out.push_str(&format!("{:<32}", record.name));
        for metric in Metric::ALL {
            let ratio = profile.column(metric).bars[i].ratio;
            out.push_str(&format!("{ratio:>8.3}"));
        }
        out.push('\n');
    }

    out
}

fn resolve_catalog(name: &str, file: Option<&std::path::Path>) -> Result<Catalog> {
    if let Some(path) = file {
        return Ok(Catalog::from_file(path)?);
    }
    match name.to_ascii_lowercase().as_str() {
        "wide-bandgap" | "wide_bandgap" => Ok(Catalog::wide_bandgap()),
        "diamond-dopants" | "diamond_dopants" => Ok(Catalog::diamond_dopants()),
        other => bail!("unknown catalog '{other}' (expected wide-bandgap or diamond-dopants)"),
    }
}
