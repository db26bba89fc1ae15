//! toldo CLI - generate, price and export awning geometry
//!
//! Reads visualization requests as JSON and writes renderer documents,
//! OBJ or STL files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use toldo::{
    calculate_price, export_bytes, visualize, visualize_quote, Config, ExportFormat, QuoteRecord,
    VisualizationRequest,
};
use toldo_geom::SystemClock;
use toldo_ir::{Dimensions, MaterialSelection, MaterialValue, RenderableExport, DEFAULT_HEIGHT};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "toldo")]
#[command(about = "Parametric geometry for awnings, covers, pergolas and tents", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate geometry from dimensions given on the command line
    Generate {
        /// Product type id (fixed-awning, pergola, ...)
        product_type: String,
        /// Width in meters
        #[arg(long)]
        width: f64,
        /// Length (projection) in meters
        #[arg(long)]
        length: f64,
        /// Height in meters
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: f64,
        /// Roof slope in degrees
        #[arg(long, default_value_t = 0.0)]
        angle: f64,
        /// Material selection, repeatable (key=value)
        #[arg(short, long = "material", value_parser = parse_material)]
        materials: Vec<(String, MaterialValue)>,
        /// Output format: json, obj or stl (default from config)
        #[arg(short, long)]
        format: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export a request or stored quote to a file
    Export {
        /// Request or quote JSON file
        input: PathBuf,
        /// Output file (format determined by extension: .json, .obj, .stl)
        output: PathBuf,
    },
    /// List the product catalog
    Products,
    /// List materials, colors and accessories
    Materials,
    /// Price a request
    Price {
        /// Request JSON file
        input: PathBuf,
    },
    /// Display a summary of a request's geometry
    Info {
        /// Request or quote JSON file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Generate {
            product_type,
            width,
            length,
            height,
            angle,
            materials,
            format,
            output,
        } => {
            let dims = Dimensions::new(width, length)
                .with_height(height)
                .with_angle(angle);
            let mut request = VisualizationRequest::new(product_type, &dims);
            request.materials = materials.into_iter().collect::<MaterialSelection>();

            let format = match format {
                Some(name) => ExportFormat::from_name(&name)?,
                None => config.export.format()?,
            };
            let export = visualize(&request, &SystemClock)?;
            let bytes = export_bytes(&export, format, config.export.pretty)?;
            write_output(output.as_deref(), &bytes)?;
        }
        Commands::Export { input, output } => {
            let format = ExportFormat::from_path(&output)?;
            let export = load_and_visualize(&input)?;
            let bytes = export_bytes(&export, format, config.export.pretty)?;
            std::fs::write(&output, bytes)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Exported {} to {}", format, output.display());
        }
        Commands::Products => {
            for p in toldo::products() {
                println!(
                    "{:<22} {:>8.2}/m²  {}",
                    p.id, p.base_price, p.description
                );
            }
        }
        Commands::Materials => {
            println!("{}", serde_json::to_string_pretty(&toldo::materials())?);
        }
        Commands::Price { input } => {
            let request = read_request(&input)?;
            let price = calculate_price(&request, &config.pricing)?;
            println!("{}", serde_json::to_string_pretty(&price)?);
        }
        Commands::Info { input } => {
            let export = load_and_visualize(&input)?;
            show_info(&export);
        }
    }

    Ok(())
}

/// Install a stderr logger. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse `key=value`; `true`/`false` and numbers keep their JSON type.
fn parse_material(s: &str) -> Result<(String, MaterialValue), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty material key in '{s}'"));
    }
    let value = match value {
        "true" => MaterialValue::Flag(true),
        "false" => MaterialValue::Flag(false),
        other => match serde_json::from_str::<serde_json::Number>(other) {
            Ok(n) => MaterialValue::Number(n),
            Err(_) => MaterialValue::Text(other.to_string()),
        },
    };
    Ok((key.to_string(), value))
}

fn read_request(path: &Path) -> Result<VisualizationRequest> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(VisualizationRequest::from_json(&json)?)
}

/// Visualize a file holding either a stored quote (has an `id`) or a request.
fn load_and_visualize(path: &Path) -> Result<RenderableExport> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    if value.get("id").is_some() {
        let quote: QuoteRecord = serde_json::from_value(value)?;
        Ok(visualize_quote(&quote, &SystemClock)?)
    } else {
        Ok(visualize(&VisualizationRequest::from_json(&json)?, &SystemClock)?)
    }
}

fn write_output(output: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            if !bytes.ends_with(b"\n") {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

fn show_info(export: &RenderableExport) {
    let m = &export.measurements;
    println!("Product: {}", export.metadata.product_type);
    println!("Vertices: {}", export.geometry.vertices.len());
    println!("Faces: {}", export.geometry.faces.len());
    println!();
    println!("Measurements:");
    println!("  {:.2} x {:.2} m, height {:.2} m, slope {}°", m.width, m.length, m.height, m.angle);
    println!("  area {:.2} m² (sloped {:.2} m²)", m.area, m.real_area);
    println!("  perimeter {:.2} m, diagonal {:.2} m", m.perimeter, m.diagonal);

    if !export.features.is_empty() {
        println!();
        println!("Features:");
        for (name, value) in &export.features {
            println!("  {name}: {}", serde_json::to_string(value).unwrap_or_default());
        }
    }

    if let Some(quote) = &export.quote_info {
        println!();
        println!("Quote #{}: {:.2} ({})", quote.id, quote.total_price, quote.status);
    }
}
