use aim_config::config::{self, NumberFormat, RangeTable, VelocityParameterCatalog};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

#[derive(Parser)]
#[command(name = "aim_config")]
#[command(about = "Inspect the simulator's shared constants and velocity tables")]
struct Cli {
    /// Decimal places used when printing table values
    #[arg(long, value_enum, default_value_t = Precision::One, global = true)]
    precision: Precision,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up both safety parameters for a velocity
    Lookup {
        #[arg(allow_negative_numbers = true)]
        velocity: f64,
    },
    /// Print every bucket of both velocity tables
    Tables,
    /// Print the unit constants
    Constants,
}

#[derive(Clone, Copy, ValueEnum)]
enum Precision {
    Zero,
    One,
    Two,
    Ten,
}

impl Precision {
    fn number_format(self) -> NumberFormat {
        match self {
            Precision::Zero => config::ZERO_DEC,
            Precision::One => config::ONE_DEC,
            Precision::Two => config::TWO_DEC,
            Precision::Ten => config::TEN_DEC,
        }
    }
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn,aim_config=info");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let format = cli.precision.number_format();

    match cli.command {
        Command::Lookup { velocity } => run_lookup(velocity, format),
        Command::Tables => run_tables(format),
        Command::Constants => {
            print_constants();
            Ok(())
        }
    }
}

fn run_lookup(velocity: f64, format: NumberFormat) -> Result<()> {
    let catalog = VelocityParameterCatalog::new().context("Failed to build velocity tables")?;

    let buffer = catalog
        .edge_tile_time_buffer(velocity)
        .with_context(|| format!("Edge tile time buffer lookup failed for velocity {}", velocity))?;
    let distance = catalog
        .minimum_following_distance(velocity)
        .with_context(|| {
            format!("Minimum following distance lookup failed for velocity {}", velocity)
        })?;

    info!("Looked up safety parameters for velocity {}", velocity);
    println!("Velocity: {}", velocity);
    println!("Edge tile time buffer: {}", format.format(buffer));
    println!("Minimum following distance: {}", format.format(distance));
    Ok(())
}

fn run_tables(format: NumberFormat) -> Result<()> {
    let catalog = VelocityParameterCatalog::new().context("Failed to build velocity tables")?;

    print_table(&catalog.edge_tile_time_buffer, format);
    println!();
    print_table(&catalog.minimum_following_distance, format);
    Ok(())
}

fn print_table(table: &RangeTable<f64>, format: NumberFormat) {
    println!("=== {} ===", table.name());
    for entry in table.entries() {
        println!(
            "[{}, {}] -> {}",
            config::ZERO_DEC.format(entry.range.lower()),
            config::ZERO_DEC.format(entry.range.upper()),
            format.format(entry.value)
        );
    }
}

fn print_constants() {
    println!("Seconds per hour: {}", config::NUM_OF_SECONDS_PER_HOUR);
    println!("Bits per byte: {}", config::BITS_PER_BYTE);
    println!("Bytes per KB: {}", config::BYTES_PER_KB);
    println!("Bits per KB: {}", config::BITS_PER_KB);
    println!("Bytes per MB: {}", config::BYTES_PER_MB);
    println!("Integer size: {} bits", config::INTEGER_SIZE);
    println!("Double size: {} bits", config::DOUBLE_SIZE);
    println!("Boolean size: {} bits", config::BOOLEAN_SIZE);
    println!("Enum size: {} bits", config::ENUM_SIZE);
    println!("Double equal precision: {:e}", config::DOUBLE_EQUAL_PRECISION);
    println!("Double equal weak precision: {:e}", config::DOUBLE_EQUAL_WEAK_PRECISION);
}
