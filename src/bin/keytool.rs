//! docdb-keytool
//!
//! Encode, decode and compare primitive-value keys from the command line.

use std::cmp::Ordering;

use clap::{Parser, Subcommand, ValueEnum};
use docdb_keys::{
    decode_key_sequence, ColumnId, Config, HybridTime, KeyToolError, OutputFormat,
    PrimitiveValue,
};
use tracing_subscriber::{fmt, EnvFilter};

/// docdb-keytool
#[derive(Parser, Debug)]
#[command(name = "docdb-keytool")]
#[command(about = "Inspect memcomparable primitive-value keys")]
#[command(version)]
struct Args {
    /// Print key bytes as hex instead of the escaped form
    #[arg(long)]
    hex: bool,

    /// Include source locations in error messages
    #[arg(long)]
    with_location: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a single value and print its key bytes
    Encode {
        /// Kind of value to encode
        kind: Kind,

        /// The value (omitted for null)
        value: Option<String>,
    },

    /// Decode hex key bytes holding one or more values
    Decode {
        /// Key bytes as hex
        key: String,
    },

    /// Compare two hex-encoded keys byte-wise
    Compare {
        left: String,
        right: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Null,
    String,
    Int64,
    Double,
    ArrayIndex,
    HybridTime,
    Hash,
    ColumnId,
    SystemColumnId,
}

fn main() {
    let args = Args::parse();

    let config = Config::builder()
        .output_format(if args.hex {
            OutputFormat::Hex
        } else {
            OutputFormat::Escaped
        })
        .include_status_location(args.with_location)
        .build();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("docdb-keytool v{}", docdb_keys::VERSION);

    if let Err(e) = run(args.command, &config) {
        let message = match &e {
            KeyToolError::Status(status) => {
                status.to_string_with_location(config.include_status_location)
            }
            other => other.to_string(),
        };
        tracing::error!("{}", message);
        eprintln!("error: {}", message);
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &Config) -> Result<(), KeyToolError> {
    match command {
        Commands::Encode { kind, value } => {
            let value = parse_value(kind, value.as_deref())?;
            let key = value.to_key_bytes();
            println!("{} => {}", value, config.output_format.render(key.as_slice()));
        }
        Commands::Decode { key } => {
            let bytes = hex::decode(key.trim())?;
            for (i, value) in decode_key_sequence(&bytes)?.iter().enumerate() {
                println!("[{}] {}", i, value);
            }
        }
        Commands::Compare { left, right } => {
            let left = hex::decode(left.trim())?;
            let right = hex::decode(right.trim())?;
            let left_values = decode_key_sequence(&left)?;
            let right_values = decode_key_sequence(&right)?;
            let symbol = match left.cmp(&right) {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            println!(
                "{} {} {}",
                render_values(&left_values),
                symbol,
                render_values(&right_values)
            );
        }
    }
    Ok(())
}

fn render_values(values: &[PrimitiveValue]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

fn parse_value(kind: Kind, raw: Option<&str>) -> Result<PrimitiveValue, KeyToolError> {
    if let Kind::Null = kind {
        return Ok(PrimitiveValue::null());
    }

    let raw = raw.ok_or_else(|| {
        KeyToolError::InvalidArgument(format!("a value is required for {:?}", kind))
    })?;

    let value = match kind {
        Kind::Null => PrimitiveValue::null(),
        Kind::String => PrimitiveValue::from(raw),
        Kind::Int64 => PrimitiveValue::int64(parse_number(raw)?),
        Kind::Double => PrimitiveValue::double(parse_number(raw)?),
        Kind::ArrayIndex => PrimitiveValue::array_index(parse_number(raw)?),
        Kind::HybridTime => {
            let ht = if raw.eq_ignore_ascii_case("max") {
                HybridTime::MAX
            } else {
                HybridTime::new(parse_number(raw)?)
            };
            PrimitiveValue::hybrid_time(ht)
        }
        Kind::Hash => PrimitiveValue::uint16_hash(parse_number(raw)?),
        Kind::ColumnId => PrimitiveValue::column_id(ColumnId::try_new(parse_number(raw)?)?),
        Kind::SystemColumnId => {
            PrimitiveValue::system_column_id(ColumnId::try_new(parse_number(raw)?)?)
        }
    };
    Ok(value)
}

fn parse_number<T: std::str::FromStr>(raw: &str) -> Result<T, KeyToolError>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| KeyToolError::InvalidArgument(format!("{:?}: {}", raw, e)))
}
