//! lsb-stego - hide data in the low bits of an image.
//!
//! Reads any image the `image` crate understands, writes only lossless
//! formats (PNG, BMP, TIFF).

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{info, LevelFilter};
use lsb_stego::codec::CapacityReport;
use lsb_stego::raster::io;
use lsb_stego::{CodecConfig, LsbCodec, StopRule};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lsb-stego")]
#[command(author, version)]
#[command(
    about = "Hide and recover data in image color channel LSBs",
    long_about = "Embeds a payload into the least significant bits of an image's red, green and blue channels, terminated by 8 zero bits."
)]
struct Cli {
    /// Codec configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed data into an image
    Encode {
        /// Cover image
        image: PathBuf,

        /// Output image (.png, .bmp or .tiff)
        output: PathBuf,

        /// Input file to embed
        #[arg(long, conflicts_with = "data")]
        input: Option<PathBuf>,

        /// String data to embed
        #[arg(long, conflicts_with = "input")]
        data: Option<String>,

        /// Fail instead of truncating when the payload does not fit
        #[arg(long)]
        strict: bool,
    },

    /// Extract data from an image
    Decode {
        /// Encoded image
        image: PathBuf,

        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the payload as hex
        #[arg(long)]
        hex: bool,

        /// Only stop on a byte-aligned zero byte
        #[arg(long)]
        aligned_stop: bool,
    },

    /// Show how much data an image can hold
    Capacity {
        /// Image to inspect
        image: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    Builder::new()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => CodecConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CodecConfig::default(),
    };

    match cli.command {
        Commands::Encode {
            image,
            output,
            input,
            data,
            strict,
        } => cmd_encode(config, &image, &output, input, data, strict),

        Commands::Decode {
            image,
            output,
            hex,
            aligned_stop,
        } => cmd_decode(config, &image, output, hex, aligned_stop),

        Commands::Capacity { image, json } => cmd_capacity(&image, json),
    }
}

fn cmd_encode(
    mut config: CodecConfig,
    image: &Path,
    output: &Path,
    input: Option<PathBuf>,
    data: Option<String>,
    strict: bool,
) -> anyhow::Result<()> {
    // Fail on the output format before doing any work.
    io::lossless_format(output)?;

    if strict {
        config.strict_capacity = true;
    }

    let payload = match (input, data) {
        (Some(path), None) => {
            std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?
        }
        (None, Some(s)) => s.into_bytes(),
        (None, None) => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
        (Some(_), Some(_)) => bail!("--input and --data are mutually exclusive"),
    };

    let cover = io::load(image).with_context(|| format!("loading {}", image.display()))?;
    let stego = LsbCodec::new(config).encode(&cover, &payload)?;
    io::save(&stego, output)?;

    info!(
        "Embedded {} bytes into {} ({}x{})",
        payload.len(),
        output.display(),
        stego.width(),
        stego.height()
    );

    Ok(())
}

fn cmd_decode(
    mut config: CodecConfig,
    image: &Path,
    output: Option<PathBuf>,
    hex: bool,
    aligned_stop: bool,
) -> anyhow::Result<()> {
    if aligned_stop {
        config.stop_rule = StopRule::AlignedZeroByte;
    }

    let stego = io::load(image).with_context(|| format!("loading {}", image.display()))?;
    let payload = LsbCodec::new(config).decode(&stego)?;

    let rendered = if hex {
        let mut s = hex::encode(&payload);
        s.push('\n');
        s.into_bytes()
    } else {
        payload
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &rendered)?;
            info!("Wrote {} bytes to {}", rendered.len(), path.display());
        }
        None => {
            std::io::stdout().write_all(&rendered)?;
        }
    }

    Ok(())
}

fn cmd_capacity(image: &Path, json: bool) -> anyhow::Result<()> {
    let buffer = io::load(image).with_context(|| format!("loading {}", image.display()))?;
    let report = CapacityReport::new(buffer.width(), buffer.height());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Image Capacity");
    println!("==============");
    println!("Dimensions:       {}x{}", report.width, report.height);
    println!("Capacity:         {} bits", report.capacity_bits);
    println!("Max payload:      {} bytes", report.max_payload_bytes);

    Ok(())
}
