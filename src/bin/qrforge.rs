use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use qr_forge::matrix::mask_select::mask_scores;
use qr_forge::render::save_png;
use qr_forge::{MaskPattern, QrEncoder, Version, byte_mode_encode, config, tables};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qrforge", version, about = "QR Forge CLI tools")]
struct Cli {
    /// Print pipeline diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text into a QR symbol
    Encode {
        #[arg(long)]
        text: String,
        /// Version 1-4 (defaults to QR_DEFAULT_VERSION, or the smallest that fits)
        #[arg(long)]
        version: Option<u8>,
        /// Mask 0-7 (defaults to the lowest-penalty mask)
        #[arg(long)]
        mask: Option<u8>,
        /// Write an image (format from extension)
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        scale: Option<usize>,
        /// Print the grid as text
        #[arg(long)]
        ascii: bool,
    },
    /// Print the penalty of every mask for a text
    Penalty {
        #[arg(long)]
        text: String,
        #[arg(long)]
        version: Option<u8>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Library diagnostics go through `log`; the subscriber picks them up
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("qr_forge=trace")
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    match cli.command {
        Command::Encode {
            text,
            version,
            mask,
            output,
            scale,
            ascii,
        } => encode_cmd(&text, version, mask, output, scale, ascii),
        Command::Penalty { text, version } => penalty_cmd(&text, version),
    }
}

fn resolve_version(text: &str, version: Option<u8>) -> anyhow::Result<Version> {
    let version = match version.or_else(config::default_version) {
        Some(v) => Version::new(v)?,
        None => tables::smallest_version_for(text.chars().count())?,
    };
    Ok(version)
}

fn encode_cmd(
    text: &str,
    version: Option<u8>,
    mask: Option<u8>,
    output: Option<PathBuf>,
    scale: Option<usize>,
    ascii: bool,
) -> anyhow::Result<()> {
    let version = resolve_version(text, version)?;
    let mut encoder = QrEncoder::new().version(version.number());
    if let Some(id) = mask {
        let Some(mask) = MaskPattern::from_id(id) else {
            bail!(qr_forge::QrError::InvalidMask(id));
        };
        encoder = encoder.mask(mask);
    }

    let symbol = encoder.encode(text)?;
    println!(
        "version={} size={} mask={} penalty={}",
        symbol.version.number(),
        symbol.modules.size(),
        symbol.mask_pattern.map(|m| m.id().to_string()).unwrap_or_else(|| "none".into()),
        symbol.penalty
    );

    if ascii {
        print!("{}", symbol.modules);
    }

    if let Some(path) = output {
        let scale = scale.unwrap_or_else(config::render_scale);
        save_png(&symbol.modules, &path, scale, config::quiet_zone())
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn penalty_cmd(text: &str, version: Option<u8>) -> anyhow::Result<()> {
    let version = resolve_version(text, version)?;
    let bits = byte_mode_encode(text, version.number())?;
    let scores = mask_scores(version, &bits);

    println!("Version {} ({} bits)", version.number(), bits.len());
    for (mask, score) in &scores {
        println!("  mask {}: penalty {}", mask.id(), score);
    }

    let best = qr_forge::matrix::mask_select::find_best_mask(version, &bits);
    println!("Selected mask {}", best.id());
    Ok(())
}
