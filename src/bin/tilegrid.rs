use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tilegrid", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pack a grid document and emit the tile geometry as JSON.
    Pack(PackArgs),
    /// Validate a grid document without packing it.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct PackArgs {
    /// Input grid JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the output JSON.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input grid JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Pack(args) => cmd_pack(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn cmd_pack(args: PackArgs) -> anyhow::Result<()> {
    let spec = tilegrid::GridSpec::from_path(&args.in_path)?;
    let packed = spec.pack()?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&packed)?
    } else {
        serde_json::to_string(&packed)?
    };

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json)
                .with_context(|| format!("write json '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    tilegrid::GridSpec::from_path(&args.in_path)?;
    eprintln!("ok {}", args.in_path.display());
    Ok(())
}
