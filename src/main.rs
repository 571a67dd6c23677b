use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use checkmark_icons::commands::{generate, inspect};
use checkmark_icons::config::IconSet;
use checkmark_icons::IconError;

#[derive(Parser)]
#[command(name = "checkmark-icons")]
#[command(about = "Generate checkmark PNG icons for the web app icon set")]
#[command(version)]
struct Cli {
    /// Defaults to `generate` with the built-in icon set
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the icon set
    Generate {
        /// JSON file listing icon sizes, paths and an optional palette
        #[arg(short, long, conflicts_with = "output_dir")]
        config: Option<PathBuf>,

        /// Write icon-192.png and icon-512.png to this directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Print the SHA-256 of each generated file
        #[arg(long)]
        hash: bool,
    },
    /// Validate a PNG file and print its header
    Inspect {
        /// PNG file to inspect
        file: PathBuf,
    },
}

fn run_generate(
    config: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    hash: bool,
) -> Result<(), IconError> {
    let set = match (config, output_dir) {
        (Some(path), _) => IconSet::load(&path)?,
        (None, Some(dir)) => IconSet::with_output_dir(&dir),
        (None, None) => IconSet::default(),
    };

    generate::run(&set, |icon| {
        println!("{}", icon.status_line());
        if hash {
            println!("  sha256: {}", icon.sha256);
        }
    })?;
    println!("{}", generate::COMPLETION_LINE);
    Ok(())
}

fn run_inspect(file: PathBuf) -> Result<(), IconError> {
    let result = inspect::run(&file)?;
    let header = result.header;

    println!("{}", file.display());
    println!("  dimensions: {}x{}", header.width, header.height);
    println!("  bit depth:  {}", header.bit_depth);
    println!(
        "  color type: {} ({})",
        header.color_type,
        header.color_type_name()
    );
    println!("  interlace:  {}", header.interlace);
    println!("  chunks:     {}", result.chunks.join(", "));
    println!("  size:       {} bytes", result.file_size);
    println!("  sha256:     {}", result.sha256);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => run_generate(None, None, false),
        Some(Commands::Generate {
            config,
            output_dir,
            hash,
        }) => run_generate(config, output_dir, hash),
        Some(Commands::Inspect { file }) => run_inspect(file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
