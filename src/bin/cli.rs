use anyhow::{Context, Result};
use avdevices::{
    current_platform, detect_and_save, get_info, init_logging, to_json, AvDevicesConfig, Backend,
    DeviceDetector,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "avdevices")]
#[command(about = "Detect audio and video capture devices using FFmpeg and v4l2")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect devices and save them as JSON
    Detect {
        /// Output file path (default: ./devices.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (default: ./avdevices.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Detect devices and print them
    List {
        /// Print JSON instead of one device per line
        #[arg(long)]
        json: bool,

        /// Configuration file (default: ./avdevices.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Parse captured probe output from a file without running any tool
    Parse {
        /// Output format: v4l2, sources, dshow or avfoundation
        #[arg(short, long)]
        backend: Backend,

        /// File holding the captured probe output
        file: PathBuf,
    },

    /// Show the crate version, host platform and the tools it would run
    Info {
        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Detect { output, config } => cmd_detect(output, config).await,
        Commands::List { json, config } => cmd_list(json, config).await,
        Commands::Parse { backend, file } => cmd_parse(backend, &file),
        Commands::Info { json } => cmd_info(json),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<AvDevicesConfig> {
    match path {
        Some(path) => AvDevicesConfig::load_from_file(&path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(AvDevicesConfig::load_or_default()),
    }
}

async fn cmd_detect(output: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let mut config = load_config(config)?;

    if let Some(name) = output.as_deref().and_then(Path::file_name).and_then(|n| n.to_str()) {
        config.output.file_name = name.to_string();
    }
    let dir = output_dir(output.as_deref())?;

    let detector = DeviceDetector::system(config);
    let path = detect_and_save(&detector, current_platform(), &dir).await?;
    println!("Audio and video devices saved to: {}", path.display());
    Ok(())
}

/// Directory the device list is written to; a bare file name means the working directory
fn output_dir(output: Option<&Path>) -> Result<PathBuf> {
    match output.and_then(Path::parent).filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => Ok(parent.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

async fn cmd_list(json: bool, config: Option<PathBuf>) -> Result<()> {
    let config = load_config(config)?;
    let pretty = config.output.pretty;
    let devices = DeviceDetector::system(config).detect(current_platform()).await?;

    if json {
        println!("{}", to_json(&devices, pretty)?);
    } else {
        for device in devices {
            println!("{}", device);
        }
    }
    Ok(())
}

fn cmd_parse(backend: Backend, file: &Path) -> Result<()> {
    let bytes = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let devices = backend.parse(&String::from_utf8_lossy(&bytes));
    println!("{}", to_json(&devices, true)?);
    Ok(())
}

fn cmd_info(json: bool) -> Result<()> {
    let info = get_info();
    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{} {}", info.name, info.version);
        println!("{}", info.description);
        println!("Platform: {}", info.platform.as_str());
        println!("Backends: {}", info.backends.join(", "));
    }
    Ok(())
}
