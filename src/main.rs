mod cli;

use mediaprobe::{config, probe};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mediaprobe=trace,mediaprobe_av=trace".to_string()
        } else {
            "mediaprobe=warn,mediaprobe_av=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Probe { files, json } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            let probe_config = config.probe_config(cli.mediainfo_bin.as_deref());
            probe_files(&probe_config, &files, json)
        }
        Commands::Check => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            check(&config.probe_config(cli.mediainfo_bin.as_deref()))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("mediaprobe {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn probe_files(probe_config: &probe::ProbeConfig, files: &[PathBuf], json: bool) -> Result<()> {
    for file in files {
        if !file.exists() {
            anyhow::bail!("File does not exist: {:?}", file);
        }
    }

    tracing::info!("Probing {} file(s)", files.len());
    let records = probe::probe_files(probe_config, files)?;
    tracing::debug!("Received {} record(s)", records.len());

    if json {
        let json_str = serde_json::to_string_pretty(&records)?;
        println!("{}", json_str);
    } else {
        for (i, record) in records.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print!("{}", probe::render_text(record));
        }
    }

    Ok(())
}

fn check(probe_config: &probe::ProbeConfig) -> Result<()> {
    println!("Checking mediainfo...\n");

    let prober = probe::MediaInfoProber::new(probe_config.clone());
    let tool = prober.tool_info();

    let status = if tool.available { "✓" } else { "✗" };
    print!("{} {}", status, tool.name);

    if let Some(ref version) = tool.version {
        print!(" ({})", version);
    }

    if let Some(ref path) = tool.path {
        print!(" - {}", path.display());
    }

    println!();

    if !tool.available {
        anyhow::bail!(
            "mediainfo not found at {:?}; install it or pass --mediainfo-bin",
            probe_config.binary
        );
    }

    println!("\nmediainfo is available!");
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  mediainfo binary: {}", config.mediainfo.binary.display());
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  mediainfo binary: {}", config.mediainfo.binary.display());
        }
    }

    Ok(())
}
