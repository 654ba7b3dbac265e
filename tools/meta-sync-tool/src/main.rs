use clap::{Parser, Subcommand};
use meta_sync_common::delta::RichTextDocument;
use meta_sync_common::description::extract_description_with_limit;
use meta_sync_common::fields::MetadataFields;
use meta_sync_common::head::MemoryHead;
use meta_sync_common::markup::{parse_head, render_head};
use meta_sync_common::update::update_metadata;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod error;

use config::{load_config, write_default_config};
use error::ToolError;

#[derive(Parser)]
#[command(name = "meta-sync-tool")]
#[command(about = "Preview page metadata updates and rich-text descriptions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the plain-text description of a rich-text delta (JSON)
    Describe {
        /// Delta file, e.g. {"ops":[{"insert":"Hello\n"}]}
        #[arg(long, short)]
        input: String,
        /// Stop accumulating once the description reaches this length
        #[arg(long, short)]
        limit: Option<usize>,
        /// Config file (default: ~/.config/meta-sync/config.toml)
        #[arg(long, short)]
        config: Option<String>,
    },
    /// Apply metadata fields (JSON) to a page head and print the result
    Apply {
        /// Fields file with title, description, url, image, imageAlt, canonical
        #[arg(long, short)]
        fields: String,
        /// Existing HTML page whose head is updated (default: empty head)
        #[arg(long)]
        head: Option<String>,
        /// Current page address, used when fields give no url or canonical
        #[arg(long, short)]
        url: Option<String>,
        /// Config file (default: ~/.config/meta-sync/config.toml)
        #[arg(long, short)]
        config: Option<String>,
    },
    /// Write a config file with default settings
    InitConfig {
        /// Output file (default: ~/.config/meta-sync/config.toml)
        #[arg(long, short)]
        output: Option<String>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_file(path: &str) -> Result<String, ToolError> {
    fs::read_to_string(path).map_err(|e| ToolError::Read(PathBuf::from(path), e))
}

fn describe(
    input: String,
    limit: Option<usize>,
    config: Option<String>,
) -> Result<(), ToolError> {
    let config = load_config(config.as_deref())?;
    let json = read_file(&input)?;
    let doc = RichTextDocument::from_json(&json)
        .map_err(|e| ToolError::Json(PathBuf::from(&input), e))?;

    let limit = limit.unwrap_or(config.description_limit);
    let description = extract_description_with_limit(&doc, limit);
    tracing::info!(
        "Extracted {} chars from {} ops",
        description.chars().count(),
        doc.ops.as_ref().map_or(0, Vec::len)
    );
    println!("{}", description);
    Ok(())
}

fn apply(
    fields_path: String,
    head_path: Option<String>,
    url: Option<String>,
    config: Option<String>,
) -> Result<(), ToolError> {
    let config = load_config(config.as_deref())?;
    let current_url = url.unwrap_or(config.current_url);

    let json = read_file(&fields_path)?;
    let fields = MetadataFields::from_json(&json)
        .map_err(|e| ToolError::Json(PathBuf::from(&fields_path), e))?;

    let mut head = match head_path {
        Some(path) => {
            let html = read_file(&path)?;
            let head = parse_head(&html, &current_url);
            tracing::info!("Loaded {} head elements from {}", head.elements().len(), path);
            head
        }
        None => MemoryHead::new(current_url),
    };

    update_metadata(&mut head, &fields);
    print!("{}", render_head(&head));
    Ok(())
}

fn main() -> Result<(), ToolError> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Describe {
            input,
            limit,
            config,
        } => describe(input, limit, config),
        Commands::Apply {
            fields,
            head,
            url,
            config,
        } => apply(fields, head, url, config),
        Commands::InitConfig { output } => {
            let path = write_default_config(output.as_deref())?;
            println!("Config written to: {}", path.display());
            Ok(())
        }
    }
}
