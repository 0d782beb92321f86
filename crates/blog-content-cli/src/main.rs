use anyhow::Result;
use blog_content_config::Config;
use blog_content_engine::{Pipeline, card_summary, io};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "blog-content",
    version,
    about = "Convert blog editor content to content blocks and back"
)]
struct Cli {
    /// Config file to use instead of ~/.config/blog-content/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Turn an HTML or Markdown file into a post with ordered content blocks
    Normalize {
        file: PathBuf,
        /// Treat the file as Markdown
        #[arg(long, conflicts_with = "html")]
        markdown: bool,
        /// Treat the file as basic-editor HTML
        #[arg(long)]
        html: bool,
        #[arg(long, default_value = "")]
        title: String,
        /// Write the post JSON here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Rebuild the editor string from a stored block list
    Denormalize { file: PathBuf },
    /// Print the card summary (plain-text preview and thumbnail) of a block list
    Preview {
        file: PathBuf,
        /// Preview width in characters
        #[arg(long)]
        len: Option<usize>,
    },
}

/// Which normalizer to run when no flag forces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFormat {
    Markdown,
    Html,
}

fn source_format(
    path: &Path,
    forced: Option<SourceFormat>,
    content: &str,
    pipeline: &Pipeline,
) -> SourceFormat {
    if let Some(format) = forced {
        return format;
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("md" | "markdown") => SourceFormat::Markdown,
        Some("html" | "htm") => SourceFormat::Html,
        _ if pipeline.is_markdown(content) => SourceFormat::Markdown,
        _ => SourceFormat::Html,
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    match loaded {
        Some(config) => Ok(config),
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let pipeline = config.pipeline();

    match cli.command {
        Command::Normalize {
            file,
            markdown,
            html,
            title,
            output,
        } => {
            let content = io::read_source(&file)?;
            let forced = match (markdown, html) {
                (true, _) => Some(SourceFormat::Markdown),
                (_, true) => Some(SourceFormat::Html),
                _ => None,
            };
            let format = source_format(&file, forced, &content, &pipeline);
            log::info!("Normalizing {} as {format:?}", file.display());

            let post = pipeline.normalize(&title, &content, format == SourceFormat::Markdown);
            match output {
                Some(path) => {
                    io::write_post(&path, &post)?;
                    log::info!("Wrote {} block(s) to {}", post.contents.len(), path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&post)?),
            }
        }
        Command::Denormalize { file } => {
            let blocks = io::read_blocks(&file)?;
            let editor = pipeline.blocks_to_editor(&blocks);
            println!("{}", serde_json::to_string_pretty(&editor)?);
        }
        Command::Preview { file, len } => {
            let blocks = io::read_blocks(&file)?;
            let card = match len {
                Some(len) => card_summary(&blocks, len),
                None => pipeline.card_summary(&blocks),
            };
            println!("{}", serde_json::to_string_pretty(&card)?);
        }
    }

    Ok(())
}
