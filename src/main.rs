use clap::Parser;
use kptncook_markdown::{load_recipes, FilenameStyle, MarkdownExporter, Settings};
use log::info;
use std::path::PathBuf;

/// Render KptnCook recipes as Markdown files
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file with a recipe or a list of recipes
    input: PathBuf,

    /// Output directory (overrides KPTNCOOK_ROOT)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Image API key (overrides KPTNCOOK_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Transliterate file names to ASCII
    #[arg(long)]
    ascii_filenames: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = Settings::load()?;
    if let Some(root) = args.root {
        settings.root = root;
    }
    if let Some(api_key) = args.api_key {
        settings.api_key = api_key;
    }

    let recipes = load_recipes(&args.input)?;
    std::fs::create_dir_all(&settings.root)?;

    let style = if args.ascii_filenames {
        FilenameStyle::Ascii
    } else {
        FilenameStyle::Sanitized
    };
    let exporter = MarkdownExporter::from_settings(&settings).filename_style(style);
    let written = exporter.export(&recipes)?;

    info!("Exported {} recipes to {}", written.len(), settings.root.display());
    for path in written {
        println!("{}", path.display());
    }

    Ok(())
}
