use anyhow::{Context, Result};
use clap::Parser;
use playground_markdown_config::Config;
use playground_markdown_engine::{FileSystem, OsFileSystem, RenderOptions, io, render_markdown};
use relative_path::RelativePathBuf;
use std::path::{Path, PathBuf};
use std::process;

/// Render a playground's contents file as a Markdown document.
#[derive(Debug, Parser)]
#[command(name = "playground-markdown", version, about)]
struct Cli {
    /// Source file to render, or directory to search for a project
    path: Option<PathBuf>,

    /// Prefix marking documentation lines
    #[arg(long)]
    marker: Option<String>,

    /// Language tag written on code fences
    #[arg(long = "lang")]
    code_language_tag: Option<String>,

    /// Directory extension identifying a project
    #[arg(long)]
    extension: Option<String>,

    /// Source file read from inside the project directory
    #[arg(long)]
    contents: Option<String>,

    /// Write the document to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the effective settings to the config file and exit
    #[arg(long)]
    write_config: bool,
}

impl Cli {
    /// Command-line flags take precedence over config values.
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(marker) = &self.marker {
            config.marker = marker.clone();
        }
        if let Some(tag) = &self.code_language_tag {
            config.code_language_tag = tag.clone();
        }
        if let Some(extension) = &self.extension {
            config.project_extension = extension.clone();
        }
        if let Some(contents) = &self.contents {
            config.contents_file = contents.clone();
        }
        config
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let loaded = match &cli.config {
        Some(path) => {
            log::debug!("Config path: {}", path.display());
            Config::load_from_path(path)?
        }
        None => Config::load()?,
    };

    let config = loaded.unwrap_or_else(|| {
        log::debug!("No config file found, using defaults");
        Config::default()
    });
    Ok(cli.apply_to(config))
}

/// Persist `config` where it was loaded from, returning the path written.
fn write_config(cli: &Cli, config: &Config) -> Result<PathBuf> {
    let path = match &cli.config {
        Some(path) => {
            config.save_to_path(path)?;
            path.clone()
        }
        None => config.save()?,
    };
    log::info!("Saved config to {}", path.display());
    Ok(path)
}

/// Load the source text: a file given directly, or the contents file of the
/// first project found below the search directory.
fn load_source(path: Option<&Path>, config: &Config, fs: &impl FileSystem) -> Result<String> {
    let root = match path.or(config.search_path.as_deref()) {
        Some(path) if !fs.is_dir(path) => {
            log::info!("Rendering file {}", path.display());
            return fs
                .read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()));
        }
        Some(path) => path.to_path_buf(),
        None => fs.current_dir()?,
    };

    let contents_file = RelativePathBuf::from(config.contents_file.as_str());
    io::load_project_source(fs, &root, &config.project_extension, &contents_file)
        .with_context(|| format!("Failed to load project from '{}'", root.display()))
}

fn write_output(output: &Path, document: &str) -> Result<()> {
    let file_name = output
        .file_name()
        .with_context(|| format!("'{}' is not a file path", output.display()))?;
    let root = output.parent().unwrap_or(Path::new(""));
    let file_name = file_name
        .to_str()
        .with_context(|| format!("'{}' is not a valid UTF-8 file name", output.display()))?;
    let relative = RelativePathBuf::from(file_name);

    io::write_file(&relative, root, document)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;
    log::info!("Wrote {}", output.display());
    Ok(())
}

fn render(cli: &Cli, config: Config, fs: &impl FileSystem) -> Result<String> {
    let source = load_source(cli.path.as_deref(), &config, fs)?;

    let options = RenderOptions {
        marker: config.marker,
        code_language_tag: config.code_language_tag,
    };
    Ok(render_markdown(&source, &options))
}

fn run(cli: &Cli, fs: &impl FileSystem) -> Result<()> {
    let config = load_config(cli)?;

    if cli.write_config {
        let path = write_config(cli, &config)?;
        eprintln!("Wrote config to {}", path.display());
        return Ok(());
    }

    let document = render(cli, config, fs)?;
    match &cli.output {
        Some(output) => write_output(output, &format!("{document}\n")),
        None => {
            println!("{document}");
            Ok(())
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli, &OsFileSystem) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
