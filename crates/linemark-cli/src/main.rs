use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use linemark::{render, Document, MarkupParser, RenderOptions};

#[derive(Parser)]
#[command(name = "linemark")]
#[command(version, about = "Convert linemark text to HTML")]
struct Cli {
    /// Input file (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the parsed document tree instead of HTML
    #[arg(long)]
    tree: bool,

    /// What to put between top-level blocks
    #[arg(long, value_enum, default_value_t = Separator::None)]
    separator: Separator,

    /// Do not HTML-escape text content
    #[arg(long)]
    no_escape: bool,

    /// Render void elements as `<hr />`
    #[arg(long)]
    xhtml: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Separator {
    None,
    Newline,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            block_separator: match self.separator {
                Separator::None => String::new(),
                Separator::Newline => "\n".to_string(),
            },
            escape_text: !self.no_escape,
            self_closing: self.xhtml,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let document = read_document(&cli)?;

    let mut output = if cli.tree {
        format!("{:#?}", document)
    } else {
        render(&document, &cli.render_options())
    };
    output.push('\n');

    match &cli.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("Error writing {}", path.display()))?,
        None => io::stdout()
            .lock()
            .write_all(output.as_bytes())
            .context("Error writing to stdout")?,
    }

    Ok(())
}

fn read_document(cli: &Cli) -> Result<Document> {
    let parser = MarkupParser::new();

    match &cli.input {
        Some(path) if path.as_os_str() != "-" => {
            log::debug!("reading {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Error reading {}", path.display()))?;
            parser
                .parse_reader(BufReader::new(file))
                .with_context(|| format!("Error reading {}", path.display()))
        }
        _ => {
            log::debug!("reading stdin");
            parser
                .parse_reader(io::stdin().lock())
                .context("Error reading stdin")
        }
    }
}
