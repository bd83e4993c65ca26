use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tabledelim_core::{
    DocumentPage, ExtractConfig, HasBbox, PdfLoader, TableBboxBuilder, Target, TextElement,
    TextRegion, find_by_regex, slice_fitting_element, table::Direction, table_delim,
};

#[derive(Parser)]
#[command(name = "tabledelim")]
#[command(about = "Extract delimiter-bounded tables from PDF pages")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct PageArgs {
    #[arg(help = "Input PDF file path")]
    input: PathBuf,

    #[arg(short, long, default_value = "0", help = "Page number (0-based)")]
    page: usize,

    #[arg(long, help = "Password of an encrypted PDF")]
    password: Option<String>,

    #[arg(long, help = "Keep control characters in extracted text")]
    keep_control_chars: bool,

    #[arg(long, help = "Skip unicode repair of extracted text")]
    raw_text: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Extract the table cut by row and column delimiters
    Table {
        #[command(flatten)]
        page: PageArgs,

        #[arg(long, help = "Selector of the row delimiters, e.g. `line`")]
        rows: String,

        #[arg(long, help = "Selector of the column delimiters")]
        cols: String,

        #[arg(long)]
        left: Option<f32>,

        #[arg(long)]
        top: Option<f32>,

        #[arg(long)]
        right: Option<f32>,

        #[arg(long)]
        bottom: Option<f32>,

        #[arg(long, help = "Print the table as JSON")]
        json: bool,
    },
    /// List text elements whose text starts with a pattern
    Find {
        #[command(flatten)]
        page: PageArgs,

        #[arg(long, help = "Regular expression anchored at the start of the text")]
        pattern: String,
    },
    /// Print the page strip fitted to one element
    Slice {
        #[command(flatten)]
        page: PageArgs,

        #[arg(long, help = "Selector of the element, first match is used")]
        selector: String,

        #[arg(long, default_value = "row", help = "`row` or `col`")]
        direction: String,
    },
}

impl PageArgs {
    fn load(&self) -> Result<tabledelim_core::Page, Box<dyn Error>> {
        let loader = PdfLoader::with_config(ExtractConfig {
            trim_control_chars: !self.keep_control_chars,
            auto_clean_text: !self.raw_text,
        })?;
        let page = loader.load_page(&self.input, self.password.as_deref(), self.page)?;
        Ok(page)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Table {
            page,
            rows,
            cols,
            left,
            top,
            right,
            bottom,
            json,
        } => {
            let mut bbox = TableBboxBuilder::default();
            if let Some(left) = left {
                bbox.left(left);
            }
            if let Some(top) = top {
                bbox.top(top);
            }
            if let Some(right) = right {
                bbox.right(right);
            }
            if let Some(bottom) = bottom {
                bbox.bottom(bottom);
            }
            let bbox = bbox.build()?;

            let pdf_page = page.load()?;
            let table = table_delim(&pdf_page, rows.as_str(), cols.as_str(), &bbox)?;

            if json {
                println!("{}", table.to_json()?);
            } else {
                println!("{}", table);
            }
        }
        Command::Find { page, pattern } => {
            let pdf_page = page.load()?;
            let region = pdf_page.create_region(pdf_page.bbox());
            let found = find_by_regex(&region, &pattern)?;
            info!("{} elements match `{}`", found.len(), pattern);

            for element in found {
                println!("{}\t{}", element.bbox(), element.text().unwrap_or_default());
            }
        }
        Command::Slice {
            page,
            selector,
            direction,
        } => {
            let direction = direction.parse::<Direction>()?;
            let pdf_page = page.load()?;
            let region = slice_fitting_element(&pdf_page, &Target::from(selector), direction)?;

            println!("{}", region.bbox());
            println!("{}", region.extract_text()?.unwrap_or_default());
        }
    }

    Ok(())
}
