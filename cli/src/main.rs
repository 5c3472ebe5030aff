//! papersmith CLI - render drafted papers to DOCX, text, and JSON

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use papersmith::export::{ExportOptions, ExportResult, ExporterRegistry, OutputFormat};
use papersmith::prompt::{build_prompt, PromptContext, PromptTemplate, SourceDocument};
use papersmith::{configure, FormattingConfig, JsonFormat, LineSpacing, RenderOptions};

#[derive(Parser)]
#[command(name = "papersmith")]
#[command(version)]
#[command(about = "Render drafted papers to DOCX, text, and JSON", long_about = None)]
struct Cli {
    /// Input draft file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output DOCX file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    format: FormatArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a draft to DOCX
    Docx {
        /// Input draft file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to FILE with a .docx extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Render a draft to JSON
    Json {
        /// Input draft file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Render a draft to plain text
    Text {
        /// Input draft file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Show the styles a configuration produces
    Styles {
        /// Print the style set as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Assemble the drafting prompt from source files
    Prompt {
        /// Script files
        #[arg(short, long = "script", value_name = "FILE", required = true)]
        scripts: Vec<PathBuf>,

        /// Instruction files
        #[arg(short, long = "instruction", value_name = "FILE", required = true)]
        instructions: Vec<PathBuf>,

        /// Author first name
        #[arg(long, env = "PAPERSMITH_FIRST_NAME")]
        first_name: String,

        /// Author last name
        #[arg(long, env = "PAPERSMITH_LAST_NAME")]
        last_name: String,

        /// Date written into the paper (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Custom prompt template file
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

/// Formatting options shared by the rendering commands.
#[derive(Args, Clone, Default)]
struct FormatArgs {
    /// Formatting configuration (TOML)
    #[arg(long, value_name = "FILE", env = "PAPERSMITH_CONFIG")]
    config: Option<PathBuf>,

    /// Font family
    #[arg(long)]
    font: Option<String>,

    /// Line spacing ("Single", "1.5 lines" or "Double")
    #[arg(long)]
    line_spacing: Option<LineSpacing>,

    /// Do not add page numbers to the footer
    #[arg(long)]
    no_page_numbers: bool,

    /// Author recorded in the document properties
    #[arg(long)]
    author: Option<String>,
}

impl FormatArgs {
    /// Load the TOML file, if any, then apply flag overrides.
    fn formatting_config(&self) -> Result<FormattingConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                toml::from_str(&content)
                    .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?
            }
            None => FormattingConfig::default(),
        };

        if let Some(font) = &self.font {
            config = config.with_font(font.clone());
        }
        if let Some(spacing) = self.line_spacing {
            config = config.with_line_spacing(spacing);
        }

        config.validate()?;
        Ok(config)
    }

    fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::new()
            .with_page_numbers(!self.no_page_numbers)
            .created_now();
        if let Some(author) = &self.author {
            options = options.with_author(author.clone());
        }
        options
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Docx {
            input,
            output,
            format,
        }) => cmd_docx(&input, output.as_deref(), &format),
        Some(Commands::Json {
            input,
            output,
            compact,
            format,
        }) => cmd_json(&input, output.as_deref(), compact, &format),
        Some(Commands::Text {
            input,
            output,
            format,
        }) => cmd_text(&input, output.as_deref(), &format),
        Some(Commands::Styles { json, format }) => cmd_styles(json, &format),
        Some(Commands::Prompt {
            scripts,
            instructions,
            first_name,
            last_name,
            date,
            template,
            output,
        }) => cmd_prompt(
            &scripts,
            &instructions,
            &first_name,
            &last_name,
            date,
            template.as_deref(),
            output.as_deref(),
        ),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert to DOCX if input is provided
            if let Some(input) = cli.input {
                cmd_docx(&input, cli.output.as_deref(), &cli.format)
            } else {
                println!("{}", "Usage: papersmith <FILE> [OUTPUT]".yellow());
                println!("       papersmith --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Render `input` and serialize it with `format`.
fn export_file(
    input: &Path,
    format: OutputFormat,
    json_format: JsonFormat,
    args: &FormatArgs,
) -> Result<ExportResult, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let config = args.formatting_config()?;
    let options = ExportOptions::new()
        .with_format(format)
        .with_json_format(json_format)
        .with_render_options(args.render_options());

    let registry = ExporterRegistry::with_defaults();
    let result = registry.export(&text, format.extension(), &config, &options)?;

    for warning in &result.stats.warnings {
        eprintln!("{}: {}", "Warning".yellow().bold(), warning);
    }
    log::info!(
        "Rendered {} blocks, {} words",
        result.stats.block_count(),
        result.stats.word_count
    );

    Ok(result)
}

fn write_or_print(
    result: &ExportResult,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        result.save(path)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", String::from_utf8_lossy(&result.bytes));
    }
    Ok(())
}

fn cmd_docx(
    input: &Path,
    output: Option<&Path>,
    args: &FormatArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.with_extension(OutputFormat::Docx.extension()));

    let result = export_file(input, OutputFormat::Docx, JsonFormat::default(), args)?;
    result.save(&output)?;

    println!("{} {}", "Saved to".green(), output.display());
    println!(
        "  {} {} headings, {} paragraphs, {} bullets, {} tables",
        "└─".dimmed(),
        result.stats.heading_count,
        result.stats.paragraph_count,
        result.stats.bullet_count,
        result.stats.table_count
    );

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    args: &FormatArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let result = export_file(input, OutputFormat::Json, format, args)?;
    write_or_print(&result, output)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    args: &FormatArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = export_file(input, OutputFormat::Text, JsonFormat::default(), args)?;
    write_or_print(&result, output)
}

fn cmd_styles(json: bool, args: &FormatArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.formatting_config()?;
    let styles = configure(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&styles)?);
        return Ok(());
    }

    let setup = styles.page_setup;

    println!("{}", "Page Setup".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!(
        "{}: {} x {} twips (US Letter)",
        "Size".bold(),
        setup.width,
        setup.height
    );
    println!(
        "{}: top {}, bottom {}, left {}, right {} twips",
        "Margins".bold(),
        setup.margins.top,
        setup.margins.bottom,
        setup.margins.left,
        setup.margins.right
    );
    println!(
        "{}: {} x {} twips",
        "Text area".bold(),
        setup.text_width(),
        setup.text_height()
    );

    println!();
    println!("{}", "Styles".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for (name, def) in styles.iter() {
        let spacing = def
            .line_spacing_pt
            .map(|pt| format!("{} pt spacing", pt))
            .unwrap_or_else(|| "inherited spacing".to_string());
        println!(
            "{}: {} {} pt{}, {}{}",
            name.as_str().bold(),
            def.font_family,
            def.size_pt,
            if def.bold { " bold" } else { "" },
            spacing,
            def.based_on
                .as_deref()
                .map(|b| format!(", based on {}", b))
                .unwrap_or_default()
        );
    }

    Ok(())
}

fn read_sources(paths: &[PathBuf]) -> Result<Vec<SourceDocument>, Box<dyn std::error::Error>> {
    paths
        .iter()
        .map(|path| {
            let content = fs::read_to_string(path)?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok(SourceDocument::new(name, content))
        })
        .collect()
}

fn cmd_prompt(
    scripts: &[PathBuf],
    instructions: &[PathBuf],
    first_name: &str,
    last_name: &str,
    date: Option<String>,
    template: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = PromptContext::new(first_name, last_name);
    ctx.scripts = read_sources(scripts)?;
    ctx.instructions = read_sources(instructions)?;
    if let Some(date) = date {
        ctx = ctx.with_date(date);
    }

    let template = match template {
        Some(path) => PromptTemplate::new(fs::read_to_string(path)?),
        None => PromptTemplate::default(),
    };

    let prompt = build_prompt(&template, &ctx)?;

    if let Some(path) = output {
        fs::write(path, &prompt)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", prompt);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "papersmith".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Drafted paper to DOCX renderer");
    println!();
    println!("License: MIT");
}
