//! outliner CLI - document outline inference from fragment dumps

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use outliner::{
    classify::profile_styles, convert::load_fragments, convert_path, ClassifyOptions,
    ConvertOptions, ErrorMode, HeadingStrategy, JsonFormat, PaletteStats, RouteMode,
};

#[derive(Parser)]
#[command(name = "outliner")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Infer document titles and heading outlines from styled fragment dumps", long_about = None)]
struct Cli {
    /// Input fragment dump (JSON array of styled fragments)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer the outline of a single fragment dump
    Outline {
        /// Input fragment dump
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Skip invalid fragments instead of failing
        #[arg(long)]
        lenient: bool,

        /// Level-assignment strategy for monochrome documents
        #[arg(long, value_enum, default_value = "standard")]
        strategy: StrategyArg,

        /// Classifier routing
        #[arg(long, value_enum, default_value = "auto")]
        route: RouteArg,

        /// Page height for header/footer band calibration
        #[arg(long, value_name = "POINTS")]
        page_height: Option<f32>,
    },

    /// Infer outlines for every fragment dump in a directory
    Batch {
        /// Directory containing fragment dumps (*.json)
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Directory to write outline files to
        #[arg(value_name = "OUTPUT_DIR")]
        output: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Skip invalid fragments instead of failing
        #[arg(long)]
        lenient: bool,

        /// Level-assignment strategy for monochrome documents
        #[arg(long, value_enum, default_value = "standard")]
        strategy: StrategyArg,

        /// Process files sequentially
        #[arg(long)]
        sequential: bool,
    },

    /// Show fragment, palette, and routing information for a dump
    Info {
        /// Input fragment dump
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Style ranking and numbering as calibrated
    Standard,
    /// Clamp levels so no child precedes its parent
    Pruned,
}

impl From<StrategyArg> for HeadingStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Standard => HeadingStrategy::Standard,
            StrategyArg::Pruned => HeadingStrategy::StandardWithHierarchyPruning,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum RouteArg {
    /// Let the palette router decide
    Auto,
    /// Always use the standard classifier
    Standard,
    /// Always use the visual classifier
    Visual,
}

impl From<RouteArg> for RouteMode {
    fn from(arg: RouteArg) -> Self {
        match arg {
            RouteArg::Auto => RouteMode::Auto,
            RouteArg::Standard => RouteMode::ForceStandard,
            RouteArg::Visual => RouteMode::ForceVisual,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Outline {
            input,
            output,
            compact,
            lenient,
            strategy,
            route,
            page_height,
        }) => cmd_outline(
            &input,
            output.as_deref(),
            compact,
            lenient,
            strategy,
            route,
            page_height,
        ),
        Some(Commands::Batch {
            input,
            output,
            compact,
            lenient,
            strategy,
            sequential,
        }) => cmd_batch(&input, &output, compact, lenient, strategy, sequential),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: outline if input is provided
            if let Some(input) = cli.input {
                cmd_outline(
                    &input,
                    cli.output.as_deref(),
                    false,
                    false,
                    StrategyArg::Standard,
                    RouteArg::Auto,
                    None,
                )
            } else {
                println!("{}", "Usage: outliner <FILE> [OUTPUT]".yellow());
                println!("       outliner --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(
    compact: bool,
    lenient: bool,
    strategy: StrategyArg,
    route: RouteArg,
    page_height: Option<f32>,
) -> ConvertOptions {
    let mut classify = ClassifyOptions::new()
        .with_strategy(strategy.into())
        .with_route(route.into());
    if let Some(height) = page_height {
        classify = classify.with_page_height(height);
    }

    let mut options = ConvertOptions::new().with_classify(classify).with_format(
        if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        },
    );
    if lenient {
        options = options.lenient();
    }
    options
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    lenient: bool,
    strategy: StrategyArg,
    route: RouteArg,
    page_height: Option<f32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = build_options(compact, lenient, strategy, route, page_height);
    let json = convert_path(input, &options)?;

    match output {
        Some(path) => {
            fs::write(path, json)?;
            println!("{} {}", "Saved".green().bold(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    compact: bool,
    lenient: bool,
    strategy: StrategyArg,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = build_options(compact, lenient, strategy, RouteArg::Auto, None);

    let mut files: Vec<PathBuf> = fs::read_dir(input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();

    if files.is_empty() {
        println!("{}", "No fragment dumps found".yellow());
        return Ok(());
    }

    fs::create_dir_all(output)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let process = |path: &PathBuf| -> Result<(), String> {
        let result = convert_path(path, &options).and_then(|json| {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "outline".to_string());
            let out_path = output.join(format!("{}.outline.json", stem));
            fs::write(out_path, json).map_err(Into::into)
        });
        pb.inc(1);
        result.map_err(|e| format!("{}: {}", path.display(), e))
    };

    let results: Vec<Result<(), String>> = if sequential {
        files.iter().map(process).collect()
    } else {
        files.par_iter().map(process).collect()
    };
    pb.finish_with_message("done");

    let failures: Vec<&String> = results.iter().filter_map(|r| r.as_ref().err()).collect();
    for failure in &failures {
        eprintln!("{}: {}", "Failed".red(), failure);
    }
    println!(
        "{} {} of {} dumps",
        "Processed".green().bold(),
        results.len() - failures.len(),
        results.len()
    );

    if failures.is_empty() {
        Ok(())
    } else {
        Err(format!("{} of {} dumps failed", failures.len(), results.len()).into())
    }
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fs::read(input)?;
    let fragments = load_fragments(&bytes, ErrorMode::Lenient)?;

    let pages = fragments.iter().map(|f| f.page).max().unwrap_or(0);
    let stats = PaletteStats::from_fragments(&fragments);
    let profile = profile_styles(&fragments);

    println!("{}", "Fragment dump".bold());
    println!("  File:       {}", input.display());
    println!("  Fragments:  {}", fragments.len());
    println!("  Pages:      {}", pages);
    println!();
    println!("{}", "Palette".bold());
    println!("  Backgrounds:   {}", stats.background_count);
    println!("  Greyscale:     {}", stats.greyscale_count);
    match stats.greyscale_ratio() {
        Some(ratio) => println!("  Ratio:         {:.0}%", ratio * 100.0),
        None => println!("  Ratio:         n/a"),
    }
    let route = if stats.is_visually_driven() {
        "visual".magenta()
    } else {
        "standard".cyan()
    };
    println!("  Route:         {}", route);
    println!();
    println!("{}", "Body style".bold());
    println!("  Size:   {}pt", profile.body_size);
    println!("  Font:   {}", profile.body_font_name);
    println!("  Bold:   {}", profile.body_is_bold);
    println!("  Color:  #{:06X}", profile.body_color);
    Ok(())
}

fn cmd_version() {
    println!("outliner {}", env!("CARGO_PKG_VERSION"));
    println!("Document structure inference from styled text fragments");
}
