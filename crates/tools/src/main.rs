use anyhow::{Context, Result};
use cavegen::{CaveGenerator, Cell, GeneratedCave, GeneratorConfig};
use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Generate a connected cave map", long_about = None)]
struct Args {
    /// TOML file with generator settings; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short = 'W', long)]
    width: Option<i32>,

    #[arg(short = 'H', long)]
    height: Option<i32>,

    /// Seed string (hashed into the generator stream)
    #[arg(short, long)]
    seed: Option<String>,

    /// Draw a fresh seed from the clock instead of using --seed
    #[arg(long)]
    random_seed: bool,

    /// Chance in percent that an interior cell starts as wall
    #[arg(short, long)]
    fill: Option<i32>,

    /// Width of the solid frame around the map
    #[arg(short, long)]
    border: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,

    /// Write the effective settings to this TOML file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Log pipeline progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = effective_config(&args)?;
    if let Some(path) = &args.save_config {
        config
            .write_atomic(path)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    }

    let generator = CaveGenerator::new(config).context("Invalid generator settings")?;
    let cave = generator.generate().context("Cave generation failed")?;

    match args.format {
        OutputFormat::Ascii => {
            println!("Seed: {}", cave.seed);
            println!("Rooms: {}  Passages: {}", cave.rooms.len(), cave.passages.len());
            print!("{}", render_ascii(&cave));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&cave)
                .with_context(|| "Failed to serialize cave as JSON")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    Builder::from_default_env().filter_level(level).init();
}

fn effective_config(args: &Args) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(seed) = &args.seed {
        config.seed = seed.clone();
    }
    if args.random_seed {
        config.use_random_seed = true;
    }
    if let Some(fill) = args.fill {
        config.fill_percent = fill;
    }
    if let Some(border) = args.border {
        config.border_size = border;
    }
    Ok(config)
}

fn render_ascii(cave: &GeneratedCave) -> String {
    let mut text = String::with_capacity((cave.map.width() + 1) * cave.map.height());
    for row in cave.map.rows() {
        text.extend(row.iter().map(|cell| match cell {
            Cell::Wall => '#',
            Cell::Floor => '.',
        }));
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(parts: &[&str]) -> Args {
        Args::try_parse_from(parts).expect("arguments should parse")
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&["cavegen", "-W", "40", "--height", "30", "--seed", "quartz", "-f", "50"]);
        let config = effective_config(&args).expect("no config file to read");
        assert_eq!(config.width, 40);
        assert_eq!(config.height, 30);
        assert_eq!(config.seed, "quartz");
        assert_eq!(config.fill_percent, 50);
        assert_eq!(config.border_size, GeneratorConfig::default().border_size);
        assert!(!config.use_random_seed);
    }

    #[test]
    fn missing_config_file_is_reported() {
        let args = parse(&["cavegen", "--config", "/definitely/not/here.toml"]);
        let err = effective_config(&args).expect_err("file does not exist");
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn ascii_rendering_draws_one_line_per_row() {
        let config = GeneratorConfig { width: 50, height: 40, ..GeneratorConfig::default() };
        let cave = CaveGenerator::new(config)
            .expect("valid config")
            .generate_with_seed("render")
            .expect("generation succeeds");
        let text = render_ascii(&cave);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 42);
        assert!(lines.iter().all(|line| line.chars().count() == 52));
        assert!(lines[0].chars().all(|symbol| symbol == '#'));
        assert!(text.contains('.'));
    }
}
