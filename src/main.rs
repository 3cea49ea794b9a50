use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use antidfs::benchmark;
use antidfs::export::export_text;
use antidfs::render::{render, render_with_border, write_colored};
use antidfs::{Direction, Generator, MazeConfig, MazeError, MazeStats, Profile, Style};
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Maze generator: anti-persistent DFS with braiding.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_help_flag = true)]
struct Args {
    /// Maze width in cells [default: 11]
    #[arg(short, long)]
    width: Option<usize>,

    /// Maze height in cells [default: 11]
    #[arg(short = 'h', long)]
    height: Option<usize>,

    /// Random seed [default: 21]
    #[arg(short, long)]
    seed: Option<u64>,

    /// Anti-persistence strength [default: 0.8]
    #[arg(short, long, allow_negative_numbers = true)]
    beta: Option<f64>,

    /// History window size [default: 50]
    #[arg(short = 'k', long = "history")]
    history: Option<usize>,

    /// Braiding probability [default: 0.08]
    #[arg(short = 'p', long = "braid", allow_negative_numbers = true)]
    braid: Option<f64>,

    /// Preset: classic, winding, open, complex, sparse
    #[arg(long)]
    profile: Option<Profile>,

    /// Run performance benchmarks instead of generating one maze
    #[arg(long)]
    benchmark: bool,

    /// Export the maze to a text file
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Wall style: block, hash, bracket, shade, plus
    #[arg(long, default_value = "block")]
    style: Style,

    /// Color the maze using terminal escape sequences
    #[arg(long)]
    color: bool,

    /// Draw a box around the maze
    #[arg(long)]
    border: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    /// Builds the run configuration. `--profile` and the `-b/-k/-p` flags
    /// apply in command-line order, so whichever comes last wins.
    fn into_config(self, matches: &ArgMatches) -> MazeConfig {
        let mut config = MazeConfig::default();
        let profile_index = matches.index_of("profile");
        let after_profile = |id: &str| match (profile_index, matches.index_of(id)) {
            (Some(profile), Some(flag)) => flag > profile,
            _ => true,
        };
        if let Some(profile) = self.profile {
            config.apply_profile(profile);
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(beta) = self.beta.filter(|_| after_profile("beta")) {
            config.beta = beta;
        }
        if let Some(history) = self.history.filter(|_| after_profile("history")) {
            config.history_window = history;
        }
        if let Some(braid) = self.braid.filter(|_| after_profile("braid")) {
            config.braid_probability = braid;
        }
        config.run_benchmark = self.benchmark;
        config.export_path = self.output;
        config.style = self.style;
        config.color = self.color;
        config.border = self.border;
        config
    }
}

fn parse_args() -> (MazeConfig, Option<Profile>) {
    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    let profile = args.profile;
    (args.into_config(&matches), profile)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ANTIDFS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let (config, profile) = parse_args();
    match run(&config, profile) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &MazeConfig, profile: Option<Profile>) -> Result<(), MazeError> {
    let mut stdout = io::stdout();
    if let Some(profile) = profile {
        writeln!(stdout, "Applied profile: {profile}")?;
        writeln!(stdout)?;
    }
    if config.run_benchmark {
        return benchmark::run_full_suite(&mut stdout);
    }
    config.validate()?;

    print_header(&mut stdout)?;
    print_configuration(&mut stdout, config)?;

    let mut generator = Generator::from_config(config)?;
    let (start_x, start_y) = config.start;
    let (exit_x, exit_y) = config.exit_cell();

    let started = Instant::now();
    generator.generate(start_x, start_y)?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    generator.set_entrance_exit(start_x, start_y, exit_x, exit_y)?;
    generator.open_boundary_entrance(start_x, start_y, Direction::Up);
    generator.open_boundary_entrance(exit_x, exit_y, Direction::Down);

    writeln!(stdout, "Generated Maze:")?;
    writeln!(stdout)?;
    if config.color {
        write_colored(&mut stdout, &generator, config.style)?;
    } else {
        let text = render(&generator, config.style);
        if config.border {
            let title = format!("{}x{} seed {}", config.width, config.height, config.seed);
            write!(stdout, "{}", render_with_border(&text, Some(&title)))?;
        } else {
            write!(stdout, "{text}")?;
        }
    }
    writeln!(stdout)?;

    writeln!(
        stdout,
        "Generation time: {:.3} ms ({:.6} s)",
        elapsed_ms,
        elapsed_ms / 1000.0
    )?;
    writeln!(stdout)?;
    writeln!(stdout, "{}", MazeStats::calculate(generator.grid()))?;
    info!(braids = generator.braid_count(), "generation finished");

    if let Some(path) = &config.export_path {
        match export_text(&generator, path, config.style, true) {
            Ok(()) => writeln!(stdout, "\nExported to: {}", path.display())?,
            Err(e) => eprintln!("Export failed: {e}"),
        }
    }
    Ok(())
}

fn print_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "  antidfs maze generator v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out)
}

fn print_configuration<W: Write>(out: &mut W, config: &MazeConfig) -> io::Result<()> {
    writeln!(out, "Configuration:")?;
    writeln!(out, "  Size: {} × {}", config.width, config.height)?;
    writeln!(out, "  Seed: {}", config.seed)?;
    writeln!(
        out,
        "  Anti-Persistence: β={}, k={}",
        config.beta, config.history_window
    )?;
    writeln!(out, "  Braiding: p={}", config.braid_probability)?;
    writeln!(out)
}
