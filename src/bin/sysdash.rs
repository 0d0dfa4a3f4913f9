//! sysdash - live terminal dashboard of local system resources.
//!
//! Usage:
//!   sysdash                        # default theme
//!   sysdash -t nord                # start with the nord theme
//!   sysdash --list-themes          # print available themes
//!   sysdash --log-file sysdash.log -v

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, LevelFilter};

use sysdash::collector::SystemPlatform;
use sysdash::scheduler::REFRESH_INTERVAL;
use sysdash::theme::{self, ActiveTheme};
use sysdash::tui::App;

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

/// Live terminal dashboard of CPU, memory, disk and temperature.
#[derive(Parser)]
#[command(name = "sysdash", version, about = "System resource dashboard")]
struct Args {
    /// Theme to start with.
    #[arg(short, long, env = "SYSDASH_THEME", default_value = "default")]
    theme: String,

    /// Print the available themes and exit.
    #[arg(long)]
    list_themes: bool,

    /// Write logs to this file. The terminal is owned by the dashboard,
    /// so nothing is logged without it.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Verbose output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    if args.list_themes {
        for name in theme::list() {
            println!("{}", name);
        }
        return;
    }

    if let Some(path) = &args.log_file
        && let Err(e) = init_logging(path, args.verbose, args.quiet)
    {
        eprintln!("Error opening log file '{}': {}", path.display(), e);
        std::process::exit(1);
    }

    let active = match ActiveTheme::from_name(&args.theme) {
        Ok(active) => Arc::new(active),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let app = App::new(SystemPlatform::new(), active);
    if let Err(e) = app.run(REFRESH_INTERVAL) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}

/// Initializes logging into `path`.
fn init_logging(path: &Path, verbose: u8, quiet: bool) -> std::io::Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let directive: Directive = format!("sysdash={}", level)
        .parse()
        .unwrap_or_else(|_| LevelFilter::from_level(level).into());
    let filter = EnvFilter::from_default_env().add_directive(directive);

    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
