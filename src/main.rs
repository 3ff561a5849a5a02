// SPDX-License-Identifier: MPL-2.0
use iced::Size;
use lens_header::app::{self, Flags, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use lens_header::config::{self, HeaderConfig};
use lens_header::header::{Header, Insets, StaticEnvironment};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
lens-header

USAGE:
  lens-header [OPTIONS]

OPTIONS:
  --config PATH       Header configuration file (TOML)
  --safe-top N        Simulated top safe-area inset [default: 0]
  --pages N           Number of pages to page through [default: 1]
  --print-layout      Print control frames instead of opening a window
  --width W           Container width for --print-layout
  --height H          Container height for --print-layout
  --landscape         Force landscape orientation for --print-layout
  -h, --help          Print help
";

struct Args {
    config: Option<PathBuf>,
    safe_top: f32,
    pages: i64,
    print_layout: bool,
    width: f32,
    height: f32,
    landscape: bool,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let parsed = Args {
        config: args
            .opt_value_from_str::<_, String>("--config")?
            .map(PathBuf::from),
        safe_top: args.opt_value_from_str("--safe-top")?.unwrap_or(0.0),
        pages: args.opt_value_from_str("--pages")?.unwrap_or(1),
        print_layout: args.contains("--print-layout"),
        width: args
            .opt_value_from_str("--width")?
            .unwrap_or(WINDOW_DEFAULT_WIDTH),
        height: args
            .opt_value_from_str("--height")?
            .unwrap_or(WINDOW_DEFAULT_HEIGHT),
        landscape: args.contains("--landscape"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!("Ignoring unexpected arguments: {:?}", remaining);
    }
    Ok(parsed)
}

fn load_config(path: Option<&PathBuf>) -> HeaderConfig {
    match path {
        Some(path) => config::load_from_path(path).unwrap_or_else(|err| {
            tracing::warn!("Failed to load {}: {}, using defaults", path.display(), err);
            HeaderConfig::default()
        }),
        None => {
            let (config, warning) = config::load();
            if let Some(warning) = warning {
                tracing::warn!("{}", warning);
            }
            config
        }
    }
}

fn print_layout(args: &Args, config: &HeaderConfig) {
    let mut env = StaticEnvironment::new(
        Size::new(args.width, args.height),
        Insets::top(args.safe_top),
    );
    if args.landscape {
        env = env.landscape(true);
    }

    let mut header = Header::new(config);
    header.update_page(1, args.pages);
    header.on_layout_requested(&env);

    println!("height: {}", header.height());
    for control in header.controls() {
        let frame = control.frame();
        println!(
            "{:<15} {:<8} x={} y={} w={} h={}",
            control.role().to_string(),
            if header.is_visible(control.role()) {
                "visible"
            } else {
                "hidden"
            },
            frame.x,
            frame.y,
            frame.width,
            frame.height
        );
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print!("{}", HELP);
        return Ok(());
    }

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, HELP);
            std::process::exit(2);
        }
    };
    let config = load_config(args.config.as_ref());

    if args.print_layout {
        print_layout(&args, &config);
        return Ok(());
    }

    tracing::info!("Starting header demo");
    app::run(Flags {
        config,
        safe_top: args.safe_top,
        pages: args.pages,
    })
}
