//! ZX Console Headless Runner
//!
//! Feeds a byte stream through the console and writes out the resulting
//! display as text, JSON, pixel art, a PPM image or a `.scr` screen dump.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use zx_console::{Console, ConsoleConfig, Font, MemorySurface};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
    Art,
    Ppm,
    Scr,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut input_file: Option<PathBuf> = None;
    let mut output_file: Option<PathBuf> = None;
    let mut config_file: Option<PathBuf> = None;
    let mut output_format = OutputFormat::Text;
    let mut flash_phase = false;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-f" | "--file" => {
                i += 1;
                if i < args.len() {
                    input_file = Some(PathBuf::from(&args[i]));
                }
            },
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_file = Some(PathBuf::from(&args[i]));
                }
            },
            "-c" | "--config" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(PathBuf::from(&args[i]));
                }
            },
            "-t" | "--text" => output_format = OutputFormat::Text,
            "-j" | "--json" => output_format = OutputFormat::Json,
            "-a" | "--art" => output_format = OutputFormat::Art,
            "-p" | "--ppm" => output_format = OutputFormat::Ppm,
            "-s" | "--scr" => output_format = OutputFormat::Scr,
            "--flash" => flash_phase = true,
            "-h" | "--help" => show_help = true,
            _ => {
                // Treat as input file if no flag
                if input_file.is_none() && !args[i].starts_with('-') {
                    input_file = Some(PathBuf::from(&args[i]));
                }
            },
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let config = match &config_file {
        Some(path) => match ConsoleConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            },
        },
        None => ConsoleConfig::default(),
    };

    let custom_font = match config.load_font() {
        Ok(font) => font,
        Err(e) => {
            eprintln!("Error loading font: {}", e);
            return ExitCode::FAILURE;
        },
    };
    let font = custom_font.as_ref().unwrap_or(Font::builtin());

    // Read input
    let input_data = match &input_file {
        Some(path) => match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            },
        },
        None => {
            let mut data = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut data) {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
            data
        },
    };

    let mut console = Console::with_config(MemorySurface::new(), font, &config);
    console.clear();
    console.feed(&input_data);
    tracing::info!(
        "Processed {} bytes, {} scrolls",
        input_data.len(),
        console.scroll_count()
    );

    let output = match output_format {
        OutputFormat::Text => {
            let snapshot = console.snapshot();
            let mut text = format!(
                "Cursor: ({}, {})  Attribute: {:#04x}  Scrolls: {}\n---\n",
                snapshot.cursor.col,
                snapshot.cursor.row,
                snapshot.attribute.bits(),
                snapshot.scroll_count
            );
            text.push_str(&snapshot.to_text(font));
            text.push_str("---\n");
            text.into_bytes()
        },
        OutputFormat::Json => match console.snapshot().to_json() {
            Ok(json) => json.into_bytes(),
            Err(e) => {
                eprintln!("Error serializing snapshot: {}", e);
                return ExitCode::FAILURE;
            },
        },
        OutputFormat::Art => console.snapshot().to_pixel_art().into_bytes(),
        OutputFormat::Ppm => console.frame(flash_phase).to_ppm(),
        OutputFormat::Scr => console.surface().to_scr(),
    };

    let result = match &output_file {
        Some(path) => std::fs::write(path, &output),
        None => io::stdout().write_all(&output),
    };
    if let Err(e) = result {
        eprintln!("Error writing output: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn print_help() {
    println!("ZX Console Headless Runner");
    println!();
    println!("Usage: zx-headless [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -f, --file <PATH>    Read input from file");
    println!("  -o, --output <PATH>  Write output to file instead of stdout");
    println!("  -c, --config <PATH>  Load JSON console configuration");
    println!("  -t, --text           Output recognised text (default)");
    println!("  -j, --json           Output snapshot as JSON");
    println!("  -a, --art            Output bitmap as ASCII art");
    println!("  -p, --ppm            Output a 256x192 PPM image");
    println!("      --flash          Render the PPM in the inverted flash phase");
    println!("  -s, --scr            Output a 6912-byte .scr screen dump");
    println!("  -h, --help           Show this help message");
    println!();
    println!("If no input file is specified, reads from stdin.");
    println!();
    println!("Examples:");
    println!("  printf 'HELLO \\033[31mRED\\033[0m' | zx-headless");
    println!("  zx-headless --ppm -o screen.ppm input.txt");
    println!("  zx-headless --scr < banner.bin > banner.scr");
}
