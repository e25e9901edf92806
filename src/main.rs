use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use quiz_import::config::OutputFormat;
use quiz_import::{
    export, load_questions_from_json, parse, parse_stored_json, telemetry, to_stored_json, Config,
    Quiz, QuizError,
};
use tracing::{debug, info};

/// Exit status when non-empty input produced no questions.
const EXIT_NOTHING_PARSED: i32 = 2;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML config file (defaults to $QUIZ_IMPORT_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse pasted quiz text into question records
    Import {
        /// Text file to read, or `-` for stdin
        input: PathBuf,
        /// Output format (overrides the config)
        #[arg(short, long, value_enum)]
        format: Option<Format>,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Convert stored question JSON to the text format
    Export {
        /// JSON file to read, or `-` for stdin
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Walk through the questions in the terminal
    Preview {
        /// Quiz text or stored JSON, or `-` for stdin
        input: PathBuf,
        /// Treat the input as stored JSON (implied by a `.json` extension)
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Text,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Text => OutputFormat::Text,
        }
    }
}

fn main() {
    telemetry::init_tracing();
    let args = Args::parse();

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<i32, QuizError> {
    let config = Config::load(args.config.as_deref())?;
    debug!(?config, "resolved config");

    match args.command {
        Command::Import {
            input,
            format,
            output,
        } => {
            let raw = read_input(&input)?;
            let questions = parse(&raw);
            info!(questions = questions.len(), "imported quiz text");

            if questions.is_empty() && !raw.trim().is_empty() {
                eprintln!("Could not find any questions in the input.");
                return Ok(EXIT_NOTHING_PARSED);
            }

            let format = format.map_or(config.output.format, OutputFormat::from);
            let rendered = match format {
                OutputFormat::Json => to_stored_json(&questions, config.output.pretty)?,
                OutputFormat::Text => export(&questions),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Command::Export { input, output } => {
            let questions = if is_stdin(&input) {
                parse_stored_json(&read_input(&input)?)?
            } else {
                load_questions_from_json(&input)?
            };
            write_output(output.as_deref(), &export(&questions))?;
        }
        Command::Preview { input, json } => {
            let quiz = if (json || has_json_extension(&input)) && !is_stdin(&input) {
                Quiz::from_json(&input)?
            } else if json {
                Quiz::new(parse_stored_json(&read_input(&input)?)?)
            } else {
                Quiz::from_text(&read_input(&input)?)
            };

            if quiz.app().total_questions() == 0 {
                eprintln!("Could not find any questions in the input.");
                return Ok(EXIT_NOTHING_PARSED);
            }
            quiz.with_config(&config).run()?;
        }
    }

    Ok(0)
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> io::Result<String> {
    if is_stdin(path) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
    }
}

fn write_output(path: Option<&Path>, content: &str) -> io::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, format!("{}\n", content))?;
            info!(path = %path.display(), "wrote output");
            Ok(())
        }
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}
