use clap::{CommandFactory, Parser};
use crossterm::style::Stylize;
use num2word_core::config::Config;
use num2word_core::core::engine::{ErrorPolicy, NumeralEngine};
use num2word_core::error::{Error, Result};
use num2word_core::persistence::{convert_directory, convert_file, is_same_path};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Convert the digits of Greek transcripts to their equivalent Greek words.
///
/// E.g. a file containing "100 ευρώ" is rewritten to "εκατό ευρώ". A single
/// file or every file of a directory with the given extension is processed.
/// Without --out-path the files are replaced in place, after a prompt.
#[derive(Parser, Debug)]
#[command(name = "num2word", version)]
struct Args {
    /// A test sentence to convert and print
    #[arg(short = 't', long)]
    test_word: Option<String>,

    /// Path to a file or a directory containing the text files
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Extension of the text files to convert inside a directory [default: .txt]
    #[arg(short, long)]
    extension: Option<String>,

    /// Output file or directory. A directory input needs a directory here
    #[arg(short, long)]
    out_path: Option<PathBuf>,

    /// Lowercase the text before converting
    #[arg(long)]
    lowercase: bool,

    /// Abort on numerals that cannot be converted instead of keeping them
    #[arg(long)]
    strict: bool,

    /// Replace files in place without asking
    #[arg(short = 'y', long = "yes")]
    yes: bool,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    if args.test_word.is_none() && args.path.is_none() {
        Args::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "provide at least one of --test-word or --path",
            )
            .exit();
    }
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(ext) = &args.extension {
        config.extension = ext.clone();
    }
    if args.lowercase {
        config.lowercase = true;
    }
    if args.strict {
        config.on_error = ErrorPolicy::Abort;
    }
    if args.yes {
        config.assume_yes = true;
    }
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let engine = NumeralEngine::with_options(config.engine_options());

    if let Some(word) = &args.test_word {
        println!("{}", engine.convert_sentence(word)?);
        println!("Converted test word, now exiting...");
        return Ok(());
    }

    let Some(path) = args.path else {
        return Ok(());
    };
    if !path.exists() {
        return Err(Error::NotFound(path));
    }
    let path = path.canonicalize().map_err(|e| Error::io(&path, e))?;

    let out_path = match args.out_path {
        Some(out) => out,
        None if path.is_file() => path.parent().map(Path::to_path_buf).unwrap_or_default(),
        None => path.clone(),
    };

    if path.is_file() {
        let out_path = match path.file_name() {
            Some(name) if out_path.is_dir() => out_path.join(name),
            _ => out_path,
        };
        if is_same_path(&path, &out_path) && !config.assume_yes && !confirm_replace(&path)? {
            return Err(Error::Aborted);
        }
        convert_file(&engine, &path, &out_path)?;
        println!("{}", "Success!".green().bold());
        println!("Done processing file: {}", path.display());
        println!("The output is saved in: {}", out_path.display());
        return Ok(());
    }

    if out_path.is_file() {
        return Err(Error::OutputNotDirectory(out_path));
    }
    if is_same_path(&path, &out_path) && !config.assume_yes && !confirm_replace(&path)? {
        return Err(Error::Aborted);
    }
    let written = convert_directory(&engine, &path, &out_path, &config.extension)?;
    println!("{}", "Success!".green().bold());
    println!(
        "Done processing {} files from the directory: {}",
        written.len(),
        path.display()
    );
    Ok(())
}

fn confirm_replace(path: &Path) -> Result<bool> {
    let question = format!(
        "Are you sure you want to replace the contents of {}?",
        path.display()
    );
    print!("{} [Y/N] ", question.yellow());
    io::stdout().flush().map_err(|e| Error::io("<stdout>", e))?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .map_err(|e| Error::io("<stdin>", e))?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "sure"
    ))
}
