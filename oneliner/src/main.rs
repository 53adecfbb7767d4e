use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, info};
use oneliner_lib::{
    one_liner, FormatOptions, Language, LineEnding, DEFAULT_CONTAINER_TAG,
    DEFAULT_MAX_LINE_LENGTH,
};
use rayon::prelude::*;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

const ONELINER_INTRO: &str = r#"
      ___             _ _
     / _ \ _ __   ___| (_)_ __   ___ _ __
    | | | | '_ \ / _ \ | | '_ \ / _ \ '__|
    | |_| | | | |  __/ | | | | |  __/ |
     \___/|_| |_|\___|_|_|_| |_|\___|_|

    One rule, one line.
"#;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LanguageArg {
    Css,
    Html,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Css => Language::Css,
            LanguageArg::Html => Language::Html,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EolArg {
    Lf,
    Crlf,
}

impl From<EolArg> for LineEnding {
    fn from(arg: EolArg) -> Self {
        match arg {
            EolArg::Lf => LineEnding::Lf,
            EolArg::Crlf => LineEnding::CrLf,
        }
    }
}

#[derive(Parser)]
#[command(name = "oneliner", version)]
#[command(about = "Collapse single-declaration CSS rules onto one line")]
struct Args {
    /// Files to format. Reads stdin and writes stdout when empty.
    files: Vec<PathBuf>,

    /// Document language. Detected from the file extension when omitted.
    #[arg(short, long, value_enum)]
    language: Option<LanguageArg>,

    /// Line ending for inserted line breaks. Detected per document when omitted.
    #[arg(long, value_enum)]
    eol: Option<EolArg>,

    /// Longest collapsed rule, counting its two trailing line breaks.
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LENGTH)]
    max_line_length: usize,

    /// HTML tag whose indentation level is removed.
    #[arg(long, default_value = DEFAULT_CONTAINER_TAG)]
    container: String,

    /// Leave indentation as the pretty-printer produced it.
    #[arg(long)]
    no_indent: bool,

    /// Put every attribute selector on its own line first.
    #[arg(long)]
    split_attributes: bool,

    /// Rewrite files in place.
    #[arg(short, long, conflicts_with = "check")]
    write: bool,

    /// Exit with status 1 if any file would change.
    #[arg(long)]
    check: bool,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Result of formatting one file.
struct Formatted {
    path: PathBuf,
    text: String,
    changed: bool,
}

fn main() {
    let args: Args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if args.verbose > 0 {
        eprintln!("{}", ONELINER_INTRO);
    }

    match run(&args) {
        Ok(true) if args.check => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether any document changed.
fn run(args: &Args) -> Result<bool> {
    if args.files.is_empty() {
        return run_stdin(args);
    }

    let results: Vec<Result<Formatted>> = args
        .files
        .par_iter()
        .map(|path| format_file(args, path))
        .collect();

    let mut any_changed = false;
    let mut stdout = io::stdout().lock();
    for result in results {
        let formatted = result?;
        any_changed |= formatted.changed;

        if args.check {
            if formatted.changed {
                println!("{}", formatted.path.display());
            }
        } else if args.write {
            if formatted.changed {
                fs::write(&formatted.path, &formatted.text)
                    .with_context(|| format!("writing {}", formatted.path.display()))?;
                info!("formatted {}", formatted.path.display());
            }
        } else {
            stdout.write_all(formatted.text.as_bytes())?;
        }
    }
    Ok(any_changed)
}

fn run_stdin(args: &Args) -> Result<bool> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;

    let language = args.language.map(Language::from).unwrap_or(Language::Css);
    let text = format_text(args, &input, language);
    let changed = text != input;
    if !args.check {
        io::stdout().write_all(text.as_bytes())?;
    }
    Ok(changed)
}

fn format_file(args: &Args, path: &Path) -> Result<Formatted> {
    let language = match args.language {
        Some(language) => language.into(),
        None => detect_language(path)?,
    };
    let input = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let text = format_text(args, &input, language);
    let changed = text != input;
    debug!("{}: {:?}, changed = {}", path.display(), language, changed);

    Ok(Formatted {
        path: path.to_path_buf(),
        text,
        changed,
    })
}

fn detect_language(path: &Path) -> Result<Language> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension)
        .ok_or_else(|| {
            anyhow!(
                "cannot tell the language of {}, pass --language",
                path.display()
            )
        })
}

fn format_text(args: &Args, input: &str, language: Language) -> String {
    let line_ending = args
        .eol
        .map(LineEnding::from)
        .unwrap_or_else(|| LineEnding::detect(input));
    let opts = FormatOptions::new()
        .with_line_ending(line_ending)
        .with_max_line_length(args.max_line_length)
        .with_container_tag(args.container.clone())
        .with_normalize_indentation(!args.no_indent)
        .with_split_attributes(args.split_attributes);
    debug!("line ending {}", line_ending);

    one_liner::format_document(input, language, &opts)
}
