// Tue Jan 13 2026 - Alex

use anyhow::{bail, Context, Result};
use bitdasm::{
    config::Config,
    disasm::{AnnotationFile, Disassembler},
    utils::{format_duration, logging, LoggingUtils},
};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Bit-level disassembler for the SP0256 speech processor", long_about = None)]
struct Args {
    /// ROM image to disassemble.
    rom: Option<PathBuf>,

    /// Annotation file (org, code, data, oper, sym).
    annotations: Option<PathBuf>,

    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file; flags given here override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Load address of the image, in hex.
    #[arg(long, value_parser = parse_origin)]
    origin: Option<u32>,

    #[arg(long)]
    comment_char: Option<char>,

    #[arg(long)]
    no_symbols: bool,

    #[arg(long)]
    no_xrefs: bool,

    #[arg(long)]
    export_symbols: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(long)]
    no_progress: bool,
}

fn parse_origin(s: &str) -> Result<u32, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix('$'))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).map_err(|e| format!("bad hex origin {:?}: {}", s, e))
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = build_config(&args)?;

    if std::env::var_os("RUST_LOG").is_some() {
        logging::init_from_env();
    } else {
        LoggingUtils::init_logger(LoggingUtils::level_from_verbosity(config.verbosity));
    }

    let start_time = Instant::now();

    let rom_path = match &config.rom {
        Some(path) => path.clone(),
        None => bail!("no ROM image given"),
    };

    eprintln!("{} Loading ROM: {}", "[*]".blue(), rom_path.display());
    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read ROM {}", rom_path.display()))?;
    eprintln!("{} Read {} bytes", "[+]".green(), rom.len());

    let annotations = match &config.annotations {
        Some(path) => {
            eprintln!("{} Loading annotations: {}", "[*]".blue(), path.display());
            let file = AnnotationFile::from_file(path)
                .with_context(|| format!("failed to load annotations {}", path.display()))?;
            eprintln!("{} {} annotations", "[+]".green(), file.len());
            Some(file)
        }
        None => None,
    };

    let mut dasm = Disassembler::new(&rom, annotations.as_ref(), &config)
        .context("failed to set up disassembler")?;

    let pb = spinner(config.show_progress);
    pb.set_message("Pass 1: decoding instructions");
    let decoded = dasm
        .decode_all_with(|insn| {
            pb.set_message(format!("Pass 1: {}", insn.address));
            pb.tick();
        })
        .context("pass 1 failed")?;
    pb.set_message("Pass 2: writing listing");

    let mut out: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    dasm.render(&mut out).context("pass 2 failed")?;
    dasm.render_symbols(&mut out)
        .context("failed to write symbol tables")?;
    out.flush()?;
    drop(out);
    pb.finish_and_clear();

    eprintln!(
        "{} Decoded {} instructions, {} symbols",
        "[+]".green(),
        decoded,
        dasm.symbols().len()
    );

    if let Some(path) = &config.export_symbols {
        dasm.symbols()
            .export_json_file(path)
            .with_context(|| format!("failed to export symbols to {}", path.display()))?;
        eprintln!("{} Symbols exported to {}", "[+]".green(), path.display());
    }

    if let Some(path) = &config.output {
        eprintln!("{} Listing written to {}", "[+]".green(), path.display());
    }
    eprintln!(
        "{} Done in {}",
        "[*]".blue(),
        format_duration(start_time.elapsed())
    );

    Ok(())
}

fn build_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(rom) = &args.rom {
        config = config.with_rom(rom.clone());
    }
    if let Some(annotations) = &args.annotations {
        config = config.with_annotations(annotations.clone());
    }
    if let Some(output) = &args.output {
        config = config.with_output(output.clone());
    }
    if let Some(origin) = args.origin {
        config = config.with_origin(origin);
    }
    if let Some(c) = args.comment_char {
        config = config.with_comment_char(c);
    }
    if args.no_symbols {
        config = config.with_dump_symbols(false);
    }
    if args.no_xrefs {
        config = config.with_dump_xrefs(false);
    }
    if let Some(path) = &args.export_symbols {
        config = config.with_export_symbols(path.clone());
    }
    if args.verbose > 0 {
        config = config.with_verbosity(args.verbose);
    }
    if args.no_progress {
        config = config.with_progress(false);
    }

    if let Err(msg) = config.validate() {
        bail!("invalid configuration: {}", msg);
    }
    Ok(config)
}

fn spinner(visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
