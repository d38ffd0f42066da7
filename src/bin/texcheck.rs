//! texcheck CLI - Validate and normalize wiki-style TeX math

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use texcheck::{
    diagnostics::{diagnose, format_diagnostics},
    CheckOptions, Whitelist,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "texcheck")]
#[command(version)]
#[command(about = "texcheck - Validate and normalize wiki-style TeX math", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Formula to check (reads stdin or --file if not provided)
    formula: Option<String>,

    /// Read the input from a file
    #[arg(long)]
    file: Option<String>,

    /// Treat every input line as a separate formula
    #[arg(long)]
    lines: bool,

    /// Print diagnostics instead of result codes
    #[arg(long)]
    explain: bool,

    /// Reject formulas whose last command is missing arguments
    #[arg(long)]
    strict: bool,

    /// Keep a superscript in front of a following subscript
    #[arg(long)]
    no_reorder: bool,

    /// Use colored output (for --explain)
    #[arg(long)]
    color: bool,

    /// Extra whitelisted commands, from a TOML or JSON file
    #[cfg(feature = "data-loading")]
    #[arg(long)]
    whitelist: Option<String>,

    /// Log rejections to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Show version and whitelist info
    Info,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let whitelist = load_whitelist(&cli)?;

    if let Some(Commands::Info) = cli.command {
        print_info(&whitelist);
        return Ok(());
    }

    // Read input
    let input = match (&cli.formula, &cli.file) {
        (Some(formula), _) => formula.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let options = CheckOptions {
        reorder_scripts: !cli.no_reorder,
        ..if cli.strict {
            CheckOptions::strict()
        } else {
            CheckOptions::lenient()
        }
    };

    let formulas: Vec<&str> = if cli.lines {
        input.lines().filter(|line| !line.trim().is_empty()).collect()
    } else {
        // A trailing newline from stdin or a file is not part of the formula
        vec![input.strip_suffix('\n').unwrap_or(&input)]
    };

    let mut output = String::new();
    let mut rejected = 0;
    for formula in formulas {
        let report = diagnose(formula, &whitelist, options);
        if !report.result.is_accepted() {
            rejected += 1;
        }
        if cli.explain {
            output.push_str(&format_diagnostics(&report, cli.color));
            output.push('\n');
        } else {
            output.push_str(&report.result.to_string());
            output.push('\n');
        }
    }

    // Output
    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            file.write_all(output.as_bytes())?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            print!("{}", output);
        }
    }

    if rejected > 0 {
        log::debug!("{} formula(s) rejected", rejected);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(all(feature = "cli", feature = "data-loading"))]
fn load_whitelist(cli: &Cli) -> io::Result<Whitelist> {
    match &cli.whitelist {
        Some(path) => Whitelist::from_path(path)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err.to_string())),
        None => Ok(Whitelist::new()),
    }
}

#[cfg(all(feature = "cli", not(feature = "data-loading")))]
fn load_whitelist(_cli: &Cli) -> io::Result<Whitelist> {
    Ok(Whitelist::new())
}

#[cfg(feature = "cli")]
fn print_info(whitelist: &Whitelist) {
    println!("texcheck - Validate and normalize wiki-style TeX math");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Whitelist:");
    println!("  {} accepted commands", whitelist.names().count());
    println!("  {} extension commands", whitelist.extension_count());
    println!();
    println!("Result codes:");
    println!("  +<tex>   accepted, followed by the canonical formula");
    println!("  F\\<name> unknown command");
    println!("  S        syntax error or unterminated group");
    println!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install texcheck --features cli");
    eprintln!("  texcheck [OPTIONS] [FORMULA]");
}
