//! `pcparse` — inspect pkg-config (`.pc`) files.
//!
//! Each positional argument is either a path to a `.pc` file or a package
//! name, which is looked up in `--with-path` directories, then
//! `PKG_CONFIG_PATH`, then `PKG_CONFIG_LIBDIR` (or the default system
//! directories when that is unset).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{LevelFilter, debug};

use libpcparse::path::{DEFAULT_PKGCONFIG_PATH, SearchPath};
use libpcparse::{Dependency, ENV_PKG_CONFIG_LIBDIR, ENV_PKG_CONFIG_PATH, Package, VERSION};

/// Parse pkg-config metadata files and print what they declare.
#[derive(Parser, Debug)]
#[command(
    name = "pcparse",
    about = "parse and inspect pkg-config metadata files",
    long_about = None,
    disable_version_flag = true,
)]
struct Cli {
    // ── Basic options ────────────────────────────────────────────────
    /// Print the pcparse version.
    #[arg(long)]
    version: bool,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Add a directory to the front of the search path.
    #[arg(long = "with-path", value_name = "PATH")]
    with_path: Vec<PathBuf>,

    /// List all packages found on the search path.
    #[arg(long = "list-all")]
    list_all: bool,

    /// Only check that the files parse.
    #[arg(long)]
    validate: bool,

    // ── Querying fields ─────────────────────────────────────────────
    /// Print the whole package as JSON.
    #[arg(long)]
    json: bool,

    /// Print the package version.
    #[arg(long)]
    modversion: bool,

    /// Print the Cflags field.
    #[arg(long)]
    cflags: bool,

    /// Print the Libs field.
    #[arg(long)]
    libs: bool,

    /// Include the `.private` variants of Cflags and Libs.
    #[arg(long = "static")]
    r#static: bool,

    /// Print the value of a variable.
    #[arg(long, value_name = "VARNAME")]
    variable: Option<String>,

    /// Print the names of all variables defined in the file.
    #[arg(long = "print-variables")]
    print_variables: bool,

    /// Print the Requires list.
    #[arg(long = "print-requires")]
    print_requires: bool,

    /// Print the Requires.private list.
    #[arg(long = "print-requires-private")]
    print_requires_private: bool,

    /// Print the Provides list.
    #[arg(long = "print-provides")]
    print_provides: bool,

    // ── Positional ──────────────────────────────────────────────────
    /// `.pc` files or package names to read.
    packages: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Default to warnings only; `RUST_LOG` still takes precedence.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Build the search path: `--with-path`, then `PKG_CONFIG_PATH`, then
/// `PKG_CONFIG_LIBDIR` or the system defaults.
fn search_path(cli: &Cli) -> SearchPath {
    let mut sp = SearchPath::new();
    for dir in &cli.with_path {
        sp.add(dir.clone());
    }
    if let Some(env_path) = SearchPath::from_environ(ENV_PKG_CONFIG_PATH) {
        sp.extend(env_path);
    }
    match SearchPath::from_environ(ENV_PKG_CONFIG_LIBDIR) {
        Some(libdir) => sp.extend(libdir),
        None => {
            for dir in DEFAULT_PKGCONFIG_PATH {
                sp.add(*dir);
            }
        }
    }
    debug!("search path: {:?}", sp.dirs());
    sp
}

/// Treat `arg` as a file path if it looks like one, otherwise as a package name.
fn locate(arg: &str, sp: &SearchPath) -> Result<PathBuf> {
    let as_path = Path::new(arg);
    if arg.ends_with(".pc") || as_path.components().count() > 1 {
        return Ok(as_path.to_path_buf());
    }
    sp.find_pc_file(arg)
        .with_context(|| format!("Package '{arg}' was not found in the pkg-config search path"))
}

fn run(cli: &Cli) -> Result<()> {
    // --version
    if cli.version {
        println!("{VERSION}");
        return Ok(());
    }

    let sp = search_path(cli);

    // --list-all
    if cli.list_all {
        for (name, path) in sp.list_all_pc_files() {
            match libpcparse::load(&path) {
                Ok(pkg) if !pkg.description.is_empty() => {
                    println!("{name:40} {} - {}", pkg.name, pkg.description)
                }
                Ok(pkg) => println!("{name:40} {}", pkg.name),
                Err(e) => log::warn!("skipping {}: {e}", path.display()),
            }
        }
        return Ok(());
    }

    if cli.packages.is_empty() {
        bail!("Please specify at least one .pc file or package name on the command line");
    }

    for arg in &cli.packages {
        let path = locate(arg, &sp)?;
        let pkg = libpcparse::load(&path)
            .with_context(|| format!("Failed to load '{}'", path.display()))?;

        if cli.validate {
            continue;
        }
        print_package(cli, &pkg)?;
    }

    Ok(())
}

fn print_package(cli: &Cli, pkg: &Package) -> Result<()> {
    if cli.json {
        let json = serde_json::to_string_pretty(pkg).context("Failed to serialize package")?;
        println!("{json}");
        return Ok(());
    }

    let mut printed = false;

    if cli.modversion {
        println!("{}", pkg.version);
        printed = true;
    }

    if let Some(ref name) = cli.variable {
        println!("{}", pkg.variable(name).unwrap_or_default());
        printed = true;
    }

    if cli.print_variables {
        for name in pkg.vars.keys() {
            println!("{name}");
        }
        printed = true;
    }

    if cli.print_requires {
        print_dependencies(&pkg.requires);
        printed = true;
    }

    if cli.print_requires_private {
        print_dependencies(&pkg.requires_private);
        printed = true;
    }

    if cli.print_provides {
        print_dependencies(&pkg.provides);
        printed = true;
    }

    if cli.cflags || cli.libs {
        let mut flags = Vec::new();
        if cli.cflags {
            flags.push(pkg.collect_cflags(cli.r#static));
        }
        if cli.libs {
            flags.push(pkg.collect_libs(cli.r#static));
        }
        flags.retain(|f| !f.is_empty());
        println!("{}", flags.join(" "));
        printed = true;
    }

    if !printed {
        if pkg.description.is_empty() {
            println!("{pkg}");
        } else {
            println!("{pkg} - {}", pkg.description);
        }
    }

    Ok(())
}

fn print_dependencies(deps: &[Dependency]) {
    for dep in deps {
        println!("{dep}");
    }
}
