//! Braze CLI - expose a C++ class to Python
//!
//! `braze Outer::Inner::Widget` locates the class's header under the
//! install root, checks that its compiled shared library exists, and
//! writes the Cython wrapper source plus its `setup.py` next to the
//! header. On any failure a single diagnostic line goes to stderr and
//! the process exits non-zero with nothing written.

use anyhow::{bail, Result};
use braze_weld::{BindingBuilder, DumpCommand, JsonFile, QualifiedName, TargetCapabilities};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("braze: error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    // BRAZE_LOG controls verbosity, default "info"
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("BRAZE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Parsed command line
struct Cli {
    /// Fully-qualified class to interface
    class: String,
    /// Install root overriding BRAZE_HOME
    root: Option<PathBuf>,
    /// Header dump executable overriding the default
    parser: Option<String>,
    /// Pre-dumped JSON tree consumed instead of running the parser
    tree: Option<PathBuf>,
    /// Plan one initializer per constructor overload
    allow_overloads: bool,
}

impl Cli {
    fn parse(args: &[String]) -> Result<Option<Self>> {
        let mut class = None;
        let mut root = None;
        let mut parser = None;
        let mut tree = None;
        let mut allow_overloads = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--help" | "-h" => {
                    usage();
                    return Ok(None);
                }
                "--root" => {
                    if i + 1 < args.len() {
                        root = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    } else {
                        bail!("--root requires a directory");
                    }
                }
                "--parser" => {
                    if i + 1 < args.len() {
                        parser = Some(args[i + 1].clone());
                        i += 2;
                    } else {
                        bail!("--parser requires an executable name");
                    }
                }
                "--tree" => {
                    if i + 1 < args.len() {
                        tree = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    } else {
                        bail!("--tree requires a file");
                    }
                }
                "--allow-overloads" => {
                    allow_overloads = true;
                    i += 1;
                }
                arg if !arg.starts_with('-') => {
                    if class.is_some() {
                        bail!("Exactly one class identifier expected");
                    }
                    class = Some(arg.to_string());
                    i += 1;
                }
                _ => {
                    bail!("Unknown flag: {}", args[i]);
                }
            }
        }

        let Some(class) = class else {
            usage();
            bail!("Missing class identifier");
        };

        Ok(Some(Self {
            class,
            root,
            parser,
            tree,
            allow_overloads,
        }))
    }
}

fn run(args: &[String]) -> Result<()> {
    let Some(cli) = Cli::parse(args)? else {
        return Ok(());
    };

    // The environment is consulted exactly once, here at the boundary.
    let root = match cli.root {
        Some(root) => root,
        None => match env::var_os("BRAZE_HOME") {
            Some(home) => PathBuf::from(home),
            None => bail!("BRAZE_HOME is not set and no --root was given"),
        },
    };

    let name = QualifiedName::parse(&cli.class)?;
    let mut builder = BindingBuilder::new(root, name);

    if let Some(tree) = cli.tree {
        builder = builder.parser(JsonFile::new(tree));
    } else if let Some(parser) = cli.parser {
        builder = builder.parser(DumpCommand::new(parser));
    }
    if cli.allow_overloads {
        builder = builder.capabilities(TargetCapabilities::with_overloads());
    }

    let written = builder.build()?;
    println!("  ✓ {} -> {}", cli.class, written.pyx_file.display());

    Ok(())
}

/// Print command usage
fn usage() {
    eprintln!("braze [options] <Namespace::Class>");
    eprintln!();
    eprintln!("Expose a C++ class to Python.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <Namespace::Class>        Fully-qualified class to interface");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --root <dir>              Install root (default: $BRAZE_HOME)");
    eprintln!("  --parser <cmd>            Header dump executable (default: cppheaderdump)");
    eprintln!("  --tree <file>             Read a pre-dumped JSON class tree");
    eprintln!("  --allow-overloads         Plan one initializer per constructor overload");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  braze Gold::rectangle");
    eprintln!("  braze --root /opt/gold Gold::math::expression");
}
