//! `weight-avl`: build an AVL tree from weights on stdin and print it.
//!
//! Usage:
//!   weight-avl [--duplicates] [--config <file>] [levels|dump|list|stats]
//!
//! Each input line is a weight, optionally followed by an identifier. Blank
//! lines and `#` comments are skipped. Set `RUST_LOG=weight_avl=debug` to see
//! rejected duplicates, or `trace` for every rotation.

use std::io::{self, Write};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use weight_avl::export::{max_weight, min_weight, read_weights, write_weights};
use weight_avl::print::{dump, render_levels};
use weight_avl::{AvlConfig, AvlError, AvlTree, WeightTree};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Levels,
    Dump,
    List,
    Stats,
}

struct Args {
    config: AvlConfig,
    mode: Mode,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut config = AvlConfig::default();
    let mut duplicates = false;
    let mut mode = Mode::Levels;
    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--duplicates" => duplicates = true,
            "--config" => {
                let path = it.next().ok_or("--config needs a file path")?;
                config = AvlConfig::load(path).map_err(|e| format!("{path}: {e}"))?;
            }
            "levels" => mode = Mode::Levels,
            "dump" => mode = Mode::Dump,
            "list" => mode = Mode::List,
            "stats" => mode = Mode::Stats,
            other => return Err(format!("Unknown argument: {other}")),
        }
    }
    if duplicates {
        config.accept_duplicates = true;
    }
    Ok(Args { config, mode })
}

fn run(args: Args) -> Result<(), AvlError> {
    let entries = read_weights(io::stdin().lock())?;
    let mut tree = WeightTree::<()>::new(AvlTree::from_config(&args.config));
    let mut rejected = 0usize;
    for (weight, id) in entries {
        let inserted = match id {
            Some(id) => tree.insert_with_id(weight, id, None),
            None => tree.insert(weight, None),
        };
        if !inserted {
            rejected += 1;
        }
    }
    info!(nodes = tree.len(), rejected, "tree built");

    let mut stdout = io::stdout().lock();
    match args.mode {
        Mode::Levels => stdout.write_all(render_levels(tree.root()).as_bytes())?,
        Mode::Dump => writeln!(stdout, "{}", dump(tree.root()))?,
        Mode::List => write_weights(tree.root(), &mut stdout)?,
        Mode::Stats => {
            writeln!(stdout, "count: {}", tree.len())?;
            writeln!(stdout, "rejected: {rejected}")?;
            writeln!(stdout, "height: {}", tree.height())?;
            match (min_weight(tree.root()), max_weight(tree.root())) {
                (Some(min), Some(max)) => {
                    writeln!(stdout, "min: {min}")?;
                    writeln!(stdout, "max: {max}")?;
                }
                _ => writeln!(stdout, "min: -\nmax: -")?,
            }
        }
    }
    debug!(mode = ?args.mode, "output written");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
