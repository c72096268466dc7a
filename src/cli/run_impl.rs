use anyhow::Result;

use crate::dispatch::{Formatter, dispatch};
use crate::traversal::{CollectOptions, collect_files};
use crate::types::Outcome;

use super::Args;

/// Collects the target files for `args` and runs the formatter on each.
///
/// # Errors
/// Returns an error if the scan root exists but cannot be resolved.
pub fn run_with_args(args: &Args) -> Result<()> {
    let opts = CollectOptions {
        recurse: !args.no_recurse,
        follow_symlinks: args.follow_symlinks,
    };

    if args.verbose > 0 {
        eprintln!("Scanning path: {}", args.dir.display());
        if args.root.is_some() {
            eprintln!("Ignoring --root (no effect)");
        }
    }
    let Some(files) = collect_files(&args.dir, &opts)? else {
        if args.verbose > 0 {
            eprintln!("{} does not exist; nothing to do", args.dir.display());
        }
        return Ok(());
    };
    if args.verbose > 0 {
        eprintln!("Found {} files to format", files.len());
    }

    if args.list {
        for f in &files {
            println!("{}", f.display());
        }
        return Ok(());
    }

    let formatter = args
        .formatter
        .as_deref()
        .map_or_else(Formatter::default, Formatter::new);

    // Progress setup
    let pb = if args.progress {
        let pb = indicatif::ProgressBar::new(files.len() as u64);
        if let Ok(style) =
            indicatif::ProgressStyle::with_template("{spinner} {pos}/{len} files {wide_bar} {eta}")
        {
            pb.set_style(style.tick_chars("⠁⠃⠇⠋⠙⠸⢰⣠⣄⡆"));
        }
        Some(pb)
    } else {
        None
    };

    let verbose = args.verbose;
    let summary = dispatch(&files, &formatter, |path, outcome| {
        if let Some(ref pb) = pb {
            pb.inc(1);
        }
        if verbose == 0 {
            return;
        }
        let msg = match outcome {
            Outcome::Formatted if verbose > 1 => format!("formatted {}", path.display()),
            Outcome::Formatted => return,
            Outcome::Failed(Some(code)) => {
                format!("formatter exited with {code} on {}", path.display())
            }
            Outcome::Failed(None) => {
                format!("formatter terminated by signal on {}", path.display())
            }
            Outcome::SpawnError(err) => format!(
                "could not run {} on {}: {err}",
                formatter.program().to_string_lossy(),
                path.display()
            ),
        };
        match &pb {
            Some(pb) => pb.println(msg),
            None => eprintln!("{msg}"),
        }
    });

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    if args.verbose > 0 {
        eprintln!(
            "Totals: invoked={}, succeeded={}, failed={}",
            summary.invoked,
            summary.succeeded(),
            summary.failed.len()
        );
    }
    Ok(())
}
