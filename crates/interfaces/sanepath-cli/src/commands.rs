use crate::OutputFormat;
use anyhow::{Context, Result};
use camino::Utf8Path;
use humansize::{format_size, DECIMAL};
use sanepath_config::ComparerChoice;
use sanepath_core::{
    DirectoryProbe, NaturalComparer, Ordinal, OrdinalIgnoreCase, PathFlavor, PathOrderer,
    PathSanitizer, SanitizePolicy,
};
use sanepath_infra::{list_directory_with, resolve_under, CachedProbe, Entry, FsProbe, ListOptions};
use std::io::{BufRead, Write};
use tracing::debug;

/// Positional paths, or one path per line of `input` when there are none.
pub fn read_inputs(paths: Vec<String>, input: impl BufRead) -> Result<Vec<String>> {
    if !paths.is_empty() {
        return Ok(paths);
    }
    let mut lines = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read paths from stdin")?;
        lines.push(line.trim_end_matches('\r').to_string());
    }
    debug!("Read {} paths from stdin", lines.len());
    Ok(lines)
}

pub fn cmd_sanitize(
    out: &mut impl Write,
    inputs: &[String],
    policy: SanitizePolicy,
    format: OutputFormat,
) -> Result<()> {
    let sanitizer = PathSanitizer::new(policy);
    for raw in inputs {
        let sanitized = sanitizer.sanitize(raw);
        match format {
            OutputFormat::Value => writeln!(out, "{}", sanitized)?,
            OutputFormat::Parts => writeln!(out, "{}", sanitized.parts.join("\t"))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&sanitized)?)?,
        }
    }
    Ok(())
}

pub fn cmd_sort(
    out: &mut impl Write,
    paths: &[String],
    comparer: ComparerChoice,
    flavor: PathFlavor,
) -> Result<()> {
    let mut probe = CachedProbe::new(FsProbe::new());
    probe.preload(paths);

    let mut sorted = paths.to_vec();
    sort_paths(probe, comparer, flavor, &mut sorted);
    for path in &sorted {
        writeln!(out, "{}", path)?;
    }
    Ok(())
}

/// Sort with whichever inner comparer was chosen.
pub fn sort_paths<P: DirectoryProbe>(
    probe: P,
    comparer: ComparerChoice,
    flavor: PathFlavor,
    paths: &mut [String],
) {
    match comparer {
        ComparerChoice::Natural => PathOrderer::with_comparer(probe, NaturalComparer::new())
            .with_flavor(flavor)
            .sort(paths),
        ComparerChoice::NaturalIgnoreCase => {
            PathOrderer::with_comparer(probe, NaturalComparer::ignore_case())
                .with_flavor(flavor)
                .sort(paths)
        }
        ComparerChoice::Ordinal => PathOrderer::with_comparer(probe, Ordinal)
            .with_flavor(flavor)
            .sort(paths),
        ComparerChoice::OrdinalIgnoreCase => PathOrderer::with_comparer(probe, OrdinalIgnoreCase)
            .with_flavor(flavor)
            .sort(paths),
    }
}

pub fn cmd_ls(
    out: &mut impl Write,
    dir: &Utf8Path,
    options: &ListOptions,
    comparer: ComparerChoice,
    long: bool,
) -> Result<()> {
    let entries = list_entries(dir, options, comparer)
        .with_context(|| format!("Failed to list {}", dir))?;

    let mut total = 0u64;
    for entry in &entries {
        let suffix = if entry.is_dir { "/" } else { "" };
        if long {
            let size = if entry.is_dir {
                "-".to_string()
            } else {
                format_size(entry.len, DECIMAL)
            };
            writeln!(out, "{:>10}  {}{}", size, entry.rel_path, suffix)?;
        } else {
            writeln!(out, "{}{}", entry.rel_path, suffix)?;
        }
        total += entry.len;
    }

    if long {
        writeln!(
            out,
            ":: {} entries, {}",
            entries.len(),
            format_size(total, DECIMAL)
        )?;
    }
    Ok(())
}

fn list_entries(
    dir: &Utf8Path,
    options: &ListOptions,
    comparer: ComparerChoice,
) -> Result<Vec<Entry>, sanepath_infra::InfraError> {
    match comparer {
        ComparerChoice::Natural => list_directory_with(dir, options, NaturalComparer::new()),
        ComparerChoice::NaturalIgnoreCase => {
            list_directory_with(dir, options, NaturalComparer::ignore_case())
        }
        ComparerChoice::Ordinal => list_directory_with(dir, options, Ordinal),
        ComparerChoice::OrdinalIgnoreCase => list_directory_with(dir, options, OrdinalIgnoreCase),
    }
}

pub fn cmd_resolve(
    out: &mut impl Write,
    root: &Utf8Path,
    inputs: &[String],
    policy: SanitizePolicy,
) -> Result<()> {
    for raw in inputs {
        let resolved = resolve_under(root, raw, &policy)
            .with_context(|| format!("Cannot place '{}' under {}", raw, root))?;
        writeln!(out, "{}", resolved)?;
    }
    Ok(())
}
