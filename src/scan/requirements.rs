use crate::error::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub marker: Option<String>,
    pub source: PathBuf,
    pub line: usize,
}

/// Parses a pip requirements file, following `-r` includes.
pub fn parse_requirements(path: &Path) -> Result<Vec<Requirement>> {
    let mut visited = HashSet::new();
    let mut requirements = Vec::new();
    parse_into(path, &mut visited, &mut requirements)?;
    Ok(requirements)
}

fn parse_into(
    path: &Path,
    visited: &mut HashSet<PathBuf>,
    out: &mut Vec<Requirement>,
) -> Result<()> {
    let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if !visited.insert(key) {
        debug!("skipping already included requirements file {}", path.display());
        return Ok(());
    }

    let content = std::fs::read_to_string(path)?;
    for (line_no, line) in logical_lines(&content) {
        match classify(&line) {
            Line::Include(target) => {
                let include = path
                    .parent()
                    .map(|dir| dir.join(&target))
                    .unwrap_or_else(|| PathBuf::from(&target));
                if include.exists() {
                    parse_into(&include, visited, out)?;
                } else {
                    warn!(
                        "{}:{} includes missing file {}",
                        path.display(),
                        line_no,
                        include.display()
                    );
                }
            }
            Line::Requirement { name, marker } => out.push(Requirement {
                name,
                marker,
                source: path.to_path_buf(),
                line: line_no,
            }),
            Line::Skip => {}
        }
    }
    Ok(())
}

/// Joins `\` continuations and strips comments; yields the 1-based starting line.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut pending = String::new();
    let mut start = 0;

    for (idx, raw) in content.lines().enumerate() {
        if pending.is_empty() {
            start = idx + 1;
        }
        let stripped = strip_comment(raw);
        if let Some(head) = stripped.trim_end().strip_suffix('\\') {
            pending.push_str(head);
            pending.push(' ');
            continue;
        }
        pending.push_str(stripped);
        let joined = pending.trim().to_string();
        pending.clear();
        if !joined.is_empty() {
            lines.push((start, joined));
        }
    }

    let tail = pending.trim();
    if !tail.is_empty() {
        lines.push((start, tail.to_string()));
    }
    lines
}

fn strip_comment(line: &str) -> &str {
    if line.trim_start().starts_with('#') {
        return "";
    }
    // pip only treats `#` as a comment when preceded by whitespace
    match line.find(" #").or_else(|| line.find("\t#")) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

enum Line {
    Include(String),
    Requirement {
        name: String,
        marker: Option<String>,
    },
    Skip,
}

fn classify(line: &str) -> Line {
    if let Some(target) = option_value(line, "-r", "--requirement") {
        return Line::Include(target);
    }
    if let Some(target) = option_value(line, "-e", "--editable") {
        return egg_name(&target).map_or(Line::Skip, |name| Line::Requirement {
            name,
            marker: None,
        });
    }
    if line.starts_with('-') {
        return Line::Skip;
    }

    let (spec, marker) = match line.split_once(';') {
        Some((spec, marker)) => (spec, Some(marker.trim().to_string())),
        None => (line, None),
    };
    let marker = marker.filter(|m| !m.is_empty());

    // `name @ https://...` direct references
    if let Some((head, _)) = spec.split_once('@') {
        if !head.contains("://") {
            if let Some(name) = leading_name(head) {
                return Line::Requirement { name, marker };
            }
        }
    }
    if is_url(spec) {
        return egg_name(spec).map_or(Line::Skip, |name| Line::Requirement { name, marker });
    }
    match leading_name(spec) {
        Some(name) => Line::Requirement { name, marker },
        None => Line::Skip,
    }
}

fn option_value(line: &str, short: &str, long: &str) -> Option<String> {
    let rest = if let Some(rest) = line.strip_prefix(long) {
        if let Some(value) = rest.strip_prefix('=') {
            value
        } else if rest.starts_with([' ', '\t']) {
            rest
        } else {
            return None;
        }
    } else {
        line.strip_prefix(short)?
    };
    let value = rest.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn is_url(line: &str) -> bool {
    line.contains("://") || line.starts_with("git+") || line.starts_with("file:")
}

fn egg_name(target: &str) -> Option<String> {
    let fragment = target.split_once("#egg=")?.1;
    let name: String = fragment
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();
    (!name.is_empty()).then_some(name)
}

fn leading_name(spec: &str) -> Option<String> {
    let spec = spec.trim();
    let first = spec.chars().next()?;
    if !first.is_ascii_alphanumeric() {
        return None;
    }
    let name: String = spec
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();
    Some(name.trim_end_matches(['-', '_', '.']).to_string())
}

/// PEP 503 normalization: lowercase with runs of `-`, `_` and `.` collapsed to `-`.
pub fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut last_sep = false;
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !last_sep {
                normalized.push('-');
            }
            last_sep = true;
        } else {
            normalized.push(c.to_ascii_lowercase());
            last_sep = false;
        }
    }
    normalized
}
