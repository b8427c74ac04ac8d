pub mod filesystem;
pub mod imports;
pub mod requirements;

use crate::error::Result;
use crate::types::config::ScanConfig;
use crate::types::report::UnusedRequirement;
use filesystem::{list_python_files, REQUIREMENTS_FILE};
use requirements::{normalize_name, parse_requirements, Requirement};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Distributions whose import name differs from the project name.
const MODULE_ALIASES: &[(&str, &[&str])] = &[
    ("beautifulsoup4", &["bs4"]),
    ("pyyaml", &["yaml"]),
    ("pillow", &["pil"]),
    ("scikit-learn", &["sklearn"]),
    ("scikit-image", &["skimage"]),
    ("opencv-python", &["cv2"]),
    ("opencv-python-headless", &["cv2"]),
    ("protobuf", &["google"]),
    ("python-dateutil", &["dateutil"]),
    ("python-dotenv", &["dotenv"]),
    ("pyjwt", &["jwt"]),
    ("attrs", &["attr", "attrs"]),
    ("mysqlclient", &["mysqldb"]),
    ("psycopg2-binary", &["psycopg2"]),
    ("pyserial", &["serial"]),
    ("pyzmq", &["zmq"]),
    ("pycryptodome", &["crypto"]),
    ("setuptools", &["setuptools", "pkg_resources"]),
    ("typing-extensions", &["typing_extensions"]),
    ("msgpack-python", &["msgpack"]),
    ("google-cloud-storage", &["google"]),
    ("faiss-cpu", &["faiss"]),
    ("tensorflow-gpu", &["tensorflow"]),
];

/// Settings for one unused-requirement pass over a checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerOptions {
    pub requirements_filename: PathBuf,
    pub paths: Vec<PathBuf>,
    pub ignore_files: Vec<String>,
    pub ignore_modules: Vec<String>,
    pub ignore_requirements: Vec<String>,
    pub skip_incompatible: bool,
}

impl AnalyzerOptions {
    pub fn for_checkout(dirpath: &Path, scan: &ScanConfig) -> Self {
        Self {
            requirements_filename: dirpath.join(REQUIREMENTS_FILE),
            paths: vec![dirpath.to_path_buf()],
            ignore_files: scan.ignore_files.clone(),
            ignore_modules: scan.ignore_modules.clone(),
            ignore_requirements: scan.ignore_requirements.clone(),
            skip_incompatible: scan.skip_incompatible,
        }
    }
}

pub trait DependencyAnalyzer {
    /// Requirements declared in the manifest but never imported under the search paths.
    fn find_unused(&self, options: &AnalyzerOptions) -> Result<Vec<UnusedRequirement>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ImportScanAnalyzer;

impl DependencyAnalyzer for ImportScanAnalyzer {
    fn find_unused(&self, options: &AnalyzerOptions) -> Result<Vec<UnusedRequirement>> {
        let used = collect_used_modules(options);
        let ignored: HashSet<String> = options
            .ignore_requirements
            .iter()
            .map(|name| normalize_name(name))
            .collect();

        let mut seen = HashSet::new();
        let mut unused = Vec::new();
        for requirement in parse_requirements(&options.requirements_filename)? {
            let normalized = normalize_name(&requirement.name);
            if ignored.contains(&normalized) {
                continue;
            }
            if options.skip_incompatible && requirement.marker.is_some() {
                debug!("skipping {} with environment marker", requirement.name);
                continue;
            }
            if !seen.insert(normalized.clone()) {
                continue;
            }
            if candidate_modules(&normalized)
                .iter()
                .any(|module| used.contains(module))
            {
                continue;
            }
            unused.push(to_unused(requirement));
        }

        debug!(
            "{} unused of {} scanned modules in {}",
            unused.len(),
            used.len(),
            options.requirements_filename.display()
        );
        Ok(unused)
    }
}

fn collect_used_modules(options: &AnalyzerOptions) -> BTreeSet<String> {
    let ignored: HashSet<String> = options
        .ignore_modules
        .iter()
        .map(|module| module.to_lowercase())
        .collect();

    let mut used = BTreeSet::new();
    for root in &options.paths {
        for file in list_python_files(root, &options.ignore_files) {
            let source = match std::fs::read(&file) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(e) => {
                    warn!("cannot read {}: {}", file.display(), e);
                    continue;
                }
            };
            let modules = match imports::top_level_imports(&source) {
                Ok(modules) => modules,
                Err(e) => {
                    warn!("cannot parse {}: {}", file.display(), e);
                    continue;
                }
            };
            used.extend(
                modules
                    .into_iter()
                    .map(|module| module.to_lowercase())
                    .filter(|module| !ignored.contains(module)),
            );
        }
    }
    used
}

/// Lowercase import names a normalized distribution may provide.
fn candidate_modules(normalized: &str) -> Vec<String> {
    let underscored = normalized.replace('-', "_");
    let mut candidates = vec![underscored.clone()];
    if let Some(stripped) = underscored.strip_prefix("python_") {
        candidates.push(stripped.to_string());
    }
    if let Some(stripped) = underscored.strip_suffix("_python") {
        candidates.push(stripped.to_string());
    }
    if let Some((_, modules)) = MODULE_ALIASES
        .iter()
        .find(|(distribution, _)| *distribution == normalized)
    {
        candidates.extend(modules.iter().map(|module| module.to_string()));
    }
    candidates
}

fn to_unused(requirement: Requirement) -> UnusedRequirement {
    UnusedRequirement {
        name: requirement.name,
        source: requirement.source,
        line: requirement.line,
    }
}
