use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::cli::report::print_warning;
use crate::config::{Config, TEST_FILE_PATTERNS};
use crate::core::parsers::jsx::SOURCE_EXTENSIONS;

/// Patterns without wildcards are literal paths relative to the source root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Which parts of the source tree to scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions<'a> {
    pub includes: &'a [String],
    pub ignores: &'a [String],
    pub ignore_test_files: bool,
    pub verbose: bool,
}

impl<'a> ScanOptions<'a> {
    pub fn from_config(config: &'a Config, verbose: bool) -> Self {
        Self {
            includes: &config.includes,
            ignores: &config.ignores,
            ignore_test_files: config.ignore_test_files,
            verbose,
        }
    }
}

/// Files found by a scan, in path order.
pub struct ScanResult {
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

fn warn(verbose: bool, message: std::fmt::Arguments<'_>) {
    if verbose {
        print_warning(message);
    }
}

pub fn scan_files(source_root: &str, options: &ScanOptions<'_>) -> ScanResult {
    let root = Path::new(source_root);
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in options.ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => warn(
                    options.verbose,
                    format_args!("Invalid ignore pattern '{}': {}", p, e),
                ),
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    if options.ignore_test_files {
        glob_patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
    }

    let dirs_to_scan: Vec<PathBuf> = if options.includes.is_empty() {
        vec![root.to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in options.includes {
            let full_path = root.join(inc);
            if is_glob_pattern(inc) {
                match glob(&full_path.to_string_lossy()) {
                    Ok(entries) => paths.extend(entries.flatten().filter(|entry| entry.is_dir())),
                    Err(e) => warn(
                        options.verbose,
                        format_args!("Invalid glob pattern '{}': {}", inc, e),
                    ),
                }
            } else if full_path.exists() {
                paths.push(full_path);
            } else {
                warn(
                    options.verbose,
                    format_args!("Include path does not exist: {}", full_path.display()),
                );
            }
        }
        paths
    };

    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    warn(options.verbose, format_args!("Cannot access path: {}", e));
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && is_source_file(path) {
                files.insert(path_str.into_owned());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
