use std::{
    collections::BTreeSet,
    fs,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;
use swc_common::SourceMap;

use crate::{
    cli::{args::ExtractArgs, report::print_warning},
    config::{CONFIG_FILE_NAME, Config, ResolvedConfig, load_config},
    core::{
        catalog::{Catalog, merge_entries},
        extract::{CandidateEntry, EntryCollector},
        file_scanner::{ScanOptions, scan_files},
        parsers::jsx::parse_source,
    },
    issues::{ExtractionFailure, ParseErrorIssue},
};

/// What one source file contributed to the run.
enum FileOutcome {
    Collected(Vec<CandidateEntry>),
    Failed(ExtractionFailure),
    Unparsable(ParseErrorIssue),
}

/// Result of a successful extraction run.
pub struct ExtractionReport {
    pub catalog: Catalog,
    /// Candidates merged, before deduplication.
    pub entry_count: usize,
    pub files_scanned: usize,
    /// Files skipped because they could not be read or parsed.
    pub parse_errors: Vec<ParseErrorIssue>,
}

/// One extraction run over a source tree.
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--include-reference`)
/// 2. `.gettextrc.json` config file
/// 3. Built-in defaults
pub struct ExtractContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    pub resolved: ResolvedConfig,

    /// Directory the config file was searched from.
    pub root_dir: PathBuf,

    /// All source files to extract from, in path order.
    pub files: BTreeSet<String>,

    /// Where the PO file is written.
    pub output_path: PathBuf,

    pub verbose: bool,
}

/// Resolve `path` against `root`, leaving absolute paths alone.
fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    let is_cur_dir = root.components().all(|c| matches!(c, Component::CurDir));
    if path.is_absolute() || is_cur_dir {
        path.to_path_buf()
    } else {
        root.join(path.strip_prefix(".").unwrap_or(path))
    }
}

impl ExtractContext {
    pub fn new(args: &ExtractArgs) -> Result<Self> {
        let verbose = args.common.verbose;

        // Priority: CLI --source-root arg > current directory
        let root_dir = args
            .common
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;

        if args.include_reference {
            config.include_reference = true;
        }
        if let Some(base_dir) = &args.base_dir {
            config.base_dir = Some(base_dir.clone());
        }

        // The CLI root wins; otherwise the config's sourceRoot is used.
        let scan_root = match &args.common.source_root {
            Some(root) => root.clone(),
            None => PathBuf::from(&config.source_root),
        };
        let scan_path = scan_root
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", scan_root))?;

        let output_path = match &args.output {
            Some(output) => output.clone(),
            None => resolve_against(&root_dir, &config.output_path()),
        };

        let scan_result = scan_files(scan_path, &ScanOptions::from_config(&config, verbose));
        if scan_result.skipped_count > 0 {
            print_warning(format_args!(
                "{} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            ));
        }

        Ok(Self {
            resolved: config.resolve(),
            config,
            root_dir,
            files: scan_result.files,
            output_path,
            verbose,
        })
    }

    /// Parse every file in parallel, then merge all candidates in path order.
    ///
    /// Fails with the first extraction failure in path order; files that
    /// cannot be parsed are skipped and listed in the report.
    pub fn extract(&self) -> std::result::Result<ExtractionReport, ExtractionFailure> {
        let files: Vec<&String> = self.files.iter().collect();
        let outcomes: Vec<FileOutcome> = files
            .par_iter()
            .map(|file_path| self.extract_file(file_path))
            .collect();

        let mut entries = Vec::new();
        let mut parse_errors = Vec::new();

        for outcome in outcomes {
            match outcome {
                FileOutcome::Collected(file_entries) => entries.extend(file_entries),
                FileOutcome::Failed(failure) => return Err(failure),
                FileOutcome::Unparsable(issue) => {
                    if self.verbose {
                        print_warning(format_args!("{} - {}", issue.file_path, issue.error));
                    }
                    parse_errors.push(issue);
                }
            }
        }

        Ok(ExtractionReport {
            catalog: merge_entries(&self.resolved.catalog, &entries),
            entry_count: entries.len(),
            files_scanned: self.files.len(),
            parse_errors,
        })
    }

    fn extract_file(&self, file_path: &str) -> FileOutcome {
        let code = match fs::read_to_string(file_path) {
            Ok(code) => code,
            Err(e) => {
                return FileOutcome::Unparsable(ParseErrorIssue {
                    file_path: file_path.to_string(),
                    error: format!("Failed to read file: {}", e),
                });
            }
        };

        // Each thread creates its own SourceMap
        let source_map = Arc::new(SourceMap::default());
        let parsed = match parse_source(code, file_path, source_map) {
            Ok(parsed) => parsed,
            Err(e) => {
                return FileOutcome::Unparsable(ParseErrorIssue {
                    file_path: file_path.to_string(),
                    error: e.to_string(),
                });
            }
        };

        let absolute_path = fs::canonicalize(file_path)
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|_| file_path.to_string());

        let collector = EntryCollector::new(
            &self.resolved,
            file_path,
            &absolute_path,
            &parsed.source_map,
        );
        match collector.collect(&parsed.module) {
            Ok(entries) => FileOutcome::Collected(entries),
            Err(failure) => FileOutcome::Failed(failure),
        }
    }
}
