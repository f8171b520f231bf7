use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".gettextrc.json";

pub const DEFAULT_OUTPUT_FILE: &str = "strings.po";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

// ============================================================
// Function and component specs
// ============================================================

/// Grammatical shape of a recognized translation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FunctionRole {
    /// `_("text")`
    Singular,
    /// `_n("one", "many", n)`
    Plural,
    /// `_c("text", "context")`
    SingularContext,
    /// `_nc("one", "many", n, "context")`
    PluralContext,
}

impl FunctionRole {
    /// Order in which roles are tried when matching a callee.
    pub const PRIORITY: [FunctionRole; 4] = [
        FunctionRole::Singular,
        FunctionRole::SingularContext,
        FunctionRole::Plural,
        FunctionRole::PluralContext,
    ];
}

impl std::fmt::Display for FunctionRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FunctionRole::Singular => write!(f, "SINGULAR"),
            FunctionRole::Plural => write!(f, "PLURAL"),
            FunctionRole::SingularContext => write!(f, "SINGULAR_CONTEXT"),
            FunctionRole::PluralContext => write!(f, "PLURAL_CONTEXT"),
        }
    }
}

/// One recognized call pattern, e.g. `_n(singular, plural, count)`.
///
/// Argument indices are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSpec {
    #[serde(rename = "type")]
    pub role: FunctionRole,
    pub name: String,
    #[serde(rename = "singular", default)]
    pub singular_index: usize,
    #[serde(rename = "plural", default, skip_serializing_if = "Option::is_none")]
    pub plural_index: Option<usize>,
    #[serde(rename = "context", default, skip_serializing_if = "Option::is_none")]
    pub context_index: Option<usize>,
    /// Skip occurrences whose arguments cannot be extracted instead of failing.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ignore_error: bool,
}

impl FunctionSpec {
    pub fn new(role: FunctionRole, name: impl Into<String>, singular_index: usize) -> Self {
        Self {
            role,
            name: name.into(),
            singular_index,
            plural_index: None,
            context_index: None,
            ignore_error: false,
        }
    }

    pub fn with_plural(mut self, index: usize) -> Self {
        self.plural_index = Some(index);
        self
    }

    pub fn with_context(mut self, index: usize) -> Self {
        self.context_index = Some(index);
        self
    }

    pub fn ignoring_errors(mut self) -> Self {
        self.ignore_error = true;
        self
    }
}

pub fn default_functions() -> Vec<FunctionSpec> {
    vec![
        FunctionSpec::new(FunctionRole::Singular, "_", 0),
        FunctionSpec::new(FunctionRole::Plural, "_n", 0).with_plural(1),
        FunctionSpec::new(FunctionRole::SingularContext, "_c", 0).with_context(1),
        FunctionSpec::new(FunctionRole::PluralContext, "_nc", 0)
            .with_plural(1)
            .with_context(3),
    ]
}

/// Partial marker-element mapping as written in the config file.
///
/// Every field falls back to the corresponding [`ComponentSpec`] default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub singular: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortform: Option<String>,
}

/// Fully resolved marker-element mapping, e.g.
/// `<LocalizedString id="..." idPlural="..." context="..." comment="..." />`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSpec {
    pub element_name: String,
    pub id_attribute: String,
    pub plural_attribute: String,
    pub context_attribute: String,
    pub comment_attribute: String,
    pub short_form_attribute: String,
}

impl Default for ComponentSpec {
    fn default() -> Self {
        Self {
            element_name: "LocalizedString".to_string(),
            id_attribute: "id".to_string(),
            plural_attribute: "idPlural".to_string(),
            context_attribute: "context".to_string(),
            comment_attribute: "comment".to_string(),
            short_form_attribute: "i18n".to_string(),
        }
    }
}

impl ComponentSpec {
    /// Apply field-by-field overrides on top of the defaults.
    pub fn resolve(overrides: Option<&ComponentOverrides>) -> Self {
        let defaults = Self::default();
        let Some(o) = overrides else {
            return defaults;
        };
        let pick = |value: &Option<String>, fallback: String| value.clone().unwrap_or(fallback);

        Self {
            element_name: pick(&o.name, defaults.element_name),
            id_attribute: pick(&o.singular, defaults.id_attribute),
            plural_attribute: pick(&o.plural, defaults.plural_attribute),
            context_attribute: pick(&o.context, defaults.context_attribute),
            comment_attribute: pick(&o.comment, defaults.comment_attribute),
            short_form_attribute: pick(&o.shortform, defaults.short_form_attribute),
        }
    }
}

// ============================================================
// Resolved configuration
// ============================================================

/// Source-reference tracking settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceOptions {
    pub enabled: bool,
    /// Directory name whose path segment is stripped from references.
    pub base_dir: Option<String>,
}

/// Charset and header overrides applied when the catalog is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    pub charset: Option<String>,
    pub headers: IndexMap<String, String>,
}

/// Configuration with every default applied, ready for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub functions: Vec<FunctionSpec>,
    pub component: ComponentSpec,
    pub reference: ReferenceOptions,
    pub catalog: CatalogOptions,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Config::default().resolve()
    }
}

// ============================================================
// Config file
// ============================================================

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    #[serde(default)]
    pub include_reference: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentOverrides>,
    /// Replaces the default function list wholesale when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<Vec<FunctionSpec>>,
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn default_ignore_test_files() -> bool {
    true
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: default_ignores(),
            includes: Vec::new(),
            ignore_test_files: default_ignore_test_files(),
            source_root: default_source_root(),
            output_file: default_output_file(),
            output_dir: None,
            include_reference: false,
            base_dir: None,
            charset: None,
            headers: IndexMap::new(),
            component: None,
            function: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` or `includes` is invalid,
    /// or if two function specs share a name.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if let Some(functions) = &self.function {
            let mut seen = HashSet::new();
            for func in functions {
                if !seen.insert(func.name.as_str()) {
                    bail!(
                        "Function '{}' is configured more than once in 'function'; \
                         each name may map to a single type",
                        func.name
                    );
                }
            }
        }

        Ok(())
    }

    /// Produce the fully populated extraction settings.
    ///
    /// A configured `function` list replaces the defaults; `component` fields
    /// override the defaults one by one.
    pub fn resolve(&self) -> ResolvedConfig {
        ResolvedConfig {
            functions: self.function.clone().unwrap_or_else(default_functions),
            component: ComponentSpec::resolve(self.component.as_ref()),
            reference: ReferenceOptions {
                enabled: self.include_reference,
                base_dir: self.base_dir.clone(),
            },
            catalog: CatalogOptions {
                charset: self.charset.clone(),
                headers: self.headers.clone(),
            },
        }
    }

    /// Path of the PO file, `outputDir/outputFile` when a directory is set.
    pub fn output_path(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => Path::new(dir).join(&self.output_file),
            None => PathBuf::from(&self.output_file),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
