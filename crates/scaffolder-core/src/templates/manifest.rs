//! Template manifest: which entries of the source tree make up a project

/// Default name of the generated README
pub const DEFAULT_README: &str = "README.md";

/// Fixed description of what a scaffold run copies and creates.
///
/// All names are relative to the source (for copies) or the target (for
/// workspace directories). The manifest is handed to the scaffolder at
/// construction and never changes during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateManifest {
    /// Entries that must exist directly under the source before anything is written
    pub required_items: Vec<String>,

    /// Top-level files copied from the source
    pub files: Vec<String>,

    /// Top-level directories copied from the source, replacing any existing copy
    pub directories: Vec<String>,

    /// Files copied only when the target does not already have them
    pub optional_files: Vec<String>,

    /// Empty directories always created under the target
    pub workspace_directories: Vec<String>,

    /// README file written with generated content when absent
    pub readme: String,
}

impl Default for TemplateManifest {
    fn default() -> Self {
        Self {
            required_items: Vec::new(),
            files: Vec::new(),
            directories: Vec::new(),
            optional_files: Vec::new(),
            workspace_directories: Vec::new(),
            readme: DEFAULT_README.to_string(),
        }
    }
}

impl TemplateManifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries that must exist in the source
    pub fn required<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Files to copy
    pub fn files<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = items.into_iter().map(Into::into).collect();
        self
    }

    /// Directories to copy with full-replace semantics
    pub fn directories<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directories = items.into_iter().map(Into::into).collect();
        self
    }

    /// Files copied only if missing from the target
    pub fn optional_files<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_files = items.into_iter().map(Into::into).collect();
        self
    }

    /// Directories created empty under the target
    pub fn workspace_directories<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.workspace_directories = items.into_iter().map(Into::into).collect();
        self
    }

    /// Override the README file name
    pub fn readme(mut self, name: impl Into<String>) -> Self {
        self.readme = name.into();
        self
    }
}
