use crate::config::Settings;
use crate::error::ExportError;
use crate::localization::Localizer;
use crate::markdown::MarkdownRenderer;
use crate::model::Recipe;
use crate::text::{asciify, sanitize_filename, MAX_FILENAME_BYTES};
use log::{info, warn};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

const FILE_EXTENSION: &str = ".md";

/// Destination for rendered documents
pub trait RecipeStore {
    /// Create or overwrite `path` with `contents`
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Writes UTF-8 files to the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl RecipeStore for FsStore {
    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

/// How output file names are derived from recipe titles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilenameStyle {
    /// Title with characters that are invalid in file names removed
    #[default]
    Sanitized,
    /// Title transliterated to ASCII with words joined by underscores
    Ascii,
}

/// Writes one Markdown file per recipe into a root directory
#[derive(Debug)]
pub struct MarkdownExporter<S = FsStore> {
    root: PathBuf,
    renderer: MarkdownRenderer,
    store: S,
    filename_style: FilenameStyle,
}

impl MarkdownExporter<FsStore> {
    pub fn new(root: impl Into<PathBuf>, renderer: MarkdownRenderer) -> Self {
        MarkdownExporter {
            root: root.into(),
            renderer,
            store: FsStore,
            filename_style: FilenameStyle::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let renderer = MarkdownRenderer::new(settings.api_key.clone())
            .with_localizer(Localizer::new(settings.locales.clone()));
        Self::new(settings.root.clone(), renderer)
    }
}

impl<S: RecipeStore> MarkdownExporter<S> {
    /// Replace the destination documents are written to
    pub fn with_store<T: RecipeStore>(self, store: T) -> MarkdownExporter<T> {
        MarkdownExporter {
            root: self.root,
            renderer: self.renderer,
            store,
            filename_style: self.filename_style,
        }
    }

    pub fn filename_style(mut self, style: FilenameStyle) -> Self {
        self.filename_style = style;
        self
    }

    /// File name for `recipe`, including the `.md` extension
    pub fn filename(&self, recipe: &Recipe) -> String {
        let title = self.renderer.title(recipe);
        let max_stem = MAX_FILENAME_BYTES - FILE_EXTENSION.len();
        let stem = match self.filename_style {
            FilenameStyle::Sanitized => sanitize_filename(title, max_stem),
            FilenameStyle::Ascii => sanitize_filename(&asciify(title), max_stem),
        };
        format!("{stem}{FILE_EXTENSION}")
    }

    /// Renders and writes every recipe in order, returning the written paths.
    ///
    /// Stops at the first failed write. Recipes whose titles map to the same
    /// file name overwrite each other; the later one wins.
    pub fn export<'a, I>(&self, recipes: I) -> Result<Vec<PathBuf>, ExportError>
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        let mut written = Vec::new();
        let mut seen = HashSet::new();

        for recipe in recipes {
            let path = self.root.join(self.filename(recipe));
            let contents = self.renderer.render(recipe);

            self.store
                .write(&path, &contents)
                .map_err(|source| ExportError::WriteError {
                    path: path.clone(),
                    source,
                })?;

            if !seen.insert(path.clone()) {
                warn!("{} was written more than once", path.display());
            }
            info!("Wrote {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}
