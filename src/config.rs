use std::path::PathBuf;

use crate::data::render::RenderOptions;

/// Folder name prefix that marks a homework assignment directory.
pub const DIR_PREFIX: &str = "312540006_hw";
/// Variable declared in every generated file.
pub const VAR_NAME: &str = "irisData";

/// Run settings. The binary always uses [`Config::default`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose immediate children are scanned.
    pub root: PathBuf,
    pub dir_prefix: String,
    pub csv_suffix: String,
    /// Replaces `csv_suffix` in the output file name.
    pub output_suffix: String,
    pub render: RenderOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            dir_prefix: DIR_PREFIX.to_string(),
            csv_suffix: ".csv".to_string(),
            output_suffix: "_data.js".to_string(),
            render: RenderOptions::default(),
        }
    }
}

impl Config {
    /// Scan `root` instead of the working directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_var_name(mut self, name: impl Into<String>) -> Self {
        self.render.var_name = name.into();
        self
    }
}
