// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use line_views_usecase::Locale;

use crate::cli::Args;

/// Resolved run settings.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// `None` means the path is asked for on standard input.
    #[builder(default)]
    pub path: Option<PathBuf>,
    #[builder(default)]
    pub locale: Locale,
    #[builder(default)]
    pub verbosity: u8,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        ConfigBuilder::default()
            .path(args.path)
            .locale(Locale::from(args.lang))
            .verbosity(args.verbose)
            .build()
            .expect("every Config field has a default")
    }
}
