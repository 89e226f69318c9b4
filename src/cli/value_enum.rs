// src/cli/value_enum.rs
use clap::ValueEnum;
use line_views_usecase::Locale;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliLang {
    En,
    Ru,
}

impl From<CliLang> for Locale {
    fn from(value: CliLang) -> Self {
        match value {
            CliLang::En => Locale::En,
            CliLang::Ru => Locale::Ru,
        }
    }
}
