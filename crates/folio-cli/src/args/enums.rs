use clap::ValueEnum;
use folio_types::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Midnight,
    Aurora,
}

impl ThemeArg {
    pub fn resolve(&self) -> Theme {
        match self {
            ThemeArg::Midnight => Theme::midnight(),
            ThemeArg::Aurora => Theme::aurora(),
        }
    }
}
