use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

/// Terminal presentation choices resolved once from the global flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

impl UiPrefs {
    const PLAIN: Self = Self {
        table_color: false,
        progress: false,
        term_width: None,
    };

    fn resolve(flags: &GlobalFlags, is_tty: bool, no_color: bool, columns: Option<&str>) -> Self {
        let table = flags.format == OutputFormat::Table;
        let table_color = match flags.color {
            ColorMode::Always => table,
            ColorMode::Never => false,
            ColorMode::Auto => is_tty && table && !flags.quiet && !no_color,
        };

        // JSON stays machine-readable, so the spinner never shares its stream.
        let progress = match flags.progress {
            ProgressMode::Off => false,
            ProgressMode::On | ProgressMode::Auto => {
                is_tty && !flags.quiet && flags.format != OutputFormat::Json
            }
        };

        let term_width = columns
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);

        Self {
            table_color,
            progress,
            term_width,
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let prefs = UiPrefs::resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        columns.as_deref(),
    );
    let _ = UI_PREFS.set(prefs);
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs::PLAIN)
}
