//! Process-wide table styling, decided once from flags and the terminal.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::GlobalFlags;
use crate::output::table::TableOptions;

/// Narrower `COLUMNS` values are ignored and tables are left unfitted.
const MIN_FIT_WIDTH: usize = 40;

static TABLE_OPTIONS: OnceLock<TableOptions> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let options = table_options_for(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        columns.as_deref(),
    );
    let _ = TABLE_OPTIONS.set(options);
}

/// Options chosen by [`init`], or plain unfitted output before it ran.
#[must_use]
pub fn table_options() -> TableOptions {
    TABLE_OPTIONS.get().copied().unwrap_or(TableOptions {
        max_width: None,
        color: false,
    })
}

fn table_options_for(
    flags: &GlobalFlags,
    stdout_is_tty: bool,
    no_color: bool,
    columns: Option<&str>,
) -> TableOptions {
    TableOptions {
        max_width: columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_FIT_WIDTH),
        color: stdout_is_tty && flags.wants_table() && !flags.quiet && !no_color,
    }
}
