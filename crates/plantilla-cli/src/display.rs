//! Terminal stand-ins for the page-content updater and the operator alert.

use std::io::Write;

use plantilla_core::{Alert, Presenter};

/// Prints each page as a titled block on stdout.
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn present(&self, title: &str, html: &str) {
        // A closed stdout (e.g. `| head`) is not worth failing over.
        let _ = std::io::stdout()
            .lock()
            .write_all(page_text(title, html).as_bytes());
    }
}

/// Writes alerts to stderr so they stay visible when stdout is redirected.
pub struct TerminalAlert;

impl Alert for TerminalAlert {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Render a page the way [`TerminalPresenter`] prints it.
pub fn page_text(title: &str, html: &str) -> String {
    format!("=== {title} ===\n{html}\n")
}
