//! User-interaction surface.
//!
//! The signing flow talks to the user through the [`Platform`] trait:
//! the service binary renders pages on the console, tests drive the
//! flow through [`MockPlatform`]. Handlers decide what to show via
//! [`display`](crate::display); implementations only render and ask.

use common::Error;

/// Rendering and confirmation, as seen from the handlers.
///
/// A confirmation returns `Ok(false)` for an explicit rejection; errors
/// are reserved for a broken interaction channel.
pub trait Platform {
    /// Shows a label/value page. `hold` marks the final hold-to-confirm
    /// page of a signing flow.
    fn review_pairs(
        &mut self,
        title: &str,
        pairs: &[(String, String)],
        hold: bool,
    ) -> Result<bool, Error>;

    /// Shows a free-text page with a single confirm action.
    fn confirm_action(&mut self, title: &str, body: &str) -> Result<bool, Error>;

    /// Shows a brief outcome message.
    fn show_info(&mut self, success: bool, message: &str);
}

// =============================================================================
// Console Platform
// =============================================================================

/// Interactive implementation used by the service binary: pages go to
/// stdout, approvals are read from stdin.
pub struct ConsolePlatform;

impl ConsolePlatform {
    pub fn new() -> Self {
        Self
    }

    #[cfg(not(feature = "autoapprove"))]
    fn prompt(&self, action: &str) -> Result<bool, Error> {
        use std::io::{self, BufRead, Write};

        let mut stdout = io::stdout();
        write!(stdout, "{} [y/N] ", action).map_err(|_| Error::InternalError)?;
        stdout.flush().map_err(|_| Error::InternalError)?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|_| Error::InternalError)?;
        let answer = line.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    /// Scripted runs have nobody at the keyboard.
    #[cfg(feature = "autoapprove")]
    fn prompt(&self, action: &str) -> Result<bool, Error> {
        log::info!("auto-approving '{}'", action);
        Ok(true)
    }
}

impl Default for ConsolePlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for ConsolePlatform {
    fn review_pairs(
        &mut self,
        title: &str,
        pairs: &[(String, String)],
        hold: bool,
    ) -> Result<bool, Error> {
        println!();
        println!("----- {} -----", title);
        for (label, value) in pairs {
            println!("{} {}", label, value);
        }
        self.prompt(if hold { "Hold to approve" } else { "Approve" })
    }

    fn confirm_action(&mut self, title: &str, body: &str) -> Result<bool, Error> {
        println!();
        println!("----- {} -----", title);
        println!("{}", body);
        self.prompt("Continue")
    }

    fn show_info(&mut self, success: bool, message: &str) {
        let icon = if success { "[OK]" } else { "[FAIL]" };
        println!("{} {}", icon, message);
    }
}

// =============================================================================
// Mock Platform (for tests)
// =============================================================================

/// Page record captured by [`MockPlatform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedPage {
    Pairs {
        title: String,
        pairs: Vec<(String, String)>,
        hold: bool,
    },
    Action {
        title: String,
        body: String,
    },
    Info {
        success: bool,
        message: String,
    },
}

/// Scripted platform for tests: records every page shown and approves
/// or rejects per configuration.
pub struct MockPlatform {
    pages: Vec<RecordedPage>,
    confirmations: usize,
    auto_approve: bool,
    reject_at: Option<usize>,
}

impl MockPlatform {
    /// Approves everything.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            confirmations: 0,
            auto_approve: true,
            reject_at: None,
        }
    }

    /// Rejects every confirmation.
    pub fn rejecting() -> Self {
        Self {
            auto_approve: false,
            ..Self::new()
        }
    }

    /// Approves the confirmations before `index` (zero-based), rejects
    /// that one and everything after.
    pub fn rejecting_from(index: usize) -> Self {
        Self {
            reject_at: Some(index),
            ..Self::new()
        }
    }

    /// Every page shown so far, in order.
    pub fn pages(&self) -> &[RecordedPage] {
        &self.pages
    }

    fn decide(&mut self) -> bool {
        let index = self.confirmations;
        self.confirmations += 1;
        if let Some(at) = self.reject_at {
            if index >= at {
                return false;
            }
        }
        self.auto_approve
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MockPlatform {
    fn review_pairs(
        &mut self,
        title: &str,
        pairs: &[(String, String)],
        hold: bool,
    ) -> Result<bool, Error> {
        self.pages.push(RecordedPage::Pairs {
            title: title.to_string(),
            pairs: pairs.to_vec(),
            hold,
        });
        Ok(self.decide())
    }

    fn confirm_action(&mut self, title: &str, body: &str) -> Result<bool, Error> {
        self.pages.push(RecordedPage::Action {
            title: title.to_string(),
            body: body.to_string(),
        });
        Ok(self.decide())
    }

    fn show_info(&mut self, success: bool, message: &str) {
        self.pages.push(RecordedPage::Info {
            success,
            message: message.to_string(),
        });
    }
}
