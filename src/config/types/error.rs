//! Config errors and collected diagnostics.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load or publish a [`SiteConfig`](crate::config::SiteConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML in config")]
    Toml(#[from] toml::de::Error),

    #[error("cannot serialize config to JSON")]
    Json(#[from] serde_json::Error),

    #[error("site config is already published")]
    AlreadyInitialized,

    // No #[from]: the diagnostics print themselves in full, a source() would repeat them.
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One finding about one field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Where, e.g. `themeConfig.nav[0].link`.
    pub field: FieldPath,
    pub message: String,
    /// How to fix it, when there is an obvious fix.
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        Self {
            hint: Some(hint.into()),
            ..self
        }
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)?;
        match &self.hint {
            Some(hint) => write!(f, "\n    {} {hint}", "hint:".yellow()),
            None => Ok(()),
        }
    }
}

/// Errors and warnings gathered over a whole config.
///
/// Validation never stops at the first problem; callers get every error
/// in one report. Warnings are kept apart and never fail validation.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push(ConfigDiagnostic::new(field, message));
    }

    /// Log every warning under a `[warning]` prefix.
    pub fn print_warnings(&self) {
        let count = self.warnings.len();
        if count == 0 {
            return;
        }
        crate::log!("warning"; "{} in config:", crate::utils::plural_count(count, "warning"));
        for warning in &self.warnings {
            eprintln!("  {} {}", "-".dimmed(), warning);
        }
    }

    /// Number of errors. Warnings are not counted.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// `Ok` when no error was recorded, whatever the warnings.
    pub fn into_result(self) -> Result<(), Self> {
        match self.errors.is_empty() {
            true => Ok(()),
            false => Err(self),
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        write!(
            f,
            "{} {}",
            "invalid config:".red().bold(),
            crate::utils::plural_count(count, "error").dimmed()
        )?;
        for err in &self.errors {
            write!(f, "\n  {} {err}", "→".red())?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
