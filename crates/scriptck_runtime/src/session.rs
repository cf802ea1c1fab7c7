//! Checking sessions.
//!
//! A session checks any number of scripts under one configuration. Every
//! script gets a fresh [`ScriptChecker`]; nothing carries over between them.

use scriptck_debug::{Tracer, TracerConfig};
use scriptck_engine::{CheckConfig, CheckReport, ScriptChecker};
use scriptck_foundation::Result;
use tracing::info;

use crate::report::{HumanReport, JsonReport, ReportFormatter};
use crate::source::TagSource;

/// Report output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text
    #[default]
    Human,
    /// One JSON object per script
    Json,
}

/// Configuration for a session.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    /// Optional checks.
    pub check: CheckConfig,
    /// Report format.
    pub format: OutputFormat,
    /// Tracing of each run.
    pub tracer: TracerConfig,
    /// Label each report with its source.
    pub show_source: bool,
    /// Pretty-print JSON reports.
    pub pretty: bool,
}

impl SessionConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the check configuration.
    #[must_use]
    pub fn with_check(mut self, check: CheckConfig) -> Self {
        self.check = check;
        self
    }

    /// Builder method to set the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder method to set the tracer configuration.
    #[must_use]
    pub fn with_tracer(mut self, tracer: TracerConfig) -> Self {
        self.tracer = tracer;
        self
    }

    /// Builder method to label reports with their source.
    #[must_use]
    pub fn with_source_labels(mut self, show: bool) -> Self {
        self.show_source = show;
        self
    }

    /// Builder method to pretty-print JSON reports.
    #[must_use]
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Runs scripts and renders their reports.
pub struct Session {
    config: SessionConfig,
    tracer: Tracer,
    scripts_checked: usize,
}

impl Session {
    /// Creates a session.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let tracer = Tracer::new(config.tracer.clone());
        Self {
            config,
            tracer,
            scripts_checked: 0,
        }
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The tracer shared by every run of this session.
    #[must_use]
    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Number of scripts checked so far.
    #[must_use]
    pub fn scripts_checked(&self) -> usize {
        self.scripts_checked
    }

    /// Drains `source` and checks its tags.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read or decoded. Script
    /// inconsistencies are never errors; they are in the report.
    pub fn check(&mut self, source: &mut dyn TagSource) -> Result<CheckReport> {
        let tags = source.tags()?;
        info!(source = source.name(), tags = tags.len(), "checking script");

        let mut checker = ScriptChecker::new(self.config.check);
        for tag in &tags {
            self.tracer.check_tag(&mut checker, tag);
        }
        let report = self.tracer.finish(checker);

        self.scripts_checked += 1;
        info!(
            source = source.name(),
            errors = report.error_count(),
            "script checked"
        );
        Ok(report)
    }

    /// Renders `report` in the configured format.
    #[must_use]
    pub fn render(&self, source: &str, report: &CheckReport) -> String {
        match self.config.format {
            OutputFormat::Human => {
                let mut formatter = HumanReport::new();
                if self.config.show_source {
                    formatter = formatter.with_source();
                }
                formatter.render(source, report)
            }
            OutputFormat::Json => {
                let mut formatter = JsonReport::new();
                if self.config.pretty {
                    formatter = formatter.pretty();
                }
                formatter.render(source, report)
            }
        }
    }
}
