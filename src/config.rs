//! Configuration for docdb-keys
//!
//! Settings for the `docdb-keytool` binary, with sensible defaults.

/// How raw key bytes are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Double-quoted with `\xHH` escapes
    #[default]
    Escaped,

    /// Lowercase hex digits
    Hex,
}

impl OutputFormat {
    /// Render `bytes` in this format
    pub fn render(self, bytes: &[u8]) -> String {
        match self {
            OutputFormat::Escaped => crate::format::format_bytes_as_str(bytes),
            OutputFormat::Hex => hex::encode(bytes),
        }
    }
}

/// Main configuration for the inspection tool
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// Format for encoded key bytes
    pub output_format: OutputFormat,

    /// Whether failures print the `(file:line)` they were raised at
    pub include_status_location: bool,

    // -------------------------------------------------------------------------
    // Logging Configuration
    // -------------------------------------------------------------------------
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Escaped,
            include_status_location: false,
            log_filter: "warn,docdb_keys=info".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the output format for key bytes
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    /// Include source locations when printing failures
    pub fn include_status_location(mut self, include: bool) -> Self {
        self.config.include_status_location = include;
        self
    }

    /// Set the fallback tracing filter
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.log_filter = filter.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
