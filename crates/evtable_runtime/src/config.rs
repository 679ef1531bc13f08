//! Run configuration loaded from TOML.
//!
//! Every key is optional; missing keys take their defaults.
//!
//! ```toml
//! log_filter = "evtable=debug"
//! output = "ntuple.msgpack"
//! max_events = 1000
//!
//! [engine]
//! electron_max_delta_r = 0.1
//! require_filter_results = false
//!
//! [synthetic]
//! events = 500
//! seed = 7
//! ```

use std::path::{Path, PathBuf};

use evtable_engine::EngineConfig;
use evtable_foundation::{Error, ErrorKind, Result};
use evtable_storage::DEFAULT_TABLE;
use serde::{Deserialize, Serialize};

// =============================================================================
// Synthetic Events
// =============================================================================

/// Shape of generated events.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    /// Number of events to generate; `None` reads from the input instead.
    pub events: Option<u64>,
    /// RNG seed.
    pub seed: u64,
    /// Generate collision data (no pileup) instead of simulation.
    pub real_data: bool,
    /// Maximum number of hadron candidates per event.
    pub max_hadrons: usize,
    /// Maximum number of electrons and of muons per event.
    pub max_leptons: usize,
    /// Maximum number of jets per event.
    pub max_jets: usize,
    /// Maximum number of taus per event.
    pub max_taus: usize,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            events: None,
            seed: 42,
            real_data: false,
            max_hadrons: 60,
            max_leptons: 3,
            max_jets: 8,
            max_taus: 3,
        }
    }
}

// =============================================================================
// Run Config
// =============================================================================

/// Everything one `evtable` run needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// MessagePack event stream to read.
    pub input: Option<PathBuf>,
    /// Row output file; rows go to stdout when unset.
    pub output: Option<PathBuf>,
    /// Output table name.
    pub table: String,
    /// Stop after this many events.
    pub max_events: Option<u64>,
    /// Engine thresholds and switches.
    pub engine: EngineConfig,
    /// Synthetic event options.
    pub synthetic: SyntheticConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            input: None,
            output: None,
            table: DEFAULT_TABLE.to_string(),
            max_events: None,
            engine: EngineConfig::default(),
            synthetic: SyntheticConfig::default(),
        }
    }
}

impl RunConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the document is not valid TOML, has
    /// mistyped keys, or fails validation.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| Error::new(ErrorKind::ConfigError(e.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a configuration
    /// error if it cannot be parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::new(ErrorKind::IoError(format!(
                "failed to read config '{}': {e}",
                path.as_ref().display()
            )))
        })?;
        Self::from_toml_str(&text)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if rendering fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first bad value.
    pub fn validate(&self) -> Result<()> {
        let bad = |msg: String| -> Result<()> { Err(Error::new(ErrorKind::ConfigError(msg))) };
        if self.engine.electron_max_delta_r.is_nan() || self.engine.electron_max_delta_r <= 0.0 {
            return bad(format!(
                "engine.electron_max_delta_r must be positive, got {}",
                self.engine.electron_max_delta_r
            ));
        }
        if self.engine.electron_max_rel_dp.is_nan() || self.engine.electron_max_rel_dp <= 0.0 {
            return bad(format!(
                "engine.electron_max_rel_dp must be positive, got {}",
                self.engine.electron_max_rel_dp
            ));
        }
        if self.engine.l1_word_bits == 0 {
            return bad("engine.l1_word_bits must be non-zero".to_string());
        }
        if self.table.is_empty() {
            return bad("table must not be empty".to_string());
        }
        Ok(())
    }

    /// Sets the engine configuration.
    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Sets the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Sets the input path.
    #[must_use]
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Sets the output path.
    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Sets the output table name.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Limits the number of events processed.
    #[must_use]
    pub fn with_max_events(mut self, max: u64) -> Self {
        self.max_events = Some(max);
        self
    }

    /// Sets the synthetic event options.
    #[must_use]
    pub fn with_synthetic(mut self, synthetic: SyntheticConfig) -> Self {
        self.synthetic = synthetic;
        self
    }
}
