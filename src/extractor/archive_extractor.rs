use crate::config::ToolConfig;
use crate::error::ArcPickError;
use crate::extractor::strategy::{ExternalTool, ExtractionStrategy};
use crate::scanner::{ArchiveEntry, ArchiveKind};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Per-archive outcome, reported as soon as it is known.
#[derive(Debug)]
pub enum ExtractionEvent<'a> {
    Extracted {
        entry: &'a ArchiveEntry,
    },
    Failed {
        entry: &'a ArchiveEntry,
        error: &'a ArcPickError,
    },
    Unsupported {
        entry: &'a ArchiveEntry,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub extracted: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
    pub unsupported: Vec<PathBuf>,
}

impl ExtractionReport {
    pub fn processed(&self) -> usize {
        self.extracted.len() + self.failed.len() + self.unsupported.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Dispatches archives to a strategy chosen by their kind.
pub struct Extractor {
    strategies: HashMap<ArchiveKind, Box<dyn ExtractionStrategy>>,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Registers `unzip`, `tar` and `unrar` (or their configured replacements).
    pub fn with_tools(tools: &ToolConfig) -> Self {
        Self::new()
            .register(ArchiveKind::Zip, ExternalTool::new(ArchiveKind::Zip, &tools.unzip))
            .register(ArchiveKind::TarGz, ExternalTool::new(ArchiveKind::TarGz, &tools.tar))
            .register(ArchiveKind::Rar, ExternalTool::new(ArchiveKind::Rar, &tools.unrar))
    }

    pub fn register<S>(mut self, kind: ArchiveKind, strategy: S) -> Self
    where
        S: ExtractionStrategy + 'static,
    {
        self.strategies.insert(kind, Box::new(strategy));
        self
    }

    pub fn supports(&self, kind: ArchiveKind) -> bool {
        self.strategies.contains_key(&kind)
    }

    /// Extracts the 1-based `indices` of `entries` into `destination`, in order.
    ///
    /// A failing or unsupported archive never stops the rest of the batch.
    pub fn extract(
        &self,
        entries: &[ArchiveEntry],
        indices: &[usize],
        destination: &Path,
        on_event: &mut dyn FnMut(ExtractionEvent<'_>),
    ) -> ExtractionReport {
        let mut report = ExtractionReport::default();

        for &index in indices {
            let Some(entry) = index.checked_sub(1).and_then(|i| entries.get(i)) else {
                warn!("Skipping index {} outside of {} entries", index, entries.len());
                continue;
            };

            let strategy = entry.kind().and_then(|kind| self.strategies.get(&kind));
            let Some(strategy) = strategy else {
                debug!("No strategy for {}", entry.display_path());
                report.unsupported.push(entry.path().to_path_buf());
                on_event(ExtractionEvent::Unsupported { entry });
                continue;
            };

            info!(
                "Extracting {} with {} into {}",
                entry.display_path(),
                strategy.name(),
                destination.display()
            );

            match strategy.extract(entry.path(), destination) {
                Ok(()) => {
                    report.extracted.push(entry.path().to_path_buf());
                    on_event(ExtractionEvent::Extracted { entry });
                }
                Err(error) => {
                    warn!("Extraction of {} failed: {}", entry.display_path(), error);
                    report
                        .failed
                        .push((entry.path().to_path_buf(), error.to_string()));
                    on_event(ExtractionEvent::Failed {
                        entry,
                        error: &error,
                    });
                }
            }
        }

        report
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::with_tools(&ToolConfig::default())
    }
}
