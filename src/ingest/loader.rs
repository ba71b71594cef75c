//! Building a hop network from record files

use super::record::HopRecord;
use super::{HopNetwork, IngestConfig, IngestError, IngestResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Accumulates records from one or more sources into a single network
///
/// The first malformed line or unreadable file stops ingestion. Records
/// read before the failure stay applied to the network.
#[derive(Debug, Clone, Default)]
pub struct NetworkLoader {
    config: IngestConfig,
    network: HopNetwork,
}

impl NetworkLoader {
    /// Create a loader with the default rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with custom rules
    pub fn with_config(config: IngestConfig) -> Self {
        Self {
            config,
            network: HopNetwork::new(),
        }
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// The network built so far
    pub fn network(&self) -> &HopNetwork {
        &self.network
    }

    pub fn into_network(self) -> HopNetwork {
        self.network
    }

    /// Ingest every file in order and return the finished network
    pub fn load_files<I, P>(mut self, paths: I) -> IngestResult<HopNetwork>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            self.ingest_file(path)?;
        }
        info!(
            vertices = self.network.vertex_count(),
            edges = self.network.edge_count(),
            "network loaded"
        );
        Ok(self.network)
    }

    /// Ingest one file, returning the number of records applied
    pub fn ingest_file(&mut self, path: impl AsRef<Path>) -> IngestResult<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records = self.ingest_reader(BufReader::new(file), &path.display().to_string())?;
        info!(file = %path.display(), records, "file ingested");
        Ok(records)
    }

    /// Ingest records from any line source
    ///
    /// `source_name` labels errors and log lines. A trailing `\r` is dropped
    /// from each line. A blank line is malformed like any other bad record;
    /// the newline ending the last line does not produce one.
    pub fn ingest_reader<R: BufRead>(&mut self, reader: R, source_name: &str) -> IngestResult<usize> {
        let mut applied = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| IngestError::Io {
                path: PathBuf::from(source_name),
                source,
            })?;
            let line = line.strip_suffix('\r').unwrap_or(&line);

            let record =
                HopRecord::parse(line, &self.config).map_err(|reason| IngestError::Malformed {
                    file: source_name.to_string(),
                    line_no: index + 1,
                    line: line.to_string(),
                    reason,
                })?;
            self.apply(record)?;
            applied += 1;
        }

        Ok(applied)
    }

    /// Add a record's names and edge, keeping the smaller hop time on conflict
    pub fn apply(&mut self, record: HopRecord) -> IngestResult<()> {
        let HopRecord {
            source,
            destination,
            hop_time,
        } = record;

        if hop_time == 0 {
            warn!(
                %source,
                %destination,
                "zero hop time is indistinguishable from no connection"
            );
        }

        self.network.add_vertex(source.clone());
        self.network.add_vertex(destination.clone());

        match self.network.add_edge(&source, &destination, hop_time) {
            Ok(()) => Ok(()),
            Err(err) if err.is_edge_already_exists() => {
                let existing = *self.network.get_weight(&source, &destination)?;
                let kept = existing.min(hop_time);
                debug!(%source, %destination, existing, hop_time, kept, "duplicate hop merged");
                self.network.update_weight(&source, &destination, kept)?;
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
