use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::library::{Track, TrackId};

use super::types::{QueueBehavior, QueueRequest};

/// Reasons an enqueue can fail.
#[derive(Error, Debug)]
pub enum QueueError {
    #[error("track {0} could not be found in your library")]
    TrackNotFound(TrackId),

    #[error("track {0} cannot be queued because it has no playable file")]
    NotPlayable(TrackId),

    #[error("failed to add the track to the queue: {0}")]
    QueueFailed(#[source] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Something that can enqueue a track a number of times.
pub trait QueueSink {
    fn enqueue(&mut self, request: &QueueRequest) -> Result<(), QueueError>;
}

/// Queue kept as a text file with one track id per line, first line plays first.
pub struct QueueFileSink {
    path: PathBuf,
    tracks: Vec<Track>,
}

impl QueueFileSink {
    /// `tracks` is the catalog used to resolve requested ids.
    pub fn new(path: impl Into<PathBuf>, tracks: Vec<Track>) -> Self {
        Self {
            path: path.into(),
            tracks,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_existing(&self) -> Result<Vec<String>, QueueError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(QueueError::QueueFailed(e)),
        }
    }
}

impl QueueSink for QueueFileSink {
    fn enqueue(&mut self, request: &QueueRequest) -> Result<(), QueueError> {
        let track = self
            .tracks
            .iter()
            .find(|t| t.id == request.track_id)
            .ok_or(QueueError::TrackNotFound(request.track_id))?;

        if !track.has_local_asset {
            return Err(QueueError::NotPlayable(track.id));
        }
        if request.count == 0 {
            return Err(QueueError::Other("nothing to queue".to_string()));
        }

        // Existing entries are read before the file is truncated.
        let existing = match request.behavior {
            QueueBehavior::InsertNext => self.read_existing()?,
            QueueBehavior::ReplaceQueue => Vec::new(),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(QueueError::QueueFailed)?;
            }
        }

        let file = File::create(&self.path).map_err(QueueError::QueueFailed)?;
        let mut writer = BufWriter::new(file);
        let id = track.id.to_string();
        for _ in 0..request.count {
            writeln!(writer, "{id}").map_err(QueueError::QueueFailed)?;
        }
        for line in &existing {
            writeln!(writer, "{line}").map_err(QueueError::QueueFailed)?;
        }
        writer.flush().map_err(QueueError::QueueFailed)?;

        tracing::info!(
            "queued {} x track {} ({})",
            request.count,
            track.id,
            request.behavior.as_str()
        );
        Ok(())
    }
}
