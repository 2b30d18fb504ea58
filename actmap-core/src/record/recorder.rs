use super::{ObservationRecord, RecordFormat};
use crate::error::HeatmapError;
use log::info;
use std::path::Path;

/// Buffered recorder of observations.
///
/// This is used for recording the frameskip and the action of every decision
/// point of a rollout, to be written once the rollout is over.
#[derive(Debug, Default)]
pub struct ObservationRecorder {
    buf: ObservationRecord,
}

impl ObservationRecorder {
    /// Construct the recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a single decision point.
    pub fn push(&mut self, frameskip: i64, action: i64) {
        self.buf.push(frameskip, action);
    }

    /// Number of recorded observations.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the observations recorded so far.
    pub fn record(&self) -> &ObservationRecord {
        &self.buf
    }

    /// Consumes the recorder.
    pub fn into_record(self) -> ObservationRecord {
        self.buf
    }

    /// Writes the recorded observations to `path` and clears the buffer.
    pub fn flush(&mut self, path: impl AsRef<Path>) -> Result<(), HeatmapError> {
        let format = RecordFormat::from_path(&path)?;
        self.buf.save_with_format(&path, format)?;
        info!(
            "Wrote {} observations to {:?}",
            self.buf.len(),
            path.as_ref()
        );
        self.buf = ObservationRecord::default();
        Ok(())
    }
}

impl Extend<(i64, i64)> for ObservationRecorder {
    fn extend<T: IntoIterator<Item = (i64, i64)>>(&mut self, iter: T) {
        for (frameskip, action) in iter {
            self.push(frameskip, action);
        }
    }
}
