//! Observation stream of a rollout.
use super::RecordFormat;
use crate::error::HeatmapError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

/// Paired observations `(frameskip, action)` of a rollout.
///
/// Both sequences always have the same length; constructors and loaders
/// reject anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ObservationRecord {
    frameskips: Vec<i64>,
    actions: Vec<i64>,
}

/// A row of a CSV record file.
#[derive(Debug, Deserialize, Serialize)]
struct CsvRow {
    frameskip: i64,
    action: i64,
}

impl ObservationRecord {
    /// Creates a record from two equal-length sequences.
    pub fn new(frameskips: Vec<i64>, actions: Vec<i64>) -> Result<Self, HeatmapError> {
        if frameskips.len() != actions.len() {
            return Err(HeatmapError::LengthMismatch {
                frameskips: frameskips.len(),
                actions: actions.len(),
            });
        }
        Ok(Self {
            frameskips,
            actions,
        })
    }

    /// Frameskip value of each timestep.
    pub fn frameskips(&self) -> &[i64] {
        &self.frameskips
    }

    /// Action index of each timestep.
    pub fn actions(&self) -> &[i64] {
        &self.actions
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.frameskips.len()
    }

    /// Returns `true` if the record holds no observations.
    pub fn is_empty(&self) -> bool {
        self.frameskips.is_empty()
    }

    /// Iterates over `(frameskip, action)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.frameskips
            .iter()
            .copied()
            .zip(self.actions.iter().copied())
    }

    /// Appends a single observation.
    pub fn push(&mut self, frameskip: i64, action: i64) {
        self.frameskips.push(frameskip);
        self.actions.push(action);
    }

    /// Loads a record, inferring the format from the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HeatmapError> {
        let format = RecordFormat::from_path(&path)?;
        Self::load_with_format(path, format)
    }

    /// Loads a record encoded in `format`.
    pub fn load_with_format(
        path: impl AsRef<Path>,
        format: RecordFormat,
    ) -> Result<Self, HeatmapError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| HeatmapError::file_access(path, e))?;
        let record = Self::from_reader(BufReader::new(file), format)?;
        debug!(
            "Loaded {} observations from {:?} ({})",
            record.len(),
            path,
            format
        );
        Ok(record)
    }

    /// Reads a record encoded in `format`.
    pub fn from_reader<R: Read>(rdr: R, format: RecordFormat) -> Result<Self, HeatmapError> {
        let record: Self = match format {
            RecordFormat::Json => serde_json::from_reader(rdr).map_err(deser_error)?,
            RecordFormat::Yaml => serde_yaml::from_reader(rdr).map_err(deser_error)?,
            RecordFormat::Bincode => bincode::deserialize_from(rdr).map_err(deser_error)?,
            RecordFormat::Csv => {
                let mut record = Self::default();
                for row in csv::Reader::from_reader(rdr).deserialize::<CsvRow>() {
                    let row = row.map_err(deser_error)?;
                    record.push(row.frameskip, row.action);
                }
                record
            }
        };
        record.validate()
    }

    /// Saves the record, inferring the format from the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HeatmapError> {
        let format = RecordFormat::from_path(&path)?;
        self.save_with_format(path, format)
    }

    /// Saves the record encoded in `format`.
    pub fn save_with_format(
        &self,
        path: impl AsRef<Path>,
        format: RecordFormat,
    ) -> Result<(), HeatmapError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| HeatmapError::file_access(path, e))?;
        let mut wtr = BufWriter::new(file);
        self.to_writer(&mut wtr, format)?;
        wtr.flush().map_err(|e| HeatmapError::file_access(path, e))
    }

    /// Writes the record encoded in `format`.
    pub fn to_writer<W: Write>(&self, wtr: W, format: RecordFormat) -> Result<(), HeatmapError> {
        match format {
            RecordFormat::Json => serde_json::to_writer(wtr, self).map_err(ser_error),
            RecordFormat::Yaml => serde_yaml::to_writer(wtr, self).map_err(ser_error),
            RecordFormat::Bincode => bincode::serialize_into(wtr, self).map_err(ser_error),
            RecordFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(wtr);
                for (frameskip, action) in self.iter() {
                    wtr.serialize(CsvRow { frameskip, action })
                        .map_err(ser_error)?;
                }
                wtr.flush().map_err(ser_error)
            }
        }
    }

    fn validate(self) -> Result<Self, HeatmapError> {
        if self.frameskips.len() != self.actions.len() {
            return Err(HeatmapError::Deserialization(format!(
                "`frameskips` has {} entries but `actions` has {}",
                self.frameskips.len(),
                self.actions.len()
            )));
        }
        Ok(self)
    }
}

fn deser_error(e: impl std::fmt::Display) -> HeatmapError {
    HeatmapError::Deserialization(e.to_string())
}

fn ser_error(e: impl std::fmt::Display) -> HeatmapError {
    HeatmapError::Serialization(format!("Failed to encode record: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_length_mismatch() {
        let e = ObservationRecord::new(vec![1, 2], vec![0]).unwrap_err();
        assert!(matches!(
            e,
            HeatmapError::LengthMismatch {
                frameskips: 2,
                actions: 1
            }
        ));
    }

    #[test]
    fn test_json_missing_key() {
        let src = r#"{"frameskips": [1, 2, 3]}"#;
        let e = ObservationRecord::from_reader(src.as_bytes(), RecordFormat::Json).unwrap_err();
        assert!(matches!(e, HeatmapError::Deserialization(_)));
    }

    #[test]
    fn test_json_mismatched_lengths() {
        let src = r#"{"frameskips": [1, 2, 3], "actions": [0, 1]}"#;
        let e = ObservationRecord::from_reader(src.as_bytes(), RecordFormat::Json).unwrap_err();
        assert!(matches!(e, HeatmapError::Deserialization(_)));
    }

    #[test]
    fn test_json_ignores_extra_keys() {
        let src = r#"{"frameskips": [4, 2], "actions": [1, 0], "rewards": [0.5, 1.0]}"#;
        let record = ObservationRecord::from_reader(src.as_bytes(), RecordFormat::Json).unwrap();
        assert_eq!(record.frameskips(), &[4, 2]);
        assert_eq!(record.actions(), &[1, 0]);
    }

    #[test]
    fn test_yaml() {
        let src = "frameskips: [1, 1, 2]\nactions: [0, 3, 2]\n";
        let record = ObservationRecord::from_reader(src.as_bytes(), RecordFormat::Yaml).unwrap();
        assert_eq!(record.iter().collect::<Vec<_>>(), vec![(1, 0), (1, 3), (2, 2)]);
    }

    #[test]
    fn test_csv() {
        let src = "frameskip,action\n3,1\n5,0\n";
        let record = ObservationRecord::from_reader(src.as_bytes(), RecordFormat::Csv).unwrap();
        assert_eq!(record.frameskips(), &[3, 5]);
        assert_eq!(record.actions(), &[1, 0]);

        let bad = "frameskip,action\n3,x\n";
        assert!(ObservationRecord::from_reader(bad.as_bytes(), RecordFormat::Csv).is_err());
    }

    #[test]
    fn test_bincode_truncated() {
        let record = ObservationRecord::new(vec![1, 2, 3], vec![0, 1, 2]).unwrap();
        let mut buf = Vec::new();
        record.to_writer(&mut buf, RecordFormat::Bincode).unwrap();
        buf.truncate(buf.len() - 4);
        let e = ObservationRecord::from_reader(buf.as_slice(), RecordFormat::Bincode).unwrap_err();
        assert!(matches!(e, HeatmapError::Deserialization(_)));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure() {
        let record = ObservationRecord::new(vec![1, 2], vec![0, 1]).unwrap();
        for format in [
            RecordFormat::Json,
            RecordFormat::Yaml,
            RecordFormat::Bincode,
            RecordFormat::Csv,
        ] {
            let e = record.to_writer(FailingWriter, format).unwrap_err();
            assert!(matches!(e, HeatmapError::Serialization(_)), "{}: {:?}", format, e);
            assert_eq!(e.exit_code(), 1);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let e = ObservationRecord::load("/nonexistent/dir/stats.json").unwrap_err();
        assert!(matches!(e, HeatmapError::FileAccess { .. }));
    }
}
