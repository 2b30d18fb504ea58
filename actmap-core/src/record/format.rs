//! Encodings of [`ObservationRecord`](super::ObservationRecord) files.
use crate::error::HeatmapError;
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, str::FromStr};

/// File encoding of an observation record.
///
/// JSON and YAML files hold a mapping with the keys `frameskips` and
/// `actions`. A bincode file holds the same structure in binary form.
/// A CSV file has a header `frameskip,action` and one row per timestep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// `.json`
    Json,

    /// `.yaml` or `.yml`
    Yaml,

    /// `.bin` or `.bincode`
    Bincode,

    /// `.csv`
    Csv,
}

impl RecordFormat {
    /// Infers the format from the extension of `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, HeatmapError> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                HeatmapError::Deserialization(format!(
                    "Cannot infer the record format of {:?}, no extension",
                    path
                ))
            })?
            .parse()
    }
}

impl FromStr for RecordFormat {
    type Err = HeatmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "bin" | "bincode" => Ok(Self::Bincode),
            "csv" => Ok(Self::Csv),
            other => Err(HeatmapError::Deserialization(format!(
                "Unknown record format: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Bincode => "bincode",
            Self::Csv => "csv",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(RecordFormat::from_path("a/stats.json").unwrap(), RecordFormat::Json);
        assert_eq!(RecordFormat::from_path("stats.YML").unwrap(), RecordFormat::Yaml);
        assert_eq!(RecordFormat::from_path("stats.bin").unwrap(), RecordFormat::Bincode);
        assert_eq!(RecordFormat::from_path("stats.csv").unwrap(), RecordFormat::Csv);
    }

    #[test]
    fn test_unknown_extension() {
        assert!(matches!(
            RecordFormat::from_path("stats.pkl"),
            Err(HeatmapError::Deserialization(_))
        ));
        assert!(matches!(
            RecordFormat::from_path("stats"),
            Err(HeatmapError::Deserialization(_))
        ));
    }

    #[test]
    fn test_display_parses_back() {
        for f in [
            RecordFormat::Json,
            RecordFormat::Yaml,
            RecordFormat::Bincode,
            RecordFormat::Csv,
        ] {
            assert_eq!(f.to_string().parse::<RecordFormat>().unwrap(), f);
        }
    }
}
