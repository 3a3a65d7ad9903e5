//! Golden reference arrays for regression testing
//!
//! Reference arrays are stored in a small versioned binary format so that
//! NaN samples survive a round trip bit for bit:
//!
//! ```text
//! magic    4 bytes   b"NTFR"
//! version  u16 LE    currently 1
//! count    u64 LE    number of samples
//! values   count × f64 LE
//! ```
//!
//! A [`ReferenceStore`] resolves files relative to an explicit root directory
//! that the caller provides.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File magic for reference arrays
pub const MAGIC: &[u8; 4] = b"NTFR";

/// Current reference format version
pub const FORMAT_VERSION: u16 = 1;

/// File extension used by [`ReferenceStore`]
pub const EXTENSION: &str = "ntfr";

/// Serialize an array of samples
pub fn write_array<W: Write>(mut writer: W, values: &[f64]) -> Result<()> {
    writer.write_all(MAGIC)?;
    writer.write_all(&FORMAT_VERSION.to_le_bytes())?;
    writer.write_all(&(values.len() as u64).to_le_bytes())?;
    for v in values {
        writer.write_all(&v.to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Deserialize an array written by [`write_array`]
pub fn read_array<R: Read>(mut reader: R) -> Result<Vec<f64>> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(Error::Reference(format!("bad magic {magic:?}")));
    }

    let mut version = [0u8; 2];
    reader.read_exact(&mut version)?;
    let version = u16::from_le_bytes(version);
    if version != FORMAT_VERSION {
        return Err(Error::Reference(format!(
            "unsupported format version {version}, expected {FORMAT_VERSION}"
        )));
    }

    let mut count = [0u8; 8];
    reader.read_exact(&mut count)?;
    let count = usize::try_from(u64::from_le_bytes(count))
        .map_err(|_| Error::Reference("sample count does not fit in memory".to_string()))?;

    let mut values = Vec::with_capacity(count.min(1 << 24));
    let mut buf = [0u8; 8];
    for i in 0..count {
        reader.read_exact(&mut buf).map_err(|e| match e.kind() {
            std::io::ErrorKind::UnexpectedEof => {
                Error::Reference(format!("truncated: expected {count} samples, got {i}"))
            }
            _ => Error::Io(e),
        })?;
        values.push(f64::from_le_bytes(buf));
    }
    Ok(values)
}

/// Sum of absolute differences between two equal-length series
///
/// NaN positions are compared positionally, so a NaN on either side makes the
/// total NaN. Use [`total_abs_deviation_ignore_nan`] for series where NaN
/// placement is allowed to differ.
pub fn total_abs_deviation(actual: &[f64], expected: &[f64]) -> Result<f64> {
    if actual.len() != expected.len() {
        return Err(Error::InvalidParameter(format!(
            "Size mismatch: expected {}, got {}",
            expected.len(),
            actual.len()
        )));
    }
    Ok(actual.iter().zip(expected).map(|(a, e)| (a - e).abs()).sum())
}

/// Sum of absolute differences between the non-NaN samples of two series
///
/// The valid samples of each series are paired in order, which matches
/// comparing `a[!isnan(a)]` with `e[!isnan(e)]`.
pub fn total_abs_deviation_ignore_nan(actual: &[f64], expected: &[f64]) -> Result<f64> {
    let a: Vec<f64> = crate::nan::drop_nan(actual);
    let e: Vec<f64> = crate::nan::drop_nan(expected);
    total_abs_deviation(&a, &e)
}

/// Directory of reference arrays keyed by dataset index and series kind
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    root: PathBuf,
}

impl ReferenceStore {
    /// Create a store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the reference array for `dataset` and `kind` (e.g. `"pha"`)
    pub fn path(&self, dataset: usize, kind: &str) -> PathBuf {
        self.root
            .join(format!("sample_data_{dataset}_{kind}.{EXTENSION}"))
    }

    /// Load a reference array
    pub fn load(&self, dataset: usize, kind: &str) -> Result<Vec<f64>> {
        let path = self.path(dataset, kind);
        debug!("Loading reference array from {}", path.display());
        let file = File::open(&path)?;
        read_array(BufReader::new(file))
    }

    /// Save a reference array, creating the root directory when missing
    pub fn save(&self, dataset: usize, kind: &str, values: &[f64]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.path(dataset, kind);
        debug!("Saving {} samples to {}", values.len(), path.display());
        let file = File::create(&path)?;
        write_array(BufWriter::new(file), values)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_nan_survives_round_trip() {
        let values = vec![f64::NAN, 1.5, -0.0, f64::NAN, 3.25];
        let mut buf = Vec::new();
        write_array(&mut buf, &values).unwrap();
        assert_eq!(buf.len(), 4 + 2 + 8 + values.len() * 8);

        let loaded = read_array(Cursor::new(buf)).unwrap();
        assert_eq!(loaded.len(), values.len());
        for (a, b) in loaded.iter().zip(&values) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_rejects_bad_magic_and_version() {
        let err = read_array(Cursor::new(b"NOPE\x01\x00".to_vec())).unwrap_err();
        assert!(matches!(err, Error::Reference(_)));

        let mut buf = Vec::new();
        buf.extend_from_slice(MAGIC);
        buf.extend_from_slice(&7u16.to_le_bytes());
        buf.extend_from_slice(&0u64.to_le_bytes());
        let err = read_array(Cursor::new(buf)).unwrap_err();
        assert!(err.to_string().contains("unsupported format version 7"));
    }

    #[test]
    fn test_rejects_truncated_payload() {
        let mut buf = Vec::new();
        write_array(&mut buf, &[1.0, 2.0, 3.0]).unwrap();
        buf.truncate(buf.len() - 4);
        let err = read_array(Cursor::new(buf)).unwrap_err();
        assert!(err.to_string().contains("truncated: expected 3 samples, got 2"));
    }

    #[test]
    fn test_deviation() {
        let a = [1.0, 2.0, 3.0];
        let e = [1.0, 2.5, 2.0];
        assert_eq!(total_abs_deviation(&a, &e).unwrap(), 1.5);
        assert!(total_abs_deviation(&a, &e[..2]).is_err());

        let a = [f64::NAN, 1.0, 2.0];
        let e = [f64::NAN, 1.0, 2.0];
        assert!(total_abs_deviation(&a, &e).unwrap().is_nan());
        assert_eq!(total_abs_deviation_ignore_nan(&a, &e).unwrap(), 0.0);
    }

    #[test]
    fn test_store_paths() {
        let store = ReferenceStore::new("/data/neuro");
        assert_eq!(
            store.path(1, "pha"),
            PathBuf::from("/data/neuro/sample_data_1_pha.ntfr")
        );
    }
}
