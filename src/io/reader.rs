//! Waveform file reader
//!
//! Reads a CSV file into a [`Waveform`], transparently decompressing
//! gzip- or zlib-wrapped input first. Compression is detected from magic
//! bytes, not the file extension, so a mislabelled `.csv` that is really
//! gzip still loads.
//!
//! Parsing is tolerant: records may have fewer fields than the header,
//! non-numeric fields are skipped, and channels that end up with no samples
//! are dropped.

use std::io::Read;
use std::path::Path;

use crate::error::{Result, WaveViewError};
use crate::types::Waveform;

/// Two-byte magic prefixes of supported compression formats.
/// The flag marks gzip (multi-member capable) vs zlib.
const COMPRESSION_HEADERS: [([u8; 2], bool); 4] = [
    ([0x1F, 0x8B], true),  // GZIP
    ([0x78, 0x01], false), // ZLIB, no/low compression
    ([0x78, 0x9C], false), // ZLIB, default compression
    ([0x78, 0xDA], false), // ZLIB, best compression
];

/// Decompress `bytes` if they start with a known magic prefix
fn decompress(bytes: &[u8]) -> Option<Result<Vec<u8>>> {
    let (_, is_gzip) = COMPRESSION_HEADERS
        .iter()
        .find(|(header, _)| bytes.starts_with(header))?;

    let mut decoder: Box<dyn Read> = if *is_gzip {
        Box::new(flate2::read::MultiGzDecoder::new(bytes))
    } else {
        Box::new(flate2::read::ZlibDecoder::new(bytes))
    };

    let mut buffer = Vec::new();
    Some(
        decoder
            .read_to_end(&mut buffer)
            .map(|_| buffer)
            .map_err(|e| WaveViewError::Decompress(e.to_string())),
    )
}

/// Read a file, decompressing it when the content is gzip/zlib wrapped
fn read_file(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)?;
    match decompress(&bytes) {
        Some(decompressed) => decompressed,
        None => Ok(bytes),
    }
}

/// Read a (possibly compressed) CSV file into a waveform.
///
/// The header row names the channels; channel order follows the header.
/// Each subsequent record contributes one sample per parseable numeric
/// field. Channels without any numeric samples are dropped.
pub fn read_csv_to_waveform(path: &Path) -> Result<Waveform> {
    let csv_data = read_file(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_slice());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(str::trim)
        .map(String::from)
        .collect();

    let mut waveform: Waveform = headers
        .iter()
        .map(|header| (header.clone(), Vec::new()))
        .collect();

    for record in reader.records() {
        let record = record?;
        for (header, field) in headers.iter().zip(record.iter()) {
            if let Ok(value) = field.trim().parse::<f64>() {
                if let Some(samples) = waveform.get_mut(header) {
                    samples.push(value);
                }
            }
        }
    }

    waveform.retain(|_, samples| !samples.is_empty());

    tracing::debug!(
        path = %path.display(),
        channels = waveform.len(),
        samples = waveform.shortest_len(),
        "loaded waveform"
    );

    Ok(waveform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const SAMPLE_CSV: &[u8] = b"time,value\n0,1\n1,2\n2,3";

    fn write_temp(contents: &[u8], suffix: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_plain_csv() {
        let file = write_temp(SAMPLE_CSV, ".csv");
        let waveform = read_csv_to_waveform(file.path()).unwrap();
        assert_eq!(waveform.get("time"), Some(&vec![0.0, 1.0, 2.0]));
        assert_eq!(waveform.get("value"), Some(&vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_read_gzipped_csv() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(SAMPLE_CSV).unwrap();
        let compressed = encoder.finish().unwrap();

        let file = write_temp(&compressed, ".csv.gz");
        let waveform = read_csv_to_waveform(file.path()).unwrap();
        assert_eq!(waveform.get("time"), Some(&vec![0.0, 1.0, 2.0]));
        assert_eq!(waveform.get("value"), Some(&vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_read_zlib_csv() {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(SAMPLE_CSV).unwrap();
        let compressed = encoder.finish().unwrap();

        let file = write_temp(&compressed, ".csv");
        let waveform = read_csv_to_waveform(file.path()).unwrap();
        assert_eq!(waveform.get("value"), Some(&vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_missing_file() {
        let result = read_csv_to_waveform(Path::new("/nonexistent/waveform.csv"));
        assert!(matches!(result, Err(WaveViewError::Io(_))));
    }

    #[test]
    fn test_non_numeric_fields_skipped() {
        let file = write_temp(b"time,label\n0,start\n1,stop", ".csv");
        let waveform = read_csv_to_waveform(file.path()).unwrap();
        assert_eq!(waveform.get("time"), Some(&vec![0.0, 1.0]));
        // no numeric samples at all -> channel dropped
        assert!(waveform.get("label").is_none());
    }

    #[test]
    fn test_ragged_records() {
        let file = write_temp(b"a,b\n1,2\n3\n5,6", ".csv");
        let waveform = read_csv_to_waveform(file.path()).unwrap();
        assert_eq!(waveform.get("a"), Some(&vec![1.0, 3.0, 5.0]));
        assert_eq!(waveform.get("b"), Some(&vec![2.0, 6.0]));
    }

    #[test]
    fn test_header_order_preserved() {
        let file = write_temp(b"z,m,a\n1,2,3", ".csv");
        let waveform = read_csv_to_waveform(file.path()).unwrap();
        let channels: Vec<&str> = waveform.channels().collect();
        assert_eq!(channels, vec!["z", "m", "a"]);
    }
}
