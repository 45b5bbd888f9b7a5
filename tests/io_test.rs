//! Integration tests for the I/O layer
//!
//! Covers the full load path (file on disk, optionally compressed, to a
//! waveform in the model), CSV export, and the loader thread as the app
//! drives it: request per open, drain per frame, results applied in
//! arrival order.

use std::io::Write;
use std::time::{Duration, Instant};

use flate2::write::GzEncoder;
use flate2::Compression;

use waveview_rs::io::{waveform_to_csv, LoaderBridge};
use waveview_rs::store::ModelStore;
use waveview_rs::types::{FileRecord, Waveform};

fn write_temp(contents: &[u8], suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

fn drain_n(bridge: &LoaderBridge, n: usize) -> Vec<waveview_rs::io::LoadResult> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut results = Vec::new();
    while results.len() < n {
        results.extend(bridge.drain());
        assert!(Instant::now() < deadline, "loader results never arrived");
        std::thread::sleep(Duration::from_millis(5));
    }
    results
}

#[test]
fn load_plain_and_gzipped_files() {
    let plain = write_temp(b"t,v\n0,10\n1,20", ".csv");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(b"t,v\n0,30\n1,40").unwrap();
    let gzipped = write_temp(&encoder.finish().unwrap(), ".csv.gz");

    let (mut bridge, worker) = LoaderBridge::new();
    let handle = std::thread::spawn(move || worker.run());

    bridge.request_load(FileRecord::from_path(plain.path()));
    bridge.request_load(FileRecord::from_path(gzipped.path()));

    let results = drain_n(&bridge, 2);
    for result in &results {
        let waveform = result.result.as_ref().unwrap();
        assert_eq!(waveform.len(), 2);
        assert_eq!(waveform.shortest_len(), 2);
    }

    drop(bridge);
    handle.join().unwrap();
}

#[test]
fn overlapping_loads_last_applied_wins() {
    let first = write_temp(b"a\n1", ".csv");
    let second = write_temp(b"b\n2", ".csv");

    let (mut bridge, worker) = LoaderBridge::new();
    let handle = std::thread::spawn(move || worker.run());

    bridge.request_load(FileRecord::from_path(first.path()));
    bridge.request_load(FileRecord::from_path(second.path()));

    // Apply results in arrival order, the way the app folds a drained
    // batch into the model. The worker is a single thread serving a FIFO
    // channel, so arrival order matches request order here.
    let mut model = ModelStore::new();
    for result in drain_n(&bridge, 2) {
        if let Ok(waveform) = result.result {
            model.update_opened_file(result.file);
            model.update_waveform(waveform);
        }
    }

    assert_eq!(
        model.opened_file().map(|f| f.path.as_path()),
        Some(second.path())
    );
    assert!(model.waveform().contains_channel("b"));
    assert!(!model.waveform().contains_channel("a"));

    drop(bridge);
    handle.join().unwrap();
}

#[test]
fn export_truncates_to_shortest_channel() {
    let waveform: Waveform = [
        ("A".to_string(), vec![1.0, 2.0, 3.0]),
        ("B".to_string(), vec![4.0, 5.0]),
    ]
    .into_iter()
    .collect();

    assert_eq!(waveform_to_csv(&waveform), "A,B\n1,4\n2,5");
}

#[test]
fn export_round_trips_through_reader() {
    let original: Waveform = [
        ("time".to_string(), vec![0.0, 1.0, 2.0]),
        ("value".to_string(), vec![0.5, -1.5, 2.25]),
    ]
    .into_iter()
    .collect();

    let file = write_temp(waveform_to_csv(&original).as_bytes(), ".csv");
    let reloaded = waveview_rs::io::read_csv_to_waveform(file.path()).unwrap();

    assert_eq!(reloaded, original);
}
