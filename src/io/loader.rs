//! Background file loader
//!
//! File reads run on a dedicated worker thread so the UI never blocks on
//! disk or decompression. The UI side holds a [`LoaderBridge`]: it sends
//! [`LoadRequest`]s and drains [`LoadResult`]s once per frame.
//!
//! Requests carry a monotonically increasing id, but results are applied
//! in arrival order without sequencing against newer requests: if two
//! files are opened in quick succession, whichever result is applied last
//! determines the final waveform. That race is documented behavior.

use crossbeam_channel::{Receiver, Sender, TryRecvError};

use crate::error::Result;
use crate::io::reader::read_csv_to_waveform;
use crate::types::{FileRecord, Waveform};

/// A request to load one file
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub request_id: u64,
    pub file: FileRecord,
}

/// The outcome of one load request
#[derive(Debug)]
pub struct LoadResult {
    pub request_id: u64,
    pub file: FileRecord,
    pub result: Result<Waveform>,
}

/// UI-side handle to the loader thread
pub struct LoaderBridge {
    request_tx: Sender<LoadRequest>,
    result_rx: Receiver<LoadResult>,
    next_request_id: u64,
}

impl LoaderBridge {
    /// Create a connected bridge/worker pair. The caller spawns the worker
    /// on its own thread via [`LoaderWorker::run`].
    pub fn new() -> (Self, LoaderWorker) {
        let (request_tx, request_rx) = crossbeam_channel::unbounded();
        let (result_tx, result_rx) = crossbeam_channel::unbounded();

        (
            Self {
                request_tx,
                result_rx,
                next_request_id: 0,
            },
            LoaderWorker {
                request_rx,
                result_tx,
            },
        )
    }

    /// Queue a file for loading, returning the request id
    pub fn request_load(&mut self, file: FileRecord) -> u64 {
        self.next_request_id += 1;
        let request_id = self.next_request_id;

        tracing::debug!(request_id, path = %file.path.display(), "requesting load");

        if let Err(e) = self.request_tx.send(LoadRequest { request_id, file }) {
            tracing::error!("Loader thread is gone: {}", e);
        }
        request_id
    }

    /// Drain all results that have arrived since the last call
    pub fn drain(&self) -> Vec<LoadResult> {
        let mut results = Vec::new();
        loop {
            match self.result_rx.try_recv() {
                Ok(result) => results.push(result),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::error!("Loader thread disconnected");
                    break;
                }
            }
        }
        results
    }
}

/// Loader thread body
pub struct LoaderWorker {
    request_rx: Receiver<LoadRequest>,
    result_tx: Sender<LoadResult>,
}

impl LoaderWorker {
    /// Serve load requests until the bridge is dropped
    pub fn run(self) {
        tracing::debug!("Loader thread started");

        while let Ok(request) = self.request_rx.recv() {
            let LoadRequest { request_id, file } = request;
            let result = read_csv_to_waveform(&file.path);

            if let Err(ref e) = result {
                tracing::warn!(request_id, path = %file.path.display(), "load failed: {}", e);
            }

            if self
                .result_tx
                .send(LoadResult {
                    request_id,
                    file,
                    result,
                })
                .is_err()
            {
                break;
            }
        }

        tracing::debug!("Loader thread exiting");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::{Duration, Instant};

    fn drain_one(bridge: &LoaderBridge) -> LoadResult {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = bridge.drain().into_iter().next() {
                return result;
            }
            assert!(Instant::now() < deadline, "loader result never arrived");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_load_round_trip() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"ch\n1\n2").unwrap();
        file.flush().unwrap();

        let (mut bridge, worker) = LoaderBridge::new();
        let handle = std::thread::spawn(move || worker.run());

        let record = FileRecord::from_path(file.path());
        let id = bridge.request_load(record.clone());

        let result = drain_one(&bridge);
        assert_eq!(result.request_id, id);
        assert_eq!(result.file, record);
        let waveform = result.result.unwrap();
        assert_eq!(waveform.get("ch"), Some(&vec![1.0, 2.0]));

        drop(bridge);
        handle.join().unwrap();
    }

    #[test]
    fn test_load_failure_is_reported() {
        let (mut bridge, worker) = LoaderBridge::new();
        let handle = std::thread::spawn(move || worker.run());

        bridge.request_load(FileRecord::from_path("/nonexistent/w.csv"));
        let result = drain_one(&bridge);
        assert!(result.result.is_err());

        drop(bridge);
        handle.join().unwrap();
    }
}
