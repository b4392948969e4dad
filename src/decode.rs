use futures::channel::oneshot;
use image::RgbaImage;

use crate::error::DecodeError;

/// A single in-flight image decode.
///
/// Decoding runs on a worker thread; completion is observed by polling from
/// the input-handling thread. There is no cancellation: a decode that
/// completes always delivers its result, and the consumer re-validates the
/// surface dimensions recorded here before applying it.
pub struct PendingDecode {
    rx: oneshot::Receiver<Result<RgbaImage, DecodeError>>,
    requested_dimensions: (u32, u32),
}

/// Start decoding `bytes` off-thread. `requested_dimensions` records the
/// surface size at request time so staleness can be detected on completion.
pub fn spawn_decode(bytes: Vec<u8>, requested_dimensions: (u32, u32)) -> PendingDecode {
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        let result = image::load_from_memory(&bytes)
            .map(|img| img.to_rgba8())
            .map_err(DecodeError::from);
        // The receiver may have been dropped; nothing to do then.
        let _ = tx.send(result);
    });
    PendingDecode {
        rx,
        requested_dimensions,
    }
}

impl PendingDecode {
    /// The surface dimensions at the time the decode was requested.
    pub fn requested_dimensions(&self) -> (u32, u32) {
        self.requested_dimensions
    }

    /// Non-blocking completion check.
    ///
    /// Returns `None` while the worker is still running, and the decode
    /// result exactly once when it has finished.
    pub fn poll(&mut self) -> Option<Result<RgbaImage, DecodeError>> {
        match self.rx.try_recv() {
            Ok(Some(result)) => Some(result),
            Ok(None) => None,
            Err(oneshot::Canceled) => Some(Err(DecodeError::WorkerGone)),
        }
    }
}
