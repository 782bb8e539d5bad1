//! Terminal bell backend.
//!
//! A terminal cannot synthesise a sine wave, so the continuous tone is
//! rendered as the bell character repeated at a fixed cadence. The terminal
//! decides the pitch; the requested frequency is only logged.

use std::io::Write;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, warn};

use super::{ToneGenerator, ToneHandle, ToneSpec};
use crate::error::FocusError;

const BEL: &[u8] = b"\x07";

type SharedWriter = Arc<Mutex<dyn Write + Send>>;

/// Rings the terminal bell while a tone is active.
pub struct BellGenerator {
    out: SharedWriter,
    interval: Duration,
}

impl BellGenerator {
    /// Ring on stderr every `interval`.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self::with_writer(Arc::new(Mutex::new(std::io::stderr())), interval)
    }

    /// Ring into an arbitrary writer.
    #[must_use]
    pub fn with_writer(out: SharedWriter, interval: Duration) -> Self {
        Self { out, interval }
    }
}

impl std::fmt::Debug for BellGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BellGenerator")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

impl ToneGenerator for BellGenerator {
    fn start(&mut self, spec: ToneSpec) -> Result<Box<dyn ToneHandle>, FocusError> {
        let volume = Arc::new(AtomicU32::new(spec.volume.to_bits()));
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let thread_volume = Arc::clone(&volume);
        let out = Arc::clone(&self.out);
        let interval = self.interval;

        let thread = std::thread::Builder::new()
            .name("alarm-bell".to_string())
            .spawn(move || loop {
                if f32::from_bits(thread_volume.load(Ordering::Relaxed)) > 0.0 {
                    if let Ok(mut w) = out.lock() {
                        if let Err(e) = w.write_all(BEL).and_then(|()| w.flush()) {
                            warn!("Failed to ring bell: {e}");
                        }
                    }
                }
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;

        debug!(frequency_hz = spec.frequency_hz, volume = spec.volume, "bell tone started");

        Ok(Box::new(BellHandle {
            volume,
            stop_tx: Some(stop_tx),
            thread: Some(thread),
        }))
    }
}

/// Owns the bell thread; stopping or dropping it joins the thread.
#[derive(Debug)]
pub struct BellHandle {
    volume: Arc<AtomicU32>,
    stop_tx: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl ToneHandle for BellHandle {
    fn set_volume(&mut self, volume: f32) {
        self.volume.store(volume.to_bits(), Ordering::Relaxed);
    }

    fn stop(&mut self) {
        // Dropping the sender wakes the thread immediately.
        drop(self.stop_tx.take());
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("Alarm bell thread panicked");
            }
            debug!("bell tone stopped");
        }
    }
}

impl Drop for BellHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn bells(&self) -> usize {
            self.0.lock().unwrap().iter().filter(|b| **b == 0x07).count()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn generator(buf: &SharedBuf) -> BellGenerator {
        BellGenerator::with_writer(Arc::new(Mutex::new(buf.clone())), Duration::from_millis(5))
    }

    #[test]
    fn test_rings_until_stopped() {
        let buf = SharedBuf::default();
        let mut handle = generator(&buf)
            .start(ToneSpec {
                frequency_hz: 440.0,
                volume: 0.5,
            })
            .unwrap();

        std::thread::sleep(Duration::from_millis(30));
        handle.stop();
        let rung = buf.bells();
        assert!(rung >= 1);

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(buf.bells(), rung);
    }

    #[test]
    fn test_muted_tone_is_silent() {
        let buf = SharedBuf::default();
        let mut handle = generator(&buf)
            .start(ToneSpec {
                frequency_hz: 440.0,
                volume: 0.0,
            })
            .unwrap();

        std::thread::sleep(Duration::from_millis(30));
        handle.stop();
        assert_eq!(buf.bells(), 0);
    }

    #[test]
    fn test_drop_joins_thread() {
        let buf = SharedBuf::default();
        let handle = generator(&buf)
            .start(ToneSpec {
                frequency_hz: 440.0,
                volume: 0.5,
            })
            .unwrap();

        drop(handle);
        let rung = buf.bells();
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(buf.bells(), rung);
    }
}
