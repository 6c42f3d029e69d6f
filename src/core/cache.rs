//! Process-lifetime memoization of the extracted curriculum.
//!
//! # Invariants
//! - At most one extraction runs at a time. Callers arriving while one is in
//!   flight wait for its outcome instead of starting their own.
//! - A successful curriculum is published once and returned to every later
//!   caller unchanged.
//! - Failures are handed to the callers that waited on that attempt but are not
//!   stored; the next call starts a fresh attempt.
//! - If the leading caller is cancelled mid-flight, the slot is cleared and the
//!   waiters re-enter.

use crate::core::extractor::CurriculumExtractor;
use crate::domain::model::Curriculum;
use crate::domain::ports::DocumentProvider;
use crate::utils::error::ExtractionError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;

type Outcome = Result<Arc<Curriculum>, ExtractionError>;

enum Slot {
    Empty,
    InFlight(watch::Receiver<Option<Outcome>>),
    Ready(Arc<Curriculum>),
}

enum Role {
    Leader(watch::Sender<Option<Outcome>>),
    Follower(watch::Receiver<Option<Outcome>>),
}

pub struct CurriculumCache {
    provider: Arc<dyn DocumentProvider>,
    extractor: CurriculumExtractor,
    fetch_timeout: Option<Duration>,
    slot: Mutex<Slot>,
    extraction_count: AtomicUsize,
}

impl CurriculumCache {
    pub fn new(provider: Arc<dyn DocumentProvider>, extractor: CurriculumExtractor) -> Self {
        Self {
            provider,
            extractor,
            fetch_timeout: None,
            slot: Mutex::new(Slot::Empty),
            extraction_count: AtomicUsize::new(0),
        }
    }

    pub fn with_fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Number of extraction runs started so far.
    pub fn extraction_count(&self) -> usize {
        self.extraction_count.load(Ordering::SeqCst)
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.lock_slot(), Slot::Ready(_))
    }

    pub async fn get_curriculum(&self) -> Outcome {
        loop {
            let role = {
                let mut slot = self.lock_slot();
                match &*slot {
                    Slot::Ready(curriculum) => return Ok(Arc::clone(curriculum)),
                    Slot::InFlight(rx) => Role::Follower(rx.clone()),
                    Slot::Empty => {
                        let (tx, rx) = watch::channel(None);
                        *slot = Slot::InFlight(rx);
                        Role::Leader(tx)
                    }
                }
            };

            match role {
                Role::Leader(tx) => return self.lead(tx).await,
                Role::Follower(mut rx) => {
                    let shared = match rx.wait_for(Option::is_some).await {
                        Ok(outcome) => (*outcome).clone(),
                        Err(_) => None,
                    };
                    if let Some(outcome) = shared {
                        return outcome;
                    }
                    tracing::debug!("In-flight extraction was abandoned, retrying");
                }
            }
        }
    }

    async fn lead(&self, tx: watch::Sender<Option<Outcome>>) -> Outcome {
        let mut guard = FlightGuard {
            slot: &self.slot,
            armed: true,
        };

        let run = self.extraction_count.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!("Starting curriculum extraction #{} from {}", run, self.provider.location());

        let outcome = self.run_extraction().await;

        {
            let mut slot = self.lock_slot();
            *slot = match &outcome {
                Ok(curriculum) => Slot::Ready(Arc::clone(curriculum)),
                Err(_) => Slot::Empty,
            };
        }
        guard.armed = false;

        match &outcome {
            Ok(curriculum) => tracing::info!(
                "✅ Curriculum cached: {} days, {} entries",
                curriculum.day_count(),
                curriculum.entry_count()
            ),
            Err(e) => tracing::warn!("❌ Extraction #{} failed (not cached): {}", run, e),
        }

        tx.send_replace(Some(outcome.clone()));
        outcome
    }

    async fn run_extraction(&self) -> Outcome {
        let location = self.provider.location();

        let bytes = match self.fetch_timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.provider.fetch())
                .await
                .map_err(|_| ExtractionError::SourceTimeout {
                    location: location.clone(),
                    timeout,
                })??,
            None => self.provider.fetch().await?,
        };

        let text = decode_document(&location, bytes)?;
        let days = self.extractor.extract(&text);
        Ok(Arc::new(Curriculum::new(days, location)))
    }

    fn lock_slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn decode_document(location: &str, bytes: Vec<u8>) -> Result<String, ExtractionError> {
    let mut text = String::from_utf8(bytes).map_err(|e| ExtractionError::SourceUnreadable {
        location: location.to_string(),
        reason: format!("document is not valid UTF-8: {}", e.utf8_error()),
    })?;
    if text.starts_with('\u{FEFF}') {
        text.remove(0);
    }
    Ok(text)
}

/// Clears the in-flight marker if the leader is dropped before publishing.
struct FlightGuard<'a> {
    slot: &'a Mutex<Slot>,
    armed: bool,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            *slot = Slot::Empty;
        }
    }
}
