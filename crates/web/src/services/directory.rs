//! Process-wide customer directory cache.
//!
//! A single-slot, TTL-bounded read-through cache in front of the customer
//! service's "list customers" call, shared by every page in the running
//! process so repeated navigations do not always re-fetch.
//!
//! The cache is an owned object (no globals) held in the application
//! state, generic over its fetch seam ([`CustomerSource`]) and its time
//! source ([`Clock`]) so tests can stub the network and control time.
//!
//! Concurrency model: a fresh slot is returned without any fetch; a stale
//! or empty slot dispatches one fetch per caller - concurrent misses each
//! fetch their own copy, accepted as occasional duplicate work because the
//! customer list is read-mostly and cheap to over-fetch. Each dispatch
//! carries a monotonically increasing generation, and a completed fetch
//! only writes the slot while its generation is still the latest, so a
//! slow stale response can never overwrite a fresher one. A failed fetch
//! never touches the slot.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use pedidos_core::Customer;

use super::ServiceError;

/// How long a cached customer list stays fresh.
pub const CACHE_TTL: Duration = Duration::from_secs(60);

/// Time source for freshness checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// The real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// The fetch seam: anything that can list customers.
///
/// Implemented by the real [`CustomerClient`](super::CustomerClient) and
/// by stubs in tests.
pub trait CustomerSource: Send + Sync {
    fn list_customers(&self)
    -> impl Future<Output = Result<Vec<Customer>, ServiceError>> + Send;
}

/// Single-slot TTL cache over a [`CustomerSource`].
pub struct CustomerDirectory<S, C = SystemClock> {
    source: S,
    clock: C,
    ttl: Duration,
    slot: Mutex<Slot>,
}

#[derive(Default)]
struct Slot {
    entry: Option<Entry>,
    /// Generation of the most recently dispatched fetch.
    latest_generation: u64,
}

struct Entry {
    customers: Arc<[Customer]>,
    fetched_at: Instant,
}

impl<S: CustomerSource> CustomerDirectory<S> {
    /// Directory with the real clock and the default TTL.
    pub fn new(source: S) -> Self {
        Self::with_clock(source, SystemClock, CACHE_TTL)
    }
}

impl<S: CustomerSource, C: Clock> CustomerDirectory<S, C> {
    /// Directory with an explicit clock and TTL.
    pub fn with_clock(source: S, clock: C, ttl: Duration) -> Self {
        Self {
            source,
            clock,
            ttl,
            slot: Mutex::new(Slot::default()),
        }
    }

    /// The customer list, from the slot when fresh, otherwise fetched.
    ///
    /// # Errors
    ///
    /// Propagates the [`ServiceError`] of this caller's own fetch; the
    /// slot keeps whatever it held before.
    pub async fn get(&self) -> Result<Arc<[Customer]>, ServiceError> {
        let generation = {
            let mut slot = self.lock_slot();
            if let Some(entry) = &slot.entry {
                if self.clock.now().duration_since(entry.fetched_at) < self.ttl {
                    return Ok(Arc::clone(&entry.customers));
                }
            }
            slot.latest_generation += 1;
            slot.latest_generation
        };

        let customers: Arc<[Customer]> = self.source.list_customers().await?.into();
        let fetched_at = self.clock.now();

        let mut slot = self.lock_slot();
        if generation == slot.latest_generation {
            slot.entry = Some(Entry {
                customers: Arc::clone(&customers),
                fetched_at,
            });
        }
        Ok(customers)
    }

    /// The lock is only held for slot bookkeeping, never across an await.
    fn lock_slot(&self) -> std::sync::MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
