//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex, MutexGuard};

use time::Date;

use crate::{Error, timezone::get_local_date, transaction::TransactionStore};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transactions, shared by every request.
    pub store: Arc<Mutex<TransactionStore>>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] that serves `store`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(store: TransactionStore, local_timezone: &str) -> Result<Self, Error> {
        if get_local_date(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            local_timezone: local_timezone.to_owned(),
        })
    }

    /// Today's date in the local timezone.
    ///
    /// # Errors
    /// Returns an [Error::InvalidTimezoneError] if the timezone is not known.
    pub fn today(&self) -> Result<Date, Error> {
        get_local_date(&self.local_timezone)
            .ok_or_else(|| Error::InvalidTimezoneError(self.local_timezone.clone()))
    }

    /// Lock the transaction store.
    ///
    /// # Errors
    /// Returns an [Error::StoreLockError] if the lock is poisoned.
    pub fn lock_store(&self) -> Result<MutexGuard<'_, TransactionStore>, Error> {
        self.store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)
    }
}
