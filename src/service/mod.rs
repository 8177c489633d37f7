//! Directory and ledger operations over the shared [`Store`].

use crate::store::Store;

pub mod aggregation;
mod directory;
mod ledger;

/// Built once at startup and handed to every request handler through
/// `web::Data`. Dropping it releases the store.
pub struct HrService {
    store: Store,
}

impl HrService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Store::in_memory())
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }
}
