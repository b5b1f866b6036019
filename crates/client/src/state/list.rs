//! Canonical product collection and its filtered projection.

use std::collections::HashMap;

use tracing::instrument;

use shelf_core::{Product, ProductId};

use crate::store::{ProductStoreClient, StoreError};

/// Token handed out when a refresh begins.
///
/// Applying results through a ticket makes the last-write-wins race
/// between overlapping refreshes explicit: only the ticket from the
/// most recent `begin_refresh` call is still current, and results
/// arriving with a superseded ticket are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    epoch: u64,
}

/// Owner of the canonical in-memory product collection and the
/// projection derived from the active search query.
///
/// Invariants, maintained across every operation:
/// - the filtered projection is a subset of the canonical collection
///   by ID
/// - the canonical collection never holds two products with the same
///   ID (last occurrence wins when the backend misbehaves)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    products: Vec<Product>,
    filtered: Vec<Product>,
    query: String,
    epoch: u64,
}

impl ListState {
    /// Create an empty list state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical collection, in server order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The projection matching the active query.
    #[must_use]
    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    /// The active search query, as last applied.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Start a refresh, superseding any ticket handed out earlier.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.epoch += 1;
        RefreshTicket { epoch: self.epoch }
    }

    /// Apply fetched products if `ticket` is still current.
    ///
    /// Returns `false` and leaves the state untouched when a newer
    /// refresh has begun since the ticket was issued. On application,
    /// the canonical collection is replaced wholesale and the filtered
    /// projection is recomputed under the active query.
    pub fn apply_refresh(&mut self, ticket: RefreshTicket, products: Vec<Product>) -> bool {
        if ticket.epoch != self.epoch {
            tracing::debug!(
                ticket_epoch = ticket.epoch,
                current_epoch = self.epoch,
                "Discarding superseded refresh result"
            );
            return false;
        }

        self.products = dedup_by_id(products);
        self.refilter();
        true
    }

    /// Fetch the product list and apply it.
    ///
    /// Convenience wrapper around [`Self::begin_refresh`] and
    /// [`Self::apply_refresh`] for callers that await the fetch inline.
    ///
    /// # Errors
    ///
    /// Propagates the store error unchanged; local state is untouched
    /// on failure.
    #[instrument(skip(self, store))]
    pub async fn refresh(&mut self, store: &ProductStoreClient) -> Result<(), StoreError> {
        let ticket = self.begin_refresh();
        let products = store.list_all().await?;
        self.apply_refresh(ticket, products);
        Ok(())
    }

    /// Recompute the filtered projection for `query`.
    ///
    /// An empty or whitespace-only query resets the projection to the
    /// full canonical collection - a full reset, not a no-op on stale
    /// filtered results. Otherwise the projection holds every product
    /// whose name or description contains the query case-insensitively,
    /// computed fresh from the canonical collection.
    pub fn apply_filter(&mut self, query: &str) {
        self.query = query.to_string();
        self.refilter();
    }

    /// Delete a product remotely, then drop it from both collections.
    ///
    /// The item disappears from the current view even under an active
    /// filter.
    ///
    /// # Errors
    ///
    /// Propagates the store error unchanged; on failure both
    /// collections are left unmodified.
    #[instrument(skip(self, store), fields(product_id = %id))]
    pub async fn remove(
        &mut self,
        store: &ProductStoreClient,
        id: ProductId,
    ) -> Result<(), StoreError> {
        store.delete_by_id(id).await?;

        self.products.retain(|p| p.id != Some(id));
        self.filtered.retain(|p| p.id != Some(id));
        Ok(())
    }

    fn refilter(&mut self) {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            self.filtered = self.products.clone();
            return;
        }

        self.filtered = self
            .products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
    }
}

/// Collapse duplicate IDs, keeping the last occurrence at the first
/// occurrence's position. Unsaved entries without an ID pass through.
fn dedup_by_id(products: Vec<Product>) -> Vec<Product> {
    let mut out: Vec<Product> = Vec::with_capacity(products.len());
    let mut seen: HashMap<ProductId, usize> = HashMap::new();

    for product in products {
        if let Some(position) = product.id.and_then(|id| seen.get(&id).copied()) {
            if let Some(slot) = out.get_mut(position) {
                *slot = product;
            }
        } else {
            if let Some(id) = product.id {
                seen.insert(id, out.len());
            }
            out.push(product);
        }
    }

    out
}
