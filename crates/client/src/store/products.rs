//! Product CRUD operations against the collection endpoint.

use tracing::instrument;

use shelf_core::{Product, ProductDraft, ProductId};

use super::{ProductStoreClient, StoreError};

impl ProductStoreClient {
    /// Fetch the full product list in server order.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        let response = self.http().get(self.collection_url()).send().await?;
        Self::handle_response(response).await
    }

    /// Fetch a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for every non-success status;
    /// the backend's 404 is not distinguished from other failures.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_by_id(&self, id: ProductId) -> Result<Product, StoreError> {
        let response = self.http().get(self.item_url(id)).send().await?;

        if !response.status().is_success() {
            return Err(StoreError::NotFound(id));
        }

        Self::handle_response(response).await
    }

    /// Create a new product. The backend assigns the ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] if the draft fails client-side
    /// validation; in that case no network call is made. Otherwise
    /// errors on network failure or a non-success status.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, StoreError> {
        draft.validate()?;

        let response = self
            .http()
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Update an existing product in place.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] if the draft fails client-side
    /// validation; in that case no network call is made. Otherwise
    /// errors on network failure or a non-success status.
    #[instrument(skip(self, draft), fields(product_id = %id))]
    pub async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, StoreError> {
        draft.validate()?;

        let body = draft.clone().into_product(Some(id));
        let response = self.http().put(self.item_url(id)).json(&body).send().await?;
        Self::handle_response(response).await
    }

    /// Persist a product, routing on the presence of an ID: a product
    /// without one is created, a product with one is updated.
    ///
    /// # Errors
    ///
    /// Same error contract as [`Self::create`] and [`Self::update`].
    #[instrument(skip(self, product), fields(product_id = ?product.id))]
    pub async fn upsert(&self, product: Product) -> Result<Product, StoreError> {
        let id = product.id;
        let draft = ProductDraft::from(product);

        match id {
            Some(id) => self.update(id, &draft).await,
            None => self.create(&draft).await,
        }
    }

    /// Delete a product by ID.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success status.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError> {
        let response = self.http().delete(self.item_url(id)).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(Self::status_error(response).await)
    }
}
