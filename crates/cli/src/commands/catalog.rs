//! Read-only catalog commands: list, search, show.

use shelf_client::{ListState, ProductStoreClient, StoreError};
use shelf_core::ProductId;

use super::{format_price, format_row, table_header};

/// Print the full product list in server order.
///
/// # Errors
///
/// Returns an error if the list fetch fails.
pub async fn list(store: &ProductStoreClient) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = ListState::new();
    state.refresh(store).await?;

    print_products(&state);
    Ok(())
}

/// Print the products matching `query` against name and description.
///
/// # Errors
///
/// Returns an error if the list fetch fails.
pub async fn search(
    store: &ProductStoreClient,
    query: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = ListState::new();
    state.refresh(store).await?;
    state.apply_filter(query);

    tracing::info!(
        query,
        matched = state.filtered().len(),
        total = state.products().len(),
        "Filter applied"
    );
    print_products(&state);
    Ok(())
}

/// Print one product's detail view.
///
/// # Errors
///
/// Returns an error if the product cannot be fetched; every non-success
/// response surfaces as a not-found failure.
#[allow(clippy::print_stdout)]
pub async fn show(
    store: &ProductStoreClient,
    id: ProductId,
) -> Result<(), Box<dyn std::error::Error>> {
    match store.get_by_id(id).await {
        Ok(product) => {
            println!("ID:          {}", product.id.map_or(0, i64::from));
            println!("Name:        {}", product.name);
            println!("Price:       {}", format_price(product.price));
            println!("Description: {}", product.description);
            Ok(())
        }
        Err(err @ StoreError::NotFound(_)) => {
            // The detail screen shows an explicit error display instead
            // of crashing or falling back to the list.
            println!("Product {id} could not be loaded: {err}");
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

#[allow(clippy::print_stdout)]
fn print_products(state: &ListState) {
    println!("{}", table_header());
    for product in state.filtered() {
        println!("{}", format_row(product));
    }
}
