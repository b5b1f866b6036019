//! Mutating commands: add, edit, delete.

use shelf_client::{ListState, ProductStoreClient};
use shelf_core::{ProductDraft, ProductId};

use super::format_price;

/// Create a new product from flag values.
///
/// # Errors
///
/// Returns an error if the input fails validation (no network call is
/// made in that case) or if the create request fails.
#[allow(clippy::print_stdout)]
pub async fn add(
    store: &ProductStoreClient,
    name: &str,
    price: &str,
    description: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let draft = ProductDraft::from_input(name, price, description)?;
    let created = store.create(&draft).await?;

    tracing::info!(id = ?created.id, "Product created");
    println!(
        "Created product {} ({}, {})",
        created.id.map_or(0, i64::from),
        created.name,
        format_price(created.price),
    );
    Ok(())
}

/// Update an existing product, keeping any field that was not passed.
///
/// # Errors
///
/// Returns an error if the product cannot be fetched, the merged input
/// fails validation, or the update request fails.
#[allow(clippy::print_stdout)]
pub async fn edit(
    store: &ProductStoreClient,
    id: ProductId,
    name: Option<&str>,
    price: Option<&str>,
    description: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Fetch the current record so omitted fields keep their values.
    let current = store.get_by_id(id).await?;

    let draft = ProductDraft::from_input(
        name.unwrap_or(&current.name),
        price.map_or_else(|| current.price.to_string(), str::to_string).as_str(),
        description.unwrap_or(&current.description),
    )?;

    let updated = store.update(id, &draft).await?;

    tracing::info!(%id, "Product updated");
    println!(
        "Updated product {id} ({}, {})",
        updated.name,
        format_price(updated.price),
    );
    Ok(())
}

/// Delete a product and drop it from the local list state.
///
/// # Errors
///
/// Returns an error if the deletion fails; the local state is left
/// untouched in that case.
#[allow(clippy::print_stdout)]
pub async fn delete(
    store: &ProductStoreClient,
    id: ProductId,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = ListState::new();
    state.refresh(store).await?;

    state.remove(store, id).await?;

    tracing::info!(%id, "Product deleted");
    println!("Deleted product {id} ({} remaining)", state.products().len());
    Ok(())
}
