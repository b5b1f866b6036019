//! Interactive browsing session: the list / form / detail screens
//! driven by the view-state machine.

use std::io::{self, BufRead, Write};

use shelf_client::{ListState, NavIntent, ProductStoreClient, ViewController, ViewState};
use shelf_core::{Product, ProductDraft, ProductId};

use super::{format_price, format_row, table_header};

/// Run the interactive session until the user quits.
///
/// # Errors
///
/// Returns an error if reading from the terminal fails. Store failures
/// are reported inline and leave the current screen mounted, except on
/// the detail screen where a failed fetch shows an error display.
#[allow(clippy::print_stdout)]
pub async fn session(store: &ProductStoreClient) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = ViewController::new();
    let mut list = ListState::new();

    loop {
        match controller.state().clone() {
            ViewState::List => {
                // The list screen re-fetches on every mount; edits made
                // on the form screen only become visible here.
                if let Err(e) = list.refresh(store).await {
                    println!("Could not load products: {e}");
                }

                println!();
                println!("{}", table_header());
                for product in list.filtered() {
                    println!("{}", format_row(product));
                }

                let line = prompt("list> add | view <id> | edit <id> | search <q> | quit")?;
                let Some(intent) = parse_list_command(&line, &list) else {
                    if line.trim() == "quit" {
                        return Ok(());
                    }
                    if let Some(query) = line.trim().strip_prefix("search") {
                        list.apply_filter(query.trim());
                    } else if !line.trim().is_empty() {
                        println!("Unrecognized command: {}", line.trim());
                    }
                    continue;
                };
                controller.dispatch(intent);
            }
            ViewState::Form { editing } => {
                let intent = run_form(store, editing.as_ref()).await?;
                controller.dispatch(intent);
            }
            ViewState::Detail { product_id } => {
                let intent = run_detail(store, &controller, &mut list, product_id).await?;
                controller.dispatch(intent);
            }
        }
    }
}

/// Translate a list-screen command into a navigation intent.
fn parse_list_command(line: &str, list: &ListState) -> Option<NavIntent> {
    let mut parts = line.split_whitespace();
    match (parts.next()?, parts.next()) {
        ("add", None) => Some(NavIntent::AddNew),
        ("view", Some(id)) => id.parse().ok().map(NavIntent::View),
        ("edit", Some(id)) => {
            let id: ProductId = id.parse().ok()?;
            list.products()
                .iter()
                .find(|p| p.id == Some(id))
                .cloned()
                .map(NavIntent::Edit)
        }
        _ => None,
    }
}

/// The form screen: collect fields, submit, and report the exit intent.
#[allow(clippy::print_stdout)]
async fn run_form(
    store: &ProductStoreClient,
    editing: Option<&Product>,
) -> Result<NavIntent, Box<dyn std::error::Error>> {
    match editing {
        Some(product) => println!("\nEditing product {}", product.id.map_or(0, i64::from)),
        None => println!("\nNew product (empty field cancels)"),
    }

    let name = prompt_field("Name", editing.map(|p| p.name.clone()))?;
    let price = prompt_field("Price", editing.map(|p| p.price.to_string()))?;
    let description = prompt_field("Description", editing.map(|p| p.description.clone()))?;

    let (Some(name), Some(price), Some(description)) = (name, price, description) else {
        return Ok(NavIntent::FormCancel);
    };

    let draft = match ProductDraft::from_input(&name, &price, &description) {
        Ok(draft) => draft,
        Err(e) => {
            println!("Invalid input: {e}");
            return Ok(NavIntent::FormCancel);
        }
    };

    let result = match editing.and_then(|p| p.id) {
        Some(id) => store.update(id, &draft).await,
        None => store.create(&draft).await,
    };
    match result {
        Ok(saved) => {
            println!(
                "Saved product {} ({})",
                saved.id.map_or(0, i64::from),
                format_price(saved.price)
            );
            Ok(NavIntent::FormSuccess)
        }
        Err(e) => {
            // Failures leave the form's pre-failure shape; the user
            // backs out explicitly.
            println!("Could not save product: {e}");
            Ok(NavIntent::FormCancel)
        }
    }
}

/// The detail screen: fetch, render, and prompt for the next intent.
#[allow(clippy::print_stdout)]
async fn run_detail(
    store: &ProductStoreClient,
    controller: &ViewController,
    list: &mut ListState,
    product_id: ProductId,
) -> Result<NavIntent, Box<dyn std::error::Error>> {
    let token = controller.token();
    let fetched = store.get_by_id(product_id).await;

    // A fetch that resolves after the user navigated away must not be
    // rendered onto whatever screen is mounted now.
    if !controller.is_current(token) {
        return Ok(NavIntent::Back);
    }

    let product = match fetched {
        Ok(product) => product,
        Err(e) => {
            // The detail screen switches to an explicit error display
            // when its fetch fails.
            println!("\nProduct {product_id} could not be loaded: {e}");
            let _ = prompt("detail> press enter to go back")?;
            return Ok(NavIntent::Back);
        }
    };

    println!();
    println!("Name:        {}", product.name);
    println!("Price:       {}", format_price(product.price));
    println!("Description: {}", product.description);

    loop {
        let line = prompt("detail> edit | delete | back")?;
        match line.trim() {
            "edit" => return Ok(NavIntent::Edit(product)),
            "back" => return Ok(NavIntent::Back),
            "delete" => {
                return match list.remove(store, product_id).await {
                    Ok(()) => Ok(NavIntent::DeleteConfirmed),
                    Err(e) => {
                        println!("Could not delete product: {e}");
                        Ok(NavIntent::Back)
                    }
                };
            }
            "" => {}
            other => println!("Unrecognized command: {other}"),
        }
    }
}

/// Prompt for a single line of input.
#[allow(clippy::print_stdout)]
fn prompt(label: &str) -> io::Result<String> {
    print!("{label}\n> ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

/// Prompt for a form field; `None` means the user left it empty with
/// no existing value to fall back on.
#[allow(clippy::print_stdout)]
fn prompt_field(label: &str, current: Option<String>) -> io::Result<Option<String>> {
    match &current {
        Some(value) => print!("{label} [{value}]: "),
        None => print!("{label}: "),
    }
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let entered = line.trim();

    if entered.is_empty() {
        return Ok(current);
    }
    Ok(Some(entered.to_string()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn seeded_list() -> ListState {
        let mut list = ListState::new();
        let ticket = list.begin_refresh();
        list.apply_refresh(
            ticket,
            vec![Product {
                id: Some(ProductId::new(1)),
                name: "Apple".to_string(),
                price: Decimal::from(2),
                description: "fruit".to_string(),
            }],
        );
        list
    }

    #[test]
    fn test_parse_view_command() {
        let list = seeded_list();
        assert_eq!(
            parse_list_command("view 1", &list),
            Some(NavIntent::View(ProductId::new(1)))
        );
    }

    #[test]
    fn test_parse_edit_requires_known_id() {
        let list = seeded_list();
        assert!(matches!(
            parse_list_command("edit 1", &list),
            Some(NavIntent::Edit(_))
        ));
        assert_eq!(parse_list_command("edit 99", &list), None);
    }

    #[test]
    fn test_parse_add() {
        let list = seeded_list();
        assert_eq!(parse_list_command("add", &list), Some(NavIntent::AddNew));
    }

    #[test]
    fn test_garbage_is_not_an_intent() {
        let list = seeded_list();
        assert_eq!(parse_list_command("frobnicate", &list), None);
    }
}
