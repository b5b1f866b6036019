//! View-state machine selecting the mounted screen.
//!
//! A three-state selector (list / form / detail) driven by navigation
//! intents. State transitions happen in one place, [`reduce`], which is
//! a pure function; [`ViewController`] wraps it with the navigation
//! epoch used to discard results of fetches that outlive their screen.

use shelf_core::{Product, ProductId};

/// Which screen is mounted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// The product list with its search box.
    #[default]
    List,
    /// The create/edit form. `editing` carries the product being
    /// edited, or `None` for a fresh draft.
    Form { editing: Option<Product> },
    /// The read-only detail screen for one product.
    Detail { product_id: ProductId },
}

/// A navigation intent raised by a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    /// Open the form with a fresh draft.
    AddNew,
    /// Open the form pre-filled with an existing product.
    Edit(Product),
    /// Open the detail screen for a product.
    View(ProductId),
    /// The form submitted successfully.
    FormSuccess,
    /// The form was dismissed without submitting.
    FormCancel,
    /// Leave the detail screen.
    Back,
    /// The detail screen's delete was confirmed and performed.
    DeleteConfirmed,
}

/// Process a navigation intent and return the new view state.
///
/// Pure function with no side effects. Intents that are illegal in the
/// current state leave it unchanged:
///
/// - `AddNew` is accepted from any state
/// - `Edit` only from the list or detail screens
/// - `View` only from the list screen
/// - `FormSuccess` / `FormCancel` only from the form
/// - `Back` / `DeleteConfirmed` only from the detail screen
///
/// Deletion itself is delegated to [`crate::ListState::remove`]; the
/// `DeleteConfirmed` intent only navigates away.
#[must_use]
pub fn reduce(state: &ViewState, intent: NavIntent) -> ViewState {
    match (state, intent) {
        (_, NavIntent::AddNew) => ViewState::Form { editing: None },
        (ViewState::List | ViewState::Detail { .. }, NavIntent::Edit(product)) => {
            ViewState::Form {
                editing: Some(product),
            }
        }
        (ViewState::List, NavIntent::View(product_id)) => ViewState::Detail { product_id },
        (ViewState::Form { .. }, NavIntent::FormSuccess | NavIntent::FormCancel)
        | (ViewState::Detail { .. }, NavIntent::Back | NavIntent::DeleteConfirmed) => {
            ViewState::List
        }
        (current, _) => current.clone(),
    }
}

/// Staleness token tied to one mounted screen.
///
/// A screen captures the token when it starts a fetch and checks it
/// against the controller before applying the result; a token from a
/// screen the user has since left no longer verifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavToken {
    epoch: u64,
}

/// Drives [`reduce`] and tracks the navigation epoch.
///
/// There is no terminal state; the controller cycles for the life of
/// the session.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    state: ViewState,
    epoch: u64,
}

impl ViewController {
    /// Create a controller mounted on the list screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently mounted screen.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Apply a navigation intent.
    ///
    /// The navigation epoch advances only when the mounted screen
    /// actually changes, so ignored intents do not invalidate
    /// outstanding fetches.
    pub fn dispatch(&mut self, intent: NavIntent) -> &ViewState {
        let next = reduce(&self.state, intent);
        if next != self.state {
            self.epoch += 1;
            self.state = next;
        }
        &self.state
    }

    /// Token for the currently mounted screen.
    #[must_use]
    pub const fn token(&self) -> NavToken {
        NavToken { epoch: self.epoch }
    }

    /// Whether a result tagged with `token` may still be applied.
    #[must_use]
    pub const fn is_current(&self, token: NavToken) -> bool {
        token.epoch == self.epoch
    }
}
