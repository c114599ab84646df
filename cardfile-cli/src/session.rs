/// Search orchestration
///
/// This module implements one search pass: build the query, fetch the
/// contacts, render the cards, then fetch every member's orders
/// concurrently and patch each card as its fetch resolves.
///
/// # Concurrency
///
/// Order fetches run as one Tokio task per contact, collected in a
/// `JoinSet` and joined, not raced, before the pass returns. Each fetch
/// is isolated: a failure patches only its own card, never retries, and
/// never aborts a sibling. A `CancellationToken` threads through every
/// task so the caller can cancel a superseded search; a cancelled fetch
/// writes nothing, which keeps stale results from overwriting a newer
/// search's cards.
///
/// # Example
///
/// ```no_run
/// use cardfile_cli::client::ApiDirectory;
/// use cardfile_cli::session::run_search;
/// use cardfile_cli::surface::TerminalSurface;
/// use std::sync::Arc;
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> anyhow::Result<()> {
/// let directory = Arc::new(ApiDirectory::new("http://127.0.0.1:3001")?);
/// let surface = Arc::new(TerminalSurface::new());
/// let today = chrono::Local::now().date_naive();
///
/// run_search(directory, surface, "ann", today, CancellationToken::new()).await;
/// # Ok(())
/// # }
/// ```

use crate::client::Directory;
use crate::render;
use crate::surface::{Card, Surface};
use cardfile_shared::derive::ContactView;
use cardfile_shared::query::ContactQuery;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// Runs one complete search pass against the surface.
///
/// Blank input is a no-op: no request is issued and no surface region is
/// touched. A search-level failure lands in the global error region; an
/// empty result page renders the "no results" placeholder and issues zero
/// order fetches. The pass returns once every order fetch has resolved or
/// the token was cancelled.
pub async fn run_search(
    directory: Arc<dyn Directory>,
    surface: Arc<dyn Surface>,
    term: &str,
    today: NaiveDate,
    cancel: CancellationToken,
) {
    let Some(query) = ContactQuery::by_name_prefix(term) else {
        return;
    };

    surface.set_loading(true);

    let contacts = tokio::select! {
        _ = cancel.cancelled() => {
            tracing::debug!("Search cancelled before completion");
            return;
        }
        result = directory.search(&query) => match result {
            Ok(contacts) => contacts,
            Err(e) => {
                surface.set_loading(false);
                surface.show_error(&format!("Error searching contacts: {}", e));
                return;
            }
        },
    };

    surface.set_loading(false);

    if contacts.is_empty() {
        surface.show_no_results();
        return;
    }

    let cards: Vec<Card> = contacts
        .iter()
        .map(|contact| render::card(contact, &ContactView::derive(contact, today)))
        .collect();
    surface.show_cards(&cards);

    // One fetch task per member; each owns its card handle and patches only
    // its own region.
    let mut fetches = JoinSet::new();
    for (contact, card) in contacts.iter().zip(&cards) {
        let Some(member_id) = contact.member_id() else {
            continue;
        };

        let member_id = member_id.to_string();
        let handle = card.handle.clone();
        let directory = directory.clone();
        let surface = surface.clone();
        let cancel = cancel.clone();

        fetches.spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!(contact_id = %handle.contact_id, "Order fetch cancelled");
                }
                result = directory.orders_for_member(&member_id) => match result {
                    Ok(orders) => {
                        surface.patch_orders(&handle, &render::orders_panel(&orders));
                    }
                    Err(e) => {
                        tracing::warn!(
                            contact_id = %handle.contact_id,
                            error = %e,
                            "Order fetch failed"
                        );
                        surface.patch_orders(&handle, &render::orders_error(&e.to_string()));
                    }
                },
            }
        });
    }

    while let Some(joined) = fetches.join_next().await {
        if let Err(e) = joined {
            tracing::error!(error = %e, "Order fetch task panicked");
        }
    }
}
