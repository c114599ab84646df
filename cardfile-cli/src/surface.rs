/// Render-surface abstraction
///
/// The orchestrator never touches the terminal directly. It drives a
/// `Surface`: loading indicator, global error region, results region, and
/// one subscription sub-region per card, addressed by an explicit
/// `CardHandle` rather than looked up by side effect. Concurrent order
/// fetches therefore never contend; each patch targets its own handle.
///
/// The terminal implementation prints; tests substitute a recording
/// implementation and assert on the exact event sequence.

use std::io::Write;

/// Handle identifying one contact's card region
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardHandle {
    /// Contact id the region is keyed by
    pub contact_id: String,

    /// Display name used when addressing the card for a reader
    pub display_name: String,
}

/// One rendered contact card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Region handle for later patches
    pub handle: CardHandle,

    /// Card body text
    pub body: String,

    /// Whether a subscription region was rendered (membership id present)
    pub awaiting_orders: bool,
}

/// The presentation surface the orchestrator drives
pub trait Surface: Send + Sync {
    /// Shows or hides the loading indicator
    fn set_loading(&self, loading: bool);

    /// Shows a search-level error in the global error region
    fn show_error(&self, message: &str);

    /// Replaces the results region with the "no results" placeholder
    fn show_no_results(&self);

    /// Replaces the results region with the given cards
    fn show_cards(&self, cards: &[Card]);

    /// Patches one card's subscription sub-region
    fn patch_orders(&self, handle: &CardHandle, panel: &str);
}

/// Terminal implementation of `Surface`
///
/// Prints regions as they change. Because patches arrive after the cards
/// have scrolled by, each patch is printed as its own block addressed by
/// the card's display name.
#[derive(Debug, Default)]
pub struct TerminalSurface;

impl TerminalSurface {
    pub fn new() -> Self {
        TerminalSurface
    }

    fn print(&self, text: &str) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        let _ = writeln!(lock, "{}", text);
    }
}

impl Surface for TerminalSurface {
    fn set_loading(&self, loading: bool) {
        if loading {
            self.print("Searching...");
        }
    }

    fn show_error(&self, message: &str) {
        self.print(&format!("error: {}", message));
    }

    fn show_no_results(&self) {
        self.print("No contacts found matching your search.");
    }

    fn show_cards(&self, cards: &[Card]) {
        for card in cards {
            self.print("");
            self.print(&card.body);
        }
    }

    fn patch_orders(&self, handle: &CardHandle, panel: &str) {
        self.print(&format!("\n[{}]\n{}", handle.display_name, panel));
    }
}
