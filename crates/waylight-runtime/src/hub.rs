#![forbid(unsafe_code)]

//! Hub card summaries.
//!
//! The training hub lists every tour as a card with a status chip and an
//! action button. This module computes those statuses from the store; the
//! card chrome (icons, labels, buttons) is the host's.

use waylight_catalog::TourId;
use waylight_store::{TourStatus, TourStore};

/// Display status of one hub card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    NotStarted,
    /// Percentage of steps completed so far.
    InProgress { percent: u8 },
    Completed,
    Skipped,
    /// Prerequisites unmet; the card shows what is missing instead of a
    /// start button.
    Locked,
}

/// One hub card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HubCard {
    pub id: TourId,
    pub status: CardStatus,
}

/// Compute the display status for one tour.
#[must_use]
pub fn card_status(store: &TourStore, id: TourId) -> CardStatus {
    if !store.can_start(id) {
        return CardStatus::Locked;
    }
    match store.progress(id) {
        None => CardStatus::NotStarted,
        Some(p) => match p.status {
            TourStatus::NotStarted => CardStatus::NotStarted,
            TourStatus::InProgress => {
                let total = store.catalog().get(id).map_or(0, |d| d.steps.len());
                let percent = if total == 0 {
                    0
                } else {
                    ((p.completed_steps.len() as f64 / total as f64) * 100.0).round() as u8
                };
                CardStatus::InProgress { percent }
            }
            TourStatus::Completed => CardStatus::Completed,
            TourStatus::Skipped => CardStatus::Skipped,
        },
    }
}

/// Cards for every tour, in catalog order.
#[must_use]
pub fn hub_cards(store: &TourStore) -> Vec<HubCard> {
    store
        .catalog()
        .ids()
        .into_iter()
        .map(|id| HubCard {
            id,
            status: card_status(store, id),
        })
        .collect()
}
