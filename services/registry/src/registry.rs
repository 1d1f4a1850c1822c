//! In-memory event registry.
//!
//! The registry is the authoritative store for fundraising events. The
//! planned ledger integration will eventually own parts of this state
//! (balances, status transitions); until it lands, everything lives here
//! and dies with the process.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when querying the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No event matches the requested id.
    #[error("event {id} not found")]
    NotFound { id: u64 },
}

/// Lifecycle status of an event.
///
/// Every event starts `Open`. Transitions (funding goal reached, deadline
/// passed) arrive with the ledger integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Open,
}

/// A fundraising event record.
///
/// Organizer fields are stored exactly as submitted; absent fields stay
/// unset and are omitted from serialized output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Registry-assigned id, dense and increasing in creation order.
    pub id: u64,

    /// Display name of the campaign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Tax identifier (NIT) of the organizer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nit: Option<String>,

    /// Organizer contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Campaign website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Monetary target for the campaign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_amount: Option<f64>,

    /// Campaign deadline, stored verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,

    /// Total raised so far. Only the future ledger sync mutates this.
    pub amount_raised: f64,

    /// Current lifecycle status.
    pub status: EventStatus,
}

/// Fields accepted when creating an event.
///
/// Every field is optional and unvalidated; whatever arrives is stored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventDraft {
    pub name: Option<String>,
    pub nit: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub goal_amount: Option<f64>,
    pub deadline: Option<String>,
}

/// In-process store of all events for the service's lifetime.
///
/// Appends and scans are serialized behind a single mutex, so concurrent
/// requests cannot interleave id assignment with the append and ids stay
/// dense and equal to creation order. The guard is never held across an
/// await point.
#[derive(Debug, Default)]
pub struct EventRegistry {
    inner: Mutex<RegistryInner>,
}

#[derive(Debug, Default)]
struct RegistryInner {
    /// Next id to assign. Tracked separately from `events.len()` so a
    /// future delete operation cannot recycle ids.
    next_id: u64,
    events: Vec<Event>,
}

impl EventRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new event built from the draft and return the full record.
    pub fn create(&self, draft: EventDraft) -> Event {
        let mut inner = self.inner.lock().unwrap();
        let event = Event {
            id: inner.next_id,
            name: draft.name,
            nit: draft.nit,
            email: draft.email,
            website: draft.website,
            goal_amount: draft.goal_amount,
            deadline: draft.deadline,
            amount_raised: 0.0,
            status: EventStatus::Open,
        };
        inner.next_id += 1;
        inner.events.push(event.clone());
        event
    }

    /// All events in creation order.
    pub fn list(&self) -> Vec<Event> {
        self.inner.lock().unwrap().events.clone()
    }

    /// Look up an event by id.
    ///
    /// Scans by id equality rather than indexing, so the lookup stays
    /// correct if deletion or reordering ever lands.
    pub fn get(&self, id: u64) -> Result<Event, RegistryError> {
        self.inner
            .lock()
            .unwrap()
            .events
            .iter()
            .find(|event| event.id == id)
            .cloned()
            .ok_or(RegistryError::NotFound { id })
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().events.len()
    }

    /// Whether the registry holds no events.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
