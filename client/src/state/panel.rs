//! Request lifecycle shared by every fetch-bound panel.
//!
//! DESIGN
//! ======
//! A panel slot moves `Idle -> Pending -> Loaded | Failed`. Each trigger
//! takes a [`Ticket`] from a monotonic per-slot counter; a response is only
//! applied when its ticket is newer than the last one applied, so a slow
//! older response can never overwrite a newer one (last-issued wins).
//!
//! Panel state is reached through [`PanelCell`] so async flows can hold a
//! handle across an await without borrowing the panel. A cell whose panel
//! has unmounted returns `None`, which swallows late responses.
//!
//! The last loaded value outlives a reload: it stays readable through
//! [`Panel::value`] while the next request is pending or after it fails,
//! and is only replaced by a newer successful response.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use std::cell::RefCell;

use leptos::prelude::*;
use wire::ApiError;

/// Tagged result of the most recently applied request.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PanelState<T> {
    #[default]
    Idle,
    Pending,
    Loaded(T),
    Failed(ApiError),
}

/// Sequence number handed out when a request begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// One request slot: current state plus issued/applied sequence counters.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel<T> {
    state: PanelState<T>,
    previous: Option<T>,
    issued: u64,
    applied: u64,
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Self { state: PanelState::Idle, previous: None, issued: 0, applied: 0 }
    }
}

impl<T> Panel<T> {
    /// Start a request: hand out the next ticket and show `Pending`.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        if let PanelState::Loaded(value) = std::mem::replace(&mut self.state, PanelState::Pending) {
            self.previous = Some(value);
        }
        Ticket(self.issued)
    }

    /// Apply a response. Returns `false` when the ticket is stale and the
    /// result was discarded.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        self.state = match result {
            Ok(value) => {
                self.previous = None;
                PanelState::Loaded(value)
            }
            Err(error) => PanelState::Failed(error),
        };
        true
    }

    #[must_use]
    pub fn state(&self) -> &PanelState<T> {
        &self.state
    }

    /// The current value, or the last loaded one while a reload is pending
    /// or after it failed.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            PanelState::Loaded(value) => Some(value),
            _ => self.previous.as_ref(),
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        match &self.state {
            PanelState::Failed(error) => Some(error),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, PanelState::Pending)
    }

    /// Whether any issued request has not had a response applied yet.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.issued > self.applied
    }
}

/// Mutable access to panel state that may disappear while a request is out.
pub trait PanelCell<P> {
    /// Run `f` against the panel, or return `None` if it is gone.
    fn with_mut<R>(&self, f: impl FnOnce(&mut P) -> R) -> Option<R>;

    /// Clone the panel out, or `None` if it is gone.
    fn snapshot(&self) -> Option<P>
    where
        P: Clone,
    {
        self.with_mut(|p| p.clone())
    }
}

impl<P> PanelCell<P> for RefCell<P> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut P) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<P: Send + Sync + 'static> PanelCell<P> for RwSignal<P> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut P) -> R) -> Option<R> {
        self.try_update(f)
    }
}
