//! Off-thread loading of the members list.
//!
//! `load` spawns the request and returns immediately. The outcome comes back over a
//! `flume` channel and is picked up by `poll` on the UI thread, so every mutation of
//! the table still happens on one thread.
//!
//! Requests are never cancelled. If two loads overlap, whichever finishes last wins,
//! even when it belongs to an older search term.

use chrono::{DateTime, Utc};
use flume::{Receiver, Sender};
use log::{debug, error, info};
use ustr::Ustr;

use super::api::{MembersApiError, list_members};
use crate::member::Member;

/// Result of one finished request.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded {
        term: String,
        members: Vec<Member>,
        at: DateTime<Utc>,
    },
    Failed {
        term: String,
        error: MembersApiError,
    },
}

#[derive(Debug)]
pub struct MembersLoader {
    members_url: Ustr,
    send: Sender<LoadOutcome>,
    recv: Receiver<LoadOutcome>,
    in_flight: usize,
    last_loaded: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

impl MembersLoader {
    pub fn new(members_url: Ustr) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            members_url,
            send,
            recv,
            in_flight: 0,
            last_loaded: None,
            last_error: None,
        }
    }

    pub fn members_url(&self) -> &str {
        self.members_url.as_str()
    }

    /// Whether any request is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Completion time of the last successful load.
    pub fn last_loaded(&self) -> Option<DateTime<Utc>> {
        self.last_loaded
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Fire one GET for `term`.
    pub fn load(&mut self, term: &str) {
        let members_url = self.members_url;
        let term = term.to_string();
        let send = self.send.clone();

        info!("Loading members from {members_url} (search={term:?})");

        let task = async move {
            let outcome = match list_members(members_url.as_str(), &term).await {
                Ok(members) => LoadOutcome::Loaded {
                    term,
                    members,
                    at: Utc::now(),
                },
                Err(error) => LoadOutcome::Failed { term, error },
            };
            if send.send(outcome).is_err() {
                debug!("Members loader dropped before the response arrived");
            }
        };

        self.in_flight += 1;

        #[cfg(not(target_arch = "wasm32"))]
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(task);
            }
            Err(err) => {
                error!("Cannot load members outside a tokio runtime: {err}");
                self.in_flight -= 1;
            }
        }

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task);
    }

    /// Drain every finished request, oldest first.
    pub fn poll(&mut self) -> Vec<LoadOutcome> {
        let outcomes: Vec<LoadOutcome> = self.recv.try_iter().collect();

        for outcome in &outcomes {
            self.in_flight = self.in_flight.saturating_sub(1);
            match outcome {
                LoadOutcome::Loaded { term, members, at } => {
                    info!(
                        "Loaded {} members (search={term:?}) at {at}",
                        members.len()
                    );
                    self.last_loaded = Some(*at);
                    self.last_error = None;
                }
                LoadOutcome::Failed { term, error } => {
                    error!("Error fetching members (search={term:?}): {error}");
                    self.last_error = Some(error.to_string());
                }
            }
        }

        outcomes
    }
}
