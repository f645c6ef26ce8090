//! Per-session UI state: the results on display, the optional memo, the
//! loading flag and the uploaded file name.
//!
//! Every upload bumps a generation counter. The ticket handed out by
//! [`Dashboard::begin_upload`] must match the current generation for its
//! result to land, so a superseded request can never overwrite newer state.

mod store;

use std::time::Instant;

use crate::models::{AiDecision, Analysis, Project};

pub use store::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
}

/// Proof that an upload was started; redeemed exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct UploadTicket {
    generation: u64,
}

impl UploadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadInProgress;

impl std::fmt::Display for UploadInProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("An upload is already being analyzed")
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    projects: Vec<Project>,
    decision: Option<AiDecision>,
    loading: bool,
    uploaded_file: Option<String>,
    error: Option<String>,
    generation: u64,
    touched_at: Instant,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            decision: None,
            loading: false,
            uploaded_file: None,
            error: None,
            generation: 0,
            touched_at: Instant::now(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.uploaded_file.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn decision(&self) -> Option<&AiDecision> {
        self.decision.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn uploaded_file(&self) -> Option<&str> {
        self.uploaded_file.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn touched_at(&self) -> Instant {
        self.touched_at
    }

    /// Upload started: clear the previous results and raise the loading flag.
    /// Refused while another upload for this session is still in flight.
    pub fn begin_upload(&mut self) -> Result<UploadTicket, UploadInProgress> {
        if self.loading {
            return Err(UploadInProgress);
        }

        self.generation += 1;
        self.loading = true;
        self.projects.clear();
        self.decision = None;
        self.uploaded_file = None;
        self.error = None;
        self.touched_at = Instant::now();

        Ok(UploadTicket {
            generation: self.generation,
        })
    }

    /// Upload succeeded. Returns `false` if the ticket was superseded.
    pub fn complete(&mut self, ticket: UploadTicket, analysis: Analysis) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        let (file, projects, decision) = analysis.into_parts();
        self.projects = projects;
        self.decision = decision;
        self.uploaded_file = Some(file.original_name);
        self.loading = false;
        self.error = None;
        self.touched_at = Instant::now();
        true
    }

    /// Upload failed. Only the loading flag and the error flash change.
    /// Returns `false` if the ticket was superseded.
    pub fn fail(&mut self, ticket: UploadTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.loading = false;
        self.error = Some(message.into());
        self.touched_at = Instant::now();
        true
    }

    /// Show a message without touching results or the loading flag; used for
    /// uploads rejected before they start.
    pub fn flash(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.touched_at = Instant::now();
    }

    /// Clear everything. Any in-flight upload is abandoned: its ticket goes
    /// stale.
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self::new();
        self.generation = generation;
    }

    fn is_current(&self, ticket: UploadTicket) -> bool {
        self.loading && ticket.generation == self.generation
    }
}
