//! Background brand-check service
//!
//! Handles issuing check requests against the HTTP endpoint without
//! blocking the UI thread. Each submission spawns one detached thread that
//! performs a single blocking POST; the normalized outcome is delivered
//! back over an mpsc channel and drained from the main loop on `Tick`.
//!
//! Submissions are deliberately not guarded against overlap: several checks
//! may be in flight at once, and their results append in completion order.

use crate::model::check::{BrandCheckResult, CheckResponse};
use anyhow::Result;
use serde::Serialize;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

/// Request body sent to the check endpoint
#[derive(Debug, Serialize)]
struct CheckRequest<'a> {
    prompt: &'a str,
    brand: &'a str,
}

/// Outcome of one background check
#[derive(Debug)]
pub enum CheckMessage {
    /// The endpoint answered and the response was normalized
    Completed(BrandCheckResult),
    /// Network or parse failure; no row is appended for these
    Failed(String),
}

/// Service for running brand checks in the background
pub struct CheckRunner {
    tx: Sender<CheckMessage>,
    rx: Receiver<CheckMessage>,
    /// Number of checks currently outstanding
    in_flight: usize,
}

impl Default for CheckRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckRunner {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Number of checks currently outstanding
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Whether any check is outstanding
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Spawn one background check
    ///
    /// The submitted prompt and brand are forwarded as-is; empty strings
    /// are permitted.
    pub fn spawn(&mut self, endpoint: String, prompt: String, brand: String) {
        self.in_flight += 1;
        let tx = self.tx.clone();

        thread::spawn(move || {
            let message = match run_check(&endpoint, &prompt, &brand) {
                Ok(result) => CheckMessage::Completed(result),
                Err(e) => CheckMessage::Failed(e.to_string()),
            };
            let _ = tx.send(message);
        });
    }

    /// Drain all finished checks
    ///
    /// The in-flight counter is decremented per drained message regardless
    /// of outcome, so the busy flag always returns to idle.
    pub fn poll(&mut self) -> Vec<CheckMessage> {
        let mut messages = Vec::new();

        loop {
            match self.rx.try_recv() {
                Ok(message) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    messages.push(message);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        messages
    }
}

/// Issue one blocking POST and normalize the response
///
/// One ephemeral connection per call; no retry, no timeout.
fn run_check(endpoint: &str, prompt: &str, brand: &str) -> Result<BrandCheckResult> {
    let client = reqwest::blocking::Client::new();
    let response = client
        .post(endpoint)
        .json(&CheckRequest { prompt, brand })
        .send()?;

    let body: CheckResponse = response.json()?;
    Ok(body.into_result(prompt, brand))
}
