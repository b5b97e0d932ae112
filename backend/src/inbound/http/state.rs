//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CounterStore, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Backs `GET /users`.
    pub users: Arc<dyn UsersQuery>,
    /// Backs `GET /counter`.
    pub counters: Arc<dyn CounterStore>,
}

impl HttpState {
    /// Bundle the driving ports used by the handlers.
    pub fn new(users: Arc<dyn UsersQuery>, counters: Arc<dyn CounterStore>) -> Self {
        Self { users, counters }
    }
}
