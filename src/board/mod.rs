//! Status-partitioned task board engine.
//!
//! A board loads its columns from the declared choices of a status field and
//! its cards from the items of a record-store list, lays the columns out on a
//! bounded grid, and persists drag-and-drop status changes back to the store.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
