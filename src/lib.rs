//! Taskboard: status-partitioned task board engine.
//!
//! This crate loads a task board from an abstract record store, partitions
//! tasks into status columns, lays the columns out on a bounded grid, and
//! persists drag-and-drop status changes back to the store.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the record store, the visual
//!   surface, and the drag-and-drop layer
//! - **Adapters**: Concrete implementations of ports (in-memory, HTML)
//!
//! # Modules
//!
//! - [`board`]: Board loading, layout, settings discovery, and status
//!   transitions

pub mod board;
