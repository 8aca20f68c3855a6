//! Background Tasks Module
//!
//! Contains background tasks that run during server operation.
//!
//! # Tasks
//! - Catalog warm-up: builds the catalog cache once at startup

mod warmup;

pub use warmup::spawn_warmup_task;
