//! # Aura Report
//!
//! Output side of the tool: paginated PDF reports of a query result and the
//! append-only telemetry log. Telemetry failures are swallowed (logging
//! must never interrupt the primary flow); PDF failures surface to the
//! caller.

pub mod pdf;
pub mod telemetry;

pub use pdf::export_pdf;
pub use telemetry::Telemetry;
