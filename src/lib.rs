//! electronics-mcp: an electronics engineering knowledge server for MCP.
//!
//! Exposes fourteen deterministic tools over the Model Context Protocol:
//! resistor color-code translation, capacitor/RC/LC calculations, and a
//! curated GPIO pin capability database with conflict detection for three
//! microcontroller boards (ESP32 DevKitC, Arduino UNO R3, STM32F103C8T6
//! "Blue Pill").
//!
//! # Architecture
//!
//! Every tool is a pure function over immutable, compile-time lookup
//! tables - there is no I/O, no persistence, and no shared mutable state,
//! so requests can be served concurrently without synchronisation. Each
//! domain module separates a compute layer (typed results) from a render
//! layer (Markdown text) so tests assert on values, not presentation.
//!
//! # Modules
//!
//! - [`config`] — configuration loading and validation
//! - [`error`] — error types (the closed tool-failure enumeration)
//! - [`units`] — SI-prefixed quantity formatting
//! - [`series`] — IEC 60063 preferred-value tables (E12/E24/E96)
//! - [`resistor`] — color-band codec
//! - [`capacitor`] — formula kernel
//! - [`gpio`] — pin database, discovery, conflict engine, diagrams
//! - [`mcp`] — JSON-RPC protocol, stdio transport, tool registry

pub mod capacitor;
pub mod config;
pub mod error;
pub mod gpio;
pub mod mcp;
pub mod resistor;
pub mod series;
pub mod units;
