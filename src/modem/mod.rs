//! Arris modem web interface module
//!
//! This module fetches the modem status pages over HTTP and extracts
//! identity, boot sequence and RF channel records from their markup.

mod client;
mod extract;
mod layout;
mod types;
mod units;

// Re-export public types and functions
pub use client::ModemClient;
pub use extract::{extract_boot_status, extract_downstream, extract_info, extract_upstream};
pub use layout::{CompiledLayout, PageLayout};
pub use types::{BootStatusEntry, DownstreamChannel, ModemInfo, ModemReport, Page, UpstreamChannel};
pub use units::{UnitError, parse_plain_float, parse_suffixed_float, parse_uptime};
