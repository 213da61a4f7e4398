//! Service layer for the notifier.
//!
//! This module contains the business logic for:
//! - URL submission to IndexNow endpoints (`UrlNotifier`)
//! - Site page enumeration (`ContentInventory`, `site_paths`)
//! - The network and pacing seams (`PingTransport`, `Pacer`)

pub mod inventory;
mod notifier;
pub mod pacer;
pub mod transport;

pub use inventory::{ContentInventory, site_paths};
pub use notifier::{UrlNotifier, is_acknowledged};
pub use pacer::{Pacer, TokioPacer};
pub use transport::{HttpTransport, JSON_CONTENT_TYPE, PingResponse, PingTransport};
