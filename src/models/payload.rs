//! IndexNow notification payload.

use serde::{Deserialize, Serialize};

use crate::models::SiteConfig;

/// JSON body POSTed to every IndexNow endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub host: String,
    pub key: String,
    /// Absolute URL of the key file
    pub key_location: String,
    /// Absolute URLs being announced
    pub url_list: Vec<String>,
}

impl NotificationPayload {
    /// Build the payload for one batch of already-normalized URLs.
    pub fn new(site: &SiteConfig, url_list: Vec<String>) -> Self {
        Self {
            host: site.host.clone(),
            key: site.key.clone(),
            key_location: site.key_location(),
            url_list,
        }
    }
}
