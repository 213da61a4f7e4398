//! Site page enumeration.
//!
//! The notifier only needs slugs; where the content lives is up to the
//! [`ContentInventory`] implementation.

use crate::models::ContentConfig;

/// Read-only view of the pages the site publishes.
pub trait ContentInventory: Send + Sync {
    /// Fixed pages such as `/` or `/tickets`.
    fn static_paths(&self) -> Vec<String>;
    fn team_slugs(&self) -> Vec<String>;
    fn venue_slugs(&self) -> Vec<String>;
    fn city_slugs(&self) -> Vec<String>;
    fn match_ids(&self) -> Vec<String>;
}

impl ContentInventory for ContentConfig {
    fn static_paths(&self) -> Vec<String> {
        self.static_paths.clone()
    }

    fn team_slugs(&self) -> Vec<String> {
        self.teams.clone()
    }

    fn venue_slugs(&self) -> Vec<String> {
        self.venues.clone()
    }

    fn city_slugs(&self) -> Vec<String> {
        self.cities.clone()
    }

    fn match_ids(&self) -> Vec<String> {
        self.matches.clone()
    }
}

/// Every site-relative path the site serves.
///
/// Order: static pages, then per team the profile and schedule pages,
/// then venues, cities and matches.
pub fn site_paths(inventory: &dyn ContentInventory) -> Vec<String> {
    let mut paths = inventory.static_paths();

    for team in inventory.team_slugs() {
        paths.push(format!("/teams/{team}"));
        paths.push(format!("/teams/{team}/schedule"));
    }
    paths.extend(
        inventory
            .venue_slugs()
            .into_iter()
            .map(|venue| format!("/venues/{venue}")),
    );
    paths.extend(
        inventory
            .city_slugs()
            .into_iter()
            .map(|city| format!("/cities/{city}")),
    );
    paths.extend(
        inventory
            .match_ids()
            .into_iter()
            .map(|id| format!("/matches/{id}")),
    );

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_inventory() -> ContentConfig {
        ContentConfig {
            static_paths: vec!["/".into(), "/tickets".into()],
            recent_paths: vec!["/".into()],
            teams: vec!["fiji".into()],
            venues: vec!["adelaide-oval".into()],
            cities: vec!["perth".into()],
            matches: vec!["match-1".into()],
        }
    }

    #[test]
    fn test_site_paths_order_and_shape() {
        assert_eq!(
            site_paths(&small_inventory()),
            vec![
                "/",
                "/tickets",
                "/teams/fiji",
                "/teams/fiji/schedule",
                "/venues/adelaide-oval",
                "/cities/perth",
                "/matches/match-1",
            ]
        );
    }

    #[test]
    fn test_site_paths_count_for_defaults() {
        let content = ContentConfig::default();
        let expected = content.static_paths.len()
            + 2 * content.teams.len()
            + content.venues.len()
            + content.cities.len()
            + content.matches.len();
        assert_eq!(site_paths(&content).len(), expected);
    }
}
