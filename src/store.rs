use crate::pages::RouteDescriptor;
use gloo_storage::Storage;
use yew_router::Routable;

const KEY_PREFERENCES: &str = "daytrack.preferences";
const KEY_ACTIVITY: &str = "daytrack.activity";

const ACTIVITY_LIMIT: usize = 50;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Preferences {
    pub display_name: String,
}

impl Preferences {
    pub fn load() -> Self {
        gloo_storage::LocalStorage::get(KEY_PREFERENCES).unwrap_or_default()
    }

    pub fn store(preferences: Preferences) {
        let _ = gloo_storage::LocalStorage::set(KEY_PREFERENCES, preferences);
    }

    pub fn clear() {
        gloo_storage::LocalStorage::delete(KEY_PREFERENCES);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct VisitEntry {
    pub title: String,
    pub path: String,
    pub timestamp: String,
}

impl VisitEntry {
    pub fn new(descriptor: &RouteDescriptor) -> Self {
        Self {
            title: descriptor.title.to_string(),
            path: descriptor.route.to_path(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

/// Session-scoped visit log. Like the navigation state itself, it does not
/// outlive the page session.
pub struct ActivityLog;

impl ActivityLog {
    pub fn load() -> Vec<VisitEntry> {
        gloo_storage::SessionStorage::get(KEY_ACTIVITY).unwrap_or_default()
    }

    pub fn record(entry: VisitEntry) {
        let mut entries = Self::load();
        integrate(&mut entries, entry);
        let _ = gloo_storage::SessionStorage::set(KEY_ACTIVITY, entries);
    }

    pub fn clear() {
        gloo_storage::SessionStorage::delete(KEY_ACTIVITY);
    }
}

// oldest entries are dropped first
fn integrate(entries: &mut Vec<VisitEntry>, entry: VisitEntry) {
    entries.push(entry);
    if entries.len() > ACTIVITY_LIMIT {
        let excess = entries.len() - ACTIVITY_LIMIT;
        entries.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::ROUTES;

    fn entry(path: &str) -> VisitEntry {
        VisitEntry {
            title: "Test".to_string(),
            path: path.to_string(),
            timestamp: "00:00:00".to_string(),
        }
    }

    #[test]
    fn integrate_caps_the_log() {
        let mut entries = Vec::new();
        for i in 0..ACTIVITY_LIMIT + 10 {
            integrate(&mut entries, entry(&format!("/{i}")));
        }

        assert_eq!(entries.len(), ACTIVITY_LIMIT);
        assert_eq!(entries.first().unwrap().path, "/10");
        assert_eq!(
            entries.last().unwrap().path,
            format!("/{}", ACTIVITY_LIMIT + 9)
        );
    }

    #[test]
    fn visit_entries_take_title_and_path_from_the_descriptor() {
        let visit = VisitEntry::new(&ROUTES[2]);
        assert_eq!(visit.title, "Activity");
        assert_eq!(visit.path, "/activity");
    }

    #[test]
    fn preferences_default_to_an_empty_display_name() {
        assert_eq!(Preferences::default().display_name, "");
    }
}
