use patternfly_yew::prelude::Icon;
use yew_router::prelude::*;

mod about;
mod activity;
mod dashboard;
mod not_found;
mod settings;

pub use about::*;
pub use activity::*;
pub use dashboard::*;
pub use not_found::*;
pub use settings::*;

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum AppRoute {
    #[at("/")]
    Index,
    #[at("/info")]
    Info,
    #[at("/activity")]
    Activity,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/not-found")]
    NotFound,
}

/// One entry of the route table: a navigation target plus what the sidebar
/// shows for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub route: AppRoute,
    pub title: &'static str,
    pub icon: Icon,
}

/// The route table. Sidebar navigation and the view switch are both derived
/// from here, there is no second list to keep in sync.
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        route: AppRoute::Index,
        title: "Home",
        icon: Icon::Home,
    },
    RouteDescriptor {
        route: AppRoute::Info,
        title: "About",
        icon: Icon::InfoCircle,
    },
    RouteDescriptor {
        route: AppRoute::Activity,
        title: "Activity",
        icon: Icon::Monitoring,
    },
    RouteDescriptor {
        route: AppRoute::Settings,
        title: "Settings",
        icon: Icon::Cog,
    },
];

impl AppRoute {
    pub fn descriptor(&self) -> Option<&'static RouteDescriptor> {
        ROUTES.iter().find(|descriptor| descriptor.route == *self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_paths_are_unique() {
        let paths: HashSet<_> = ROUTES
            .iter()
            .map(|descriptor| descriptor.route.to_path())
            .collect();
        assert_eq!(paths.len(), ROUTES.len());
    }

    #[test]
    fn known_paths_resolve_to_their_views() {
        assert_eq!(AppRoute::recognize("/"), Some(AppRoute::Index));
        assert_eq!(AppRoute::recognize("/info"), Some(AppRoute::Info));
        assert_eq!(AppRoute::recognize("/activity"), Some(AppRoute::Activity));
        assert_eq!(AppRoute::recognize("/settings"), Some(AppRoute::Settings));
    }

    #[test]
    fn descriptor_paths_round_trip() {
        for descriptor in ROUTES {
            assert_eq!(
                AppRoute::recognize(&descriptor.route.to_path()).as_ref(),
                Some(&descriptor.route)
            );
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(
            AppRoute::recognize("/does-not-exist"),
            Some(AppRoute::NotFound)
        );
    }

    #[test]
    fn every_view_route_has_a_descriptor() {
        assert!(AppRoute::Index.descriptor().is_some());
        assert!(AppRoute::Info.descriptor().is_some());
        assert!(AppRoute::Activity.descriptor().is_some());
        assert!(AppRoute::Settings.descriptor().is_some());
        // the catch-all is not part of the navigation
        assert!(AppRoute::NotFound.descriptor().is_none());
    }

    #[test]
    fn default_route_is_the_dashboard() {
        assert_eq!(AppRoute::default(), AppRoute::Index);
    }
}
