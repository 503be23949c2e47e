use crate::pages::AppRoute;
use crate::store::{ActivityLog, VisitEntry};
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[hook]
pub fn use_open<IN>(url: impl Into<String>, target: impl Into<String>) -> Callback<IN, ()>
where
    IN: 'static,
{
    use_callback(
        |_, (url, target)| {
            let _ = gloo_utils::window().open_with_url_and_target(&url, &target);
        },
        (url.into(), target.into()),
    )
}

#[function_component(ExtLinkIcon)]
pub fn ext_link_icon() -> Html {
    html!(<span class="pf-u-icon-color-light pf-u-ml-sm pf-u-font-size-sm">{ Icon::ExternalLinkAlt }</span>)
}

/// Records the visit in the session activity log and hands back the log,
/// including the new entry. Routes without a descriptor are not recorded.
#[hook]
pub fn use_record_visit(route: AppRoute) -> UseStateHandle<Vec<VisitEntry>> {
    let entries = use_state_eq(Vec::new);

    {
        let entries = entries.clone();
        use_effect_with_deps(
            move |route: &AppRoute| {
                if let Some(descriptor) = route.descriptor() {
                    ActivityLog::record(VisitEntry::new(descriptor));
                }
                entries.set(ActivityLog::load());
            },
            route,
        );
    }

    entries
}
