use crate::pages::AppRoute;
use crate::store::Preferences;
use crate::utils::use_record_visit;
use patternfly_yew::prelude::*;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    use_record_visit(AppRoute::Index);

    let navigator = use_navigator();

    let primary = Callback::from(move |_| {
        if let Some(navigator) = &navigator {
            navigator.push(&AppRoute::Activity);
        }
    })
    .into_action("Activity");

    let secondaries = vec![
        Callback::from(|_| {
            let _ = gloo_utils::window()
                .open_with_url_and_target("https://github.com/daytrack-io/daytrack", "_blank");
        })
        .into_action("GitHub"),
        Callback::from(|_| {
            let _ = gloo_utils::window().open_with_url_and_target(
                "https://raw.githubusercontent.com/daytrack-io/daytrack/main/LICENSE",
                "_blank",
            );
        })
        .into_action("License"),
    ];

    let title = {
        let preferences = Preferences::load();
        if preferences.display_name.is_empty() {
            "Welcome to Daytrack".to_string()
        } else {
            format!("Welcome back, {}", preferences.display_name)
        }
    };

    html!(
        <>
            <PageSection variant={PageSectionVariant::Light} fill=true>
                <Bullseye>
                    <EmptyState
                        full_height=true
                        {title}
                        icon={Icon::Home}
                        {primary}
                        {secondaries}
                    >
                        { "Keep an eye on your day. The sidebar takes you to this session's activity and to your settings, everything stays in your browser." }
                    </EmptyState>
                </Bullseye>
            </PageSection>
        </>
    )
}
