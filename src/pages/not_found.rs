use crate::pages::AppRoute;
use patternfly_yew::prelude::*;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator();

    let primary = Callback::from(move |_| {
        if let Some(navigator) = &navigator {
            navigator.push(&AppRoute::Index);
        }
    })
    .into_action("Back home");

    html!(
        <PageSection variant={PageSectionVariant::Light} fill=true>
            <Bullseye>
                <EmptyState
                    full_height=true
                    title="Page not found"
                    icon={Icon::QuestionCircle}
                    {primary}
                >
                    { "Nothing is registered at this location." }
                </EmptyState>
            </Bullseye>
        </PageSection>
    )
}
