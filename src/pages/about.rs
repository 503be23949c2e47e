use crate::pages::AppRoute;
use crate::utils::{use_record_visit, ExtLinkIcon};
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    use_record_visit(AppRoute::Info);

    html!(
        <>
            <PageSection variant={PageSectionVariant::Light}>
                <Content>
                    <Title size={Size::XXXXLarge}>{ "About" }</Title>
                    <p>
                        { "Daytrack is a small personal dashboard. It keeps a log of the pages you visit during the current session and stores your preferences locally, nothing ever leaves the browser." }
                    </p>
                </Content>
            </PageSection>
            <PageSection variant={PageSectionVariant::Light} fill=true>
                <Content>
                    <dl style="width: 100%">
                        <dt>{ "Version" }</dt>
                        <dd>{ env!("CARGO_PKG_VERSION") }</dd>
                        <dt>{ "License" }</dt>
                        <dd>{ env!("CARGO_PKG_LICENSE") }</dd>
                        <dt>{ "Source" }</dt>
                        <dd>
                            <a href="https://github.com/daytrack-io/daytrack" target="_blank">{ "github.com/daytrack-io/daytrack" }</a> <ExtLinkIcon/>
                        </dd>
                    </dl>
                </Content>
            </PageSection>
        </>
    )
}
