use crate::pages::AppRoute;
use crate::store::Preferences;
use crate::utils::use_record_visit;
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[function_component(Settings)]
pub fn settings() -> Html {
    use_record_visit(AppRoute::Settings);

    let preferences = use_state_eq(Preferences::load);

    let onchange = {
        let preferences = preferences.clone();
        use_callback(
            move |display_name: String, _| {
                preferences.set(Preferences { display_name });
            },
            (),
        )
    };

    let onsave = {
        let preferences = preferences.clone();
        Callback::from(move |_| {
            Preferences::store((*preferences).clone());
        })
    };

    let onreset = {
        let preferences = preferences.clone();
        Callback::from(move |_| {
            Preferences::clear();
            preferences.set(Preferences::default());
        })
    };

    html!(
        <>
            <PageSection variant={PageSectionVariant::Light}>
                <Content>
                    <Title size={Size::XXXXLarge}>{ "Settings" }</Title>
                    <p>{ "Preferences are stored in your browser and never sent anywhere." }</p>
                </Content>
            </PageSection>
            <PageSection variant={PageSectionVariant::Light} fill=true>
                <Form>
                    <FormGroup label="Display name">
                        <TextInput
                            {onchange}
                            value={preferences.display_name.clone()}
                            placeholder="How the dashboard should greet you"
                        />
                    </FormGroup>
                </Form>
                <Toolbar>
                    <ToolbarItem>
                        <Button label="Save" variant={ButtonVariant::Primary} onclick={onsave}/>
                    </ToolbarItem>
                    <ToolbarItem>
                        <Button label="Reset to defaults" variant={ButtonVariant::Secondary} onclick={onreset}/>
                    </ToolbarItem>
                </Toolbar>
            </PageSection>
        </>
    )
}
