use crate::{
    pages::{self, AppRoute, RouteDescriptor, ROUTES},
    utils::{use_open, ExtLinkIcon},
};
use patternfly_yew::prelude::*;
use yew::prelude::*;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::prelude::{Switch as RouterSwitch, *};
use yew_router::Router;

#[function_component(Console)]
pub fn console() -> Html {
    // one history for the whole page session, never synced to the address bar
    let history = use_memo(|_| AnyHistory::from(MemoryHistory::new()), ());

    let logo = html!(
        <Brand src="images/logo.svg" alt="Daytrack Logo" />
    );

    let sidebar = html_nested!(
        <PageSidebar>
            <Nav>
                <NavList>
                    { for ROUTES.iter().map(|descriptor| html!(<NavRouteItem {descriptor} />)) }
                    <NavItem to="https://daytrack-io.github.io/daytrack/" target="_blank">{ "Documentation" } <ExtLinkIcon/> </NavItem>
                </NavList>
            </Nav>
        </PageSidebar>
    );

    let callback_help = use_open("https://daytrack-io.github.io/daytrack/", "_blank");
    let callback_github = use_open("https://github.com/daytrack-io/daytrack", "_blank");

    let tools = html!(
        <Toolbar>
            <ToolbarItem>
                <Button icon={Icon::QuestionCircle} onclick={callback_help}/>
            </ToolbarItem>
            <ToolbarItem>
                <Button icon={Icon::Github} onclick={callback_github}/>
            </ToolbarItem>
        </Toolbar>
    );

    html!(
        <Router history={(*history).clone()}>
            <Page {logo} {sidebar} {tools}>
                <RouterSwitch<AppRoute> render={render}/>

                <PageSection variant={PageSectionVariant::Darker} fill={PageSectionFill::NoFill}>
                    {"Copyright © 2024 "} <a href="https://github.com/daytrack-io" target="_blank"> {"The Daytrack Project"} </a> {"."}
                </PageSection>
            </Page>
        </Router>
    )
}

fn render(route: AppRoute) -> Html {
    log::info!("Route: {route:?}");
    match route {
        AppRoute::Index => html!(<pages::Dashboard/>),
        AppRoute::Info => html!(<pages::About/>),
        AppRoute::Activity => html!(<pages::Activity/>),
        AppRoute::Settings => html!(<pages::Settings/>),
        AppRoute::NotFound => html!(<pages::NotFound/>),
    }
}

#[derive(Clone, PartialEq, Properties)]
struct NavRouteItemProps {
    pub descriptor: &'static RouteDescriptor,
}

/// Sidebar entry for a route table item: highlights when current, navigates
/// through the router so the address bar stays untouched.
#[function_component(NavRouteItem)]
fn nav_route_item(props: &NavRouteItemProps) -> Html {
    let navigator = use_navigator();
    let current = use_route::<AppRoute>();

    let active = current.as_ref() == Some(&props.descriptor.route);

    let onclick = {
        let route = props.descriptor.route.clone();
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    let mut class = classes!("pf-c-nav__link");
    if active {
        class.push("pf-m-current");
    }

    html!(
        <li class="pf-c-nav__item">
            <a {class} {onclick}>
                { props.descriptor.icon } {" "} { props.descriptor.title }
            </a>
        </li>
    )
}
