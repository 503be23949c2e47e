use crate::pages::AppRoute;
use crate::store::{ActivityLog, VisitEntry};
use crate::utils::use_record_visit;
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[function_component(Activity)]
pub fn activity() -> Html {
    let visits = use_record_visit(AppRoute::Activity);

    let onclear = {
        let visits = visits.clone();
        Callback::from(move |_| {
            ActivityLog::clear();
            visits.set(Vec::new());
        })
    };

    let header = html_nested! {
        <TableHeader>
            <TableColumn label="Page"/>
            <TableColumn label="Path"/>
            <TableColumn label="Time"/>
        </TableHeader>
    };

    let mut rows = (*visits).clone();
    rows.reverse();
    let entries = SharedTableModel::new(rows.into_iter().map(RenderableVisit).collect());

    html!(
        <>
            <PageSection variant={PageSectionVariant::Light}>
                <Content>
                    <Title size={Size::XXXXLarge}>{ "Activity" }</Title>
                    <p>{ "Pages visited during this session, newest first." }</p>
                </Content>
            </PageSection>
            <PageSection variant={PageSectionVariant::Light} fill=true>
                <Toolbar>
                    <ToolbarItem>
                        <Button label="Clear" variant={ButtonVariant::Secondary} onclick={onclear}/>
                    </ToolbarItem>
                </Toolbar>
                <Table<SharedTableModel<RenderableVisit>> {header} {entries} mode={TableMode::Compact}/>
            </PageSection>
        </>
    )
}

#[derive(PartialEq, Clone)]
struct RenderableVisit(VisitEntry);

impl TableRenderer for RenderableVisit {
    fn render(&self, column: ColumnIndex) -> Html {
        match column.index {
            0 => html!(&self.0.title),
            1 => html!(&self.0.path),
            2 => html!(&self.0.timestamp),
            _ => html!(),
        }
    }
}
