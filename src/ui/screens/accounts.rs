use rust_decimal::Decimal;

use crate::backend::{fetch_list, fetch_one, Backend, Query};
use crate::models::{Account, Institution, Joined};
use crate::ui::app::Props;
use crate::ui::html::{link, placeholder, td, th, tr, Element, Markup};
use crate::ui::state::{load, LoadState, MountToken};
use crate::ui::theme;
use crate::ui::util::{format_date, format_money};

use super::transactions::TransactionList;

const HEADERS: [&str; 7] = [
    "Name",
    "Institution",
    "Number",
    "Description",
    "Current Balance",
    "Opening Date",
    "Opening Balance",
];

/// One account as a table row, linked to its own page and to its institution.
pub(crate) fn account_row(account: &Account, institution: Option<&Institution>) -> Markup {
    let name = match account.href() {
        Some(href) => link(&href, &account.name),
        None => Markup::text(&account.name),
    };
    let inst = match account.institution(institution) {
        Some(inst) => match inst.href() {
            Some(href) => link(&href, &inst.name),
            None => placeholder(),
        },
        None => placeholder(),
    };
    tr([
        td(name),
        td(inst),
        td(Markup::text(&account.number)),
        td(Markup::text(&account.description)),
        td(format_money(account.current_balance)),
        td(format_date(account.opening_date.as_deref())),
        td(format_money(account.opening_balance)),
    ])
}

/// All accounts matching the props, each joined with its institution.
#[derive(Debug)]
pub(crate) struct AccountsList {
    props: Props,
    state: LoadState<Vec<Joined<Account, Institution>>>,
}

impl AccountsList {
    pub(crate) fn new(props: Props) -> Self {
        Self {
            props,
            state: LoadState::Loading,
        }
    }

    /// `joinparent=institution` always leads; the props follow in order.
    pub(crate) fn query(&self) -> Query {
        let mut query = Query::new().with("joinparent", "institution");
        for (k, v) in self.props.iter().filter(|(k, _)| *k != "joinparent") {
            query.push(k, v);
        }
        query
    }

    pub(crate) async fn mount<B: Backend>(&mut self, backend: &B, mut token: MountToken) {
        let query = self.query();
        let fetch = fetch_list(backend, "/json/account", &query);
        if let Some(state) = load(&mut token, "accounts", fetch).await {
            self.state = state;
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &LoadState<Vec<Joined<Account, Institution>>> {
        &self.state
    }

    pub(crate) fn total_balance(&self) -> Decimal {
        let rows = self.state.loaded().map(Vec::as_slice).unwrap_or_default();
        rows.iter().map(|r| r.entity.balance()).sum()
    }

    pub(crate) fn render(&self) -> Markup {
        if let LoadState::Failed(reason) = &self.state {
            return super::load_error("accounts", reason);
        }
        let rows = self.state.loaded().map(Vec::as_slice).unwrap_or_default();

        let head = Element::new("thead").child(tr(HEADERS.iter().map(|h| th(h))));
        let body = Element::new("tbody")
            .children(rows.iter().map(|r| account_row(&r.entity, r.parent.as_ref())));
        let foot = Element::new("tfoot").child(tr([
            td(Markup::text(theme::TOTAL_LABEL)).attr("colspan", "4"),
            td(format_money(Some(self.total_balance()))),
            td(placeholder()).attr("colspan", "2"),
        ]));

        Element::new("table")
            .class(theme::DATATABLE)
            .child(head)
            .child(body)
            .child(foot)
            .build()
    }
}

/// Summary of a single account.
#[derive(Debug)]
pub(crate) struct AccountView {
    id: i64,
    state: LoadState<Account>,
}

impl AccountView {
    pub(crate) fn new(id: i64) -> Self {
        Self {
            id,
            state: LoadState::Loading,
        }
    }

    pub(crate) async fn mount<B: Backend>(&mut self, backend: &B, mut token: MountToken) {
        let path = format!("/json/account/{}", self.id);
        if let Some(state) = load(&mut token, "account", fetch_one(backend, &path)).await {
            self.state = state;
        }
    }

    pub(crate) fn state(&self) -> &LoadState<Account> {
        &self.state
    }

    pub(crate) fn render(&self) -> Markup {
        let blank = Account::default();
        let account = match &self.state {
            LoadState::Failed(reason) => return super::load_error("account", reason),
            LoadState::Loaded(account) => account,
            LoadState::Loading => &blank,
        };
        let fields = Element::new("tbody").children([
            super::field_row("Account #", Markup::text(&account.number)),
            super::field_row("Currency", Markup::text(&account.currency)),
            super::field_row("Opening Date", format_date(account.opening_date.as_deref())),
            super::field_row("Opening Balance", format_money(account.opening_balance)),
            super::field_row("Current Balance", format_money(account.current_balance)),
        ]);
        Element::new("div")
            .child(Element::new("h1").text(&account.name))
            .child(Element::new("div").text(&account.description))
            .child(Element::new("table").child(fields))
            .build()
    }
}

/// The account page: summary, its transactions, and the statement upload form.
#[derive(Debug)]
pub(crate) struct AccountBlock {
    id: i64,
    view: AccountView,
    transactions: TransactionList,
}

impl AccountBlock {
    pub(crate) fn new(id: i64) -> Self {
        Self {
            id,
            view: AccountView::new(id),
            transactions: TransactionList::new(Props::new().with("accountid", &id.to_string())),
        }
    }

    pub(crate) fn upload_action(&self) -> String {
        format!("/account/upload/{}", self.id)
    }

    pub(crate) async fn mount<B: Backend>(&mut self, backend: &B, token: MountToken) {
        tokio::join!(
            self.view.mount(backend, token.clone()),
            self.transactions.mount(backend, token),
        );
    }

    pub(crate) fn title(&self) -> String {
        match self.view.state() {
            LoadState::Loaded(account) if !account.name.is_empty() => account.name.clone(),
            _ => format!("Account {}", self.id),
        }
    }

    pub(crate) fn render(&self) -> Markup {
        let form = Element::new("form")
            .attr("enctype", "multipart/form-data")
            .attr("action", self.upload_action())
            .attr("method", "post")
            .child(Element::new("input").attr("type", "file").attr("name", "schema"))
            .child(Element::new("input").attr("type", "submit").attr("value", "upload"));
        Element::new("div")
            .child(self.view.render())
            .child(Element::new("h2").text("Transactions"))
            .child(self.transactions.render())
            .child(Element::new("h2").text("Import Transactions"))
            .child(form)
            .build()
    }
}

/// The accounts index page.
#[derive(Debug)]
pub(crate) struct AccountsListBlock {
    list: AccountsList,
}

impl AccountsListBlock {
    pub(crate) fn new(props: Props) -> Self {
        Self {
            list: AccountsList::new(props),
        }
    }

    pub(crate) async fn mount<B: Backend>(&mut self, backend: &B, token: MountToken) {
        self.list.mount(backend, token).await;
    }

    pub(crate) fn render(&self) -> Markup {
        Element::new("div")
            .child(Element::new("h2").text("Accounts"))
            .child(self.list.render())
            .build()
    }
}
