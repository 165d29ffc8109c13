use rust_decimal::Decimal;

use crate::backend::{fetch_list, Backend, Query};
use crate::models::{Joined, Transaction};
use crate::ui::app::Props;
use crate::ui::html::{placeholder, td, th, tr, Element, Markup};
use crate::ui::state::{load, LoadState, MountToken};
use crate::ui::theme;
use crate::ui::util::{display_reference, format_date, format_money};

const HEADERS: [&str; 8] = [
    "T",
    "Date",
    "Description",
    "In",
    "Out",
    "Contact",
    "Category",
    "Project",
];

/// One transaction as a table row. Pure function of the record.
pub(crate) fn transaction_row(tx: &Transaction) -> Markup {
    tr([
        td(Markup::text(&tx.tx_type)),
        td(format_date(tx.date.as_deref())),
        td(Markup::text(&tx.description)),
        td(format_money(tx.credit)),
        td(format_money(tx.debit)),
        td(display_reference(tx, "Contact")),
        td(display_reference(tx, "Category")),
        td(display_reference(tx, "Project")),
    ])
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TransactionTotals {
    pub(crate) credit: Decimal,
    pub(crate) debit: Decimal,
}

/// Transactions matching the component's props, with credit and debit totals.
#[derive(Debug)]
pub(crate) struct TransactionList {
    props: Props,
    state: LoadState<Vec<Joined<Transaction>>>,
}

impl TransactionList {
    pub(crate) fn new(props: Props) -> Self {
        Self {
            props,
            state: LoadState::Loading,
        }
    }

    pub(crate) fn query(&self) -> Query {
        self.props.iter().collect()
    }

    pub(crate) async fn mount<B: Backend>(&mut self, backend: &B, mut token: MountToken) {
        let query = self.query();
        let fetch = fetch_list(backend, "/json/transaction", &query);
        if let Some(state) = load(&mut token, "transactions", fetch).await {
            self.state = state;
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &LoadState<Vec<Joined<Transaction>>> {
        &self.state
    }

    /// Totals over the rows currently held, folded from scratch on every call.
    pub(crate) fn totals(&self) -> TransactionTotals {
        let rows = self.state.loaded().map(Vec::as_slice).unwrap_or_default();
        rows.iter().fold(TransactionTotals::default(), |acc, row| {
            TransactionTotals {
                credit: acc.credit + row.entity.credit_amount(),
                debit: acc.debit + row.entity.debit_amount(),
            }
        })
    }

    pub(crate) fn render(&self) -> Markup {
        if let LoadState::Failed(reason) = &self.state {
            return super::load_error("transactions", reason);
        }
        let rows = self.state.loaded().map(Vec::as_slice).unwrap_or_default();
        let totals = self.totals();

        let head = Element::new("thead").child(tr(HEADERS.iter().map(|h| th(h))));
        let body = Element::new("tbody").children(rows.iter().map(|r| transaction_row(&r.entity)));
        let foot = Element::new("tfoot").child(tr([
            td(Markup::text(theme::TOTAL_LABEL)).attr("colspan", "3"),
            td(format_money(Some(totals.credit))),
            td(format_money(Some(totals.debit))),
            td(placeholder()).attr("colspan", "3"),
        ]));

        Element::new("table")
            .class(theme::DATATABLE)
            .child(head)
            .child(body)
            .child(foot)
            .build()
    }
}
