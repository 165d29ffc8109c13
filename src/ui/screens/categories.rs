use crate::backend::{fetch_one, Backend};
use crate::models::Category;
use crate::ui::app::Props;
use crate::ui::html::{Element, Markup};
use crate::ui::state::{load, LoadState, MountToken};
use crate::ui::util::format_money;

use super::transactions::TransactionList;

#[derive(Debug)]
pub(crate) struct CategoryView {
    id: i64,
    state: LoadState<Category>,
}

impl CategoryView {
    pub(crate) fn new(id: i64) -> Self {
        Self {
            id,
            state: LoadState::Loading,
        }
    }

    pub(crate) async fn mount<B: Backend>(&mut self, backend: &B, mut token: MountToken) {
        let path = format!("/json/category/{}", self.id);
        if let Some(state) = load(&mut token, "category", fetch_one(backend, &path)).await {
            self.state = state;
        }
    }

    pub(crate) fn state(&self) -> &LoadState<Category> {
        &self.state
    }

    pub(crate) fn render(&self) -> Markup {
        let blank = Category::default();
        let category = match &self.state {
            LoadState::Failed(reason) => return super::load_error("category", reason),
            LoadState::Loaded(category) => category,
            LoadState::Loading => &blank,
        };
        let fields = Element::new("tbody").child(super::field_row(
            "Current Balance",
            format_money(category.current_balance),
        ));
        Element::new("div")
            .child(Element::new("h1").text(&category.name))
            .child(Element::new("div").text(&category.description))
            .child(Element::new("table").child(fields))
            .build()
    }
}

/// The category page: summary and the category's transactions.
#[derive(Debug)]
pub(crate) struct CategoryBlock {
    id: i64,
    view: CategoryView,
    transactions: TransactionList,
}

impl CategoryBlock {
    pub(crate) fn new(id: i64) -> Self {
        Self {
            id,
            view: CategoryView::new(id),
            transactions: TransactionList::new(Props::new().with("categoryid", &id.to_string())),
        }
    }

    pub(crate) async fn mount<B: Backend>(&mut self, backend: &B, token: MountToken) {
        tokio::join!(
            self.view.mount(backend, token.clone()),
            self.transactions.mount(backend, token),
        );
    }

    pub(crate) fn title(&self) -> String {
        match self.view.state() {
            LoadState::Loaded(category) if !category.name.is_empty() => category.to_string(),
            _ => format!("Category {}", self.id),
        }
    }

    pub(crate) fn render(&self) -> Markup {
        Element::new("div")
            .child(self.view.render())
            .child(Element::new("h2").text("Transactions"))
            .child(self.transactions.render())
            .build()
    }
}
