pub(crate) mod accounts;
pub(crate) mod categories;
pub(crate) mod transactions;

use crate::ui::html::{td, tr, Element, Markup};
use crate::ui::theme;

/// A `label | value` row of a summary table.
fn field_row(label: &str, value: Markup) -> Markup {
    tr([td(Markup::text(label)), td(value)])
}

/// Shown in place of a component whose fetch failed.
fn load_error(what: &str, reason: &str) -> Markup {
    Element::new("div")
        .class(theme::LOAD_ERROR)
        .attr("title", reason)
        .text(&format!("Could not load {what}."))
        .build()
}
