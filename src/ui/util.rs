use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{scalar_text, Joins};
use crate::ui::html::{link, placeholder, Element, Markup};

const DISPLAY_DATE: &str = "%b %-d, %Y";

/// Fixed two-decimal rendering of a non-zero amount; `None` when there is nothing to show.
/// e.g. `Some(1234.5)` → `"1234.50"`, `Some(0)` → `None`
pub(crate) fn money_text(amount: Option<Decimal>) -> Option<String> {
    amount.filter(|a| !a.is_zero()).map(|a| format!("{a:.2}"))
}

/// Money cell content. Missing and zero amounts render as a placeholder.
pub(crate) fn format_money(amount: Option<Decimal>) -> Markup {
    match money_text(amount) {
        Some(s) => Element::new("span").text(&s).build(),
        None => placeholder(),
    }
}

/// Parse the calendar date out of whatever the backend sent: an RFC 3339 timestamp,
/// a naive date-time, or a bare `YYYY-MM-DD`. The date is taken as written; no
/// timezone conversion is applied.
pub(crate) fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// `"Mon DD, YYYY"` for a parseable date; `None` for missing, empty, or garbage input.
pub(crate) fn date_text(value: Option<&str>) -> Option<String> {
    let value = value.filter(|v| !v.is_empty())?;
    match parse_calendar_date(value) {
        Some(date) => Some(date.format(DISPLAY_DATE).to_string()),
        None => {
            tracing::debug!(value, "unparseable date rendered as placeholder");
            None
        }
    }
}

pub(crate) fn format_date(value: Option<&str>) -> Markup {
    match date_text(value) {
        Some(s) => Element::new("span").text(&s).build(),
        None => placeholder(),
    }
}

/// Link to the sub-record joined onto `record` under `reference`, labelled with its
/// `Name` and addressed by its `Ident`.
pub(crate) fn display_reference<R: Joins + ?Sized>(record: &R, reference: &str) -> Markup {
    display_reference_with(record, reference, "Name", "Ident")
}

/// Like [`display_reference`] with explicit label and identifier fields. The link
/// points at `/<reference, lowercased>/<id>`; a missing sub-record or identifier
/// renders a placeholder.
pub(crate) fn display_reference_with<R: Joins + ?Sized>(
    record: &R,
    reference: &str,
    label: &str,
    id: &str,
) -> Markup {
    let Some(sub) = record.joined(reference) else {
        return placeholder();
    };
    let Some(id) = sub.get(id).and_then(scalar_text) else {
        return placeholder();
    };
    let label = sub.get(label).and_then(scalar_text).unwrap_or_default();
    let href = format!(
        "/{}/{}",
        reference.to_lowercase(),
        urlencoding::encode(&id)
    );
    link(&href, &label)
}
