#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use super::*;

// ── Ident ─────────────────────────────────────────────────────

#[test]
fn test_ident_number_or_text() {
    let n: Ident = serde_json::from_value(json!(42)).unwrap();
    let s: Ident = serde_json::from_value(json!("abc-1")).unwrap();
    assert_eq!(n, Ident::Number(42));
    assert_eq!(s, Ident::Text("abc-1".into()));
    assert_eq!(n.to_string(), "42");
    assert_eq!(s.to_string(), "abc-1");
}

#[test]
fn test_scalar_text() {
    assert_eq!(scalar_text(&json!("x")), Some("x".into()));
    assert_eq!(scalar_text(&json!(7)), Some("7".into()));
    assert_eq!(scalar_text(&json!(true)), Some("true".into()));
    assert_eq!(scalar_text(&json!(null)), None);
    assert_eq!(scalar_text(&json!({"a": 1})), None);
}

// ── Account ───────────────────────────────────────────────────

#[test]
fn test_account_from_backend_json() {
    let account: Account = serde_json::from_value(json!({
        "Ident": 3,
        "AccName": "Chequing",
        "AccNr": "001-123",
        "Description": "Everyday",
        "Currency": "CAD",
        "OpeningDate": "2019-01-01T00:00:00Z",
        "OpeningBalance": 100.5,
        "CurrentBalance": 1234.56,
        "InstIdent": 9,
        "InstName": "First Bank"
    }))
    .unwrap();
    assert_eq!(account.ident, Some(Ident::Number(3)));
    assert_eq!(account.name, "Chequing");
    assert_eq!(account.opening_balance, Some(dec!(100.5)));
    assert_eq!(account.balance(), dec!(1234.56));
    assert_eq!(account.href().as_deref(), Some("/account/3"));
}

#[test]
fn test_account_missing_fields_default() {
    let account: Account = serde_json::from_value(json!({"Ident": 1})).unwrap();
    assert!(account.name.is_empty());
    assert!(account.current_balance.is_none());
    assert_eq!(account.balance(), Decimal::ZERO);
    assert!(account.opening_date.is_none());
}

#[test]
fn test_account_institution_prefers_joined_parent() {
    let account: Account =
        serde_json::from_value(json!({"InstIdent": 1, "InstName": "Stale"})).unwrap();
    let joined: Institution = serde_json::from_value(json!({"Ident": 2, "Name": "Fresh"})).unwrap();
    let inst = account.institution(Some(&joined)).unwrap();
    assert_eq!(inst.name, "Fresh");
    assert_eq!(inst.href().as_deref(), Some("/institution/2"));
}

#[test]
fn test_account_institution_falls_back_to_denormalised() {
    let account: Account =
        serde_json::from_value(json!({"InstIdent": 1, "InstName": "First Bank"})).unwrap();
    let inst = account.institution(None).unwrap();
    assert_eq!(inst.name, "First Bank");
    assert_eq!(inst.href().as_deref(), Some("/institution/1"));
}

#[test]
fn test_account_without_any_institution() {
    let account = Account::default();
    assert!(account.institution(None).is_none());
    assert!(account.institution(Some(&Institution::default())).is_none());
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_transaction_amounts_default_to_zero() {
    let tx: Transaction = serde_json::from_value(json!({"Ident": 1, "Credit": 100})).unwrap();
    assert_eq!(tx.credit_amount(), dec!(100));
    assert_eq!(tx.debit_amount(), Decimal::ZERO);
}

#[test]
fn test_transaction_amount_as_string() {
    let tx: Transaction = serde_json::from_value(json!({"Debit": "40.25"})).unwrap();
    assert_eq!(tx.debit_amount(), dec!(40.25));
}

#[test]
fn test_transaction_joins() {
    let tx: Transaction = serde_json::from_value(json!({
        "Contact": {"Ident": 5, "Name": "Grocer"},
        "Category": null,
        "Project": "not-an-object"
    }))
    .unwrap();
    assert_eq!(
        tx.joined("Contact").and_then(|c| c.get("Name")),
        Some(&json!("Grocer"))
    );
    assert!(tx.joined("Category").is_none());
    assert!(tx.joined("Project").is_none());
    assert!(tx.joined("Vendor").is_none());
}

// ── Joined ────────────────────────────────────────────────────

#[test]
fn test_joined_pair() {
    let rows: Vec<Joined<Account, Institution>> = serde_json::from_value(json!([
        [{"Ident": 1, "AccName": "A"}, {"Ident": 10, "Name": "Bank"}],
        [{"Ident": 2, "AccName": "B"}, null]
    ]))
    .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].entity.name, "A");
    assert_eq!(rows[0].parent.as_ref().unwrap().name, "Bank");
    assert!(rows[1].parent.is_none());
}

#[test]
fn test_joined_single() {
    let rows: Vec<Joined<Transaction>> = serde_json::from_value(json!([
        [{"Ident": 1, "Credit": 100, "Debit": 0}],
        [{"Ident": 2, "Credit": 0, "Debit": 40}]
    ]))
    .unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].parent.is_none());
    assert_eq!(rows[1].entity.debit_amount(), dec!(40));
}

#[test]
fn test_joined_rejects_wrong_arity() {
    let empty: Result<Vec<Joined<Transaction>>, _> = serde_json::from_value(json!([[]]));
    assert!(empty.is_err());
    let triple: Result<Vec<Joined<Transaction>>, _> =
        serde_json::from_value(json!([[{}, {}, {}]]));
    assert!(triple.is_err());
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_display() {
    let cat: Category = serde_json::from_value(json!({"Name": "Groceries"})).unwrap();
    assert_eq!(format!("{cat}"), "Groceries");
}
