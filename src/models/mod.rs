mod account;
mod category;
mod institution;
mod joined;
mod transaction;

pub use account::Account;
pub use category::Category;
pub use institution::Institution;
pub use joined::{scalar_text, Ident, Joined, Joins};
pub use transaction::Transaction;

#[cfg(test)]
mod tests;
