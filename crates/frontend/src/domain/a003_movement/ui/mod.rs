pub mod checkout;
pub mod list;
pub mod return_item;
