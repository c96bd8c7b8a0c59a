/// Shopping cart operations and pricing
pub mod cart;

/// Category and product browsing, plus catalog seeding
pub mod catalog;

/// Checkout orchestration against the payment gateway
pub mod checkout;

/// Order ledger - reservation, lookup, and payment confirmation
pub mod order;

/// Product review submission and listing
pub mod review;
