//! Business logic layer for the expense tracker

pub mod expense;

pub use expense::ExpenseService;
