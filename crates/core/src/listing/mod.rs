//! Sorted list views over records.

pub mod sort;

pub use sort::{
    ClientSortKey, ExpenseSortKey, InvoiceSortKey, SortConfig, SortDirection, sorted_clients,
    sorted_expenses, sorted_invoices,
};
