pub mod catalog;
pub mod expenses;
pub mod invoices;
pub mod loans;
pub mod salaries;
