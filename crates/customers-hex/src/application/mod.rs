pub mod customer_commands;
pub mod customer_queries;
