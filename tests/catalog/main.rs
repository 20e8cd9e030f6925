//! Catalog integration tests: repository, index, seeding and stock updates.

mod seeding;
mod stock_updates;
