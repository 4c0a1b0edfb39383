//! Mock repositories used by handler tests. The mocks mirror the shape of
//! the repository functions so handler logic can be exercised without a
//! live database.

pub mod repositories;
