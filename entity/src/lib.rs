//! sea-orm entities for the tables the tracker reads and writes.

pub mod department;
pub mod employee;
pub mod role;
