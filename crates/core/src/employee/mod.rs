//! Employee lookup

pub mod ports;

pub use ports::EmployeeDirectory;
