pub mod cleaning;
pub mod cli;
pub mod error;
pub mod filtering;
pub mod io;
pub mod passages;
pub mod pipelines;
pub mod records;
pub mod sentences;
