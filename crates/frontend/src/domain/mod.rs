pub mod namespaces;
pub mod repositories;
