pub mod ast;
pub mod compile;
pub mod loader;
pub mod routes;
