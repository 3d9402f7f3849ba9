pub mod render;
pub mod routes;
