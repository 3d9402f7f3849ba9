pub mod app_config;
pub mod errors;
pub mod openai_config;
pub mod render_config;
pub mod secrets;
pub mod server_config;
pub mod tunnel_config;
