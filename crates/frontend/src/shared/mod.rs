pub mod api;
pub mod api_utils;
pub mod config;
pub mod list_state;
pub mod params;

#[cfg(target_arch = "wasm32")]
pub mod list_page;
