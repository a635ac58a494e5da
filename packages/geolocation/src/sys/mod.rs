#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub(crate) use web::{current_position, is_supported, user_agent};

#[cfg(not(target_arch = "wasm32"))]
mod unsupported;

#[cfg(not(target_arch = "wasm32"))]
pub(crate) use unsupported::{current_position, is_supported, user_agent};
