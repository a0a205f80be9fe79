pub mod app;
pub mod context;
pub mod vm;
pub mod views;

#[cfg(test)]
mod test_support;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
