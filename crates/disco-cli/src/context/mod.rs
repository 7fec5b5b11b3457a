mod app_context;
mod root_warnings;

pub use app_context::AppContext;
pub use root_warnings::warn_missing_roots;
