pub mod app;
pub mod board;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod roster;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{load_catalog, resolve_seed_path};
