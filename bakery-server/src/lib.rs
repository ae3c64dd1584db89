//! Bakery Server - storefront backend for a custom-cake bakery
//!
//! # Overview
//!
//! - **Catalog** (`api::cakes`, `api::categories`, `api::addons`): CRUD over
//!   the cake, category and add-on collections
//! - **Orders** (`orders`): server-side pricing, the worker state machine
//!   and customer cancellation
//! - **Storage** (`db`): embedded redb file holding each collection as one
//!   JSON document
//! - **HTTP API** (`api`): JSON over axum
//!
//! # Module Structure
//!
//! ```text
//! bakery-server/src/
//! ├── core/          # config, state, server, errors
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # collection store, seed data, repositories
//! ├── orders/        # pricing, transitions, actions, manager
//! └── utils/         # logging, validation, error mapping
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerError, ServerState, build_app};
pub use db::{CollectionStore, StoreError};
pub use orders::{OrderError, OrdersManager};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Load `.env`, read the config, create the work dir and start logging
pub fn setup_environment() -> core::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();

    std::fs::create_dir_all(&config.work_dir)?;
    // File logging only when a directory is configured; stdout otherwise
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)?;
    }

    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____        __
   / __ )____ _/ /_____  _______  __
  / __  / __ `/ //_/ _ \/ ___/ / / /
 / /_/ / /_/ / ,< /  __/ /  / /_/ /
/_____/\__,_/_/|_|\___/_/   \__, /
                           /____/
    "#
    );
}
