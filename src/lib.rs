pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::error::Result;
use crate::services::{board_service::BoardService, job_store::JobStore};

pub struct AppState {
    pub config: Config,
    pub board: BoardService,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let store = if config.seed_demo {
            database::seed::demo_store()?
        } else {
            JobStore::new()
        };
        let board = BoardService::new(store, &config);

        Ok(Self { config, board })
    }
}
