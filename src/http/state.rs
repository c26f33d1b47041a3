use crate::db::DbPool;
use crate::services::{QuoteService, ReferenceDataStatus};
use std::sync::Arc;
use std::time::SystemTime;

#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<QuoteService>,
    pub db_pool: DbPool,
    pub reference_data: ReferenceDataStatus,
    pub start_time: SystemTime,
}
