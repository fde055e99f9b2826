use std::sync::Arc;

use staffing_core::application::StaffingService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: StaffingService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: StaffingService) -> Self {
        Self { args, service }
    }
}
