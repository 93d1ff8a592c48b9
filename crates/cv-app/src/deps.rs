//! # Session Dependencies / 会话依赖
//!
//! Parameter grouping for session construction. Not a builder: no defaults,
//! no hidden logic, every port is required.

use std::sync::Arc;
use cv_core::ports::*;

/// Ports through which the session reaches the host collaborator.
/// 会话访问宿主协作方所需的端口。
#[derive(Clone)]
pub struct SessionDeps {
    pub history: Arc<dyn HistoryPort>,
    pub clipboard: Arc<dyn ClipboardWriterPort>,
    pub entry_admin: Arc<dyn EntryAdminPort>,
    pub confirm: Arc<dyn ConfirmPort>,
    pub json: Arc<dyn JsonProcessorPort>,
    pub seeder: Arc<dyn SampleSeederPort>,
    pub clock: Arc<dyn ClockPort>,
}
