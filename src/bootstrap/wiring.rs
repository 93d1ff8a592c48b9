//! # Dependency Injection / 依赖注入模块
//!
//! The only place that depends on `cv-infra` and `cv-app` together. It
//! assembles; it does not decide.
//!
//! 唯一同时依赖 `cv-infra` 与 `cv-app` 的地方，只负责组装。

use std::sync::Arc;

use cv_app::{SessionController, SessionDeps, SessionHandle};
use cv_core::ports::ClockPort;
use cv_core::AppConfig;
use cv_infra::{AutoConfirm, InMemoryHost, MemoryClipboard, SerdeJsonProcessor, SystemClock};
use tokio::task::JoinHandle;
use tracing::info;

/// A running session plus the host it talks to.
pub struct AppRuntime {
    pub handle: SessionHandle,
    pub host: Arc<InMemoryHost>,
    pub clipboard: Arc<MemoryClipboard>,
    pub task: JoinHandle<()>,
}

/// Build the in-memory host and spawn the session. Must run inside a tokio runtime.
pub fn wire(config: &AppConfig) -> AppRuntime {
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let (host, host_events) = InMemoryHost::new(clock.clone());
    let host = Arc::new(host);
    let clipboard = Arc::new(MemoryClipboard::new());

    let deps = SessionDeps {
        history: host.clone(),
        clipboard: clipboard.clone(),
        entry_admin: host.clone(),
        confirm: Arc::new(AutoConfirm::new(true)),
        json: Arc::new(SerdeJsonProcessor::new()),
        seeder: host.clone(),
        clock,
    };

    let (handle, task) = SessionController::spawn(deps, config, host_events);
    info!("session wired to in-memory host");

    AppRuntime {
        handle,
        host,
        clipboard,
        task,
    }
}
