use anyhow::Result;
use async_trait::async_trait;

/// Asks the host to push a set of sample entries as live captures.
#[async_trait]
pub trait SampleSeederPort: Send + Sync {
    async fn seed_samples(&self) -> Result<()>;
}
