//! Synchronization job status.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Execution status of a data source synchronization job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DataSourceSyncJobStatus {
    /// The job failed.
    Failed,

    /// The job completed.
    Succeeded,

    /// The job is crawling the repository.
    Syncing,

    /// The job completed with some documents failing.
    Incomplete,

    /// A stop was requested and is in progress.
    Stopping,

    /// The job was stopped before completion.
    Aborted,

    /// Crawling finished; documents are being indexed.
    SyncingIndexing,
}

super::impl_wire_enum!(DataSourceSyncJobStatus);

impl DataSourceSyncJobStatus {
    /// Returns whether the job has reached a final state.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Failed | Self::Succeeded | Self::Incomplete | Self::Aborted
        )
    }

    /// Returns whether the job is still running.
    #[inline]
    pub fn is_running(self) -> bool {
        !self.is_terminal()
    }
}
