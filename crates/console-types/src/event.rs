use serde::{Deserialize, Serialize};

use crate::analytics::Dashboard;
use crate::message::Message;
use crate::session::DispatchState;

/// Events emitted by the session core.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConsoleEvent {
    /// The dispatcher entered or left the busy state
    StatusChanged(DispatchState),

    /// A message was appended to the timeline
    MessageAppended(Message),

    /// A dataset was written; carries the dashboard recomputed from the store
    DatasetUpdated {
        key: String,
        preview: String,
        dashboard: Dashboard,
    },
}
