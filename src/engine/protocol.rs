use uuid::Uuid;

use crate::model::message::ChatMessage;
use crate::model::notification::Notification;
use crate::model::player::PlayerProfile;
use crate::model::quest::Quest;

pub enum EngineCommand {
    CompleteQuest(Uuid),
    ToggleSubtask { quest_id: Uuid, subtask_id: Uuid },
    AddQuest,
    DeleteQuest(Uuid),
    EditQuest(Box<Quest>),
    RefreshQuests,
    MakeWish(String),
    SendChat(String),
}

/// Engine to UI. A `Snapshot` follows every mutation; the marker variants
/// let the UI clear its in-flight flags.
pub enum EngineResponse {
    Snapshot(Snapshot),
    Notify(Notification),
    QuestGenStarted,
    QuestGenFinished,
    WishResolved,
    ChatReplied,
}

/// Full copy of the three documents as the engine sees them.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub player: PlayerProfile,
    pub quests: Vec<Quest>,
    pub chat: Vec<ChatMessage>,
}
