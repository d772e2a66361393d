use std::sync::mpsc;
use std::time::Duration;

use chrono::Local;

use crate::engine::engine::Engine;
use crate::engine::oracle::Oracle;
use crate::engine::protocol::{EngineCommand, EngineResponse, Snapshot};
use crate::engine::storage::Store;
use crate::model::notification::Notification;
use crate::model::quest::Quest;
use crate::ui::settings::UiSettings;
use crate::ui::{chat_panel, notification, penalty_screen, quest_panel, settings_io, status_panel, wish_modal};

/* =========================
   UI State
   ========================= */

pub struct QuestEditState {
    pub draft: Quest,
}

pub struct UiState {
    pub snapshot: Snapshot,
    pub chat_input: String,
    pub wish_input: String,
    pub wish_open: bool,
    pub is_generating: bool,
    pub is_wishing: bool,
    pub is_chatting: bool,
    pub should_auto_scroll: bool,
    pub notification: Option<Notification>,
    pub editing: Option<QuestEditState>,
    pub settings: UiSettings,
    pub settings_dirty: bool,
}

/* =========================
   App
   ========================= */

pub struct SystemApp {
    pub ui: UiState,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl SystemApp {
    pub fn new() -> Self {
        let settings = settings_io::load_settings();

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        let llm = settings.llm.clone();
        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, Store::new(), Oracle::new(llm));
            engine.run();
        });

        Self {
            ui: UiState {
                snapshot: Snapshot::default(),
                chat_input: String::new(),
                wish_input: String::new(),
                wish_open: false,
                is_generating: false,
                is_wishing: false,
                is_chatting: false,
                should_auto_scroll: true,
                notification: None,
                editing: None,
                settings,
                settings_dirty: false,
            },
            cmd_tx,
            resp_rx,
        }
    }

    pub fn send_command(&self, cmd: EngineCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl Default for SystemApp {
    fn default() -> Self {
        Self::new()
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for SystemApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.ui.settings.ui_scale);

        while let Ok(resp) = self.resp_rx.try_recv() {
            match resp {
                EngineResponse::Snapshot(snapshot) => {
                    self.ui.snapshot = snapshot;
                    self.ui.should_auto_scroll = true;
                }
                EngineResponse::Notify(n) => self.ui.notification = Some(n),
                EngineResponse::QuestGenStarted => self.ui.is_generating = true,
                EngineResponse::QuestGenFinished => self.ui.is_generating = false,
                EngineResponse::WishResolved => {
                    self.ui.is_wishing = false;
                    self.ui.wish_open = false;
                }
                EngineResponse::ChatReplied => self.ui.is_chatting = false,
            }
        }

        if self.ui.settings_dirty {
            settings_io::save_settings(&self.ui.settings);
            self.ui.settings_dirty = false;
        }

        let now_ms = Local::now().timestamp_millis();
        if self.ui.snapshot.player.penalty_locked(now_ms) {
            penalty_screen::draw(ctx, self.ui.snapshot.player.penalty_expires, now_ms);
            ctx.request_repaint_after(Duration::from_secs(1));
            return;
        }

        status_panel::draw(ctx, self);
        chat_panel::draw(ctx, self);
        quest_panel::draw(ctx, self);

        wish_modal::draw(ctx, self);
        notification::draw(ctx, self);

        self.ui.should_auto_scroll = false;

        // Engine responses can arrive without user input; poll for them.
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
