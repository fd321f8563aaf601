//! Glue code tying the data stores, view-model, and terminal UI together.

use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use tokio::{
    sync::mpsc,
    time::{self, Duration},
};

use wyrmdex_data::{ArmorIndex, QuestKind, Session};
use wyrmdex_ui_core::{SetBuilderModel, SlotUpdate, spawn_value};

use crate::config::TuiConfig;
use crate::content;
use crate::input::{self, KeyAction};
use crate::prefs::{PrefStore, Prefs, Tab};
use crate::presentation::theme::WyrmdexTheme;
use crate::presentation::ui::{self, FrameContext};
use crate::presentation::terminal::{self, Tui};
use crate::screens::builder::BuilderScreen;
use crate::screens::navigation;
use crate::screens::outcome::{ReplyPayload, RequestKind, ScreenReply, ScreenRequest};
use crate::state::{AppMode, ChildScreen, PickEntry};

pub struct App {
    config: TuiConfig,
    theme: WyrmdexTheme,
    catalog: Arc<ArmorIndex>,
    store: wyrmdex_data::QuestStore,
    builder: BuilderScreen,
    rx_update: mpsc::UnboundedReceiver<SlotUpdate>,
    mode: AppMode,
    quest_entries: Vec<(i64, String, QuestKind)>,
    talisman_presets: Vec<wyrmdex_data::Talisman>,
    show_hints: bool,
    pref_store: PrefStore,
}

impl App {
    pub fn new(config: TuiConfig, prefs: &Prefs, pref_store: PrefStore) -> Result<Self> {
        let catalog = Arc::new(content::armor_index());
        let (model, rx_update) = SetBuilderModel::new(Session::default(), catalog.clone());

        let mut app = Self {
            config,
            theme: WyrmdexTheme::new(),
            catalog,
            store: content::quest_store(),
            builder: BuilderScreen::new(model),
            rx_update,
            mode: AppMode::Builder,
            quest_entries: Vec::new(),
            talisman_presets: content::talisman_presets(),
            show_hints: prefs.show_builder_hints,
            pref_store,
        };
        if prefs.last_tab == Tab::Quests {
            app.open_quest_list()?;
        }
        Ok(app)
    }

    pub async fn run(mut self) -> Result<()> {
        tracing::info!("wyrmdex starting");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        self.render(&mut terminal)?;

        loop {
            tokio::select! {
                update = self.rx_update.recv() => {
                    match update {
                        Some(update) => {
                            self.builder.on_update(update);
                            self.render(&mut terminal)?;
                        }
                        None => break,
                    }
                }
                _ = time::sleep(Duration::from_millis(self.config.tick_ms)) => {
                    if self.handle_input_tick(&mut terminal)? {
                        break;
                    }
                }
            }
        }

        terminal::restore()?;
        let tab = self.current_tab();
        self.pref_store.edit(|prefs| prefs.last_tab = tab)?;
        tracing::info!("wyrmdex exiting");
        Ok(())
    }

    /// The tab to restore on the next launch; modal overlays fold into
    /// their parent tab.
    fn current_tab(&self) -> Tab {
        match self.mode {
            AppMode::Builder | AppMode::Child(_) => Tab::Builder,
            AppMode::QuestList { .. } | AppMode::QuestDetail { .. } => Tab::Quests,
        }
    }

    /// Poll for keyboard input and dispatch one action.
    fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            // Quest details load off-thread; pick up the published value.
            let mut refresh = false;
            if let AppMode::QuestDetail { rx } = &mut self.mode
                && rx.has_changed().unwrap_or(false)
            {
                let _ = rx.borrow_and_update();
                refresh = true;
            }
            if refresh {
                self.render(terminal)?;
            }
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let action = input::handle_key(key, &self.mode);
                let quit = self.apply_action(action)?;
                self.render(terminal)?;
                Ok(quit)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn apply_action(&mut self, action: KeyAction) -> Result<bool> {
        match action {
            KeyAction::Quit => return Ok(true),
            KeyAction::NextSlot => self.builder.select_next(),
            KeyAction::PrevSlot => self.builder.select_prev(),
            KeyAction::Confirm => self.confirm()?,
            KeyAction::Cancel => self.cancel()?,
            KeyAction::MenuUp => self.menu_move(true),
            KeyAction::MenuDown => self.menu_move(false),
            KeyAction::ToggleDecorations => self.builder.toggle_selected_decorations(),
            KeyAction::AddDecoration => {
                let slot_index = self.builder.selected();
                self.enter_child(ScreenRequest::DecorationChooser { slot_index });
            }
            KeyAction::RemoveDecoration => self.remove_last_decoration()?,
            KeyAction::RemoveSelected => {
                let reply = ScreenReply::completed(
                    RequestKind::RemovePiece,
                    ReplyPayload {
                        slot_index: Some(self.builder.selected() as i64),
                        ..ReplyPayload::default()
                    },
                );
                self.deliver(reply)?;
            }
            KeyAction::OpenArmorList => {
                let request = self.builder.on_add_piece_menu();
                self.enter_child(request);
            }
            KeyAction::OpenQuests => self.open_quest_list()?,
            KeyAction::ToggleHints => {
                let prefs = self
                    .pref_store
                    .edit(|prefs| prefs.show_builder_hints = !prefs.show_builder_hints)?;
                self.show_hints = prefs.show_builder_hints;
            }
            KeyAction::None => {}
        }
        Ok(false)
    }

    fn confirm(&mut self) -> Result<()> {
        match &mut self.mode {
            AppMode::Builder => {
                if let Some(request) = self.builder.change_selected() {
                    self.enter_child(request);
                }
            }
            AppMode::QuestList { selected } => {
                if let Some((id, _, _)) = self.quest_entries.get(*selected) {
                    let id = *id;
                    let store = self.store.clone();
                    let rx = spawn_value(move || store.quest_by_id(id));
                    self.mode = AppMode::QuestDetail { rx };
                }
            }
            AppMode::Child(_) => self.finish_child(true)?,
            AppMode::QuestDetail { .. } => {}
        }
        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        match &self.mode {
            AppMode::Child(_) => self.finish_child(false)?,
            AppMode::QuestDetail { .. } => self.open_quest_list()?,
            AppMode::QuestList { .. } => self.mode = AppMode::Builder,
            AppMode::Builder => {}
        }
        Ok(())
    }

    fn menu_move(&mut self, up: bool) {
        match &mut self.mode {
            AppMode::Child(child) => {
                if up {
                    child.move_up();
                } else {
                    child.move_down();
                }
            }
            AppMode::QuestList { selected } => {
                if up {
                    *selected = selected.saturating_sub(1);
                } else if *selected + 1 < self.quest_entries.len() {
                    *selected += 1;
                }
            }
            _ => {}
        }
    }

    /// Enters the modal child screen described by a builder intent.
    fn enter_child(&mut self, request: ScreenRequest) {
        let child = match request {
            ScreenRequest::WeaponSlotChooser { current } => {
                ChildScreen::WeaponSlotChooser { selected: current }
            }
            ScreenRequest::ArmorChooser { slot, rank, hunter } => ChildScreen::ArmorChooser {
                slot,
                entries: self
                    .catalog
                    .pieces_for(slot, rank, hunter)
                    .into_iter()
                    .map(|piece| PickEntry {
                        id: piece.id,
                        name: piece.name.clone(),
                    })
                    .collect(),
                selected: 0,
            },
            ScreenRequest::ArmorPicker { .. } => ChildScreen::ArmorPicker {
                entries: self
                    .catalog
                    .all_pieces()
                    .into_iter()
                    .map(|piece| PickEntry {
                        id: piece.id,
                        name: piece.name.clone(),
                    })
                    .collect(),
                selected: 0,
            },
            ScreenRequest::TalismanEditor => ChildScreen::TalismanEditor {
                presets: self.talisman_presets.clone(),
                selected: 0,
            },
            ScreenRequest::DecorationChooser { slot_index } => ChildScreen::DecorationChooser {
                slot_index,
                entries: self
                    .catalog
                    .all_decorations()
                    .into_iter()
                    .map(|decoration| PickEntry {
                        id: decoration.id,
                        name: decoration.name.clone(),
                    })
                    .collect(),
                selected: 0,
            },
        };
        self.mode = AppMode::Child(child);
    }

    /// Completes or cancels the active child screen and routes its reply.
    fn finish_child(&mut self, confirmed: bool) -> Result<()> {
        let AppMode::Child(child) = std::mem::replace(&mut self.mode, AppMode::Builder) else {
            return Ok(());
        };
        let reply = if confirmed {
            child.confirm()
        } else {
            child.cancel()
        };
        self.deliver(reply)
    }

    fn deliver(&mut self, reply: ScreenReply) -> Result<()> {
        // No nested sub-screen waits in this shell; the builder owns all
        // results.
        navigation::deliver(reply, None, Some(&mut self.builder))?;
        Ok(())
    }

    fn remove_last_decoration(&mut self) -> Result<()> {
        let slot_index = self.builder.selected();
        let socket_index = wyrmdex_data::EquipSlot::from_index(slot_index)
            .and_then(|slot| self.builder.model().session().piece(slot))
            .and_then(|piece| piece.decorations.len().checked_sub(1))
            .map(|socket| socket as i64);

        let reply = ScreenReply::completed(
            RequestKind::RemoveDecoration,
            ReplyPayload {
                slot_index: Some(slot_index as i64),
                socket_index,
                ..ReplyPayload::default()
            },
        );
        self.deliver(reply)
    }

    fn open_quest_list(&mut self) -> Result<()> {
        use wyrmdex_data::CursorExt;
        self.quest_entries = self
            .store
            .all_quests()
            .map_rows(|quest| Ok((quest.id, quest.display_name().to_string(), quest.kind)))?;
        self.mode = AppMode::QuestList { selected: 0 };
        Ok(())
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = FrameContext {
            builder: &self.builder,
            mode: &self.mode,
            quest_entries: &self.quest_entries,
            show_hints: self.show_hints,
        };
        terminal.draw(|frame| ui::draw(frame, &ctx, &self.theme))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> PrefStore {
        PrefStore::at(dir.path().join("prefs.ron"))
    }

    #[test]
    fn startup_restores_the_quests_tab() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Prefs {
            last_tab: Tab::Quests,
            ..Prefs::default()
        };

        let app = App::new(TuiConfig::default(), &prefs, store(&dir)).unwrap();

        assert!(matches!(app.mode, AppMode::QuestList { .. }));
        assert!(!app.quest_entries.is_empty());
    }

    #[test]
    fn startup_defaults_to_the_builder_tab() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(TuiConfig::default(), &Prefs::default(), store(&dir)).unwrap();
        assert!(matches!(app.mode, AppMode::Builder));
        assert_eq!(app.current_tab(), Tab::Builder);
    }

    #[test]
    fn hint_toggle_commits_through_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(TuiConfig::default(), &Prefs::default(), store(&dir)).unwrap();
        assert!(app.show_hints);

        app.apply_action(KeyAction::ToggleHints).unwrap();
        assert!(!app.show_hints);
        assert!(!app.pref_store.load().show_builder_hints);

        app.apply_action(KeyAction::ToggleHints).unwrap();
        assert!(app.show_hints);
        assert!(app.pref_store.load().show_builder_hints);
    }
}
