//! Frame composition for all application modes.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use wyrmdex_data::QuestKind;

use crate::presentation::theme::WyrmdexTheme;
use crate::screens::builder::BuilderScreen;
use crate::screens::quest_detail::quest_rows;
use crate::state::{AppMode, ChildScreen};

/// Everything the composer needs for one frame.
pub struct FrameContext<'a> {
    pub builder: &'a BuilderScreen,
    pub mode: &'a AppMode,
    pub quest_entries: &'a [(i64, String, QuestKind)],
    pub show_hints: bool,
}

pub fn draw(frame: &mut Frame, ctx: &FrameContext, theme: &WyrmdexTheme) {
    match ctx.mode {
        AppMode::Builder => draw_builder(frame, ctx, theme),
        AppMode::QuestList { selected } => draw_quest_list(frame, ctx, theme, *selected),
        AppMode::QuestDetail { rx } => draw_quest_detail(frame, theme, rx),
        AppMode::Child(child) => {
            draw_builder(frame, ctx, theme);
            draw_child(frame, theme, child);
        }
    }
}

fn draw_builder(frame: &mut Frame, ctx: &FrameContext, theme: &WyrmdexTheme) {
    let [main, hints] = split_with_hints(frame.area(), ctx.show_hints);

    let mut lines = Vec::new();
    for panel in ctx.builder.panels() {
        let selected = panel.index() == ctx.builder.selected();
        let marker = if selected { "▸ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{marker}{} {}", theme.slot_glyph(panel.slot()), panel.slot()),
            theme.slot_style(selected),
        )));
        for text in panel.lines() {
            lines.push(Line::from(Span::styled(
                format!("    {text}"),
                theme.value_style(),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Armor Set Builder"),
    );
    frame.render_widget(paragraph, main);

    if ctx.show_hints {
        let hint = "↑/↓ slot · Enter change · d decorations · a/x bind/unbind · r remove · p all armor · l quests · h hints · q quit";
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(hint, theme.hint_style()))),
            hints,
        );
    }
}

fn draw_quest_list(frame: &mut Frame, ctx: &FrameContext, theme: &WyrmdexTheme, selected: usize) {
    let items: Vec<ListItem> = ctx
        .quest_entries
        .iter()
        .map(|(_, name, kind)| {
            ListItem::new(Line::from(Span::styled(
                name.clone(),
                theme.quest_kind_style(*kind),
            )))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(selected));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Quests"))
        .highlight_style(theme.slot_style(true))
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(list, frame.area(), &mut state);
}

fn draw_quest_detail(
    frame: &mut Frame,
    theme: &WyrmdexTheme,
    rx: &tokio::sync::watch::Receiver<Option<wyrmdex_data::DataResult<wyrmdex_data::QuestRecord>>>,
) {
    let lines: Vec<Line> = match &*rx.borrow() {
        None => vec![Line::from("Loading...")],
        Some(Err(_)) => vec![Line::from("Quest not found.")],
        Some(Ok(quest)) => quest_rows(quest)
            .iter()
            .map(|cell| line_owned(cell.line(theme)))
            .collect(),
    };

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Quest"));
    frame.render_widget(paragraph, frame.area());
}

fn draw_child(frame: &mut Frame, theme: &WyrmdexTheme, child: &ChildScreen) {
    let area = centered(frame.area(), 40, 12);
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = match child {
        ChildScreen::WeaponSlotChooser { selected } => (0u8..=3)
            .map(|count| {
                let text = format!("{count} slot(s)");
                Line::from(Span::styled(text, theme.slot_style(count == *selected)))
            })
            .collect(),
        ChildScreen::ArmorChooser {
            entries, selected, ..
        }
        | ChildScreen::ArmorPicker {
            entries, selected, ..
        }
        | ChildScreen::DecorationChooser {
            entries, selected, ..
        } => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Line::from(Span::styled(
                    entry.name.clone(),
                    theme.slot_style(i == *selected),
                ))
            })
            .collect(),
        ChildScreen::TalismanEditor { presets, selected } => presets
            .iter()
            .enumerate()
            .map(|(i, talisman)| {
                Line::from(Span::styled(
                    format!("{} (R{})", talisman.name, talisman.rarity),
                    theme.slot_style(i == *selected),
                ))
            })
            .collect(),
    };

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(child.title()));
    frame.render_widget(paragraph, area);
}

/// Detaches a line from the cell it was built from.
fn line_owned(line: Line<'_>) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .spans
        .into_iter()
        .map(|span| Span::styled(span.content.into_owned(), span.style))
        .collect();
    Line::from(spans)
}

fn split_with_hints(area: Rect, show_hints: bool) -> [Rect; 2] {
    if show_hints {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        [chunks[0], chunks[1]]
    } else {
        [area, Rect::default()]
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
