use super::{TabHit, Workbench};
use crate::app::theme::UiTheme;
use crate::kernel::{tabs, FocusTarget};
use crate::views::{flatten, TreeRow};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// 侧边栏宽度以像素保存，按每个终端单元格 8px 换算
pub const CELL_WIDTH_PX: u16 = 8;

const TAB_DISPLAY_WIDTH: usize = 4;
const GUTTER_MIN_DIGITS: usize = 3;

pub fn sidebar_columns(width_px: u16) -> u16 {
    (width_px / CELL_WIDTH_PX).max(1)
}

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let theme = UiTheme::for_theme(workbench.store.state().settings.theme);

    workbench.last_sidebar_area = None;
    workbench.last_tree_area = None;
    workbench.last_splitter_x = None;
    workbench.last_tab_bar_area = None;
    workbench.last_tabs.clear();
    workbench.last_editor_area = None;
    workbench.last_cursor = None;

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        area,
    );

    let editor_area = if workbench.store.state().layout.is_fullscreen() {
        area
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(super::HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(super::STATUS_HEIGHT),
            ])
            .split(area);

        workbench.render_header(frame, chunks[0], &theme);
        workbench.render_status(frame, chunks[2], &theme);

        let body_area = chunks[1];
        let max_sidebar = body_area.width.saturating_sub(super::EDITOR_MIN_COLUMNS);
        let sidebar_width =
            sidebar_columns(workbench.store.state().layout.sidebar_width()).min(max_sidebar);

        if sidebar_width >= 2 && body_area.height > 0 {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
                .split(body_area);
            let sidebar_area = columns[0];
            let (tree_area, tree_scroll) = workbench.render_sidebar(frame, sidebar_area, &theme);
            workbench.tree_scroll = tree_scroll;

            workbench.last_sidebar_area = Some(sidebar_area);
            workbench.last_tree_area = (tree_area.height > 0).then_some(tree_area);
            workbench.last_splitter_x = Some(sidebar_area.x + sidebar_area.width - 1);
            columns[1]
        } else {
            body_area
        }
    };

    if editor_area.width > 0 && editor_area.height > 0 {
        let painted = workbench.render_editor(frame, editor_area, &theme);
        workbench.last_tab_bar_area = Some(painted.tab_bar);
        workbench.last_tabs = painted.tabs;
        workbench.last_editor_area = Some(editor_area);
        workbench.last_cursor = painted.cursor;
    }

    let (input_visible, confirm_visible) = {
        let ui = &workbench.store.state().ui;
        (ui.input_dialog.visible, ui.confirm_dialog.visible)
    };
    if input_visible {
        workbench.last_cursor = workbench.render_input_dialog(frame, area, &theme);
    } else if confirm_visible {
        workbench.last_cursor = None;
        workbench.render_confirm_dialog(frame, area, &theme);
    }
}

struct EditorPaint {
    tab_bar: Rect,
    tabs: Vec<TabHit>,
    cursor: Option<(u16, u16)>,
}

fn display_width(text: &str) -> usize {
    text.graphemes(true)
        .map(|g| if g == "\t" { TAB_DISPLAY_WIDTH } else { g.width() })
        .sum()
}

fn expand_tabs(text: &str) -> String {
    text.replace('\t', &" ".repeat(TAB_DISPLAY_WIDTH))
}

/// 标签占用的列数，含右侧分隔符
fn tab_cell_width(entry: &tabs::TabEntry) -> usize {
    let dirty = if entry.is_dirty { 2 } else { 0 };
    1 + entry.title.width() + dirty + 3 + 1
}

/// 从哪个标签开始绘制，才能让 `active` 完整落在 `width` 列内
fn first_tab_keeping_visible(widths: &[usize], active: usize, width: usize) -> usize {
    let mut first = 0;
    while first < active && widths[first..=active].iter().sum::<usize>() > width {
        first += 1;
    }
    first
}

/// 调整滚动位置，使 `focus` 行可见且不越过末尾
fn scroll_into_view(prev: usize, focus: Option<usize>, len: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    let mut scroll = prev;
    if let Some(focus) = focus {
        if focus < scroll {
            scroll = focus;
        } else if focus >= scroll + height {
            scroll = focus + 1 - height;
        }
    }
    scroll.min(len.saturating_sub(height))
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

impl Workbench {
    fn render_header(&self, frame: &mut Frame, area: Rect, theme: &UiTheme) {
        if area.height == 0 {
            return;
        }
        let state = self.store.state();
        let line = Line::from(vec![
            Span::styled(
                " codepad",
                Style::default()
                    .fg(theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" - ", Style::default().fg(theme.muted_fg)),
            Span::styled(state.project_name.clone(), Style::default().fg(theme.fg)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, theme: &UiTheme) {
        if area.height == 0 {
            return;
        }
        let state = self.store.state();
        let base = Style::default().bg(theme.status_bg).fg(theme.status_fg);
        frame.render_widget(Block::default().style(base), area);

        let mut left = Vec::new();
        if state.session.bound().is_some() {
            let (line, column) = state.session.cursor_position();
            left.push(Span::raw(format!(" {} ", state.session.language().status_label())));
            left.push(Span::raw(format!(" Line: {line}  Column: {column}")));
        }

        let right = match state.ui.notification.as_deref() {
            Some(message) => Line::from(Span::styled(
                format!("{message} "),
                base.fg(theme.warning_fg).add_modifier(Modifier::BOLD),
            )),
            None => Line::from(format!(
                "{}  {}px ",
                state.settings.theme.label(),
                state.settings.font_size
            )),
        };
        let right_width = (right.width() as u16).min(area.width);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(right_width)])
            .split(area);
        frame.render_widget(Paragraph::new(Line::from(left)).style(base), columns[0]);
        frame.render_widget(
            Paragraph::new(right).style(base).alignment(Alignment::Right),
            columns[1],
        );
    }

    /// 返回树行所在的区域（去掉边框后）与本帧的滚动位置
    fn render_sidebar(&self, frame: &mut Frame, area: Rect, theme: &UiTheme) -> (Rect, usize) {
        let state = self.store.state();
        let border = if state.ui.focus == FocusTarget::Explorer {
            theme.focus_border
        } else {
            theme.inactive_border
        };
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", state.project_name.to_uppercase()),
                Style::default()
                    .fg(theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            )),
            sections[0],
        );
        let tree_area = sections[1];

        let rows = flatten(&state.files);
        if rows.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(Span::styled("No files", Style::default().fg(theme.muted_fg))),
                Line::from(Span::styled(
                    "Ctrl+N to create one",
                    Style::default().fg(theme.muted_fg),
                )),
            ]);
            frame.render_widget(empty, tree_area);
            return (tree_area, 0);
        }

        // 选中行优先，其次是活动文件
        let focus_row = rows
            .iter()
            .position(|row| row.is_selected)
            .or_else(|| rows.iter().position(|row| row.is_active));
        let height = usize::from(tree_area.height);
        let scroll = scroll_into_view(self.tree_scroll, focus_row, rows.len(), height);

        let lines: Vec<Line> = rows
            .iter()
            .skip(scroll)
            .take(height)
            .map(|row| tree_line(row, theme))
            .collect();
        frame.render_widget(Paragraph::new(lines), tree_area);
        (tree_area, scroll)
    }

    fn render_editor(&self, frame: &mut Frame, area: Rect, theme: &UiTheme) -> EditorPaint {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(super::TAB_BAR_HEIGHT), Constraint::Min(0)])
            .split(area);
        let tab_bar = chunks[0];
        let content = chunks[1];

        let tabs = self.render_tab_bar(frame, tab_bar, theme);
        let cursor = if self.store.state().session.bound().is_some() {
            self.render_buffer(frame, content, theme)
        } else {
            render_placeholder(frame, content, theme);
            None
        };

        EditorPaint {
            tab_bar,
            tabs,
            cursor,
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect, theme: &UiTheme) -> Vec<TabHit> {
        let mut hits = Vec::new();
        let mut spans = Vec::new();
        let end = area.x + area.width;
        let mut x = area.x;

        let entries = tabs::list(&self.store.state().files);
        let widths: Vec<usize> = entries.iter().map(tab_cell_width).collect();
        let first = match entries.iter().position(|entry| entry.is_active) {
            Some(active) => first_tab_keeping_visible(&widths, active, usize::from(area.width)),
            None => 0,
        };

        for entry in entries.into_iter().skip(first) {
            if x >= end {
                break;
            }
            let style = if entry.is_active {
                Style::default()
                    .bg(theme.tab_active_bg)
                    .fg(theme.tab_active_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.tab_inactive_fg)
            };

            let title = format!(" {}", entry.title);
            let dirty = if entry.is_dirty { " *" } else { "" };
            let head_width = (title.width() + dirty.width()) as u16;
            // " × "
            let tab_width = head_width + 3;

            let visible = tab_width.min(end - x);
            hits.push(TabHit {
                id: entry.id,
                area: Rect::new(x, area.y, visible, area.height.min(1)),
                close_x: x + head_width + 1,
            });

            spans.push(Span::styled(title, style));
            if !dirty.is_empty() {
                spans.push(Span::styled(dirty, style.fg(theme.dirty_fg)));
            }
            spans.push(Span::styled(" × ", style));
            spans.push(Span::styled("│", Style::default().fg(theme.inactive_border)));
            x = x.saturating_add(tab_width + 1);
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
        hits
    }

    /// 绘制行号与文本，返回光标的屏幕坐标
    fn render_buffer(&self, frame: &mut Frame, area: Rect, theme: &UiTheme) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let state = self.store.state();
        let buffer = state.session.buffer();
        let (cursor_row, cursor_col) = buffer.cursor();
        let height = usize::from(area.height);

        let digits = buffer.len_lines().to_string().len().max(GUTTER_MIN_DIGITS);
        let gutter_width = (digits as u16 + 2).min(area.width);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(gutter_width), Constraint::Min(0)])
            .split(area);
        let gutter_area = columns[0];
        let text_area = columns[1];

        let top = cursor_row.saturating_sub(height.saturating_sub(1));
        let bottom = (top + height).min(buffer.len_lines());

        let cursor_line = buffer.line(cursor_row).unwrap_or_default();
        let cursor_prefix: String = cursor_line.graphemes(true).take(cursor_col).collect();
        let cursor_x = display_width(&cursor_prefix);
        let text_width = usize::from(text_area.width);
        let left = if text_width > 0 && cursor_x >= text_width {
            cursor_x + 1 - text_width
        } else {
            0
        };

        let mut gutter = Vec::with_capacity(bottom - top);
        let mut text = Vec::with_capacity(bottom - top);
        for row in top..bottom {
            let number_style = if row == cursor_row {
                Style::default().fg(theme.fg)
            } else {
                Style::default().fg(theme.gutter_fg)
            };
            gutter.push(Line::from(Span::styled(
                format!("{:>digits$}  ", row + 1),
                number_style,
            )));

            let raw = buffer.line(row).unwrap_or_default();
            let content = raw.trim_end_matches(['\n', '\r']);
            text.push(Line::from(expand_tabs(content)));
        }

        frame.render_widget(Paragraph::new(gutter), gutter_area);
        frame.render_widget(
            Paragraph::new(text).scroll((0, left.min(usize::from(u16::MAX)) as u16)),
            text_area,
        );

        let visible = state.ui.focus == FocusTarget::Editor && !state.ui.has_modal();
        (visible && text_area.width > 0).then(|| {
            (
                text_area.x + (cursor_x - left) as u16,
                text_area.y + (cursor_row - top) as u16,
            )
        })
    }

    fn render_input_dialog(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &UiTheme,
    ) -> Option<(u16, u16)> {
        let dialog = &self.store.state().ui.input_dialog;
        let width = area.width.saturating_sub(4).min(60);
        let rect = centered_rect(width, 7, area);
        if rect.width < 4 || rect.height < 3 {
            return None;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.focus_border))
            .title(format!(" {} ", dialog.title))
            .style(Style::default().bg(theme.dialog_bg).fg(theme.fg));
        let inner = block.inner(rect);
        frame.render_widget(Clear, rect);
        frame.render_widget(block, rect);

        let muted = Style::default().fg(theme.muted_fg);
        let error = dialog
            .error
            .as_deref()
            .map(|message| Span::styled(message.to_string(), Style::default().fg(theme.error_fg)))
            .unwrap_or_default();
        let lines = vec![
            Line::from(Span::styled(dialog.hint.clone(), muted)),
            Line::from(format!("> {}", dialog.value)),
            Line::from(error),
            Line::from(""),
            Line::from(Span::styled("[Enter] Create  [Esc] Cancel", muted)),
        ];
        frame.render_widget(Paragraph::new(lines), inner);

        if inner.height < 2 {
            return None;
        }
        let prefix = dialog.value.get(..dialog.cursor).unwrap_or(&dialog.value);
        let x = inner.x + 2 + prefix.width() as u16;
        (x < inner.x + inner.width).then_some((x, inner.y + 1))
    }

    fn render_confirm_dialog(&self, frame: &mut Frame, area: Rect, theme: &UiTheme) {
        let dialog = &self.store.state().ui.confirm_dialog;
        let width = area.width.saturating_sub(4).min(60);
        let rect = centered_rect(width, 7, area);
        if rect.width < 4 || rect.height < 3 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.warning_fg))
            .title(" Confirm ")
            .style(Style::default().bg(theme.dialog_bg).fg(theme.fg));
        let inner = block.inner(rect);
        frame.render_widget(Clear, rect);
        frame.render_widget(block, rect);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);
        frame.render_widget(
            Paragraph::new(dialog.message.clone()).wrap(Wrap { trim: true }),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "[Enter] Yes  [Esc] No",
                Style::default().fg(theme.muted_fg),
            ))),
            rows[1],
        );
    }
}

fn tree_line(row: &TreeRow, theme: &UiTheme) -> Line<'static> {
    let indent = "  ".repeat(usize::from(row.depth));
    let marker = if row.is_folder {
        let arrow = if row.is_open { "▾ " } else { "▸ " };
        arrow.to_string()
    } else {
        row.icon
            .map(|icon| format!("{} ", icon.glyph()))
            .unwrap_or_default()
    };

    let mut name_style = Style::default().fg(theme.fg);
    if row.is_folder {
        name_style = name_style.fg(theme.folder_fg);
    }
    if row.is_active {
        name_style = name_style.fg(theme.active_fg).add_modifier(Modifier::BOLD);
    }

    let mut spans = vec![
        Span::raw(indent),
        Span::styled(marker, Style::default().fg(theme.muted_fg)),
        Span::styled(row.name.clone(), name_style),
    ];
    if row.is_dirty {
        spans.push(Span::styled(" *", Style::default().fg(theme.dirty_fg)));
    }

    let line = Line::from(spans);
    if row.is_selected {
        line.style(Style::default().bg(theme.selected_bg).fg(theme.selected_fg))
    } else {
        line
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, theme: &UiTheme) {
    if area.height == 0 {
        return;
    }
    let muted = Style::default().fg(theme.muted_fg);
    let lines = vec![
        Line::from(Span::styled(
            "No files open",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Create a new file to get started", muted)),
        Line::from(""),
        Line::from(Span::styled("Ctrl+N  New File    Alt+N  New Folder", muted)),
    ];
    let height = (lines.len() as u16).min(area.height);
    let rect = Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}
