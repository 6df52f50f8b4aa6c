use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use tracing::info;

use crate::session::{BmiSession, ComputeOutcome};

use super::forms::{MeasurementField, MeasurementForm};
use super::helpers::centered_rect;
use super::history::HistoryView;

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows taken by the title banner.
const HEADER_HEIGHT: u16 = 3;
/// Two input lines plus borders.
const FORM_HEIGHT: u16 = 4;
/// Two result lines plus borders.
const RESULT_HEIGHT: u16 = 4;
/// History rows moved per PageUp/PageDown.
const HISTORY_PAGE: u16 = 5;
/// Alert text for any storage failure during compute.
const SAVE_FAILED_MESSAGE: &str = "There was an error while saving the data";

/// Fine-grained modes for the single screen.
enum Mode {
    Normal,
    Alert(String),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    session: BmiSession,
    form: MeasurementForm,
    history: HistoryView,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(session: BmiSession) -> Self {
        let mut history = HistoryView::default();
        history.sync(&session);
        Self {
            session,
            form: MeasurementForm::default(),
            history,
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Route one key press. Returns `true` once the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if matches!(self.mode, Mode::Normal) {
            return self.handle_normal_key(key);
        }

        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.mode = Mode::Normal;
        }
        false
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.form.toggle_field()
            }
            KeyCode::Backspace => {
                let mut value = self.active_value().to_string();
                value.pop();
                self.set_active_value(value);
            }
            KeyCode::Enter => self.compute(),
            KeyCode::PageUp => self.history.scroll_up(HISTORY_PAGE),
            KeyCode::PageDown => self.history.scroll_down(HISTORY_PAGE),
            KeyCode::Char(ch) if !control => {
                let mut value = self.active_value().to_string();
                if MeasurementForm::push_char(&mut value, ch) {
                    self.set_active_value(value);
                }
            }
            _ => {}
        }
        false
    }

    fn compute(&mut self) {
        self.clear_status();
        match self.session.compute() {
            Err(err) => {
                self.mode = Mode::Alert(err.to_string());
            }
            Ok(ComputeOutcome::Saved { reading, id }) => {
                info!(id, bmi = reading.bmi, category = %reading.category, "computed BMI");
                self.history.sync(&self.session);
                self.set_status(format!("Saved BMI {:.1}.", reading.bmi), StatusKind::Info);
            }
            Ok(ComputeOutcome::SaveFailed { error, .. }) => {
                self.set_status(format!("Not saved: {error}"), StatusKind::Error);
                self.mode = Mode::Alert(SAVE_FAILED_MESSAGE.to_string());
            }
        }
    }

    fn active_value(&self) -> &str {
        match self.form.active {
            MeasurementField::Weight => self.session.weight(),
            MeasurementField::Height => self.session.height(),
        }
    }

    fn set_active_value(&mut self, value: String) {
        match self.form.active {
            MeasurementField::Weight => self.session.set_weight(value),
            MeasurementField::Height => self.session.set_height(value),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(FORM_HEIGHT),
                Constraint::Length(RESULT_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_header(frame, chunks[0]);
        self.draw_form(frame, chunks[1]);
        self.draw_result(frame, chunks[2]);
        self.history.draw(frame, chunks[3]);
        self.draw_footer(frame, chunks[4]);

        if let Mode::Alert(message) = &self.mode {
            self.draw_alert(frame, area, message);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            "BMI Calculator",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().bg(Color::Rgb(0xf4, 0x51, 0x1e)));
        frame.render_widget(title, area);
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Compute BMI")
            .borders(Borders::ALL);
        let inner = block.inner(area);

        let lines = vec![
            self.form
                .build_line(MeasurementField::Weight, self.session.weight()),
            self.form
                .build_line(MeasurementField::Height, self.session.height()),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);

        if matches!(self.mode, Mode::Normal) && inner.height >= 2 {
            frame.set_cursor_position(self.form.cursor_position(inner, self.active_value()));
        }
    }

    fn draw_result(&self, frame: &mut Frame, area: Rect) {
        let lines = match self.session.reading() {
            Some(reading) => vec![
                Line::from(reading.summary()),
                Line::from(reading.description()),
            ],
            None => Vec::new(),
        };
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match self.mode {
            Mode::Alert(_) => Line::from(vec![
                Span::styled("[Enter/Esc]", key_style),
                Span::raw(" Dismiss"),
            ]),
            Mode::Normal => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Switch field   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Compute BMI   "),
                Span::styled("[PgUp/PgDn]", key_style),
                Span::raw(" Scroll history   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_alert(&self, frame: &mut Frame, area: Rect, message: &str) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Alert").borders(Borders::ALL);
        let lines = vec![
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to continue",
                Style::default().fg(Color::Gray),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
