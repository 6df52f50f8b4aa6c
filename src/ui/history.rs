use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tracing::warn;

use crate::models::Measurement;
use crate::session::BmiSession;

/// Scrollable "BMI History" panel. It remembers which session revision it last
/// loaded and re-queries the store only when that revision moves.
#[derive(Default)]
pub(crate) struct HistoryView {
    pub(crate) records: Vec<Measurement>,
    loaded_revision: Option<u64>,
    scroll: u16,
}

impl HistoryView {
    /// Re-fetch the list when the session has appended since the last load. A
    /// failed query keeps the previous rows and is only logged.
    pub(crate) fn sync(&mut self, session: &BmiSession) {
        let revision = session.revision();
        if self.loaded_revision == Some(revision) {
            return;
        }

        match session.history() {
            Ok(records) => {
                self.records = records;
                self.scroll = 0;
            }
            Err(err) => warn!(%err, "history refresh failed; keeping previous rows"),
        }
        self.loaded_revision = Some(revision);
    }

    pub(crate) fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub(crate) fn scroll_down(&mut self, rows: u16) {
        let max = self.records.len().saturating_sub(1) as u16;
        self.scroll = self.scroll.saturating_add(rows).min(max);
    }

    pub(crate) fn draw(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("BMI History").borders(Borders::ALL);
        let lines: Vec<Line> = self
            .records
            .iter()
            .map(|record| Line::from(record.history_line()))
            .collect();

        let paragraph = Paragraph::new(lines).block(block).scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MeasurementStore;

    fn session() -> BmiSession {
        BmiSession::start(MeasurementStore::open_in_memory().unwrap()).unwrap()
    }

    #[test]
    fn sync_loads_once_per_revision() {
        let mut session = session();
        let mut view = HistoryView::default();
        view.sync(&session);
        assert!(view.records.is_empty());
        assert_eq!(view.loaded_revision, Some(0));

        session.set_weight("140");
        session.set_height("68");
        session.compute().unwrap();
        view.sync(&session);
        assert_eq!(view.records.len(), 1);
        assert_eq!(view.loaded_revision, Some(1));
    }

    #[test]
    fn scrolling_is_clamped_to_rows() {
        let mut view = HistoryView::default();
        view.scroll_down(5);
        assert_eq!(view.scroll, 0);
        view.scroll_up(1);
        assert_eq!(view.scroll, 0);
    }
}
