use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Fields available within the measurement form.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum MeasurementField {
    #[default]
    Weight,
    Height,
}

impl MeasurementField {
    /// Label rendered in front of the value.
    pub(crate) fn label(self) -> &'static str {
        match self {
            MeasurementField::Weight => "Weight",
            MeasurementField::Height => "Height",
        }
    }

    /// Hint shown while the field is still empty.
    pub(crate) fn placeholder(self) -> &'static str {
        match self {
            MeasurementField::Weight => "Weight in Pounds",
            MeasurementField::Height => "Height in Inches",
        }
    }
}

/// Keeps track of which input has focus. The text itself lives in the session
/// so the compute cycle always sees exactly what is on screen.
#[derive(Default, Clone)]
pub(crate) struct MeasurementForm {
    pub(crate) active: MeasurementField,
}

impl MeasurementForm {
    /// Swap focus between the weight and height fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            MeasurementField::Weight => MeasurementField::Height,
            MeasurementField::Height => MeasurementField::Weight,
        };
    }

    /// Append a character to `value`. Inputs are free text and only validated
    /// on compute, so anything printable is accepted.
    pub(crate) fn push_char(value: &mut String, ch: char) -> bool {
        if ch.is_control() {
            false
        } else {
            value.push(ch);
            true
        }
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field: MeasurementField, value: &str) -> Line<'static> {
        let is_active = self.active == field;
        let display = if value.is_empty() {
            field.placeholder().to_string()
        } else {
            value.to_string()
        };

        let style = if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else if is_active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }

    /// Column where the cursor should sit for `field` holding `value`.
    pub(crate) fn cursor_offset(field: MeasurementField, value: &str) -> usize {
        field.label().len() + ": ".len() + value.chars().count()
    }

    /// Terminal position of the cursor for the active field inside `inner`,
    /// pinned to the last column once the text outgrows the box.
    pub(crate) fn cursor_position(&self, inner: Rect, value: &str) -> (u16, u16) {
        let row = match self.active {
            MeasurementField::Weight => 0,
            MeasurementField::Height => 1,
        };
        let offset = u16::try_from(Self::cursor_offset(self.active, value))
            .unwrap_or(u16::MAX)
            .min(inner.width.saturating_sub(1));
        (inner.x.saturating_add(offset), inner.y.saturating_add(row))
    }
}
