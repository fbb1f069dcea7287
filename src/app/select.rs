use tui::{
    layout::Alignment,
    style::{Style, Color},
    text::{Span, Spans},
    widgets::{Block, Paragraph, Borders},
};
use crossterm::event::KeyCode;

/// Pick one of a list of choices, e.g. a MIDI port.
pub struct Select {
    pub idx: usize,
    pub choices: Vec<String>,
}

impl Select {
    pub fn new(choices: Vec<String>) -> Select {
        Select {
            idx: 0,
            choices,
        }
    }

    /// The window of choices that fits in `height` rows
    /// and still shows the selected one.
    fn visible(&self, height: usize) -> (usize, usize) {
        let start = (self.idx + 1).saturating_sub(height);
        let end = self.choices.len().min(start+height);
        (start, end)
    }

    pub fn render<'a>(&self, height: usize) -> Paragraph<'a> {
        let mut rows = vec![];
        if self.choices.is_empty() {
            rows.push(Spans::from(Span::raw("No MIDI input ports")));
        }

        let (start, end) = self.visible(height);
        for (i, choice) in self.choices[start..end].iter().enumerate() {
            let choice = choice.to_string();
            let span = if i + start == self.idx {
                Span::styled(choice, Style::default().fg(Color::LightBlue))
            } else {
                Span::raw(choice)
            };
            rows.push(Spans::from(span));
        }
        Paragraph::new(rows)
            .style(Style::default())
            .alignment(Alignment::Left)
            .block(
                Block::default().borders(Borders::LEFT)
            )
    }

    /// Process input and returns the selected index
    /// and if the widget should be closed.
    pub fn process_input(&mut self, key: KeyCode) -> (Option<usize>, bool) {
        let n_choices = self.choices.len();
        match key {
            KeyCode::Esc => (None, true),
            _ if n_choices == 0 => (None, matches!(key, KeyCode::Enter)),
            KeyCode::Char('j') => {
                // Wrap around
                self.idx = (self.idx + 1) % n_choices;
                (None, false)
            }
            KeyCode::Char('k') => {
                if self.idx > 0 {
                    self.idx -= 1;
                } else {
                    self.idx = n_choices - 1;
                }
                (None, false)
            }
            KeyCode::Enter => (Some(self.idx), true),
            _ => (None, false)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ports() -> Select {
        Select::new(vec!["Port A".to_string(), "Port B".to_string(), "Port C".to_string()])
    }

    #[test]
    fn test_navigate() {
        let mut select = ports();
        assert_eq!(select.process_input(KeyCode::Char('j')), (None, false));
        assert_eq!(select.idx, 1);
        select.process_input(KeyCode::Char('j'));
        select.process_input(KeyCode::Char('j'));
        assert_eq!(select.idx, 0);
        select.process_input(KeyCode::Char('k'));
        assert_eq!(select.idx, 2);
        assert_eq!(select.process_input(KeyCode::Enter), (Some(2), true));
    }

    #[test]
    fn test_selected_stays_visible() {
        let mut select = ports();
        assert_eq!(select.visible(2), (0, 2));
        select.idx = 1;
        assert_eq!(select.visible(2), (0, 2));
        select.idx = 2;
        assert_eq!(select.visible(2), (1, 3));
        assert_eq!(select.visible(10), (0, 3));
    }

    #[test]
    fn test_cancel() {
        let mut select = ports();
        assert_eq!(select.process_input(KeyCode::Esc), (None, true));
    }

    #[test]
    fn test_no_choices() {
        let mut select = Select::new(vec![]);
        assert_eq!(select.process_input(KeyCode::Char('j')), (None, false));
        assert_eq!(select.process_input(KeyCode::Enter), (None, true));
    }
}
