use tui::{
    style::{Style, Color, Modifier},
    text::{Span, Spans},
    widgets::Paragraph,
};
use crate::engine::Analysis;

/// The text shown for one analysis.
#[derive(Debug, PartialEq)]
pub struct Summary {
    pub chord: String,
    pub badge: String,
    pub notes: String,
    pub alternatives: Vec<String>,
}

impl Summary {
    pub fn new(analysis: &Analysis, limit: usize) -> Summary {
        let notes: Vec<String> = analysis.spelled_notes().iter()
            .map(|n| n.to_string())
            .collect();
        let alternatives = analysis.alternatives(limit).iter()
            .map(|c| format!("{} ({})", c.full_name(), c.inversion_label()))
            .collect();
        Summary {
            chord: analysis.chord_name().to_string(),
            badge: analysis.badge().to_string(),
            notes: notes.join(" "),
            alternatives,
        }
    }

    pub fn alternatives_line(&self) -> String {
        if self.alternatives.is_empty() {
            "(none)".to_string()
        } else {
            self.alternatives.join(", ")
        }
    }
}

pub fn render<'a>(summary: &Summary, port: &str) -> Paragraph<'a> {
    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Spans::from(vec![
            Span::styled(summary.chord.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(format!("[{}]", summary.badge), Style::default().fg(Color::Yellow)),
        ]),
        Spans::from(""),
        Spans::from(vec![
            Span::styled("Notes: ", label),
            Span::raw(summary.notes.clone()),
        ]),
        Spans::from(vec![
            Span::styled("Alternatives: ", label),
            Span::raw(summary.alternatives_line()),
        ]),
        Spans::from(""),
        Spans::from(vec![
            Span::styled("MIDI: ", label),
            Span::raw(port.to_string()),
        ]),
    ];
    Paragraph::new(lines)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::Engine;

    #[test]
    fn test_empty_summary() {
        let summary = Summary::new(&Engine::new().analyze(), 6);
        assert_eq!(summary.chord, "(none)");
        assert_eq!(summary.badge, "No chord");
        assert_eq!(summary.notes, "");
        assert_eq!(summary.alternatives_line(), "(none)");
    }

    #[test]
    fn test_chord_summary() {
        let mut engine = Engine::new();
        engine.note_on(64);
        engine.note_on(67);
        let summary = Summary::new(&engine.note_on(72), 2);
        assert_eq!(summary.chord, "C/E");
        assert_eq!(summary.badge, "1st inversion");
        assert_eq!(summary.notes, "E4 G4 C5");
        assert!(summary.alternatives.len() <= 2);
    }
}
