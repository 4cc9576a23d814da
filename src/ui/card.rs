use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::model::Quotation;
use crate::ui::theme::{ACCENT, CARD_BORDER, PERSON_TEXT, QUOTE_TEXT};

/// The quotation card: quote text on top, attribution below.
pub struct QuotationCard<'a> {
    quotation: &'a Quotation,
}

impl<'a> QuotationCard<'a> {
    pub fn new(quotation: &'a Quotation) -> Self {
        Self { quotation }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let quote_style = Style::default().fg(QUOTE_TEXT).add_modifier(Modifier::BOLD);
        let person_style = Style::default()
            .fg(PERSON_TEXT)
            .add_modifier(Modifier::ITALIC);

        let lines = vec![
            Line::from(Span::styled(self.quotation.quote.clone(), quote_style)),
            Line::from(""),
            Line::from(Span::styled(
                format!("— {}", self.quotation.person),
                person_style,
            ))
            .alignment(Alignment::Right),
        ];

        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(Span::styled("Inspire Me", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(CARD_BORDER))
                .padding(Padding::uniform(1)),
        )
    }
}
