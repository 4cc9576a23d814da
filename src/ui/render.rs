use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::card::QuotationCard;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);

    frame.render_widget(Clear, body);
    let card_area = centered_rect(80, 70, body);
    let card = QuotationCard::new(&app.screen().quotation);
    frame.render_widget(card.widget(), card_area);

    frame.render_widget(Footer::new().widget(footer), footer);
}
