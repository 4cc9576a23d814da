use crate::model::Quotation;
use crate::ui::mvi::UiState;

/// Everything the quote screen needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteScreenState {
    pub quotation: Quotation,
}

impl Default for QuoteScreenState {
    fn default() -> Self {
        Self {
            quotation: Quotation::placeholder(),
        }
    }
}

impl UiState for QuoteScreenState {}
