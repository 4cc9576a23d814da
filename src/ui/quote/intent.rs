use crate::model::Quotation;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum QuoteIntent {
    /// A refresh completed and produced a parsed quotation.
    QuoteArrived(Quotation),
}

impl Intent for QuoteIntent {}
