use crate::ui::mvi::Reducer;
use crate::ui::quote::intent::QuoteIntent;
use crate::ui::quote::state::QuoteScreenState;

pub struct QuoteReducer;

impl Reducer for QuoteReducer {
    type State = QuoteScreenState;
    type Intent = QuoteIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // The quotation is replaced wholesale; failed refreshes never
            // produce an intent, so the previous state survives untouched.
            QuoteIntent::QuoteArrived(quotation) => QuoteScreenState { quotation },
        }
    }
}
