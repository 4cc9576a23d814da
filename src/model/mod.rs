mod quotation;

pub use quotation::{ParseError, Quotation};
