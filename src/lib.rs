pub mod api;
pub mod feed;
pub mod logging;
pub mod model;
pub mod ui;
