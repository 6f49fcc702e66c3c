mod background;
mod page;
mod rail;
mod status_bar;

pub use background::BackgroundWidget;
pub use page::{paint_layout, PageWidget};
pub use rail::RailWidget;
pub use status_bar::StatusBarWidget;
