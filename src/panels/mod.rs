mod central_panel;
mod status_bar;
mod toolbar;

pub use central_panel::central_panel;
pub use status_bar::status_bar;
pub use toolbar::toolbar;
