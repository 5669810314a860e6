mod controls;
mod ui;
mod viewport;

pub use controls::ControlInputs;
pub use ui::UIState;
pub use viewport::ViewportState;
