mod empty_message;
mod help;
mod status;

/// Small pre-styled widgets shared by screens.
pub struct UiComponent;
