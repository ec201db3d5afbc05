//! Replacement page shown after a critical error.
//!
//! Nothing interactive is left; the app has to be restarted.

use iced::widget::{center, text};
use iced::Element;

use crate::Message;

/// Render the whole window as a single message
pub fn view<'a>(message: &'static str) -> Element<'a, Message> {
    center(text(message).size(16).color([0.8, 0.2, 0.2])).into()
}
