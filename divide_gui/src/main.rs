//! # Divide GUI Application
//!
//! Graphical form for floored division, built with Iced so the same code
//! runs natively and in the browser (WASM).
//!
//! The app only holds the raw field text and a [`Session`]. All validation,
//! display text and the terminal state come from `divide_core`.

#[cfg(not(target_arch = "wasm32"))]
mod logger;
mod ui;

use divide_core::{Page, Session};
use iced::Element;

fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    #[cfg(not(target_arch = "wasm32"))]
    logger::init_gui_logger();

    iced::application(App::new, App::update, App::view)
        .title("Divide")
        .run()
}

#[derive(Debug, Clone)]
pub enum Message {
    DividendChanged(String),
    DividerChanged(String),
    Submit,
}

/// Application state
#[derive(Debug, Default)]
pub struct App {
    pub dividend: String,
    pub divider: String,
    pub session: Session,
}

impl App {
    fn new() -> Self {
        Self::default()
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::DividendChanged(value) => self.dividend = value,
            Message::DividerChanged(value) => self.divider = value,
            Message::Submit => {
                let outcome = self.session.submit(&self.dividend, &self.divider);
                tracing::debug!(?outcome, "form submitted");
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match self.session.page() {
            Page::Form => ui::form::view(self),
            Page::Replaced(message) => ui::replaced::view(message),
        }
    }
}
