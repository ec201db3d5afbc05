//! The division form
//!
//! Two labeled inputs, a Divide button and the result line underneath.
//! Pressing Enter in either input submits, same as the button.

use iced::widget::{button, column, container, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length};

use crate::{App, Message};

/// Render the form
pub fn view(app: &App) -> Element<'_, Message> {
    let form: Column<'_, Message> = column![
        text("Divide").size(18),
        Space::new().height(8),
        labeled_input("Dividend:", &app.dividend, Message::DividendChanged),
        labeled_input("Divider:", &app.divider, Message::DividerChanged),
        Space::new().height(4),
        button(text("Divide").size(12)).on_press(Message::Submit),
        Space::new().height(12),
        text(app.session.sink().text()).size(14),
    ]
    .spacing(6);

    container(form.padding(8))
        .width(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Helper to create a labeled text input that submits on Enter
fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(80.0)),
        text_input("", value)
            .on_input(on_change)
            .on_submit(Message::Submit)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
