use iced::widget::{button, row, text, text_input};
use iced::{Alignment, Element};
use iced_aw::DatePicker;

use crate::structures::form::DisplayTime;
use crate::{App, Message, logic};

/// The date button plus the calendar overlay anchored to it. The button
/// label echoes the current selection, or a prompt when nothing is picked.
pub fn date_field<'a>(app: &'a App, show_picker: bool) -> Element<'a, Message> {
    let label = match app.form.date {
        Some(date) => format!(
            "{} {}",
            logic::format_date(date),
            logic::format_time(&app.form.display)
        ),
        None => String::from("Choose a date and time"),
    };

    let underlay = button(text(label))
        .on_press(Message::OpenDatePicker)
        .width(280);

    DatePicker::new(
        show_picker,
        app.picker_date(),
        underlay,
        Message::CancelDatePicker,
        Message::DateSelected,
    )
    .into()
}

/// Three colon-separated numeric inputs showing the zero-padded display
/// strings; every keystroke goes through the normalizer.
pub fn time_inputs<'a>(display: &'a DisplayTime) -> Element<'a, Message> {
    row![
        text_input("HH", &display.hour)
            .on_input(Message::HourChanged)
            .width(56),
        text(":"),
        text_input("MM", &display.minute)
            .on_input(Message::MinuteChanged)
            .width(56),
        text(":"),
        text_input("SS", &display.second)
            .on_input(Message::SecondChanged)
            .width(56),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}
