use iced::widget::{button, column, container, text};
use iced::{Border, Element, Length};

use crate::structures::form::FieldError;
use crate::{
    Message, Submission, error_color, label_color, panel_bg, panel_border, success_color,
};

/// Transient acknowledgment shown under the form, the stand-in for a toast.
#[derive(Debug, Clone)]
pub enum Notice {
    Confirmation(Submission),
    Validation(Vec<FieldError>),
}

pub fn view<'a>(notice: &'a Notice) -> Element<'a, Message> {
    let (title, accent, body) = match notice {
        Notice::Confirmation(submission) => (
            "You submitted the following values:",
            success_color(),
            submission.to_string(),
        ),
        Notice::Validation(errors) => (
            "Please fix the following fields:",
            error_color(),
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
        ),
    };

    container(
        column![
            text(title).color(accent),
            text(body).color(label_color()),
            button(text("Dismiss")).on_press(Message::DismissNotice),
        ]
        .spacing(8),
    )
    .padding(12)
    .width(Length::Fill)
    .style(move |_theme| container::Style {
        background: Some(panel_bg().into()),
        border: Border {
            color: panel_border(),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    })
    .into()
}
