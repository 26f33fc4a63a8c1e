use iced::{
    Alignment, Element, Theme,
    widget::{button, column, row, text},
};

use datetime_picker::structures::fields::TimeField;
use datetime_picker::views::notice::{self, Notice};
use datetime_picker::views::picker;
use datetime_picker::{App, Message, logic};

pub fn main() -> iced::Result {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("datetime_picker=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    iced::application(Gui::default, Gui::update, Gui::view)
        .theme(Theme::Dark)
        .centered()
        .run()
}

#[derive(Default)]
struct Gui {
    app: App,

    // View-only state: overlay visibility and the active notice.
    show_picker: bool,
    notice: Option<Notice>,
}

impl Gui {
    fn update(&mut self, message: Message) {
        match message {
            Message::OpenDatePicker => self.show_picker = true,
            Message::CancelDatePicker => self.show_picker = false,

            Message::DateSelected(date) => {
                self.show_picker = false;
                match logic::picker_date_to_naive(date) {
                    Ok(d) => self.app.select_date(Some(d)),
                    Err(e) => tracing::warn!(error = %e, "calendar produced an invalid date"),
                }
            }

            Message::HourChanged(s) => self.app.set_time_field(TimeField::Hour, &s),
            Message::MinuteChanged(s) => self.app.set_time_field(TimeField::Minute, &s),
            Message::SecondChanged(s) => self.app.set_time_field(TimeField::Second, &s),

            Message::Submit => {
                self.notice = Some(match self.app.submit() {
                    Ok(submission) => Notice::Confirmation(submission),
                    Err(errors) => Notice::Validation(errors),
                });
            }

            Message::Clear => {
                self.app.clear();
                self.notice = None;
            }

            Message::DismissNotice => self.notice = None,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = row![
            picker::date_field(&self.app, self.show_picker),
            picker::time_inputs(&self.app.form.display),
            button("Submit").on_press_maybe(self.app.can_submit().then_some(Message::Submit)),
            button("Clear").on_press_maybe(self.app.can_clear().then_some(Message::Clear)),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let mut page = column![text("DateTime"), controls].padding(16).spacing(16);

        if let Some(n) = &self.notice {
            page = page.push(notice::view(n));
        }

        page.into()
    }
}
