/// Toast notification system
///
/// Transient messages stacked in the top-right corner of the window.
/// The controller pushes a toast and schedules its expiry; clicking a
/// toast dismisses it early. Errors are red, informational notices blue.

use iced::widget::{column, container, mouse_area, text};
use iced::{alignment, Border, Color, Element, Length, Shadow, Theme};
use std::time::Duration;

/// How long a toast stays on screen
pub const TOAST_TIMEOUT: Duration = Duration::from_secs(3);

/// Error toast background (#EF4040)
const ERROR_BACKGROUND: Color = Color::from_rgb(0xEF as f32 / 255.0, 0x40 as f32 / 255.0, 0x40 as f32 / 255.0);
/// Info toast background (#3A8EBA)
const INFO_BACKGROUND: Color = Color::from_rgb(0x3A as f32 / 255.0, 0x8E as f32 / 255.0, 0xBA as f32 / 255.0);

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Info,
}

/// One visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub severity: Severity,
    pub message: String,
}

/// The stack of currently visible toasts.
/// Each toast gets a unique id so a delayed expiry never dismisses a
/// newer toast that reused its slot.
#[derive(Debug, Default)]
pub struct Toasts {
    entries: Vec<(u64, Toast)>,
    next_id: u64,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a new toast and return its id for the expiry timer
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((
            id,
            Toast {
                severity,
                message: message.into(),
            },
        ));
        id
    }

    /// Remove a toast by id. A stale id (already dismissed) is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of toasts currently on screen
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Messages of the visible toasts, for tests
    #[cfg(test)]
    pub fn messages(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|(_, toast)| toast.message.as_str())
            .collect()
    }

    /// Render the toast stack, anchored to the top-right corner
    pub fn view<'a, M: Clone + 'a>(&'a self, on_dismiss: impl Fn(u64) -> M + 'a) -> Element<'a, M> {
        let cards = self.entries.iter().map(|(id, toast)| {
            let card = container(text(&toast.message).size(14))
                .padding([10.0, 14.0])
                .max_width(450)
                .style(toast_style(toast.severity));

            mouse_area(card).on_press(on_dismiss(*id)).into()
        });

        container(column(cards).spacing(8).align_x(alignment::Horizontal::Right))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .padding(16)
            .into()
    }
}

/// Container style for one toast card
fn toast_style(severity: Severity) -> impl Fn(&Theme) -> container::Style {
    move |_theme| {
        let background = match severity {
            Severity::Error => ERROR_BACKGROUND,
            Severity::Info => INFO_BACKGROUND,
        };

        container::Style {
            background: Some(background.into()),
            text_color: Some(Color::WHITE),
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
                offset: iced::Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut toasts = Toasts::new();
        assert!(toasts.is_empty());

        let first = toasts.push(Severity::Error, "Please enter a search term.");
        let second = toasts.push(Severity::Info, "reached the end");
        assert_eq!(toasts.len(), 2);

        toasts.dismiss(first);
        assert_eq!(toasts.messages(), vec!["reached the end"]);

        toasts.dismiss(second);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_stale_dismiss_is_a_noop() {
        let mut toasts = Toasts::new();
        let id = toasts.push(Severity::Info, "hello");
        toasts.dismiss(id);
        toasts.dismiss(id);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut toasts = Toasts::new();
        let first = toasts.push(Severity::Info, "a");
        toasts.dismiss(first);
        let second = toasts.push(Severity::Info, "b");
        assert_ne!(first, second);
    }
}
