/// Modal image viewer
///
/// The click-to-enlarge overlay: darkened backdrop, the full-size image
/// (downloaded on demand), its tags as caption, and prev / next / close
/// controls. Keyboard navigation (Escape, arrow keys) is wired up by the
/// application's subscription.

use iced::widget::{button, center, column, container, mouse_area, opaque, row, text};
use iced::{alignment, Border, Color, ContentFit, Element, Length, Theme};

use crate::state::data::{GalleryImage, ImageLoad};

/// Which gallery image the viewer is showing.
///
/// The index points into the live gallery vector, so the viewer must be
/// told about every gallery mutation via [`Viewer::refresh`] - that is
/// what keeps the index valid and makes freshly appended images
/// reachable with next/prev.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    index: usize,
}

impl Viewer {
    /// Open the viewer at a gallery index
    pub fn open(index: usize) -> Self {
        Self { index }
    }

    /// Index of the image currently shown
    pub fn index(&self) -> usize {
        self.index
    }

    /// Re-sync with the gallery after it changed.
    /// Clamps the index so it stays valid against the new item count.
    pub fn refresh(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// Step to the next image, wrapping at the end
    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    /// Step to the previous image, wrapping at the start
    pub fn prev(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Render the overlay. Clicking the backdrop closes the viewer.
    pub fn view<'a, M: Clone + 'a>(
        &self,
        images: &'a [GalleryImage],
        on_close: M,
        on_prev: M,
        on_next: M,
    ) -> Element<'a, M> {
        let Some(image) = images.get(self.index) else {
            return column![].into();
        };

        let full_size: Element<'a, M> = match &image.full_size {
            ImageLoad::Ready(handle) => iced::widget::image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            ImageLoad::Failed => center(text("Could not load the full-size image").size(16)).into(),
            ImageLoad::Loading | ImageLoad::NotRequested => {
                center(text("Loading full-size image...").size(16)).into()
            }
        };

        let header = row![
            text(format!("{} / {}", self.index + 1, images.len())).size(14),
            iced::widget::horizontal_space(),
            button(text("\u{00D7}").size(24))
                .on_press(on_close.clone())
                .padding(0)
                .style(button::text),
        ]
        .align_y(alignment::Vertical::Center);

        let body = row![
            button(text("\u{276E}").size(28))
                .on_press(on_prev)
                .padding(8)
                .style(button::text),
            full_size,
            button(text("\u{276F}").size(28))
                .on_press(on_next)
                .padding(8)
                .style(button::text),
        ]
        .align_y(alignment::Vertical::Center)
        .spacing(8)
        .height(Length::Fill);

        let caption = text(&image.record.tags)
            .size(14)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center);

        let card = container(column![header, body, caption].spacing(10))
            .width(Length::Fixed(1100.0))
            .height(Length::Fixed(760.0))
            .padding(14)
            .style(card_style);

        opaque(
            mouse_area(center(opaque(card)).style(backdrop_style)).on_press(on_close),
        )
    }
}

fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Semi-transparent dark backdrop behind the viewer card
fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.8).into()),
        ..container::Style::default()
    }
}
