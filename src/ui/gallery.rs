/// Gallery grid renderer
///
/// A pure function of the gallery data: one card per image record,
/// laid out in a wrapping grid. Clicking a card opens the modal viewer
/// at that image's index.

use iced::widget::{button, column, container, row, text};
use iced::{alignment, Border, Color, ContentFit, Element, Length, Theme};
use iced_aw::Wrap;

use crate::api::ImageRecord;
use crate::state::data::{GalleryImage, ImageLoad};

/// Width of one gallery card
pub const CARD_WIDTH: f32 = 320.0;
/// Height of the thumbnail area inside a card
const THUMB_HEIGHT: f32 = 200.0;
/// Full height of one gallery card (thumbnail + caption + stats)
pub const CARD_HEIGHT: f32 = 268.0;
/// Gap between cards in the grid
pub const GRID_SPACING: f32 = 16.0;

/// Render the whole gallery grid
pub fn view<'a, M: Clone + 'a>(
    images: &'a [GalleryImage],
    on_open: impl Fn(usize) -> M + 'a,
) -> Element<'a, M> {
    let elements = cards(images, on_open);

    container(Wrap::with_elements(elements).spacing(GRID_SPACING).line_spacing(GRID_SPACING))
        .width(Length::Fill)
        .into()
}

/// Build one card element per record, in order
fn cards<'a, M: Clone + 'a>(
    images: &'a [GalleryImage],
    on_open: impl Fn(usize) -> M + 'a,
) -> Vec<Element<'a, M>> {
    images
        .iter()
        .enumerate()
        .map(|(index, image)| card(image, on_open(index)))
        .collect()
}

/// The caption and counter labels for one record, verbatim from the API
pub fn stats(record: &ImageRecord) -> [(&'static str, String); 4] {
    [
        ("Likes", record.likes.to_string()),
        ("Views", record.views.to_string()),
        ("Comments", record.comments.to_string()),
        ("Downloads", record.downloads.to_string()),
    ]
}

/// One gallery card: clickable thumbnail, tags caption, stat row
fn card<'a, M: Clone + 'a>(image: &'a GalleryImage, on_open: M) -> Element<'a, M> {
    let thumbnail: Element<'a, M> = match &image.thumbnail {
        ImageLoad::Ready(handle) => iced::widget::image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(THUMB_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        ImageLoad::Failed => placeholder("image unavailable"),
        ImageLoad::Loading | ImageLoad::NotRequested => placeholder("Loading..."),
    };

    let stat_row = row(stats(&image.record).map(|(label, value)| {
        container(
            column![
                text(label).size(12),
                text(value).size(12),
            ]
            .align_x(alignment::Horizontal::Center)
            .spacing(2),
        )
        .width(Length::FillPortion(1))
        .align_x(alignment::Horizontal::Center)
        .into()
    }))
    .width(Length::Fill);

    let content = column![
        button(thumbnail).on_press(on_open).padding(0).style(button::text),
        text(&image.record.tags).size(12),
        stat_row,
    ]
    .spacing(6);

    container(content)
        .width(Length::Fixed(CARD_WIDTH))
        .height(Length::Fixed(CARD_HEIGHT))
        .padding(4)
        .style(card_style)
        .into()
}

/// Fixed-size placeholder shown while a thumbnail downloads or after it
/// fails
fn placeholder<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    container(text(label).size(14))
        .width(Length::Fill)
        .height(Length::Fixed(THUMB_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(placeholder_style)
        .into()
}

fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

fn placeholder_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgba(0.5, 0.5, 0.5, 0.15).into()),
        ..container::Style::default()
    }
}
