use iced::keyboard;
use iced::widget::image::Handle;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{button, column, container, row, scrollable, stack, text, text_input};
use iced::{alignment, Element, Length, Subscription, Task, Theme};

mod api;
mod config;
mod state;
mod ui;

use api::{ImageRecord, SearchClient, SearchError, SearchResponse};
use config::Settings;
use state::data::{decode_image, GalleryImage, ImageLoad};
use state::session::{self, SearchSession};
use ui::gallery;
use ui::toast::{Severity, Toasts, TOAST_TIMEOUT};
use ui::viewer::Viewer;

/// Main application state
///
/// This is the search session controller: it owns the session, the
/// rendered gallery, the modal viewer and the toast stack, and it is the
/// only thing that mutates any of them.
struct PixGrid {
    /// HTTP client for the Pixabay API
    client: SearchClient,
    /// Pagination state for the current query
    session: SearchSession,
    /// Everything currently rendered in the gallery grid
    images: Vec<GalleryImage>,
    /// Live contents of the search field
    input: String,
    /// A first-page request is in flight (disables submit)
    searching: bool,
    /// A load-more request is in flight (replaces the button with its loader)
    loading_more: bool,
    /// The modal viewer, when open
    viewer: Option<Viewer>,
    /// Transient notifications
    toasts: Toasts,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User edited the search field
    InputChanged(String),
    /// User submitted the search form
    SearchSubmitted,
    /// First page of a query arrived (or failed)
    PageLoaded {
        query: String,
        result: Result<SearchResponse, SearchError>,
    },
    /// User pressed the "Load more" button
    LoadMorePressed,
    /// A subsequent page arrived (or failed)
    MorePageLoaded {
        query: String,
        result: Result<SearchResponse, SearchError>,
    },
    /// A gallery thumbnail finished downloading (None = failed)
    ThumbnailLoaded { id: u64, handle: Option<Handle> },
    /// A full-size image for the viewer finished downloading
    FullSizeLoaded { id: u64, handle: Option<Handle> },
    /// User clicked a gallery card
    ViewerOpened(usize),
    ViewerClosed,
    ViewerPrev,
    ViewerNext,
    /// Keyboard shortcut (viewer navigation)
    KeyPressed(keyboard::Key),
    /// A toast expired or was clicked away
    ToastDismissed(u64),
}

/// Scrollable id of the gallery, needed for the load-more scroll step
fn gallery_scroll_id() -> scrollable::Id {
    scrollable::Id::new("gallery")
}

impl PixGrid {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // Without an API credential the app cannot do anything useful
        let settings = match Settings::load() {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("❌ {}", err);
                std::process::exit(1);
            }
        };

        println!("🖼️  PixGrid initialized");

        (Self::with_settings(settings), Task::none())
    }

    /// Build the application state from loaded settings
    fn with_settings(settings: Settings) -> Self {
        PixGrid {
            client: SearchClient::new(settings.api_key),
            session: SearchSession::new(),
            images: Vec::new(),
            input: String::new(),
            searching: false,
            loading_more: false,
            viewer: None,
            toasts: Toasts::new(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                Task::none()
            }

            Message::SearchSubmitted => {
                // The submit control is disabled while its own request
                // is outstanding
                if self.searching {
                    return Task::none();
                }

                let Some(query) = session::normalize_query(&self.input) else {
                    return self.notify(Severity::Error, "Please enter a search term.");
                };

                self.session.begin(&query);
                self.images.clear();
                self.viewer = None;
                self.searching = true;
                self.loading_more = false;

                let client = self.client.clone();
                Task::perform(
                    async move {
                        let result = client.fetch_page(&query, 1).await;
                        (query, result)
                    },
                    |(query, result)| Message::PageLoaded { query, result },
                )
            }

            Message::PageLoaded { query, result } => {
                // A late response for a query the user has moved past
                if query != self.session.query() {
                    println!("⚠️  Discarding stale response for '{}'", query);
                    return Task::none();
                }

                // Guaranteed cleanup on every branch below
                self.searching = false;
                self.input.clear();

                match result {
                    Ok(page) => {
                        if page.hits.is_empty() {
                            return self.notify(
                                Severity::Error,
                                "Sorry, there are no images matching \
                                 your search query. Please try again!",
                            );
                        }

                        self.session.record_total(page.total_hits);
                        println!(
                            "🔍 '{}': {} hits total",
                            self.session.query(),
                            page.total_hits
                        );

                        let fetches = self.append_images(page.hits);

                        if self.session.total_pages() > 1 {
                            fetches
                        } else {
                            let notice = self.end_of_results_notice();
                            Task::batch([fetches, notice])
                        }
                    }
                    Err(err) => self.notify(
                        Severity::Error,
                        format!("An error occurred while fetching images: {}", err),
                    ),
                }
            }

            Message::LoadMorePressed => {
                // Only invocable while the control is enabled
                if self.loading_more
                    || self.searching
                    || self.images.is_empty()
                    || self.session.is_exhausted()
                {
                    return Task::none();
                }

                // The counter stays advanced even if this fetch fails
                let page = self.session.advance();
                self.loading_more = true;

                let client = self.client.clone();
                let query = self.session.query().to_string();
                Task::perform(
                    async move {
                        let result = client.fetch_page(&query, page).await;
                        (query, result)
                    },
                    |(query, result)| Message::MorePageLoaded { query, result },
                )
            }

            Message::MorePageLoaded { query, result } => {
                if query != self.session.query() {
                    println!("⚠️  Discarding stale response for '{}'", query);
                    return Task::none();
                }

                self.loading_more = false;

                match result {
                    Ok(page) => {
                        // Append, never clear
                        let fetches = self.append_images(page.hits);

                        // Bring the newly loaded rows into view
                        let scroll = scrollable::scroll_by(
                            gallery_scroll_id(),
                            AbsoluteOffset {
                                x: 0.0,
                                y: 2.0 * (gallery::CARD_HEIGHT + gallery::GRID_SPACING),
                            },
                        );

                        if self.session.is_exhausted() {
                            let notice = self.end_of_results_notice();
                            Task::batch([fetches, scroll, notice])
                        } else {
                            Task::batch([fetches, scroll])
                        }
                    }
                    Err(err) => self.notify(
                        Severity::Error,
                        format!("An error occurred while fetching more images: {}", err),
                    ),
                }
            }

            Message::ThumbnailLoaded { id, handle } => {
                // A thumbnail for a cleared gallery simply finds no record
                if let Some(image) = self.images.iter_mut().find(|image| image.record.id == id) {
                    image.thumbnail = match handle {
                        Some(handle) => ImageLoad::Ready(handle),
                        None => ImageLoad::Failed,
                    };
                }
                Task::none()
            }

            Message::FullSizeLoaded { id, handle } => {
                if let Some(image) = self.images.iter_mut().find(|image| image.record.id == id) {
                    image.full_size = match handle {
                        Some(handle) => ImageLoad::Ready(handle),
                        None => ImageLoad::Failed,
                    };
                }
                Task::none()
            }

            Message::ViewerOpened(index) => {
                if index >= self.images.len() {
                    return Task::none();
                }
                self.viewer = Some(Viewer::open(index));
                self.request_full_size(index)
            }

            Message::ViewerClosed => {
                self.viewer = None;
                Task::none()
            }

            Message::ViewerPrev => {
                let Some(mut viewer) = self.viewer else {
                    return Task::none();
                };
                viewer.prev(self.images.len());
                self.viewer = Some(viewer);
                self.request_full_size(viewer.index())
            }

            Message::ViewerNext => {
                let Some(mut viewer) = self.viewer else {
                    return Task::none();
                };
                viewer.next(self.images.len());
                self.viewer = Some(viewer);
                self.request_full_size(viewer.index())
            }

            Message::KeyPressed(key) => {
                if self.viewer.is_none() {
                    return Task::none();
                }
                match key {
                    keyboard::Key::Named(keyboard::key::Named::Escape) => {
                        self.update(Message::ViewerClosed)
                    }
                    keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                        self.update(Message::ViewerPrev)
                    }
                    keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                        self.update(Message::ViewerNext)
                    }
                    _ => Task::none(),
                }
            }

            Message::ToastDismissed(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
        }
    }

    /// Append freshly fetched records to the gallery, keep the viewer's
    /// index in sync, and kick off one thumbnail download per record
    fn append_images(&mut self, records: Vec<ImageRecord>) -> Task<Message> {
        let downloads: Vec<Task<Message>> = records
            .iter()
            .map(|record| {
                let client = self.client.clone();
                let url = record.preview_url.clone();
                let id = record.id;
                Task::perform(
                    async move { (id, load_image(client, url).await) },
                    |(id, handle)| Message::ThumbnailLoaded { id, handle },
                )
            })
            .collect();

        self.images.extend(records.into_iter().map(GalleryImage::new));

        // The viewer indexes into the gallery, so every mutation must
        // re-sync it
        if let Some(viewer) = &mut self.viewer {
            viewer.refresh(self.images.len());
        }

        Task::batch(downloads)
    }

    /// Start the full-size download for an image, unless it is already
    /// loaded or loading
    fn request_full_size(&mut self, index: usize) -> Task<Message> {
        let Some(image) = self.images.get_mut(index) else {
            return Task::none();
        };

        match image.full_size {
            ImageLoad::Ready(_) | ImageLoad::Loading => Task::none(),
            ImageLoad::NotRequested | ImageLoad::Failed => {
                image.full_size = ImageLoad::Loading;

                let client = self.client.clone();
                let url = image.record.full_size_url.clone();
                let id = image.record.id;
                Task::perform(
                    async move { (id, load_image(client, url).await) },
                    |(id, handle)| Message::FullSizeLoaded { id, handle },
                )
            }
        }
    }

    /// Show a toast and schedule its expiry
    fn notify(&mut self, severity: Severity, message: impl Into<String>) -> Task<Message> {
        let id = self.toasts.push(severity, message);
        Task::perform(tokio::time::sleep(TOAST_TIMEOUT), move |_| {
            Message::ToastDismissed(id)
        })
    }

    /// The exhaustion notice, fired exactly once per query - on the call
    /// that crosses the last page (or right away for a single page)
    fn end_of_results_notice(&mut self) -> Task<Message> {
        self.notify(
            Severity::Info,
            "We're sorry, but you've reached the end of search results.",
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let search_bar = row![
            text_input("Search images...", &self.input)
                .on_input(Message::InputChanged)
                .on_submit(Message::SearchSubmitted)
                .padding(10),
            button(text("Search"))
                .on_press_maybe((!self.searching).then_some(Message::SearchSubmitted))
                .padding(10),
        ]
        .spacing(8);

        let body: Element<Message> = if self.searching {
            centered_hint("Loading images...")
        } else if self.images.is_empty() {
            centered_hint("Search for images to get started")
        } else {
            gallery::view(&self.images, Message::ViewerOpened)
        };

        // Visible only while more pages remain; swapped for its own
        // loading indicator during the request
        let load_more: Element<Message> = if self.loading_more {
            container(text("Loading more...").size(14))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .padding(12)
                .into()
        } else if !self.images.is_empty() && self.session.has_more() && !self.searching {
            container(
                button(text("Load more"))
                    .on_press(Message::LoadMorePressed)
                    .padding(10),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(12)
            .into()
        } else {
            column![].into()
        };

        let content = scrollable(column![body, load_more].spacing(12).padding(16))
            .id(gallery_scroll_id())
            .width(Length::Fill)
            .height(Length::Fill);

        let base = container(column![container(search_bar).padding(16), content])
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers: Vec<Element<Message>> = vec![base.into()];

        if let Some(viewer) = &self.viewer {
            layers.push(viewer.view(
                &self.images,
                Message::ViewerClosed,
                Message::ViewerPrev,
                Message::ViewerNext,
            ));
        }

        if !self.toasts.is_empty() {
            layers.push(self.toasts.view(Message::ToastDismissed));
        }

        stack(layers).into()
    }

    /// Keyboard shortcuts for the modal viewer
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| Some(Message::KeyPressed(key)))
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Centered hint shown instead of the gallery (loading / empty states)
fn centered_hint(message: &str) -> Element<Message> {
    container(text(message).size(16))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(48)
        .into()
}

/// Download and decode one image tier in the background.
/// Returns `None` on any failure - a broken image never takes the
/// session down.
async fn load_image(client: SearchClient, url: String) -> Option<Handle> {
    let bytes = match client.fetch_image(&url).await {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("⚠️  Image download failed: {}", err);
            return None;
        }
    };

    // Decode on a blocking thread - image decoding is CPU-bound
    match tokio::task::spawn_blocking(move || decode_image(&bytes)).await {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("⚠️  Decode task failed: {}", err);
            None
        }
    }
}

fn main() -> iced::Result {
    iced::application("PixGrid", PixGrid::update, PixGrid::view)
        .theme(PixGrid::theme)
        .subscription(PixGrid::subscription)
        .centered()
        .run_with(PixGrid::new)
}
