// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a header over an empty viewer surface.
//!
//! The window plays the role of the host screen: it reports its size as the
//! container, simulates a fixed top safe-area inset, pages through a fixed
//! page count with the arrow keys, and closes when the close control fires.

mod subscription;

use crate::config::HeaderConfig;
use crate::header::{EnvironmentProvider, Event, Header, Insets};
use crate::ui::header_view;
use crate::ui::styles;
use iced::widget::{Column, Container, Space};
use iced::{window, Element, Length, Size, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: f32 = 390.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 844.0;

/// Runtime flags passed from the command line.
#[derive(Debug, Clone)]
pub struct Flags {
    pub config: HeaderConfig,
    /// Simulated top safe-area inset.
    pub safe_top: f32,
    /// Number of pages to page through.
    pub pages: i64,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header_view::Message),
    WindowResized(Size),
    NextPage,
    PreviousPage,
    Exit,
}

/// Window-backed environment.
#[derive(Debug, Clone, Copy)]
struct WindowEnvironment {
    size: Size,
    safe_top: f32,
}

impl EnvironmentProvider for WindowEnvironment {
    fn container_size(&self) -> Size {
        self.size
    }

    fn safe_area_insets(&self) -> Insets {
        Insets::top(self.safe_top)
    }
}

pub struct App {
    header: Header,
    environment: WindowEnvironment,
    current_page: i64,
    pages: i64,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call only
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = Self::with_flags(flags);
        app.header.on_layout_requested(&app.environment);
        (app, Task::none())
    }

    fn with_flags(flags: Flags) -> Self {
        let pages = flags.pages.max(1);
        let mut header = Header::new(&flags.config);
        header.update_page(1, pages);

        Self {
            header,
            environment: WindowEnvironment {
                size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
                safe_top: flags.safe_top,
            },
            current_page: 1,
            pages,
        }
    }

    fn title(&self) -> String {
        format!("Lens Header - {}", self.header.page_text())
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(msg) => match header_view::update(&self.header, msg) {
                Event::ClosePressed => return iced::exit(),
                Event::DeletePressed => {
                    tracing::info!("Delete pressed on page {}", self.current_page);
                }
                Event::SharePressed => {
                    tracing::info!("Share pressed on page {}", self.current_page);
                }
                Event::None => {}
            },
            Message::WindowResized(size) => {
                self.environment.size = size;
                self.header.on_bounds_changed(&self.environment);
            }
            Message::NextPage => self.go_to(self.current_page.saturating_add(1)),
            Message::PreviousPage => self.go_to(self.current_page.saturating_sub(1)),
            Message::Exit => return iced::exit(),
        }
        Task::none()
    }

    fn go_to(&mut self, page: i64) {
        self.header.update_page(page, self.pages);
        if let Some(state) = self.header.page() {
            self.current_page = state.current();
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = header_view::view(&self.header).map(Message::Header);
        let surface = Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::viewer_surface);

        Column::new().push(header).push(surface).into()
    }
}
