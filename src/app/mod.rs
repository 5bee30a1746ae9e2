// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page, the carousel
//! and the toast overlay.
//!
//! The `App` struct wires together the domains (carousel controller, page
//! state, localization, theme) and translates messages into side effects like
//! scroll operations or config persistence.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, TouchGesture};

use crate::carousel::{CarouselController, CarouselSettings, SlideCount, SurfaceLayout};
use crate::config::{self, Config};
use crate::error::CarouselError;
use crate::i18n::fluent::I18n;
use crate::page::content::PROJECTS;
use crate::page::Page;
use crate::ui::carousel as carousel_ui;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state that bridges the carousel, page sections,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    carousel: CarouselController,
    carousel_ui: carousel_ui::State,
    page: Page,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    /// Last known window width, drives the compact navbar.
    window_width: f32,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("slide", &self.carousel.current_index())
            .field("active_section", &self.page.active_section())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Builds the project carousel from the `[carousel]` settings.
fn build_carousel(settings: CarouselSettings) -> Result<CarouselController, CarouselError> {
    let slides = SlideCount::new(PROJECTS.len())?;
    Ok(CarouselController::new(
        slides,
        SurfaceLayout::full(slides),
        settings,
    ))
}

impl App {
    /// Initializes application state from the CLI flags and the persisted
    /// configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, flags.i18n_dir.map(PathBuf::from), &config);

        let mut app = match Self::with_config(&config, i18n) {
            Ok(app) => app,
            Err(err) => {
                // Only reachable with an empty project catalog.
                log::error!("Cannot build the project carousel: {}", err);
                std::process::exit(1);
            }
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key), Instant::now());
        }

        log::info!(
            "Starting with {} projects, locale {}",
            app.carousel.slide_count().get(),
            app.i18n.current_locale()
        );

        let task = carousel_ui::snap_track(app.carousel.frame());
        (app, task)
    }

    /// Builds the application state without touching the window or disk.
    pub fn with_config(config: &Config, i18n: I18n) -> Result<Self, CarouselError> {
        Ok(Self {
            i18n,
            theme_mode: config.general.theme_mode,
            carousel: build_carousel(config.carousel.to_settings())?,
            carousel_ui: carousel_ui::State::default(),
            page: Page::new(),
            menu_open: false,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            notifications: notifications::Manager::new(),
        })
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.page.active_section() {
            Some(section) => {
                let section_name = self.i18n.tr(section.nav_label_key());
                format!("{section_name} - {app_name}")
            }
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    /// Whether the navbar collapses into the hamburger menu.
    fn is_compact(&self) -> bool {
        self.window_width < sizing::MOBILE_BREAKPOINT
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            subscription::carousel_needs_ticks(self.carousel.state()),
            self.page.forms.is_busy(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            theme_mode: &mut self.theme_mode,
            carousel: &mut self.carousel,
            carousel_ui: &mut self.carousel_ui,
            page: &mut self.page,
            menu_open: &mut self.menu_open,
            window_width: &mut self.window_width,
            notifications: &mut self.notifications,
            now: Instant::now(),
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::Notification(notification_message) => {
                ctx.notifications
                    .handle_message(&notification_message, ctx.now);
                Task::none()
            }
            Message::PageScrolled(viewport) => update::handle_page_scrolled(&mut ctx, viewport),
            Message::ArrowKey(key) => update::handle_arrow_key(&mut ctx, key),
            Message::Touch(gesture) => update::handle_touch(&mut ctx, gesture),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::Tick(_instant) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            frame: self.carousel.frame(),
            page: &self.page,
            menu_open: self.menu_open,
            compact: self.is_compact(),
            notifications: &self.notifications,
        })
    }
}
