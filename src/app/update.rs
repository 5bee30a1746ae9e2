// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Every handler receives an [`UpdateContext`] borrowing the parts of `App`
//! it may touch, plus the instant the message is processed at.

use super::persistence;
use super::{Message, TouchGesture};
use crate::carousel::{ArrowKey, CarouselController, Input, Outcome};
use crate::i18n::fluent::I18n;
use crate::page::forms::{Field, FormError, FormKind, CV_FILE_NAME};
use crate::page::{Page, SectionId, Submit};
use crate::ui::carousel as carousel_ui;
use crate::ui::design_tokens::sizing;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::sections;
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{operation, Id};
use iced::{Size, Task};
use std::time::Instant;

/// Widget id of the page scrollable.
pub const PAGE_ID: &str = "page";

/// Mutable view of `App` handed to the message handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: &'a mut ThemeMode,
    pub carousel: &'a mut CarouselController,
    pub carousel_ui: &'a mut carousel_ui::State,
    pub page: &'a mut Page,
    pub menu_open: &'a mut bool,
    pub window_width: &'a mut f32,
    pub notifications: &'a mut notifications::Manager,
    pub now: Instant,
}

impl UpdateContext<'_> {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification, self.now);
    }
}

/// Feeds one input to the carousel and snaps the track when a frame was
/// rendered.
pub fn dispatch_carousel(ctx: &mut UpdateContext<'_>, input: Input) -> Task<Message> {
    match ctx.carousel.dispatch(input) {
        Ok(Outcome::Moved { from, to }) => {
            log::debug!("Carousel moved from {} to {} ({:?})", from, to, input);
            carousel_ui::snap_track(ctx.carousel.frame())
        }
        Ok(Outcome::Rendered) => carousel_ui::snap_track(ctx.carousel.frame()),
        Ok(Outcome::Ignored(reason)) => {
            log::trace!("Carousel ignored {:?}: {:?}", input, reason);
            Task::none()
        }
        Ok(Outcome::Paused | Outcome::Resumed | Outcome::Idle) => Task::none(),
        Err(err) => {
            log::warn!("{}", err);
            ctx.notify(Notification::error(err.i18n_key()));
            Task::none()
        }
    }
}

fn dispatch_all(ctx: &mut UpdateContext<'_>, inputs: Vec<Input>) -> Task<Message> {
    let tasks: Vec<Task<Message>> = inputs
        .into_iter()
        .map(|input| dispatch_carousel(ctx, input))
        .collect();
    Task::batch(tasks)
}

/// Scrolls the page so that `section` sits just below the navbar.
fn scroll_to_section(ctx: &UpdateContext<'_>, section: SectionId) -> Task<Message> {
    operation::snap_to(
        Id::new(PAGE_ID),
        RelativeOffset {
            x: 0.0,
            y: ctx.page.relative_scroll_target(section),
        },
    )
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ScrollTo(section) => scroll_to_section(ctx, section),
        NavbarEvent::ToggleTheme => {
            *ctx.theme_mode = ctx.theme_mode.toggled();
            log::info!("Theme switched to {:?}", ctx.theme_mode);
            if let Some(key) = persistence::persist_theme_mode(*ctx.theme_mode) {
                ctx.notify(Notification::warning(key));
            }
            Task::none()
        }
    }
}

pub fn handle_page_message(
    ctx: &mut UpdateContext<'_>,
    message: sections::Message,
) -> Task<Message> {
    match message {
        sections::Message::GoTo(section) => scroll_to_section(ctx, section),
        sections::Message::DownloadCv => {
            if ctx.page.forms.cv.request(ctx.now) == Submit::Started {
                log::info!("Preparing {}", CV_FILE_NAME);
            }
            Task::none()
        }
        sections::Message::ContactChanged(field, value) => {
            let contact = &mut ctx.page.forms.contact;
            match field {
                Field::Name => contact.name = value,
                Field::Email => contact.email = value,
                Field::Subject => contact.subject = value,
                Field::Message => contact.message = value,
            }
            Task::none()
        }
        sections::Message::SubmitContact => {
            let result = ctx.page.forms.contact.submit(ctx.now);
            handle_submit(ctx, FormKind::Contact, result)
        }
        sections::Message::NewsletterChanged(value) => {
            ctx.page.forms.newsletter.email = value;
            Task::none()
        }
        sections::Message::SubscribeNewsletter => {
            let result = ctx.page.forms.newsletter.submit(ctx.now);
            handle_submit(ctx, FormKind::Newsletter, result)
        }
        sections::Message::Carousel(carousel_message) => {
            let inputs = carousel_ui::update(ctx.carousel_ui, carousel_message);
            dispatch_all(ctx, inputs)
        }
    }
}

fn handle_submit(
    ctx: &mut UpdateContext<'_>,
    kind: FormKind,
    result: Result<Submit, FormError>,
) -> Task<Message> {
    match result {
        Ok(Submit::Started) => log::info!("{:?} submission started", kind),
        Ok(Submit::InFlight) => log::debug!("{:?} submission already in flight", kind),
        Err(err) => {
            let mut notification = Notification::warning(err.i18n_key());
            if let FormError::MissingField(field) = err {
                notification = notification.with_arg("field", ctx.i18n.tr(field.label_key()));
            }
            ctx.notify(notification);
        }
    }
    Task::none()
}

pub fn handle_page_scrolled(ctx: &mut UpdateContext<'_>, viewport: Viewport) -> Task<Message> {
    let offset = viewport.absolute_offset();
    let revealed = ctx.page.on_scroll(offset.y, viewport.bounds().height);
    for target in revealed {
        log::debug!("Revealed {:?}", target);
    }
    Task::none()
}

pub fn handle_arrow_key(ctx: &mut UpdateContext<'_>, key: ArrowKey) -> Task<Message> {
    dispatch_carousel(ctx, Input::Key(key))
}

/// Touch swipes only count when the finger lands on the carousel track.
pub fn handle_touch(ctx: &mut UpdateContext<'_>, gesture: TouchGesture) -> Task<Message> {
    match gesture {
        TouchGesture::Pressed(position) if ctx.page.is_over_carousel(position.y) => {
            dispatch_carousel(ctx, Input::SwipeStart(position.x))
        }
        TouchGesture::Pressed(_) => Task::none(),
        TouchGesture::Lifted(position) if ctx.carousel.is_swiping() => {
            dispatch_carousel(ctx, Input::SwipeEnd(position.x))
        }
        TouchGesture::Lifted(_) => Task::none(),
        TouchGesture::Lost => dispatch_carousel(ctx, Input::SwipeCancel),
    }
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_width = size.width;
    if size.width >= sizing::MOBILE_BREAKPOINT {
        *ctx.menu_open = false;
    }
    dispatch_carousel(ctx, Input::Resize)
}

/// Advances every deadline: carousel lock and auto-advance, form delays,
/// and toast expiry.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let task = dispatch_carousel(ctx, Input::Tick);

    for kind in ctx.page.forms.tick(ctx.now) {
        let mut notification = Notification::success(kind.success_key());
        if kind == FormKind::CvDownload {
            notification = notification.with_arg("file", CV_FILE_NAME);
        }
        ctx.notify(notification);
    }

    ctx.notifications.tick(ctx.now);
    task
}
