// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page scrolls underneath a fixed navbar; the mobile menu backdrop and
//! the toasts are stacked on top.

use super::update::PAGE_ID;
use super::Message;
use crate::carousel::Frame;
use crate::i18n::fluent::I18n;
use crate::page::Page;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::sections::{self, ViewContext as SectionsViewContext};
use crate::ui::theming::ThemeMode;
use chrono::Datelike;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{mouse_area, Container, Id, Scrollable, Space, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub frame: &'a Frame,
    pub page: &'a Page,
    pub menu_open: bool,
    pub compact: bool,
    pub notifications: &'a Manager,
}

/// Renders the page, the navbar and the overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = sections::view(SectionsViewContext {
        i18n: ctx.i18n,
        page: ctx.page,
        frame: ctx.frame,
        year: chrono::Local::now().year(),
    })
    .map(Message::Page);

    let page = Scrollable::new(content)
        .id(Id::new(PAGE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(Scrollbar::default()))
        .on_scroll(Message::PageScrolled);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    // Clicking outside the dropdown closes it.
    if ctx.compact && ctx.menu_open {
        layers = layers.push(
            mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
                .on_press(Message::Navbar(navbar::Message::CloseMenu)),
        );
    }

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
        active_section: ctx.page.active_section(),
        theme_mode: ctx.theme_mode,
        compact: ctx.compact,
    })
    .map(Message::Navbar);
    layers = layers.push(Container::new(navbar_view).width(Length::Fill));

    if let Some(toasts) = Toast::view_overlay(ctx.notifications, ctx.i18n) {
        layers = layers.push(toasts.map(Message::Notification));
    }

    layers.into()
}
