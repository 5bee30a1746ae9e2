// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar with section links, the mobile hamburger menu and
//! the theme toggle.
//!
//! On narrow windows the links collapse into a dropdown. Choosing a link (or
//! clicking anywhere outside the dropdown) closes it.

use crate::i18n::fluent::I18n;
use crate::page::geometry::NAVBAR_HEIGHT;
use crate::page::SectionId;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, container, tooltip, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    /// Section currently under the navbar, highlighted in the links.
    pub active_section: Option<SectionId>,
    pub theme_mode: ThemeMode,
    /// Collapse the links into the hamburger menu.
    pub compact: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    GoTo(SectionId),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ScrollTo(SectionId),
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::GoTo(section) => {
            *menu_open = false;
            Event::ScrollTo(section)
        }
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar (and the dropdown when open).
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(build_top_bar(&ctx));

    if ctx.compact && ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("brand-name")).size(typography::TITLE_MD);

    let theme_toggle = button(Text::new(ctx.theme_mode.toggle_icon()).size(typography::TITLE_MD))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(styles::button::ghost);
    let toggle_hint = Text::new(ctx.i18n.tr(ctx.theme_mode.toggle_label_key()))
        .size(typography::CAPTION);
    let theme_toggle = tooltip(
        theme_toggle,
        Container::new(toggle_hint)
            .padding(spacing::XS)
            .style(styles::container::card),
        tooltip::Position::Bottom,
    );

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::LG])
        .height(Length::Fixed(NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        let hamburger = button(Text::new(if ctx.menu_open { "✕" } else { "☰" }))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(styles::button::ghost);
        row = row.push(theme_toggle).push(hamburger);
    } else {
        for section in SectionId::ALL {
            row = row.push(build_link(ctx, section));
        }
        row = row.push(theme_toggle);
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let links = SectionId::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, section| {
            column.push(build_link(ctx, section))
        });

    Container::new(links)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::card)
        .into()
}

fn build_link<'a>(ctx: &ViewContext<'a>, section: SectionId) -> Element<'a, Message> {
    let active = ctx.active_section == Some(section);
    let mut link = button(Text::new(ctx.i18n.tr(section.nav_label_key())).size(typography::BODY_LG))
        .on_press(Message::GoTo(section))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav_link(active));
    if ctx.compact {
        link = link.width(Length::Fill);
    }
    container(link).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(i18n: &I18n, compact: bool, menu_open: bool) -> ViewContext<'_> {
        ViewContext {
            i18n,
            menu_open,
            active_section: Some(SectionId::About),
            theme_mode: ThemeMode::Light,
            compact,
        }
    }

    #[test]
    fn navbar_view_renders_in_every_layout() {
        let i18n = I18n::default();
        let _wide = view(ctx(&i18n, false, false));
        let _compact = view(ctx(&i18n, true, false));
        let _open = view(ctx(&i18n, true, true));
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        assert_eq!(update(Message::ToggleMenu, &mut menu_open), Event::None);
        assert!(menu_open);
        assert_eq!(update(Message::ToggleMenu, &mut menu_open), Event::None);
        assert!(!menu_open);
    }

    #[test]
    fn link_closes_menu_and_scrolls() {
        let mut menu_open = true;
        let event = update(Message::GoTo(SectionId::Projects), &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::ScrollTo(SectionId::Projects));
    }

    #[test]
    fn outside_click_closes_menu() {
        let mut menu_open = true;
        update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);
    }

    #[test]
    fn theme_toggle_leaves_menu_alone() {
        let mut menu_open = true;
        assert_eq!(update(Message::ToggleTheme, &mut menu_open), Event::ToggleTheme);
        assert!(menu_open);
    }
}
