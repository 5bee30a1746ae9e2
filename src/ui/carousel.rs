// SPDX-License-Identifier: MPL-2.0
//! Carousel surface: the slide track, prev/next buttons, indicator dots and
//! the counter.
//!
//! The track is a horizontal scrollable that is never scrolled by the user.
//! [`snap_track`] moves it to the frame's relative offset, which matches
//! the `-index * 100%` translation of a strip of full-width slides.

use crate::carousel::{Frame, Input};
use crate::i18n::fluent::I18n;
use crate::page::content::Project;
use crate::page::geometry::CAROUSEL_HEIGHT;
use crate::ui::design_tokens::{palette, shadow, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::track_guard;
use iced::widget::scrollable::{Direction, RelativeOffset, Scrollbar};
use iced::widget::{
    button, mouse_area, operation, responsive, Column, Container, Id, Row, Scrollable, Text,
};
use iced::{alignment, Color, Element, Length, Point, Size, Task, Theme};

/// Widget id of the slide track.
pub const TRACK_ID: &str = "carousel-track";

/// Pointer bookkeeping for mouse drags on the track.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    pointer_x: Option<f32>,
    hovered: bool,
}

impl State {
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

/// Messages emitted by the carousel surface.
#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    GoTo(usize),
    PointerEntered,
    PointerExited,
    PointerMoved(Point),
    Pressed,
    Released,
}

/// Translates a surface message into controller inputs.
pub fn update(state: &mut State, message: Message) -> Vec<Input> {
    match message {
        Message::Previous => vec![Input::Previous],
        Message::Next => vec![Input::Next],
        Message::GoTo(index) => vec![Input::GoTo(index)],
        Message::PointerEntered => {
            state.hovered = true;
            vec![Input::PointerEnter]
        }
        Message::PointerExited => {
            state.hovered = false;
            state.pointer_x = None;
            // A drag leaving the track is abandoned.
            vec![Input::SwipeCancel, Input::PointerLeave]
        }
        Message::PointerMoved(position) => {
            state.pointer_x = Some(position.x);
            Vec::new()
        }
        Message::Pressed => state.pointer_x.map(Input::SwipeStart).into_iter().collect(),
        Message::Released => state.pointer_x.map(Input::SwipeEnd).into_iter().collect(),
    }
}

/// Scrolls the track so that the frame's slide fills the container.
pub fn snap_track<T>(frame: &Frame) -> Task<T> {
    operation::snap_to(
        Id::new(TRACK_ID),
        RelativeOffset {
            x: frame.relative_offset(),
            y: 0.0,
        },
    )
}

/// Contextual data needed to render the carousel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub frame: &'a Frame,
    pub projects: &'a [Project],
    /// Reveal state per project card.
    pub revealed: Vec<bool>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let ViewContext {
        i18n,
        frame,
        projects,
        revealed,
    } = ctx;

    let track = responsive(move |size: Size| {
        let slides = projects.iter().enumerate().fold(Row::new(), |row, (i, project)| {
            let shown = revealed.get(i).copied().unwrap_or(true);
            row.push(view_slide(project, size.width, shown, frame.is_slide_active(i)))
        });

        Scrollable::new(slides)
            .id(Id::new(TRACK_ID))
            .width(Length::Fill)
            .height(Length::Fixed(CAROUSEL_HEIGHT))
            .direction(Direction::Horizontal(Scrollbar::hidden()))
            .into()
    });

    let track = mouse_area(track_guard(Container::new(track).height(Length::Fixed(CAROUSEL_HEIGHT))))
        .on_enter(Message::PointerEntered)
        .on_exit(Message::PointerExited)
        .on_move(Message::PointerMoved)
        .on_press(Message::Pressed)
        .on_release(Message::Released);

    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(track)
        .push(view_controls(i18n, frame))
        .into()
}

fn view_slide<'a>(project: &'a Project, width: f32, shown: bool, active: bool) -> Element<'a, Message> {
    let stack = project
        .stack
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, tech| {
            row.push(
                Container::new(Text::new(*tech).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::skill_track),
            )
        });

    let card = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(project.title).size(typography::TITLE_MD))
        .push(Text::new(project.summary).size(typography::BODY_LG))
        .push(stack);

    let card = Container::new(card)
        .padding(spacing::XL)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |theme: &Theme| {
            let mut style = styles::container::card(theme);
            if !shown {
                style.text_color = style.text_color.map(|c| Color { a: 0.0, ..c });
                style.shadow = shadow::NONE;
            }
            if active {
                style.border.color = palette::PRIMARY_500;
            }
            style
        });

    Container::new(card)
        .padding(spacing::MD)
        .width(Length::Fixed(width))
        .height(Length::Fixed(CAROUSEL_HEIGHT))
        .into()
}

fn view_controls<'a>(i18n: &'a I18n, frame: &Frame) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center);

    if let Some(disabled) = frame.prev_disabled {
        row = row.push(control_button("‹", (!disabled).then_some(Message::Previous)));
    }

    if frame.indicators > 0 {
        let dots = (0..frame.indicators).fold(Row::new().spacing(spacing::XS), |row, i| {
            row.push(
                button(Text::new(""))
                    .width(Length::Fixed(sizing::INDICATOR))
                    .height(Length::Fixed(sizing::INDICATOR))
                    .on_press(Message::GoTo(i))
                    .style(styles::button::indicator(frame.is_indicator_active(i))),
            )
        });
        row = row.push(dots);
    }

    if let Some(disabled) = frame.next_disabled {
        row = row.push(control_button("›", (!disabled).then_some(Message::Next)));
    }

    if let Some(counter) = frame.counter {
        let current = counter.current.to_string();
        let total = counter.total.to_string();
        row = row.push(
            Text::new(i18n.tr_with_args(
                "carousel-counter",
                &[("current", current.as_str()), ("total", total.as_str())],
            ))
            .size(typography::BODY),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn control_button<'a>(glyph: &'a str, on_press: Option<Message>) -> Element<'a, Message> {
    button(
        Text::new(glyph)
            .size(typography::TITLE_MD)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(sizing::CAROUSEL_BUTTON))
    .height(Length::Fixed(sizing::CAROUSEL_BUTTON))
    .on_press_maybe(on_press)
    .style(styles::button::carousel_control)
    .into()
}
