// SPDX-License-Identifier: MPL-2.0
//! The scrolling page: home, about, skills, projects and contact sections.
//!
//! Every section is laid out at the fixed height given by
//! [`crate::page::geometry`], so scroll offsets reported by the page
//! scrollable line up with [`crate::page::SectionLayout`].

use crate::carousel::Frame;
use crate::i18n::fluent::I18n;
use crate::page::content::{SkillCategory, PROJECTS, SKILLS};
use crate::page::forms::Field;
use crate::page::{geometry, Page, Phase, RevealTarget, SectionId};
use crate::ui::carousel;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by page sections.
#[derive(Debug, Clone)]
pub enum Message {
    GoTo(SectionId),
    DownloadCv,
    ContactChanged(Field, String),
    SubmitContact,
    NewsletterChanged(String),
    SubscribeNewsletter,
    Carousel(carousel::Message),
}

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a Page,
    pub frame: &'a Frame,
    /// Year printed in the footer.
    pub year: i32,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(section(SectionId::Home, geometry::HOME_HEIGHT, view_home(&ctx)))
        .push(section(SectionId::About, geometry::ABOUT_HEIGHT, view_about(&ctx)))
        .push(section(SectionId::Skills, geometry::skills_height(), view_skills(&ctx)))
        .push(section(
            SectionId::Projects,
            geometry::projects_height(),
            view_projects(&ctx),
        ))
        .push(section(SectionId::Contact, geometry::CONTACT_HEIGHT, view_contact(&ctx)))
        .into()
}

fn section<'a>(id: SectionId, height: f32, content: Element<'a, Message>) -> Element<'a, Message> {
    let alternate = SectionId::ALL.iter().position(|s| *s == id).unwrap_or(0) % 2 == 1;
    let inner = Container::new(content)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .width(Length::Fill)
        .padding([0.0, spacing::LG]);

    Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::section(alternate))
        .into()
}

fn header<'a>(i18n: &I18n, title_key: &str) -> Element<'a, Message> {
    Container::new(Text::new(i18n.tr(title_key)).size(typography::TITLE_LG))
        .height(Length::Fixed(geometry::SECTION_HEADER_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .into()
}

fn view_home<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(ctx.i18n.tr("hero-view-projects")))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::GoTo(SectionId::Projects))
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("hero-contact")))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::GoTo(SectionId::Contact))
                .style(styles::button::carousel_control),
        );

    let hero = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(ctx.i18n.tr("hero-title")).size(typography::DISPLAY))
        .push(Text::new(ctx.i18n.tr("hero-subtitle")).size(typography::TITLE_MD))
        .push(actions);

    Container::new(hero)
        .height(Length::Fill)
        .padding([geometry::NAVBAR_HEIGHT, 0.0])
        .align_y(alignment::Vertical::Center)
        .into()
}

fn view_about<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cv_busy = ctx.page.forms.cv.phase().is_busy();
    let cv_label = if cv_busy {
        ctx.i18n.tr("cv-downloading")
    } else {
        ctx.i18n.tr("cv-download")
    };
    let cv_button = button(Text::new(cv_label))
        .padding([spacing::SM, spacing::LG])
        .on_press_maybe((!cv_busy).then_some(Message::DownloadCv))
        .style(styles::button::primary);

    Column::new()
        .spacing(spacing::LG)
        .push(header(ctx.i18n, "about-title"))
        .push(Text::new(ctx.i18n.tr("about-body")).size(typography::BODY_LG))
        .push(cv_button)
        .into()
}

fn view_skills<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    SKILLS
        .iter()
        .enumerate()
        .fold(
            Column::new().push(header(ctx.i18n, "skills-title")),
            |column, (index, category)| column.push(view_skill_category(ctx.page, index, category)),
        )
        .into()
}

fn view_skill_category<'a>(
    page: &Page,
    index: usize,
    category: &'a SkillCategory,
) -> Element<'a, Message> {
    let bars = category.skills.iter().fold(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(category.name).size(typography::TITLE_MD)),
        |column, skill| {
            let fill = u16::from(page.skill_fill(index, skill.level));
            let bar = Row::new()
                .height(Length::Fixed(sizing::SKILL_BAR))
                .push(
                    Container::new(Text::new(""))
                        .width(Length::FillPortion(fill))
                        .height(Length::Fill)
                        .style(styles::container::skill_fill),
                )
                .push(
                    Container::new(Text::new(""))
                        .width(Length::FillPortion(100 - fill))
                        .height(Length::Fill),
                );
            let bar = Container::new(bar)
                .width(Length::Fill)
                .style(styles::container::skill_track);
            column.push(
                Row::new()
                    .spacing(spacing::MD)
                    .align_y(alignment::Vertical::Center)
                    .push(
                        Text::new(skill.name)
                            .size(typography::BODY)
                            .width(Length::Fixed(120.0)),
                    )
                    .push(bar),
            )
        },
    );

    Container::new(bars)
        .height(Length::Fixed(geometry::SKILL_CATEGORY_HEIGHT))
        .width(Length::Fill)
        .into()
}

fn view_projects<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let revealed = (0..PROJECTS.len())
        .map(|i| ctx.page.is_revealed(RevealTarget::ProjectCard(i)))
        .collect();

    let carousel = carousel::view(carousel::ViewContext {
        i18n: ctx.i18n,
        frame: ctx.frame,
        projects: PROJECTS,
        revealed,
    })
    .map(Message::Carousel);

    Column::new()
        .push(header(ctx.i18n, "projects-title"))
        .push(carousel)
        .into()
}

fn busy_label(i18n: &I18n, phase: Phase, idle_key: &str, busy_key: &str) -> String {
    if phase.is_busy() {
        i18n.tr(busy_key)
    } else {
        i18n.tr(idle_key)
    }
}

fn view_contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let contact = &ctx.page.forms.contact;
    let contact_busy = contact.phase().is_busy();

    let field = |field: Field, value: &str| {
        text_input(&ctx.i18n.tr(field.label_key()), value)
            .on_input(move |text| Message::ContactChanged(field, text))
            .on_submit(Message::SubmitContact)
            .padding(spacing::SM)
            .width(Length::Fixed(sizing::INPUT_WIDTH))
    };

    let send = button(Text::new(busy_label(
        ctx.i18n,
        contact.phase(),
        "contact-send",
        "contact-sending",
    )))
    .padding([spacing::SM, spacing::LG])
    .on_press_maybe((!contact_busy).then_some(Message::SubmitContact))
    .style(styles::button::primary);

    let form = Column::new()
        .spacing(spacing::SM)
        .push(field(Field::Name, &contact.name))
        .push(field(Field::Email, &contact.email))
        .push(field(Field::Subject, &contact.subject))
        .push(field(Field::Message, &contact.message))
        .push(send);

    let newsletter = &ctx.page.forms.newsletter;
    let newsletter_busy = newsletter.phase().is_busy();
    let newsletter_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            text_input(&ctx.i18n.tr("newsletter-placeholder"), &newsletter.email)
                .on_input(Message::NewsletterChanged)
                .on_submit(Message::SubscribeNewsletter)
                .padding(spacing::SM)
                .width(Length::Fixed(sizing::INPUT_WIDTH)),
        )
        .push(
            button(Text::new(busy_label(
                ctx.i18n,
                newsletter.phase(),
                "newsletter-subscribe",
                "newsletter-subscribing",
            )))
            .padding([spacing::SM, spacing::LG])
            .on_press_maybe((!newsletter_busy).then_some(Message::SubscribeNewsletter))
            .style(styles::button::primary),
        );

    let year = ctx.year.to_string();
    let footer = Text::new(
        ctx.i18n
            .tr_with_args("footer-copyright", &[("year", year.as_str())]),
    )
    .size(typography::CAPTION);

    Column::new()
        .spacing(spacing::LG)
        .push(header(ctx.i18n, "contact-title"))
        .push(form)
        .push(Text::new(ctx.i18n.tr("newsletter-title")).size(typography::TITLE_MD))
        .push(newsletter_row)
        .push(footer)
        .into()
}
