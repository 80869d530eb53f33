//! Line builders for the sections of the one-page site.
//!
//! Each builder turns a content record into pre-wrapped, styled lines for
//! the page column. Builders are pure: interactive state (active menu tab,
//! current testimonial slide) comes in as arguments, and reveal animation is
//! applied afterwards by [`apply_reveal`].

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};
use textwrap::wrap;

use palazzo_content::{
    AboutContent, ChefContent, FoodContent, HeroContent, MenuContent, ReserveContent, RestaurantInfo, TestimonialsContent,
};

use crate::ui::components::page::CarouselState;
use crate::ui::theme::Theme;

fn wrapped(text: &str, width: usize, style: ratatui::style::Style) -> Vec<Line<'static>> {
    wrap(text, width.max(20))
        .into_iter()
        .map(|piece| Line::from(Span::styled(piece.into_owned(), style)))
        .collect()
}

fn heading(theme: &dyn Theme, title: &str, width: usize) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(title.to_uppercase(), theme.accent_emphasis_style())),
        Line::from(Span::styled("─".repeat(width.max(20).min(60)), theme.border_style(false))),
        Line::default(),
    ]
}

/// Dims a freshly revealed section and blanks one that has not entered the
/// viewport yet, preserving line count so the layout never shifts.
pub fn apply_reveal(lines: &mut [Line<'static>], reveal: f32) {
    if reveal >= 1.0 {
        return;
    }
    for line in lines.iter_mut() {
        if reveal <= 0.05 {
            line.spans.clear();
        } else {
            for span in line.spans.iter_mut() {
                span.style = span.style.add_modifier(Modifier::DIM);
            }
        }
    }
}

pub fn hero_lines(theme: &dyn Theme, hero: &HeroContent, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default(), Line::default()];
    for part in hero.headline.split(" & ") {
        lines.push(Line::from(Span::styled(
            part.trim().to_uppercase(),
            theme.accent_emphasis_style().add_modifier(Modifier::UNDERLINED),
        )));
    }
    lines.push(Line::default());
    lines.extend(wrapped(&hero.subline, width, theme.text_secondary_style()));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(format!("[ {} ]", hero.cta), theme.selection_style()),
        Span::styled("  press e", theme.text_muted_style()),
    ]));
    lines.push(Line::default());
    lines.push(Line::default());
    lines
}

pub fn about_lines(theme: &dyn Theme, about: &AboutContent, width: usize) -> Vec<Line<'static>> {
    let mut lines = heading(theme, &about.title, width);
    for paragraph in &about.paragraphs {
        lines.extend(wrapped(paragraph, width, theme.text_primary_style()));
        lines.push(Line::default());
    }
    for ingredient in &about.ingredients {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", ingredient.icon), theme.accent_secondary_style()),
            Span::styled(ingredient.name.clone(), theme.text_primary_style().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", ingredient.blurb), theme.text_muted_style()),
        ]));
    }
    lines.push(Line::default());
    lines
}

pub fn food_lines(theme: &dyn Theme, food: &FoodContent, width: usize) -> Vec<Line<'static>> {
    let mut lines = heading(theme, &food.title, width);
    lines.extend(wrapped(&food.subline, width, theme.text_muted_style()));
    lines.push(Line::default());
    for dish in &food.dishes {
        lines.push(Line::from(Span::styled(
            dish.name.clone(),
            theme.accent_secondary_style().add_modifier(Modifier::BOLD),
        )));
        lines.extend(wrapped(&dish.description, width, theme.text_secondary_style()));
        lines.push(Line::default());
    }
    lines
}

pub fn menu_lines(theme: &dyn Theme, menu: &MenuContent, active_category: usize, width: usize) -> Vec<Line<'static>> {
    let mut lines = heading(theme, &menu.title, width);

    let mut tabs: Vec<Span<'static>> = Vec::new();
    for (index, category) in menu.categories.iter().enumerate() {
        let style = if index == active_category {
            theme.selection_style()
        } else {
            theme.text_muted_style()
        };
        tabs.push(Span::styled(format!(" {} ", category.name), style));
        tabs.push(Span::raw(" "));
    }
    tabs.push(Span::styled("(Tab switches)", theme.text_muted_style()));
    lines.push(Line::from(tabs));
    lines.push(Line::default());

    if let Some(category) = menu.categories.get(active_category) {
        for item in &category.items {
            let mut title_spans = vec![Span::styled(
                item.name.clone(),
                theme.text_primary_style().add_modifier(Modifier::BOLD),
            )];
            match item.discounted_price {
                Some(discounted) => {
                    title_spans.push(Span::styled(
                        format!("  ${:.2}", item.price),
                        theme.text_muted_style().add_modifier(Modifier::CROSSED_OUT),
                    ));
                    title_spans.push(Span::styled(format!("  ${discounted:.2}"), theme.accent_emphasis_style()));
                }
                None => {
                    title_spans.push(Span::styled(format!("  ${:.2}", item.price), theme.accent_primary_style()));
                }
            }
            lines.push(Line::from(title_spans));
            lines.extend(wrapped(&item.description, width, theme.text_secondary_style()));
            lines.push(Line::default());
        }
    }
    lines
}

pub fn chef_lines(theme: &dyn Theme, chef: &ChefContent, width: usize) -> Vec<Line<'static>> {
    let mut lines = heading(theme, &chef.title, width);
    lines.push(Line::from(Span::styled(
        format!("Chef {}", chef.name),
        theme.accent_secondary_style().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    for paragraph in &chef.paragraphs {
        lines.extend(wrapped(paragraph, width, theme.text_primary_style()));
        lines.push(Line::default());
    }
    lines
}

pub fn testimonial_lines(
    theme: &dyn Theme,
    testimonials: &TestimonialsContent,
    carousel: &CarouselState,
    now: std::time::Instant,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = heading(theme, &testimonials.title, width);
    let Some(entry) = testimonials.entries.get(carousel.current) else {
        return lines;
    };

    // Slide-in: the incoming card starts indented and settles left.
    let progress = carousel.transition_progress(now);
    let indent = ((1.0 - progress) * 10.0).round() as usize;
    let pad = " ".repeat(indent);

    let stars = "*".repeat(entry.rating.min(5) as usize);
    lines.push(Line::from(vec![
        Span::raw(pad.clone()),
        Span::styled(stars, theme.status_warning().add_modifier(Modifier::BOLD)),
    ]));
    for mut line in wrapped(&format!("\"{}\"", entry.text), width.saturating_sub(indent), theme.text_primary_style()) {
        line.spans.insert(0, Span::raw(pad.clone()));
        lines.push(line);
    }
    lines.push(Line::from(vec![
        Span::raw(pad),
        Span::styled(entry.name.clone(), theme.accent_secondary_style().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {} - {}", entry.role, entry.date), theme.text_muted_style()),
    ]));
    lines.push(Line::default());

    let mut dots: Vec<Span<'static>> = Vec::new();
    for index in 0..carousel.slide_count() {
        let style = if index == carousel.current {
            theme.accent_primary_style()
        } else {
            theme.text_muted_style()
        };
        dots.push(Span::styled(if index == carousel.current { "(o)" } else { " o " }, style));
    }
    dots.push(Span::styled("  n/p to browse", theme.text_muted_style()));
    lines.push(Line::from(dots));
    lines.push(Line::default());
    lines
}

pub fn reserve_lines(theme: &dyn Theme, reserve: &ReserveContent, width: usize) -> Vec<Line<'static>> {
    let mut lines = heading(theme, &reserve.title, width);
    lines.extend(wrapped(&reserve.subline, width, theme.text_secondary_style()));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("[ Reserve a Table (r) ]", theme.selection_style())));
    lines.push(Line::default());
    lines
}

pub fn footer_lines(theme: &dyn Theme, restaurant: &RestaurantInfo, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "─".repeat(width.max(20).min(60)),
        theme.border_style(false),
    ))];
    lines.push(Line::from(vec![
        Span::styled(restaurant.name.clone(), theme.accent_emphasis_style()),
        Span::styled(
            format!("  {} | {} | {}", restaurant.phone, restaurant.hours, restaurant.address),
            theme.text_muted_style(),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        format!("(c) 2024 {}. All rights reserved.", restaurant.name),
        theme.text_muted_style(),
    )));
    lines.push(Line::default());
    lines
}
