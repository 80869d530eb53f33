//! Embedded site content for the Palazzo showcase.
//!
//! All marketing copy lives in `content.json`, compiled into the binary and
//! deserialized once on first access. The content is immutable input data:
//! nothing in the application mutates it, and the only validation is "fields
//! present" plus a section-id sanity check for the navigation entries.

use std::str::FromStr;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::warn;

use palazzo_types::SectionId;

const EMBEDDED_CONTENT: &str = include_str!("../content.json");

static SITE: Lazy<SiteContent> =
    Lazy::new(|| SiteContent::from_embedded().expect("embedded content.json is valid"));

/// Returns the process-wide site content, parsed on first use.
pub fn site() -> &'static SiteContent {
    &SITE
}

/// Name, contact details, and tagline shown in the drawer and footer.
#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantInfo {
    pub name: String,
    pub tagline: String,
    pub phone: String,
    pub hours: String,
    pub address: String,
}

/// One navigation entry as stored in the content file. The section is kept as
/// a raw string here; [`SiteContent::nav_items`] resolves it to a `SectionId`.
#[derive(Debug, Clone, Deserialize)]
pub struct NavEntry {
    pub section: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeroContent {
    pub headline: String,
    pub subline: String,
    pub cta: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ingredient {
    pub icon: String,
    pub name: String,
    pub blurb: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoodContent {
    pub title: String,
    pub subline: String,
    pub dishes: Vec<Dish>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Dish {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuContent {
    pub title: String,
    pub categories: Vec<MenuCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Promotional price; when present the regular price renders struck out.
    #[serde(default)]
    pub discounted_price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChefContent {
    pub title: String,
    pub name: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialsContent {
    pub title: String,
    pub entries: Vec<Testimonial>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub rating: u8,
    pub text: String,
    pub date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReserveContent {
    pub title: String,
    pub subline: String,
}

/// The full content payload of the one-page site.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub restaurant: RestaurantInfo,
    pub nav: Vec<NavEntry>,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub food: FoodContent,
    pub menu: MenuContent,
    pub chef: ChefContent,
    pub testimonials: TestimonialsContent,
    pub reserve: ReserveContent,
}

impl SiteContent {
    /// Parses the compiled-in content payload.
    pub fn from_embedded() -> Result<Self> {
        serde_json::from_str(EMBEDDED_CONTENT).context("parsing embedded content.json")
    }

    /// Resolves the navigation entries into `(SectionId, label)` pairs in
    /// content-file order. Entries naming an unknown section are skipped with
    /// a warning rather than failing startup.
    pub fn nav_items(&self) -> Vec<(SectionId, String)> {
        self.nav
            .iter()
            .filter_map(|entry| match SectionId::from_str(&entry.section) {
                Ok(section) => Some((section, entry.label.clone())),
                Err(err) => {
                    warn!("ignoring nav entry {:?}: {err}", entry.label);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::from_embedded().unwrap();
        assert_eq!(content.restaurant.name, "Pizza Palace");
        assert_eq!(content.menu.categories.len(), 3);
        assert_eq!(content.testimonials.entries.len(), 4);
    }

    #[test]
    fn nav_entries_resolve_to_all_sections_in_order() {
        let content = SiteContent::from_embedded().unwrap();
        let items = content.nav_items();
        let sections: Vec<SectionId> = items.iter().map(|(section, _)| *section).collect();
        assert_eq!(sections, SectionId::ALL.to_vec());
    }

    #[test]
    fn unknown_nav_sections_are_skipped() {
        let mut content = SiteContent::from_embedded().unwrap();
        content.nav.push(NavEntry {
            section: "cellar".into(),
            label: "Wine Cellar".into(),
        });
        assert_eq!(content.nav_items().len(), SectionId::ALL.len());
    }

    #[test]
    fn discounted_prices_stay_below_list_price() {
        let content = SiteContent::from_embedded().unwrap();
        for category in &content.menu.categories {
            for item in &category.items {
                if let Some(discounted) = item.discounted_price {
                    assert!(discounted < item.price, "{} discount is not a discount", item.name);
                }
            }
        }
    }
}
