//! Cosmetic handlers: header icons, category cards, footer socials, header
//! on scroll and the hero tilt.

use std::time::Duration;

use moda_core::{Tilt, next_header_visibility};

use crate::dom::NodeId;
use crate::page::{EventKind, Handler, Page, toast};

/// How long a clicked nav icon stays highlighted.
pub const ICON_PULSE: Duration = Duration::from_millis(200);

/// How long a clicked category card stays pressed.
pub const CARD_PULSE: Duration = Duration::from_millis(150);

pub(crate) fn init(page: &mut Page) {
    let doc = &page.document;
    let root = doc.root();

    let header = doc.first_by_tag(root, "header");
    let nav_icons = icons_under(page, "nav-icons");
    let cards = doc.find_by_class(root, "cat-card");
    let social_icons = icons_under(page, "social-icons");
    let hero = page.document.first_by_class(root, "hero-image");

    page.header = header;
    for icon in nav_icons {
        page.listen(icon, EventKind::Click, Handler::NavIconClick);
    }
    for card in cards {
        page.listen(card, EventKind::Click, Handler::CategoryCardClick);
    }
    for icon in social_icons {
        page.listen(icon, EventKind::Click, Handler::SocialIconClick);
    }
    if let Some(hero) = hero {
        page.listen(hero, EventKind::PointerMove, Handler::HeroPointerMove);
        page.listen(hero, EventKind::PointerLeave, Handler::HeroPointerLeave);
    }
}

/// Every `i` element inside containers carrying `container_class`.
fn icons_under(page: &Page, container_class: &str) -> Vec<NodeId> {
    let doc = &page.document;
    doc.find_by_class(doc.root(), container_class)
        .into_iter()
        .flat_map(|container| doc.descendants(container).into_iter().skip(1))
        .filter(|&n| doc.tag(n) == Some("i"))
        .collect()
}

pub(crate) fn on_nav_icon_click(page: &mut Page, icon: NodeId) {
    page.document.set_style(icon, "color", "#000");
    page.schedule(ICON_PULSE, move |page| {
        page.document.set_style(icon, "color", "");
    });

    let message = if page.document.has_class(icon, "fa-heart") {
        Some("❤️ Added to wishlist!")
    } else if page.document.has_class(icon, "fa-user") {
        Some("👤 Account page (demo)")
    } else if page.document.has_class(icon, "fa-bookmark") {
        Some("🔖 Saved items (demo)")
    } else {
        None
    };
    if let Some(message) = message {
        toast::show(page, message);
    }
}

pub(crate) fn on_category_click(page: &mut Page, card: NodeId) {
    let category = page
        .document
        .first_by_tag(card, "h3")
        .map(|n| page.document.text_content(n))
        .unwrap_or_default();
    toast::show(page, &format!("🔍 Browsing {category} category"));

    page.document.set_style(card, "transform", "scale(0.98)");
    page.schedule(CARD_PULSE, move |page| {
        page.document.set_style(card, "transform", "");
    });
}

/// Platform name from an icon's second class, e.g. `fa-instagram`.
fn platform_name(class: &str) -> String {
    class.replacen("fa-", "", 1).replacen("x-twitter", "X", 1)
}

pub(crate) fn on_social_icon_click(page: &mut Page, icon: NodeId) {
    let Some(class) = page.document.classes(icon).get(1) else {
        return;
    };
    let platform = platform_name(class);
    toast::show(page, &format!("📱 Follow us on {platform} (demo)"));
}

pub(crate) fn on_scroll(page: &mut Page, offset: f64) {
    let visibility = next_header_visibility(page.last_scroll, offset);
    if let Some(header) = page.header {
        page.document
            .set_style(header, "transform", visibility.transform());
    }
    page.last_scroll = offset;
}

pub(crate) fn on_hero_move(page: &mut Page, hero: NodeId, x: f64, y: f64) {
    let Some(rect) = page.document.rect(hero) else {
        return;
    };
    if let Some(tilt) = Tilt::from_pointer(rect, x, y) {
        page.document.set_style(hero, "transform", &tilt.transform());
    }
}

pub(crate) fn on_hero_leave(page: &mut Page, hero: NodeId) {
    page.document
        .set_style(hero, "transform", Tilt::RESET_TRANSFORM);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::page::Event;

    fn toasts(page: &Page) -> Vec<String> {
        let doc = page.document();
        doc.find_by_class(doc.body(), toast::CLASS)
            .into_iter()
            .map(|n| doc.text(n).to_owned())
            .collect()
    }

    fn nav_icon(page: &Page, class: &str) -> NodeId {
        let doc = page.document();
        doc.find_by_class(doc.root(), class)[0]
    }

    #[test]
    fn test_nav_icon_messages() {
        let mut page = Page::home();
        for (class, expected) in [
            ("fa-heart", "❤️ Added to wishlist!"),
            ("fa-user", "👤 Account page (demo)"),
            ("fa-bookmark", "🔖 Saved items (demo)"),
        ] {
            let icon = nav_icon(&page, class);
            page.click(icon);
            assert!(toasts(&page).contains(&expected.to_string()));
        }
        assert_eq!(toasts(&page).len(), 3);
    }

    #[test]
    fn test_nav_icon_pulse() {
        let mut page = Page::home();
        let bag = nav_icon(&page, "fa-bag-shopping");
        page.click(bag);
        assert_eq!(page.document().style(bag, "color"), Some("#000"));
        assert!(toasts(&page).is_empty());

        page.advance(ICON_PULSE);
        assert_eq!(page.document().style(bag, "color"), None);
    }

    #[test]
    fn test_category_click() {
        let mut page = Page::home();
        let card = page.document().find_by_class(page.document().root(), "cat-card")[2];
        let title = page.document().first_by_tag(card, "h3").unwrap();
        page.click(title);
        assert_eq!(toasts(&page), ["🔍 Browsing bottoms category"]);
        assert_eq!(page.document().style(card, "transform"), Some("scale(0.98)"));

        page.advance(CARD_PULSE);
        assert_eq!(page.document().style(card, "transform"), None);
    }

    #[test]
    fn test_platform_name() {
        assert_eq!(platform_name("fa-instagram"), "instagram");
        assert_eq!(platform_name("fa-x-twitter"), "X");
    }

    #[test]
    fn test_social_icon_click() {
        let mut page = Page::home();
        let icon = nav_icon(&page, "fa-x-twitter");
        page.click(icon);
        assert_eq!(toasts(&page), ["📱 Follow us on X (demo)"]);
    }

    #[test]
    fn test_header_hides_and_shows() {
        let mut page = Page::home();
        let header = page.header.unwrap();

        page.dispatch(Event::Scroll { offset: 50.0 });
        assert_eq!(page.document().style(header, "transform"), Some("translateY(0)"));

        page.dispatch(Event::Scroll { offset: 250.0 });
        assert_eq!(
            page.document().style(header, "transform"),
            Some("translateY(-100%)")
        );

        page.dispatch(Event::Scroll { offset: 240.0 });
        assert_eq!(page.document().style(header, "transform"), Some("translateY(0)"));
        assert!((page.last_scroll() - 240.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hero_tilt_and_reset() {
        let mut page = Page::home();
        let hero = page
            .document()
            .first_by_class(page.document().root(), "hero-image")
            .unwrap();
        let rect = page.document().rect(hero).unwrap();

        page.dispatch(Event::PointerMove {
            target: hero,
            x: rect.left + rect.width,
            y: rect.top + rect.height / 2.0,
        });
        assert_eq!(
            page.document().style(hero, "transform"),
            Some("perspective(1000px) rotateY(2.5deg) rotateX(0deg)")
        );

        page.dispatch(Event::PointerLeave { target: hero });
        assert_eq!(
            page.document().style(hero, "transform"),
            Some(Tilt::RESET_TRANSFORM)
        );
    }
}
