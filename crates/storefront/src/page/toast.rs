//! Transient notices.
//!
//! Each call gets its own lifecycle: enter animation, [`DISPLAY`] on screen,
//! exit animation, removal after [`EXIT`]. Notices never queue or merge.

use std::time::Duration;

use crate::dom::NodeId;
use crate::page::Page;

/// Time a notice stays up before it starts leaving.
pub const DISPLAY: Duration = Duration::from_millis(2000);

/// Length of the exit animation; the element is removed when it ends.
pub const EXIT: Duration = Duration::from_millis(300);

/// Class carried by every notice element.
pub const CLASS: &str = "toast";

const STYLES: [(&str, &str); 12] = [
    ("position", "fixed"),
    ("bottom", "20px"),
    ("left", "50%"),
    ("transform", "translateX(-50%)"),
    ("background", "#1e1e1e"),
    ("color", "white"),
    ("padding", "12px 24px"),
    ("border-radius", "50px"),
    ("font-size", "0.9rem"),
    ("z-index", "1000"),
    ("box-shadow", "0 5px 20px rgba(0,0,0,0.2)"),
    ("animation", "slideUp 0.3s ease"),
];

pub(crate) fn show(page: &mut Page, message: &str) -> NodeId {
    let body = page.document.body();
    let toast = page.document.append_new(body, "div", CLASS);
    page.document.set_text(toast, message);
    for (property, value) in STYLES {
        page.document.set_style(toast, property, value);
    }

    page.schedule(DISPLAY, move |page| {
        page.document.set_style(toast, "animation", "fadeOut 0.3s ease");
        page.schedule(EXIT, move |page| page.document.remove(toast));
    });

    tracing::debug!(text = message, "toast shown");
    toast
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    #[test]
    fn test_lifecycle() {
        let mut page = Page::new(Document::new());
        let toast = page.show_toast("hello");
        assert!(page.document().is_attached(toast));
        assert_eq!(page.document().text(toast), "hello");
        assert_eq!(
            page.document().style(toast, "animation"),
            Some("slideUp 0.3s ease")
        );

        page.advance(DISPLAY);
        assert_eq!(
            page.document().style(toast, "animation"),
            Some("fadeOut 0.3s ease")
        );
        assert!(page.document().is_attached(toast));

        page.advance(EXIT);
        assert!(!page.document().is_attached(toast));
        assert_eq!(page.pending_timers(), 0);
    }

    #[test]
    fn test_concurrent_notices_are_independent() {
        let mut page = Page::new(Document::new());
        let first = page.show_toast("first");
        page.advance(Duration::from_millis(100));
        let second = page.show_toast("second");

        page.advance(DISPLAY + EXIT - Duration::from_millis(100));
        assert!(!page.document().is_attached(first));
        assert!(page.document().is_attached(second));

        page.advance(Duration::from_millis(100));
        assert!(!page.document().is_attached(second));
    }

    #[test]
    fn test_expired_notices_do_not_grow_the_tree() {
        let mut page = Page::new(Document::new());
        page.show_toast("warm-up");
        page.run_until_idle();
        let slots = page.document().slot_count();

        for i in 0..1000 {
            page.show_toast(&format!("notice {i}"));
            page.run_until_idle();
        }
        assert_eq!(page.document().slot_count(), slots);
        assert!(page.document().find_by_class(page.document().body(), "toast").is_empty());
    }
}
