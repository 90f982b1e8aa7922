//! Interactive page runtime.
//!
//! A [`Page`] owns a [`Document`] and a virtual-time [`Timers`] queue.
//! Construction wires every component whose elements are present; a missing
//! element simply leaves that component out.
//!
//! Events are handled to completion one at a time by [`Page::dispatch`].
//! Delayed follow-ups only run when the host calls [`Page::advance`], so tests
//! step virtual time instead of sleeping.
//!
//! # Components
//!
//! - [`catalog`] - product grid rendering and quick-add clicks
//! - [`newsletter`] - newsletter subscription form
//! - [`signup`] - sign-up validation, strength meter and simulated submission
//! - [`toast`] - transient notices
//! - [`cosmetics`] - icons, category cards, header on scroll, hero tilt

pub mod catalog;
pub mod cosmetics;
pub mod layout;
pub mod newsletter;
pub mod signup;
pub mod toast;

use std::collections::BTreeMap;
use std::time::Duration;

use crate::dom::{Document, NodeId};
use crate::timers::{SimulatedTask, Timers};

pub use newsletter::NewsletterState;

/// Something the host reports happening on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Submit { target: NodeId },
    Click { target: NodeId },
    /// Fired after the target's value changed.
    Input { target: NodeId },
    Focus { target: NodeId },
    Blur { target: NodeId },
    PointerMove { target: NodeId, x: f64, y: f64 },
    PointerLeave { target: NodeId },
    /// Window scrolled to `offset`.
    Scroll { offset: f64 },
}

/// Event types a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Submit,
    Click,
    Input,
    Focus,
    Blur,
    PointerMove,
    PointerLeave,
}

impl Event {
    const fn kind(&self) -> Option<EventKind> {
        match self {
            Self::Submit { .. } => Some(EventKind::Submit),
            Self::Click { .. } => Some(EventKind::Click),
            Self::Input { .. } => Some(EventKind::Input),
            Self::Focus { .. } => Some(EventKind::Focus),
            Self::Blur { .. } => Some(EventKind::Blur),
            Self::PointerMove { .. } => Some(EventKind::PointerMove),
            Self::PointerLeave { .. } => Some(EventKind::PointerLeave),
            Self::Scroll { .. } => None,
        }
    }

    const fn target(&self) -> Option<NodeId> {
        match *self {
            Self::Submit { target }
            | Self::Click { target }
            | Self::Input { target }
            | Self::Focus { target }
            | Self::Blur { target }
            | Self::PointerMove { target, .. }
            | Self::PointerLeave { target } => Some(target),
            Self::Scroll { .. } => None,
        }
    }

    /// Focus, blur and pointer-leave stay on their target.
    const fn bubbles(&self) -> bool {
        !matches!(
            self,
            Self::Focus { .. } | Self::Blur { .. } | Self::PointerLeave { .. }
        )
    }
}

/// Which component routine a listener runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Handler {
    NewsletterSubmit,
    ProductGridClick,
    NavIconClick,
    CategoryCardClick,
    SocialIconClick,
    HeroPointerMove,
    HeroPointerLeave,
    PasswordVisibilityToggle { input: NodeId },
    PasswordInput,
    ConfirmPasswordInput,
    EmailBlur,
    SignupSubmit,
    SocialSignupClick,
    FieldFocus,
    FieldBlur,
}

#[derive(Debug, Clone, Copy)]
struct Listener {
    node: NodeId,
    kind: EventKind,
    handler: Handler,
}

/// A live page: display tree, pending timers and per-component state.
#[derive(Debug)]
pub struct Page {
    pub(crate) document: Document,
    pub(crate) timers: Timers<Self>,
    listeners: Vec<Listener>,
    pub(crate) header: Option<NodeId>,
    pub(crate) last_scroll: f64,
    pub(crate) newsletter: NewsletterState,
    pub(crate) signup_task: Option<SimulatedTask>,
    pub(crate) oauth_tasks: BTreeMap<NodeId, SimulatedTask>,
}

impl Page {
    /// Wire every component whose elements exist in `document`.
    #[must_use]
    pub fn new(document: Document) -> Self {
        let mut page = Self {
            document,
            timers: Timers::new(),
            listeners: Vec::new(),
            header: None,
            last_scroll: 0.0,
            newsletter: NewsletterState::Idle,
            signup_task: None,
            oauth_tasks: BTreeMap::new(),
        };

        catalog::init(&mut page);
        newsletter::init(&mut page);
        cosmetics::init(&mut page);
        signup::init(&mut page);

        tracing::info!(listeners = page.listeners.len(), "page initialized");
        page
    }

    /// The home page: header, hero, categories, product grid, newsletter.
    #[must_use]
    pub fn home() -> Self {
        Self::new(layout::home_document())
    }

    /// The account sign-up page.
    #[must_use]
    pub fn signup() -> Self {
        Self::new(layout::signup_document())
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access for the host, e.g. to set an input's value.
    pub const fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Current virtual time since the page loaded.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Number of delayed callbacks still waiting.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    #[must_use]
    pub const fn newsletter_state(&self) -> NewsletterState {
        self.newsletter
    }

    /// The most recent sign-up submission, if any.
    #[must_use]
    pub const fn signup_submission(&self) -> Option<&SimulatedTask> {
        self.signup_task.as_ref()
    }

    /// The social sign-up simulation started from `button`, if any.
    #[must_use]
    pub fn social_signup(&self, button: NodeId) -> Option<&SimulatedTask> {
        self.oauth_tasks.get(&button)
    }

    /// Last scroll offset seen by the header handler.
    #[must_use]
    pub const fn last_scroll(&self) -> f64 {
        self.last_scroll
    }

    /// Re-render the product grid, replacing whatever it holds.
    pub fn render_catalog(&mut self) {
        if let Some(grid) = self.document.get_element_by_id(catalog::GRID_ID) {
            catalog::render(&mut self.document, grid);
        }
    }

    /// Show a transient notice and return its element.
    pub fn show_toast(&mut self, message: &str) -> NodeId {
        toast::show(self, message)
    }

    // =========================================================================
    // Events
    // =========================================================================

    pub(crate) fn listen(&mut self, node: NodeId, kind: EventKind, handler: Handler) {
        self.listeners.push(Listener {
            node,
            kind,
            handler,
        });
    }

    /// Handle one event to completion.
    ///
    /// Returns `true` if a handler prevented the default action (form
    /// submission).
    pub fn dispatch(&mut self, event: Event) -> bool {
        if let Event::Scroll { offset } = event {
            cosmetics::on_scroll(self, offset);
            return false;
        }
        let (Some(kind), Some(target)) = (event.kind(), event.target()) else {
            return false;
        };

        let path = if event.bubbles() {
            let mut path = Vec::new();
            let mut current = Some(target);
            while let Some(node) = current {
                path.push(node);
                current = self.document.parent(node);
            }
            path
        } else {
            vec![target]
        };

        let mut default_prevented = false;
        for node in path {
            let handlers: Vec<Handler> = self
                .listeners
                .iter()
                .filter(|l| l.node == node && l.kind == kind)
                .map(|l| l.handler)
                .collect();
            for handler in handlers {
                tracing::debug!(?handler, ?kind, "dispatching");
                default_prevented |= self.run(handler, node, &event);
            }
        }
        default_prevented
    }

    fn run(&mut self, handler: Handler, current: NodeId, event: &Event) -> bool {
        let target = event.target().unwrap_or(current);
        match handler {
            Handler::NewsletterSubmit => {
                newsletter::on_submit(self);
                return true;
            }
            Handler::SignupSubmit => {
                signup::on_submit(self, current);
                return true;
            }
            Handler::ProductGridClick => catalog::on_grid_click(self, target),
            Handler::NavIconClick => cosmetics::on_nav_icon_click(self, current),
            Handler::CategoryCardClick => cosmetics::on_category_click(self, current),
            Handler::SocialIconClick => cosmetics::on_social_icon_click(self, current),
            Handler::HeroPointerMove => {
                if let Event::PointerMove { x, y, .. } = *event {
                    cosmetics::on_hero_move(self, current, x, y);
                }
            }
            Handler::HeroPointerLeave => cosmetics::on_hero_leave(self, current),
            Handler::PasswordVisibilityToggle { input } => {
                signup::toggle_visibility(self, current, input);
            }
            Handler::PasswordInput => signup::on_password_input(self, current),
            Handler::ConfirmPasswordInput => signup::on_confirm_input(self, current),
            Handler::EmailBlur => signup::on_email_blur(self, current),
            Handler::SocialSignupClick => signup::on_social_click(self, current),
            Handler::FieldFocus => signup::highlight_label(self, current, true),
            Handler::FieldBlur => signup::highlight_label(self, current, false),
        }
        false
    }

    /// Click `target`.
    pub fn click(&mut self, target: NodeId) -> bool {
        self.dispatch(Event::Click { target })
    }

    /// Submit `form`.
    pub fn submit(&mut self, form: NodeId) -> bool {
        self.dispatch(Event::Submit { target: form })
    }

    /// Replace `input`'s value as if typed, then fire `input`.
    pub fn type_into(&mut self, input: NodeId, value: &str) {
        self.document.set_value(input, value);
        self.dispatch(Event::Input { target: input });
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Run `callback` once after `delay`.
    pub(crate) fn schedule<F>(&mut self, delay: Duration, callback: F)
    where
        F: FnOnce(&mut Self) + 'static,
    {
        self.timers.schedule(delay, Box::new(callback));
    }

    /// Move virtual time forward by `by`, running everything that falls due,
    /// including callbacks scheduled by callbacks.
    pub fn advance(&mut self, by: Duration) {
        let until = self.timers.now().saturating_add(by);
        while let Some(callback) = self.timers.pop_due(until) {
            tracing::debug!(now = ?self.timers.now(), "timer fired");
            callback(&mut *self);
        }
        self.timers.settle_at(until);
    }

    /// Advance until no callbacks remain.
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.timers.next_due() {
            let by = due.saturating_sub(self.timers.now());
            self.advance(by);
        }
    }
}
