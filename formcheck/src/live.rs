//! Live validation wiring.
//!
//! [`FormValidator::attach_live_validation`] registers two checks per required
//! field and hands back a [`Subscription`] for each field. Events from the UI
//! are routed through [`FormValidator::dispatch`]:
//!
//! | field kind               | authoritative check | optimistic check |
//! |--------------------------|---------------------|------------------|
//! | checkbox, radio, select  | `Change`            | `Change`         |
//! | everything else          | `Blur`              | `Input`          |

use formdom::{Element, Event, EventKind, collect_ids, find_element};

use crate::validation::{FieldKind, FormValidator};

/// Handle for one field's live validation listeners. Pass it to
/// [`FormValidator::detach`] to stop validating the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Which check a listener runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Full rule evaluation via `validate_field`.
    Authoritative,
    /// Presence check via `on_field_improved`.
    Optimistic,
}

/// Listener registration for one field.
#[derive(Debug, Clone)]
pub(crate) struct LiveBinding {
    subscription: Subscription,
    field_id: String,
    authoritative_on: EventKind,
    optimistic_on: EventKind,
}

impl LiveBinding {
    fn checks_for(&self, kind: EventKind) -> impl Iterator<Item = Check> {
        [
            (self.authoritative_on == kind).then_some(Check::Authoritative),
            (self.optimistic_on == kind).then_some(Check::Optimistic),
        ]
        .into_iter()
        .flatten()
    }
}

/// Events that trigger (authoritative, optimistic) checks for a field kind.
pub fn live_events(kind: FieldKind) -> (EventKind, EventKind) {
    match kind {
        FieldKind::Checkbox | FieldKind::Radio | FieldKind::Select => {
            (EventKind::Change, EventKind::Change)
        }
        FieldKind::Text
        | FieldKind::Email
        | FieldKind::Tel
        | FieldKind::SelectMultiple
        | FieldKind::Hidden
        | FieldKind::Other => (EventKind::Blur, EventKind::Input),
    }
}

impl FormValidator {
    /// Register live checks for every required field in `form`.
    pub fn attach_live_validation(&mut self, form: &Element) -> Vec<Subscription> {
        let required = &self.options.required_class;
        let field_ids = collect_ids(form, |el| el.is_field() && el.has_class(required));

        let mut subscriptions = Vec::with_capacity(field_ids.len());
        for field_id in field_ids {
            let Some(field) = find_element(form, &field_id) else {
                continue;
            };
            let (authoritative_on, optimistic_on) = live_events(FieldKind::of(field));

            let subscription = Subscription(self.next_subscription);
            self.next_subscription += 1;

            log::debug!(
                "[attach_live_validation] field={field_id} authoritative={authoritative_on:?} optimistic={optimistic_on:?}"
            );
            self.bindings.push(LiveBinding {
                subscription,
                field_id,
                authoritative_on,
                optimistic_on,
            });
            subscriptions.push(subscription);
        }
        subscriptions
    }

    /// Remove a field's listeners. Returns false if the handle was already detached.
    pub fn detach(&mut self, subscription: Subscription) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.subscription != subscription);
        self.bindings.len() != before
    }

    /// Remove every registered listener.
    pub fn detach_all(&mut self) {
        self.bindings.clear();
    }

    /// Whether any live listener is registered.
    pub fn is_watching(&self) -> bool {
        !self.bindings.is_empty()
    }

    /// Checks registered for `field_id` on events of `kind`, in run order.
    pub fn listeners(&self, field_id: &str, kind: EventKind) -> Vec<Check> {
        self.bindings
            .iter()
            .filter(|b| b.field_id == field_id)
            .flat_map(|b| b.checks_for(kind))
            .collect()
    }

    /// Route a UI event to the checks registered for its target. The
    /// authoritative check runs before the optimistic one when both listen to
    /// the same event. Returns the checks that ran.
    pub fn dispatch(&self, form: &mut Element, event: &Event) -> Vec<Check> {
        let checks = self.listeners(event.target(), event.kind());

        for check in &checks {
            match check {
                Check::Authoritative => {
                    self.validate_field(form, event.target());
                }
                Check::Optimistic => {
                    self.on_field_improved(form, event.target());
                }
            }
        }

        if !checks.is_empty() {
            log::trace!("[dispatch] {event:?} ran {checks:?}");
        }
        checks
    }
}
