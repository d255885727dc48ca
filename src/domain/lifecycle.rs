//! The booking form's Editing → Confirming → Closed progression.

/// Phase of an open booking form. A fresh form starts in `Editing`;
/// `Closed` is terminal and a new form gets a new phase value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingPhase {
    #[default]
    Editing,
    Confirming,
    Closed,
}

/// What the widget host must do after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseChange {
    /// Wipe the draft back to an empty form.
    pub clear_draft: bool,
    /// Fire the completion callback so the host unmounts the widget.
    pub notify_host: bool,
}

impl BookingPhase {
    /// Form submission. Accepted with any combination of filled or
    /// empty fields; the form performs no field-level validation.
    pub fn submit(&mut self) -> Option<PhaseChange> {
        match self {
            BookingPhase::Editing => {
                *self = BookingPhase::Confirming;
                Some(PhaseChange {
                    clear_draft: false,
                    notify_host: false,
                })
            }
            _ => None,
        }
    }

    /// The confirmation notice has been on screen for its full display
    /// interval.
    pub fn confirmation_elapsed(&mut self) -> Option<PhaseChange> {
        match self {
            BookingPhase::Confirming => {
                *self = BookingPhase::Closed;
                Some(PhaseChange {
                    clear_draft: true,
                    notify_host: true,
                })
            }
            _ => None,
        }
    }

    /// Explicit close, valid while editing or confirming. `Closed` is
    /// terminal, so a late timer or a second click never re-notifies
    /// the host.
    pub fn close(&mut self) -> Option<PhaseChange> {
        match self {
            BookingPhase::Editing | BookingPhase::Confirming => {
                *self = BookingPhase::Closed;
                Some(PhaseChange {
                    clear_draft: true,
                    notify_host: true,
                })
            }
            BookingPhase::Closed => None,
        }
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self, BookingPhase::Confirming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_moves_editing_to_confirming_without_side_effects() {
        let mut phase = BookingPhase::default();
        let change = phase.submit().unwrap();

        assert_eq!(phase, BookingPhase::Confirming);
        assert!(!change.clear_draft);
        assert!(!change.notify_host);
    }

    #[test]
    fn elapsed_confirmation_closes_clears_and_notifies() {
        let mut phase = BookingPhase::Confirming;
        let change = phase.confirmation_elapsed().unwrap();

        assert_eq!(phase, BookingPhase::Closed);
        assert!(change.clear_draft);
        assert!(change.notify_host);
    }

    #[test]
    fn cancel_while_editing_closes_immediately() {
        let mut phase = BookingPhase::Editing;
        let change = phase.close().unwrap();

        assert_eq!(phase, BookingPhase::Closed);
        assert!(change.clear_draft);
        assert!(change.notify_host);
    }

    #[test]
    fn cancel_while_confirming_is_also_allowed() {
        let mut phase = BookingPhase::Confirming;
        assert!(phase.close().is_some());
        assert_eq!(phase, BookingPhase::Closed);
    }

    #[test]
    fn host_is_notified_exactly_once() {
        // Close, then a straggling confirmation timer fires anyway.
        let mut phase = BookingPhase::Confirming;
        assert!(phase.close().unwrap().notify_host);
        assert!(phase.confirmation_elapsed().is_none());
        assert!(phase.close().is_none());
    }

    #[test]
    fn submitting_twice_has_no_second_transition() {
        let mut phase = BookingPhase::Editing;
        assert!(phase.submit().is_some());
        assert!(phase.submit().is_none());
        assert_eq!(phase, BookingPhase::Confirming);
    }

    #[test]
    fn elapsed_timer_in_editing_is_ignored() {
        let mut phase = BookingPhase::Editing;
        assert!(phase.confirmation_elapsed().is_none());
        assert_eq!(phase, BookingPhase::Editing);
    }
}
