use kudos_api::{CommentId, ShoutoutId, User};

use crate::{mention, MentionPopup, MentionSpan};

/// Identifies one comment input field: either the top-level comment box of a
/// shout-out, or the reply box under one of its comments.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ComposerKey {
    Shoutout(ShoutoutId),
    Reply(ShoutoutId, CommentId),
}

impl ComposerKey {
    pub fn shoutout_id(&self) -> ShoutoutId {
        match self {
            ComposerKey::Shoutout(id) => *id,
            ComposerKey::Reply(id, _) => *id,
        }
    }

    /// `parent_id` to send along with the posted comment
    pub fn parent_id(&self) -> Option<CommentId> {
        match self {
            ComposerKey::Shoutout(_) => None,
            ComposerKey::Reply(_, comment) => Some(*comment),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyOutcome {
    /// The popup handled the key; the UI must swallow the event
    Consumed,
    /// Not an autocomplete interaction; let the field/form react normally
    Passthrough,
}

/// Everything one input field needs in a single record: the draft text, the
/// detected mention span, the popup, and the submission guard. Keeping these
/// together means closing the popup can never leave a stale query behind,
/// and the whole interaction is testable without a DOM.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Composer {
    text: String,
    span: Option<MentionSpan>,
    popup: MentionPopup,
    in_flight: bool,
}

impl Default for Composer {
    fn default() -> Composer {
        Composer::new()
    }
}

impl Composer {
    pub fn new() -> Composer {
        Composer {
            text: String::new(),
            span: None,
            popup: MentionPopup::Closed,
            in_flight: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn popup(&self) -> &MentionPopup {
        &self.popup
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Reacts to a text change: re-runs the detector at the caret and moves
    /// the popup accordingly.
    pub fn set_text(&mut self, text: String, caret: usize) {
        self.span = mention::detect(&text, caret);
        self.text = text;
        self.popup.sync(self.span.as_ref());
    }

    /// Candidates for the current popup query, empty when the popup is closed
    pub fn candidates(&self, roster: &[User]) -> Vec<User> {
        match self.popup.query() {
            Some(query) => mention::candidates(query, roster),
            None => Vec::new(),
        }
    }

    /// Routes a keyboard event through the popup state machine
    pub fn key(&mut self, key: Key, roster: &[User]) -> KeyOutcome {
        if !self.popup.is_open() {
            return KeyOutcome::Passthrough;
        }
        let candidates = self.candidates(roster);
        match key {
            Key::ArrowDown => {
                self.popup.move_down(candidates.len());
                KeyOutcome::Consumed
            }
            Key::ArrowUp => {
                self.popup.move_up(candidates.len());
                KeyOutcome::Consumed
            }
            Key::Escape => {
                self.popup.dismiss();
                KeyOutcome::Consumed
            }
            Key::Enter => match self.popup.confirm(candidates.len()) {
                Some(chosen) => {
                    self.choose(&candidates[chosen]);
                    KeyOutcome::Consumed
                }
                None => KeyOutcome::Passthrough,
            },
        }
    }

    /// Inserts the chosen candidate over the detected span and closes the
    /// popup. Also used directly for mouse selection.
    pub fn choose(&mut self, user: &User) {
        if let Some(span) = self.span.take() {
            self.text = mention::insert(&self.text, &span, &user.full_name);
        }
        self.popup.dismiss();
    }

    /// At most one submission may be in flight per field. Returns whether
    /// the caller may start one; empty drafts are refused outright.
    pub fn begin_submission(&mut self) -> bool {
        if self.in_flight || self.text.trim().is_empty() {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Applies the submission result: success clears the field and closes
    /// the popup, failure keeps the draft intact so the user can retry.
    pub fn submission_done(&mut self, success: bool) {
        self.in_flight = false;
        if success {
            self.text.clear();
            self.span = None;
            self.popup.dismiss();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserId;

    fn user(id: i64, full_name: &str) -> User {
        User {
            id: UserId(id),
            email: format!("{}@example.com", full_name.to_lowercase().replace(' ', ".")),
            full_name: full_name.to_string(),
            ..User::stub()
        }
    }

    fn type_text(composer: &mut Composer, text: &str) {
        composer.set_text(text.to_string(), text.len());
    }

    #[test]
    fn typing_a_mention_opens_the_popup() {
        let mut composer = Composer::new();
        type_text(&mut composer, "Great work @Al");
        assert_eq!(composer.popup().query(), Some("Al"));
        assert_eq!(composer.popup().highlighted(), Some(0));
    }

    #[test]
    fn enter_inserts_the_highlighted_candidate_and_closes() {
        let roster = vec![user(1, "Alice Ray"), user(2, "Albert Moss")];
        let mut composer = Composer::new();
        type_text(&mut composer, "Great work @Al");
        assert_eq!(composer.key(Key::Enter, &roster), KeyOutcome::Consumed);
        assert_eq!(composer.text(), "Great work @Alice Ray ");
        assert!(!composer.popup().is_open());
    }

    #[test]
    fn arrows_move_the_highlight_between_candidates() {
        let roster = vec![user(1, "Alice Ray"), user(2, "Albert Moss")];
        let mut composer = Composer::new();
        type_text(&mut composer, "@al");
        composer.key(Key::ArrowDown, &roster);
        assert_eq!(composer.popup().highlighted(), Some(1));
        composer.key(Key::Enter, &roster);
        assert_eq!(composer.text(), "@Albert Moss ");
    }

    #[test]
    fn escape_dismisses_without_touching_the_text() {
        let roster = vec![user(1, "Alice Ray")];
        let mut composer = Composer::new();
        type_text(&mut composer, "hi @al");
        assert_eq!(composer.key(Key::Escape, &roster), KeyOutcome::Consumed);
        assert!(!composer.popup().is_open());
        assert_eq!(composer.text(), "hi @al");
    }

    #[test]
    fn enter_falls_through_when_nothing_matches() {
        let roster = vec![user(1, "Alice Ray")];
        let mut composer = Composer::new();
        type_text(&mut composer, "ping @zzz");
        assert_eq!(composer.key(Key::Enter, &roster), KeyOutcome::Passthrough);
    }

    #[test]
    fn keys_pass_through_while_the_popup_is_closed() {
        let roster = vec![user(1, "Alice Ray")];
        let mut composer = Composer::new();
        type_text(&mut composer, "plain text");
        assert_eq!(composer.key(Key::Enter, &roster), KeyOutcome::Passthrough);
        assert_eq!(composer.key(Key::ArrowDown, &roster), KeyOutcome::Passthrough);
    }

    #[test]
    fn mouse_choice_uses_the_detected_span() {
        let roster = vec![user(1, "Alice Ray")];
        let mut composer = Composer::new();
        type_text(&mut composer, "Great work @Al");
        composer.choose(&roster[0]);
        assert_eq!(composer.text(), "Great work @Alice Ray ");
        assert!(!composer.popup().is_open());
    }

    #[test]
    fn at_most_one_submission_in_flight() {
        let mut composer = Composer::new();
        type_text(&mut composer, "nice!");
        assert!(composer.begin_submission());
        assert!(!composer.begin_submission());
        composer.submission_done(false);
        // the draft survived the failure, a retry is possible
        assert_eq!(composer.text(), "nice!");
        assert!(composer.begin_submission());
    }

    #[test]
    fn empty_drafts_are_not_submitted() {
        let mut composer = Composer::new();
        type_text(&mut composer, "   ");
        assert!(!composer.begin_submission());
    }

    #[test]
    fn successful_submission_clears_the_field() {
        let mut composer = Composer::new();
        type_text(&mut composer, "thanks @al");
        assert!(composer.begin_submission());
        composer.submission_done(true);
        assert_eq!(composer.text(), "");
        assert!(!composer.popup().is_open());
        assert!(!composer.is_in_flight());
    }
}
