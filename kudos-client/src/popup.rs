use crate::MentionSpan;

/// Transient state of the mention-autocomplete popup attached to one input
/// field. All transitions are synchronous reactions to a single input event;
/// there is no timer and nothing runs in the background.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MentionPopup {
    Closed,
    Open { query: String, highlighted: usize },
}

impl Default for MentionPopup {
    fn default() -> MentionPopup {
        MentionPopup::Closed
    }
}

impl MentionPopup {
    pub fn is_open(&self) -> bool {
        matches!(self, MentionPopup::Open { .. })
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            MentionPopup::Closed => None,
            MentionPopup::Open { query, .. } => Some(query),
        }
    }

    pub fn highlighted(&self) -> Option<usize> {
        match self {
            MentionPopup::Closed => None,
            MentionPopup::Open { highlighted, .. } => Some(*highlighted),
        }
    }

    /// Follows the detector output after a text change: opens on a fresh
    /// span, updates the query while one stays active (resetting the
    /// highlight only when the query actually changed), closes otherwise.
    pub fn sync(&mut self, span: Option<&MentionSpan>) {
        match (&mut *self, span) {
            (MentionPopup::Closed, Some(span)) => {
                *self = MentionPopup::Open {
                    query: span.query.clone(),
                    highlighted: 0,
                };
            }
            (MentionPopup::Open { query, highlighted }, Some(span)) => {
                if *query != span.query {
                    *query = span.query.clone();
                    *highlighted = 0;
                }
            }
            (MentionPopup::Open { .. }, None) => *self = MentionPopup::Closed,
            (MentionPopup::Closed, None) => (),
        }
    }

    pub fn move_down(&mut self, candidate_count: usize) {
        if let MentionPopup::Open { highlighted, .. } = self {
            *highlighted = (*highlighted + 1) % candidate_count.max(1);
        }
    }

    pub fn move_up(&mut self, candidate_count: usize) {
        if let MentionPopup::Open { highlighted, .. } = self {
            let n = candidate_count.max(1);
            *highlighted = (*highlighted + n - 1) % n;
        }
    }

    /// Resolves Enter: with candidates available, closes the popup and
    /// returns the index to select (falling back to 0 if the tracked index
    /// went out of range). With none, returns `None` and the caller lets the
    /// key fall through to normal form submission.
    pub fn confirm(&mut self, candidate_count: usize) -> Option<usize> {
        match self {
            MentionPopup::Open { highlighted, .. } if candidate_count > 0 => {
                let chosen = match *highlighted < candidate_count {
                    true => *highlighted,
                    false => 0,
                };
                *self = MentionPopup::Closed;
                Some(chosen)
            }
            _ => None,
        }
    }

    pub fn dismiss(&mut self) {
        *self = MentionPopup::Closed;
    }
}
