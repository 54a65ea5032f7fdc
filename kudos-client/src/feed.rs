use std::sync::Arc;

use kudos_api::{
    Comment, Reaction, ReactionId, ReactionKind, Shoutout, ShoutoutId, Time, User, UserId,
};

/// Client-side cache of everything the feed view needs, fetched once per
/// session and patched in place as the user interacts. The server stays the
/// source of truth; every mutation here mirrors a call that already
/// succeeded (or is reconciled by the next reload).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeedDump {
    pub me: User,
    /// Mention roster, in the order the server returned it
    pub roster: Arc<Vec<User>>,
    /// Newest first, as served by `/shoutouts/`
    pub shoutouts: Arc<Vec<Arc<Shoutout>>>,
}

impl FeedDump {
    pub fn stub() -> FeedDump {
        FeedDump {
            me: User::stub(),
            roster: Arc::new(Vec::new()),
            shoutouts: Arc::new(Vec::new()),
        }
    }

    pub fn set_roster(&mut self, users: Vec<User>) {
        self.roster = Arc::new(users);
    }

    pub fn set_shoutouts(&mut self, shoutouts: Vec<Shoutout>) {
        self.shoutouts = Arc::new(shoutouts.into_iter().map(Arc::new).collect());
    }

    pub fn shoutout(&self, id: ShoutoutId) -> Option<Arc<Shoutout>> {
        self.shoutouts.iter().find(|s| s.id == id).cloned()
    }

    /// Replaces an existing shout-out, or prepends a new one (the feed is
    /// newest first)
    pub fn upsert_shoutout(&mut self, shoutout: Shoutout) {
        let shoutouts = Arc::make_mut(&mut self.shoutouts);
        match shoutouts.iter_mut().find(|s| s.id == shoutout.id) {
            Some(slot) => *slot = Arc::new(shoutout),
            None => shoutouts.insert(0, Arc::new(shoutout)),
        }
    }

    /// Replaces the comment list of one shout-out. Returns false when the
    /// shout-out is no longer in the feed, in which case the result was
    /// stale and has been dropped.
    pub fn set_comments(&mut self, id: ShoutoutId, comments: Vec<Comment>) -> bool {
        let shoutouts = Arc::make_mut(&mut self.shoutouts);
        match shoutouts.iter_mut().find(|s| s.id == id) {
            Some(slot) => {
                Arc::make_mut(slot).comments = comments;
                true
            }
            None => {
                tracing::debug!(shoutout = id.0, "dropping comments for unknown shout-out");
                false
            }
        }
    }

    /// Locally mirrors the server's reaction contract: reacting again with
    /// the same kind removes the reaction, a different kind replaces it.
    pub fn toggle_reaction(&mut self, id: ShoutoutId, kind: ReactionKind, at: Time) -> bool {
        let me = self.me.clone();
        let shoutouts = Arc::make_mut(&mut self.shoutouts);
        let Some(slot) = shoutouts.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        let shoutout = Arc::make_mut(slot);
        let mine = shoutout.reactions.iter().position(|r| r.user.id == me.id);
        match mine {
            Some(i) if shoutout.reactions[i].kind == kind => {
                shoutout.reactions.remove(i);
            }
            Some(i) => shoutout.reactions[i].kind = kind,
            None => shoutout.reactions.push(Reaction {
                id: ReactionId(kudos_api::STUB_ID),
                kind,
                user: me,
                created_at: at,
            }),
        }
        true
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.roster.iter().find(|u| u.id == id)
    }

    /// Display names known to this session, for mention highlighting
    pub fn display_names(&self) -> Vec<String> {
        self.roster.iter().map(|u| u.full_name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(secs: i64) -> Time {
        chrono::Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn user(id: i64, full_name: &str) -> User {
        User {
            id: UserId(id),
            full_name: full_name.to_string(),
            ..User::stub()
        }
    }

    fn shoutout(id: i64) -> Shoutout {
        Shoutout {
            id: ShoutoutId(id),
            content: String::from("kudos!"),
            created_at: t(id),
            created_by: user(1, "Alice"),
            recipients: vec![user(2, "Bob")],
            reactions: Vec::new(),
            comments: Vec::new(),
            attachments: Vec::new(),
        }
    }

    fn dump_with(shoutouts: Vec<Shoutout>) -> FeedDump {
        let mut dump = FeedDump {
            me: user(1, "Alice"),
            ..FeedDump::stub()
        };
        dump.set_roster(vec![user(1, "Alice"), user(2, "Bob")]);
        dump.set_shoutouts(shoutouts);
        dump
    }

    #[test]
    fn upsert_prepends_new_shoutouts() {
        let mut dump = dump_with(vec![shoutout(1)]);
        dump.upsert_shoutout(shoutout(2));
        let ids = dump.shoutouts.iter().map(|s| s.id.0).collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut dump = dump_with(vec![shoutout(1), shoutout(2)]);
        let mut updated = shoutout(1);
        updated.content = String::from("edited");
        dump.upsert_shoutout(updated);
        let ids = dump.shoutouts.iter().map(|s| s.id.0).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(dump.shoutouts[0].content, "edited");
    }

    #[test]
    fn stale_comment_results_are_dropped() {
        let mut dump = dump_with(vec![shoutout(1)]);
        assert!(!dump.set_comments(ShoutoutId(99), Vec::new()));
        assert!(dump.set_comments(ShoutoutId(1), Vec::new()));
    }

    #[test]
    fn same_kind_reaction_toggles_off() {
        let mut dump = dump_with(vec![shoutout(1)]);
        assert!(dump.toggle_reaction(ShoutoutId(1), ReactionKind::Clap, t(10)));
        assert_eq!(dump.shoutouts[0].reactions.len(), 1);
        assert!(dump.toggle_reaction(ShoutoutId(1), ReactionKind::Clap, t(11)));
        assert!(dump.shoutouts[0].reactions.is_empty());
    }

    #[test]
    fn different_kind_reaction_replaces() {
        let mut dump = dump_with(vec![shoutout(1)]);
        dump.toggle_reaction(ShoutoutId(1), ReactionKind::Like, t(10));
        dump.toggle_reaction(ShoutoutId(1), ReactionKind::Star, t(11));
        assert_eq!(dump.shoutouts[0].reactions.len(), 1);
        assert_eq!(dump.shoutouts[0].reactions[0].kind, ReactionKind::Star);
    }
}
