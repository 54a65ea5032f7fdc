use std::collections::HashMap;

use kudos_api::{Comment, CommentId};

/// A comment plus its direct replies, in original list order
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentNode {
    pub comment: Comment,
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    /// Number of comments in this subtree, itself included
    pub fn len(&self) -> usize {
        1 + self.replies.iter().map(CommentNode::len).sum::<usize>()
    }
}

/// Builds the reply forest from the flat, parent-referencing list the server
/// sends. Rebuilt from scratch on every render, never mutated in place.
///
/// Roots are the comments without a parent, children keep their original
/// relative order. A comment whose parent id matches nothing in the list is
/// dropped, not promoted to root: the server only hands out dangling parents
/// when the parent was deleted, and showing such replies detached would be
/// worse than hiding them.
pub fn build_forest(comments: &[Comment]) -> Vec<CommentNode> {
    let mut children: HashMap<Option<CommentId>, Vec<&Comment>> = HashMap::new();
    for c in comments {
        children.entry(c.parent_id).or_default().push(c);
    }
    // Cycles cannot contain a root, so they are simply never reached
    let forest = collect(None, &children);
    let kept = forest.iter().map(CommentNode::len).sum::<usize>();
    if kept != comments.len() {
        tracing::debug!(
            total = comments.len(),
            kept,
            "dropped comments with dangling parent ids"
        );
    }
    forest
}

fn collect(
    parent: Option<CommentId>,
    children: &HashMap<Option<CommentId>, Vec<&Comment>>,
) -> Vec<CommentNode> {
    children
        .get(&parent)
        .map(|list| {
            list.iter()
                .map(|c| CommentNode {
                    comment: (*c).clone(),
                    replies: collect(Some(c.id), children),
                })
                .collect()
        })
        .unwrap_or_default()
}
