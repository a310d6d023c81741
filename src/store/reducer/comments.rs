use std::collections::HashSet;

use crate::domain::{Comment, CommentId, NewComment};

use super::super::command::Command;
use super::super::state::Slice;

pub fn add_comment(comments: &mut Slice<Comment>, new_comment: NewComment) -> Vec<Command> {
    append(comments, new_comment, chrono::Utc::now().to_rfc3339());
    Vec::new()
}

/// Appends with the next free id; existing entries keep their order.
pub(super) fn append(comments: &mut Slice<Comment>, new_comment: NewComment, date: String) {
    let id = next_comment_id(comments.items());
    log::debug!(
        "adding comment {id} for dish {} by {}",
        new_comment.dish_id,
        new_comment.author
    );
    comments.push(new_comment.into_comment(id, date));
}

/// One past the largest id, or the lowest unused non-negative id once the
/// largest is `i64::MAX`.
pub(super) fn next_comment_id(comments: &[Comment]) -> CommentId {
    match comments.iter().map(|c| c.id).max() {
        None => 0,
        Some(max) => max
            .checked_add(1)
            .unwrap_or_else(|| lowest_free_id(comments)),
    }
}

fn lowest_free_id(comments: &[Comment]) -> CommentId {
    let taken: HashSet<CommentId> = comments.iter().map(|c| c.id).collect();
    // len + 1 candidates for at most len taken ids.
    (0..=comments.len() as CommentId)
        .find(|id| !taken.contains(id))
        .unwrap_or_default()
}
