pub mod comments;
pub mod slice;

use super::action::Action;
use super::command::Command;
use super::state::AppState;

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Fetch(resource) => vec![Command::FetchCollection { resource }],
        Action::Dishes(action) => slice::reduce(&mut state.dishes, action),
        Action::Comments(action) => slice::reduce(&mut state.comments, action),
        Action::Promotions(action) => slice::reduce(&mut state.promotions, action),
        Action::AddComment(new_comment) => comments::add_comment(&mut state.comments, new_comment),
    }
}
