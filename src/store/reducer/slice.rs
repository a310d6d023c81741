use super::super::action::SliceAction;
use super::super::command::Command;
use super::super::state::Slice;

pub fn reduce<T>(slice: &mut Slice<T>, action: SliceAction<T>) -> Vec<Command> {
    match action {
        SliceAction::Loading => slice.begin_loading(),
        SliceAction::Add(items) => slice.replace_items(items),
        SliceAction::Failed(message) => slice.fail(message),
    }
    Vec::new()
}
