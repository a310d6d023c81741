pub mod fetch;


use super::Store;
use super::command::Command;

pub fn run(store: &mut Store, command: Command) {
    match command {
        Command::FetchCollection { resource } => fetch::fetch_collection(store, resource),
    }
}
