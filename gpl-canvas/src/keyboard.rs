use minifb::{Key, KeyRepeat, Window};

/// What a key press asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Reload the program file and run it again
    Rerun,
    /// Feed an ad-hoc GPL command to the session
    Command(&'static str),
}

pub fn action_for(key: Key) -> Option<Action> {
    match key {
        Key::F5 => Some(Action::Rerun),
        Key::C => Some(Action::Command("clear")),
        Key::R => Some(Action::Command("reset")),
        _ => None,
    }
}

/// Actions for keys that went down since the last frame.
pub fn poll(window: &Window) -> Vec<Action> {
    window
        .get_keys_pressed(KeyRepeat::No)
        .into_iter()
        .filter_map(action_for)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings() {
        assert_eq!(action_for(Key::F5), Some(Action::Rerun));
        assert_eq!(action_for(Key::C), Some(Action::Command("clear")));
        assert_eq!(action_for(Key::R), Some(Action::Command("reset")));
        assert_eq!(action_for(Key::Space), None);
    }

    #[test]
    fn bound_commands_are_valid_gpl() {
        for key in [Key::C, Key::R] {
            if let Some(Action::Command(line)) = action_for(key) {
                assert!(gpl::parser::parse_line(line, gpl::LineNumber::AdHoc).succeeded());
            }
        }
    }
}
