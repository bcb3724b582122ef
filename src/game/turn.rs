//! Turn resolution
//!
//! Pure helpers that turn the doors of a level and the player's answer
//! into a decision. No I/O and no state changes happen here.

use crate::data::MenuActions;
use crate::entities::Hostile;
use crate::world::Door;

/// What a finished turn means for the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Keep playing (if still alive)
    Continue,
    SaveAndExit,
    Exit,
    /// Safe door on the final level
    Victory,
    /// Player died during the turn
    Death,
}

/// How a game session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Victory,
    Death,
    SavedAndExited,
    Exited,
}

/// Non-door entries in the choice list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SaveAndExit,
    Exit,
}

/// What the picked option turned out to be
#[derive(Debug, Clone, Copy)]
pub enum Choice<'a> {
    Menu(MenuAction),
    Walker(&'a dyn Hostile),
    Safe,
}

/// Door names followed by the menu actions.
/// Doors named like a menu action are left out; picking that label
/// always runs the menu action.
pub fn build_choices(doors: &[Door], menu: &MenuActions) -> Vec<String> {
    let mut choices = Vec::with_capacity(doors.len() + 2);
    for door in doors {
        if menu.contains(&door.name) {
            log::warn!("Door '{}' is shadowed by the menu action of the same name", door.name);
            continue;
        }
        choices.push(door.name.clone());
    }
    choices.extend(menu.labels().iter().map(|label| label.to_string()));
    choices
}

/// Menu action for `choice`, if it is one
pub fn menu_action(choice: &str, menu: &MenuActions) -> Option<MenuAction> {
    if choice == menu.save_and_exit {
        Some(MenuAction::SaveAndExit)
    } else if choice == menu.exit {
        Some(MenuAction::Exit)
    } else {
        None
    }
}

/// Classify the player's pick. Menu actions win over doors; a door that
/// is missing or has no walker bound is safe.
pub fn classify<'a>(choice: &str, doors: &'a [Door], menu: &MenuActions) -> Choice<'a> {
    if let Some(action) = menu_action(choice, menu) {
        return Choice::Menu(action);
    }

    match doors
        .iter()
        .find(|door| door.name == choice)
        .and_then(Door::hostile)
    {
        Some(walker) => Choice::Walker(walker),
        None => Choice::Safe,
    }
}
