//! Levels and doors

use std::rc::Rc;

use crate::entities::Hostile;

/// A door the player can pick, optionally hiding a walker
#[derive(Debug, Clone)]
pub struct Door {
    pub name: String,
    pub walker: Option<Rc<dyn Hostile>>,
}

impl Door {
    pub fn safe(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            walker: None,
        }
    }

    pub fn guarded(name: impl Into<String>, walker: Rc<dyn Hostile>) -> Self {
        Self {
            name: name.into(),
            walker: Some(walker),
        }
    }

    /// The walker behind this door, if any
    pub fn hostile(&self) -> Option<&dyn Hostile> {
        self.walker.as_deref()
    }

    pub fn is_safe(&self) -> bool {
        self.walker.is_none()
    }
}

/// One stage of the map
#[derive(Debug, Clone)]
pub struct Level {
    /// Doors in configured order
    pub doors: Vec<Door>,
    /// Experience granted for picking a safe door
    pub experience: u32,
}

impl Level {
    pub fn new(doors: Vec<Door>, experience: u32) -> Self {
        Self { doors, experience }
    }
}
