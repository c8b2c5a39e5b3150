//! Room registry
//!
//! The set of bookable rooms is fixed when the service starts and never
//! changes afterwards. Identifiers are matched exactly, case included.

pub const DEFAULT_ROOMS: &[&str] = &["Room A", "Room B", "Room C"];

/// Ordered set of valid room identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRegistry {
    rooms: Vec<String>,
}

impl RoomRegistry {
    /// Builds a registry, keeping the first occurrence of any repeated name.
    pub fn new<I, S>(rooms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for room in rooms {
            let room = room.into();
            if !unique.contains(&room) {
                unique.push(room);
            }
        }
        Self { rooms: unique }
    }

    pub fn contains(&self, room: &str) -> bool {
        self.rooms.iter().any(|r| r == room)
    }

    pub fn rooms(&self) -> &[String] {
        &self.rooms
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_ROOMS.iter().copied())
    }
}
