//! crates/logging/src/levels.rs
//! Flag enum and level structure for debug verbosity.

/// Debug flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Traversal steps and yielded paths.
    Walk,
    /// Directories being opened and entered.
    Enter,
    /// Depth-limit pruning decisions.
    Depth,
    /// Deferred directory queue used by breadth-first traversal.
    Queue,
    /// Shared handle ownership changes.
    Own,
    /// Filesystem enumeration failures.
    Io,
}

impl DebugFlag {
    /// Every flag, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Walk,
        Self::Enter,
        Self::Depth,
        Self::Queue,
        Self::Own,
        Self::Io,
    ];

    /// Returns the token used to name the flag in `NAME[LEVEL]` strings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Enter => "enter",
            Self::Depth => "depth",
            Self::Queue => "queue",
            Self::Own => "own",
            Self::Io => "io",
        }
    }

    /// Looks up a flag by its token name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == name)
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DebugLevels {
    /// Traversal step level.
    pub walk: u8,
    /// Directory entry level.
    pub enter: u8,
    /// Depth pruning level.
    pub depth: u8,
    /// Deferred queue level.
    pub queue: u8,
    /// Ownership changes level.
    pub own: u8,
    /// Enumeration failure level.
    pub io: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Walk => self.walk,
            DebugFlag::Enter => self.enter,
            DebugFlag::Depth => self.depth,
            DebugFlag::Queue => self.queue,
            DebugFlag::Own => self.own,
            DebugFlag::Io => self.io,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Walk => self.walk = level,
            DebugFlag::Enter => self.enter = level,
            DebugFlag::Depth => self.depth = level,
            DebugFlag::Queue => self.queue = level,
            DebugFlag::Own => self.own = level,
            DebugFlag::Io => self.io = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        for flag in DebugFlag::ALL {
            self.set(flag, level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_what_set_stored() {
        let mut levels = DebugLevels::default();
        levels.set(DebugFlag::Queue, 3);
        assert_eq!(levels.get(DebugFlag::Queue), 3);
        assert_eq!(levels.get(DebugFlag::Walk), 0);
    }

    #[test]
    fn set_all_touches_every_flag() {
        let mut levels = DebugLevels::default();
        levels.set_all(2);
        for flag in DebugFlag::ALL {
            assert_eq!(levels.get(flag), 2, "{flag:?}");
        }
    }

    #[test]
    fn names_round_trip_through_lookup() {
        for flag in DebugFlag::ALL {
            assert_eq!(DebugFlag::from_name(flag.name()), Some(flag));
        }
        assert_eq!(DebugFlag::from_name("flist"), None);
    }
}
