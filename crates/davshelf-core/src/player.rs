//! External player URI schemes.
//!
//! The registry is a fixed, ordered table built at compile time. Lookups by
//! user-supplied identifiers go through [`PlayerRegistry::resolve`], which
//! substitutes the default player for anything unknown.

/// Placeholder replaced by the resolved file URL.
pub const URL_PLACEHOLDER: &str = "{url}";

/// Identifier of the player used when a selection is missing or unknown.
pub const DEFAULT_PLAYER: &str = "vlc";

/// A player identifier paired with its URL template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub id: &'static str,
    pub template: &'static str,
}

impl Player {
    /// Substitute `url` into the template.
    pub fn format(&self, url: &str) -> String {
        self.template.replace(URL_PLACEHOLDER, url)
    }
}

#[derive(Debug)]
pub struct PlayerRegistry {
    players: &'static [Player],
    default_index: usize,
}

static STANDARD: PlayerRegistry = PlayerRegistry {
    players: &[
        Player {
            id: "vlc",
            template: "vlc://{url}",
        },
        Player {
            id: "mxplayer",
            template: "mxplayer://{url}",
        },
        Player {
            id: "mpv",
            template: "mpv://{url}",
        },
        // Opens the raw stream URL in the browser.
        Player {
            id: "web",
            template: "{url}",
        },
    ],
    default_index: 0,
};

impl PlayerRegistry {
    /// The process-wide registry of supported players.
    pub fn standard() -> &'static PlayerRegistry {
        &STANDARD
    }

    /// Exact lookup by identifier.
    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Whether `id` names a known player.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The default player (`vlc`).
    pub fn default_player(&self) -> &Player {
        &self.players[self.default_index]
    }

    /// Lookup with default: a missing or unrecognized identifier yields the
    /// default player instead of failing.
    pub fn resolve(&self, id: Option<&str>) -> &Player {
        id.and_then(|id| self.get(id))
            .unwrap_or_else(|| self.default_player())
    }

    /// Like [`resolve`](Self::resolve), but falls back to `preferred` before
    /// the built-in default.
    pub fn resolve_or(&self, id: Option<&str>, preferred: &str) -> &Player {
        id.and_then(|id| self.get(id))
            .or_else(|| self.get(preferred))
            .unwrap_or_else(|| self.default_player())
    }

    /// Known identifiers, in table order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.players.iter().map(|p| p.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}
