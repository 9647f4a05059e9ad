//! # Dog Catalog
//!
//! The fixed, in-memory list of dogs shown on the list screen.
//!
//! Records are created once at startup by [`seed_catalog`] and never change.
//! Images are referenced through [`Avatar`], an opaque handle to art that is
//! compiled into the binary, so looking one up cannot fail.

use std::fmt;

/// Handle to one of the bundled dog images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Avatar {
    Bronx,
    Edison,
    Gunner,
    Lucas,
}

impl Avatar {
    /// Order the seed list cycles through.
    pub const ALL: [Avatar; 4] = [Avatar::Bronx, Avatar::Edison, Avatar::Gunner, Avatar::Lucas];

    /// Base name used for the seed records (`bronx1`, `edison1`, ...).
    pub fn stem(self) -> &'static str {
        match self {
            Avatar::Bronx => "bronx",
            Avatar::Edison => "edison",
            Avatar::Gunner => "gunner",
            Avatar::Lucas => "lucas",
        }
    }

    /// Full-size art for the detail screen header.
    pub fn art(self) -> &'static str {
        match self {
            Avatar::Bronx => include_str!("../../assets/bronx.txt"),
            Avatar::Edison => include_str!("../../assets/edison.txt"),
            Avatar::Gunner => include_str!("../../assets/gunner.txt"),
            Avatar::Lucas => include_str!("../../assets/lucas.txt"),
        }
    }

    /// Two-line thumbnail for list rows. Every line is the same width.
    pub fn thumbnail(self) -> [&'static str; 2] {
        match self {
            Avatar::Bronx => ["o'')}__", " `_/ _)"],
            Avatar::Edison => ["(  @\\__", "/    _O"],
            Avatar::Gunner => ["\\_/_\\_/", " )O_O( "],
            Avatar::Lucas => ["__/_ `.", "\\_,` |\\"],
        }
    }
}

impl fmt::Display for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// One listable dog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    pub name: String,
    pub age: u32,
    pub avatar: Avatar,
}

impl Dog {
    pub fn new(name: impl Into<String>, age: u32, avatar: Avatar) -> Self {
        Self {
            name: name.into(),
            age,
            avatar,
        }
    }
}

/// Number of times the seed list cycles through every avatar.
const SEED_CYCLES: u32 = 3;

/// Builds the startup catalog: three cycles of the four avatars, named by
/// avatar stem plus cycle number.
pub fn seed_catalog() -> Vec<Dog> {
    (1..=SEED_CYCLES)
        .flat_map(|cycle| {
            Avatar::ALL
                .into_iter()
                .map(move |avatar| Dog::new(format!("{}{}", avatar.stem(), cycle), 1, avatar))
        })
        .collect()
}
