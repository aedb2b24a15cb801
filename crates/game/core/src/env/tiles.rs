//! Tile registry.
//!
//! A [`Tile`] is an immutable template describing one cell's terrain: whether
//! it can be walked on, whether it lets light through, and how it looks when
//! lit (currently visible) or dark (explored but out of sight). Grids hold
//! copies of these templates; nothing mutates a template in place.

use bitflags::bitflags;

/// 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Self = Self(0, 0, 0);
    pub const WHITE: Self = Self(255, 255, 255);
}

/// One drawable cell: a character with foreground and background colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Glyph {
    pub const fn new(ch: char, fg: Rgb, bg: Rgb) -> Self {
        Self { ch, fg, bg }
    }
}

/// Appearance of cells that have never been seen.
pub const SHROUD: Glyph = Glyph::new(' ', Rgb::WHITE, Rgb::BLACK);

bitflags! {
    /// Passability and opacity of a tile.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TileFlags: u8 {
        const WALKABLE    = 1 << 0;
        const TRANSPARENT = 1 << 1;
    }
}

/// Immutable descriptor for one kind of terrain cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    terrain: TerrainKind,
    flags: TileFlags,
    dark: Glyph,
    light: Glyph,
}

impl Tile {
    pub const FLOOR: Self = Self::new(
        TerrainKind::Floor,
        TileFlags::WALKABLE.union(TileFlags::TRANSPARENT),
        Glyph::new(' ', Rgb::WHITE, Rgb(50, 50, 150)),
        Glyph::new(' ', Rgb::WHITE, Rgb(200, 180, 50)),
    );

    pub const WALL: Self = Self::new(
        TerrainKind::Wall,
        TileFlags::empty(),
        Glyph::new(' ', Rgb::WHITE, Rgb(0, 0, 100)),
        Glyph::new(' ', Rgb::WHITE, Rgb(130, 110, 50)),
    );

    pub const fn new(terrain: TerrainKind, flags: TileFlags, dark: Glyph, light: Glyph) -> Self {
        Self {
            terrain,
            flags,
            dark,
            light,
        }
    }

    pub const fn terrain(&self) -> TerrainKind {
        self.terrain
    }

    pub const fn flags(&self) -> TileFlags {
        self.flags
    }

    pub const fn is_walkable(&self) -> bool {
        self.flags.contains(TileFlags::WALKABLE)
    }

    pub const fn is_transparent(&self) -> bool {
        self.flags.contains(TileFlags::TRANSPARENT)
    }

    /// Appearance while explored but outside the field of view.
    pub const fn dark(&self) -> Glyph {
        self.dark
    }

    /// Appearance while inside the field of view.
    pub const fn light(&self) -> Glyph {
        self.light
    }
}

/// Canonical terrain classes with a registered tile template.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TerrainKind {
    Floor,
    Wall,
}

impl TerrainKind {
    /// Returns a copy of the registered template for this terrain.
    pub const fn tile(self) -> Tile {
        match self {
            TerrainKind::Floor => Tile::FLOOR,
            TerrainKind::Wall => Tile::WALL,
        }
    }
}
