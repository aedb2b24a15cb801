/// Starting combat stats for a fighter, as authored in templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterStats {
    pub hp: i32,
    pub defense: i32,
    pub power: i32,
}

impl FighterStats {
    pub const fn new(hp: i32, defense: i32, power: i32) -> Self {
        Self { hp, defense, power }
    }
}

/// Combat component attached to actors.
///
/// # Invariants
///
/// - `0 <= hp <= max_hp` after every write, whatever value was requested.
/// - `max_hp` is fixed at creation.
///
/// Reaching zero hp does not kill anyone by itself; combat code observes
/// [`Fighter::is_dead`] and drives the owning actor to its dead state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fighter {
    max_hp: i32,
    hp: i32,
    defense: i32,
    power: i32,
}

impl Fighter {
    /// Creates a fighter at full health. Negative `hp` is treated as zero.
    pub fn new(hp: i32, defense: i32, power: i32) -> Self {
        let max_hp = hp.max(0);
        Self {
            max_hp,
            hp: max_hp,
            defense,
            power,
        }
    }

    pub fn from_stats(stats: &FighterStats) -> Self {
        Self::new(stats.hp, stats.defense, stats.power)
    }

    #[inline]
    pub fn hp(&self) -> i32 {
        self.hp
    }

    #[inline]
    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    #[inline]
    pub fn defense(&self) -> i32 {
        self.defense
    }

    #[inline]
    pub fn power(&self) -> i32 {
        self.power
    }

    /// Stores `value` clamped to `[0, max_hp]` and returns the stored value.
    pub fn set_hp(&mut self, value: i32) -> i32 {
        self.hp = value.clamp(0, self.max_hp);
        self.hp
    }

    /// Subtracts `amount` from hp and returns how much health was actually lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.set_hp(self.hp.saturating_sub(amount));
        before - self.hp
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    /// Health readout in the `"{hp}/{max_hp}"` form shown next to the map.
    pub fn health_label(&self) -> String {
        format!("{}/{}", self.hp, self.max_hp)
    }
}
