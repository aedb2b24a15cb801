//! Entities placed on a map.
//!
//! Every entity shares identity, position and appearance; what it can *do* is
//! carried by [`EntityKind`]. Callers ask capability questions
//! ([`Entity::as_actor`], [`Entity::is_living_actor`]) instead of inspecting
//! concrete types.

use super::{EntityId, Fighter, FighterStats, Position};
use crate::ai::AiKind;
use crate::env::Rgb;

/// Draw priority. Lower ranks are drawn first, so higher ranks win a shared cell.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RenderOrder {
    Corpse,
    Item,
    Actor,
}

/// Category-specific data for an entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// Something that can take turns and fight (or used to, if dead).
    Actor(ActorState),
    /// Inert pickup lying on the floor.
    Item,
}

/// Actor-only state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorState {
    alive: bool,
    fighter: Option<Fighter>,
    ai: Option<AiKind>,
}

impl ActorState {
    pub fn new(fighter: Option<Fighter>, ai: Option<AiKind>) -> Self {
        Self {
            alive: true,
            fighter,
            ai,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn fighter(&self) -> Option<&Fighter> {
        self.fighter.as_ref()
    }

    pub fn fighter_mut(&mut self) -> Option<&mut Fighter> {
        self.fighter.as_mut()
    }

    /// Decision policy run during enemy turns. `None` for the player and corpses.
    pub fn ai(&self) -> Option<AiKind> {
        self.ai
    }
}

/// Blueprint for spawning an actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fighter: Option<FighterStats>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ai: Option<AiKind>,
}

impl ActorTemplate {
    pub fn player() -> Self {
        Self {
            name: "Player".into(),
            glyph: '@',
            color: Rgb::WHITE,
            fighter: Some(FighterStats::new(30, 2, 5)),
            ai: None,
        }
    }

    pub fn orc() -> Self {
        Self {
            name: "Orc".into(),
            glyph: 'o',
            color: Rgb(63, 127, 63),
            fighter: Some(FighterStats::new(10, 0, 3)),
            ai: Some(AiKind::Hostile),
        }
    }

    pub fn troll() -> Self {
        Self {
            name: "Troll".into(),
            glyph: 'T',
            color: Rgb(0, 127, 0),
            fighter: Some(FighterStats::new(16, 1, 4)),
            ai: Some(AiKind::Hostile),
        }
    }
}

/// A positioned world object.
///
/// `blocks_movement` and `render_order` come from the entity's category and
/// only change when an actor dies and becomes a corpse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    id: EntityId,
    position: Position,
    name: String,
    glyph: char,
    color: Rgb,
    blocks_movement: bool,
    render_order: RenderOrder,
    kind: EntityKind,
}

impl Entity {
    pub const CORPSE_GLYPH: char = '%';
    pub const CORPSE_COLOR: Rgb = Rgb(191, 0, 0);

    pub(crate) fn actor(id: EntityId, position: Position, template: &ActorTemplate) -> Self {
        let fighter = template.fighter.as_ref().map(Fighter::from_stats);
        Self {
            id,
            position,
            name: template.name.clone(),
            glyph: template.glyph,
            color: template.color,
            blocks_movement: true,
            render_order: RenderOrder::Actor,
            kind: EntityKind::Actor(ActorState::new(fighter, template.ai)),
        }
    }

    pub(crate) fn item(
        id: EntityId,
        position: Position,
        name: impl Into<String>,
        glyph: char,
        color: Rgb,
    ) -> Self {
        Self {
            id,
            position,
            name: name.into(),
            glyph,
            color,
            blocks_movement: false,
            render_order: RenderOrder::Item,
            kind: EntityKind::Item,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn is_at(&self, position: Position) -> bool {
        self.position == position
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn blocks_movement(&self) -> bool {
        self.blocks_movement
    }

    pub fn render_order(&self) -> RenderOrder {
        self.render_order
    }

    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    pub fn as_actor(&self) -> Option<&ActorState> {
        match &self.kind {
            EntityKind::Actor(actor) => Some(actor),
            EntityKind::Item => None,
        }
    }

    pub(crate) fn as_actor_mut(&mut self) -> Option<&mut ActorState> {
        match &mut self.kind {
            EntityKind::Actor(actor) => Some(actor),
            EntityKind::Item => None,
        }
    }

    pub fn is_actor(&self) -> bool {
        self.as_actor().is_some()
    }

    pub fn is_living_actor(&self) -> bool {
        self.as_actor().is_some_and(ActorState::is_alive)
    }

    pub fn fighter(&self) -> Option<&Fighter> {
        self.as_actor()?.fighter()
    }

    pub(crate) fn fighter_mut(&mut self) -> Option<&mut Fighter> {
        self.as_actor_mut()?.fighter_mut()
    }

    /// Turns a living actor into an inert corpse.
    ///
    /// Returns false (and changes nothing) for items and already-dead actors.
    pub(crate) fn die(&mut self) -> bool {
        let Some(actor) = self.as_actor_mut() else {
            return false;
        };
        if !actor.alive {
            return false;
        }

        actor.alive = false;
        actor.ai = None;
        self.blocks_movement = false;
        self.render_order = RenderOrder::Corpse;
        self.glyph = Self::CORPSE_GLYPH;
        self.color = Self::CORPSE_COLOR;
        self.name = format!("remains of {}", self.name);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_order_ranks_corpse_below_item_below_actor() {
        assert!(RenderOrder::Corpse < RenderOrder::Item);
        assert!(RenderOrder::Item < RenderOrder::Actor);
        assert_eq!("actor".parse::<RenderOrder>(), Ok(RenderOrder::Actor));
    }

    #[test]
    fn spawned_actor_blocks_and_is_alive() {
        let orc = Entity::actor(EntityId(3), Position::new(1, 2), &ActorTemplate::orc());
        assert!(orc.blocks_movement());
        assert!(orc.is_living_actor());
        assert_eq!(orc.render_order(), RenderOrder::Actor);
        assert_eq!(orc.fighter().map(Fighter::hp), Some(10));
        assert_eq!(orc.as_actor().and_then(ActorState::ai), Some(AiKind::Hostile));
    }

    #[test]
    fn items_are_not_actors() {
        let potion = Entity::item(EntityId(1), Position::ORIGIN, "Potion", '!', Rgb(127, 0, 255));
        assert!(!potion.is_actor());
        assert!(!potion.is_living_actor());
        assert!(!potion.blocks_movement());
        assert!(potion.fighter().is_none());
        assert_eq!(potion.render_order(), RenderOrder::Item);
    }

    #[test]
    fn dying_turns_actor_into_corpse() {
        let mut troll = Entity::actor(EntityId(7), Position::new(4, 4), &ActorTemplate::troll());
        assert!(troll.die());

        assert!(troll.is_actor());
        assert!(!troll.is_living_actor());
        assert!(!troll.blocks_movement());
        assert_eq!(troll.render_order(), RenderOrder::Corpse);
        assert_eq!(troll.glyph(), Entity::CORPSE_GLYPH);
        assert_eq!(troll.color(), Entity::CORPSE_COLOR);
        assert_eq!(troll.name(), "remains of Troll");
        assert_eq!(troll.as_actor().and_then(ActorState::ai), None);
        assert_eq!(troll.position(), Position::new(4, 4));

        assert!(!troll.die(), "a corpse cannot die twice");
        assert_eq!(troll.name(), "remains of Troll");
    }
}
