//! Effect cards and the per-round damage/block/heal tally they feed.
//!
//! Cards carry their rules as data ([`EffectOp`] lists) rather than closures
//! so they can be loaded from content files, inspected and compared in tests.

use crate::{PlayerState, Side};
use serde::{Deserialize, Serialize};

/// Which combatant an effect lands on, relative to the resolution step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EffectTarget {
    /// The side the effect is resolved *from* (the round winner's opponent).
    Source,
    /// The side the effect is resolved *onto* (the winner or the loser).
    Recipient,
    /// The side that wagered the card.
    Owner,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Amount {
    Flat(i32),
    BaseDamage(EffectTarget),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EffectOp {
    Damage { target: EffectTarget, amount: Amount },
    Block { target: EffectTarget, amount: Amount },
    Heal { target: EffectTarget, amount: Amount },
    /// Ends the battle for the recipient. Only meaningful in `on_win`.
    Flee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectContext {
    pub source: Side,
    pub recipient: Side,
    pub owner: Side,
}

impl EffectContext {
    pub fn resolve(&self, target: EffectTarget) -> Side {
        match target {
            EffectTarget::Source => self.source,
            EffectTarget::Recipient => self.recipient,
            EffectTarget::Owner => self.owner,
        }
    }
}

/// Mutable view of both combatants while pot effects resolve.
pub trait Arena {
    fn base_damage(&self, side: Side) -> i32;
    fn round_effect_mut(&mut self, side: Side) -> &mut RoundEffect;
}

impl EffectOp {
    /// Returns `false` when the op asks for the battle to end.
    pub fn apply(&self, ctx: EffectContext, arena: &mut dyn Arena) -> bool {
        match *self {
            EffectOp::Damage { target, amount } => {
                let side = ctx.resolve(target);
                let value = amount.resolve(ctx, arena);
                arena.round_effect_mut(side).damage += value;
                tracing::debug!(?side, value, "damage accumulated");
                true
            }
            EffectOp::Block { target, amount } => {
                let side = ctx.resolve(target);
                let value = amount.resolve(ctx, arena);
                arena.round_effect_mut(side).blocked += value;
                tracing::debug!(?side, value, "block accumulated");
                true
            }
            EffectOp::Heal { target, amount } => {
                let side = ctx.resolve(target);
                let value = amount.resolve(ctx, arena);
                arena.round_effect_mut(side).healed += value;
                tracing::debug!(?side, value, "heal accumulated");
                true
            }
            EffectOp::Flee => false,
        }
    }
}

impl Amount {
    fn resolve(&self, ctx: EffectContext, arena: &dyn Arena) -> i32 {
        match *self {
            Amount::Flat(value) => value,
            Amount::BaseDamage(target) => arena.base_damage(ctx.resolve(target)),
        }
    }
}

/// Applies every op in order. All ops run even after a `Flee`.
pub fn apply_effects(ops: &[EffectOp], ctx: EffectContext, arena: &mut dyn Arena) -> bool {
    let mut proceed = true;
    for op in ops {
        if !op.apply(ctx, arena) {
            proceed = false;
        }
    }
    proceed
}

const BASE_ATTACK_ON_LOSE: &[EffectOp] = &[EffectOp::Damage {
    target: EffectTarget::Recipient,
    amount: Amount::BaseDamage(EffectTarget::Source),
}];
const RUN_ON_WIN: &[EffectOp] = &[EffectOp::Flee];
const RUN_ON_LOSE: &[EffectOp] = &[EffectOp::Damage {
    target: EffectTarget::Owner,
    amount: Amount::Flat(1),
}];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub on_win: Vec<EffectOp>,
    #[serde(default)]
    pub on_lose: Vec<EffectOp>,
}

/// A named rule object: positive effects go to a round winner, negative
/// effects to the loser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameCard {
    /// Played automatically as every round's ante.
    BaseAttack,
    /// Offered on every bet; never part of an inventory.
    Run,
    /// Offered on every bet; never part of an inventory.
    Pass,
    Custom(CardDef),
}

impl GameCard {
    pub fn name(&self) -> &str {
        match self {
            GameCard::BaseAttack => "Base Damage Card",
            GameCard::Run => "Run",
            GameCard::Pass => "Pass",
            GameCard::Custom(def) => &def.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            GameCard::BaseAttack => {
                "Played once automatically every round. The loser of the round takes damage equal to the opponent's base attack damage."
            }
            GameCard::Run => {
                "Play to try to leave a battle. Win the round with it in play and the battle ends. Lose the round and take an additional point of damage."
            }
            GameCard::Pass => "Play when you do not wish to augment the battle.",
            GameCard::Custom(def) => &def.description,
        }
    }

    /// Run and Pass are synthesized per bet and stay out of deck bookkeeping.
    pub fn is_ephemeral(&self) -> bool {
        matches!(self, GameCard::Run | GameCard::Pass)
    }

    pub fn positive_effects(&self) -> &[EffectOp] {
        match self {
            GameCard::Run => RUN_ON_WIN,
            GameCard::BaseAttack | GameCard::Pass => &[],
            GameCard::Custom(def) => &def.on_win,
        }
    }

    pub fn negative_effects(&self) -> &[EffectOp] {
        match self {
            GameCard::BaseAttack => BASE_ATTACK_ON_LOSE,
            GameCard::Run => RUN_ON_LOSE,
            GameCard::Pass => &[],
            GameCard::Custom(def) => &def.on_lose,
        }
    }

    /// Returns `true` if the battle should continue.
    pub fn apply_positive(&self, ctx: EffectContext, arena: &mut dyn Arena) -> bool {
        apply_effects(self.positive_effects(), ctx, arena)
    }

    /// An ante only strikes on behalf of its owner: the winner's ante hits
    /// the loser, the loser's own ante is spent.
    pub fn apply_negative(&self, ctx: EffectContext, arena: &mut dyn Arena) {
        if matches!(self, GameCard::BaseAttack) && ctx.owner != ctx.source {
            return;
        }
        apply_effects(self.negative_effects(), ctx, arena);
    }
}

/// Anything that can sit in a pot and resolve against the round result.
pub trait Bettable {
    fn name(&self) -> &str;
    /// Returns `true` if the battle should continue.
    fn apply_positive(&self, source: Side, recipient: Side, arena: &mut dyn Arena) -> bool;
    fn apply_negative(&self, source: Side, recipient: Side, arena: &mut dyn Arena);
}

/// An effect card bound to the combatant that wagered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleCard {
    pub id: u32,
    pub card: GameCard,
    pub owner: Side,
    #[serde(skip)]
    pub selected: bool,
}

impl BattleCard {
    pub fn new(id: u32, card: GameCard, owner: Side) -> Self {
        Self {
            id,
            card,
            owner,
            selected: false,
        }
    }

    fn context(&self, source: Side, recipient: Side) -> EffectContext {
        EffectContext {
            source,
            recipient,
            owner: self.owner,
        }
    }
}

impl Bettable for BattleCard {
    fn name(&self) -> &str {
        self.card.name()
    }

    fn apply_positive(&self, source: Side, recipient: Side, arena: &mut dyn Arena) -> bool {
        self.card
            .apply_positive(self.context(source, recipient), arena)
    }

    fn apply_negative(&self, source: Side, recipient: Side, arena: &mut dyn Arena) {
        self.card
            .apply_negative(self.context(source, recipient), arena)
    }
}

/// Damage, block and heal collected for one combatant during one round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEffect {
    pub damage: i32,
    pub blocked: i32,
    pub healed: i32,
}

impl RoundEffect {
    /// Block only offsets damage, down to zero; healing is added afterward.
    pub fn power_delta(&self) -> i32 {
        let net_damage = self.damage.saturating_sub(self.blocked).max(0);
        self.healed.saturating_sub(net_damage)
    }

    pub fn apply(&self, state: &mut PlayerState) -> i32 {
        let delta = self.power_delta();
        state.modify_power_level(delta);
        delta
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TwoSides {
        base: [i32; 2],
        effects: [RoundEffect; 2],
    }

    impl Arena for TwoSides {
        fn base_damage(&self, side: Side) -> i32 {
            self.base[side.index()]
        }

        fn round_effect_mut(&mut self, side: Side) -> &mut RoundEffect {
            &mut self.effects[side.index()]
        }
    }

    fn arena() -> TwoSides {
        TwoSides {
            base: [3, 1],
            effects: [RoundEffect::default(); 2],
        }
    }

    #[test]
    fn base_attack_damages_recipient_by_source_base_damage() {
        let mut arena = arena();
        let card = BattleCard::new(0, GameCard::BaseAttack, Side::Player);
        card.apply_negative(Side::Player, Side::Opponent, &mut arena);
        assert_eq!(arena.effects[Side::Opponent.index()].damage, 3);
        assert!(card.apply_positive(Side::Player, Side::Opponent, &mut arena));
    }

    #[test]
    fn losers_own_ante_is_spent() {
        let mut arena = arena();
        let card = BattleCard::new(0, GameCard::BaseAttack, Side::Opponent);
        card.apply_negative(Side::Player, Side::Opponent, &mut arena);
        assert_eq!(arena.effects, [RoundEffect::default(); 2]);
    }

    #[test]
    fn run_penalizes_its_owner_and_signals_flee() {
        let mut arena = arena();
        let run = BattleCard::new(1, GameCard::Run, Side::Player);
        run.apply_negative(Side::Opponent, Side::Player, &mut arena);
        assert_eq!(arena.effects[Side::Player.index()].damage, 1);

        let mut arena = self::arena();
        run.apply_negative(Side::Player, Side::Opponent, &mut arena);
        assert_eq!(arena.effects[Side::Player.index()].damage, 1);
        assert_eq!(arena.effects[Side::Opponent.index()].damage, 0);

        assert!(!run.apply_positive(Side::Opponent, Side::Player, &mut arena));
    }

    #[test]
    fn pass_does_nothing() {
        let mut arena = arena();
        let pass = BattleCard::new(2, GameCard::Pass, Side::Player);
        assert!(pass.apply_positive(Side::Opponent, Side::Player, &mut arena));
        pass.apply_negative(Side::Opponent, Side::Player, &mut arena);
        assert_eq!(arena.effects, [RoundEffect::default(); 2]);
    }

    #[test]
    fn block_offsets_damage_then_heal_adds() {
        let effect = RoundEffect {
            damage: 4,
            blocked: 6,
            healed: 2,
        };
        assert_eq!(effect.power_delta(), 2);
        let effect = RoundEffect {
            damage: 5,
            blocked: 1,
            healed: 1,
        };
        assert_eq!(effect.power_delta(), -3);
    }
}
