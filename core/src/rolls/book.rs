//! Roll collection and the event fold.
//!
//! `RollBook` is plain data: it knows nothing about queues or timers, so
//! every state transition can be driven directly from tests.

use std::time::Duration;

use chrono::{NaiveDateTime, TimeDelta};
use lootwatch_types::RollMonitorConfig;

use crate::events::{LootEvent, LootEventKind};
use crate::host::{LOST_FALLBACK, LOST_KEY, NO_ROLLERS_FALLBACK, NO_ROLLERS_KEY, RollHost};

use super::display::{DisplayOptions, render_rollers};
use super::{LootRoll, LootRoller};

/// Why an event left the book unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// `content_id` was zero.
    InvalidContent,
    /// No open roll accepts the event (no Add, duplicate cast, already rolled, resolved).
    NoMatchingRoll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldOutcome {
    Applied,
    Dropped(DropReason),
}

/// Host callbacks plus the config snapshot a single fold runs against.
pub struct FoldContext<'a> {
    pub host: &'a dyn RollHost,
    pub config: RollMonitorConfig,
}

impl<'a> FoldContext<'a> {
    pub fn new(host: &'a dyn RollHost) -> Self {
        Self {
            config: host.config(),
            host,
        }
    }

    fn format_name(&self, raw_name: &str) -> String {
        self.host
            .format_player_name(self.config.roll_name_format, raw_name)
    }

    fn render(&self, rollers: &[LootRoller]) -> String {
        render_rollers(rollers, DisplayOptions::from(&self.config), |format, name| {
            self.host.format_player_name(format, name)
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollBook {
    rolls: Vec<LootRoll>,
}

impl RollBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rolls(&self) -> &[LootRoll] {
        &self.rolls
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Independent copy of every roll, in insertion order.
    pub fn snapshot(&self) -> Vec<LootRoll> {
        self.rolls.clone()
    }

    /// First open roll for `item_id` satisfying `accept`.
    fn open_roll_mut<P>(&mut self, item_id: u32, accept: P) -> Option<&mut LootRoll>
    where
        P: Fn(&LootRoll) -> bool,
    {
        self.rolls
            .iter_mut()
            .find(|roll| roll.item_id == item_id && roll.is_open() && accept(roll))
    }

    /// Fold one event into the book.
    pub fn apply(&mut self, event: &LootEvent, ctx: &FoldContext<'_>) -> FoldOutcome {
        if event.content_id == 0 {
            return FoldOutcome::Dropped(DropReason::InvalidContent);
        }

        let applied = match &event.kind {
            LootEventKind::Add { item_name } => {
                self.add(event, item_name, ctx);
                true
            }
            LootEventKind::Cast { player_name } => self.cast(event.item_id, player_name, ctx),
            LootEventKind::Need { player_name, roll }
            | LootEventKind::Greed { player_name, roll } => {
                self.record_roll(event.item_id, player_name, *roll, ctx)
            }
            LootEventKind::Obtain { player_name } => {
                self.obtain(event.item_id, player_name, event.timestamp, ctx)
            }
            LootEventKind::Lost => self.lose(event.item_id, event.timestamp, ctx),
        };

        if applied {
            FoldOutcome::Applied
        } else {
            FoldOutcome::Dropped(DropReason::NoMatchingRoll)
        }
    }

    fn add(&mut self, event: &LootEvent, item_name: &str, ctx: &FoldContext<'_>) {
        let placeholder = ctx.host.localize(NO_ROLLERS_KEY, NO_ROLLERS_FALLBACK);
        self.rolls.push(LootRoll::new(
            event.item_id,
            item_name,
            event.timestamp,
            placeholder,
        ));
    }

    fn cast(&mut self, item_id: u32, player_name: &str, ctx: &FoldContext<'_>) -> bool {
        let Some(roll) = self.open_roll_mut(item_id, |roll| !roll.has_roller(player_name)) else {
            return false;
        };
        // Render before committing so a formatter panic leaves the roll untouched
        let mut rollers = roll.rollers.clone();
        rollers.push(LootRoller::new(player_name));
        let display = ctx.render(&rollers);
        roll.rollers = rollers;
        roll.rollers_display = display;
        true
    }

    fn record_roll(&mut self, item_id: u32, player_name: &str, value: u32, ctx: &FoldContext<'_>) -> bool {
        let Some(roll) = self.open_roll_mut(item_id, |roll| {
            roll.rollers
                .iter()
                .any(|r| r.player_name == player_name && !r.has_rolled())
        }) else {
            return false;
        };
        let mut rollers = roll.rollers.clone();
        let Some(roller) = rollers
            .iter_mut()
            .find(|r| r.player_name == player_name && !r.has_rolled())
        else {
            return false;
        };
        roller.roll = value;
        let display = ctx.render(&rollers);
        roll.rollers = rollers;
        roll.rollers_display = display;
        true
    }

    fn obtain(
        &mut self,
        item_id: u32,
        player_name: &str,
        timestamp: NaiveDateTime,
        ctx: &FoldContext<'_>,
    ) -> bool {
        let Some(roll) = self.open_roll_mut(item_id, |_| true) else {
            return false;
        };
        let winner = ctx.format_name(player_name);
        if let Some(roller) = roll.roller_mut(player_name) {
            roller.is_winner = true;
        }
        roll.resolve(winner, timestamp);
        true
    }

    fn lose(&mut self, item_id: u32, timestamp: NaiveDateTime, ctx: &FoldContext<'_>) -> bool {
        let Some(roll) = self.open_roll_mut(item_id, |_| true) else {
            return false;
        };
        roll.resolve(ctx.host.localize(LOST_KEY, LOST_FALLBACK), timestamp);
        true
    }

    /// Remove pending rolls older than the pending timeout and resolved rolls
    /// older than the won timeout. Returns the number removed.
    pub fn sweep(&mut self, now: NaiveDateTime, config: &RollMonitorConfig) -> usize {
        let pending = timeout_delta(config.pending_timeout());
        let won = timeout_delta(config.won_timeout());
        let before = self.rolls.len();

        self.rolls.retain(|roll| {
            let age = now.signed_duration_since(roll.timestamp);
            let limit = if roll.is_won { won } else { pending };
            age <= limit
        });

        before - self.rolls.len()
    }
}

#[inline]
fn timeout_delta(timeout: Duration) -> TimeDelta {
    TimeDelta::from_std(timeout).unwrap_or(TimeDelta::MAX)
}
