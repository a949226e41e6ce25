//! The action trait and the ready-made junction action
//!
//! An action performs a local effect and then hands the same context to each
//! of its reactions, depth-first, in list order. Reactions are themselves
//! actions, so trees of arbitrary shape compose out of one building block.

use crate::error::Result;
use crate::reaction::{ActionRef, ReactionList, Reactions};

/// A composable unit of behavior: a local effect plus ordered reactions.
///
/// Every method has a default, so an implementation only overrides what it
/// needs:
///
/// - [`do_action`](Action::do_action) for the local effect,
/// - [`reactions`](Action::reactions) for this instance's reactions,
/// - [`class_reactions`](Action::class_reactions) for defaults shared by
///   every instance of the implementing type.
///
/// The context `C` is an opaque caller payload threaded unchanged through an
/// entire propagation; the trait never inspects it. All calls are synchronous
/// and run on the caller's stack.
pub trait Action<C: 'static> {
    /// Reactions shared by every instance of the implementing type.
    ///
    /// Empty unless a type declares its own. Resolved through the dynamic
    /// type, so the most-derived override wins. The context is available for
    /// implementations that compute type-level reactions on the fly.
    fn class_reactions(&self, _ctx: &C) -> Reactions<C> {
        Reactions::new()
    }

    /// This instance's own reactions, in firing order.
    fn reactions(&self, _ctx: &C) -> Reactions<C> {
        Reactions::new()
    }

    /// Type-level reactions followed by instance-level reactions, each
    /// preserving its internal order.
    fn all_reactions(&self, ctx: &C) -> Reactions<C> {
        let mut all = self.class_reactions(ctx);
        all.extend(self.reactions(ctx));
        all
    }

    /// The local effect. Never touches reactions.
    fn do_action(&self, _ctx: &mut C) -> Result<()> {
        Ok(())
    }

    /// Invoke [`act`](Action::act) on every reaction returned by
    /// [`all_reactions`](Action::all_reactions), in order, handing each the
    /// same context. Does not run this action's own local effect.
    ///
    /// A failing reaction aborts the remaining dispatch; its error surfaces
    /// unchanged.
    fn do_reactions(&self, ctx: &mut C) -> Result<()> {
        let reactions = self.all_reactions(ctx);
        tracing::trace!(count = reactions.len(), "dispatching reactions");
        for reaction in &reactions {
            reaction.act(ctx)?;
        }
        Ok(())
    }

    /// Run the local effect, then propagate to reactions, strictly in that
    /// order. This is the intended entry point; `do_action` and
    /// `do_reactions` exist for selective partial invocation.
    ///
    /// Propagation recurses through each reaction's own `act`. Cycles are
    /// not detected: callers must keep reaction graphs acyclic and finite.
    fn act(&self, ctx: &mut C) -> Result<()> {
        self.do_action(ctx)?;
        self.do_reactions(ctx)
    }
}

/// An action with no local effect of its own.
///
/// A pure junction node: [`act`](Action::act) runs the no-op local effect
/// and then fans the context out to the attached reactions. Also useful as
/// a leaf placeholder while wiring a tree up.
pub struct Cascade<C> {
    reactions: ReactionList<C>,
}

impl<C: 'static> Cascade<C> {
    /// Create a junction with no reactions.
    pub fn new() -> Self {
        Self {
            reactions: ReactionList::new(),
        }
    }

    /// Append reactions, builder style. Appends to whatever the instance
    /// already holds; it never replaces an existing sequence.
    pub fn with_reactions<I>(self, reactions: I) -> Self
    where
        I: IntoIterator<Item = ActionRef<C>>,
    {
        self.reactions.extend(reactions);
        self
    }

    /// Append reactions in the order given. Duplicates are kept and fire
    /// once per occurrence.
    pub fn add_reactions<I>(&self, reactions: I)
    where
        I: IntoIterator<Item = ActionRef<C>>,
    {
        self.reactions.extend(reactions);
    }

    /// Remove the first occurrence of `reaction`, by pointer identity.
    /// Returns whether anything was removed; an absent handle is a silent
    /// no-op.
    pub fn remove_reaction(&self, reaction: &ActionRef<C>) -> bool {
        self.reactions.remove(reaction)
    }
}

impl<C: 'static> Action<C> for Cascade<C> {
    fn reactions(&self, _ctx: &C) -> Reactions<C> {
        self.reactions.snapshot()
    }
}

impl<C: 'static> Default for Cascade<C> {
    fn default() -> Self {
        Self::new()
    }
}
