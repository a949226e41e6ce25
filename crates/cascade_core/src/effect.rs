//! Closure-backed actions

use crate::action::Action;
use crate::error::Result;
use crate::reaction::{ActionRef, ReactionList, Reactions};

/// An action whose local effect is a closure.
///
/// The go-to way to put a leaf effect into a tree without declaring a
/// dedicated type:
///
/// ```rust
/// use cascade_core::{Action, FnAction};
///
/// let double = FnAction::new(|n: &mut u32| {
///     *n *= 2;
///     Ok(())
/// });
///
/// let mut value = 21;
/// double.act(&mut value).unwrap();
/// assert_eq!(value, 42);
/// ```
pub struct FnAction<C, F> {
    effect: F,
    reactions: ReactionList<C>,
}

impl<C, F> FnAction<C, F>
where
    C: 'static,
    F: Fn(&mut C) -> Result<()>,
{
    /// Wrap a closure as an action's local effect.
    pub fn new(effect: F) -> Self {
        Self {
            effect,
            reactions: ReactionList::new(),
        }
    }

    /// Append reactions, builder style.
    pub fn with_reactions<I>(self, reactions: I) -> Self
    where
        I: IntoIterator<Item = ActionRef<C>>,
    {
        self.reactions.extend(reactions);
        self
    }

    /// Append reactions in the order given.
    pub fn add_reactions<I>(&self, reactions: I)
    where
        I: IntoIterator<Item = ActionRef<C>>,
    {
        self.reactions.extend(reactions);
    }

    /// Remove the first occurrence of `reaction`, by pointer identity.
    pub fn remove_reaction(&self, reaction: &ActionRef<C>) -> bool {
        self.reactions.remove(reaction)
    }
}

impl<C, F> Action<C> for FnAction<C, F>
where
    C: 'static,
    F: Fn(&mut C) -> Result<()>,
{
    fn reactions(&self, _ctx: &C) -> Reactions<C> {
        self.reactions.snapshot()
    }

    fn do_action(&self, ctx: &mut C) -> Result<()> {
        (self.effect)(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ActionError;
    use std::rc::Rc;

    #[test]
    fn test_effect_receives_the_context() {
        let push = FnAction::new(|log: &mut Vec<&'static str>| {
            log.push("ran");
            Ok(())
        });

        let mut log = Vec::new();
        push.act(&mut log).unwrap();
        assert_eq!(log, ["ran"]);
    }

    #[test]
    fn test_effect_error_surfaces_unchanged() {
        let fail = FnAction::new(|_: &mut ()| Err(ActionError::new("disk full")));

        let err = fail.act(&mut ()).unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn test_reactions_fire_after_the_effect() {
        let tail: ActionRef<Vec<&'static str>> = Rc::new(FnAction::new(|log: &mut Vec<&'static str>| {
            log.push("tail");
            Ok(())
        }));
        let head = FnAction::new(|log: &mut Vec<&'static str>| {
            log.push("head");
            Ok(())
        })
        .with_reactions([tail]);

        let mut log = Vec::new();
        head.act(&mut log).unwrap();
        assert_eq!(log, ["head", "tail"]);
    }
}
