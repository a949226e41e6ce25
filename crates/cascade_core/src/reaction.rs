//! Reaction storage
//!
//! Ordered sequences of shared action handles, plus the per-instance mutable
//! list embedded by the concrete action types.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::action::Action;

/// Shared handle to an action used as a reaction.
///
/// Reactions are held by reference, so one action may appear in several
/// lists, or more than once in the same list. Identity is pointer identity
/// ([`Rc::ptr_eq`]), which is what [`ReactionList::remove`] matches on.
pub type ActionRef<C> = Rc<dyn Action<C>>;

/// An ordered sequence of reactions.
///
/// Most actions carry no more than a couple of reactions, so short sequences
/// stay inline.
pub type Reactions<C> = SmallVec<[ActionRef<C>; 2]>;

/// The mutable reaction list owned by a single action instance.
///
/// Interior mutability lets freely shared action handles edit their own
/// lists in place. The list is only ever appended to or element-removed;
/// it is never replaced wholesale once populated, so insertion order is
/// stable and meaningful (reactions fire in this order).
///
/// Propagation reads the list through [`snapshot`](ReactionList::snapshot),
/// so edits made while a dispatch is in flight affect the next dispatch,
/// not the current one.
pub struct ReactionList<C> {
    inner: RefCell<Reactions<C>>,
}

impl<C: 'static> ReactionList<C> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(Reactions::new()),
        }
    }

    /// Append a single reaction.
    pub fn push(&self, reaction: ActionRef<C>) {
        self.inner.borrow_mut().push(reaction);
    }

    /// Append reactions in the order given.
    ///
    /// No deduplication: a handle added twice fires once per occurrence.
    pub fn extend<I>(&self, reactions: I)
    where
        I: IntoIterator<Item = ActionRef<C>>,
    {
        self.inner.borrow_mut().extend(reactions);
    }

    /// Remove the first occurrence of `reaction`, matched by pointer
    /// identity. Returns whether anything was removed; an absent handle is
    /// a silent no-op.
    pub fn remove(&self, reaction: &ActionRef<C>) -> bool {
        let mut inner = self.inner.borrow_mut();
        match inner.iter().position(|held| Rc::ptr_eq(held, reaction)) {
            Some(idx) => {
                inner.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Clone of the current sequence (cheap handle clones).
    pub fn snapshot(&self) -> Reactions<C> {
        self.inner.borrow().clone()
    }

    /// Number of reactions currently held.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Check whether the list holds no reactions.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl<C: 'static> Default for ReactionList<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: 'static> FromIterator<ActionRef<C>> for ReactionList<C> {
    fn from_iter<I: IntoIterator<Item = ActionRef<C>>>(iter: I) -> Self {
        let list = Self::new();
        list.extend(iter);
        list
    }
}
