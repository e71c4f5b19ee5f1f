//! Immutable action sequences shared between frontier entries.

use crate::search::Plan;
use std::rc::Rc;

#[derive(Debug)]
struct PathLink<A> {
    action: A,
    parent: Option<Rc<PathLink<A>>>,
}

/// The actions leading from the start state to a search node. Extending a
/// path never touches the original: the new path points back at the shared
/// prefix, so any number of frontier entries can branch off the same parent
/// cheaply.
#[derive(Debug)]
pub struct Path<A> {
    last: Option<Rc<PathLink<A>>>,
    len: usize,
}

impl<A> Path<A> {
    pub fn empty() -> Self {
        Self { last: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn last_action(&self) -> Option<&A> {
        self.last.as_ref().map(|link| &link.action)
    }

    /// A new path with `action` appended.
    pub fn extend(&self, action: A) -> Self {
        Self {
            last: Some(Rc::new(PathLink {
                action,
                parent: self.last.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Walk back to the start and collect the actions in execution order.
    pub fn to_plan(&self) -> Plan<A>
    where
        A: Clone,
    {
        let mut steps = Vec::with_capacity(self.len);
        let mut current = self.last.as_deref();
        while let Some(link) = current {
            steps.push(link.action.clone());
            current = link.parent.as_deref();
        }
        steps.reverse();
        Plan::new(steps)
    }
}

impl<A> Clone for Path<A> {
    fn clone(&self) -> Self {
        Self {
            last: self.last.clone(),
            len: self.len,
        }
    }
}

impl<A> Default for Path<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A> Drop for Path<A> {
    // Unlink iteratively, depth first search can build paths long enough to
    // overflow the stack with the recursive drop.
    fn drop(&mut self) {
        let mut current = self.last.take();
        while let Some(link) = current {
            match Rc::try_unwrap(link) {
                Ok(mut link) => current = link.parent.take(),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_leaves_original_untouched() {
        let root: Path<char> = Path::empty();
        let a = root.extend('a');
        let ab = a.extend('b');
        let ac = a.extend('c');

        assert!(root.is_empty());
        assert_eq!(a.to_plan().steps(), &['a']);
        assert_eq!(ab.to_plan().steps(), &['a', 'b']);
        assert_eq!(ac.to_plan().steps(), &['a', 'c']);
        assert_eq!(ac.len(), 2);
        assert_eq!(ac.last_action(), Some(&'c'));
    }

    #[test]
    fn dropping_a_branch_keeps_the_shared_prefix() {
        let a = Path::empty().extend(1).extend(2);
        let b = a.extend(3);
        drop(a);
        assert_eq!(b.to_plan().steps(), &[1, 2, 3]);
    }

    #[test]
    fn long_paths_drop_without_overflow() {
        let mut path = Path::empty();
        for step in 0..1_000_000 {
            path = path.extend(step);
        }
        assert_eq!(path.len(), 1_000_000);
        drop(path);
    }
}
