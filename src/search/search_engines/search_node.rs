use crate::search::{Cost, Path, Successor};

/// A [`SearchNode`] is a frontier entry: a state together with the path that
/// reached it and the cost accumulated along that path.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    state: S,
    path: Path<A>,
    cost: Cost,
}

impl<S, A> SearchNode<S, A> {
    pub fn new_root(state: S) -> Self {
        Self {
            state,
            path: Path::empty(),
            cost: Cost::from(0.),
        }
    }

    /// The node reached from this one by taking `successor`.
    pub fn child(&self, successor: Successor<S, A>) -> Self {
        Self {
            state: successor.state,
            path: self.path.extend(successor.action),
            cost: self.cost + successor.cost,
        }
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_path(&self) -> &Path<A> {
        &self.path
    }

    pub fn get_cost(&self) -> Cost {
        self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_extends_path_and_cost() {
        let root = SearchNode::new_root("start");
        let child = root.child(Successor::new("middle", 'a', 2.5));
        let grandchild = child.child(Successor::new("end", 'b', 1.));

        assert_eq!(root.get_cost(), Cost::from(0.));
        assert!(root.get_path().is_empty());
        assert_eq!(grandchild.get_state(), &"end");
        assert_eq!(grandchild.get_cost(), Cost::from(3.5));
        assert_eq!(grandchild.get_path().to_plan().steps(), &['a', 'b']);
    }
}
