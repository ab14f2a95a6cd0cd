//! Persistent binary trees with values at the leaves.
//!
//! Every query on a [`Tree`] is a [`fold`](Tree::fold): the leaf function
//! turns each value into a result and the branch function combines the
//! results of two subtrees. The fold walks the tree with an explicit stack,
//! so a tree deeper than the call stack can still be folded.

use super::ReferenceCounter;

/// A binary tree whose values sit at the leaves.
///
/// Subtrees are reference counted, so [`Tree::branch`] shares its arguments
/// instead of copying them.
///
/// # Examples
///
/// ```rust
/// use funseq::persistent::Tree;
///
/// let tree = Tree::branch(Tree::leaf(3), Tree::branch(Tree::leaf(9), Tree::leaf(4)));
/// assert_eq!(tree.size(), 5);
/// assert_eq!(tree.depth(), 2);
/// assert_eq!(tree.max(std::cmp::max), 9);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub enum Tree<A> {
    /// A single value.
    Leaf(A),
    /// Two subtrees.
    Branch(ReferenceCounter<Tree<A>>, ReferenceCounter<Tree<A>>),
}

enum Frame<'a, A, B> {
    Right(&'a Tree<A>),
    Combine(B),
}

impl<A> Tree<A> {
    /// A tree holding only `value`.
    pub const fn leaf(value: A) -> Self {
        Self::Leaf(value)
    }

    /// A tree with `left` and `right` as its subtrees.
    pub fn branch(left: Self, right: Self) -> Self {
        Self::Branch(ReferenceCounter::new(left), ReferenceCounter::new(right))
    }

    /// Replaces every leaf with `leaf(value)` and every branch with
    /// `branch(left, right)` applied to the folded subtrees.
    ///
    /// Subtrees are folded left before right. The walk keeps pending right
    /// subtrees and left results on a heap-allocated stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::persistent::Tree;
    ///
    /// let tree = Tree::branch(Tree::leaf("a"), Tree::leaf("b"));
    /// let rendered = tree.fold(|value| value.to_string(), |left, right| format!("({left} {right})"));
    /// assert_eq!(rendered, "(a b)");
    /// ```
    pub fn fold<B, L, R>(&self, leaf: L, branch: R) -> B
    where
        L: Fn(&A) -> B,
        R: Fn(B, B) -> B,
    {
        let mut frames: Vec<Frame<'_, A, B>> = Vec::new();
        let mut current = self;
        loop {
            let mut folded = loop {
                match current {
                    Self::Leaf(value) => break leaf(value),
                    Self::Branch(left, right) => {
                        frames.push(Frame::Right(right));
                        current = left;
                    }
                }
            };
            loop {
                match frames.pop() {
                    None => return folded,
                    Some(Frame::Right(right)) => {
                        frames.push(Frame::Combine(folded));
                        current = right;
                        break;
                    }
                    Some(Frame::Combine(left)) => folded = branch(left, folded),
                }
            }
        }
    }

    /// Counts leaves and branches together.
    pub fn size(&self) -> usize {
        self.fold(|_| 1, |left, right| 1 + left + right)
    }

    /// The number of branches on the longest path from the root to a leaf.
    /// A single leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.fold(|_| 0, |left, right| 1 + left.max(right))
    }

    /// Reduces the leaf values with `combine`, for example [`std::cmp::max`].
    pub fn max<F>(&self, combine: F) -> A
    where
        A: Clone,
        F: Fn(A, A) -> A,
    {
        self.fold(A::clone, combine)
    }

    /// A tree of the same shape with `function` applied to every leaf.
    pub fn map<B, F>(&self, function: F) -> Tree<B>
    where
        F: Fn(&A) -> B,
    {
        self.fold(|value| Tree::leaf(function(value)), Tree::branch)
    }
}

impl<A> Clone for Tree<A>
where
    A: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::Leaf(value) => Self::Leaf(value.clone()),
            Self::Branch(left, right) => {
                Self::Branch(ReferenceCounter::clone(left), ReferenceCounter::clone(right))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Tree<i32> {
        Tree::branch(
            Tree::branch(Tree::leaf(1), Tree::leaf(-7)),
            Tree::branch(Tree::leaf(12), Tree::branch(Tree::leaf(5), Tree::leaf(0))),
        )
    }

    #[rstest]
    fn test_fold_visits_leaves_left_to_right() {
        let leaves = sample().fold(|value| vec![*value], |mut left, right| {
            left.extend(right);
            left
        });
        assert_eq!(leaves, vec![1, -7, 12, 5, 0]);
    }

    #[rstest]
    #[case::leaf(Tree::leaf(4), 1, 0)]
    #[case::sample(sample(), 9, 3)]
    fn test_size_and_depth(#[case] tree: Tree<i32>, #[case] size: usize, #[case] depth: usize) {
        assert_eq!(tree.size(), size);
        assert_eq!(tree.depth(), depth);
    }

    #[rstest]
    fn test_max() {
        assert_eq!(sample().max(std::cmp::max), 12);
        assert_eq!(sample().max(std::cmp::min), -7);
    }

    #[rstest]
    fn test_map_keeps_shape() {
        let mapped = sample().map(|value| value * 2);
        assert_eq!(mapped.size(), sample().size());
        assert_eq!(mapped.depth(), sample().depth());
        assert_eq!(mapped.max(std::cmp::max), 24);
    }

    #[rstest]
    fn test_branch_shares_subtrees() {
        let shared = ReferenceCounter::new(Tree::leaf(1));
        let tree = Tree::Branch(ReferenceCounter::clone(&shared), ReferenceCounter::clone(&shared));
        assert_eq!(ReferenceCounter::strong_count(&shared), 3);
        assert_eq!(tree.size(), 3);
    }
}
