/// Coordinate a tree level partitions on.
///
/// Never stored in a node; always recomputed from the node's depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Even depths split on x
    X,
    /// Odd depths split on y
    Y,
}

impl Axis {
    /// Axis used at `depth` (root is depth 0)
    #[inline]
    pub fn at_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Axis::X } else { Axis::Y }
    }

    /// Axis used one level further down
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_alternates_by_depth() {
        assert_eq!(Axis::at_depth(0), Axis::X);
        assert_eq!(Axis::at_depth(1), Axis::Y);
        assert_eq!(Axis::at_depth(2), Axis::X);
        assert_eq!(Axis::at_depth(7), Axis::Y);
        for depth in 0..10 {
            assert_eq!(Axis::at_depth(depth).next(), Axis::at_depth(depth + 1));
        }
    }
}
