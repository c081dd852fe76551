use std::sync::LazyLock;

/// Binary operators available at every internal node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Operator set carried by each node, in enumeration order.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Mul, Operator::Sub, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Applies the operator, or returns `None` for a division by exactly zero.
    pub fn apply(self, left: f64, right: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(left + right),
            Operator::Sub => Some(left - right),
            Operator::Mul => Some(left * right),
            Operator::Div if right == 0.0 => None,
            Operator::Div => Some(left / right),
        }
    }
}

/// Binary tree over the four leaf positions of an arrangement
#[derive(Debug, Clone, PartialEq)]
pub enum TreeShape {
    Leaf(usize),
    Node {
        left: Box<TreeShape>,
        operators: &'static [Operator],
        right: Box<TreeShape>,
    },
}

impl TreeShape {
    fn node(left: TreeShape, right: TreeShape) -> Self {
        TreeShape::Node {
            left: Box::new(left),
            operators: &Operator::ALL,
            right: Box::new(right),
        }
    }

    /// Leaf positions from left to right.
    pub fn leaves(&self) -> Vec<usize> {
        match self {
            TreeShape::Leaf(position) => vec![*position],
            TreeShape::Node { left, right, .. } => {
                let mut leaves = left.leaves();
                leaves.extend(right.leaves());
                leaves
            }
        }
    }
}

static SHAPES: LazyLock<[TreeShape; 5]> = LazyLock::new(|| {
    use TreeShape::Leaf;
    let node = TreeShape::node;
    [
        node(Leaf(0), node(Leaf(1), node(Leaf(2), Leaf(3)))),
        node(Leaf(0), node(node(Leaf(1), Leaf(2)), Leaf(3))),
        node(node(node(Leaf(0), Leaf(1)), Leaf(2)), Leaf(3)),
        node(node(Leaf(0), node(Leaf(1), Leaf(2))), Leaf(3)),
        node(node(Leaf(0), Leaf(1)), node(Leaf(2), Leaf(3))),
    ]
});

/// The five ways to parenthesize four operands.
pub fn shapes() -> &'static [TreeShape] {
    SHAPES.as_slice()
}
