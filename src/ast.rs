/// An abstract syntax tree (AST) node representing an expression.
///
/// Trees are built by the parser and consumed by the evaluator. Interior
/// nodes are always binary operations; leaves are numeric literals. A tree
/// never outlives the evaluation of the source string it came from unless
/// the caller keeps it.
///
/// A chain of `n` operators builds a tree `n` levels deep, so counting,
/// rendering and dropping walk it with an explicit stack instead of
/// recursion. The derived `Debug` still recurses.
#[derive(Debug)]
pub enum Expr {
    /// A decoded numeric literal.
    Literal {
        /// The constant value.
        value:  f64,
        /// 1-based column of the literal in the source.
        column: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// 1-based column of the operator in the source.
        column: usize,
    },
}

impl Expr {
    /// Gets the column number from `self`.
    /// ## Example
    /// ```
    /// use calcline::ast::Expr;
    ///
    /// let expr = Expr::Literal { value:  2.0,
    ///                            column: 5, };
    ///
    /// assert_eq!(expr.column(), 5);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Literal { column, .. } | Self::BinaryOp { column, .. } => *column,
        }
    }

    /// Counts the operator nodes in the tree.
    #[must_use]
    pub fn operator_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            if let Self::BinaryOp { left, right, .. } = expr {
                count += 1;
                pending.push(right);
                pending.push(left);
            }
        }
        count
    }
}

/// Renders the tree with every operation parenthesized, so
/// `10 - 4 - 3` prints as `((10 - 4) - 3)`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        enum Piece<'a> {
            Node(&'a Expr),
            Operator(BinaryOperator),
            Close,
        }

        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Node(Self::Literal { value, .. }) => write!(f, "{value}")?,
                Piece::Node(Self::BinaryOp { left, op, right, .. }) => {
                    write!(f, "(")?;
                    pending.push(Piece::Close);
                    pending.push(Piece::Node(right));
                    pending.push(Piece::Operator(*op));
                    pending.push(Piece::Node(left));
                },
                Piece::Operator(op) => write!(f, " {op} ")?,
                Piece::Close => write!(f, ")")?,
            }
        }
        Ok(())
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Self::BinaryOp { left, right, .. } = self {
            pending.push(take_node(left));
            pending.push(take_node(right));
        }
        while let Some(mut expr) = pending.pop() {
            if let Self::BinaryOp { left, right, .. } = &mut expr {
                pending.push(take_node(left));
                pending.push(take_node(right));
            }
        }
    }
}

/// Moves a child out of its box, leaving a leaf behind so the box drops
/// without recursing.
fn take_node(node: &mut Box<Expr>) -> Expr {
    std::mem::replace(node.as_mut(),
                      Expr::Literal { value:  0.0,
                                      column: 0, })
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        };
        write!(f, "{s}")
    }
}
