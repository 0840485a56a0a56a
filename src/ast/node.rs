use crate::errors::{CmError, CmResult};
use crate::frontend::token::TokenType;
use crate::utils::config::tree::MAX_CHILDREN;
use crate::utils::string_utils::copy_string;
use crate::LineNumber;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StmtKind {
    Compound,
    Selection,
    Iteration,
    Return,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpKind {
    Operator,
    Constant,
    Identifier,
    Call,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Variable,
    Function,
    Parameter,
}

/// Node family together with the variant inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Stmt(StmtKind),
    Exp(ExpKind),
    Decl(DeclKind),
}

/// Type attribute used for type checking. `Void` doubles as "not yet known".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpType {
    #[default]
    Void,
    Integer,
    IntegerArray,
}

impl fmt::Display for ExpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpType::Void => "void",
            ExpType::Integer => "int",
            ExpType::IntegerArray => "int[]",
        };
        f.write_str(name)
    }
}

/// Variant-specific payload of a node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Attr {
    /// Not populated yet
    #[default]
    None,
    Op(TokenType),
    Val(i64),
    Name(String),
}

#[derive(Debug)]
pub struct TreeNode {
    pub children: [Option<Box<TreeNode>>; MAX_CHILDREN],
    pub sibling: Option<Box<TreeNode>>,
    pub lineno: usize,
    pub kind: NodeKind,
    pub attr: Attr,
    pub ty: ExpType,
}

impl TreeNode {
    fn new(kind: NodeKind, lineno: &LineNumber) -> Self {
        Self {
            children: Default::default(),
            sibling: None,
            lineno: lineno.line,
            kind,
            attr: Attr::None,
            ty: ExpType::Void,
        }
    }

    pub fn child(&self, index: usize) -> Option<&TreeNode> {
        self.children.get(index)?.as_deref()
    }

    /// Non-empty child slots in index order.
    pub fn children(&self) -> impl Iterator<Item = &TreeNode> {
        self.children.iter().filter_map(|slot| slot.as_deref())
    }

    /// Places `node` in slot `index`, returning whatever occupied it.
    pub fn set_child(&mut self, index: usize, node: TreeNode) -> CmResult<Option<Box<TreeNode>>> {
        let line = self.lineno;
        let slot = self
            .children
            .get_mut(index)
            .ok_or(CmError::ChildIndexOutOfRange { index, line })?;
        Ok(slot.replace(Box::new(node)))
    }

    /// Links `node` after the last node of this sibling chain.
    pub fn append_sibling(&mut self, node: TreeNode) {
        let mut tail = &mut self.sibling;
        while let Some(next) = tail {
            tail = &mut next.sibling;
        }
        *tail = Some(Box::new(node));
    }

    /// The sibling chain starting at this node.
    pub fn siblings(&self) -> Siblings<'_> {
        Siblings { next: Some(self) }
    }

    pub fn set_op(&mut self, op: TokenType) {
        self.attr = Attr::Op(op);
    }

    pub fn set_val(&mut self, val: i64) {
        self.attr = Attr::Val(val);
    }

    /// Stores an owned copy of `name`; the node never borrows parser text.
    pub fn set_name(&mut self, name: &str) -> CmResult<()> {
        let line = LineNumber { line: self.lineno };
        if let Some(owned) = copy_string(Some(name), &line)? {
            self.attr = Attr::Name(owned);
        }
        Ok(())
    }

    pub fn set_type(&mut self, ty: ExpType) {
        self.ty = ty;
    }

    pub fn op(&self) -> Option<TokenType> {
        match self.attr {
            Attr::Op(op) => Some(op),
            _ => None,
        }
    }

    pub fn val(&self) -> Option<i64> {
        match self.attr {
            Attr::Val(val) => Some(val),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match &self.attr {
            Attr::Name(name) => Some(name),
            _ => None,
        }
    }
}

// Unlink the sibling chain iteratively so long statement lists cannot
// exhaust the stack when the tree is released.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut next = self.sibling.take();
        while let Some(mut node) = next {
            next = node.sibling.take();
        }
    }
}

pub struct Siblings<'a> {
    next: Option<&'a TreeNode>,
}

impl<'a> Iterator for Siblings<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.sibling.as_deref();
        Some(node)
    }
}

/// Creates a statement node for syntax tree construction.
pub fn new_stmt_node(kind: StmtKind, lineno: &LineNumber) -> TreeNode {
    TreeNode::new(NodeKind::Stmt(kind), lineno)
}

/// Creates an expression node for syntax tree construction.
pub fn new_exp_node(kind: ExpKind, lineno: &LineNumber) -> TreeNode {
    TreeNode::new(NodeKind::Exp(kind), lineno)
}

/// Creates a declaration node for syntax tree construction.
pub fn new_decl_node(kind: DeclKind, lineno: &LineNumber) -> TreeNode {
    TreeNode::new(NodeKind::Decl(kind), lineno)
}
