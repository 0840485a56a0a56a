// Syntax tree for the C-Minus compiler.
// Nodes are built bottom-up by the parser and printed for diagnostics.

pub mod node;
pub mod printer;

pub use node::{
    new_decl_node, new_exp_node, new_stmt_node, Attr, DeclKind, ExpKind, ExpType, NodeKind,
    Siblings, StmtKind, TreeNode,
};
pub use printer::{print_tree, TreePrinter};
