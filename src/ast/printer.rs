use crate::ast::node::{Attr, DeclKind, ExpKind, NodeKind, StmtKind, TreeNode};
use crate::errors::CmResult;
use crate::listing::print_token;
use crate::utils::config::tree::INDENT_STEP;
use crate::utils::string_utils::write_spaces;
use std::io::Write;

/// Prints a syntax tree to the sink, using indentation to show subtrees.
///
/// Nodes along a sibling chain share one level; each child slot goes one
/// level deeper. The top level is already indented by one step.
pub fn print_tree<W: Write + ?Sized>(out: &mut W, tree: &TreeNode) -> CmResult<()> {
    TreePrinter::new(out).print(Some(tree), 0)
}

pub struct TreePrinter<'a, W: Write + ?Sized> {
    out: &'a mut W,
    step: usize,
}

impl<'a, W: Write + ?Sized> TreePrinter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self {
            out,
            step: INDENT_STEP,
        }
    }

    pub fn with_step(out: &'a mut W, step: usize) -> Self {
        Self { out, step }
    }

    /// Prints `tree` and its siblings one step below `depth` spaces.
    pub fn print(&mut self, tree: Option<&TreeNode>, depth: usize) -> CmResult<()> {
        let indent = depth + self.step;
        let Some(tree) = tree else {
            return Ok(());
        };
        for node in tree.siblings() {
            write_spaces(self.out, indent)?;
            self.print_node(node)?;
            for child in node.children() {
                self.print(Some(child), indent)?;
            }
        }
        Ok(())
    }

    fn print_node(&mut self, node: &TreeNode) -> CmResult<()> {
        match node.kind {
            NodeKind::Stmt(kind) => self.print_stmt(kind),
            NodeKind::Exp(kind) => self.print_exp(kind, node),
            NodeKind::Decl(kind) => self.print_decl(kind, node),
        }
    }

    fn print_stmt(&mut self, kind: StmtKind) -> CmResult<()> {
        let text = match kind {
            StmtKind::Compound => "Compound",
            StmtKind::Selection => "Subsequence",
            StmtKind::Iteration => "While",
            StmtKind::Return => "Return",
        };
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    fn print_exp(&mut self, kind: ExpKind, node: &TreeNode) -> CmResult<()> {
        match (kind, &node.attr) {
            (ExpKind::Operator, Attr::Op(op)) => {
                write!(self.out, "Operator: ")?;
                // operator tags never read the lexeme
                print_token(self.out, *op, "")?;
            }
            (ExpKind::Constant, Attr::Val(val)) => writeln!(self.out, "NUM: {}", val)?,
            (ExpKind::Identifier, Attr::Name(name)) => writeln!(self.out, "ID: {}", name)?,
            (ExpKind::Call, Attr::Name(name)) => writeln!(self.out, "Call: {}", name)?,
            _ => writeln!(self.out, "Unknown ExpNode kind")?,
        }
        Ok(())
    }

    fn print_decl(&mut self, kind: DeclKind, node: &TreeNode) -> CmResult<()> {
        let Attr::Name(name) = &node.attr else {
            writeln!(self.out, "Unknown DeclNode kind")?;
            return Ok(());
        };
        match kind {
            DeclKind::Variable => writeln!(self.out, "Variable Decl: {} ({})", name, node.ty)?,
            DeclKind::Function => writeln!(self.out, "Function Decl: {} ({})", name, node.ty)?,
            DeclKind::Parameter => writeln!(self.out, "Param: {} ({})", name, node.ty)?,
        }
        Ok(())
    }
}
