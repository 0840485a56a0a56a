// Syntax tree constants
pub mod tree {
    // Number of child slots every node carries
    pub const MAX_CHILDREN: usize = 3;

    // Spaces added per nesting level when printing a tree
    pub const INDENT_STEP: usize = 2;
}

// Source file constants
pub mod source {
    pub const SOURCE_EXTENSION: &str = "cm";
}

/// Switches controlling what goes into the compilation listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingFlags {
    /// Echo every source line, prefixed with its line number
    pub echo_source: bool,
    /// Trace every token produced by the scanner
    pub trace_scan: bool,
}
