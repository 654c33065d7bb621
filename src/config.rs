// Tree printer layout
pub mod printer {
    // One indentation level; level 0 has no leading whitespace
    pub const INDENT_UNIT: &str = "  ";
}

// Tree validation limits
pub mod validation {
    pub const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";
    pub const MAX_IDENTIFIER_LEN: usize = 255;
}

// Driver defaults
pub mod driver {
    pub const DEFAULT_SAMPLE: &str = "main";
}
