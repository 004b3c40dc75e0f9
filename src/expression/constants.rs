/// Deepest allowed chain of parentheses, unary signs and exponents
pub const MAX_NESTING_DEPTH: usize = 100;

/// Longest allowed expression, in tokens. Bounds the depth of the tree
/// built from long flat chains such as `1 + 1 + ... + 1`.
pub const MAX_TOKENS: usize = 1000;
