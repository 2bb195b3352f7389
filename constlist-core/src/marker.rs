//! Generation marker placed at the top of every generated file.

/// Comment lines asserting that a file is mechanically produced and must not
/// be edited by hand.
pub const GENERATION_MARKER: [&str; 2] = [
    "//CODE GENERATED AUTOMATICALLY",
    "//THIS FILE SHOULD NOT BE EDITED BY HAND",
];
