/// Union, intersection and difference across point-set representations
pub mod algebra;
/// Per-cell coverage counting and tiling verification
pub mod coverage;
/// Random bisection and recursive quartering of rectangles
pub mod partition;
