/// Outcome of the divergence test for a single point.
///
/// `Escaped(k)` carries the 0-based index of the iteration whose update
/// pushed the modulus past the threshold, so `k` is always strictly below
/// the iteration cap. `Bounded` means the point never exceeded the
/// threshold within the cap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscapeResult {
    Escaped(u32),
    Bounded,
}
