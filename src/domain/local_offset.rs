/// Displacement in meters on a local tangent plane.
///
/// `x` points east. `z` is the negated northward displacement, so a target north of the
/// observer ends up at negative `z`, in front of a viewer looking down the forward axis.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct LocalOffset {
    pub x: f64,
    pub z: f64,
}
