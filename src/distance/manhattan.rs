//! Manhattan (L1) metric on the integer grid.

use crate::models::Location;

/// Manhattan distance `|dx| + |dy|` between two locations.
///
/// Computed with `abs_diff`, so it is exact for the whole `i32` range.
///
/// # Examples
///
/// ```
/// use u_route_exact::distance::manhattan;
/// use u_route_exact::models::Location;
///
/// assert_eq!(manhattan(Location::new(0, 0), Location::new(10, 20)), 30);
/// assert_eq!(manhattan(Location::new(-5, 3), Location::new(5, -3)), 16);
/// ```
pub fn manhattan(a: Location, b: Location) -> u64 {
    u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y))
}
