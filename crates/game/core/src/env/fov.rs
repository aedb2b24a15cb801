//! Field-of-view collaborator.
//!
//! The engine never computes visibility itself; it hands the transparency
//! grid, the player's position and the view radius to a [`FieldOfView`] and
//! stores whatever grid comes back. Any `Fn(&Grid<bool>, Position, u32) ->
//! Grid<bool>` qualifies, so callers can plug in their own algorithm.
//! [`RayCastFov`] is the stock implementation.

use crate::state::{Grid, Position};

/// Pure visibility function: `compute(transparency, origin, radius) -> visible`.
///
/// Implementations must return a grid with the same dimensions as
/// `transparency`.
pub trait FieldOfView {
    fn compute(&self, transparency: &Grid<bool>, origin: Position, radius: u32) -> Grid<bool>;
}

impl<F> FieldOfView for F
where
    F: Fn(&Grid<bool>, Position, u32) -> Grid<bool>,
{
    fn compute(&self, transparency: &Grid<bool>, origin: Position, radius: u32) -> Grid<bool> {
        self(transparency, origin, radius)
    }
}

/// Casts one straight ray from the origin to every cell on the perimeter of
/// the radius' bounding square.
///
/// A cell is visible when a ray reaches it within the circular radius. Opaque
/// cells are lit but stop the ray. The origin is always visible when it lies
/// inside the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RayCastFov;

impl FieldOfView for RayCastFov {
    fn compute(&self, transparency: &Grid<bool>, origin: Position, radius: u32) -> Grid<bool> {
        let mut visible = Grid::filled(transparency.dimensions(), false);
        let Some(cell) = visible.get_mut(origin) else {
            return visible;
        };
        *cell = true;

        // Nothing on the grid lies further than width + height from the origin.
        let reach = transparency.width().saturating_add(transparency.height());
        let r = radius.min(reach).min(i32::MAX as u32) as i32;
        for offset in -r..=r {
            cast_ray(transparency, &mut visible, origin, offset, -r, r);
            cast_ray(transparency, &mut visible, origin, offset, r, r);
            cast_ray(transparency, &mut visible, origin, -r, offset, r);
            cast_ray(transparency, &mut visible, origin, r, offset, r);
        }

        visible
    }
}

fn cast_ray(
    transparency: &Grid<bool>,
    visible: &mut Grid<bool>,
    origin: Position,
    dx: i32,
    dy: i32,
    radius: i32,
) {
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return;
    }

    let radius_sq = i64::from(radius) * i64::from(radius);
    for step in 1..=steps {
        let ox = round_div(i64::from(dx) * i64::from(step), i64::from(steps));
        let oy = round_div(i64::from(dy) * i64::from(step), i64::from(steps));
        // Distance grows monotonically along the ray, so nothing further can be in range.
        if ox * ox + oy * oy > radius_sq {
            return;
        }

        let position = origin.offset(ox as i32, oy as i32);
        let Some(&transparent) = transparency.get(position) else {
            return;
        };
        if let Some(cell) = visible.get_mut(position) {
            *cell = true;
        }
        if !transparent {
            return;
        }
    }
}

/// Integer division rounding half away from zero. `denominator` must be positive.
fn round_div(numerator: i64, denominator: i64) -> i64 {
    if numerator >= 0 {
        (2 * numerator + denominator) / (2 * denominator)
    } else {
        -((-2 * numerator + denominator) / (2 * denominator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapDimensions;

    fn open(width: u32, height: u32) -> Grid<bool> {
        Grid::filled(MapDimensions::new(width, height), true)
    }

    #[test]
    fn open_room_is_fully_visible_within_radius() {
        let transparency = open(10, 10);
        let visible = RayCastFov.compute(&transparency, Position::new(5, 5), 8);
        assert_eq!(visible.count_true(), 100);
    }

    #[test]
    fn radius_limits_visibility() {
        let transparency = open(21, 21);
        let visible = RayCastFov.compute(&transparency, Position::new(10, 10), 3);

        assert_eq!(visible.get(Position::new(13, 10)), Some(&true));
        assert_eq!(visible.get(Position::new(10, 7)), Some(&true));
        assert_eq!(visible.get(Position::new(14, 10)), Some(&false));
        // (3, 3) offset lies outside a circle of radius 3.
        assert_eq!(visible.get(Position::new(13, 13)), Some(&false));
    }

    #[test]
    fn walls_are_lit_but_block_what_lies_behind() {
        let mut transparency = open(10, 1);
        transparency.set(Position::new(5, 0), false).unwrap();

        let visible = RayCastFov.compute(&transparency, Position::new(2, 0), 8);

        assert_eq!(visible.get(Position::new(4, 0)), Some(&true));
        assert_eq!(visible.get(Position::new(5, 0)), Some(&true));
        assert_eq!(visible.get(Position::new(6, 0)), Some(&false));
    }

    #[test]
    fn origin_outside_grid_sees_nothing() {
        let transparency = open(4, 4);
        let visible = RayCastFov.compute(&transparency, Position::new(-1, 2), 8);
        assert_eq!(visible.count_true(), 0);
        assert_eq!(visible.dimensions(), transparency.dimensions());
    }

    #[test]
    fn zero_radius_sees_only_origin() {
        let transparency = open(5, 5);
        let visible = RayCastFov.compute(&transparency, Position::new(2, 2), 0);
        assert_eq!(visible.count_true(), 1);
        assert_eq!(visible.get(Position::new(2, 2)), Some(&true));
    }

    #[test]
    fn closures_implement_field_of_view() {
        let everything = |transparency: &Grid<bool>, _: Position, _: u32| {
            Grid::filled(transparency.dimensions(), true)
        };
        let visible = everything.compute(&open(3, 2), Position::ORIGIN, 1);
        assert_eq!(visible.count_true(), 6);
    }

    #[test]
    fn round_div_rounds_half_away_from_zero() {
        assert_eq!(round_div(5, 2), 3);
        assert_eq!(round_div(-5, 2), -3);
        assert_eq!(round_div(4, 3), 1);
        assert_eq!(round_div(-4, 3), -1);
        assert_eq!(round_div(0, 7), 0);
    }
}
