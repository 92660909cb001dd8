//! Layout walks: the populated coordinate set of each [`GridLayout`], in the
//! grid's canonical enumeration order.
//!
//! Every walk goes row by row (ascending `r` for axial walks, ascending
//! offset row for the rectangular one) and left to right within a row, so
//! the order is a pure function of the construction parameters.

use hexx::Hex;

use super::{GridLayout, GridSettings, Orientation};
use crate::error::GridError;

/// Upper bound on the number of cells a single grid may hold.
pub const MAX_CELLS: u64 = 1 << 24;

/// Checks that `settings` describe a geometry the walks can produce.
pub fn validate(settings: &GridSettings) -> Result<(), GridError> {
    if !settings.radius.is_finite() || settings.radius <= 0.0 {
        return Err(GridError::InvalidRadius {
            radius: settings.radius,
        });
    }
    match settings.layout {
        GridLayout::Rectangular | GridLayout::Trapezoid => {}
        GridLayout::Triangular | GridLayout::Hexagonal if settings.width != settings.height => {
            return Err(GridError::UnequalSides {
                layout: settings.layout,
                width: settings.width,
                height: settings.height,
            });
        }
        GridLayout::Hexagonal if settings.width % 2 == 0 => {
            return Err(GridError::EvenHexagonSize {
                size: settings.width,
            });
        }
        GridLayout::Triangular | GridLayout::Hexagonal => {}
    }
    extent(settings).map(|_| ())
}

/// Number of cells the layout populates. Saturates instead of overflowing.
pub fn cell_count(settings: &GridSettings) -> u64 {
    let (width, height) = (u64::from(settings.width), u64::from(settings.height));
    match settings.layout {
        GridLayout::Rectangular | GridLayout::Trapezoid => width.saturating_mul(height),
        GridLayout::Triangular => height.saturating_mul(height + 1) / 2,
        GridLayout::Hexagonal => {
            let radius = height / 2;
            radius
                .saturating_mul(radius + 1)
                .saturating_mul(3)
                .saturating_add(1)
        }
    }
}

/// Width and height as signed axial extents, if the grid is small enough to
/// build.
fn extent(settings: &GridSettings) -> Result<(i32, i32), GridError> {
    let too_large = || GridError::ExtentTooLarge {
        width: settings.width,
        height: settings.height,
    };
    let width = i32::try_from(settings.width).map_err(|_| too_large())?;
    let height = i32::try_from(settings.height).map_err(|_| too_large())?;
    if cell_count(settings) > MAX_CELLS {
        return Err(too_large());
    }
    Ok((width, height))
}

/// Validates `settings` and walks the layout they describe.
pub fn coordinates(settings: &GridSettings) -> Result<Vec<Hex>, GridError> {
    validate(settings)?;
    let (width, height) = extent(settings)?;
    Ok(match settings.layout {
        GridLayout::Rectangular => rectangle(width, height, settings.orientation),
        GridLayout::Trapezoid => trapezoid(width, height),
        GridLayout::Triangular => triangle(height),
        GridLayout::Hexagonal => hexagon(height, settings.orientation),
    })
}

/// Offset rows converted to axial. Pointy-top shifts every second row left,
/// flat-top shifts every second column up.
pub fn rectangle(width: i32, height: i32, orientation: Orientation) -> Vec<Hex> {
    let capacity = usize::try_from(width)
        .ok()
        .zip(usize::try_from(height).ok())
        .and_then(|(w, h)| w.checked_mul(h))
        .unwrap_or(0);
    let mut hexes = Vec::with_capacity(capacity);
    for y in 0..height {
        for x in 0..width {
            let hex = match orientation {
                Orientation::PointyTop => Hex::new(x - y.div_euclid(2), y),
                Orientation::FlatTop => Hex::new(x, y - x.div_euclid(2)),
            };
            hexes.push(hex);
        }
    }
    hexes
}

/// Axial parallelogram `q in 0..width`, `r in 0..height`.
pub fn trapezoid(width: i32, height: i32) -> Vec<Hex> {
    (0..height)
        .flat_map(|r| (0..width).map(move |q| Hex::new(q, r)))
        .collect()
}

/// Triangle with its right angle at the origin, `size` cells per side.
pub fn triangle(size: i32) -> Vec<Hex> {
    (0..size)
        .flat_map(|r| (0..size - r).map(move |q| Hex::new(q, r)))
        .collect()
}

/// Hexagon of radius `size / 2` that fits a `size x size` offset box.
///
/// `size` must be odd.
pub fn hexagon(size: i32, orientation: Orientation) -> Vec<Hex> {
    let radius = size / 2;
    let center = match orientation {
        // Rounds half up, so a 3-wide pointy hexagon centers on (1, 1).
        Orientation::PointyTop => Hex::new((size + 2) / 4, radius),
        Orientation::FlatTop => Hex::new(radius, radius - size / 4),
    };
    (-radius..=radius)
        .flat_map(|dr| {
            let q_min = (-radius).max(-radius - dr);
            let q_max = radius.min(radius - dr);
            (q_min..=q_max).map(move |dq| center + Hex::new(dq, dr))
        })
        .collect()
}
