use rayon::prelude::*;

use crate::core::actions::compute_escape_time::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::classification_grid::ClassificationGrid;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::resolution::Resolution;
use crate::core::errors::{RenderError, try_vec_with_capacity};
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// How the grid is filled. Both modes produce identical grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    Serial,
    #[default]
    Parallel,
}

pub fn compute_escape_time_with_mode<Alg>(
    region: ComplexRect,
    resolution: Resolution,
    algorithm: &Alg,
    mode: ExecutionMode,
) -> Result<ClassificationGrid, RenderError>
where
    Alg: EscapeTimeAlgorithm + ?Sized,
{
    match mode {
        ExecutionMode::Serial => compute_escape_time(region, resolution, algorithm),
        ExecutionMode::Parallel => compute_escape_time_parallel(region, resolution, algorithm),
    }
}

/// Classifies every pixel of `resolution` over `region`.
///
/// The grid is allocated up front and fully populated before it is returned, so
/// callers never observe a partially computed grid.
pub fn compute_escape_time<Alg>(
    region: ComplexRect,
    resolution: Resolution,
    algorithm: &Alg,
) -> Result<ClassificationGrid, RenderError>
where
    Alg: EscapeTimeAlgorithm + ?Sized,
{
    let mut values = try_vec_with_capacity::<u32>(resolution.pixel_count()?)?;

    for j in 0..resolution.height() {
        for i in 0..resolution.width() {
            values.push(algorithm.classify(pixel_to_complex_coords(i, j, resolution, region)));
        }
    }

    Ok(ClassificationGrid::from_values(resolution, values)?)
}

/// Row-parallel variant on rayon's work-stealing pool.
pub fn compute_escape_time_parallel<Alg>(
    region: ComplexRect,
    resolution: Resolution,
    algorithm: &Alg,
) -> Result<ClassificationGrid, RenderError>
where
    Alg: EscapeTimeAlgorithm + ?Sized,
{
    let pixel_count = resolution.pixel_count()?;
    let mut values = try_vec_with_capacity::<u32>(pixel_count)?;
    values.resize(pixel_count, 0);

    values
        .par_chunks_mut(resolution.width() as usize)
        .zip(0..resolution.height())
        .for_each(|(row, j)| {
            for (value, i) in row.iter_mut().zip(0..resolution.width()) {
                *value = algorithm.classify(pixel_to_complex_coords(i, j, resolution, region));
            }
        });

    Ok(ClassificationGrid::from_values(resolution, values)?)
}
