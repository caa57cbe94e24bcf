//! Satellite trajectories to sample model fields along.

use crate::{
    error::{InterpolationError, InterpolationResult},
    grid::fgr,
};

/// A single trajectory sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryPoint {
    /// Time, in the same units as the model grid times.
    pub time: fgr,
    /// Latitude [deg].
    pub lat: fgr,
    /// Longitude [deg].
    pub lon: fgr,
    /// Altitude [km].
    pub alt: fgr,
}

impl TrajectoryPoint {
    pub fn new(time: fgr, lat: fgr, lon: fgr, alt: fgr) -> Self {
        Self {
            time,
            lat,
            lon,
            alt,
        }
    }

    /// Whether all the coordinates of the point are finite.
    pub fn is_finite(&self) -> bool {
        self.time.is_finite() && self.lat.is_finite() && self.lon.is_finite() && self.alt.is_finite()
    }
}

/// A trajectory given as parallel arrays of sample times and positions.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    times: Vec<fgr>,
    lats: Vec<fgr>,
    lons: Vec<fgr>,
    alts: Vec<fgr>,
}

impl Trajectory {
    /// Creates a new trajectory from parallel coordinate arrays.
    ///
    /// Fails with `InvalidInput` if the arrays differ in length.
    pub fn new(
        times: Vec<fgr>,
        lats: Vec<fgr>,
        lons: Vec<fgr>,
        alts: Vec<fgr>,
    ) -> InterpolationResult<Self> {
        let n_samples = times.len();
        if lats.len() != n_samples || lons.len() != n_samples || alts.len() != n_samples {
            return Err(InterpolationError::invalid_input(format!(
                "trajectory arrays differ in length (times {}, lats {}, lons {}, alts {})",
                n_samples,
                lats.len(),
                lons.len(),
                alts.len()
            )));
        }
        Ok(Self {
            times,
            lats,
            lons,
            alts,
        })
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the sample with the given index.
    ///
    /// # Panics
    ///
    /// If the index is not smaller than the number of samples.
    pub fn point(&self, idx: usize) -> TrajectoryPoint {
        TrajectoryPoint::new(self.times[idx], self.lats[idx], self.lons[idx], self.alts[idx])
    }

    /// Returns an iterator over all samples.
    pub fn points(&self) -> impl Iterator<Item = TrajectoryPoint> + '_ {
        (0..self.len()).map(move |idx| self.point(idx))
    }

    pub fn times(&self) -> &[fgr] {
        &self.times
    }

    pub fn lats(&self) -> &[fgr] {
        &self.lats
    }

    pub fn lons(&self) -> &[fgr] {
        &self.lons
    }

    pub fn alts(&self) -> &[fgr] {
        &self.alts
    }
}
