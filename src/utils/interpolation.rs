//! Grid construction and linear interpolation helpers used by the scaling transforms.

use ndarray::Array1;

/// Returns `n` evenly spaced values over `[start, end]`.
///
/// The final element is pinned to `end` exactly so that a query grid built
/// from a signal's own span never drifts past its last sample.
pub fn linspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut grid = Array1::from_shape_fn(n, |i| start + step * i as f64);
            grid[n - 1] = end;
            grid
        }
    }
}

/// Piecewise-linear interpolation over a sampled series.
///
/// Queries outside `[x[0], x[last]]` evaluate to the fill value.
#[derive(Debug, Clone, Copy)]
pub struct LinearInterpolator<'a> {
    x: &'a [f64],
    y: &'a [f64],
    fill: f64,
}

impl<'a> LinearInterpolator<'a> {
    /// Creates an interpolator over `(x, y)` with `x` non-decreasing.
    ///
    /// Only the common prefix of `x` and `y` is used if their lengths differ.
    pub fn new(x: &'a [f64], y: &'a [f64], fill: f64) -> Self {
        let n = x.len().min(y.len());
        Self {
            x: &x[..n],
            y: &y[..n],
            fill,
        }
    }

    /// Evaluates the interpolant at `query`.
    pub fn eval(&self, query: f64) -> f64 {
        let n = self.x.len();
        if n == 0 {
            return self.fill;
        }
        if query < self.x[0] || query > self.x[n - 1] {
            return self.fill;
        }
        if n == 1 {
            return self.y[0];
        }

        let hi = self.x.partition_point(|&v| v < query).clamp(1, n - 1);
        let lo = hi - 1;
        let dx = self.x[hi] - self.x[lo];
        if dx == 0.0 {
            return self.y[hi];
        }
        let slope = (self.y[hi] - self.y[lo]) / dx;
        self.y[lo] + slope * (query - self.x[lo])
    }

    /// Evaluates the interpolant at every point of `queries`.
    pub fn eval_all<'q>(&self, queries: impl IntoIterator<Item = &'q f64>) -> Array1<f64> {
        queries.into_iter().map(|&q| self.eval(q)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;
    use ndarray::array;

    #[test]
    fn test_linspace_pins_endpoint() {
        let grid = linspace(0.0, 0.3, 4);
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[3], 0.3);
        assert_approx_eq!(grid[1], 0.1, 1e-12);

        assert_eq!(linspace(2.0, 5.0, 1), array![2.0]);
        assert!(linspace(2.0, 5.0, 0).is_empty());
    }

    #[test]
    fn test_interpolates_between_samples() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 10.0, -10.0];
        let interp = LinearInterpolator::new(&x, &y, 0.0);

        assert_approx_eq!(interp.eval(0.5), 5.0, 1e-12);
        assert!(interp.eval(1.5).abs() < 1e-12);
        assert_eq!(interp.eval(1.0), 10.0);
        assert_eq!(interp.eval(2.0), -10.0);
        assert_approx_eq!(interp.eval(1.75), -5.0, 1e-12);
    }

    #[test]
    fn test_out_of_bounds_uses_fill() {
        let x = [1.0, 2.0];
        let y = [3.0, 4.0];
        let interp = LinearInterpolator::new(&x, &y, 0.0);

        assert_eq!(interp.eval(0.999), 0.0);
        assert_eq!(interp.eval(2.001), 0.0);
        assert_eq!(interp.eval(1.0), 3.0);
    }

    #[test]
    fn test_eval_all() {
        let x = [0.0, 2.0];
        let y = [0.0, 4.0];
        let interp = LinearInterpolator::new(&x, &y, -1.0);
        let values = interp.eval_all(&array![-1.0, 0.5, 1.0, 3.0]);
        assert_eq!(values, array![-1.0, 1.0, 2.0, -1.0]);
    }
}
