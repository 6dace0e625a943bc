//! ASCII plot of the fitted cooling curve.
//!
//! Fixed-size character grid, x = hours since death, y = body temperature.
//!
//! Plot elements:
//! - cooling curve: `-`
//! - ambient temperature: `.`
//! - death (t = 0, T0): `D`
//! - first / second reading: `1` / `2`
//! - reference instant: `R`

use crate::domain::{KSource, NormalizedRequest, Solution};
use crate::models::temperature_at;

/// Render the cooling curve for a solved request.
pub fn render_cooling_plot(
    request: &NormalizedRequest,
    solution: &Solution,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let te = request.ambient_temp_c;
    let t0 = request.normal_body_temp_c;
    let k = solution.k.value;

    let mut readings = vec![(solution.first_reading_hours, request.body_temp_c, '1')];
    if let KSource::Derived {
        second_temp_c,
        delta_hours,
        ..
    } = solution.k.source
    {
        readings.push((solution.first_reading_hours + delta_hours, second_temp_c, '2'));
    }
    let reference = solution.time_since_death_hours;

    let (t_min, t_max) = time_range(&readings, reference);
    let curve: Vec<(f64, f64)> = (0..width)
        .map(|i| {
            let u = i as f64 / (width as f64 - 1.0);
            let t = t_min + u * (t_max - t_min);
            (t, temperature_at(te, t0, k, t))
        })
        .collect();

    let (y_lo, y_hi) = y_range(&curve, &readings, te);
    let y_axis = Axis::padded(y_lo, y_hi, height);
    let mut canvas = Canvas::new(Axis::new(t_min, t_max, width), y_axis);

    for pair in curve.windows(2) {
        canvas.segment(pair[0], pair[1], '-');
    }
    canvas.fill_blank_row(te, '.');

    let mut markers = vec![(0.0, t0, 'D'), (reference, temperature_at(te, t0, k, reference), 'R')];
    markers.extend(readings.iter().copied());
    for (t, y, ch) in markers {
        canvas.put(t, y, ch);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: hours since death=[{t_min:.2}, {t_max:.2}] | T=[{:.2}, {:.2}]°C | ambient={te:.2}°C\n",
        y_axis.lo, y_axis.hi
    ));
    for row in canvas.rows {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }
    out
}

fn time_range(readings: &[(f64, f64, char)], reference: f64) -> (f64, f64) {
    let mut min_t = 0.0_f64.min(reference);
    let mut max_t = 0.0_f64.max(reference);
    for &(t, _, _) in readings {
        min_t = min_t.min(t);
        max_t = max_t.max(t);
    }
    if (max_t - min_t).abs() < 1e-9 {
        max_t = min_t + 1.0;
    }
    (min_t, max_t)
}

fn y_range(curve: &[(f64, f64)], readings: &[(f64, f64, char)], ambient: f64) -> (f64, f64) {
    let mut min_y = ambient;
    let mut max_y = ambient;
    for &(_, y) in curve {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    for &(_, y, _) in readings {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    (min_y, max_y)
}

/// One plot dimension: a value interval spread over `cells` character cells.
#[derive(Debug, Clone, Copy)]
struct Axis {
    lo: f64,
    hi: f64,
    cells: usize,
}

impl Axis {
    fn new(lo: f64, hi: f64, cells: usize) -> Self {
        Self { lo, hi, cells: cells.max(2) }
    }

    /// Widen the interval by 5% on each side so extremes stay off the border.
    fn padded(lo: f64, hi: f64, cells: usize) -> Self {
        let margin = ((hi - lo).abs() * 0.05).max(1e-12);
        Self::new(lo - margin, hi + margin, cells)
    }

    /// Cell index for `v`, counted from the low end and clamped to the axis.
    fn cell(&self, v: f64) -> usize {
        let frac = ((v - self.lo) / (self.hi - self.lo)).clamp(0.0, 1.0);
        (frac * (self.cells - 1) as f64).round() as usize
    }
}

/// Character grid addressed in (hours, °C) space.
struct Canvas {
    rows: Vec<Vec<char>>,
    x: Axis,
    y: Axis,
}

impl Canvas {
    fn new(x: Axis, y: Axis) -> Self {
        Self { rows: vec![vec![' '; x.cells]; y.cells], x, y }
    }

    /// Grid position of a data point. Row 0 is the top, so temperatures flip.
    fn locate(&self, t: f64, temp: f64) -> (usize, usize) {
        (self.x.cell(t), self.y.cells - 1 - self.y.cell(temp))
    }

    /// Place a marker, replacing whatever is already in the cell.
    fn put(&mut self, t: f64, temp: f64, ch: char) {
        let (col, row) = self.locate(t, temp);
        self.rows[row][col] = ch;
    }

    fn fill_blank_row(&mut self, temp: f64, ch: char) {
        let (_, row) = self.locate(self.x.lo, temp);
        for cell in self.rows[row].iter_mut().filter(|c| **c == ' ') {
            *cell = ch;
        }
    }

    /// Connect two data points with `ch`, leaving occupied cells alone.
    fn segment(&mut self, from: (f64, f64), to: (f64, f64), ch: char) {
        let (c0, r0) = self.locate(from.0, from.1);
        let (c1, r1) = self.locate(to.0, to.1);
        let (mut col, mut row) = (c0 as isize, r0 as isize);
        let (end_col, end_row) = (c1 as isize, r1 as isize);

        let run = (end_col - col).abs();
        let rise = (end_row - row).abs();
        let step_col = (end_col - col).signum();
        let step_row = (end_row - row).signum();
        let mut slack = run - rise;

        loop {
            // Both indices come from `locate`, so they are in bounds.
            let cell = &mut self.rows[row as usize][col as usize];
            if *cell == ' ' {
                *cell = ch;
            }
            if col == end_col && row == end_row {
                break;
            }
            let doubled = 2 * slack;
            if doubled > -rise {
                slack -= rise;
                col += step_col;
            }
            if doubled < run {
                slack += run;
                row += step_row;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Calibration, CoolingConstant, SecondReading};
    use chrono::NaiveDate;

    fn request(calibration: Calibration) -> NormalizedRequest {
        NormalizedRequest {
            ambient_temp_c: 20.0,
            body_temp_c: 32.0,
            normal_body_temp_c: 37.0,
            time_since_first_reading_hours: 1.0,
            scene_date_time: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            calibration,
            explicit_k_overridden: false,
        }
    }

    #[test]
    fn plot_has_header_and_fixed_rows() {
        let s = Solution {
            k: CoolingConstant { value: 0.1947, source: KSource::Default },
            first_reading_hours: 1.79,
            time_since_death_hours: 2.79,
        };
        let txt = render_cooling_plot(&request(Calibration::Default), &s, 40, 12);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 13);
        assert!(lines[0].starts_with("Plot: hours since death=[0.00, 2.79]"));
        assert!(lines.iter().all(|l| l.chars().count() <= 40 || l.starts_with("Plot")));

        // Death sits at the left edge, above the first reading.
        let row_of = |ch: char| lines.iter().skip(1).position(|l| l.contains(ch)).unwrap();
        assert!(lines.iter().skip(1).any(|l| l.starts_with('D')));
        assert!(row_of('D') < row_of('1'));
        for marker in ['1', 'R', '-', '.'] {
            assert!(lines[1..].iter().any(|l| l.contains(marker)), "missing {marker}");
        }
        assert!(!lines[1..].iter().any(|l| l.contains('2')));
    }

    #[test]
    fn derived_plot_marks_second_reading() {
        let second = SecondReading { body_temp_c: 30.0, delta_hours_from_first: 1.0 };
        let s = Solution {
            k: CoolingConstant {
                value: 0.1823,
                source: KSource::Derived { first_temp_c: 32.0, second_temp_c: 30.0, delta_hours: 1.0 },
            },
            first_reading_hours: 1.91,
            time_since_death_hours: 2.91,
        };
        let txt = render_cooling_plot(&request(Calibration::Derived(second)), &s, 40, 12);
        let grid: String = txt.lines().skip(1).collect::<Vec<_>>().join("\n");
        assert!(grid.contains('1'));
        assert!(grid.contains('2'));
    }

    #[test]
    fn axis_clamps_and_rows_run_top_down() {
        let x = Axis::new(0.0, 10.0, 11);
        assert_eq!(x.cell(-3.0), 0);
        assert_eq!(x.cell(4.0), 4);
        assert_eq!(x.cell(25.0), 10);

        let canvas = Canvas::new(x, Axis::new(20.0, 40.0, 5));
        assert_eq!(canvas.locate(0.0, 40.0), (0, 0));
        assert_eq!(canvas.locate(10.0, 20.0), (10, 4));
    }

    #[test]
    fn segment_is_gapless_and_keeps_existing_marks() {
        let mut canvas = Canvas::new(Axis::new(0.0, 9.0, 10), Axis::new(0.0, 4.0, 5));
        canvas.put(3.0, 3.0, 'X');
        canvas.segment((0.0, 4.0), (9.0, 0.0), '-');

        for col in 0..10 {
            assert!(canvas.rows.iter().any(|r| r[col] != ' '), "gap at column {col}");
        }
        assert_eq!(canvas.rows[0][0], '-');
        assert_eq!(canvas.rows[4][9], '-');
        assert_eq!(canvas.rows[1][3], 'X');
    }
}
