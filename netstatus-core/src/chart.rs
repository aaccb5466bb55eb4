use plotters::prelude::*;

use crate::{Error, Result};

/// Renders the dashboard's "speed over time" strip from a handful of live
/// throughput samples. Sample `i` is labeled `(i+1)s`, matching the polling
/// cadence the page advertises.
#[derive(Debug, Clone, Copy)]
pub struct SpeedChart {
    pub width: u32,
    pub height: u32,
}

impl Default for SpeedChart {
    fn default() -> Self {
        Self { width: 480, height: 240 }
    }
}

impl SpeedChart {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn render_svg(&self, samples: &[f64]) -> Result<String> {
        let mut svg = String::new();
        draw(&mut svg, samples, self.width, self.height)
            .map_err(|err| Error::Chart(err.to_string()))?;
        Ok(svg)
    }
}

fn draw(
    svg: &mut String,
    samples: &[f64],
    width: u32,
    height: u32,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::with_string(svg, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    // An all-zero (all-failed) sample set still needs a drawable y range.
    let max_speed = samples.iter().cloned().fold(0.0f64, f64::max).max(1.0);
    let last = samples.len().saturating_sub(1).max(1) as i32;

    let mut chart = ChartBuilder::on(&root)
        .caption("Network Speed Over Time", ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(45)
        .build_cartesian_2d(0..last, 0f64..max_speed * 1.1)?;

    chart
        .configure_mesh()
        .x_label_formatter(&|x| format!("{}s", x + 1))
        .x_desc("Time")
        .y_desc("Speed (Mbps)")
        .draw()?;

    chart.draw_series(
        LineSeries::new(
            samples.iter().enumerate().map(|(i, &v)| (i as i32, v)),
            &BLUE,
        )
        .point_size(3),
    )?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_svg_document() {
        let svg = SpeedChart::default()
            .render_svg(&[12.5, 40.0, 33.3, 0.0, 18.75])
            .unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Network Speed Over Time"));
    }

    #[test]
    fn all_failed_samples_still_render() {
        let svg = SpeedChart::default().render_svg(&[0.0; 5]).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn a_single_sample_renders() {
        assert!(SpeedChart::default().render_svg(&[5.0]).is_ok());
    }
}
