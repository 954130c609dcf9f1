//! Frontier assembler: hand swept samples to a plotting collaborator.
//!
//! Pure pass-through — the assembler pairs the risk and return sequences
//! with axis/title metadata and invokes a [`Renderer`]. It never reorders,
//! rescales, or otherwise touches the numbers. Rendering itself lives
//! behind the trait; the `plot` feature provides a plotly-backed
//! implementation.

use crate::sweep::FrontierSeries;

/// A frontier ready to render: paired sequences plus metadata.
///
/// `risks[k]` and `returns[k]` describe the same frontier point; the slices
/// are index-aligned and ordered by the sweep that produced them, so a
/// renderer can trace the curve left-to-right as given.
#[derive(Debug, Clone, Copy)]
pub struct FrontierChart<'a> {
    /// Variance values, x axis.
    pub risks: &'a [f64],
    /// Expected-return values, y axis.
    pub returns: &'a [f64],
    /// Chart title.
    pub title: &'a str,
    /// X axis label.
    pub x_label: &'a str,
    /// Y axis label.
    pub y_label: &'a str,
}

/// Plotting collaborator boundary.
pub trait Renderer {
    /// Render one frontier chart.
    fn render(&mut self, chart: &FrontierChart<'_>);
}

impl FrontierSeries {
    /// View this series as a chart with default axis labels.
    pub fn chart<'a>(&'a self, title: &'a str) -> FrontierChart<'a> {
        FrontierChart {
            risks: &self.variances,
            returns: &self.returns,
            title,
            x_label: "Risk (variance)",
            y_label: "Expected return",
        }
    }
}

/// Assemble a swept series into a chart and pass it to the renderer.
pub fn render_frontier<R: Renderer>(series: &FrontierSeries, title: &str, renderer: &mut R) {
    renderer.render(&series.chart(title));
}

#[cfg(feature = "plot")]
pub use self::plot::PlotlyRenderer;

#[cfg(feature = "plot")]
mod plot {
    use plotly::common::Mode;
    use plotly::layout::Axis;
    use plotly::{Layout, Plot, Scatter};

    use super::{FrontierChart, Renderer};

    /// [`Renderer`] backed by plotly.
    ///
    /// Builds a lines+markers scatter of the frontier; the caller decides
    /// whether to `show()` the resulting [`Plot`] or write it to HTML.
    #[derive(Default)]
    pub struct PlotlyRenderer {
        plot: Option<Plot>,
    }

    impl PlotlyRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        /// Take the plot built by the last [`Renderer::render`] call.
        pub fn into_plot(self) -> Option<Plot> {
            self.plot
        }
    }

    impl Renderer for PlotlyRenderer {
        fn render(&mut self, chart: &FrontierChart<'_>) {
            let trace = Scatter::new(chart.risks.to_vec(), chart.returns.to_vec())
                .mode(Mode::LinesMarkers)
                .name(chart.title);

            let mut plot = Plot::new();
            plot.add_trace(trace);
            plot.set_layout(
                Layout::new()
                    .title(chart.title)
                    .x_axis(Axis::new().title(chart.x_label))
                    .y_axis(Axis::new().title(chart.y_label)),
            );

            self.plot = Some(plot);
        }
    }
}
