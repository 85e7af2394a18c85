use ces_consumer::SolutionCurves;
use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::polyline::{Trace, traces};

const BUDGET_COLOR: Color32 = Color32::from_rgb(31, 119, 180);
const INDIFFERENCE_COLOR: Color32 = Color32::from_rgb(255, 127, 14);

/// A blocking egui window showing a solved consumer problem.
///
/// # Example
///
/// ```ignore
/// let curves = problem.solution_curves()?;
/// SolutionPlot::new(curves).legend().show()?;
/// ```
pub struct SolutionPlot {
    title: String,
    legend: bool,
    curves: SolutionCurves,
}

impl SolutionPlot {
    /// Creates a plot with the default title and no legend.
    #[must_use]
    pub fn new(curves: SolutionCurves) -> Self {
        Self {
            title: "Consumer Problem with CES Utility".to_owned(),
            legend: false,
            curves,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Enables a legend labeling each curve.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Opens the window and blocks until it is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self) -> Result<(), eframe::Error> {
        let title = self.title.clone();
        let app = PlotApp {
            traces: traces(&self.curves),
            optimum: [self.curves.reference.x, self.curves.reference.y],
            limit: self.curves.limit,
            legend: self.legend,
        };

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(app))),
        )
    }
}

/// The egui [`eframe::App`] that renders the traces.
struct PlotApp {
    traces: Vec<Trace>,
    optimum: [f64; 2],
    limit: f64,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("consumer_problem")
                .x_axis_label("Quantity of Good X")
                .y_axis_label("Quantity of Good Y")
                .data_aspect(1.0)
                .include_x(0.0)
                .include_x(self.limit)
                .include_y(0.0)
                .include_y(self.limit);
            if self.legend {
                plot = plot.legend(Legend::default());
            }

            plot.show(ui, |plot_ui| {
                for (index, trace) in self.traces.iter().enumerate() {
                    let color = if index == 0 {
                        BUDGET_COLOR
                    } else {
                        INDIFFERENCE_COLOR
                    };
                    for segment in &trace.segments {
                        let points: PlotPoints = segment.iter().copied().collect();
                        plot_ui.line(Line::new(points).color(color).name(&trace.name));
                    }
                }
                plot_ui.points(
                    Points::new(vec![self.optimum])
                        .radius(4.0)
                        .color(Color32::BLACK)
                        .name("Optimum"),
                );
            });
        });
    }
}
