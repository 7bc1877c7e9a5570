use iced::{
    mouse, time,
    widget::{
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, scrollable, text, Column, Container,
    },
    Color, Element, Length, Point, Rectangle, Renderer, Size, Subscription, Task, Theme,
};
use serde::Deserialize;
use std::time::Duration;
use wavecore::math::StatsHelper;
use wavecore::{FigureConfig, SignalPayload};

const SIGNAL_URL: &str = "http://127.0.0.1:9000/signal";

fn main() -> iced::Result {
    let (width, height) = FigureConfig::default().pixel_size();
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .window_size(Size::new(width, height + 260.0))
        .run()
}

fn application_title(_: &Visualizer) -> String {
    "Sinewave Visualizer".into()
}

fn application_subscription(_: &Visualizer) -> Subscription<Message> {
    time::every(Duration::from_secs(1)).map(|_| Message::Tick)
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Dark
}

#[derive(Debug)]
struct Visualizer {
    model: Option<SignalModel>,
    status: String,
    history: Vec<String>,
}

#[derive(Debug, Clone)]
enum Message {
    Tick,
    SignalFetched(Result<SignalModel, String>),
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        (
            Visualizer {
                model: None,
                status: "Waiting for signal...".into(),
                history: Vec::new(),
            },
            Task::perform(fetch_signal(), Message::SignalFetched),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => Task::perform(fetch_signal(), Message::SignalFetched),
            Message::SignalFetched(Ok(model)) => {
                let changed = state
                    .model
                    .as_ref()
                    .map_or(true, |current| current.payload != model.payload);
                state.status = format!(
                    "'{}': {} samples, peak {:.4}",
                    model.payload.label, model.sample_count, model.peak
                );
                if changed {
                    state.push_history(format!(
                        "Signal '{}' ({} samples)",
                        model.payload.label, model.sample_count
                    ));
                }
                state.model = Some(model);
                Task::none()
            }
            Message::SignalFetched(Err(err)) => {
                state.status = format!("Bridge error: {err}");
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let (samples, figure, notes) = state
            .model
            .as_ref()
            .map(|model| {
                (
                    model.payload.samples.clone(),
                    model.payload.figure,
                    model.notes.clone(),
                )
            })
            .unwrap_or_default();
        let (_, plot_height) = figure.pixel_size();

        let plot = Canvas::new(Waveform { data: samples })
            .width(Length::Fill)
            .height(Length::Fixed(plot_height));

        let notes_list = if notes.is_empty() {
            Column::new().push(text("No notes yet").size(14))
        } else {
            notes
                .iter()
                .fold(Column::new().spacing(4), |col, note| {
                    col.push(text(note.clone()).size(14))
                })
        };

        let history_list = if state.history.is_empty() {
            Column::new().push(text("No activity yet").size(12))
        } else {
            state
                .history
                .iter()
                .rev()
                .fold(Column::new().spacing(4), |col, entry| {
                    col.push(text(entry.clone()).size(12))
                })
        };

        let layout = column![
            text(&state.status).size(18),
            plot,
            text("Summary").size(16),
            Container::new(notes_list).padding(6),
            text("Activity log").size(16),
            Container::new(scrollable(history_list).height(Length::Fixed(90.0))).padding(6),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fill);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > 20 {
            self.history.remove(0);
        }
    }
}

async fn fetch_signal() -> Result<SignalModel, String> {
    let response = reqwest::get(SIGNAL_URL).await.map_err(|e| e.to_string())?;
    response
        .json::<SignalModel>()
        .await
        .map_err(|e| e.to_string())
}

#[derive(Debug, Clone, Deserialize)]
struct SignalModel {
    #[serde(default)]
    payload: SignalPayload,
    #[serde(default)]
    sample_count: usize,
    #[serde(default)]
    peak: f64,
    #[serde(default)]
    notes: Vec<String>,
}

/// Maps samples onto canvas coordinates.
///
/// Samples are spread evenly across the width in generation order; the
/// vertical scale is symmetric around zero with a half-range of at least 1.0,
/// so a unit sine fills the height and the zero line sits in the middle. A
/// single sample sits at the horizontal center.
fn plot_points(data: &[f64], width: f32, height: f32) -> Vec<Point> {
    let Some((min, max)) = StatsHelper::extent(data) else {
        return Vec::new();
    };
    let half_range = min.abs().max(max.abs()).max(1.0) as f32;
    let mid = height / 2.0;
    let y_of = |value: f64| mid - (value as f32 / half_range) * mid;

    if data.len() == 1 {
        return vec![Point::new(width / 2.0, y_of(data[0]))];
    }
    let step = width / (data.len() as f32 - 1.0);
    data.iter()
        .enumerate()
        .map(|(i, &value)| Point::new(i as f32 * step, y_of(value)))
        .collect()
}

#[derive(Clone)]
struct Waveform {
    data: Vec<f64>,
}

impl canvas::Program<Message> for Waveform {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.05),
        );

        let zero_line = Path::line(
            Point::new(0.0, bounds.height / 2.0),
            Point::new(bounds.width, bounds.height / 2.0),
        );
        frame.stroke(
            &zero_line,
            Stroke::default()
                .with_width(1.0)
                .with_color(Color::from_rgb(0.35, 0.35, 0.45)),
        );

        let points = plot_points(&self.data, bounds.width, bounds.height);
        if let [only] = points.as_slice() {
            let dot = Path::circle(*only, 3.0);
            frame.fill(&dot, Color::from_rgb(0.18, 0.72, 0.89));
        } else if let Some((first, rest)) = points.split_first() {
            let path = Path::new(|builder| {
                builder.move_to(*first);
                for point in rest {
                    builder.line_to(*point);
                }
            });

            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(2.0)
                    .with_color(Color::from_rgb(0.18, 0.72, 0.89)),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavecore::generate_cycles;

    #[test]
    fn plot_points_span_canvas_for_unit_sine() {
        let signal = generate_cycles(1.0, 4).unwrap();
        let points = plot_points(signal.samples(), 300.0, 100.0);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[3].x, 300.0);
        assert!((points[1].y - 0.0).abs() < 1e-3);
        assert!((points[3].y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn plot_points_scale_large_amplitudes() {
        let points = plot_points(&[0.0, 4.0, -4.0], 10.0, 80.0);
        assert_eq!(points[1].y, 0.0);
        assert_eq!(points[2].y, 80.0);
    }

    #[test]
    fn plot_points_center_a_single_sample() {
        let points = plot_points(&[1.0], 10.0, 10.0);
        assert_eq!(points, vec![Point::new(5.0, 0.0)]);
    }

    #[test]
    fn plot_points_empty_signal_draws_nothing() {
        assert!(plot_points(&[], 10.0, 10.0).is_empty());
    }

    #[test]
    fn plot_points_scale_from_negative_extreme() {
        let points = plot_points(&[-3.0, 1.5], 20.0, 60.0);
        assert_eq!(points[0].y, 60.0);
        assert_eq!(points[1].y, 15.0);
    }

    #[test]
    fn signal_model_accepts_bridge_json() {
        let body = r#"{"payload":{"label":"demo","samples":[0.0,1.0],"figure":{"width_in":20.0,"height_in":6.0,"dpi":80}},"sample_count":2,"rms":0.7,"peak":1.0,"notes":["rms 0.7000"]}"#;
        let model: SignalModel = serde_json::from_str(body).unwrap();
        assert_eq!(model.payload.label, "demo");
        assert_eq!(model.sample_count, 2);
        assert_eq!(model.notes.len(), 1);
    }
}
