use double_slider::{
    double_slider, vertical_double_slider, RangeModel, SliderEvent, SliderStyle, Thumb,
};
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Task};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;

const LAYER_COUNT: i32 = 120;
const MOVE_COUNT: i32 = 40;
const LOG_ENV: &str = "DOUBLE_SLIDER_LOG";

pub fn main() -> iced::Result {
    let log_path = std::env::var(LOG_ENV).unwrap_or_else(|_| "double_slider.log".to_string());
    match File::create(&log_path) {
        Ok(log_file) => {
            if let Err(err) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("failed to install logger: {err}");
            }
        }
        Err(err) => eprintln!("failed to create log file {log_path}: {err}"),
    }

    iced::application(Demo::new, Demo::update, Demo::view)
        .title(Demo::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    Layers(SliderEvent),
    Moves(SliderEvent),
    ToggleCombine,
    Reset,
    /// Steps the selected layer thumb; positive goes down.
    Step(i32),
}

struct Demo {
    layers: RangeModel,
    moves: RangeModel,
    style: SliderStyle,
    status: String,
}

impl Demo {
    fn new() -> (Self, Task<Message>) {
        let style = match std::env::args().nth(1) {
            Some(path) => SliderStyle::load(&path).unwrap_or_else(|err| {
                log::error!("failed to load style from {path}: {err}");
                SliderStyle::default()
            }),
            None => SliderStyle::default(),
        };

        let demo = Self {
            layers: RangeModel::new(0, LAYER_COUNT, 0, LAYER_COUNT, true),
            moves: RangeModel::new(0, MOVE_COUNT, 0, MOVE_COUNT, false),
            style,
            status: String::new(),
        };
        (demo, Task::none())
    }

    fn title(&self) -> String {
        "Double slider".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Layers(event) => match event {
                SliderEvent::Changed { lower, higher, thumb } => {
                    self.layers.select(thumb);
                    self.layers.set_selection_span(lower, higher);
                    self.status = format!("layers {lower}..={higher}");
                }
                SliderEvent::ThumbClicked(thumb) => {
                    self.layers.select(thumb);
                    self.status = format!("clicked {thumb} layer thumb");
                }
                SliderEvent::ThumbRightClicked(thumb) => {
                    self.status = format!("right clicked {thumb} layer thumb");
                }
            },
            Message::Moves(event) => {
                if let SliderEvent::Changed { higher, .. } = event {
                    self.moves.set_higher(higher);
                    self.status = format!("move {higher}");
                }
            }
            Message::ToggleCombine => {
                let combine = !self.layers.is_combined();
                self.layers.combine_thumbs(combine);
                self.status = format!("combine thumbs: {combine}");
            }
            Message::Reset => {
                self.layers.reset_positions();
                self.moves.reset_positions();
                self.status = "reset".to_string();
            }
            Message::Step(delta) => {
                self.layers.move_active_by(delta);
                if let Some(position) = self.layers.active_position() {
                    let thumb = self.layers.selection().unwrap_or(Thumb::Higher);
                    self.status = format!("{thumb} layer at {position}");
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let layers = vertical_double_slider(
            "layers",
            self.layers.min()..=self.layers.max(),
            self.layers.lower(),
            self.layers.higher(),
            Message::Layers,
        )
        .combine_thumbs(self.layers.is_combined())
        .style(self.style);

        let moves = double_slider(
            "moves",
            self.moves.min()..=self.moves.max(),
            self.moves.lower(),
            self.moves.higher(),
            Message::Moves,
        )
        .single_thumb()
        .style(self.style)
        .label(|value| format!("#{value}"));

        let combine_label = if self.layers.is_combined() {
            "Split"
        } else {
            "Combine"
        };
        let controls = column![
            button(combine_label).on_press(Message::ToggleCombine),
            button("Reset").on_press(Message::Reset),
            button("Up").on_press(Message::Step(-1)),
            button("Down").on_press(Message::Step(1)),
            text(self.status.as_str()).size(12),
        ]
        .spacing(8)
        .align_x(Alignment::Start);

        let content = column![
            row![container(controls).width(Length::Fill), layers].height(Length::Fill),
            moves,
        ]
        .spacing(8)
        .padding(8);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
