use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::{self, EventHandler, MouseButton};
use ggez::graphics::{self, Canvas, DrawMode, DrawParam, MeshBuilder};
use ggez::{Context, ContextBuilder, GameError, GameResult};
use tracing_subscriber::EnvFilter;

use triangle_figure::attributes::{StrokePlacement, FILL_COLOR, STROKE_PLACEMENT, STROKE_WIDTH};
use triangle_figure::color::Color;
use triangle_figure::figure::{Connector, Handle, HandleEdit};
use triangle_figure::rendering::MeshSurface;
use triangle_figure::{Figure, Orientation, Point, TriangleFigure};

const CELL: f32 = 200.;
const MARGIN: f32 = 40.;

fn to_game_error(e: triangle_figure::error::Error) -> GameError {
    GameError::CustomError(e.to_string())
}

struct Demo {
    figures: Vec<TriangleFigure>,
    selected: Option<usize>,
    // handle being dragged and the state before the drag started
    dragging: Option<(Handle, Option<HandleEdit>)>,
    edits: Vec<(usize, HandleEdit)>,
}

impl Demo {
    fn new() -> Self {
        let figures = Orientation::iter()
            .enumerate()
            .map(|(i, orientation)| {
                let x = (i % 4) as f32 * CELL + MARGIN;
                let y = (i / 4) as f32 * CELL + MARGIN;
                let mut figure = TriangleFigure::from_rect_oriented(
                    x,
                    y,
                    CELL - 2. * MARGIN,
                    CELL - 2. * MARGIN,
                    orientation,
                );
                let hue = i as f32 / 8.;
                figure
                    .attributes_mut()
                    .set(FILL_COLOR, Some(Color::new(hue, 0.6, 1. - hue, 1.)));
                figure.attributes_mut().set(STROKE_WIDTH, 4.);
                if i % 2 == 1 {
                    figure.attributes_mut().set(STROKE_PLACEMENT, StrokePlacement::Outside);
                }
                figure
            })
            .collect();

        Self {
            figures,
            selected: None,
            dragging: None,
            edits: vec![],
        }
    }

    fn handle_at(&self, p: Point) -> Option<Handle> {
        let figure = &self.figures[self.selected?];
        figure
            .create_handles(0)
            .into_iter()
            .find(|handle| handle.contains(figure, p))
    }
}

impl EventHandler for Demo {
    fn update(&mut self, _ctx: &mut Context) -> GameResult {
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, graphics::Color::from_rgb(30, 30, 36));

        let mut surface = MeshSurface::new(1.);
        for figure in &self.figures {
            figure.draw(&mut surface).map_err(to_game_error)?;
        }

        // connect neighbours, ending the lines on the outlines
        let mut builder = MeshBuilder::new();
        for pair in self.figures.windows(2) {
            let a = pair[0].find_connector(Point::default());
            let b = pair[1].find_connector(Point::default());
            let start = a.find_start(b.owner().bounds().center());
            let end = b.find_end(a.owner().bounds().center());
            builder.line(&[start, end], 2., graphics::Color::WHITE)?;
        }

        if let Some(figure) = self.selected.map(|i| &self.figures[i]) {
            let size = figure.prefs().handle_size;
            for handle in figure.create_handles(0) {
                let Point { x, y } = handle.location(figure);
                let rect = graphics::Rect::new(x - size / 2., y - size / 2., size, size);
                let color = match handle {
                    Handle::Resize(_) => graphics::Color::WHITE,
                    Handle::Orientation(_) => graphics::Color::YELLOW,
                };
                builder.rectangle(DrawMode::fill(), rect, color)?;
            }
        }

        if let Some(mesh) = surface.build(ctx) {
            canvas.draw(&mesh, DrawParam::default());
        }
        canvas.draw(&graphics::Mesh::from_data(ctx, builder.build()), DrawParam::default());
        canvas.finish(ctx)
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        x: f32,
        y: f32,
    ) -> GameResult {
        let p = Point { x, y };
        match button {
            MouseButton::Left => {
                if let Some(handle) = self.handle_at(p) {
                    self.dragging = Some((handle, None));
                    return Ok(());
                }
                self.selected = self.figures.iter().rposition(|figure| figure.contains(p, 1.));
            }
            MouseButton::Right => {
                if let Some((i, edit)) = self.edits.pop() {
                    Handle::undo(&mut self.figures[i], edit);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn mouse_button_up_event(
        &mut self,
        _ctx: &mut Context,
        _button: MouseButton,
        _x: f32,
        _y: f32,
    ) -> GameResult {
        if let (Some((_, Some(edit))), Some(i)) = (self.dragging.take(), self.selected) {
            self.edits.push((i, edit));
        }
        Ok(())
    }

    fn mouse_motion_event(
        &mut self,
        _ctx: &mut Context,
        x: f32,
        y: f32,
        _dx: f32,
        _dy: f32,
    ) -> GameResult {
        if let (Some((handle, before)), Some(i)) = (&mut self.dragging, self.selected) {
            let edit = handle.track(&mut self.figures[i], Point { x, y });
            before.get_or_insert(edit);
        }
        Ok(())
    }
}

fn main() -> GameResult {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let wm = WindowMode::default().dimensions(4. * CELL, 2. * CELL);
    let ws = WindowSetup::default().title("Triangle Figures");

    let (ctx, event_loop) = ContextBuilder::new("triangle_demo", "author")
        .window_mode(wm)
        .window_setup(ws)
        .build()?;

    event::run(ctx, event_loop, Demo::new())
}
