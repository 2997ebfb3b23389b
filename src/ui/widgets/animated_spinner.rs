// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown while a frame set is preloading.
//!
//! The widget is stateless: the rotation angle is advanced by the loading
//! sub-component on every spinner tick and passed in at view time.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

const STROKE_WIDTH: f32 = 3.0;
const TRACK_ALPHA: f32 = 0.25;
const ARC_SEGMENTS: u16 = 30;

/// Half-circle arc spinning around a faint track.
pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner with the given color at `rotation` radians.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    /// Overrides the square side length.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Points of the visible half-circle, starting at the top when `rotation` is 0.
fn arc_points(center: Point, radius: f32, rotation: f32) -> Vec<Point> {
    let start = rotation - PI / 2.0;
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let angle = start + PI * f32::from(i) / f32::from(ARC_SEGMENTS);
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
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
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH - 1.0;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                a: TRACK_ALPHA,
                ..self.color
            }),
        );

        let arc = Path::new(|builder| {
            let mut points = arc_points(center, radius, self.rotation).into_iter();
            if let Some(first) = points.next() {
                builder.move_to(first);
            }
            for point in points {
                builder.line_to(point);
            }
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn arc_starts_at_top_and_ends_at_bottom() {
        let points = arc_points(Point::new(10.0, 10.0), 5.0, 0.0);
        assert_eq!(points.len(), usize::from(ARC_SEGMENTS) + 1);
        assert!(close(points[0], Point::new(10.0, 5.0)));
        assert!(close(points[points.len() - 1], Point::new(10.0, 15.0)));
    }

    #[test]
    fn rotation_moves_the_arc() {
        let points = arc_points(Point::ORIGIN, 1.0, PI / 2.0);
        assert!(close(points[0], Point::new(1.0, 0.0)));
    }

    #[test]
    fn default_size_is_icon_xl() {
        let spinner = AnimatedSpinner::new(Color::WHITE, 0.0);
        assert_eq!(spinner.size, sizing::ICON_XL);
        assert_eq!(spinner.size(12.0).size, 12.0);
    }
}
