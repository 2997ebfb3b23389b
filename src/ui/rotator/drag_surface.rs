// SPDX-License-Identifier: MPL-2.0
//! Transparent hit area laid over the frame stack.
//!
//! The surface only detects the press. Once a drag session exists, pointer
//! motion and release are tracked window-wide by the rotator subscription, so
//! the press reports the pointer in window coordinates to match.

use crate::ui::state::Pointer;
use iced::widget::canvas::{self, Canvas, Geometry};
use iced::widget::Action;
use iced::{mouse, touch, Element, Event, Length, Rectangle, Renderer, Theme};

/// Press reported by the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Press {
    /// Pointer X in window coordinates.
    pub client_x: f32,
    /// Width of the surface at press time.
    pub container_width: f32,
    /// Mouse or the finger that touched down.
    pub pointer: Pointer,
}

/// Canvas program publishing presses inside its bounds.
pub struct DragSurface<Message> {
    enabled: bool,
    dragging: bool,
    on_press: fn(Press) -> Message,
}

impl<Message> DragSurface<Message> {
    /// Creates a surface. A disabled surface ignores input and shows the
    /// default cursor.
    pub fn new(enabled: bool, dragging: bool, on_press: fn(Press) -> Message) -> Self {
        Self {
            enabled,
            dragging,
            on_press,
        }
    }

    fn press_at(&self, pointer: Pointer, x: f32, bounds: Rectangle) -> Option<Action<Message>> {
        Some(
            Action::publish((self.on_press)(Press {
                client_x: x,
                container_width: bounds.width,
                pointer,
            }))
            .and_capture(),
        )
    }
}

impl<Message: 'static> DragSurface<Message> {
    pub fn into_element(self) -> Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for DragSurface<Message> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        if !self.enabled {
            return None;
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor.position_in(bounds)?;
                let position = cursor.position()?;
                self.press_at(Pointer::Mouse, position.x, bounds)
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if bounds.contains(*position) {
                    self.press_at(Pointer::Touch(*id), position.x, bounds)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        _renderer: &Renderer,
        _theme: &Theme,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        Vec::new()
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if !self.enabled {
            mouse::Interaction::default()
        } else if self.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
