pub mod gate;
pub mod transition;

pub use gate::ClickGate;
pub use transition::{PendingTransition, RequestId, RequestIds, SceneRequest, Transition, TransitionSlot};

use jiangnan_ui::UiRenderer;
use crate::event::InputEvent;
use crate::runtime::SceneCtx;

/// One screen of the presentation.
///
/// The director calls `handle_input`, then `tick`, then `render`, once per
/// frame, and only on the active scene.
pub trait Scene {
    fn name(&self) -> &'static str;

    /// Consumes this frame's events. May fill the transition slot.
    fn handle_input(&mut self, events: &[InputEvent], ctx: &mut SceneCtx);

    /// Advances animation by one frame.
    fn tick(&mut self, ctx: &mut SceneCtx);

    fn render(&self, ui: &mut dyn UiRenderer);

    /// Drops every heavyweight resource. Must be idempotent.
    fn release(&mut self);

    fn pending_transition(&self) -> Option<&PendingTransition>;

    fn click_gate(&mut self) -> &mut ClickGate;
}
