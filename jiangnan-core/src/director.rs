use jiangnan_ui::{Color, UiRenderer};

use crate::clock::Clock;
use crate::event::InputEvent;
use crate::runtime::{AssetResolver, SceneCtx, Stage};
use crate::scene::{RequestId, Scene, SceneRequest, Transition};

/// Builds scenes from request descriptors.
pub trait SceneFactory {
    fn build(&mut self, request: SceneRequest, ctx: &mut SceneCtx) -> Box<dyn Scene>;
}

enum DirectorState {
    Idle,
    Active(Box<dyn Scene>),
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Running,
    /// A new scene became active this frame
    Swapped,
    Terminated,
}

/// Owns the single active scene and performs every swap.
///
/// The director never looks at which scene is active: it only reacts to the
/// request the scene leaves in its transition slot.
pub struct Director<F> {
    state: DirectorState,
    factory: F,
    stage: Stage,
    last_request: Option<RequestId>,
    swaps: usize,
}

impl<F: SceneFactory> Director<F> {
    pub fn new(factory: F, stage: Stage) -> Self {
        Self {
            state: DirectorState::Idle,
            factory,
            stage,
            last_request: None,
            swaps: 0,
        }
    }

    /// Builds the first scene. Ignored unless the director is idle.
    pub fn start(&mut self, first: SceneRequest, clock: &dyn Clock, assets: &mut dyn AssetResolver) {
        if !matches!(self.state, DirectorState::Idle) {
            log::warn!("Director already started, ignoring start({:?})", first);
            return;
        }
        let cooldown = self.stage.config.timing.swap_cooldown();
        let mut ctx = SceneCtx::new(&mut self.stage, clock, assets);
        let mut scene = self.factory.build(first, &mut ctx);
        scene.click_gate().arm_cooldown(clock.now() + cooldown);
        log::info!("Starting with scene {}", scene.name());
        self.state = DirectorState::Active(scene);
    }

    /// Runs input and tick on the active scene, then applies its request.
    pub fn update(
        &mut self,
        events: &[InputEvent],
        clock: &dyn Clock,
        assets: &mut dyn AssetResolver,
    ) -> FrameStatus {
        let Director { state, factory, stage, last_request, swaps } = self;

        let scene = match &mut *state {
            DirectorState::Active(scene) => scene,
            DirectorState::Terminated => return FrameStatus::Terminated,
            DirectorState::Idle => {
                log::warn!("Director updated before start");
                return FrameStatus::Running;
            }
        };

        if events.iter().any(|e| matches!(e, InputEvent::Quit)) {
            log::info!("Quit requested by input");
            Self::terminate_state(state);
            return FrameStatus::Terminated;
        }

        let cooldown = stage.config.timing.swap_cooldown();
        let mut ctx = SceneCtx::new(stage, clock, assets);

        scene.handle_input(events, &mut ctx);
        scene.tick(&mut ctx);

        let pending = scene
            .pending_transition()
            .filter(|p| Some(p.id) != *last_request)
            .cloned();

        let Some(pending) = pending else {
            return FrameStatus::Running;
        };

        match pending.transition {
            Transition::Quit => {
                log::info!("Scene {} requested quit", scene.name());
                *last_request = Some(pending.id);
                Self::terminate_state(state);
                FrameStatus::Terminated
            }
            Transition::Goto(request) => {
                let outgoing = scene.name();
                scene.release();
                // the outgoing scene is gone before its successor is built
                *state = DirectorState::Idle;

                let mut next = factory.build(request, &mut ctx);
                next.click_gate().arm_cooldown(ctx.now() + cooldown);
                log::info!("Scene switched: {} -> {}", outgoing, next.name());

                *last_request = Some(pending.id);
                *swaps += 1;
                *state = DirectorState::Active(next);
                FrameStatus::Swapped
            }
        }
    }

    pub fn render(&self, ui: &mut dyn UiRenderer) {
        if let DirectorState::Active(scene) = &self.state {
            scene.render(ui);
        }
    }

    /// Draws the frame that follows `update`. A swap frame is plain white;
    /// the new scene draws from the next frame on.
    pub fn render_frame(&self, status: FrameStatus, ui: &mut dyn UiRenderer) {
        match status {
            FrameStatus::Swapped => ui.clear(Color::WHITE),
            FrameStatus::Running => self.render(ui),
            FrameStatus::Terminated => {}
        }
    }

    /// Releases the active scene and stops. Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        Self::terminate_state(&mut self.state);
    }

    fn terminate_state(state: &mut DirectorState) {
        if let DirectorState::Active(scene) = state {
            scene.release();
            log::info!("Released final scene {}", scene.name());
        }
        *state = DirectorState::Terminated;
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, DirectorState::Terminated)
    }

    pub fn active_scene(&self) -> Option<&'static str> {
        match &self.state {
            DirectorState::Active(scene) => Some(scene.name()),
            _ => None,
        }
    }

    pub fn swap_count(&self) -> usize {
        self.swaps
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }
}
