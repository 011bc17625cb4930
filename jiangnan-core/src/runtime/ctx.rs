use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::clock::{Clock, Timestamp};
use crate::config::CoreConfig;
use crate::runtime::AssetResolver;
use crate::scene::{RequestIds, Transition, TransitionSlot};

/// Index of the current quiz question. Survives scene swaps and only grows.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Progress {
    question: usize,
}

impl Progress {
    pub fn current(&self) -> usize {
        self.question
    }

    /// Moves to the next question and returns the new index.
    pub fn advance(&mut self) -> usize {
        self.question += 1;
        self.question
    }
}

/// State owned by the director on behalf of all scenes.
pub struct Stage {
    pub config: CoreConfig,
    pub progress: Progress,
    pub rng: StdRng,
    pub(crate) ids: RequestIds,
}

impl Stage {
    pub fn new(config: CoreConfig) -> Self {
        let rng = match config.presentation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            progress: Progress::default(),
            rng,
            ids: RequestIds::default(),
        }
    }
}

/// Services lent to a scene for the duration of one callback.
pub struct SceneCtx<'a> {
    pub clock: &'a dyn Clock,
    pub assets: &'a mut dyn AssetResolver,
    pub config: &'a CoreConfig,
    pub progress: &'a mut Progress,
    pub rng: &'a mut StdRng,
    pub(crate) ids: &'a mut RequestIds,
}

impl<'a> SceneCtx<'a> {
    pub fn new(stage: &'a mut Stage, clock: &'a dyn Clock, assets: &'a mut dyn AssetResolver) -> Self {
        let Stage { config, progress, rng, ids } = stage;
        Self { clock, assets, config, progress, rng, ids }
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Stamps `transition` with a fresh request id and stores it in `slot`.
    /// Returns false when the slot already holds a request.
    pub fn request(&mut self, slot: &mut TransitionSlot, transition: Transition) -> bool {
        if slot.is_set() {
            log::warn!("Ignoring transition {:?}: a request is already pending", transition);
            return false;
        }
        let id = self.ids.next();
        slot.set(id, transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_only_grows() {
        let mut p = Progress::default();
        assert_eq!(p.current(), 0);
        assert_eq!(p.advance(), 1);
        assert_eq!(p.advance(), 2);
        assert_eq!(p.current(), 2);
    }
}
