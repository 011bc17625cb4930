/// Identity of one transition request, unique for the life of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

#[derive(Debug, Default)]
pub struct RequestIds(u64);

impl RequestIds {
    pub fn next(&mut self) -> RequestId {
        self.0 += 1;
        RequestId(self.0)
    }
}

/// Descriptor of the scene to build next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    Title,
    Quiz,
    /// 1-based page number
    Introduction(usize),
    Puzzle,
    Video,
    Thanks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Goto(SceneRequest),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransition {
    pub id: RequestId,
    pub transition: Transition,
}

/// Holds at most one request. The first request wins; later ones are refused.
#[derive(Debug, Default)]
pub struct TransitionSlot {
    pending: Option<PendingTransition>,
}

impl TransitionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.pending.is_some()
    }

    pub fn get(&self) -> Option<&PendingTransition> {
        self.pending.as_ref()
    }

    pub fn set(&mut self, id: RequestId, transition: Transition) -> bool {
        if let Some(existing) = &self.pending {
            if existing.transition != transition {
                log::warn!(
                    "Second transition {:?} refused, {:?} already pending",
                    transition, existing.transition
                );
            }
            return false;
        }
        self.pending = Some(PendingTransition { id, transition });
        true
    }
}
