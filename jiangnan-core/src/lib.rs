pub mod clock;
pub mod config;
pub mod director;
pub mod event;
pub mod runtime;
pub mod scene;
pub mod scenes;

pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use director::{Director, FrameStatus, SceneFactory};
pub use event::{InputEvent, PointerButton};
pub use runtime::{AssetError, AssetResolver, MediaStream, Progress, SceneCtx, Stage, Texture};
pub use scene::{ClickGate, Scene, SceneRequest, Transition};
pub use scenes::SceneCatalog;
