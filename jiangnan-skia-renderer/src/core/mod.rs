pub mod assets;
pub mod audio;
pub mod fonts;
pub mod painter;
pub mod video;

pub use assets::{AssetManager, TextureCache};
pub use audio::AudioPlayer;
pub use painter::Painter;
pub use video::FrameSequence;
