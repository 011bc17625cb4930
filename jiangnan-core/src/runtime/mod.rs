pub mod assets;
pub mod ctx;

pub use assets::{AssetError, AssetResolver, MediaStream, Texture, TextureStore};
pub use ctx::{Progress, SceneCtx, Stage};
