pub mod content;
mod intro;
mod puzzle;
mod quiz;
mod thanks;
mod title;
mod video;

pub use intro::IntroScene;
pub use puzzle::{DropOutcome, Piece, PuzzleBoard, PuzzleScene, BOARD};
pub use quiz::{option_rect, QuizScene};
pub use thanks::ThanksScene;
pub use title::TitleScene;
pub use video::{StreamCursor, VideoScene, PROGRESS_BAR, SKIP_AREA};

use rand::seq::IndexedRandom;

use crate::clock::Timestamp;
use crate::director::SceneFactory;
use crate::runtime::{SceneCtx, Texture};
use crate::scene::{Scene, SceneRequest};
use content::{GALLERY_DIR, GUIDE_IMAGE, INTRO_PAGES, QUESTIONS};

/// The closed set of scenes making up the presentation.
#[derive(Debug, Default)]
pub struct SceneCatalog;

impl SceneFactory for SceneCatalog {
    fn build(&mut self, request: SceneRequest, ctx: &mut SceneCtx) -> Box<dyn Scene> {
        match request {
            SceneRequest::Title => Box::new(TitleScene::new(ctx)),
            SceneRequest::Quiz => Box::new(QuizScene::new(ctx)),
            SceneRequest::Introduction(page) => {
                match page.checked_sub(1).and_then(|i| INTRO_PAGES.get(i)) {
                    Some(content) => Box::new(IntroScene::new(page, content, ctx)),
                    None => {
                        log::warn!("No introduction page {}, going to the puzzle", page);
                        Box::new(PuzzleScene::new(ctx))
                    }
                }
            }
            SceneRequest::Puzzle => Box::new(PuzzleScene::new(ctx)),
            SceneRequest::Video => Box::new(VideoScene::new(ctx)),
            SceneRequest::Thanks => Box::new(ThanksScene::new(ctx)),
        }
    }
}

/// Where the quiz goes once the progress counter reached `answered`.
pub fn after_answer(answered: usize) -> SceneRequest {
    if (1..=INTRO_PAGES.len()).contains(&answered) {
        SceneRequest::Introduction(answered)
    } else {
        SceneRequest::Puzzle
    }
}

/// Where introduction page `page` leads.
pub fn after_intro(page: usize) -> SceneRequest {
    if page < QUESTIONS.len() {
        SceneRequest::Quiz
    } else {
        SceneRequest::Puzzle
    }
}

/// Pulsing alpha in 1..=255 with a period of about 3 s.
pub(crate) fn pulse_alpha(now: Timestamp) -> u8 {
    let phase = now.as_millis() as f64 / 500.0;
    (128.0 + 127.0 * phase.sin()).round().clamp(0.0, 255.0) as u8
}

/// Loads a decorative image; a missing one is logged and skipped.
pub(crate) fn load_optional(ctx: &mut SceneCtx, key: &str) -> Option<Texture> {
    match ctx.assets.load_image(key) {
        Ok(texture) => Some(texture),
        Err(e) => {
            log::warn!("Decoration unavailable: {}", e);
            None
        }
    }
}

/// Everything in the gallery except the guide portrait itself.
fn is_background(key: &str) -> bool {
    key.rsplit('/').next() != Some(GUIDE_IMAGE)
}

/// Random gallery picture, skipping the guide portrait.
pub(crate) fn random_background(ctx: &mut SceneCtx) -> Option<Texture> {
    let keys: Vec<String> = ctx
        .assets
        .list_images(GALLERY_DIR)
        .into_iter()
        .filter(|key| is_background(key))
        .collect();
    let key = keys.choose(&mut *ctx.rng)?;
    load_optional(ctx, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_guide_itself_is_left_out() {
        assert!(!is_background("image/guide.png"));
        assert!(!is_background("guide.png"));
        assert!(is_background("image/myguide.png"));
        assert!(is_background("image/a.jpg"));
    }

    #[test]
    fn answers_walk_the_pages_then_the_puzzle() {
        assert_eq!(after_answer(1), SceneRequest::Introduction(1));
        assert_eq!(after_answer(3), SceneRequest::Introduction(3));
        assert_eq!(after_answer(4), SceneRequest::Puzzle);
        assert_eq!(after_intro(1), SceneRequest::Quiz);
        assert_eq!(after_intro(2), SceneRequest::Quiz);
        assert_eq!(after_intro(3), SceneRequest::Puzzle);
    }

    #[test]
    fn pulse_stays_in_range() {
        for ms in (0..4000).step_by(37) {
            assert!(pulse_alpha(Timestamp::from_millis(ms)) >= 1);
        }
        assert_eq!(pulse_alpha(Timestamp::ZERO), 128);
    }
}
