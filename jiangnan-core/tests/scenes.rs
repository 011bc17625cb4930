mod common;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use jiangnan_core::scenes::content::{PUZZLE_IMAGE, THANKS_TITLE, TITLE};
    use jiangnan_core::scenes::{
        option_rect, DropOutcome, Piece, PuzzleBoard, PuzzleScene, QuizScene, TitleScene, BOARD,
        PROGRESS_BAR, SKIP_AREA,
    };
    use jiangnan_core::{
        Director, FrameStatus, InputEvent, ManualClock, PointerButton, Scene, SceneCatalog, SceneCtx,
        SceneRequest, Stage, Transition,
    };
    use jiangnan_ui::Rect;

    use super::common::{stage, FakeAssets, RecordingUi};

    struct Run {
        director: Director<SceneCatalog>,
        clock: ManualClock,
        assets: FakeAssets,
    }

    impl Run {
        fn new(first: SceneRequest, assets: FakeAssets) -> Self {
            Self::with_stage(first, assets, stage())
        }

        fn with_stage(first: SceneRequest, mut assets: FakeAssets, stage: Stage) -> Self {
            let clock = ManualClock::new(60);
            let mut director = Director::new(SceneCatalog, stage);
            director.start(first, &clock, &mut assets);
            Self { director, clock, assets }
        }

        fn frame(&mut self, events: &[InputEvent]) -> FrameStatus {
            self.clock.step();
            self.director.update(events, &self.clock, &mut self.assets)
        }

        fn idle(&mut self, frames: usize) {
            for _ in 0..frames {
                self.frame(&[]);
            }
        }

        /// Clicks well outside the debounce and cooldown windows.
        fn click(&mut self, pos: (f32, f32)) -> FrameStatus {
            self.clock.advance(Duration::from_millis(300));
            self.frame(&[InputEvent::PointerDown { button: PointerButton::Left, pos }])
        }

        fn active(&self) -> Option<&'static str> {
            self.director.active_scene()
        }

        fn progress(&self) -> usize {
            self.director.stage().progress.current()
        }
    }

    fn center(rect: Rect) -> (f32, f32) {
        rect.center_point()
    }

    #[test]
    fn title_click_opens_the_quiz() {
        let mut run = Run::new(SceneRequest::Title, FakeAssets::new());
        let mut ui = RecordingUi::default();
        run.director.render(&mut ui);
        assert!(ui.texts().contains(&TITLE));

        assert_eq!(run.click((10.0, 10.0)), FrameStatus::Swapped);
        assert_eq!(run.active(), Some("Quiz"));
    }

    #[test]
    fn swap_frame_is_plain_white() {
        let mut run = Run::new(SceneRequest::Title, FakeAssets::new());

        let status = run.click((10.0, 10.0));
        assert_eq!(status, FrameStatus::Swapped);
        let mut ui = RecordingUi::default();
        run.director.render_frame(status, &mut ui);
        assert_eq!(ui.calls, vec!["clear:255,255,255".to_string()]);

        let status = run.frame(&[]);
        assert_eq!(status, FrameStatus::Running);
        let mut ui = RecordingUi::default();
        run.director.render_frame(status, &mut ui);
        assert!(ui.calls.len() > 1);
        assert!(!ui.texts().is_empty());
    }

    #[test]
    fn title_hint_blinks_every_half_second() {
        let mut stage = stage();
        let clock = ManualClock::new(60);
        let mut assets = FakeAssets::new();
        let mut ctx = SceneCtx::new(&mut stage, &clock, &mut assets);
        let mut title = TitleScene::new(&mut ctx);

        for _ in 0..29 {
            title.tick(&mut ctx);
        }
        assert!(title.hint_visible());
        title.tick(&mut ctx);
        assert!(!title.hint_visible());
    }

    #[test]
    fn quiz_and_pages_alternate_until_the_puzzle() {
        let mut run = Run::new(SceneRequest::Quiz, FakeAssets::new());
        let option = center(option_rect(0));

        for page in 1..=3 {
            assert_eq!(run.active(), Some("Quiz"));
            assert_eq!(run.progress(), page - 1);

            // picking an answer does not move the counter
            assert_eq!(run.click(option), FrameStatus::Running);
            assert_eq!(run.progress(), page - 1);

            assert_eq!(run.click((10.0, 10.0)), FrameStatus::Swapped);
            assert_eq!(run.active(), Some("Introduction"));
            assert_eq!(run.progress(), page);

            // clicks during the slide-in are ignored
            assert_eq!(run.click((10.0, 10.0)), FrameStatus::Running);
            run.idle(40);
            assert_eq!(run.click((10.0, 10.0)), FrameStatus::Swapped);
        }

        assert_eq!(run.active(), Some("Puzzle"));
        assert_eq!(run.progress(), 3);
    }

    #[test]
    fn quiz_click_outside_options_selects_nothing() {
        let mut stage = stage();
        let clock = ManualClock::new(60);
        clock.set(1_000);
        let mut assets = FakeAssets::new();
        let mut ctx = SceneCtx::new(&mut stage, &clock, &mut assets);
        let mut quiz = QuizScene::new(&mut ctx);

        let miss = InputEvent::PointerDown { button: PointerButton::Left, pos: (10.0, 10.0) };
        quiz.handle_input(&[miss], &mut ctx);
        assert_eq!(quiz.selected(), None);
        assert!(quiz.pending_transition().is_none());
        assert_eq!(ctx.progress.current(), 0);
    }

    #[test]
    fn quiz_past_the_last_question_goes_to_the_puzzle() {
        let mut stage = stage();
        for _ in 0..3 {
            stage.progress.advance();
        }
        let mut run = Run::with_stage(SceneRequest::Quiz, FakeAssets::new(), stage);

        assert_eq!(run.frame(&[]), FrameStatus::Swapped);
        assert_eq!(run.active(), Some("Puzzle"));
        assert_eq!(run.progress(), 3);
    }

    fn solved_board(offsets: &[(usize, f32, f32)]) -> PuzzleBoard {
        let pieces = (0..9)
            .map(|i| {
                let target = Rect::new(
                    BOARD.x + (i % 3) as f32 * 100.0,
                    BOARD.y + (i / 3) as f32 * 100.0,
                    100.0,
                    100.0,
                );
                let (dx, dy) = offsets
                    .iter()
                    .find(|(j, _, _)| *j == i)
                    .map(|&(_, dx, dy)| (dx, dy))
                    .unwrap_or((0.0, 0.0));
                Piece::new(i, target.with_pos(target.x + dx, target.y + dy), target)
            })
            .collect();
        PuzzleBoard::from_pieces(pieces)
    }

    #[test]
    fn completion_tolerates_five_pixels() {
        let offsets: Vec<(usize, f32, f32)> = (0..9).map(|i| (i, 5.0, -5.0)).collect();
        let mut board = solved_board(&offsets);
        assert!(board.check_completion());
        assert!(board.is_completed());

        let mut board = solved_board(&[(4, 5.5, 0.0)]);
        assert!(!board.check_completion());
        assert!(!board.pieces()[4].correct);
        assert!(board.pieces()[3].correct);
    }

    #[test]
    fn drop_near_target_snaps_and_completes() {
        let mut board = solved_board(&[(2, -300.0, 200.0)]);
        assert!(!board.check_completion());

        let grabbed = board.pieces()[2].rect.center_point();
        assert!(board.pointer_down(grabbed));
        assert_eq!(board.pieces().last().map(|p| p.index), Some(2));

        // 30px short of the target centre
        let (tx, ty) = board.pieces().last().map(|p| p.target.center_point()).unwrap();
        board.pointer_move((tx - 30.0, ty));
        assert_eq!(board.pointer_up(), DropOutcome::Completed);
        assert_eq!(board.pieces().last().map(|p| p.rect), board.pieces().last().map(|p| p.target));
    }

    #[test]
    fn far_drop_stays_where_it_lands() {
        let mut board = solved_board(&[]);
        let start = board.pieces()[0].rect.center_point();
        assert!(board.pointer_down(start));
        board.pointer_move((start.0 + 60.0, start.1));
        assert_eq!(board.pointer_up(), DropOutcome::Missed);

        let piece = board.pieces().last().unwrap();
        assert_eq!(piece.rect.x, piece.target.x + 60.0);
        assert!(!piece.correct);
        assert_eq!(board.pointer_up(), DropOutcome::Nothing);
        assert!(!board.pointer_down((10.0, 10.0)));
    }

    #[test]
    fn topmost_piece_is_picked() {
        let target = Rect::new(450.0, 150.0, 100.0, 100.0);
        let spot = Rect::new(100.0, 100.0, 100.0, 100.0);
        let mut board = PuzzleBoard::from_pieces(vec![
            Piece::new(0, spot, target),
            Piece::new(1, spot, target),
        ]);
        assert!(board.pointer_down((150.0, 150.0)));
        assert_eq!(board.pieces().last().map(|p| p.index), Some(1));
        board.pointer_move((400.0, 400.0));
        assert_eq!(board.pointer_up(), DropOutcome::Missed);

        // piece 0 is uncovered now and gets raised
        assert!(board.pointer_down((150.0, 150.0)));
        assert_eq!(board.pieces().last().map(|p| p.index), Some(0));
    }

    #[test]
    fn finished_puzzle_leads_to_the_video() {
        let mut stage = stage();
        let clock = ManualClock::new(60);
        clock.set(1_000);
        let mut assets = FakeAssets::new();
        let mut ctx = SceneCtx::new(&mut stage, &clock, &mut assets);
        let mut puzzle = PuzzleScene::new(&mut ctx);

        let board = puzzle.board_mut().unwrap();
        for i in 1..9 {
            let piece = board.piece_mut(i).unwrap();
            piece.rect = piece.target;
        }
        let parked = board.piece_mut(0).unwrap();
        parked.rect = parked.rect.with_pos(100.0, 480.0);
        let target = parked.target.center_point();

        let left = PointerButton::Left;
        puzzle.handle_input(
            &[
                InputEvent::PointerDown { button: left, pos: (150.0, 530.0) },
                InputEvent::PointerMove { pos: (target.0 + 10.0, target.1 + 10.0) },
                InputEvent::PointerUp { button: left, pos: (target.0 + 10.0, target.1 + 10.0) },
            ],
            &mut ctx,
        );
        assert!(puzzle.message_visible());
        assert!(puzzle.board().unwrap().is_completed());

        // not clickable until the message is fully shown
        let click = InputEvent::PointerDown { button: left, pos: (400.0, 500.0) };
        puzzle.handle_input(&[click], &mut ctx);
        assert!(puzzle.pending_transition().is_none());

        for _ in 0..51 {
            puzzle.tick(&mut ctx);
        }
        puzzle.handle_input(&[click], &mut ctx);
        assert_eq!(
            puzzle.pending_transition().map(|p| p.transition),
            Some(Transition::Goto(SceneRequest::Video))
        );

        puzzle.release();
        drop(ctx);
        assert_eq!(assets.live(), 0);
    }

    #[test]
    fn puzzle_without_its_image_ends_the_show() {
        let mut run = Run::new(SceneRequest::Puzzle, FakeAssets::new().without(PUZZLE_IMAGE));
        assert_eq!(run.frame(&[]), FrameStatus::Swapped);
        assert_eq!(run.active(), Some("Thanks"));
    }

    #[test]
    fn missing_video_falls_through_to_thanks() {
        let mut run = Run::new(SceneRequest::Video, FakeAssets::new().without_stream());

        let mut ui = RecordingUi::default();
        run.director.render(&mut ui);
        assert_eq!(ui.calls, vec!["clear:0,0,0"]);

        assert_eq!(run.frame(&[]), FrameStatus::Swapped);
        assert_eq!(run.active(), Some("Thanks"));
    }

    #[test]
    fn video_plays_to_the_end() {
        // 48 frames at 24 fps
        let mut run = Run::new(SceneRequest::Video, FakeAssets::new());
        run.clock.advance(Duration::from_millis(1_000));
        assert_eq!(run.frame(&[]), FrameStatus::Running);
        assert!(run.assets.live() >= 1);

        let mut ui = RecordingUi::default();
        run.director.render(&mut ui);
        assert_eq!(ui.images(), 1);

        run.clock.advance(Duration::from_millis(1_100));
        assert_eq!(run.frame(&[]), FrameStatus::Swapped);
        assert_eq!(run.active(), Some("Thanks"));
        assert_eq!(run.assets.live(), 0);
    }

    #[test]
    fn video_skip_area() {
        let mut run = Run::new(SceneRequest::Video, FakeAssets::new());
        assert_eq!(run.click(center(SKIP_AREA)), FrameStatus::Swapped);
        assert_eq!(run.active(), Some("Thanks"));
    }

    #[test]
    fn seeking_reopens_the_stream() {
        let mut run = Run::new(SceneRequest::Video, FakeAssets::new());
        let (_, bar_y) = center(PROGRESS_BAR);

        assert_eq!(run.click((400.0, bar_y + 4.0)), FrameStatus::Running);
        assert_eq!(run.assets.opened.len(), 2);
        assert_eq!(run.assets.opened[1].1.as_millis(), 1_000);

        // a failed reopen keeps playing the current stream
        run.assets.stream = None;
        assert_eq!(run.click((600.0, bar_y)), FrameStatus::Running);
        assert_eq!(run.assets.opened.len(), 3);
        assert_eq!(run.active(), Some("Video"));

        // off the bar vertically
        run.assets.stream = Some((24.0, 48));
        run.click((400.0, bar_y - 12.0));
        assert_eq!(run.assets.opened.len(), 3);
    }

    #[test]
    fn thanks_quits_once_fully_shown() {
        let mut run = Run::new(SceneRequest::Thanks, FakeAssets::new());
        assert_eq!(run.click((400.0, 300.0)), FrameStatus::Running);

        run.idle(90);
        let mut ui = RecordingUi::default();
        run.director.render(&mut ui);
        assert!(ui.texts().contains(&THANKS_TITLE));

        assert_eq!(run.click((400.0, 300.0)), FrameStatus::Terminated);
        assert!(run.director.is_terminated());
    }

    #[test]
    fn scenes_drop_their_images_on_swap() {
        let mut run = Run::new(SceneRequest::Title, FakeAssets::new());
        assert!(run.assets.live() > 0);
        run.click((10.0, 10.0));
        assert_eq!(run.active(), Some("Quiz"));
        // background and guide only
        assert_eq!(run.assets.live(), 2);

        run.director.shutdown();
        assert_eq!(run.assets.live(), 0);
    }
}
