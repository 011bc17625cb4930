use rand::Rng;
use rand::seq::SliceRandom;
use jiangnan_ui::widgets::{Label, Panel};
use jiangnan_ui::{Alignment, Color, Rect, UiRenderer};

use crate::event::{InputEvent, PointerButton};
use crate::runtime::{SceneCtx, Texture};
use crate::scene::{ClickGate, PendingTransition, Scene, SceneRequest, Transition, TransitionSlot};
use super::content::{CONTINUE_HINT, PUZZLE_DONE, PUZZLE_IMAGE, PUZZLE_INSTRUCTION, PUZZLE_TITLE};

pub const GRID: usize = 3;
pub const CELL: f32 = 100.0;
pub const BOARD: Rect = Rect::new(450.0, 150.0, 300.0, 300.0);
const REFERENCE: Rect = Rect::new(50.0, 150.0, 300.0, 300.0);
/// Max per-axis offset from the target that still counts as placed
pub const TOLERANCE: f32 = 5.0;
/// Centre distance under which a dropped piece snaps onto its target
pub const SNAP_DISTANCE: f32 = 50.0;
const FADE_SPEED: u8 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub index: usize,
    pub rect: Rect,
    pub target: Rect,
    pub correct: bool,
}

impl Piece {
    pub fn new(index: usize, rect: Rect, target: Rect) -> Self {
        Self { index, rect, target, correct: false }
    }

    pub fn within_tolerance(&self) -> bool {
        (self.rect.x - self.target.x).abs() <= TOLERANCE
            && (self.rect.y - self.target.y).abs() <= TOLERANCE
    }

    /// Region of the source image this piece shows.
    pub fn source(&self, image_size: (u32, u32)) -> Rect {
        let w = image_size.0 as f32 / GRID as f32;
        let h = image_size.1 as f32 / GRID as f32;
        let col = (self.index % GRID) as f32;
        let row = (self.index / GRID) as f32;
        Rect::new(col * w, row * h, w, h)
    }
}

fn cell_rect(cell: usize) -> Rect {
    Rect::new(
        BOARD.x + (cell % GRID) as f32 * CELL,
        BOARD.y + (cell / GRID) as f32 * CELL,
        CELL,
        CELL,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing was being dragged
    Nothing,
    Missed,
    Snapped,
    Completed,
}

/// Jigsaw model. Draw order is vector order, so the last piece is on top and
/// the dragged piece is always the last one.
#[derive(Debug, Clone)]
pub struct PuzzleBoard {
    pieces: Vec<Piece>,
    drag_offset: Option<(f32, f32)>,
    completed: bool,
}

impl PuzzleBoard {
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cells: Vec<usize> = (0..GRID * GRID).collect();
        cells.shuffle(rng);

        let pieces = cells
            .into_iter()
            .enumerate()
            .map(|(index, cell)| Piece::new(index, cell_rect(cell), cell_rect(index)))
            .collect();
        Self::from_pieces(pieces)
    }

    pub fn from_pieces(pieces: Vec<Piece>) -> Self {
        Self { pieces, drag_offset: None, completed: false }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece_mut(&mut self, index: usize) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.index == index)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Picks up the topmost piece under `pos` and raises it.
    pub fn pointer_down(&mut self, (x, y): (f32, f32)) -> bool {
        let Some(pos) = self.pieces.iter().rposition(|p| p.rect.contains(x, y)) else {
            return false;
        };
        let piece = self.pieces.remove(pos);
        self.drag_offset = Some((piece.rect.x - x, piece.rect.y - y));
        self.pieces.push(piece);
        true
    }

    pub fn pointer_move(&mut self, (x, y): (f32, f32)) {
        let Some((ox, oy)) = self.drag_offset else { return };
        if let Some(piece) = self.pieces.last_mut() {
            piece.rect = piece.rect.with_pos(x + ox, y + oy);
        }
    }

    pub fn pointer_up(&mut self) -> DropOutcome {
        if self.drag_offset.take().is_none() {
            return DropOutcome::Nothing;
        }
        let Some(piece) = self.pieces.last_mut() else {
            return DropOutcome::Nothing;
        };

        let (cx, cy) = piece.rect.center_point();
        let (tx, ty) = piece.target.center_point();
        let distance = ((cx - tx).powi(2) + (cy - ty).powi(2)).sqrt();

        if distance < SNAP_DISTANCE {
            piece.rect = piece.target;
            piece.correct = true;
            log::debug!("Piece {} snapped into place", piece.index);
            if self.check_completion() {
                return DropOutcome::Completed;
            }
            DropOutcome::Snapped
        } else {
            piece.correct = false;
            log::debug!("Piece {} dropped {:.1}px from its target", piece.index, distance);
            DropOutcome::Missed
        }
    }

    /// Refreshes every piece's flag; true when all are within tolerance.
    pub fn check_completion(&mut self) -> bool {
        let mut all = true;
        for piece in &mut self.pieces {
            piece.correct = piece.within_tolerance();
            all &= piece.correct;
        }
        if all {
            self.completed = true;
        }
        all
    }
}

pub struct PuzzleScene {
    board: Option<PuzzleBoard>,
    image: Option<Texture>,
    show_complete: bool,
    complete_alpha: u8,
    gate: ClickGate,
    slot: TransitionSlot,
}

impl PuzzleScene {
    pub fn new(ctx: &mut SceneCtx) -> Self {
        let mut slot = TransitionSlot::new();
        let (board, image) = match ctx.assets.load_image(PUZZLE_IMAGE) {
            Ok(image) => (Some(PuzzleBoard::shuffled(&mut *ctx.rng)), Some(image)),
            Err(e) => {
                log::error!("Puzzle image unavailable, skipping to the end: {}", e);
                ctx.request(&mut slot, Transition::Goto(SceneRequest::Thanks));
                (None, None)
            }
        };

        Self {
            board,
            image,
            show_complete: false,
            complete_alpha: 0,
            gate: ClickGate::new(ctx.config.timing.click_delay()),
            slot,
        }
    }

    pub fn board(&self) -> Option<&PuzzleBoard> {
        self.board.as_ref()
    }

    pub fn board_mut(&mut self) -> Option<&mut PuzzleBoard> {
        self.board.as_mut()
    }

    pub fn message_visible(&self) -> bool {
        self.show_complete
    }
}

impl Scene for PuzzleScene {
    fn name(&self) -> &'static str {
        "Puzzle"
    }

    fn handle_input(&mut self, events: &[InputEvent], ctx: &mut SceneCtx) {
        let Some(board) = self.board.as_mut() else { return };

        for event in events {
            match *event {
                InputEvent::PointerDown { button: PointerButton::Left, pos } => {
                    if self.show_complete && self.complete_alpha == 255 && self.gate.try_accept(ctx.now()) {
                        ctx.request(&mut self.slot, Transition::Goto(SceneRequest::Video));
                        return;
                    }
                    board.pointer_down(pos);
                }
                InputEvent::PointerUp { button: PointerButton::Left, .. } => {
                    if board.pointer_up() == DropOutcome::Completed && !self.show_complete {
                        log::info!("Puzzle completed");
                        self.show_complete = true;
                        self.complete_alpha = 0;
                    }
                }
                InputEvent::PointerMove { pos } => board.pointer_move(pos),
                _ => {}
            }
        }
    }

    fn tick(&mut self, _ctx: &mut SceneCtx) {
        if self.show_complete {
            self.complete_alpha = self.complete_alpha.saturating_add(FADE_SPEED);
        }
    }

    fn render(&self, ui: &mut dyn UiRenderer) {
        let (w, _) = ui.size();
        ui.clear(Color::rgb(240, 240, 240));

        let (Some(board), Some(image)) = (&self.board, &self.image) else { return };

        Label::new(PUZZLE_TITLE).show(ui, Rect::new(20.0, 20.0, 400.0, 30.0));
        Label::new(PUZZLE_INSTRUCTION)
            .color(Color::GRAY)
            .show(ui, Rect::new(20.0, 60.0, 400.0, 30.0));

        Panel::new().image(image.id(), 255).show(ui, REFERENCE);
        Panel::new().transparent().stroke(Color::GRAY, 2.0).show(ui, BOARD);

        for piece in board.pieces() {
            ui.draw_image(image.id(), Some(piece.source(image.size())), piece.rect, 255);
        }

        if self.show_complete {
            Panel::new()
                .color(Color::rgba(255, 255, 255, self.complete_alpha.min(200)))
                .show(ui, Rect::from_center(w / 2.0, 500.0, w, 100.0));
            Label::new(PUZZLE_DONE)
                .color(Color::rgb(0, 150, 0))
                .alpha(self.complete_alpha)
                .align(Alignment::Center)
                .show(ui, Rect::from_center(w / 2.0, 500.0, w, 40.0));

            if self.complete_alpha == 255 {
                Label::new(CONTINUE_HINT)
                    .color(Color::GRAY)
                    .align(Alignment::Center)
                    .show(ui, Rect::from_center(w / 2.0, 540.0, w, 40.0));
            }
        }
    }

    fn release(&mut self) {
        self.board = None;
        self.image = None;
    }

    fn pending_transition(&self) -> Option<&PendingTransition> {
        self.slot.get()
    }

    fn click_gate(&mut self) -> &mut ClickGate {
        &mut self.gate
    }
}
