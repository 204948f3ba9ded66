use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }
}

/// What a click did to the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The session does not accept clicks right now, or the click was off the board.
    Ignored,
    /// The clicked cell was already revealed.
    NoChange,
    Revealed,
    Won,
    Lost,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            Ignored => false,
            NoChange => false,
            Revealed => true,
            Won => true,
            Lost => true,
        }
    }
}

/// One game from the start button to a win or a loss.
///
/// A session is never reset, starting over means creating a new one.
#[derive(Clone, Debug)]
pub struct GameSession<G = RandomMineGenerator> {
    config: GameConfig,
    board: Board,
    state: SessionState,
    mines: CellCount,
    first_click_done: bool,
    triggered_mine: Option<Coord2>,
    generator: G,
}

impl<G: MineGenerator> GameSession<G> {
    pub fn new(generator: G) -> Self {
        let config = GameConfig::default();
        Self {
            board: Board::new(config.size),
            config,
            state: SessionState::NotStarted,
            mines: 0,
            first_click_done: false,
            triggered_mine: None,
            generator,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of mines requested when the game was started.
    pub fn mines(&self) -> CellCount {
        self.mines
    }

    /// Mines still hidden on the board.
    pub fn mines_remaining(&self) -> CellCount {
        if self.board.is_populated() {
            self.board.hidden_mine_count()
        } else {
            self.mines
        }
    }

    pub fn first_click_done(&self) -> bool {
        self.first_click_done
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Validates the typed mine count and, if it is acceptable, sets up a fresh board.
    ///
    /// On error the session stays in [`SessionState::NotStarted`]. A session that already
    /// started ignores further calls.
    pub fn start(
        &mut self,
        config: GameConfig,
        mines_input: &str,
    ) -> core::result::Result<(), ValidationError> {
        if self.state != SessionState::NotStarted {
            log::warn!("Session already {:?}, ignoring start", self.state);
            return Ok(());
        }

        let mines = config.parse_mines(mines_input).inspect_err(|err| {
            log::debug!("Rejected mine count {:?}: {}", mines_input, err);
        })?;
        self.begin(config, mines);
        Ok(())
    }

    /// Same as [`GameSession::start`] for a mine count that is already a number.
    pub fn start_with_mines(
        &mut self,
        config: GameConfig,
        mines: CellCount,
    ) -> core::result::Result<(), ValidationError> {
        if self.state != SessionState::NotStarted {
            log::warn!("Session already {:?}, ignoring start", self.state);
            return Ok(());
        }

        let mines = config.validate_mines(mines)?;
        self.begin(config, mines);
        Ok(())
    }

    fn begin(&mut self, config: GameConfig, mines: CellCount) {
        log::debug!(
            "Starting {}x{} game with {} mines",
            config.size.0,
            config.size.1,
            mines
        );
        self.board = Board::new(config.size);
        self.config = config;
        self.mines = mines;
        self.first_click_done = false;
        self.triggered_mine = None;
        self.state = SessionState::InProgress;
    }

    /// Reveals the clicked cell and drives the game to its next state.
    ///
    /// The very first click populates the board around the clicked cell, so it can never hit
    /// a mine.
    pub fn handle_click<R: Renderer + ?Sized>(
        &mut self,
        coords: Coord2,
        renderer: &mut R,
    ) -> ClickOutcome {
        if !self.state.is_in_progress() {
            log::debug!("Ignoring click at {:?}, game is {:?}", coords, self.state);
            return ClickOutcome::Ignored;
        }

        if let Err(err) = self.board.validate_coords(coords) {
            log::warn!("Ignoring click: {}", err);
            return ClickOutcome::Ignored;
        }

        if !self.first_click_done {
            if let Err(err) = self.generator.populate(&mut self.board, self.mines, coords) {
                log::error!("Could not place mines: {}", err);
                return ClickOutcome::Ignored;
            }
            self.first_click_done = true;
        }

        let reveal = match self.board.reveal(coords) {
            Ok(reveal) => reveal,
            Err(err) => {
                log::warn!("Ignoring click: {}", err);
                return ClickOutcome::Ignored;
            }
        };

        for cell in &reveal.cells {
            renderer.draw_cell(cell, CellHighlight::Revealed);
        }

        match reveal.outcome {
            RevealOutcome::HitMine => {
                log::debug!("Hit mine at {:?}", coords);
                self.triggered_mine = Some(coords);
                renderer.draw_cell(&self.board.cell_at(coords), CellHighlight::Triggered);
                self.finish(GameResult::Lost, renderer);
                ClickOutcome::Lost
            }
            RevealOutcome::Continue if self.board.remaining_hidden_non_mine_cells() == 0 => {
                self.finish(GameResult::Won, renderer);
                ClickOutcome::Won
            }
            RevealOutcome::Continue if reveal.is_unchanged() => ClickOutcome::NoChange,
            RevealOutcome::Continue => {
                log::trace!(
                    "Revealed {} cells, {} safe cells left",
                    reveal.cells.len(),
                    self.board.remaining_hidden_non_mine_cells()
                );
                ClickOutcome::Revealed
            }
        }
    }

    fn finish<R: Renderer + ?Sized>(&mut self, result: GameResult, renderer: &mut R) {
        self.state = match result {
            GameResult::Won => SessionState::Won,
            GameResult::Lost => SessionState::Lost,
        };

        let rest = self.board.reveal_all();
        for cell in &rest {
            renderer.draw_cell(cell, CellHighlight::Revealed);
        }
        log::debug!("Game ended: {:?}, revealed {} remaining cells", result, rest.len());

        renderer.game_over(result);
    }
}
