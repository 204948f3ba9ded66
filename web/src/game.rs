use blocksweeper_core as game;
use clap::Args;
use game::{
    CellCount, Coord, GameConfig, GameSession, RandomMineGenerator, SessionState, ValidationError,
};
use web_sys::{HtmlCanvasElement, HtmlInputElement};
use yew::prelude::*;

use crate::canvas::{CanvasRenderer, result_message};
use crate::layout::CellLayout;

const DEFAULT_MINES_INPUT: &str = "10";

/// Seed for a new game from JavaScript's Math.random.
fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let half = || (random() * f64::from(u32::MAX)) as u64;
    (half() << 32) | half()
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of columns
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE.0)]
    pub cols: Coord,

    /// Number of rows
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE.1)]
    pub rows: Coord,

    /// Smallest accepted number of mines
    #[arg(long, default_value_t = GameConfig::DEFAULT_MIN_MINES)]
    pub min_mines: CellCount,

    /// Largest accepted number of mines
    #[arg(long, default_value_t = GameConfig::DEFAULT_MAX_MINES)]
    pub max_mines: CellCount,

    /// Cell edge in pixels
    #[arg(long, default_value_t = 50)]
    pub cell_size: u32,
}

impl GameProps {
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new((self.cols, self.rows), self.min_mines, self.max_mines)
    }

    fn layout(&self, config: &GameConfig) -> CellLayout {
        CellLayout::new(
            config.size,
            self.cell_size,
            self.cell_size,
            CellLayout::DEFAULT_MARGIN,
        )
    }

    fn new_session(&self) -> GameSession {
        let seed = self.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);
        GameSession::new(RandomMineGenerator::new(seed))
    }

    /// Builds a brand new session and starts it with the typed mine count.
    ///
    /// The session is returned even when the input is rejected, it then stays
    /// [`SessionState::NotStarted`].
    fn start_session(&self, mines_input: &str) -> (GameSession, Result<(), ValidationError>) {
        let mut session = self.new_session();
        let started = session.start(self.game_config(), mines_input);
        (session, started)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Redraw {
    Grid,
    Clear,
}

pub(crate) enum Msg {
    UpdateMines(String),
    Start,
    Click { x: i32, y: i32 },
}

fn status_text(session: &GameSession) -> String {
    match session.state() {
        SessionState::NotStarted => "Choose the number of bombs and press Start".to_string(),
        SessionState::InProgress => format!("{} bombs hidden", session.mines_remaining()),
        SessionState::Won => result_message(game::GameResult::Won).to_string(),
        SessionState::Lost => result_message(game::GameResult::Lost).to_string(),
    }
}

/// Form, notice and canvas of the game, owning the current session.
pub(crate) struct GameView {
    session: GameSession,
    mines_input: String,
    notice: Option<String>,
    layout: CellLayout,
    canvas: NodeRef,
    pending_redraw: Option<Redraw>,
}

impl GameView {
    fn canvas_renderer(&self) -> Option<CanvasRenderer> {
        let canvas = self.canvas.cast::<HtmlCanvasElement>()?;
        CanvasRenderer::new(&canvas, self.layout)
    }

    /// Replaces the session with a brand new one, the old board is dropped entirely.
    fn restart(&mut self, props: &GameProps) {
        let (session, started) = props.start_session(&self.mines_input);

        self.layout = props.layout(&props.game_config());
        self.session = session;
        match started {
            Ok(()) => {
                log::debug!("game started with {} mines", self.session.mines());
                self.notice = None;
                self.pending_redraw = Some(Redraw::Grid);
            }
            Err(err) => {
                log::debug!("invalid mine count: {}", err);
                self.notice = Some(err.to_string());
                self.pending_redraw = Some(Redraw::Clear);
            }
        }
    }

    fn click(&mut self, x: i32, y: i32) -> bool {
        let Some(coords) = self.layout.cell_at_pixel(x, y) else {
            log::trace!("click at ({}, {}) is off the board", x, y);
            return false;
        };
        let Some(mut renderer) = self.canvas_renderer() else {
            return false;
        };

        let outcome = self.session.handle_click(coords, &mut renderer);
        log::debug!("click {:?}: {:?}", coords, outcome);
        outcome.has_update()
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let config = props.game_config();
        Self {
            session: props.new_session(),
            mines_input: DEFAULT_MINES_INPUT.to_string(),
            notice: None,
            layout: props.layout(&config),
            canvas: NodeRef::default(),
            pending_redraw: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateMines(value) => {
                self.mines_input = value;
                false
            }
            Msg::Start => {
                self.restart(ctx.props());
                true
            }
            Msg::Click { x, y } => self.click(x, y),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (width, height) = self.layout.canvas_size();

        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateMines(input.value())
        });
        let onstart = ctx.link().callback(|_: MouseEvent| Msg::Start);
        let onclick = ctx.link().callback(|e: MouseEvent| Msg::Click {
            x: e.offset_x(),
            y: e.offset_y(),
        });

        html! {
            <div class="blocksweeper">
                <nav>
                    <label for="bombs">{"Bombs"}</label>
                    <input id="bombs" type="text" value={self.mines_input.clone()} {oninput}/>
                    <button id="start" type="button" onclick={onstart}>{"Start"}</button>
                </nav>
                <div id="notice">{ self.notice.clone().unwrap_or_default() }</div>
                <canvas
                    id="canvas"
                    ref={self.canvas.clone()}
                    width={width.to_string()}
                    height={height.to_string()}
                    {onclick}
                />
                <p class="status">{ status_text(&self.session) }</p>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        let Some(redraw) = self.pending_redraw.take() else {
            return;
        };
        let Some(renderer) = self.canvas_renderer() else {
            log::error!("canvas is not available");
            return;
        };
        match redraw {
            Redraw::Grid => renderer.draw_hidden_grid(),
            Redraw::Clear => renderer.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use blocksweeper_core::{Cell, CellHighlight, ClickOutcome, Renderer};

    struct NoopRenderer;

    impl Renderer for NoopRenderer {
        fn draw_cell(&mut self, _cell: &Cell, _highlight: CellHighlight) {}
    }

    #[derive(Parser, Debug)]
    struct Cli {
        #[command(flatten)]
        game: GameProps,
    }

    fn parse(args: &[&str]) -> GameProps {
        Cli::try_parse_from(std::iter::once("").chain(args.iter().copied()))
            .unwrap()
            .game
    }

    #[test]
    fn defaults_match_the_classic_board() {
        let props = parse(&[]);

        assert_eq!(props.seed, None);
        assert_eq!(props.game_config(), GameConfig::default());
        assert_eq!(props.layout(&props.game_config()).canvas_size(), (500, 500));
    }

    #[test]
    fn board_settings_from_flags() {
        let props = parse(&["--cols=16", "--rows", "8", "--max-mines=40", "-s", "7"]);

        assert_eq!(props.seed, Some(7));
        assert_eq!(props.game_config(), GameConfig::new((16, 8), 5, 40));
    }

    #[test]
    fn status_before_start() {
        let session = GameSession::new(RandomMineGenerator::new(1));

        assert_eq!(
            status_text(&session),
            "Choose the number of bombs and press Start"
        );
    }

    #[test]
    fn status_while_playing() {
        let mut session = GameSession::new(RandomMineGenerator::new(1));
        session.start(GameConfig::default(), "12").unwrap();

        assert_eq!(status_text(&session), "12 bombs hidden");
    }

    fn tiny_board() -> GameProps {
        parse(&[
            "-s",
            "3",
            "--cols=3",
            "--rows=3",
            "--min-mines=1",
            "--max-mines=8",
        ])
    }

    /// 3x3 board with 8 mines: the first click uncovers the only safe cell and wins.
    fn finished_game(props: &GameProps) -> GameSession {
        let (mut session, started) = props.start_session("8");
        started.unwrap();
        assert_eq!(
            session.handle_click((1, 1), &mut NoopRenderer),
            ClickOutcome::Won
        );
        session
    }

    #[test]
    fn restart_replaces_a_finished_game() {
        let props = tiny_board();
        let old = finished_game(&props);

        let (session, started) = props.start_session("4");

        assert_eq!(started, Ok(()));
        assert_eq!(old.state(), SessionState::Won);
        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.mines(), 4);
        assert!(!session.first_click_done());
        assert_eq!(session.triggered_mine(), None);
        assert!(!session.board().is_populated());
        assert_eq!(session.board().revealed_count(), 0);
        assert_eq!(session.board().remaining_hidden_non_mine_cells(), 9);
    }

    #[test]
    fn rejected_restart_leaves_an_idle_game() {
        let props = tiny_board();
        let _old = finished_game(&props);

        let (session, started) = props.start_session("ten");

        let err = started.unwrap_err();
        assert_eq!(err, ValidationError::NotInteger { min: 1, max: 8 });
        assert_eq!(
            err.to_string(),
            "The input for Bombs must be an integer between 1 and 8"
        );
        assert_eq!(session.state(), SessionState::NotStarted);
        assert!(!session.board().is_populated());
        assert_eq!(
            status_text(&session),
            "Choose the number of bombs and press Start"
        );
    }
}
