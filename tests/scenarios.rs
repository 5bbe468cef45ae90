use rand::rngs::StdRng;
use rand::SeedableRng;

use snake::food::Food;
use snake::grid::{Board, Cell, Direction};
use snake::input::{InputEvent, Key};
use snake::render::Palette;
use snake::snake::Snake;
use snake::{Config, Game, TickOutcome};

fn game(board: Board, snake: Snake, food: Cell, seed: u64) -> Game<StdRng> {
    Game::with_state(board, Palette::default(), snake, Food::at(food), StdRng::seed_from_u64(seed))
}

#[test]
fn new_game_starts_centered_heading_right() {
    let game = Game::new(&Config::default(), StdRng::seed_from_u64(42));
    assert_eq!(game.snake().body().iter().copied().collect::<Vec<_>>(), vec![Cell::new(320, 240)]);
    assert_eq!(game.snake().direction(), Direction::Right);
    assert!(!game.snake().occupies(game.food().position()));
}

#[test]
fn first_tick_moves_right_without_growing() {
    let board = Board::default();
    let mut game = game(board, Snake::new(&board), Cell::new(0, 0), 0);

    assert_eq!(game.tick(Vec::new()), TickOutcome::Running);
    assert_eq!(game.snake().head(), Cell::new(340, 240));
    assert_eq!(game.snake().body().len(), 1);
    assert_eq!(game.snake().length(), 1);
    assert_eq!(game.snake().last(), Some(Cell::new(320, 240)));
}

#[test]
fn right_edge_wraps_to_zero() {
    let board = Board::default();
    let snake = Snake::from_body(vec![Cell::new(620, 240)], Direction::Right);
    let mut game = game(board, snake, Cell::new(0, 0), 1);

    game.tick(Vec::new());
    assert_eq!(game.snake().head(), Cell::new(0, 240));
}

#[test]
fn eating_grows_and_moves_the_food() {
    let board = Board::default();
    let snake = Snake::from_body(
        vec![Cell::new(100, 100), Cell::new(80, 100), Cell::new(60, 100)],
        Direction::Right,
    );
    let mut game = game(board, snake, Cell::new(120, 100), 2);

    game.tick(Vec::new());

    let snake = game.snake();
    assert_eq!(snake.body().len(), 4);
    assert_eq!(snake.length(), 4);
    assert_eq!(snake.last(), None);
    assert_eq!(snake.body().back(), Some(&Cell::new(60, 100)));
    assert!(!snake.occupies(game.food().position()));
    assert!(board.contains(game.food().position()));
}

#[test]
fn plain_tick_keeps_length() {
    let board = Board::default();
    let snake = Snake::from_body(
        vec![Cell::new(100, 100), Cell::new(80, 100), Cell::new(60, 100)],
        Direction::Right,
    );
    let mut game = game(board, snake, Cell::new(400, 400), 3);

    for _ in 0..10 {
        game.tick(Vec::new());
        assert_eq!(game.snake().body().len(), 3);
    }
}

#[test]
fn biting_the_third_segment_resets() {
    // Three columns wide, so moving left from x = 0 wraps onto x = 40
    let board = Board::new(60, 60, 20);
    let snake = Snake::from_body(
        vec![Cell::new(0, 0), Cell::new(20, 0), Cell::new(40, 0), Cell::new(40, 20)],
        Direction::Left,
    );
    let mut game = game(board, snake, Cell::new(0, 40), 4);

    assert_eq!(game.tick(Vec::new()), TickOutcome::Reset);

    let snake = game.snake();
    assert_eq!(snake.body().len(), 1);
    assert_eq!(snake.length(), 1);
    assert_eq!(snake.head(), board.center());
    assert!(Direction::ALL.contains(&snake.direction()));
    assert_eq!(game.food().position(), Cell::new(0, 40));
}

#[test]
fn long_random_session_respects_invariants() {
    let config = Config::default();
    let board = config.board();
    let mut game = Game::new(&config, StdRng::seed_from_u64(2024));
    let keys = [Key::Up, Key::Left, Key::Down, Key::Right, Key::Other];

    for i in 0..5_000usize {
        let before = game.snake().body().len();
        let direction = game.snake().direction();
        let food = game.food().position();
        let key = keys[(i * 7 + i / 3) % keys.len()];

        let outcome = game.tick(vec![InputEvent::Key(key)]);
        let snake = game.snake();

        assert!(board.contains(snake.head()));

        match outcome {
            TickOutcome::Reset => {
                assert_eq!(snake.body().len(), 1);
                assert_eq!(snake.head(), board.center());
            }
            TickOutcome::Running => {
                // A reset may drop the snake onto the food, so only check here
                assert!(!snake.occupies(game.food().position()));
                assert!(!snake.direction().is_opposite(direction));
                if snake.head() == food {
                    assert_eq!(snake.body().len(), before + 1);
                } else {
                    assert_eq!(snake.body().len(), before);
                }
            }
            TickOutcome::Quit => unreachable!(),
        }
    }
}
