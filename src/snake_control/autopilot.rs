use crate::basic::Dir;
use crate::cell::Kind;
use crate::snake::Snake;
use crate::snake_control::Controller;
use crate::world::World;

/// Greedy player for the headless host, heads for the closest apple
/// without stepping onto anything collidable, no lookahead
#[derive(Default)]
pub struct Autopilot;

impl Controller for Autopilot {
    fn next_dir(&mut self, snake: &Snake, world: &World) -> Option<Dir> {
        let board_dim = world.dim();
        let head = snake.head().pos;
        let apples: Vec<_> = world.positions_of(Kind::Apple).collect();

        let distance_to_food = |dir: Dir| {
            let next = head.wrapping_translate(dir, 1, board_dim);
            apples
                .iter()
                .map(|apple| next.wrapping_manhattan_distance(*apple, board_dim))
                .min()
                .unwrap_or(0)
        };

        // the current direction comes first so it wins ties
        let current = snake.dir();
        let [a, b] = current.turns();
        [current, a, b]
            .into_iter()
            .filter(|&dir| !world.block(head.wrapping_translate(dir, 1, board_dim)).is_collidable())
            .min_by_key(|&dir| distance_to_food(dir))
            .filter(|&dir| dir != current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::GridPoint;
    use crate::cell::{Apple, Cell};
    use crate::snake::Builder;

    fn setup() -> (Snake, World) {
        let mut world = World::new(GridPoint::new(24, 13));
        let snake = Builder::default()
            .pos(GridPoint::new(5, 2))
            .dir(Dir::Right)
            .len(4)
            .build(world.dim())
            .unwrap();
        snake.write_to(&mut world);
        (snake, world)
    }

    #[test]
    fn test_heads_for_apple() {
        let (snake, mut world) = setup();
        let apple = GridPoint::new(5, 8);
        world.set_block(apple, Cell::Apple(Apple::new(apple, 0)));
        assert_eq!(Autopilot.next_dir(&snake, &world), Some(Dir::Down));
    }

    #[test]
    fn test_keeps_going_when_aligned() {
        let (snake, mut world) = setup();
        let apple = GridPoint::new(12, 2);
        world.set_block(apple, Cell::Apple(Apple::new(apple, 0)));
        assert_eq!(Autopilot.next_dir(&snake, &world), None);
    }

    #[test]
    fn test_avoids_rocks() {
        let (snake, mut world) = setup();
        let apple = GridPoint::new(12, 2);
        world.set_block(apple, Cell::Apple(Apple::new(apple, 0)));
        world.set_block(GridPoint::new(6, 2), Cell::Rock);
        assert!(matches!(Autopilot.next_dir(&snake, &world), Some(Dir::Top | Dir::Down)));
    }
}
