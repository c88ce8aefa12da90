//! The state that changes from tick to tick.

use crate::config::Config;

#[derive(Debug, Clone,Copy, PartialEq)]
pub struct Ball {
    /// top left corner, in screen coordinates
    pub pos: [f32;2],
    pub rightward: bool,
    pub downward: bool,
}

#[derive(Debug, Clone,Copy, PartialEq)]
pub struct SimulationState {
    /// offset from the center of the screen
    pub door: [f32;2],
    pub ball: Option<Ball>,
}

/// Move one step along an axis and bounce off either end of `[0, max]`.
fn bounce(pos: &mut f32,  forward: &mut bool,  step: f32,  max: f32) {
    *pos += if *forward {step} else {-step};
    if *pos > max {
        *pos = max;
        *forward = false;
    } else if *pos < 0.0 {
        *pos = 0.0;
        *forward = true;
    }
}

impl SimulationState {
    pub fn new(config: &Config) -> Self {
        SimulationState {
            door: [0.0, 0.0],
            ball: match config.include_ball {
                true => Some(Ball { pos: [0.0, 0.0], rightward: true, downward: true }),
                false => None,
            },
        }
    }

    /// Advance one tick. `wheel_dy` is the scrolling since the previous tick.
    pub fn step(&mut self,  config: &Config,  wheel_dy: f32) {
        self.door[1] += wheel_dy;

        if let Some(ball) = &mut self.ball {
            let [max_x, max_y] = config.ball_bounds();
            bounce(&mut ball.pos[0], &mut ball.rightward, config.step, max_x);
            bounce(&mut ball.pos[1], &mut ball.downward, config.step, max_y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball(state: &SimulationState) -> Ball {
        state.ball.expect("ball is enabled")
    }

    #[test]
    fn first_tick_moves_diagonally() {
        let mut state = SimulationState::new(&Config::WHEEL);
        state.step(&Config::WHEEL, 0.0);
        assert_eq!(ball(&state), Ball { pos: [2.0, 2.0], rightward: true, downward: true });
    }

    #[test]
    fn bounces_off_the_right_edge() {
        let config = Config::WHEEL;
        let mut state = SimulationState::new(&config);
        state.ball = Some(Ball { pos: [1130.0, 100.0], rightward: true, downward: true });

        state.step(&config, 0.0);
        // exactly at the edge is not past it
        assert_eq!(ball(&state).pos[0], 1132.0);
        assert!(ball(&state).rightward);

        state.step(&config, 0.0);
        assert_eq!(ball(&state).pos[0], 1132.0);
        assert!(!ball(&state).rightward);

        state.step(&config, 0.0);
        assert_eq!(ball(&state).pos[0], 1130.0);
    }

    #[test]
    fn reaches_the_right_edge_from_the_start() {
        let config = Config::WHEEL;
        let mut state = SimulationState::new(&config);
        for _ in 0..566 {
            state.step(&config, 0.0);
        }
        assert_eq!(ball(&state).pos[0], 1132.0);
        assert!(ball(&state).rightward);
        state.step(&config, 0.0);
        assert_eq!(ball(&state).pos[0], 1132.0);
        assert!(!ball(&state).rightward);
    }

    #[test]
    fn bounces_off_the_top_left_corner_in_one_tick() {
        let config = Config::WHEEL;
        let mut state = SimulationState::new(&config);
        state.ball = Some(Ball { pos: [1.0, 1.0], rightward: false, downward: false });
        state.step(&config, 0.0);
        assert_eq!(ball(&state), Ball { pos: [0.0, 0.0], rightward: true, downward: true });
        state.step(&config, 0.0);
        assert_eq!(ball(&state).pos, [2.0, 2.0]);
    }

    #[test]
    fn bottom_edge_flips_only_y() {
        let config = Config::WHEEL;
        let mut state = SimulationState::new(&config);
        state.ball = Some(Ball { pos: [500.0, 699.0], rightward: true, downward: true });
        state.step(&config, 0.0);
        assert_eq!(ball(&state), Ball { pos: [502.0, 700.0], rightward: true, downward: false });
    }

    #[test]
    fn wheel_moves_door() {
        let config = Config::WHEEL;
        let mut state = SimulationState::new(&config);
        for dy in [5.0, -3.0, 2.0] {
            state.step(&config, dy);
        }
        assert_eq!(state.door, [0.0, 4.0]);
    }

    #[test]
    fn door_only_has_no_ball() {
        let config = Config::DOOR_ONLY;
        let mut state = SimulationState::new(&config);
        state.step(&config, -1.5);
        assert_eq!(state, SimulationState { door: [0.0, -1.5], ball: None });
    }

    proptest! {
        #[test]
        fn ball_stays_on_screen(ticks in 0usize..3000,  step in 0.5f32..50.0) {
            let config = Config { step, ..Config::WHEEL };
            let [max_x, max_y] = config.ball_bounds();
            let mut state = SimulationState::new(&config);
            for _ in 0..ticks {
                state.step(&config, 0.0);
                let [x, y] = ball(&state).pos;
                prop_assert!((0.0..=max_x).contains(&x));
                prop_assert!((0.0..=max_y).contains(&y));
            }
        }

        #[test]
        fn door_is_the_sum_of_wheel_deltas(deltas in prop::collection::vec(-100i32..100, 0..200)) {
            let config = Config::DOOR_ONLY;
            let mut state = SimulationState::new(&config);
            for &dy in &deltas {
                state.step(&config, dy as f32);
            }
            prop_assert_eq!(state.door[1], deltas.iter().sum::<i32>() as f32);
        }
    }
}
