//! # Random Machine Generation
//!
//! This module generates random machines that always have a solution. Each
//! machine starts with every light off and is scrambled by pressing randomly
//! chosen buttons, so undoing those presses switches it off again.

use crate::lights::{Button, Lights};
use crate::machine::Machine;
use rand::seq::index;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// Number of lights per machine. Must be positive.
    pub lights: usize,
    /// Number of buttons per machine.
    pub buttons: usize,
    /// Number of random presses used to scramble the lights.
    pub presses: usize,
}

/// Generates one machine.
///
/// Every button toggles a random non-empty set of lights. The joltage list
/// counts how many of the scrambling presses touched each light.
pub fn generate_machine<R: Rng>(rng: &mut R, params: &Params) -> Machine {
    assert!(params.lights > 0, "a machine needs at least one light");
    let buttons: Vec<Button> = (0..params.buttons)
        .map(|_| {
            let amount = rng.random_range(1..=params.lights);
            let picked = index::sample(&mut *rng, params.lights, amount);
            Button::from_indices(params.lights, picked)
        })
        .collect();

    let mut lights = Lights::off(params.lights);
    let mut joltage = vec![0u64; params.lights];
    if !buttons.is_empty() {
        for _ in 0..params.presses {
            let button = &buttons[rng.random_range(0..buttons.len())];
            lights ^= button.flips();
            for i in button.flips().iter_on() {
                joltage[i] += 1;
            }
        }
    }

    Machine {
        lights,
        buttons,
        joltage,
    }
}

/// Generates `n_machines` machines.
///
/// # Arguments
/// * `seed` - An optional seed for the random number generator for reproducibility.
pub fn generate(n_machines: usize, params: &Params, seed: Option<u64>) -> Vec<Machine> {
    let mut rng = match seed {
        Some(s) => rand::rngs::StdRng::seed_from_u64(s),
        None => rand::rngs::StdRng::from_os_rng(),
    };
    (0..n_machines)
        .map(|_| generate_machine(&mut rng, params))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: Params = Params {
        lights: 8,
        buttons: 6,
        presses: 5,
    };

    #[test]
    fn same_seed_same_machines() {
        assert_eq!(generate(5, &PARAMS, Some(42)), generate(5, &PARAMS, Some(42)));
    }

    #[test]
    fn generated_machines_are_solvable() {
        let machines = generate(50, &PARAMS, Some(123));
        assert_eq!(machines.len(), 50);
        for m in &machines {
            assert_eq!(m.num_lights(), PARAMS.lights);
            assert_eq!(m.buttons.len(), PARAMS.buttons);
            assert!(m.buttons.iter().all(|b| b.flips().count_on() > 0));
            // A light ends up on exactly when an odd number of presses touched it.
            for (i, &j) in m.joltage.iter().enumerate() {
                assert_eq!(m.lights.get(i), j % 2 == 1);
            }
            let presses = m.min_presses().unwrap();
            assert!(presses <= PARAMS.presses, "{} needs {}", m, presses);
        }
    }

    #[test]
    fn generated_lines_parse_back() {
        for m in generate(10, &PARAMS, Some(7)) {
            assert_eq!(m.to_string().parse::<Machine>().unwrap(), m);
        }
    }

    #[test]
    fn wide_machines_are_solvable() {
        let params = Params {
            lights: 80,
            buttons: 10,
            presses: 3,
        };
        for m in generate(5, &params, Some(9)) {
            assert!(m.initial().as_u64().is_none());
            assert!(m.min_presses().unwrap() <= params.presses);
        }
    }

    #[test]
    fn no_buttons_leaves_lights_off() {
        let params = Params {
            lights: 3,
            buttons: 0,
            presses: 4,
        };
        let m = generate(1, &params, Some(1)).remove(0);
        assert!(m.initial().is_off());
        assert_eq!(m.joltage, vec![0, 0, 0]);
        assert_eq!(m.min_presses(), Ok(0));
    }
}
