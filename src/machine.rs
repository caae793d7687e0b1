//! # Machines
//!
//! One machine per input line:
//!
//! ```text
//! [.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
//! ```
//!
//! The bracketed diagram is the current state of the lights (`#` on), each
//! parenthesized group is a button listing the lights it toggles, and the
//! braced list holds the joltage requirements. The joltage list is kept so
//! lines survive a parse/print cycle, but nothing here reads it.

use crate::lights::{Button, Lights};
use crate::search::{self, SearchError};
use anyhow::Context as _;
use itertools::Itertools;
use std::fmt;
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("missing {0}")]
    MissingPart(&'static str),
    #[error("expected '{open}...{close}', got '{token}'")]
    Bracket {
        token: String,
        open: char,
        close: char,
    },
    #[error("light diagram '{0}' has no lights")]
    EmptyDiagram(String),
    #[error("could not parse '{token}' as a number")]
    NotANumber {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("button {button} toggles light {index}, but only {lights} lights exist")]
    OutOfRange {
        button: usize,
        index: usize,
        lights: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    pub lights: Lights,
    pub buttons: Vec<Button>,
    pub joltage: Vec<u64>,
}

impl Machine {
    pub fn num_lights(&self) -> usize {
        self.lights.width()
    }

    /// The configuration the search starts from: the diagram as given.
    pub fn initial(&self) -> &Lights {
        &self.lights
    }

    /// Every light off.
    pub fn target(&self) -> Lights {
        Lights::off(self.num_lights())
    }

    pub fn min_presses(&self) -> Result<usize, SearchError> {
        search::minimum_toggles(self.initial(), &self.buttons, &self.target())
    }

    pub fn shortest_presses(&self) -> Result<Vec<usize>, SearchError> {
        search::shortest_presses(self.initial(), &self.buttons, &self.target())
    }
}

fn strip_brackets(token: &str, open: char, close: char) -> Result<&str, ParseError> {
    token
        .strip_prefix(open)
        .and_then(|s| s.strip_suffix(close))
        .ok_or_else(|| ParseError::Bracket {
            token: token.to_string(),
            open,
            close,
        })
}

fn parse_numbers<T: FromStr<Err = ParseIntError>>(list: &str) -> Result<Vec<T>, ParseError> {
    list.split(',')
        .map(|v| {
            v.trim().parse().map_err(|source| ParseError::NotANumber {
                token: v.to_string(),
                source,
            })
        })
        .collect()
}

fn parse_diagram(token: &str) -> Result<Lights, ParseError> {
    let diagram = strip_brackets(token, '[', ']')?;
    if diagram.is_empty() {
        return Err(ParseError::EmptyDiagram(token.to_string()));
    }
    let width = diagram.chars().count();
    Ok(Lights::from_indices(
        width,
        diagram.chars().positions(|c| c == '#'),
    ))
}

fn parse_button(token: &str, button: usize, lights: usize) -> Result<Button, ParseError> {
    let indices: Vec<usize> = parse_numbers(strip_brackets(token, '(', ')')?)?;
    if let Some(&index) = indices.iter().find(|&&i| i >= lights) {
        return Err(ParseError::OutOfRange {
            button,
            index,
            lights,
        });
    }
    Ok(Button::from_indices(lights, indices))
}

impl FromStr for Machine {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let lights = parse_diagram(tokens.next().ok_or(ParseError::MissingPart("light diagram"))?)?;
        let joltage = tokens
            .next_back()
            .ok_or(ParseError::MissingPart("joltage requirements"))?;
        let joltage = match strip_brackets(joltage, '{', '}')? {
            "" => vec![],
            list => parse_numbers(list)?,
        };
        let buttons = tokens
            .enumerate()
            .map(|(i, token)| parse_button(token, i, lights.width()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            lights,
            buttons,
            joltage,
        })
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lights)?;
        for button in &self.buttons {
            write!(f, " {}", button)?;
        }
        write!(f, " {{{}}}", self.joltage.iter().join(","))
    }
}

/// Parses one machine per non-blank line, paired with its 1-based line
/// number in `input`.
pub fn parse_machines(input: &str) -> anyhow::Result<Vec<(usize, Machine)>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let machine = line
                .trim()
                .parse::<Machine>()
                .with_context(|| format!("line {}: {}", i + 1, line.trim()))?;
            anyhow::Ok((i + 1, machine))
        })
        .collect()
}

/// Reads and parses a puzzle file.
pub fn load_machines(path: &Path) -> anyhow::Result<Vec<(usize, Machine)>> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_machines(&input).with_context(|| format!("Invalid puzzle file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const SAMPLE: &str = "\
[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}
";

    #[test]
    fn parses_sample_line() {
        let m: Machine = "[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}"
            .parse()
            .unwrap();
        assert_eq!(m.num_lights(), 4);
        assert_eq!(m.lights, Lights::from_indices(4, [1, 2]));
        assert_eq!(m.buttons.len(), 6);
        assert_eq!(m.buttons[1], Button::from_indices(4, [1, 3]));
        assert_eq!(m.joltage, vec![3, 5, 4, 7]);
        assert_eq!(m.target(), Lights::off(4));
        assert_eq!(
            m.to_string(),
            "[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}"
        );
    }

    #[test]
    fn sample_press_counts() {
        let machines = parse_machines(SAMPLE).unwrap();
        let presses = machines
            .iter()
            .map(|(_, m)| m.min_presses().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(presses, vec![2, 3, 2]);
        for (_, m) in &machines {
            let seq = m.shortest_presses().unwrap();
            assert_eq!(seq.len(), m.min_presses().unwrap());
            assert!(search::check_presses(
                m.initial(),
                &m.buttons,
                &seq,
                &m.target()
            ));
        }
    }

    #[test]
    fn solving_twice_gives_the_same_answer() {
        let line = SAMPLE.lines().nth(1).unwrap();
        let first = line.parse::<Machine>().unwrap().min_presses().unwrap();
        let second = line.parse::<Machine>().unwrap().min_presses().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn any_other_character_is_off() {
        let m: Machine = "[#x#-] (0) (2) {1}".parse().unwrap();
        assert_eq!(m.lights, Lights::from_indices(4, [0, 2]));
        assert_eq!(m.min_presses(), Ok(2));
    }

    #[test]
    fn machine_without_buttons() {
        let m: Machine = "[#] {1}".parse().unwrap();
        assert!(m.buttons.is_empty());
        assert!(matches!(
            m.min_presses(),
            Err(SearchError::Unreachable { .. })
        ));
        let m: Machine = "[...] {}".parse().unwrap();
        assert!(m.joltage.is_empty());
        assert_eq!(m.min_presses(), Ok(0));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(
            "".parse::<Machine>(),
            Err(ParseError::MissingPart("light diagram"))
        );
        assert_eq!(
            "[.#]".parse::<Machine>(),
            Err(ParseError::MissingPart("joltage requirements"))
        );
        assert!(matches!(
            ".#. (0) {1}".parse::<Machine>(),
            Err(ParseError::Bracket { open: '[', .. })
        ));
        assert!(matches!(
            "[] (0) {1}".parse::<Machine>(),
            Err(ParseError::EmptyDiagram(_))
        ));
        assert!(matches!(
            "[.#] 0,1 {1}".parse::<Machine>(),
            Err(ParseError::Bracket { open: '(', .. })
        ));
        assert!(matches!(
            "[.#] (0,x) {1}".parse::<Machine>(),
            Err(ParseError::NotANumber { .. })
        ));
        assert!(matches!(
            "[.#] (0) 3,4".parse::<Machine>(),
            Err(ParseError::Bracket { open: '{', .. })
        ));
        assert_eq!(
            "[.#] (0) (1,2) {1}".parse::<Machine>(),
            Err(ParseError::OutOfRange {
                button: 1,
                index: 2,
                lights: 2,
            })
        );
    }

    #[test]
    fn parse_errors_carry_line_numbers() {
        let err = parse_machines("[#] (0) {1}\n\n[#] (1) {1}\n").unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.starts_with("line 3: [#] (1) {1}"), "{}", msg);
        assert!(msg.contains("only 1 lights exist"), "{}", msg);
    }

    #[test]
    fn machines_keep_their_source_lines() {
        let machines = parse_machines("\n[#] (0) {1}\n   \n\n[##] (0) (1) {1,1}\n").unwrap();
        let lines = machines.iter().map(|(line, _)| *line).collect::<Vec<_>>();
        assert_eq!(lines, vec![2, 5]);
        assert_eq!(machines[1].1.num_lights(), 2);
    }

    #[test]
    fn load_machines_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();
        let machines = load_machines(file.path()).unwrap();
        assert_eq!(machines.len(), 3);
        assert_eq!(machines[2].0, 3);
        assert_eq!(machines[2].1.num_lights(), 6);
    }

    #[test]
    fn load_machines_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_machines(&dir.path().join("nope.txt")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
