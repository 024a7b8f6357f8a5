use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Custom,
    Xsb,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "custom" => Ok(Format::Custom),
            "xsb" => Ok(Format::Xsb),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// How remaining cost is estimated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeuristicKind {
    /// Repeatedly pairs the closest box and free goal.
    /// Fast but can overestimate so solutions are not guaranteed to be shortest.
    Greedy,
    /// Minimum cost matching of boxes to goals - admissible, finds shortest solutions.
    Optimal,
}

impl Display for HeuristicKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            HeuristicKind::Greedy => write!(f, "greedy"),
            HeuristicKind::Optimal => write!(f, "optimal"),
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(HeuristicKind::Greedy),
            "optimal" => Ok(HeuristicKind::Optimal),
            _ => Err(format!("Unknown heuristic: {}", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeadSquareMethod {
    /// Pulls a box away from every goal, whatever it can't reach is dead.
    Reachability,
    /// Only non-goal cells with walls on two perpendicular sides.
    Corners,
    /// No pruning at all.
    Disabled,
}

impl Display for DeadSquareMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            DeadSquareMethod::Reachability => write!(f, "reachability"),
            DeadSquareMethod::Corners => write!(f, "corners"),
            DeadSquareMethod::Disabled => write!(f, "disabled"),
        }
    }
}

impl FromStr for DeadSquareMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reachability" => Ok(DeadSquareMethod::Reachability),
            "corners" => Ok(DeadSquareMethod::Corners),
            "disabled" => Ok(DeadSquareMethod::Disabled),
            _ => Err(format!("Unknown dead square method: {}", s)),
        }
    }
}

/// Limits checked every time a state is taken from the frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Budget {
    pub max_visited: Option<usize>,
    pub time_limit: Option<Duration>,
}

impl Budget {
    pub fn unlimited() -> Self {
        Budget::default()
    }

    pub fn max_visited(max_visited: usize) -> Self {
        Budget {
            max_visited: Some(max_visited),
            time_limit: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub heuristic: HeuristicKind,
    pub dead_squares: DeadSquareMethod,
    pub budget: Budget,
}

impl Config {
    pub fn with_heuristic(self, heuristic: HeuristicKind) -> Self {
        Config { heuristic, ..self }
    }

    pub fn with_dead_squares(self, dead_squares: DeadSquareMethod) -> Self {
        Config {
            dead_squares,
            ..self
        }
    }

    pub fn with_budget(self, budget: Budget) -> Self {
        Config { budget, ..self }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            heuristic: HeuristicKind::Greedy,
            dead_squares: DeadSquareMethod::Reachability,
            budget: Budget::unlimited(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_names() {
        for &h in &[HeuristicKind::Greedy, HeuristicKind::Optimal] {
            assert_eq!(h.to_string().parse::<HeuristicKind>(), Ok(h));
        }
        for &m in &[
            DeadSquareMethod::Reachability,
            DeadSquareMethod::Corners,
            DeadSquareMethod::Disabled,
        ] {
            assert_eq!(m.to_string().parse::<DeadSquareMethod>(), Ok(m));
        }
        assert!("manhattan".parse::<HeuristicKind>().is_err());
        assert_eq!("custom".parse::<Format>(), Ok(Format::Custom));
    }

    #[test]
    fn builder() {
        let config = Config::default()
            .with_heuristic(HeuristicKind::Optimal)
            .with_budget(Budget::max_visited(10));
        assert_eq!(config.heuristic, HeuristicKind::Optimal);
        assert_eq!(config.dead_squares, DeadSquareMethod::Reachability);
        assert_eq!(config.budget.max_visited, Some(10));
        assert_eq!(config.budget.time_limit, None);
    }
}
