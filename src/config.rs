use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Uninformed breadth-first search - fewest moves, every edge counts as 1.
    MoveOptimal,
    /// Best-first search on accumulated terrain cost plus Manhattan distance.
    CostOptimal,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::MoveOptimal => write!(f, "move-optimal"),
            Method::CostOptimal => write!(f, "cost-optimal"),
        }
    }
}
